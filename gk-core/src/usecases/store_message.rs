use super::prelude::*;

#[derive(Debug, Clone)]
pub struct MessagePayload {
    pub user_id: Id,
    pub garden_id: Id,
    pub body: String,
}

pub fn create_message<R: MessageRepo>(repo: &R, p: MessagePayload) -> Result<Message> {
    if p.body.trim().is_empty() {
        return Err(Error::EmptyMessage);
    }
    let message = Message {
        id: Id::new(),
        user_id: p.user_id,
        garden_id: p.garden_id,
        body: p.body,
        created_at: Timestamp::now(),
    };
    repo.create_message(&message)?;
    Ok(message)
}

pub fn update_message<R: MessageRepo>(repo: &R, id: &Id, p: MessagePayload) -> Result<Message> {
    if p.body.trim().is_empty() {
        return Err(Error::EmptyMessage);
    }
    let old = repo.get_message(id)?;
    let message = Message {
        id: old.id,
        user_id: p.user_id,
        garden_id: p.garden_id,
        body: p.body,
        created_at: old.created_at,
    };
    repo.update_message(&message)?;
    Ok(message)
}
