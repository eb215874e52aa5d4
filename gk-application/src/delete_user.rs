use super::*;

pub fn delete_user(
    connections: &sqlite::Connections,
    image_store: &dyn ImageStore,
    id: &Id,
) -> Result<()> {
    let picture_url = {
        let db = connections.exclusive()?;
        usecases::delete_user(&db, id)?
    };
    if let Some(url) = picture_url {
        if let Err(err) = image_store.remove(&url) {
            warn!("Failed to remove the picture of deleted user {id}: {err}");
        }
    }
    Ok(())
}
