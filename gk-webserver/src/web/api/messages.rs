use super::*;

#[get("/messages?<garden>")]
pub fn get_messages(
    db: sqlite::Connections,
    _account: Account,
    garden: Option<String>,
) -> Result<Vec<json::Message>> {
    let db = db.shared()?;
    let messages = match garden {
        Some(garden_id) => db.messages_of_garden(&Id::from(garden_id))?,
        None => db.all_messages()?,
    };
    Ok(Json(messages.into_iter().map(Into::into).collect()))
}

#[get("/messages/<id>")]
pub fn get_message(
    db: sqlite::Connections,
    _account: Account,
    id: String,
) -> Result<json::Message> {
    let message = db.shared()?.get_message(&Id::from(id))?;
    Ok(Json(message.into()))
}

#[post("/messages", format = "application/json", data = "<new_message>")]
pub fn post_message(
    db: sqlite::Connections,
    _account: Account,
    new_message: JsonResult<json::NewMessage>,
) -> CreatedResult<json::Message> {
    let payload = from_json::message_payload(new_message?.into_inner());
    let message = usecases::create_message(&db.exclusive()?, payload)?;
    Ok((Status::Created, Json(message.into())))
}

#[put("/messages/<id>", format = "application/json", data = "<update>")]
pub fn put_message(
    db: sqlite::Connections,
    _account: Account,
    id: String,
    update: JsonResult<json::NewMessage>,
) -> Result<json::Message> {
    let payload = from_json::message_payload(update?.into_inner());
    let message = usecases::update_message(&db.exclusive()?, &Id::from(id), payload)?;
    Ok(Json(message.into()))
}

#[delete("/messages/<id>")]
pub fn delete_message(db: sqlite::Connections, _account: Account, id: String) -> StatusResult {
    db.exclusive()?.delete_message(&Id::from(id))?;
    Ok(Status::NoContent)
}
