use super::*;

#[get("/tags")]
pub fn get_tags(db: sqlite::Connections, _account: Account) -> Result<Vec<json::Tag>> {
    let tags = db.shared()?.all_tags()?;
    Ok(Json(tags.into_iter().map(Into::into).collect()))
}

#[get("/tags/<id>")]
pub fn get_tag(db: sqlite::Connections, _account: Account, id: String) -> Result<json::Tag> {
    let tag = db.shared()?.get_tag(&Id::from(id))?;
    Ok(Json(tag.into()))
}

#[post("/tags", format = "application/json", data = "<new_tag>")]
pub fn post_tag(
    db: sqlite::Connections,
    _account: Account,
    new_tag: JsonResult<json::NewTag>,
) -> CreatedResult<json::Tag> {
    let tag = usecases::create_tag(&db.exclusive()?, new_tag?.into_inner().name)?;
    Ok((Status::Created, Json(tag.into())))
}

#[put("/tags/<id>", format = "application/json", data = "<update>")]
pub fn put_tag(
    db: sqlite::Connections,
    _account: Account,
    id: String,
    update: JsonResult<json::NewTag>,
) -> Result<json::Tag> {
    let tag = usecases::update_tag(&db.exclusive()?, &Id::from(id), update?.into_inner().name)?;
    Ok(Json(tag.into()))
}

#[delete("/tags/<id>")]
pub fn delete_tag(db: sqlite::Connections, _account: Account, id: String) -> StatusResult {
    db.exclusive()?.delete_tag(&Id::from(id))?;
    Ok(Status::NoContent)
}
