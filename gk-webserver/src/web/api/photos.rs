use super::*;

#[get("/photos")]
pub fn get_photos(
    db: sqlite::Connections,
    _account: Account,
    base_url: BaseUrl,
) -> Result<Vec<json::Photo>> {
    let photos = db.shared()?.all_photos()?;
    Ok(Json(
        photos
            .into_iter()
            .map(|p| to_json::photo(base_url.as_str(), p))
            .collect(),
    ))
}

#[get("/photos/<id>")]
pub fn get_photo(
    db: sqlite::Connections,
    _account: Account,
    base_url: BaseUrl,
    id: String,
) -> Result<json::Photo> {
    let photo = db.shared()?.get_photo(&Id::from(id))?;
    Ok(Json(to_json::photo(base_url.as_str(), photo)))
}

#[post("/photos", format = "application/json", data = "<new_photo>")]
pub fn post_photo(
    db: sqlite::Connections,
    _account: Account,
    base_url: BaseUrl,
    new_photo: JsonResult<json::NewPhoto>,
) -> CreatedResult<json::Photo> {
    let photo = usecases::create_photo(&db.exclusive()?, new_photo?.into_inner().url)?;
    Ok((
        Status::Created,
        Json(to_json::photo(base_url.as_str(), photo)),
    ))
}

#[put("/photos/<id>", format = "application/json", data = "<update>")]
pub fn put_photo(
    db: sqlite::Connections,
    _account: Account,
    base_url: BaseUrl,
    id: String,
    update: JsonResult<json::NewPhoto>,
) -> Result<json::Photo> {
    let photo = usecases::update_photo(&db.exclusive()?, &Id::from(id), update?.into_inner().url)?;
    Ok(Json(to_json::photo(base_url.as_str(), photo)))
}

#[delete("/photos/<id>")]
pub fn delete_photo(db: sqlite::Connections, _account: Account, id: String) -> StatusResult {
    db.exclusive()?.delete_photo(&Id::from(id))?;
    Ok(Status::NoContent)
}
