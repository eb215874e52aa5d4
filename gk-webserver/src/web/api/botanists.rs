use super::*;

#[get("/botanists")]
pub fn get_botanists(
    db: sqlite::Connections,
    _account: Account,
    base_url: BaseUrl,
) -> Result<Vec<json::Botanist>> {
    let botanists = db.shared()?.all_botanists()?;
    Ok(Json(
        botanists
            .into_iter()
            .map(|(b, u)| to_json::botanist(base_url.as_str(), b, u))
            .collect(),
    ))
}

#[get("/botanists/<id>")]
pub fn get_botanist(
    db: sqlite::Connections,
    _account: Account,
    base_url: BaseUrl,
    id: String,
) -> Result<json::Botanist> {
    let (botanist, user) = db.shared()?.get_botanist(&Id::from(id))?;
    Ok(Json(to_json::botanist(base_url.as_str(), botanist, user)))
}

#[post("/botanists", format = "application/json", data = "<new_botanist>")]
pub fn post_botanist(
    db: sqlite::Connections,
    _account: Account,
    base_url: BaseUrl,
    new_botanist: JsonResult<json::NewBotanist>,
) -> CreatedResult<json::Botanist> {
    let payload = from_json::botanist_payload(new_botanist?.into_inner());
    let (botanist, user) = {
        let db = db.exclusive()?;
        let botanist = usecases::create_botanist(&db, payload)?;
        db.get_botanist(&botanist.id)?
    };
    Ok((
        Status::Created,
        Json(to_json::botanist(base_url.as_str(), botanist, user)),
    ))
}

#[put("/botanists/<id>", format = "application/json", data = "<update>")]
pub fn put_botanist(
    db: sqlite::Connections,
    _account: Account,
    base_url: BaseUrl,
    id: String,
    update: JsonResult<json::NewBotanist>,
) -> Result<json::Botanist> {
    let payload = from_json::botanist_payload(update?.into_inner());
    let (botanist, user) = {
        let db = db.exclusive()?;
        let botanist = usecases::update_botanist(&db, &Id::from(id), payload)?;
        db.get_botanist(&botanist.id)?
    };
    Ok(Json(to_json::botanist(base_url.as_str(), botanist, user)))
}

#[delete("/botanists/<id>")]
pub fn delete_botanist(db: sqlite::Connections, _account: Account, id: String) -> StatusResult {
    db.exclusive()?.delete_botanist(&Id::from(id))?;
    Ok(Status::NoContent)
}
