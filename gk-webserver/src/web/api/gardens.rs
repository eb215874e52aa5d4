use super::*;

#[get("/gardens")]
pub fn get_gardens(
    db: sqlite::Connections,
    _account: Account,
    base_url: BaseUrl,
) -> Result<Vec<json::Garden>> {
    let db = db.shared()?;
    let gardens = db.all_gardens()?;
    let mut response = Vec::with_capacity(gardens.len());
    for garden in gardens {
        let sightings = db.sightings_of_garden(&garden.id)?;
        response.push(to_json::garden(base_url.as_str(), garden, sightings));
    }
    Ok(Json(response))
}

#[get("/gardens/<id>")]
pub fn get_garden(
    db: sqlite::Connections,
    _account: Account,
    base_url: BaseUrl,
    id: String,
) -> Result<json::Garden> {
    let db = db.shared()?;
    let garden = db.get_garden(&Id::from(id))?;
    let sightings = db.sightings_of_garden(&garden.id)?;
    Ok(Json(to_json::garden(base_url.as_str(), garden, sightings)))
}

#[post("/gardens", format = "application/json", data = "<new_garden>")]
pub fn post_garden(
    db: sqlite::Connections,
    _account: Account,
    base_url: BaseUrl,
    image_store: &State<Images>,
    new_garden: JsonResult<json::NewGarden>,
) -> CreatedResult<json::Garden> {
    let (payload, photos) = from_json::garden_payload(new_garden?.into_inner());
    let garden = flows::create_garden(&db, image_store.store(), payload, photos.unwrap_or_default())?;
    let sightings = db.shared()?.sightings_of_garden(&garden.id)?;
    Ok((
        Status::Created,
        Json(to_json::garden(base_url.as_str(), garden, sightings)),
    ))
}

#[put("/gardens/<id>", format = "application/json", data = "<update>")]
pub fn put_garden(
    db: sqlite::Connections,
    _account: Account,
    base_url: BaseUrl,
    image_store: &State<Images>,
    id: String,
    update: JsonResult<json::NewGarden>,
) -> Result<json::Garden> {
    let (payload, photos) = from_json::garden_payload(update?.into_inner());
    let garden = flows::update_garden(&db, image_store.store(), &Id::from(id), payload, photos)?;
    let sightings = db.shared()?.sightings_of_garden(&garden.id)?;
    Ok(Json(to_json::garden(base_url.as_str(), garden, sightings)))
}

#[delete("/gardens/<id>")]
pub fn delete_garden(
    db: sqlite::Connections,
    _account: Account,
    image_store: &State<Images>,
    id: String,
) -> StatusResult {
    flows::delete_garden(&db, image_store.store(), &Id::from(id))?;
    Ok(Status::NoContent)
}
