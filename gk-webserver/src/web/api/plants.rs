use super::*;

fn plant_with_links<R: PlantRepo>(
    db: &R,
    base_url: &str,
    plant: Plant,
) -> std::result::Result<json::Plant, ApiError> {
    let tags = db.tags_of_plant(&plant.id)?;
    let photos = db.photos_of_plant(&plant.id)?;
    Ok(to_json::plant(base_url, plant, tags, photos))
}

#[get("/plants")]
pub fn get_plants(
    db: sqlite::Connections,
    _account: Account,
    base_url: BaseUrl,
) -> Result<Vec<json::Plant>> {
    let db = db.shared()?;
    let plants = db.all_plants()?;
    let mut response = Vec::with_capacity(plants.len());
    for plant in plants {
        response.push(plant_with_links(&db, base_url.as_str(), plant)?);
    }
    Ok(Json(response))
}

#[get("/plants/<id>")]
pub fn get_plant(
    db: sqlite::Connections,
    _account: Account,
    base_url: BaseUrl,
    id: String,
) -> Result<json::Plant> {
    let db = db.shared()?;
    let plant = db.get_plant(&Id::from(id))?;
    Ok(Json(plant_with_links(&db, base_url.as_str(), plant)?))
}

#[post("/plants", format = "application/json", data = "<new_plant>")]
pub fn post_plant(
    db: sqlite::Connections,
    _account: Account,
    base_url: BaseUrl,
    image_store: &State<Images>,
    new_plant: JsonResult<json::NewPlant>,
) -> CreatedResult<json::Plant> {
    let (payload, images) = from_json::plant_payload(new_plant?.into_inner());
    let plant = flows::create_plant(&db, image_store.store(), payload, images.unwrap_or_default())?;
    let plant = plant_with_links(&db.shared()?, base_url.as_str(), plant)?;
    Ok((Status::Created, Json(plant)))
}

#[put("/plants/<id>", format = "application/json", data = "<update>")]
pub fn put_plant(
    db: sqlite::Connections,
    _account: Account,
    base_url: BaseUrl,
    image_store: &State<Images>,
    id: String,
    update: JsonResult<json::NewPlant>,
) -> Result<json::Plant> {
    let (payload, images) = from_json::plant_payload(update?.into_inner());
    let plant = flows::update_plant(&db, image_store.store(), &Id::from(id), payload, images)?;
    let plant = plant_with_links(&db.shared()?, base_url.as_str(), plant)?;
    Ok(Json(plant))
}

#[delete("/plants/<id>")]
pub fn delete_plant(
    db: sqlite::Connections,
    _account: Account,
    image_store: &State<Images>,
    id: String,
) -> StatusResult {
    flows::delete_plant(&db, image_store.store(), &Id::from(id))?;
    Ok(Status::NoContent)
}
