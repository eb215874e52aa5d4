use super::*;
use crate::create_user::resolve_picture;

pub fn create_plant(
    connections: &sqlite::Connections,
    image_store: &dyn ImageStore,
    mut payload: usecases::PlantPayload,
    images: Vec<String>,
) -> Result<Plant> {
    let batch = Id::new();
    if let Some(picture) = payload.picture_url.take() {
        payload.picture_url = Some(resolve_picture(image_store, "plant", batch.as_str(), &picture)?);
    }
    let mut urls = Vec::with_capacity(images.len());
    for (idx, image) in images.iter().enumerate() {
        let file_name = image_file_name("plant", batch.as_str(), Some(idx));
        urls.push(image_store.store(image, &file_name)?);
    }
    let mut db = connections.exclusive()?;
    let plant = db.transaction(|conn| {
        let plant = usecases::create_plant(conn, payload)?;
        let mut photo_ids = Vec::with_capacity(urls.len());
        for url in &urls {
            photo_ids.push(usecases::create_photo(conn, url.clone())?.id);
        }
        if !photo_ids.is_empty() {
            conn.link_photos_to_plant(&plant.id, &photo_ids)?;
        }
        Ok::<_, usecases::Error>(plant)
    })?;
    Ok(plant)
}
