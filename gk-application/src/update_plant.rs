use super::*;
use crate::create_user::resolve_picture;

pub fn update_plant(
    connections: &sqlite::Connections,
    image_store: &dyn ImageStore,
    id: &Id,
    mut payload: usecases::PlantPayload,
    images: Option<Vec<String>>,
) -> Result<Plant> {
    if let Some(picture) = payload.picture_url.take() {
        payload.picture_url = Some(resolve_picture(image_store, "plant", id.as_str(), &picture)?);
    }
    // An omitted image list keeps the current photos untouched,
    // a given list replaces all of them.
    let new_urls = match &images {
        Some(images) => {
            let mut urls = Vec::with_capacity(images.len());
            for (idx, image) in images.iter().enumerate() {
                let file_name = image_file_name("plant", id.as_str(), Some(idx));
                urls.push(image_store.store(image, &file_name)?);
            }
            Some(urls)
        }
        None => None,
    };
    let mut db = connections.exclusive()?;
    let (plant, replaced) = db.transaction(|conn| {
        let plant = usecases::update_plant(conn, id, payload)?;
        let mut replaced = Vec::new();
        if let Some(urls) = &new_urls {
            replaced = conn.delete_photos_of_plant(&plant.id)?;
            let mut photo_ids = Vec::with_capacity(urls.len());
            for url in urls {
                photo_ids.push(usecases::create_photo(conn, url.clone())?.id);
            }
            if !photo_ids.is_empty() {
                conn.link_photos_to_plant(&plant.id, &photo_ids)?;
            }
        }
        Ok::<_, usecases::Error>((plant, replaced))
    })?;
    for photo in replaced {
        if let Err(err) = image_store.remove(&photo.url) {
            warn!(
                "Failed to remove the replaced photo {} of plant {id}: {err}",
                photo.id
            );
        }
    }
    Ok(plant)
}
