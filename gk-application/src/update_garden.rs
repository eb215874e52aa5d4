use super::*;
use crate::create_garden::{add_sightings, GardenImage};

pub fn update_garden(
    connections: &sqlite::Connections,
    image_store: &dyn ImageStore,
    id: &Id,
    payload: usecases::GardenPayload,
    photos: Option<Vec<GardenImage>>,
) -> Result<Garden> {
    // An omitted photo list keeps the current sightings untouched,
    // a given list replaces all of them.
    let stored = match photos {
        Some(photos) => {
            let mut stored = Vec::with_capacity(photos.len());
            for (idx, photo) in photos.into_iter().enumerate() {
                let file_name = image_file_name("garden", id.as_str(), Some(idx));
                let url = image_store.store(&photo.image, &file_name)?;
                stored.push((url, photo.plant_id));
            }
            Some(stored)
        }
        None => None,
    };
    let mut db = connections.exclusive()?;
    let (garden, replaced) = db.transaction(|conn| {
        let garden = usecases::update_garden(conn, id, payload)?;
        let mut replaced = Vec::new();
        if let Some(stored) = &stored {
            for (photo, _) in conn.sightings_of_garden(&garden.id)? {
                replaced.push(photo);
            }
            conn.delete_sightings_of_garden(&garden.id)?;
            for photo in &replaced {
                conn.delete_photo(&photo.id)?;
            }
            add_sightings(conn, &garden.id, stored)?;
        }
        Ok::<_, usecases::Error>((garden, replaced))
    })?;
    for photo in replaced {
        if let Err(err) = image_store.remove(&photo.url) {
            warn!(
                "Failed to remove the replaced photo {} of garden {id}: {err}",
                photo.id
            );
        }
    }
    Ok(garden)
}
