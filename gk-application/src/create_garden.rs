use super::*;

/// An uploaded garden photo together with the plant it shows.
///
/// Unknown or missing plant references fall back to the reserved
/// sentinel plant instead of rejecting the upload.
#[derive(Debug, Clone)]
pub struct GardenImage {
    pub image: String,
    pub plant_id: Option<Id>,
}

pub fn create_garden(
    connections: &sqlite::Connections,
    image_store: &dyn ImageStore,
    payload: usecases::GardenPayload,
    photos: Vec<GardenImage>,
) -> Result<Garden> {
    let batch = Id::new();
    let mut stored = Vec::with_capacity(photos.len());
    for (idx, photo) in photos.into_iter().enumerate() {
        let file_name = image_file_name("garden", batch.as_str(), Some(idx));
        let url = image_store.store(&photo.image, &file_name)?;
        stored.push((url, photo.plant_id));
    }
    let mut db = connections.exclusive()?;
    let garden = db.transaction(|conn| {
        let garden = usecases::create_garden(conn, payload)?;
        add_sightings(conn, &garden.id, &stored)?;
        Ok::<_, usecases::Error>(garden)
    })?;
    Ok(garden)
}

pub(crate) fn add_sightings<R>(
    repo: &R,
    garden_id: &Id,
    stored: &[(String, Option<Id>)],
) -> std::result::Result<(), usecases::Error>
where
    R: GardenRepo + PlantRepo + PhotoRepo,
{
    for (url, plant_id) in stored {
        let photo = usecases::create_photo(repo, url.clone())?;
        let plant_id = usecases::resolve_sighting_plant(repo, plant_id.clone())?;
        repo.create_plant_sighting(&PlantSighting {
            garden_id: garden_id.clone(),
            plant_id,
            photo_id: photo.id,
        })?;
    }
    Ok(())
}
