use super::prelude::*;

/// Delete a garden after its dependent rows.
///
/// Sighting rows, the photos they reference and the messages are removed
/// first so that no join row ever references a missing garden. The deleted
/// photos are returned so that the caller can remove the stored image
/// files once the row deletes have been committed.
pub fn delete_garden<R>(repo: &R, id: &Id) -> Result<Vec<Photo>>
where
    R: GardenRepo + MessageRepo + PhotoRepo,
{
    let _ = repo.get_garden(id)?;
    let mut photos = Vec::new();
    for (photo, _) in repo.sightings_of_garden(id)? {
        photos.push(photo);
    }
    repo.delete_sightings_of_garden(id)?;
    for photo in &photos {
        repo.delete_photo(&photo.id)?;
    }
    repo.delete_messages_of_garden(id)?;
    repo.delete_garden(id)?;
    Ok(photos)
}

#[cfg(test)]
mod tests {
    use super::{
        super::{store_garden::*, store_plant::*, tests::MockDb, *},
        *,
    };

    #[test]
    fn cascade_removes_sightings_photos_and_messages() {
        let db = MockDb::default();
        let garden = create_garden(
            &db,
            GardenPayload {
                latitude: 0.0,
                longitude: 0.0,
                address: "addr".into(),
                city: "city".into(),
                zipcode: "00000".into(),
                owner_id: Id::new(),
                status: "guard".into(),
                botanist_id: None,
            },
        )
        .unwrap();
        let plant = create_plant(
            &db,
            PlantPayload {
                name: "Fern".into(),
                ..Default::default()
            },
        )
        .unwrap();
        let photo = db.add_photo("/uploads/p.jpg");
        db.create_plant_sighting(&PlantSighting {
            garden_id: garden.id.clone(),
            plant_id: plant.id,
            photo_id: photo,
        })
        .unwrap();
        db.add_message(&garden.id, "hello");

        let deleted = delete_garden(&db, &garden.id).unwrap();

        assert_eq!(deleted.len(), 1);
        assert!(matches!(db.get_garden(&garden.id), Err(RepoError::NotFound)));
        assert!(db.sightings.borrow().is_empty());
        assert!(db.photos.borrow().is_empty());
        assert!(db.messages.borrow().is_empty());
    }

    #[test]
    fn delete_missing_garden() {
        let db = MockDb::default();
        assert!(matches!(
            delete_garden(&db, &Id::new()),
            Err(Error::Repo(RepoError::NotFound))
        ));
    }
}
