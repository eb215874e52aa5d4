use super::prelude::*;

/// Delete a plant and everything it owns.
///
/// Cascade order: community photo rows first, then tag links, then the
/// plant row itself. Dangling join rows are never left behind. The deleted
/// photos are returned so that the caller can remove the stored image
/// files once the row deletes have been committed.
pub fn delete_plant<R: PlantRepo>(repo: &R, id: &Id) -> Result<Vec<Photo>> {
    if !repo.plant_exists(id)? {
        return Err(Error::Repo(RepoError::NotFound));
    }
    let photos = repo.delete_photos_of_plant(id)?;
    repo.delete_tags_of_plant(id)?;
    repo.delete_plant(id)?;
    Ok(photos)
}

#[cfg(test)]
mod tests {
    use super::{
        super::{store_plant::*, tests::MockDb, *},
        *,
    };

    #[test]
    fn cascade_removes_photos_and_tag_links() {
        let db = MockDb::default();
        let tag = db.add_tag("herb");
        let plant = create_plant(
            &db,
            PlantPayload {
                name: "Basil".into(),
                tags: Some(vec![tag]),
                ..Default::default()
            },
        )
        .unwrap();
        let photo_ids = [db.add_photo("/uploads/a.jpg"), db.add_photo("/uploads/b.jpg")];
        db.link_photos_to_plant(&plant.id, &photo_ids).unwrap();

        let deleted = delete_plant(&db, &plant.id).unwrap();
        assert_eq!(deleted.len(), 2);

        for id in &photo_ids {
            assert!(matches!(
                db.get_photo(id),
                Err(RepoError::NotFound)
            ));
        }
        assert!(db.tags_of_plant(&plant.id).unwrap().is_empty());
        assert!(db.photos_of_plant(&plant.id).unwrap().is_empty());
        assert!(matches!(db.get_plant(&plant.id), Err(RepoError::NotFound)));
    }

    #[test]
    fn delete_missing_plant() {
        let db = MockDb::default();
        assert!(matches!(
            delete_plant(&db, &Id::new()),
            Err(Error::Repo(RepoError::NotFound))
        ));
    }
}
