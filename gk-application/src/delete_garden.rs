use super::*;

pub fn delete_garden(
    connections: &sqlite::Connections,
    image_store: &dyn ImageStore,
    id: &Id,
) -> Result<()> {
    let photos = {
        let mut db = connections.exclusive()?;
        db.transaction(|conn| usecases::delete_garden(conn, id))?
    };
    for photo in photos {
        if let Err(err) = image_store.remove(&photo.url) {
            warn!(
                "Failed to remove photo {} of deleted garden {id}: {err}",
                photo.id
            );
        }
    }
    Ok(())
}
