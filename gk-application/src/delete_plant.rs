use super::*;

pub fn delete_plant(
    connections: &sqlite::Connections,
    image_store: &dyn ImageStore,
    id: &Id,
) -> Result<()> {
    let (photos, picture_url) = {
        let mut db = connections.exclusive()?;
        db.transaction(|conn| {
            let picture_url = conn.get_plant(id)?.picture_url;
            let photos = usecases::delete_plant(conn, id)?;
            Ok::<_, usecases::Error>((photos, picture_url))
        })?
    };
    for photo in photos {
        if let Err(err) = image_store.remove(&photo.url) {
            warn!(
                "Failed to remove photo {} of deleted plant {id}: {err}",
                photo.id
            );
        }
    }
    if let Some(url) = picture_url {
        if let Err(err) = image_store.remove(&url) {
            warn!("Failed to remove the picture of deleted plant {id}: {err}");
        }
    }
    Ok(())
}
