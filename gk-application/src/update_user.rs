use super::*;
use crate::create_user::resolve_picture;

pub fn update_user(
    connections: &sqlite::Connections,
    image_store: &dyn ImageStore,
    id: &Id,
    mut update: usecases::UpdateUser,
) -> Result<User> {
    let mut replaced_picture = None;
    let user = {
        let db = connections.exclusive()?;
        if let Some(picture) = update.picture_url.take() {
            // A fresh upload and an explicit removal both obsolete the
            // stored file.
            if picture.starts_with("data:") || picture.is_empty() {
                replaced_picture = db.get_user(id)?.picture_url;
            }
            update.picture_url =
                Some(resolve_picture(image_store, "user", id.as_str(), &picture)?);
        }
        usecases::update_user(&db, id, update)?
    };
    if let Some(old_url) = replaced_picture {
        if user.picture_url.as_deref() != Some(old_url.as_str()) {
            if let Err(err) = image_store.remove(&old_url) {
                warn!("Failed to remove the replaced picture of user {id}: {err}");
            }
        }
    }
    Ok(user)
}
