use super::*;

pub fn create_user(
    connections: &sqlite::Connections,
    image_store: &dyn ImageStore,
    mut new_user: usecases::NewUser,
) -> Result<User> {
    if let Some(picture) = new_user.picture_url.take() {
        let owner = Id::new();
        new_user.picture_url = Some(resolve_picture(image_store, "user", owner.as_str(), &picture)?);
    }
    let db = connections.exclusive()?;
    Ok(usecases::create_new_user(&db, new_user)?)
}

// Pictures are submitted either as a ready-made URL or inline
// as a base64 data URI that still has to be persisted.
pub(crate) fn resolve_picture(
    image_store: &dyn ImageStore,
    kind: &str,
    owner: &str,
    picture: &str,
) -> Result<String> {
    if !picture.starts_with("data:") {
        return Ok(picture.to_string());
    }
    let file_name = image_file_name(kind, owner, None);
    image_store.store(picture, &file_name).map_err(Into::into)
}
