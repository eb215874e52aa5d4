use super::prelude::*;

/// Delete a user row.
///
/// Returns the stored profile picture URL (if any) so that the caller can
/// remove the underlying file after the row delete has been committed.
pub fn delete_user<R: UserRepo>(repo: &R, id: &Id) -> Result<Option<String>> {
    let user = repo.get_user(id)?;
    repo.delete_user(id)?;
    Ok(user.picture_url)
}
