use super::prelude::*;
use crate::util::validate;

#[derive(Debug, Clone)]
pub struct NewUser {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub password: String,
    pub picture_url: Option<String>,
    pub publishable: bool,
}

pub fn create_new_user<R: UserRepo>(repo: &R, u: NewUser) -> Result<User> {
    if !validate::is_valid_email(&u.email) {
        return Err(Error::EmailAddress);
    }
    let email = u.email.parse::<EmailAddress>()?;
    // The uniqueness check happens before the password is hashed.
    if repo.try_get_user_by_email(&email)?.is_some() {
        return Err(Error::UserExists);
    }
    let password = u.password.parse::<Password>()?;
    let new_user = User {
        id: Id::new(),
        firstname: u.firstname,
        lastname: u.lastname,
        email,
        password,
        picture_url: u.picture_url,
        publishable: u.publishable,
    };
    log::debug!("Creating new user: email = {}", new_user.email);
    repo.create_user(&new_user)?;
    Ok(new_user)
}
