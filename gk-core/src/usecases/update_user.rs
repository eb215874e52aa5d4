use super::prelude::*;
use crate::util::validate;

#[derive(Debug, Clone)]
pub struct UpdateUser {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    /// New plaintext password, hashed on update. `None` keeps the old hash.
    pub password: Option<String>,
    /// `None` keeps the stored picture, an empty value removes it.
    pub picture_url: Option<String>,
    pub publishable: bool,
}

pub fn update_user<R: UserRepo>(repo: &R, id: &Id, u: UpdateUser) -> Result<User> {
    let old = repo.get_user(id)?;
    if !validate::is_valid_email(&u.email) {
        return Err(Error::EmailAddress);
    }
    let email = u.email.parse::<EmailAddress>()?;
    if email != old.email && repo.try_get_user_by_email(&email)?.is_some() {
        return Err(Error::UserExists);
    }
    let password = match u.password {
        Some(plaintext) => plaintext.parse::<Password>()?,
        None => old.password,
    };
    let picture_url = match u.picture_url {
        Some(url) if url.is_empty() => None,
        Some(url) => Some(url),
        None => old.picture_url,
    };
    let updated = User {
        id: old.id,
        firstname: u.firstname,
        lastname: u.lastname,
        email,
        password,
        picture_url,
        publishable: u.publishable,
    };
    repo.update_user(&updated)?;
    Ok(updated)
}

#[cfg(test)]
mod tests {
    use super::{
        super::{tests::MockDb, *},
        *,
    };

    #[test]
    fn update_keeps_password_and_picture_if_omitted() {
        let db = MockDb::default();
        let user = create_new_user(
            &db,
            NewUser {
                firstname: "Jane".into(),
                lastname: "Doe".into(),
                email: "jane@home.org".into(),
                password: "password123".into(),
                picture_url: Some("/uploads/user_1.jpg".into()),
                publishable: false,
            },
        )
        .unwrap();
        let updated = update_user(
            &db,
            &user.id,
            UpdateUser {
                firstname: "Janet".into(),
                lastname: "Doe".into(),
                email: "jane@home.org".into(),
                password: None,
                picture_url: None,
                publishable: true,
            },
        )
        .unwrap();
        assert_eq!(updated.firstname, "Janet");
        assert!(updated.password.verify("password123"));
        assert_eq!(updated.picture_url.as_deref(), Some("/uploads/user_1.jpg"));
        assert!(updated.publishable);
    }

    #[test]
    fn update_with_an_empty_picture_value_removes_it() {
        let db = MockDb::default();
        let user = create_new_user(
            &db,
            NewUser {
                firstname: "Jane".into(),
                lastname: "Doe".into(),
                email: "jane@home.org".into(),
                password: "password123".into(),
                picture_url: Some("/uploads/user_1.jpg".into()),
                publishable: false,
            },
        )
        .unwrap();
        let updated = update_user(
            &db,
            &user.id,
            UpdateUser {
                firstname: "Jane".into(),
                lastname: "Doe".into(),
                email: "jane@home.org".into(),
                password: None,
                picture_url: Some(String::new()),
                publishable: false,
            },
        )
        .unwrap();
        assert_eq!(updated.picture_url, None);
    }

    #[test]
    fn update_rejects_taken_email() {
        let db = MockDb::default();
        let user = create_new_user(
            &db,
            NewUser {
                firstname: "Jane".into(),
                lastname: "Doe".into(),
                email: "jane@home.org".into(),
                password: "password123".into(),
                picture_url: None,
                publishable: false,
            },
        )
        .unwrap();
        create_new_user(
            &db,
            NewUser {
                firstname: "John".into(),
                lastname: "Doe".into(),
                email: "john@home.org".into(),
                password: "password123".into(),
                picture_url: None,
                publishable: false,
            },
        )
        .unwrap();
        let res = update_user(
            &db,
            &user.id,
            UpdateUser {
                firstname: "Jane".into(),
                lastname: "Doe".into(),
                email: "john@home.org".into(),
                password: None,
                picture_url: None,
                publishable: false,
            },
        );
        assert!(matches!(res, Err(Error::UserExists)));
    }
}
