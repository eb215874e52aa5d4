use super::prelude::*;

pub struct Credentials<'a> {
    pub email: &'a EmailAddress,
    pub password: &'a str,
}

pub fn login_with_email<R>(repo: &R, login: &Credentials) -> Result<User>
where
    R: UserRepo,
{
    repo.try_get_user_by_email(login.email)
        .map_err(Error::Repo)
        .and_then(|user| match user {
            Some(u) if u.password.verify(login.password) => Ok(u),
            // Same error for a wrong password and an unknown address.
            _ => Err(Error::Credentials),
        })
}

#[cfg(test)]
mod tests {
    use super::{
        super::{tests::MockDb, *},
        *,
    };

    #[test]
    fn login_with_valid_credentials() {
        let db = MockDb::default();
        let user = create_new_user(
            &db,
            NewUser {
                firstname: "Jane".into(),
                lastname: "Doe".into(),
                email: "jane@home.org".into(),
                password: "password123".into(),
                picture_url: None,
                publishable: true,
            },
        )
        .unwrap();
        let email = "jane@home.org".parse::<EmailAddress>().unwrap();
        let logged_in = login_with_email(
            &db,
            &Credentials {
                email: &email,
                password: "password123",
            },
        )
        .unwrap();
        assert_eq!(logged_in.id, user.id);
    }

    #[test]
    fn login_with_invalid_credentials() {
        let db = MockDb::default();
        create_new_user(
            &db,
            NewUser {
                firstname: "Jane".into(),
                lastname: "Doe".into(),
                email: "jane@home.org".into(),
                password: "password123".into(),
                picture_url: None,
                publishable: true,
            },
        )
        .unwrap();
        let email = "jane@home.org".parse::<EmailAddress>().unwrap();
        let unknown = "nobody@home.org".parse::<EmailAddress>().unwrap();
        assert!(matches!(
            login_with_email(
                &db,
                &Credentials {
                    email: &email,
                    password: "wrong"
                }
            ),
            Err(Error::Credentials)
        ));
        assert!(matches!(
            login_with_email(
                &db,
                &Credentials {
                    email: &unknown,
                    password: "password123"
                }
            ),
            Err(Error::Credentials)
        ));
    }
}
