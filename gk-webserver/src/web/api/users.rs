use super::*;

#[post("/users/login", format = "application/json", data = "<credentials>")]
pub fn post_login(
    db: sqlite::Connections,
    base_url: BaseUrl,
    jwt_state: &State<jwt::JwtState>,
    credentials: JsonResult<json::Credentials>,
) -> Result<json::LoginResponse> {
    let credentials = credentials?.into_inner();
    let email: EmailAddress = credentials
        .email
        .parse()
        .map_err(|_| usecases::Error::Credentials)?;
    let user = {
        let login = usecases::Credentials {
            email: &email,
            password: &credentials.password,
        };
        usecases::login_with_email(&db.shared()?, &login).map_err(|err| {
            debug!("Login with email '{email}' failed: {err}");
            err
        })?
    };
    let token = jwt_state.generate_token(email.as_str())?;
    Ok(Json(json::LoginResponse {
        user: to_json::user(base_url.as_str(), user),
        token,
    }))
}

#[post("/users/logout")]
pub fn post_logout(account: Account, jwt_state: &State<jwt::JwtState>) -> Status {
    jwt_state.blacklist_token(account.token().to_owned());
    Status::NoContent
}

#[post("/users/signup", format = "application/json", data = "<new_user>")]
pub fn post_signup(
    db: sqlite::Connections,
    base_url: BaseUrl,
    image_store: &State<Images>,
    new_user: JsonResult<json::NewUser>,
) -> CreatedResult<json::User> {
    let new_user = from_json::new_user(new_user?.into_inner());
    let user = flows::create_user(&db, image_store.store(), new_user)?;
    Ok((
        Status::Created,
        Json(to_json::user(base_url.as_str(), user)),
    ))
}

#[get("/users")]
pub fn get_users(
    db: sqlite::Connections,
    _account: Account,
    base_url: BaseUrl,
) -> Result<Vec<json::User>> {
    let users = db.shared()?.all_users()?;
    Ok(Json(
        users
            .into_iter()
            .map(|u| to_json::user(base_url.as_str(), u))
            .collect(),
    ))
}

#[get("/users/<id>")]
pub fn get_user(
    db: sqlite::Connections,
    _account: Account,
    base_url: BaseUrl,
    id: String,
) -> Result<json::User> {
    let user = db.shared()?.get_user(&Id::from(id))?;
    Ok(Json(to_json::user(base_url.as_str(), user)))
}

#[post("/users", format = "application/json", data = "<new_user>")]
pub fn post_user(
    db: sqlite::Connections,
    _account: Account,
    base_url: BaseUrl,
    image_store: &State<Images>,
    new_user: JsonResult<json::NewUser>,
) -> CreatedResult<json::User> {
    let new_user = from_json::new_user(new_user?.into_inner());
    let user = flows::create_user(&db, image_store.store(), new_user)?;
    Ok((
        Status::Created,
        Json(to_json::user(base_url.as_str(), user)),
    ))
}

#[put("/users/<id>", format = "application/json", data = "<update>")]
pub fn put_user(
    db: sqlite::Connections,
    _account: Account,
    base_url: BaseUrl,
    image_store: &State<Images>,
    id: String,
    update: JsonResult<json::UpdateUser>,
) -> Result<json::User> {
    let update = from_json::update_user(update?.into_inner());
    let user = flows::update_user(&db, image_store.store(), &Id::from(id), update)?;
    Ok(Json(to_json::user(base_url.as_str(), user)))
}

#[delete("/users/<id>")]
pub fn delete_user(
    db: sqlite::Connections,
    _account: Account,
    image_store: &State<Images>,
    id: String,
) -> StatusResult {
    flows::delete_user(&db, image_store.store(), &Id::from(id))?;
    Ok(Status::NoContent)
}
