use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};

use super::*;

pub mod prelude {
    use crate::web::{self, api, sqlite};

    pub use crate::web::tests::{prelude::*, register_user};

    pub fn setup() -> (Client, sqlite::Connections) {
        web::tests::rocket_test_setup(vec![("/api", api::routes())])
    }

    pub fn test_json(r: &LocalResponse) {
        assert_eq!(
            r.headers().get("Content-Type").collect::<Vec<_>>()[0],
            "application/json"
        );
    }
}

use self::prelude::*;

const EMAIL: &str = "owner@example.com";
const PASSWORD: &str = "secretword";

fn login_token(client: &Client, email: &str, password: &str) -> String {
    let res = client
        .post("/api/users/login")
        .header(ContentType::JSON)
        .body(format!(r#"{{"email":"{email}","password":"{password}"}}"#))
        .dispatch();
    assert_eq!(res.status(), Status::Ok);
    let response: json::LoginResponse =
        serde_json::from_str(&res.into_string().unwrap()).unwrap();
    response.token
}

fn auth_header(token: &str) -> Header<'static> {
    Header::new("Authorization", format!("Bearer {token}"))
}

// Registered user, logged in, ready to hit the protected routes.
fn setup_with_account() -> (Client, sqlite::Connections, Header<'static>, String) {
    let (client, db) = setup();
    register_user(&db, EMAIL, PASSWORD);
    let token = login_token(&client, EMAIL, PASSWORD);
    let owner_id = db
        .shared()
        .unwrap()
        .get_user_by_email(&EMAIL.parse().unwrap())
        .unwrap()
        .id
        .to_string();
    (client, db, auth_header(&token), owner_id)
}

fn garden_body(owner_id: &str, status: &str) -> String {
    format!(
        r#"{{"latitude":45.76,"longitude":4.83,"address":"1 Rue de la Paix","city":"Lyon","zipcode":"69001","owner_id":"{owner_id}","status":"{status}"}}"#
    )
}

#[test]
fn signup_creates_a_user() {
    let (client, db) = setup();
    let res = client
        .post("/api/users/signup")
        .header(ContentType::JSON)
        .body(r#"{"firstname":"Jane","lastname":"Doe","email":"jane@doe.org","password":"secretword"}"#)
        .dispatch();
    assert_eq!(res.status(), Status::Created);
    test_json(&res);
    let body = res.into_string().unwrap();
    assert!(!body.contains("password"));
    let user: json::User = serde_json::from_str(&body).unwrap();
    assert_eq!(user.email, "jane@doe.org");
    assert!(db
        .shared()
        .unwrap()
        .get_user_by_email(&"jane@doe.org".parse().unwrap())
        .is_ok());
}

#[test]
fn signup_with_an_existing_email_fails() {
    let (client, _db) = setup();
    let body = r#"{"firstname":"Jane","lastname":"Doe","email":"jane@doe.org","password":"secretword"}"#;
    let res = client
        .post("/api/users/signup")
        .header(ContentType::JSON)
        .body(body)
        .dispatch();
    assert_eq!(res.status(), Status::Created);
    let res = client
        .post("/api/users/signup")
        .header(ContentType::JSON)
        .body(body)
        .dispatch();
    assert_eq!(res.status(), Status::BadRequest);
    let err: json::Error = serde_json::from_str(&res.into_string().unwrap()).unwrap();
    assert!(!err.error.is_empty());
}

#[test]
fn login_returns_the_user_and_a_token() {
    let (client, db) = setup();
    register_user(&db, EMAIL, PASSWORD);
    let res = client
        .post("/api/users/login")
        .header(ContentType::JSON)
        .body(format!(r#"{{"email":"{EMAIL}","password":"{PASSWORD}"}}"#))
        .dispatch();
    assert_eq!(res.status(), Status::Ok);
    let body = res.into_string().unwrap();
    assert!(!body.contains("password"));
    let response: json::LoginResponse = serde_json::from_str(&body).unwrap();
    assert_eq!(response.user.email, EMAIL);
    assert!(!response.token.is_empty());
}

#[test]
fn login_with_a_wrong_password_is_rejected() {
    let (client, db) = setup();
    register_user(&db, EMAIL, PASSWORD);
    let res = client
        .post("/api/users/login")
        .header(ContentType::JSON)
        .body(format!(r#"{{"email":"{EMAIL}","password":"wrong password"}}"#))
        .dispatch();
    assert_eq!(res.status(), Status::Unauthorized);
}

#[test]
fn requests_without_a_token_are_rejected() {
    let (client, _db) = setup();
    let res = client.get("/api/users").dispatch();
    assert_eq!(res.status(), Status::Forbidden);
}

#[test]
fn requests_with_an_invalid_token_are_rejected() {
    let (client, _db) = setup();
    let res = client
        .get("/api/users")
        .header(auth_header("not.a.token"))
        .dispatch();
    assert_eq!(res.status(), Status::Unauthorized);
}

#[test]
fn logout_invalidates_the_token() {
    let (client, _db, auth, _owner_id) = setup_with_account();
    let res = client.get("/api/users").header(auth.clone()).dispatch();
    assert_eq!(res.status(), Status::Ok);
    let res = client
        .post("/api/users/logout")
        .header(auth.clone())
        .dispatch();
    assert_eq!(res.status(), Status::NoContent);
    let res = client.get("/api/users").header(auth).dispatch();
    assert_eq!(res.status(), Status::Unauthorized);
}

#[test]
fn create_garden_with_an_invalid_status_fails() {
    let (client, _db, auth, owner_id) = setup_with_account();
    let res = client
        .post("/api/gardens")
        .header(ContentType::JSON)
        .header(auth)
        .body(garden_body(&owner_id, "pending"))
        .dispatch();
    assert_eq!(res.status(), Status::BadRequest);
}

#[test]
fn garden_lifecycle() {
    let (client, _db, auth, owner_id) = setup_with_account();
    let res = client
        .post("/api/gardens")
        .header(ContentType::JSON)
        .header(auth.clone())
        .body(garden_body(&owner_id, "search"))
        .dispatch();
    assert_eq!(res.status(), Status::Created);
    let garden: json::Garden = serde_json::from_str(&res.into_string().unwrap()).unwrap();
    assert_eq!(garden.city, "Lyon");
    assert_eq!(garden.status, "search");

    let res = client
        .get(format!("/api/gardens/{}", garden.id))
        .header(auth.clone())
        .dispatch();
    assert_eq!(res.status(), Status::Ok);

    let res = client
        .delete(format!("/api/gardens/{}", garden.id))
        .header(auth.clone())
        .dispatch();
    assert_eq!(res.status(), Status::NoContent);

    let res = client
        .get(format!("/api/gardens/{}", garden.id))
        .header(auth)
        .dispatch();
    assert_eq!(res.status(), Status::NotFound);
}

#[test]
fn garden_photos_fall_back_to_the_sentinel_plant() {
    let (client, _db, auth, owner_id) = setup_with_account();
    let image = BASE64.encode(b"jpeg bytes");
    let body = format!(
        r#"{{"latitude":45.76,"longitude":4.83,"address":"1 Rue de la Paix","city":"Lyon","zipcode":"69001","owner_id":"{owner_id}","status":"guard","photos":[{{"image":"{image}","plant_id":"no-such-plant"}}]}}"#
    );
    let res = client
        .post("/api/gardens")
        .header(ContentType::JSON)
        .header(auth)
        .body(body)
        .dispatch();
    assert_eq!(res.status(), Status::Created);
    let garden: json::Garden = serde_json::from_str(&res.into_string().unwrap()).unwrap();
    assert_eq!(garden.photos.len(), 1);
    assert_eq!(garden.photos[0].plant.id, "unknown");
    assert!(garden.photos[0].photo.url.starts_with("http://"));
    assert!(garden.photos[0].photo.url.contains("/uploads/"));
}

#[test]
fn plant_tags_are_replaced_as_a_whole() {
    let (client, _db, auth, _owner_id) = setup_with_account();
    let mut tag_ids = Vec::new();
    for name in ["succulent", "indoor"] {
        let res = client
            .post("/api/tags")
            .header(ContentType::JSON)
            .header(auth.clone())
            .body(format!(r#"{{"name":"{name}"}}"#))
            .dispatch();
        assert_eq!(res.status(), Status::Created);
        let tag: json::Tag = serde_json::from_str(&res.into_string().unwrap()).unwrap();
        tag_ids.push(tag.id);
    }

    let res = client
        .post("/api/plants")
        .header(ContentType::JSON)
        .header(auth.clone())
        .body(format!(
            r#"{{"name":"Aloe vera","hint":{{"water":"weekly"}},"tags":["{}","{}"]}}"#,
            tag_ids[0], tag_ids[1]
        ))
        .dispatch();
    assert_eq!(res.status(), Status::Created);
    let plant: json::Plant = serde_json::from_str(&res.into_string().unwrap()).unwrap();
    assert_eq!(plant.tags.len(), 2);
    assert_eq!(plant.hint.get("water").map(String::as_str), Some("weekly"));

    let res = client
        .put(format!("/api/plants/{}", plant.id))
        .header(ContentType::JSON)
        .header(auth.clone())
        .body(format!(
            r#"{{"name":"Aloe vera","tags":["{}"]}}"#,
            tag_ids[0]
        ))
        .dispatch();
    assert_eq!(res.status(), Status::Ok);
    let plant: json::Plant = serde_json::from_str(&res.into_string().unwrap()).unwrap();
    assert_eq!(plant.tags.len(), 1);
    assert_eq!(plant.tags[0].id, tag_ids[0]);

    // Omitting the field keeps the remaining link.
    let res = client
        .put(format!("/api/plants/{}", plant.id))
        .header(ContentType::JSON)
        .header(auth)
        .body(r#"{"name":"Aloe vera"}"#)
        .dispatch();
    assert_eq!(res.status(), Status::Ok);
    let plant: json::Plant = serde_json::from_str(&res.into_string().unwrap()).unwrap();
    assert_eq!(plant.tags.len(), 1);
}

#[test]
fn plant_picture_uploads_are_stored_and_served_absolutely() {
    let (client, _db, auth, _owner_id) = setup_with_account();
    let picture = format!("data:image/jpeg;base64,{}", BASE64.encode(b"jpeg bytes"));
    let res = client
        .post("/api/plants")
        .header(ContentType::JSON)
        .header(auth)
        .body(format!(r#"{{"name":"Monstera","picture":"{picture}"}}"#))
        .dispatch();
    assert_eq!(res.status(), Status::Created);
    let plant: json::Plant = serde_json::from_str(&res.into_string().unwrap()).unwrap();
    let url = plant.picture_url.unwrap();
    assert!(url.starts_with("http://"));
    assert!(url.contains("/uploads/plant_"));
}

#[test]
fn messages_can_be_filtered_by_garden() {
    let (client, _db, auth, owner_id) = setup_with_account();
    let mut garden_ids = Vec::new();
    for _ in 0..2 {
        let res = client
            .post("/api/gardens")
            .header(ContentType::JSON)
            .header(auth.clone())
            .body(garden_body(&owner_id, "search"))
            .dispatch();
        assert_eq!(res.status(), Status::Created);
        let garden: json::Garden = serde_json::from_str(&res.into_string().unwrap()).unwrap();
        garden_ids.push(garden.id);
    }
    for (garden_id, body) in [(&garden_ids[0], "hello"), (&garden_ids[1], "bye")] {
        let res = client
            .post("/api/messages")
            .header(ContentType::JSON)
            .header(auth.clone())
            .body(format!(
                r#"{{"user_id":"{owner_id}","garden_id":"{garden_id}","body":"{body}"}}"#
            ))
            .dispatch();
        assert_eq!(res.status(), Status::Created);
    }
    let res = client
        .get(format!("/api/messages?garden={}", garden_ids[0]))
        .header(auth)
        .dispatch();
    assert_eq!(res.status(), Status::Ok);
    let messages: Vec<json::Message> =
        serde_json::from_str(&res.into_string().unwrap()).unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].body, "hello");
    assert_eq!(messages[0].garden_id, garden_ids[0]);
}

#[test]
fn creating_a_tag_without_a_name_fails() {
    let (client, _db, auth, _owner_id) = setup_with_account();
    let res = client
        .post("/api/tags")
        .header(ContentType::JSON)
        .header(auth)
        .body("{}")
        .dispatch();
    assert_eq!(res.status(), Status::BadRequest);
    test_json(&res);
}

#[test]
fn deleting_a_missing_tag_returns_not_found() {
    let (client, _db, auth, _owner_id) = setup_with_account();
    let res = client
        .delete("/api/tags/no-such-tag")
        .header(auth)
        .dispatch();
    assert_eq!(res.status(), Status::NotFound);
}
