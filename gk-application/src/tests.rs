use std::cell::RefCell;

use super::{prelude::*, *};

#[derive(Debug, Default)]
struct DummyImageStore {
    stored: RefCell<Vec<String>>,
    removed: RefCell<Vec<String>>,
}

impl ImageStore for DummyImageStore {
    fn store(&self, _base64_payload: &str, file_name: &str) -> anyhow::Result<String> {
        let url = format!("/uploads/{file_name}");
        self.stored.borrow_mut().push(url.clone());
        Ok(url)
    }
    fn remove(&self, url: &str) -> anyhow::Result<()> {
        self.removed.borrow_mut().push(url.to_string());
        Ok(())
    }
}

fn new_connections() -> sqlite::Connections {
    let connections = sqlite::Connections::init(":memory:", 1).unwrap();
    gk_db_sqlite::run_embedded_database_migrations(connections.exclusive().unwrap());
    connections
}

fn new_user(email: &str) -> usecases::NewUser {
    usecases::NewUser {
        firstname: "Jane".into(),
        lastname: "Doe".into(),
        email: email.into(),
        password: "password123".into(),
        picture_url: None,
        publishable: false,
    }
}

fn plant_payload(name: &str) -> usecases::PlantPayload {
    usecases::PlantPayload {
        name: name.into(),
        ..Default::default()
    }
}

fn garden_payload(owner_id: Id) -> usecases::GardenPayload {
    usecases::GardenPayload {
        latitude: 47.9,
        longitude: 7.8,
        address: "1 Rue des Jardins".into(),
        city: "Freiburg".into(),
        zipcode: "79098".into(),
        owner_id,
        status: "search".into(),
        botanist_id: None,
    }
}

#[test]
fn create_plant_with_images_links_community_photos() {
    let connections = new_connections();
    let images = DummyImageStore::default();
    let plant = create_plant(
        &connections,
        &images,
        plant_payload("Monstera"),
        vec!["aGVsbG8=".into(), "d29ybGQ=".into()],
    )
    .unwrap();
    let db = connections.shared().unwrap();
    assert_eq!(db.photos_of_plant(&plant.id).unwrap().len(), 2);
    assert_eq!(images.stored.borrow().len(), 2);
}

#[test]
fn create_plant_with_invalid_name_stores_no_photos() {
    let connections = new_connections();
    let images = DummyImageStore::default();
    let res = create_plant(
        &connections,
        &images,
        plant_payload("  "),
        vec!["aGVsbG8=".into()],
    );
    assert!(matches!(
        res,
        Err(error::AppError::Business(error::BError::Parameter(
            usecases::Error::Name
        )))
    ));
    // The transaction has been rolled back.
    let db = connections.shared().unwrap();
    let photos: Vec<_> = db.all_photos().unwrap();
    assert!(photos.is_empty());
}

#[test]
fn update_plant_replaces_community_photos() {
    let connections = new_connections();
    let images = DummyImageStore::default();
    let plant = create_plant(
        &connections,
        &images,
        plant_payload("Monstera"),
        vec!["b2xk".into()],
    )
    .unwrap();
    let old_url = {
        let db = connections.shared().unwrap();
        db.photos_of_plant(&plant.id).unwrap()[0].url.clone()
    };
    update_plant(
        &connections,
        &images,
        &plant.id,
        plant_payload("Monstera"),
        Some(vec!["bmV3MQ==".into(), "bmV3Mg==".into()]),
    )
    .unwrap();
    let db = connections.shared().unwrap();
    assert_eq!(db.photos_of_plant(&plant.id).unwrap().len(), 2);
    assert!(images.removed.borrow().contains(&old_url));
}

#[test]
fn delete_plant_removes_photos_and_files() {
    let connections = new_connections();
    let images = DummyImageStore::default();
    let plant = create_plant(
        &connections,
        &images,
        plant_payload("Monstera"),
        vec!["cGljMQ==".into(), "cGljMg==".into()],
    )
    .unwrap();
    delete_plant(&connections, &images, &plant.id).unwrap();
    let db = connections.shared().unwrap();
    assert!(matches!(db.get_plant(&plant.id), Err(Error::NotFound)));
    assert!(db.all_photos().unwrap().is_empty());
    assert_eq!(images.removed.borrow().len(), 2);
}

#[test]
fn create_garden_falls_back_to_the_sentinel_plant() {
    let connections = new_connections();
    let images = DummyImageStore::default();
    let owner = create_user(&connections, &images, new_user("owner@home.org")).unwrap();
    let garden = create_garden(
        &connections,
        &images,
        garden_payload(owner.id),
        vec![GardenImage {
            image: "cGhvdG8=".into(),
            plant_id: Some(Id::from("no-such-plant")),
        }],
    )
    .unwrap();
    let db = connections.shared().unwrap();
    let sightings = db.sightings_of_garden(&garden.id).unwrap();
    assert_eq!(sightings.len(), 1);
    assert!(sightings[0].1.is_unknown_sentinel());
}

#[test]
fn update_garden_replaces_the_photo_set() {
    let connections = new_connections();
    let images = DummyImageStore::default();
    let owner = create_user(&connections, &images, new_user("owner@home.org")).unwrap();
    let garden = create_garden(
        &connections,
        &images,
        garden_payload(owner.id.clone()),
        vec![GardenImage {
            image: "b2xk".into(),
            plant_id: None,
        }],
    )
    .unwrap();
    let old_url = {
        let db = connections.shared().unwrap();
        db.sightings_of_garden(&garden.id).unwrap()[0].0.url.clone()
    };
    update_garden(
        &connections,
        &images,
        &garden.id,
        garden_payload(owner.id),
        Some(vec![GardenImage {
            image: "bmV3".into(),
            plant_id: None,
        }]),
    )
    .unwrap();
    let db = connections.shared().unwrap();
    // {old} -> {new}, not {old, new}
    let sightings = db.sightings_of_garden(&garden.id).unwrap();
    assert_eq!(sightings.len(), 1);
    assert_ne!(sightings[0].0.url, old_url);
    assert_eq!(db.all_photos().unwrap().len(), 1);
    assert!(images.removed.borrow().contains(&old_url));
}

#[test]
fn update_garden_without_photos_keeps_sightings() {
    let connections = new_connections();
    let images = DummyImageStore::default();
    let owner = create_user(&connections, &images, new_user("owner@home.org")).unwrap();
    let garden = create_garden(
        &connections,
        &images,
        garden_payload(owner.id.clone()),
        vec![GardenImage {
            image: "cGhvdG8=".into(),
            plant_id: None,
        }],
    )
    .unwrap();
    update_garden(&connections, &images, &garden.id, garden_payload(owner.id), None).unwrap();
    let db = connections.shared().unwrap();
    assert_eq!(db.sightings_of_garden(&garden.id).unwrap().len(), 1);
    assert!(images.removed.borrow().is_empty());
}

#[test]
fn delete_garden_removes_sightings_messages_and_photo_files() {
    let connections = new_connections();
    let images = DummyImageStore::default();
    let owner = create_user(&connections, &images, new_user("owner@home.org")).unwrap();
    let garden = create_garden(
        &connections,
        &images,
        garden_payload(owner.id.clone()),
        vec![GardenImage {
            image: "cGhvdG8=".into(),
            plant_id: None,
        }],
    )
    .unwrap();
    {
        let db = connections.exclusive().unwrap();
        usecases::create_message(
            &db,
            usecases::MessagePayload {
                user_id: owner.id.clone(),
                garden_id: garden.id.clone(),
                body: "I could guard this garden in August.".into(),
            },
        )
        .unwrap();
    }
    delete_garden(&connections, &images, &garden.id).unwrap();
    let db = connections.shared().unwrap();
    assert!(matches!(db.get_garden(&garden.id), Err(Error::NotFound)));
    assert!(db.sightings_of_garden(&garden.id).unwrap().is_empty());
    assert!(db.messages_of_garden(&garden.id).unwrap().is_empty());
    assert!(db.all_photos().unwrap().is_empty());
    assert_eq!(images.removed.borrow().len(), 1);
}

#[test]
fn delete_user_removes_the_picture_file() {
    let connections = new_connections();
    let images = DummyImageStore::default();
    let mut new_user = new_user("jane@home.org");
    new_user.picture_url = Some("data:image/jpeg;base64,cGljdHVyZQ==".into());
    let user = create_user(&connections, &images, new_user).unwrap();
    let picture_url = user.picture_url.clone().unwrap();
    delete_user(&connections, &images, &user.id).unwrap();
    let db = connections.shared().unwrap();
    assert!(matches!(db.get_user(&user.id), Err(Error::NotFound)));
    assert!(images.removed.borrow().contains(&picture_url));
}
