//! Deterministic sample data for demos and manual testing.

use anyhow::Result;

use gk_core::{entities::*, repositories::*, usecases};
use gk_db_sqlite::Connections;

const PASSWORD: &str = "gardenkeeper";

const PLANTS: &[(&str, &str, &str)] = &[
    (
        "Japanese maple",
        "Acer palmatum",
        "Small deciduous tree with deeply lobed leaves.",
    ),
    (
        "Climbing rose",
        "Rosa 'New Dawn'",
        "Repeat-flowering climber with pale pink blooms.",
    ),
    (
        "English lavender",
        "Lavandula angustifolia",
        "Fragrant evergreen shrub, thrives on dry soil.",
    ),
    (
        "Fiddle-leaf fig",
        "Ficus lyrata",
        "Popular indoor plant with large violin-shaped leaves.",
    ),
];

const PHOTO_URLS: &[&str] = &[
    "https://images.gardenkeeper.org/sample/maple.jpg",
    "https://images.gardenkeeper.org/sample/rose.jpg",
    "https://images.gardenkeeper.org/sample/lavender.jpg",
    "https://images.gardenkeeper.org/sample/fig.jpg",
];

pub fn run(connections: &Connections) -> Result<()> {
    let db = connections.exclusive()?;
    if !db.all_users()?.is_empty() {
        warn!("The database already contains users, nothing to seed");
        return Ok(());
    }

    let tags = ["succulent", "indoor", "outdoor", "shade", "fragrant"]
        .into_iter()
        .map(|name| usecases::create_tag(&db, name.to_string()))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let users = [
        ("Alice", "Martin", "alice@gardenkeeper.org"),
        ("Bruno", "Lefevre", "bruno@gardenkeeper.org"),
        ("Chloe", "Dubois", "chloe@gardenkeeper.org"),
    ]
    .into_iter()
    .map(|(firstname, lastname, email)| {
        usecases::create_new_user(
            &db,
            usecases::NewUser {
                firstname: firstname.to_string(),
                lastname: lastname.to_string(),
                email: email.to_string(),
                password: PASSWORD.to_string(),
                picture_url: None,
                publishable: true,
            },
        )
    })
    .collect::<std::result::Result<Vec<_>, _>>()?;

    let botanist = usecases::create_botanist(
        &db,
        usecases::BotanistPayload {
            user_id: users[1].id.clone(),
            siret: "12345678901234".to_string(),
        },
    )?;

    let gardens = [
        ("12 Rue des Lilas", "Lyon", "69003", "search", None),
        (
            "4 Chemin Vert",
            "Villeurbanne",
            "69100",
            "guard",
            Some(botanist.id.clone()),
        ),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (address, city, zipcode, status, botanist_id))| {
        usecases::create_garden(
            &db,
            usecases::GardenPayload {
                latitude: 45.76 + i as f64 * 0.01,
                longitude: 4.83 + i as f64 * 0.01,
                address: address.to_string(),
                city: city.to_string(),
                zipcode: zipcode.to_string(),
                owner_id: users[i].id.clone(),
                status: status.to_string(),
                botanist_id,
            },
        )
    })
    .collect::<std::result::Result<Vec<_>, _>>()?;

    let mut plants = Vec::with_capacity(PLANTS.len());
    for (i, (name, fullname, description)) in PLANTS.iter().enumerate() {
        let mut hint = std::collections::BTreeMap::new();
        hint.insert("light".to_string(), "Full sun".to_string());
        hint.insert("water".to_string(), "Weekly".to_string());
        let plant = usecases::create_plant(
            &db,
            usecases::PlantPayload {
                name: name.to_string(),
                description: description.to_string(),
                fullname: fullname.to_string(),
                hint,
                picture_url: Some(PHOTO_URLS[i].to_string()),
                tags: Some(vec![
                    tags[i % tags.len()].id.clone(),
                    tags[(i + 1) % tags.len()].id.clone(),
                ]),
            },
        )?;
        plants.push(plant);
    }

    for (i, plant) in plants.iter().enumerate() {
        let photo = usecases::create_photo(&db, PHOTO_URLS[i].to_string())?;
        db.create_plant_sighting(&PlantSighting {
            garden_id: gardens[i % gardens.len()].id.clone(),
            plant_id: plant.id.clone(),
            photo_id: photo.id,
        })?;
    }

    for (garden, body) in [
        (&gardens[0], "Looking for someone to water twice a week."),
        (&gardens[1], "The roses need pruning in autumn."),
    ] {
        usecases::create_message(
            &db,
            usecases::MessagePayload {
                user_id: users[2].id.clone(),
                garden_id: garden.id.clone(),
                body: body.to_string(),
            },
        )?;
    }

    info!(
        "Seeded {} users, {} gardens, {} plants and {} tags",
        users.len(),
        gardens.len(),
        plants.len(),
        tags.len()
    );
    Ok(())
}
