//! Entity -> JSON conversions.

use crate::*;
use gk_entities as e;

impl From<e::user::User> for User {
    fn from(from: e::user::User) -> Self {
        let e::user::User {
            id,
            firstname,
            lastname,
            email,
            password: _,
            picture_url,
            publishable,
        } = from;
        Self {
            id: id.into(),
            firstname,
            lastname,
            email: email.into_string(),
            picture_url,
            publishable,
        }
    }
}

impl From<e::tag::Tag> for Tag {
    fn from(from: e::tag::Tag) -> Self {
        Self {
            id: from.id.into(),
            name: from.name,
        }
    }
}

impl From<e::photo::Photo> for Photo {
    fn from(from: e::photo::Photo) -> Self {
        Self {
            id: from.id.into(),
            url: from.url,
        }
    }
}

impl From<e::message::Message> for Message {
    fn from(from: e::message::Message) -> Self {
        let e::message::Message {
            id,
            user_id,
            garden_id,
            body,
            created_at,
        } = from;
        Self {
            id: id.into(),
            user_id: user_id.into(),
            garden_id: garden_id.into(),
            body,
            created_at: created_at.as_millis(),
        }
    }
}

pub fn botanist_to_json(botanist: e::botanist::Botanist, user: e::user::User) -> Botanist {
    Botanist {
        id: botanist.id.into(),
        user_id: botanist.user_id.into(),
        siret: botanist.siret.into(),
        user: user.into(),
    }
}

pub fn plant_to_json(
    plant: e::plant::Plant,
    tags: Vec<e::tag::Tag>,
    photos: Vec<e::photo::Photo>,
) -> Plant {
    let e::plant::Plant {
        id,
        name,
        description,
        hint,
        fullname,
        picture_url,
    } = plant;
    Plant {
        id: id.into(),
        name,
        description,
        hint: hint.into(),
        fullname,
        picture_url,
        tags: tags.into_iter().map(Into::into).collect(),
        photos: photos.into_iter().map(Into::into).collect(),
    }
}

pub fn garden_to_json(
    garden: e::garden::Garden,
    sightings: Vec<(e::photo::Photo, e::plant::Plant)>,
) -> Garden {
    let e::garden::Garden {
        id,
        latitude,
        longitude,
        address,
        city,
        zipcode,
        owner_id,
        status,
        botanist_id,
    } = garden;
    Garden {
        id: id.into(),
        latitude,
        longitude,
        address,
        city,
        zipcode,
        owner_id: owner_id.into(),
        status: status.to_string(),
        botanist_id: botanist_id.map(Into::into),
        photos: sightings
            .into_iter()
            .map(|(photo, plant)| GardenPhoto {
                photo: photo.into(),
                plant: plant_to_json(plant, vec![], vec![]),
            })
            .collect(),
    }
}
