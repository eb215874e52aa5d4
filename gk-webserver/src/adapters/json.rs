pub use gk_boundary::*;

use gk_application::prelude::GardenImage;
use gk_core::{entities as e, usecases};

pub mod from_json {
    //! JSON -> Entity

    use super::*;

    // NOTE:
    // We cannot impl From<T> here, because the JSON structs
    // and the usecase parameters both are outside this crate.

    pub fn new_user(u: NewUser) -> usecases::NewUser {
        let NewUser {
            firstname,
            lastname,
            email,
            password,
            picture,
            publishable,
        } = u;
        usecases::NewUser {
            firstname,
            lastname,
            email,
            password,
            picture_url: picture,
            publishable,
        }
    }

    pub fn update_user(u: UpdateUser) -> usecases::UpdateUser {
        let UpdateUser {
            firstname,
            lastname,
            email,
            password,
            picture,
            publishable,
        } = u;
        usecases::UpdateUser {
            firstname,
            lastname,
            email,
            password,
            picture_url: picture,
            publishable,
        }
    }

    pub fn plant_payload(p: NewPlant) -> (usecases::PlantPayload, Option<Vec<String>>) {
        let NewPlant {
            name,
            description,
            fullname,
            hint,
            picture,
            images,
            tags,
        } = p;
        let payload = usecases::PlantPayload {
            name,
            description,
            fullname,
            hint,
            picture_url: picture,
            tags: tags.map(|tags| tags.into_iter().map(e::Id::from).collect()),
        };
        (payload, images)
    }

    pub fn garden_payload(g: NewGarden) -> (usecases::GardenPayload, Option<Vec<GardenImage>>) {
        let NewGarden {
            latitude,
            longitude,
            address,
            city,
            zipcode,
            owner_id,
            status,
            botanist_id,
            photos,
        } = g;
        let payload = usecases::GardenPayload {
            latitude,
            longitude,
            address,
            city,
            zipcode,
            owner_id: owner_id.into(),
            status,
            botanist_id: botanist_id.map(Into::into),
        };
        // `None` and an empty list are different on update: an omitted
        // list keeps the existing sightings, a given one replaces them.
        let photos = photos.map(|photos| {
            photos
                .into_iter()
                .map(|photo| GardenImage {
                    image: photo.image,
                    plant_id: photo.plant_id.map(Into::into),
                })
                .collect()
        });
        (payload, photos)
    }

    pub fn botanist_payload(b: NewBotanist) -> usecases::BotanistPayload {
        usecases::BotanistPayload {
            user_id: b.user_id.into(),
            siret: b.siret,
        }
    }

    pub fn message_payload(m: NewMessage) -> usecases::MessagePayload {
        let NewMessage {
            user_id,
            garden_id,
            body,
        } = m;
        usecases::MessagePayload {
            user_id: user_id.into(),
            garden_id: garden_id.into(),
            body,
        }
    }
}

pub mod to_json {
    //! Entity -> JSON

    use super::*;

    // Stored upload paths are relative to the server root. Responses
    // carry absolute URLs derived from the current request.
    fn absolutize(base_url: &str, url: String) -> String {
        if url.starts_with('/') {
            format!("{base_url}{url}")
        } else {
            url
        }
    }

    pub fn user(base_url: &str, from: e::User) -> User {
        let mut user = User::from(from);
        user.picture_url = user.picture_url.take().map(|url| absolutize(base_url, url));
        user
    }

    pub fn photo(base_url: &str, from: e::Photo) -> Photo {
        let mut photo = Photo::from(from);
        photo.url = absolutize(base_url, std::mem::take(&mut photo.url));
        photo
    }

    pub fn plant(
        base_url: &str,
        from: e::Plant,
        tags: Vec<e::Tag>,
        photos: Vec<e::Photo>,
    ) -> Plant {
        let mut plant = plant_to_json(from, tags, photos);
        plant.picture_url = plant
            .picture_url
            .take()
            .map(|url| absolutize(base_url, url));
        for photo in &mut plant.photos {
            photo.url = absolutize(base_url, std::mem::take(&mut photo.url));
        }
        plant
    }

    pub fn garden(base_url: &str, from: e::Garden, sightings: Vec<(e::Photo, e::Plant)>) -> Garden {
        let mut garden = garden_to_json(from, sightings);
        for sighting in &mut garden.photos {
            sighting.photo.url = absolutize(base_url, std::mem::take(&mut sighting.photo.url));
            sighting.plant.picture_url = sighting
                .plant
                .picture_url
                .take()
                .map(|url| absolutize(base_url, url));
        }
        garden
    }

    pub fn botanist(base_url: &str, from: e::Botanist, referenced_user: e::User) -> Botanist {
        let mut botanist = botanist_to_json(from, referenced_user);
        botanist.user.picture_url = botanist
            .user
            .picture_url
            .take()
            .map(|url| absolutize(base_url, url));
        botanist
    }
}
