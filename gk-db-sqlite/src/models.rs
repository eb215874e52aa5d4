#![allow(clippy::extra_unused_lifetimes)]

// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in milliseconds.

use std::collections::BTreeMap;

use gk_core::entities::*;

use super::schema::*;

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = users, treat_none_as_null = true)]
pub struct NewUser<'a> {
    pub id: &'a str,
    pub firstname: &'a str,
    pub lastname: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub picture_url: Option<&'a str>,
    pub publishable: bool,
}

impl<'a> From<&'a User> for NewUser<'a> {
    fn from(from: &'a User) -> Self {
        let User {
            id,
            firstname,
            lastname,
            email,
            password,
            picture_url,
            publishable,
        } = from;
        Self {
            id: id.as_str(),
            firstname,
            lastname,
            email: email.as_str(),
            password: password.as_str(),
            picture_url: picture_url.as_deref(),
            publishable: *publishable,
        }
    }
}

#[derive(Queryable)]
pub struct UserEntity {
    pub id: String,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub password: String,
    pub picture_url: Option<String>,
    pub publishable: bool,
}

impl From<UserEntity> for User {
    fn from(from: UserEntity) -> Self {
        let UserEntity {
            id,
            firstname,
            lastname,
            email,
            password,
            picture_url,
            publishable,
        } = from;
        Self {
            id: id.into(),
            firstname,
            lastname,
            email: EmailAddress::new_unchecked(email),
            password: Password::from_hash(password),
            picture_url,
            publishable,
        }
    }
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = botanists, treat_none_as_null = true)]
pub struct NewBotanist<'a> {
    pub id: &'a str,
    pub user_id: &'a str,
    pub siret: &'a str,
}

impl<'a> From<&'a Botanist> for NewBotanist<'a> {
    fn from(from: &'a Botanist) -> Self {
        Self {
            id: from.id.as_str(),
            user_id: from.user_id.as_str(),
            siret: from.siret.as_str(),
        }
    }
}

#[derive(Queryable)]
pub struct BotanistEntity {
    pub id: String,
    pub user_id: String,
    pub siret: String,
}

impl From<BotanistEntity> for Botanist {
    fn from(from: BotanistEntity) -> Self {
        Self {
            id: from.id.into(),
            user_id: from.user_id.into(),
            // Stored values have been validated on the way in.
            siret: from.siret.parse().unwrap_or_else(|_| {
                log::warn!("Invalid SIRET loaded from the database");
                "00000000000000".parse().unwrap()
            }),
        }
    }
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = gardens, treat_none_as_null = true)]
pub struct NewGarden<'a> {
    pub id: &'a str,
    pub latitude: f64,
    pub longitude: f64,
    pub address: &'a str,
    pub city: &'a str,
    pub zipcode: &'a str,
    pub owner_id: &'a str,
    pub status: String,
    pub botanist_id: Option<&'a str>,
}

impl<'a> From<&'a Garden> for NewGarden<'a> {
    fn from(from: &'a Garden) -> Self {
        let Garden {
            id,
            latitude,
            longitude,
            address,
            city,
            zipcode,
            owner_id,
            status,
            botanist_id,
        } = from;
        Self {
            id: id.as_str(),
            latitude: *latitude,
            longitude: *longitude,
            address,
            city,
            zipcode,
            owner_id: owner_id.as_str(),
            status: status.to_string(),
            botanist_id: botanist_id.as_ref().map(Id::as_str),
        }
    }
}

#[derive(Queryable)]
pub struct GardenEntity {
    pub id: String,
    pub latitude: f64,
    pub longitude: f64,
    pub address: String,
    pub city: String,
    pub zipcode: String,
    pub owner_id: String,
    pub status: String,
    pub botanist_id: Option<String>,
}

impl From<GardenEntity> for Garden {
    fn from(from: GardenEntity) -> Self {
        let GardenEntity {
            id,
            latitude,
            longitude,
            address,
            city,
            zipcode,
            owner_id,
            status,
            botanist_id,
        } = from;
        Self {
            id: id.into(),
            latitude,
            longitude,
            address,
            city,
            zipcode,
            owner_id: owner_id.into(),
            // Stored values have been validated on the way in.
            status: status.parse().unwrap_or(GardenStatus::Search),
            botanist_id: botanist_id.map(Into::into),
        }
    }
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = plants, treat_none_as_null = true)]
pub struct NewPlant<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub description: &'a str,
    pub hint: String,
    pub fullname: &'a str,
    pub picture_url: Option<&'a str>,
}

impl<'a> From<&'a Plant> for NewPlant<'a> {
    fn from(from: &'a Plant) -> Self {
        let hint: BTreeMap<&String, &String> = from.hint.iter().collect();
        Self {
            id: from.id.as_str(),
            name: &from.name,
            description: &from.description,
            hint: serde_json::to_string(&hint).unwrap_or_else(|_| "{}".to_string()),
            fullname: &from.fullname,
            picture_url: from.picture_url.as_deref(),
        }
    }
}

#[derive(Queryable)]
pub struct PlantEntity {
    pub id: String,
    pub name: String,
    pub description: String,
    pub hint: String,
    pub fullname: String,
    pub picture_url: Option<String>,
}

impl From<PlantEntity> for Plant {
    fn from(from: PlantEntity) -> Self {
        let PlantEntity {
            id,
            name,
            description,
            hint,
            fullname,
            picture_url,
        } = from;
        // A corrupt hint column degrades to an empty map.
        let hint: BTreeMap<String, String> = serde_json::from_str(&hint).unwrap_or_default();
        Self {
            id: id.into(),
            name,
            description,
            hint: hint.into(),
            fullname,
            picture_url,
        }
    }
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = tags)]
pub struct NewTag<'a> {
    pub id: &'a str,
    pub name: &'a str,
}

impl<'a> From<&'a Tag> for NewTag<'a> {
    fn from(from: &'a Tag) -> Self {
        Self {
            id: from.id.as_str(),
            name: &from.name,
        }
    }
}

#[derive(Queryable)]
pub struct TagEntity {
    pub id: String,
    pub name: String,
}

impl From<TagEntity> for Tag {
    fn from(from: TagEntity) -> Self {
        Self {
            id: from.id.into(),
            name: from.name,
        }
    }
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = photos)]
pub struct NewPhoto<'a> {
    pub id: &'a str,
    pub url: &'a str,
}

impl<'a> From<&'a Photo> for NewPhoto<'a> {
    fn from(from: &'a Photo) -> Self {
        Self {
            id: from.id.as_str(),
            url: &from.url,
        }
    }
}

#[derive(Queryable)]
pub struct PhotoEntity {
    pub id: String,
    pub url: String,
}

impl From<PhotoEntity> for Photo {
    fn from(from: PhotoEntity) -> Self {
        Self {
            id: from.id.into(),
            url: from.url,
        }
    }
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = messages)]
pub struct NewMessage<'a> {
    pub id: &'a str,
    pub user_id: &'a str,
    pub garden_id: &'a str,
    pub body: &'a str,
    pub created_at: i64,
}

impl<'a> From<&'a Message> for NewMessage<'a> {
    fn from(from: &'a Message) -> Self {
        Self {
            id: from.id.as_str(),
            user_id: from.user_id.as_str(),
            garden_id: from.garden_id.as_str(),
            body: &from.body,
            created_at: from.created_at.as_millis(),
        }
    }
}

#[derive(Queryable)]
pub struct MessageEntity {
    pub id: String,
    pub user_id: String,
    pub garden_id: String,
    pub body: String,
    pub created_at: i64,
}

impl From<MessageEntity> for Message {
    fn from(from: MessageEntity) -> Self {
        let MessageEntity {
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
            created_at: Timestamp::from_millis(created_at),
        }
    }
}

#[derive(Insertable)]
#[diesel(table_name = plant_tags)]
pub struct NewPlantTag<'a> {
    pub plant_id: &'a str,
    pub tag_id: &'a str,
}

#[derive(Insertable)]
#[diesel(table_name = plant_photos)]
pub struct NewPlantPhoto<'a> {
    pub plant_id: &'a str,
    pub photo_id: &'a str,
}

#[derive(Insertable)]
#[diesel(table_name = garden_plant_photos)]
pub struct NewGardenPlantPhoto<'a> {
    pub garden_id: &'a str,
    pub plant_id: &'a str,
    pub photo_id: &'a str,
}

impl<'a> From<&'a PlantSighting> for NewGardenPlantPhoto<'a> {
    fn from(from: &'a PlantSighting) -> Self {
        Self {
            garden_id: from.garden_id.as_str(),
            plant_id: from.plant_id.as_str(),
            photo_id: from.photo_id.as_str(),
        }
    }
}
