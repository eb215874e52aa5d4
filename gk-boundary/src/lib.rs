use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;
#[cfg(feature = "entity-conversions")]
pub use conv::*;

/// The password and its hash are never part of any serializable shape.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id          : String,
    pub firstname   : String,
    pub lastname    : String,
    pub email       : String,
    pub picture_url : Option<String>,
    pub publishable : bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub password: String,
    /// Either a plain URL or a base64 data-URI that is stored on upload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
    #[serde(default)]
    pub publishable: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateUser {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
    #[serde(default)]
    pub publishable: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub user: User,
    pub token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Botanist {
    pub id: String,
    pub user_id: String,
    pub siret: String,
    pub user: User,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewBotanist {
    pub user_id: String,
    pub siret: String,
}

#[rustfmt::skip]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Garden {
    pub id          : String,
    pub latitude    : f64,
    pub longitude   : f64,
    pub address     : String,
    pub city        : String,
    pub zipcode     : String,
    pub owner_id    : String,
    pub status      : String,
    pub botanist_id : Option<String>,
    pub photos      : Vec<GardenPhoto>,
}

/// A photographed plant observed in a garden.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GardenPhoto {
    pub photo: Photo,
    pub plant: Plant,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewGarden {
    pub latitude: f64,
    pub longitude: f64,
    pub address: String,
    pub city: String,
    pub zipcode: String,
    pub owner_id: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub botanist_id: Option<String>,
    /// Batched photo uploads, each filed under a plant reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photos: Option<Vec<NewGardenPhoto>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewGardenPhoto {
    /// Base64 payload, optionally prefixed with a data-URI header.
    pub image: String,
    /// Unresolvable references fall back to the sentinel plant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plant_id: Option<String>,
}

#[rustfmt::skip]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plant {
    pub id          : String,
    pub name        : String,
    pub description : String,
    pub hint        : BTreeMap<String, String>,
    pub fullname    : String,
    pub picture_url : Option<String>,
    pub tags        : Vec<Tag>,
    pub photos      : Vec<Photo>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPlant {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub fullname: String,
    #[serde(default)]
    pub hint: BTreeMap<String, String>,
    /// Either a plain URL or a base64 data-URI that is stored on upload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
    /// Base64 community photo uploads.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
    /// Tag ids, replace-all semantics. Omitting the field keeps the
    /// existing links.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTag {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Photo {
    pub id: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPhoto {
    pub url: String,
}

#[rustfmt::skip]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id         : String,
    pub user_id    : String,
    pub garden_id  : String,
    pub body       : String,
    pub created_at : i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMessage {
    pub user_id: String,
    pub garden_id: String,
    pub body: String,
}

/// JSON body of all failure responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Error {
    pub error: String,
}
