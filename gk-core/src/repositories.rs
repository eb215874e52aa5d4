// Low-level database access traits.
// Each repository is responsible for a single entity and
// its relationships. Related entities are only referenced
// by their id and never modified by another repository.

use std::io;

use thiserror::Error;

use crate::entities::*;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait UserRepo {
    fn create_user(&self, user: &User) -> Result<()>;
    fn update_user(&self, user: &User) -> Result<()>;
    fn delete_user(&self, id: &Id) -> Result<()>;

    fn get_user(&self, id: &Id) -> Result<User>;
    fn all_users(&self) -> Result<Vec<User>>;

    fn get_user_by_email(&self, email: &EmailAddress) -> Result<User>;
    fn try_get_user_by_email(&self, email: &EmailAddress) -> Result<Option<User>>;
}

pub trait BotanistRepo {
    fn create_botanist(&self, botanist: &Botanist) -> Result<()>;
    fn update_botanist(&self, botanist: &Botanist) -> Result<()>;
    fn delete_botanist(&self, id: &Id) -> Result<()>;

    // Reads project the referenced user.
    fn get_botanist(&self, id: &Id) -> Result<(Botanist, User)>;
    fn all_botanists(&self) -> Result<Vec<(Botanist, User)>>;
}

pub trait GardenRepo {
    fn create_garden(&self, garden: &Garden) -> Result<()>;
    fn update_garden(&self, garden: &Garden) -> Result<()>;
    fn delete_garden(&self, id: &Id) -> Result<()>;

    fn get_garden(&self, id: &Id) -> Result<Garden>;
    fn all_gardens(&self) -> Result<Vec<Garden>>;

    fn create_plant_sighting(&self, sighting: &PlantSighting) -> Result<()>;
    // Reads project the photo and the observed plant, never the raw join rows.
    fn sightings_of_garden(&self, garden_id: &Id) -> Result<Vec<(Photo, Plant)>>;
    fn delete_sightings_of_garden(&self, garden_id: &Id) -> Result<usize>;
}

pub trait PlantRepo {
    fn create_plant(&self, plant: &Plant) -> Result<()>;
    fn update_plant(&self, plant: &Plant) -> Result<()>;
    fn delete_plant(&self, id: &Id) -> Result<()>;

    fn get_plant(&self, id: &Id) -> Result<Plant>;
    fn all_plants(&self) -> Result<Vec<Plant>>;
    fn plant_exists(&self, id: &Id) -> Result<bool>;

    // Tag links (replace-all semantics).
    fn tags_of_plant(&self, plant_id: &Id) -> Result<Vec<Tag>>;
    fn replace_tags_of_plant(&self, plant_id: &Id, tag_ids: &[Id]) -> Result<()>;
    fn delete_tags_of_plant(&self, plant_id: &Id) -> Result<usize>;

    // Community photo links. Deleting removes both the link rows and
    // the owned photo rows; the deleted photos are returned so that
    // the caller can clean up the stored image files.
    fn photos_of_plant(&self, plant_id: &Id) -> Result<Vec<Photo>>;
    fn link_photos_to_plant(&self, plant_id: &Id, photo_ids: &[Id]) -> Result<()>;
    fn replace_photos_of_plant(&self, plant_id: &Id, photo_ids: &[Id]) -> Result<()>;
    fn delete_photos_of_plant(&self, plant_id: &Id) -> Result<Vec<Photo>>;
}

pub trait TagRepo {
    fn create_tag(&self, tag: &Tag) -> Result<()>;
    fn update_tag(&self, tag: &Tag) -> Result<()>;
    fn delete_tag(&self, id: &Id) -> Result<()>;

    fn get_tag(&self, id: &Id) -> Result<Tag>;
    fn all_tags(&self) -> Result<Vec<Tag>>;
}

pub trait PhotoRepo {
    fn create_photo(&self, photo: &Photo) -> Result<()>;
    fn update_photo(&self, photo: &Photo) -> Result<()>;
    fn delete_photo(&self, id: &Id) -> Result<()>;

    fn get_photo(&self, id: &Id) -> Result<Photo>;
    fn all_photos(&self) -> Result<Vec<Photo>>;
}

pub trait MessageRepo {
    fn create_message(&self, message: &Message) -> Result<()>;
    fn update_message(&self, message: &Message) -> Result<()>;
    fn delete_message(&self, id: &Id) -> Result<()>;

    fn get_message(&self, id: &Id) -> Result<Message>;
    fn all_messages(&self) -> Result<Vec<Message>>;
    fn messages_of_garden(&self, garden_id: &Id) -> Result<Vec<Message>>;
    fn delete_messages_of_garden(&self, garden_id: &Id) -> Result<usize>;
}
