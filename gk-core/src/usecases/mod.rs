mod create_new_user;
mod delete_garden;
mod delete_plant;
mod delete_user;
mod error;
mod login;
mod store_botanist;
mod store_garden;
mod store_message;
mod store_photo;
mod store_plant;
mod store_tag;
mod update_user;


pub use self::{
    create_new_user::*, delete_garden::*, delete_plant::*, delete_user::*, error::Error,
    login::*, store_botanist::*, store_garden::*, store_message::*, store_photo::*,
    store_plant::*, store_tag::*, update_user::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, repositories::*};
    pub use crate::repositories::Error as RepoError;
}
