//! Application flows that combine use cases with transactions
//! and image file side effects.
//!
//! Database changes are applied within a single transaction per
//! flow. Image files are written before and removed after the
//! transaction, i.e. a failed flow may leave unreferenced files
//! behind but never dangling references.

#[macro_use]
extern crate log;

mod create_garden;
mod create_plant;
mod create_user;
mod delete_garden;
mod delete_plant;
mod delete_user;
mod update_garden;
mod update_plant;
mod update_user;

pub mod prelude {
    pub use super::{
        create_garden::*, create_plant::*, create_user::*, delete_garden::*, delete_plant::*,
        delete_user::*, update_garden::*, update_plant::*, update_user::*,
    };
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use gk_core::{
    entities::*,
    gateways::images::{image_file_name, ImageStore},
    repositories::*,
    usecases,
};

#[cfg(test)]
mod tests;

pub(crate) mod sqlite {
    pub use gk_db_sqlite::Connections;
}
