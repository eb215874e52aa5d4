pub mod entities {
    pub use gk_entities::{
        botanist::*, email::*, garden::*, id::Id, message::*, password::Password, photo::*,
        plant::*, tag::*, time::Timestamp, user::*,
    };
}

pub mod gateways;
pub mod repositories;
pub mod usecases;
pub mod util;
