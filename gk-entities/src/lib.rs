#![deny(missing_debug_implementations)]
#![cfg_attr(test, deny(warnings))]

//! # gk-entities
//!
//! Reusable, agnostic domain entities for the gardenkeeper platform.
//!
//! The entities only contain generic functionality that does not reveal any
//! application-specific business logic.

pub mod botanist;
pub mod email;
pub mod garden;
pub mod id;
pub mod message;
pub mod password;
pub mod photo;
pub mod plant;
pub mod tag;
pub mod time;
pub mod user;
