use std::{fmt::Display, result};

use gk_boundary::Error as JsonErrorResponse;
use rocket::serde::json::{Error as JsonError, Json};
use rocket::{
    self, delete, get,
    http::Status,
    post, put,
    response::{self, Responder},
    routes, Route, State,
};

use super::guards::*;
use crate::{
    adapters::json::{self, from_json, to_json},
    web::{jwt, sqlite},
};
use gk_application::prelude as flows;
use gk_core::{entities::*, repositories::*, usecases};

mod botanists;
mod error;
mod gardens;
mod messages;
mod photos;
mod plants;
mod tags;
mod users;

pub use self::error::Error as ApiError;

#[cfg(test)]
pub mod tests;

type Result<T> = result::Result<Json<T>, ApiError>;
type JsonResult<'a, T> = result::Result<Json<T>, JsonError<'a>>;
type CreatedResult<T> = result::Result<(Status, Json<T>), ApiError>;
type StatusResult = result::Result<Status, ApiError>;

pub fn routes() -> Vec<Route> {
    routes![
        // ---   users   --- //
        users::post_login,
        users::post_logout,
        users::post_signup,
        users::get_users,
        users::get_user,
        users::post_user,
        users::put_user,
        users::delete_user,
        // ---   botanists   --- //
        botanists::get_botanists,
        botanists::get_botanist,
        botanists::post_botanist,
        botanists::put_botanist,
        botanists::delete_botanist,
        // ---   gardens   --- //
        gardens::get_gardens,
        gardens::get_garden,
        gardens::post_garden,
        gardens::put_garden,
        gardens::delete_garden,
        // ---   plants   --- //
        plants::get_plants,
        plants::get_plant,
        plants::post_plant,
        plants::put_plant,
        plants::delete_plant,
        // ---   tags   --- //
        tags::get_tags,
        tags::get_tag,
        tags::post_tag,
        tags::put_tag,
        tags::delete_tag,
        // ---   photos   --- //
        photos::get_photos,
        photos::get_photo,
        photos::post_photo,
        photos::put_photo,
        photos::delete_photo,
        // ---   messages   --- //
        messages::get_messages,
        messages::get_message,
        messages::post_message,
        messages::put_message,
        messages::delete_message,
    ]
}

fn json_error_response<'r, 'o: 'r, E: Display>(
    req: &'r rocket::Request<'_>,
    err: &E,
    status: Status,
) -> response::Result<'o> {
    let boundary_error = JsonErrorResponse {
        error: err.to_string(),
    };
    Json(boundary_error).respond_to(req).map(|mut res| {
        res.set_status(status);
        res
    })
}
