#[macro_use]
extern crate log;

use gk_core::gateways::images::ImageStore;
use gk_db_sqlite::Connections;

mod adapters;
mod web;

pub use web::Cfg;

pub async fn run(connections: Connections, image_store: Box<dyn ImageStore + Send + Sync>, cfg: Cfg) {
    web::run(connections.into(), image_store, cfg).await;
}
