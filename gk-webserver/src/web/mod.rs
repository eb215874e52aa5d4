use std::path::PathBuf;

use rocket::{config::Config as RocketCfg, fs::FileServer, Build, Rocket, Route};

use gk_core::gateways::images::ImageStore;

pub mod api;
mod guards;
pub mod jwt;
mod sqlite;


#[derive(Debug, Clone)]
pub struct Cfg {
    /// Directory the uploaded image files are stored in and
    /// served from under `/uploads`.
    pub upload_dir: PathBuf,
    /// Key for signing and validating bearer tokens. A random
    /// ephemeral key is generated if none is given, i.e. all
    /// tokens expire on restart.
    pub jwt_secret: Option<String>,
}

pub(crate) struct InstanceOptions {
    mounts: Vec<(&'static str, Vec<Route>)>,
    rocket_cfg: Option<RocketCfg>,
    cfg: Cfg,
}

pub(crate) fn rocket_instance(
    options: InstanceOptions,
    db: sqlite::Connections,
    image_store: Box<dyn ImageStore + Send + Sync>,
) -> Rocket<Build> {
    let InstanceOptions {
        mounts,
        rocket_cfg,
        cfg,
    } = options;

    let jwt_state = match &cfg.jwt_secret {
        Some(secret) => jwt::JwtState::with_secret(secret),
        None => {
            warn!("No JWT secret configured, generating an ephemeral one");
            jwt::JwtState::new()
        }
    };
    let upload_dir = cfg.upload_dir.clone();

    info!("Initialization finished");

    let r = match rocket_cfg {
        Some(cfg) => rocket::custom(cfg),
        None => rocket::build(),
    };

    let images = guards::Images(image_store);

    let mut instance = r
        .manage(db)
        .manage(jwt_state)
        .manage(images)
        .manage(cfg)
        .mount("/uploads", FileServer::from(upload_dir));

    for (m, r) in mounts {
        instance = instance.mount(m, r);
    }
    instance
}

fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/api", api::routes())]
}

pub async fn run(
    db: sqlite::Connections,
    image_store: Box<dyn ImageStore + Send + Sync>,
    cfg: Cfg,
) {
    let options = InstanceOptions {
        mounts: mounts(),
        rocket_cfg: None,
        cfg,
    };
    let instance = rocket_instance(options, db, image_store);
    if let Err(err) = instance.launch().await {
        error!("Unable to run web server: {err}");
    }
}
