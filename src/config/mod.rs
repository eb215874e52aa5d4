use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use anyhow::Result;

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "gardenkeeper.toml";

const ENV_NAME_DB_URL: &str = "DATABASE_URL";
const ENV_NAME_JWT_SECRET: &str = "JWT_SECRET";

pub struct Config {
    pub db: Db,
    pub webserver: WebServer,
}

pub struct Db {
    /// SQLite connection
    pub connection_sqlite: String,
    pub connection_pool_size: u8,
}

pub struct WebServer {
    /// Directory the uploaded image files are stored in.
    pub upload_dir: PathBuf,
    pub jwt_secret: Option<String>,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{DEFAULT_CONFIG_FILE_NAME} not found => load default configuration."
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::from(raw_config);
        if let Ok(db_url) = env::var(ENV_NAME_DB_URL) {
            cfg.db.connection_sqlite = db_url;
        }
        if let Ok(secret) = env::var(ENV_NAME_JWT_SECRET) {
            cfg.webserver.jwt_secret = Some(secret);
        }
        Ok(cfg)
    }
}

impl From<raw::Config> for Config {
    fn from(from: raw::Config) -> Self {
        let raw::Config { db, webserver } = from;
        Self {
            db: db.unwrap_or_default().into(),
            webserver: webserver.unwrap_or_default().into(),
        }
    }
}

impl From<raw::Db> for Db {
    fn from(from: raw::Db) -> Self {
        let raw::Db {
            connection_sqlite,
            connection_pool_size,
        } = from;
        Self {
            connection_sqlite,
            connection_pool_size,
        }
    }
}

impl From<raw::WebServer> for WebServer {
    fn from(from: raw::WebServer) -> Self {
        let raw::WebServer {
            upload_dir,
            jwt_secret,
        } = from;
        Self {
            upload_dir,
            jwt_secret,
        }
    }
}
