use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use gk_db_sqlite::Connections;

use crate::{config::Config, seed};

#[derive(Parser)]
#[command(version, about = "Community gardening and plant-sitting backend")]
struct Args {
    /// Path to the configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Start the web server (default)
    Run,
    /// Populate an empty database with sample data
    Seed,
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    let cfg = Config::try_load_from_file_or_default(args.config.as_deref())?;

    info!("Opening database {}", cfg.db.connection_sqlite);
    let connections = Connections::init(
        &cfg.db.connection_sqlite,
        u32::from(cfg.db.connection_pool_size),
    )?;
    gk_db_sqlite::run_embedded_database_migrations(connections.exclusive()?);

    match args.command.unwrap_or(Command::Run) {
        Command::Run => run_server(connections, cfg),
        Command::Seed => seed::run(&connections),
    }
}

fn run_server(connections: Connections, cfg: Config) -> Result<()> {
    let image_store = gk_gateways::FsImageStore::new(&cfg.webserver.upload_dir)?;
    let web_cfg = gk_webserver::Cfg {
        upload_dir: cfg.webserver.upload_dir,
        jwt_secret: cfg.webserver.jwt_secret,
    };
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(gk_webserver::run(
        connections,
        Box::new(image_store),
        web_cfg,
    ));
    Ok(())
}
