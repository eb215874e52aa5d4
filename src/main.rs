#[macro_use]
extern crate log;

mod cli;
mod config;
mod seed;

fn main() {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    if let Err(err) = cli::run() {
        error!("{err}");
        std::process::exit(1);
    }
}
