//! Demo application for statically typed entities.

use std::error::Error;

use config::Config;
use error::AppError;

mod components;
mod config;
mod error;
mod logger;
mod scenario;

/// Entry point of `hyp_rs` demo.
fn main() -> Result<(), Box<dyn Error + Send + Sync + 'static>> {
    run()?;
    Ok(())
}

fn run() -> Result<(), AppError> {
    let config = Config::from_env()?;
    let _handle = logger::init(config.log_level(), config.log_dir())?;
    log::info!("{} version {} started", config.name(), config.version());

    let body = scenario::motion();
    log::debug!("body components: {:?}", scenario::Body::component_names());
    let creature = scenario::damage();
    log::debug!("creature components: {:?}", scenario::Creature::component_names());
    let tuple = scenario::raw_tuple();

    log::info!("final body: {:?}", body);
    log::info!("final creature: {:?}", creature);
    log::info!("final tuple: {:?}", tuple);
    Ok(())
}
