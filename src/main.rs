use log::info;
use rocket::{launch, Build, Rocket};

use acp_controle_times::config::Config;
use acp_controle_times::modules::helpers::logging::setup_logging;
use acp_controle_times::server;

#[launch]
fn rocket() -> Rocket<Build> {
    let config = Config::from_env().expect("Failed to read configuration");
    setup_logging(&config).expect("Failed to setup logging");

    info!(target:"main", "Opening for global access on {}:{}", config.host, config.port);

    server::build(config)
}
