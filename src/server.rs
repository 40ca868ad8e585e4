use rocket::{catchers, routes, Build, Rocket};

use crate::config::Config;
use crate::routes::api;

/// # build the webserver
/// mount all routes and hand the config to rocket as managed state.
pub fn build(config: Config) -> Rocket<Build> {
    rocket::custom(config.figment())
        .manage(config)
        .mount(
            "/",
            routes![
                // service
                api::controle::index,
                api::controle::index_page,
                api::controle::get_all_brevets,
                // controles
                api::controle::calc_times,
            ],
        )
        .register(
            "/",
            catchers![
                crate::routes::catchers::page_not_found,
                crate::routes::catchers::not_supported,
            ],
        )
}
