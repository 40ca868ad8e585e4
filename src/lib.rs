pub mod config;
pub mod errors;
pub mod modules;
pub mod server;

mod macros {
    pub mod query_error_handler;
}

pub mod routes {
    pub mod catchers;
    pub mod api {
        pub mod controle;
        pub mod error;
    }
}
