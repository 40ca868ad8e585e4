use log::debug;
use rocket::http::Status;
use rocket::{catch, Request};

use crate::routes::api::error::ApiError;

#[catch(404)]
pub fn page_not_found(request: &Request) -> ApiError {
    debug!(target:"routes/catchers:page_not_found", "Page not found: {}", request.uri());
    ApiError::new(Status::NotFound, "not_found", format!("no route for {}", request.uri()))
}

#[catch(501)]
pub fn not_supported(request: &Request) -> ApiError {
    debug!(target:"routes/catchers:not_supported", "Not supported: {}", request.uri());
    ApiError::new(
        Status::NotImplemented,
        "not_supported",
        format!("{} is not supported", request.uri()),
    )
}
