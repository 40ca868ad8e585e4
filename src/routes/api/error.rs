use std::io::Cursor;

use rocket::http::{ContentType, Status};
use rocket::response;
use rocket::response::{Responder, Response};
use rocket::Request;
use serde::Serialize;

use crate::errors::Error;

/// # Struct representing a json error response
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ApiError {
    #[serde(skip)]
    pub status: Status,
    pub error: String,
    pub message: String,
}

impl ApiError {
    pub fn new(status: Status, error: &str, message: String) -> ApiError {
        ApiError {
            status,
            error: error.to_string(),
            message,
        }
    }

    pub fn bad_request(error: &Error) -> ApiError {
        ApiError::new(Status::BadRequest, error.code(), error.to_string())
    }
}

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, _: &'r Request<'_>) -> response::Result<'static> {
        let body = serde_json::to_string(&self).map_err(|_| Status::InternalServerError)?;

        Response::build()
            .status(self.status)
            .header(ContentType::JSON)
            .sized_body(body.len(), Cursor::new(body))
            .ok()
    }
}
