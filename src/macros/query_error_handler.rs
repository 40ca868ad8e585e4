/// unwrap the result of validating or calculating a controle query.
/// on an error the error is logged and returned to the client as a bad request.
macro_rules! query_handle_error_http {
    ( $data:expr, $target:expr ) => {
        match $data {
            Ok(e) => e,
            Err(error) => {
                warn!(target:$target, "Rejected controle query. (error: {})", error);
                return Err(ApiError::bad_request(&error));
            }
        }
    }
}

pub(crate) use query_handle_error_http;
