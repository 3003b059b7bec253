use super::http_response::response_common::ResponseError;
use strum_macros::Display;

#[derive(Debug, Display)]
pub enum HTTPError {
    HTTPRequestError(reqwest::Error),
    HTTPResponseError(ResponseError),
}

impl std::error::Error for HTTPError {}

impl From<ResponseError> for HTTPError {
    fn from(value: ResponseError) -> Self {
        HTTPError::HTTPResponseError(value)
    }
}

impl From<reqwest::Error> for HTTPError {
    fn from(value: reqwest::Error) -> Self {
        HTTPError::HTTPRequestError(value)
    }
}
