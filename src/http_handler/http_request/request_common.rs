use super::response_common::HTTPResponseType;
use crate::http_handler::HTTPError;
use crate::http_handler::http_client::HTTPClient;

#[derive(Debug, Clone, Copy)]
pub(crate) enum HTTPRequestMethod {
    Get,
    Post,
    Put,
    Delete,
}

pub(crate) trait HTTPRequestType {
    type Response: HTTPResponseType;
    fn endpoint(&self) -> &str;
    fn request_method(&self) -> HTTPRequestMethod;
    fn header_params(&self) -> reqwest::header::HeaderMap {
        reqwest::header::HeaderMap::new()
    }

    fn build_request(&self, client: &HTTPClient) -> reqwest::RequestBuilder {
        let url = format!("{}{}", client.url(), self.endpoint());
        let builder = match self.request_method() {
            HTTPRequestMethod::Get => client.client().get(url),
            HTTPRequestMethod::Post => client.client().post(url),
            HTTPRequestMethod::Put => client.client().put(url),
            HTTPRequestMethod::Delete => client.client().delete(url),
        };
        builder.headers(self.header_params())
    }
}

pub(crate) trait NoBodyHTTPRequestType: HTTPRequestType {
    async fn send_request(
        &self,
        client: &HTTPClient,
    ) -> Result<<Self::Response as HTTPResponseType>::ParsedResponseType, HTTPError> {
        let response = self.build_request(client).send().await?;
        Ok(<Self::Response as HTTPResponseType>::read_response(response).await?)
    }
}

pub(crate) trait JSONBodyHTTPRequestType: HTTPRequestType {
    /// The type of the json body.
    type Body: serde::Serialize;
    /// Returns the serializable object.
    fn body(&self) -> &Self::Body;

    async fn send_request(
        &self,
        client: &HTTPClient,
    ) -> Result<<Self::Response as HTTPResponseType>::ParsedResponseType, HTTPError> {
        let response = self.build_request(client).json(self.body()).send().await?;
        Ok(<Self::Response as HTTPResponseType>::read_response(response).await?)
    }
}
