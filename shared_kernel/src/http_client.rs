use lazy_static::lazy_static;
use reqwest::Response;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;
use serde::de::DeserializeOwned;
use thiserror::Error as ThisError;
use url::Url;

lazy_static! {
    static ref CLIENT: ClientWithMiddleware = ClientBuilder::new(reqwest::Client::new())
        .with(TracingMiddleware::default())
        .build();
}

/// Process-wide GET-only client. The two failure modes are kept apart so
/// callers can tell "the network call never completed" from "the body was
/// not the JSON we asked for".
pub struct HttpClient;

#[derive(ThisError, Debug)]
pub enum HttpClientError {
    #[error("request to {url} failed")]
    Request {
        url: Url,
        #[source]
        source: reqwest_middleware::Error,
    },
    #[error("response from {url} was not valid JSON")]
    Decode {
        url: Url,
        #[source]
        source: reqwest::Error,
    },
}

impl HttpClient {
    async fn get(url: Url) -> Result<Response, HttpClientError> {
        CLIENT
            .get(url.clone())
            .send()
            .await
            .map_err(|source| HttpClientError::Request { url, source })
    }

    pub async fn get_json<DTO: DeserializeOwned>(url: Url) -> Result<DTO, HttpClientError> {
        let response = Self::get(url.clone()).await?;
        response
            .json::<DTO>()
            .await
            .map_err(|source| HttpClientError::Decode { url, source })
    }
}
