use crate::http::api_paths;
use crate::{ApiFailure, AuthError, AuthResult, RequestAuthenticator};

use std::time::Duration;

use bytes::Bytes;
use log::debug;
use reqwest::{Client as ReqwestClient, Method, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;

/// HTTP transport for the finance REST API.
///
/// Every request passes through the [`RequestAuthenticator`]; failures are
/// returned as [`ApiFailure`] after the authenticator has seen them.
pub struct ApiTransport {
    pub base_url: String,
    client: ReqwestClient,
    authenticator: RequestAuthenticator,
}

impl ApiTransport {
    /// Create a new transport
    ///
    /// # Arguments
    /// * `base_url` - API base (e.g., "http://127.0.0.1:8080/api")
    /// * `timeout` - Per-request timeout
    /// * `authenticator` - Outbound credential handling
    pub fn new(
        base_url: &str,
        timeout: Duration,
        authenticator: RequestAuthenticator,
    ) -> AuthResult<Self> {
        let client = ReqwestClient::builder()
            .timeout(timeout)
            .build()
            .map_err(AuthError::client_setup)?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            authenticator,
        })
    }

    pub fn url(&self, path: &str) -> String {
        api_paths::api_url(&self.base_url, path)
    }

    /// URL of `path` followed by `segment`, percent-encoded as a single
    /// path segment.
    pub fn url_with_segment(&self, path: &str, segment: &str) -> Result<Url, ApiFailure> {
        let base = self.url(path);
        let mut url = Url::parse(&base)
            .map_err(|e| ApiFailure::unclassified(base.clone(), format!("invalid URL: {e}")))?;
        url.path_segments_mut()
            .map_err(|_| ApiFailure::unclassified(base.clone(), "URL cannot carry a path"))?
            .push(segment);
        Ok(url)
    }

    /// Build a request against an API path
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client.request(method, self.url(path))
    }

    /// Build a request against an absolute URL
    pub fn request_url(&self, method: Method, url: Url) -> RequestBuilder {
        self.client.request(method, url)
    }

    /// Execute request; non-success statuses become failures
    pub async fn send(&self, builder: RequestBuilder) -> Result<Response, ApiFailure> {
        let mut request = builder.build().map_err(|e| {
            let url = e.url().map(Url::to_string).unwrap_or_default();
            ApiFailure::from_reqwest(url, e)
        })?;

        let credential = self.authenticator.authorize(&mut request);
        let method = request.method().clone();
        let url = request.url().to_string();
        debug!("{method} {url} ({credential:?})");

        let failure = match self.client.execute(request).await {
            Ok(response) if response.status().is_success() => return Ok(response),
            Ok(response) => {
                let status = response.status().as_u16();
                let body = response
                    .text()
                    .await
                    .ok()
                    .and_then(|text| ApiFailure::parse_body(&text));
                ApiFailure::response(url, status, body)
            }
            Err(e) => ApiFailure::from_reqwest(url, e),
        };

        self.authenticator.on_failure(credential, &failure);
        Err(failure)
    }

    /// Execute request and decode a JSON body; a blank or `null` body
    /// yields `None`
    pub async fn send_optional_json<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<Option<T>, ApiFailure> {
        let (status, url, text) = self.send_text(builder).await?;
        Self::decode_optional(status, url, &text)
    }

    /// Execute request and decode a required JSON body
    pub async fn send_json<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<T, ApiFailure> {
        let (status, url, text) = self.send_text(builder).await?;
        Self::decode_optional(status, url.clone(), &text)?
            .ok_or_else(|| ApiFailure::response(url, status, None))
    }

    async fn send_text(
        &self,
        builder: RequestBuilder,
    ) -> Result<(u16, String, String), ApiFailure> {
        let response = self.send(builder).await?;
        let status = response.status().as_u16();
        let url = response.url().to_string();
        let text = response
            .text()
            .await
            .map_err(|e| ApiFailure::from_reqwest(url.clone(), e))?;
        Ok((status, url, text))
    }

    fn decode_optional<T: DeserializeOwned>(
        status: u16,
        url: String,
        text: &str,
    ) -> Result<Option<T>, ApiFailure> {
        if text.trim().is_empty() {
            return Ok(None);
        }
        serde_json::from_str::<Option<T>>(text).map_err(|e| ApiFailure::decode(url, status, e))
    }

    /// Execute request and return the raw body
    pub async fn send_bytes(&self, builder: RequestBuilder) -> Result<Bytes, ApiFailure> {
        let response = self.send(builder).await?;
        let url = response.url().to_string();
        response
            .bytes()
            .await
            .map_err(|e| ApiFailure::from_reqwest(url, e))
    }
}
