//! HTTP client wrapping reqwest with timeout enforcement and error
//! normalization.
//!
//! Every call resolves to either a decoded success value or an
//! [`HttpError`]; no reqwest or serde error ever escapes raw. The client is
//! the single chokepoint for all network traffic: base-URL prefixing, JSON
//! (de)serialization, cookie-based credentials, and the per-call timeout all
//! live here.

use std::time::Duration;

use log::debug;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::error::HttpError;
use crate::config::ApiConfig;

/// Field name the backend expects the uploaded file under.
const UPLOAD_FILE_FIELD: &str = "file";

/// Per-call configuration for the generic JSON path.
///
/// `timeout: None` means the config default (30s for JSON calls, 300s for
/// uploads). Caller headers are applied after the client's defaults, so a
/// caller-supplied `Content-Type` wins.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub timeout: Option<Duration>,
    pub headers: Vec<(String, String)>,
}

impl RequestOptions {
    pub fn timeout(timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
            ..Self::default()
        }
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }
}

/// A file to be sent through the multipart upload path.
#[derive(Debug, Clone)]
pub struct FileUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl FileUpload {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }
}

/// Cookie-aware HTTP client bound to one API base URL.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    config: ApiConfig,
}

impl HttpClient {
    /// Builds a client with a cookie store, so the backend's httpOnly
    /// session cookie is attached to every subsequent call.
    pub fn new(config: ApiConfig) -> Result<Self, HttpError> {
        let client = Client::builder()
            .cookie_store(true)
            .build()
            .map_err(|e| HttpError::transport(e.to_string()))?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Issues a request and decodes the response as opaque JSON.
    ///
    /// This is the escape hatch for calls that need a raw [`Value`] or a
    /// pre-serialized body; the verb helpers cover typed JSON requests.
    /// An empty success body decodes to an empty JSON object.
    #[tracing::instrument(skip(self, body, opts))]
    pub async fn request_value(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<Vec<u8>>,
        opts: &RequestOptions,
    ) -> Result<Value, HttpError> {
        let url = format!("{}{}", self.config.base_url(), endpoint);
        debug!("{} {}", method, url);

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        apply_headers(&mut headers, &opts.headers)?;

        let mut request = self.client.request(method, &url).headers(headers);
        if let Some(bytes) = body {
            request = request.body(bytes);
        }

        let timeout = opts.timeout.unwrap_or(self.config.timeout());
        let response = send_within(timeout, request).await?;
        decode(response).await
    }

    /// Typed variant of [`HttpClient::request_value`]: serializes the body
    /// before any network activity and decodes the response into `T`. A
    /// body that cannot be serialized fails with status 0 and no request is
    /// issued.
    async fn request_json<T, B>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&B>,
        opts: &RequestOptions,
    ) -> Result<T, HttpError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let bytes = match body {
            Some(body) => {
                Some(serde_json::to_vec(body).map_err(|e| HttpError::transport(e.to_string()))?)
            }
            None => None,
        };
        let value = self.request_value(method, endpoint, bytes, opts).await?;
        serde_json::from_value(value).map_err(|e| HttpError::transport(e.to_string()))
    }

    pub async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, HttpError> {
        self.get_json_with(endpoint, &RequestOptions::default())
            .await
    }

    pub async fn get_json_with<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        opts: &RequestOptions,
    ) -> Result<T, HttpError> {
        self.request_json::<T, Value>(Method::GET, endpoint, None, opts)
            .await
    }

    pub async fn delete_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, HttpError> {
        self.delete_json_with(endpoint, &RequestOptions::default())
            .await
    }

    pub async fn delete_json_with<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        opts: &RequestOptions,
    ) -> Result<T, HttpError> {
        self.request_json::<T, Value>(Method::DELETE, endpoint, None, opts)
            .await
    }

    pub async fn post_json<T, B>(&self, endpoint: &str, body: &B) -> Result<T, HttpError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.post_json_with(endpoint, body, &RequestOptions::default())
            .await
    }

    pub async fn post_json_with<T, B>(
        &self,
        endpoint: &str,
        body: &B,
        opts: &RequestOptions,
    ) -> Result<T, HttpError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request_json(Method::POST, endpoint, Some(body), opts)
            .await
    }

    pub async fn put_json<T, B>(&self, endpoint: &str, body: &B) -> Result<T, HttpError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.put_json_with(endpoint, body, &RequestOptions::default())
            .await
    }

    pub async fn put_json_with<T, B>(
        &self,
        endpoint: &str,
        body: &B,
        opts: &RequestOptions,
    ) -> Result<T, HttpError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request_json(Method::PUT, endpoint, Some(body), opts)
            .await
    }

    pub async fn patch_json<T, B>(&self, endpoint: &str, body: &B) -> Result<T, HttpError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.patch_json_with(endpoint, body, &RequestOptions::default())
            .await
    }

    pub async fn patch_json_with<T, B>(
        &self,
        endpoint: &str,
        body: &B,
        opts: &RequestOptions,
    ) -> Result<T, HttpError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request_json(Method::PATCH, endpoint, Some(body), opts)
            .await
    }

    /// Multipart upload: the file under the fixed `file` field plus one
    /// text part per extra field. No explicit `Content-Type` is set; the
    /// transport provides the multipart boundary. Uses the (longer) upload
    /// timeout by default.
    pub async fn upload<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        file: FileUpload,
        fields: &[(&str, &str)],
    ) -> Result<T, HttpError> {
        self.upload_with(endpoint, file, fields, &RequestOptions::default())
            .await
    }

    #[tracing::instrument(skip(self, file, fields, opts))]
    pub async fn upload_with<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        file: FileUpload,
        fields: &[(&str, &str)],
        opts: &RequestOptions,
    ) -> Result<T, HttpError> {
        let url = format!("{}{}", self.config.base_url(), endpoint);
        debug!("POST {} (multipart, {} bytes)", url, file.bytes.len());

        let mut form = Form::new().part(
            UPLOAD_FILE_FIELD,
            Part::bytes(file.bytes).file_name(file.file_name),
        );
        for (name, value) in fields {
            form = form.text(name.to_string(), value.to_string());
        }

        let mut headers = HeaderMap::new();
        apply_headers(&mut headers, &opts.headers)?;

        let request = self.client.post(&url).headers(headers).multipart(form);
        let timeout = opts.timeout.unwrap_or(self.config.upload_timeout());
        let response = send_within(timeout, request).await?;
        let value = decode(response).await?;
        serde_json::from_value(value).map_err(|e| HttpError::transport(e.to_string()))
    }
}

fn apply_headers(headers: &mut HeaderMap, extra: &[(String, String)]) -> Result<(), HttpError> {
    for (name, value) in extra {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| HttpError::transport(e.to_string()))?;
        let value =
            HeaderValue::from_str(value).map_err(|e| HttpError::transport(e.to_string()))?;
        headers.insert(name, value);
    }
    Ok(())
}

/// Races the send against the per-call timeout. Dropping the losing branch
/// cancels the in-flight request, so a late response is discarded and
/// nothing outlives the call.
async fn send_within(timeout: Duration, request: RequestBuilder) -> Result<Response, HttpError> {
    match tokio::time::timeout(timeout, request.send()).await {
        Ok(Ok(response)) => Ok(response),
        Ok(Err(e)) => Err(HttpError::transport(e.to_string())),
        Err(_) => Err(HttpError::timeout()),
    }
}

/// Closes every response path into the normalized contract.
async fn decode(response: Response) -> Result<Value, HttpError> {
    let status = response.status();
    if !status.is_success() {
        let status_text = status
            .canonical_reason()
            .unwrap_or("Unknown Status")
            .to_string();
        // Detail is best-effort: an unparseable failure body yields no
        // detail, never a secondary error.
        let detail = match response.text().await {
            Ok(text) => serde_json::from_str(&text).ok(),
            Err(_) => None,
        };
        debug!("request failed with HTTP {}", status.as_u16());
        return Err(HttpError::protocol(status.as_u16(), status_text, detail));
    }

    let text = response
        .text()
        .await
        .map_err(|e| HttpError::transport(e.to_string()))?;
    if text.trim().is_empty() {
        return Ok(Value::Object(Map::new()));
    }
    serde_json::from_str(&text).map_err(|e| HttpError::transport(e.to_string()))
}
