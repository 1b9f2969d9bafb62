//! # Request Descriptors
//!
//! A request descriptor is built per call by the endpoint modules and handed to
//! [`ApiClient::dispatch`](super::client::ApiClient::dispatch). It carries only
//! what varies between endpoints; the base URL, timeout and `Authorization`
//! header are added by the client.

use std::path::Path;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Method;
use serde::Serialize;

use super::error::ApiError;

/// Method, path, payload and header overrides for one backend call.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    /// Path relative to the configured base URL, starting with `/`.
    pub path: String,
    pub body: RequestBody,
    pub headers: HeaderMap,
}

/// Request payload encodings used by the backend.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Empty,
    /// `application/json`
    Json(serde_json::Value),
    /// `application/x-www-form-urlencoded`, fields in insertion order.
    Form(Vec<(String, String)>),
    /// `multipart/form-data` with a single CSV file part.
    Multipart(CsvUpload),
}

/// CSV file to upload as the `file` part of a multipart body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvUpload {
    pub file_name: String,
    pub contents: Vec<u8>,
}

impl CsvUpload {
    pub fn new(file_name: impl Into<String>, contents: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: file_name.into(),
            contents: contents.into(),
        }
    }

    /// Read a CSV file from disk, keeping its file name for the upload.
    pub async fn from_path(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        let contents = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload.csv".to_string());
        Ok(Self::new(file_name, contents))
    }
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>, body: RequestBody) -> Self {
        Self {
            method,
            path: path.into(),
            body,
            headers: HeaderMap::new(),
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path, RequestBody::Empty)
    }

    /// POST with a JSON body serialized from `payload`.
    pub fn post_json<T: Serialize + ?Sized>(
        path: impl Into<String>,
        payload: &T,
    ) -> Result<Self, ApiError> {
        let value =
            serde_json::to_value(payload).map_err(|e| ApiError::Request(e.to_string()))?;
        Ok(Self::new(Method::POST, path, RequestBody::Json(value)))
    }

    pub fn post_form<K, V>(path: impl Into<String>, fields: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let fields = fields
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self::new(Method::POST, path, RequestBody::Form(fields))
    }

    pub fn post_multipart(path: impl Into<String>, upload: CsvUpload) -> Self {
        Self::new(Method::POST, path, RequestBody::Multipart(upload))
    }

    /// Add a header override. Applied after the body so it wins over the
    /// content type the encoder picks.
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }
}
