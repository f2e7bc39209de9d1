//! Stateless HTTP request builder and response parser for the books API.
//!
//! # Design
//! `BookClient` holds only a `base_url`. Each call is split into a `build_*`
//! method that produces an `HttpRequest` and a `parse_*` method that consumes
//! an `HttpResponse`. Any non-2xx status is a failure; no status code gets
//! special treatment.

use serde::de::{DeserializeOwned, IgnoredAny};

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Book, BookId, BookInput};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
pub const BOOKS_PATH: &str = "/api/books";

/// Synchronous, stateless client for the books API.
#[derive(Debug, Clone)]
pub struct BookClient {
    base_url: String,
}

impl Default for BookClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl BookClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}{BOOKS_PATH}", self.base_url)
    }

    fn item_url(&self, id: BookId) -> String {
        format!("{}{BOOKS_PATH}/{id}", self.base_url)
    }

    pub fn build_list_books(&self) -> HttpRequest {
        let req = HttpRequest {
            method: HttpMethod::Get,
            path: self.collection_url(),
            headers: Vec::new(),
            body: None,
        };
        tracing::info!(method = %req.method, url = %req.path, "request");
        req
    }

    pub fn build_create_book(&self, input: &BookInput) -> Result<HttpRequest, ApiError> {
        json_request(HttpMethod::Post, self.collection_url(), input)
    }

    pub fn build_update_book(&self, id: BookId, input: &BookInput) -> Result<HttpRequest, ApiError> {
        json_request(HttpMethod::Put, self.item_url(id), input)
    }

    pub fn build_delete_book(&self, id: BookId) -> HttpRequest {
        let req = HttpRequest {
            method: HttpMethod::Delete,
            path: self.item_url(id),
            headers: Vec::new(),
            body: None,
        };
        tracing::info!(method = %req.method, url = %req.path, "request");
        req
    }

    pub fn parse_list_books(&self, response: HttpResponse) -> Result<Vec<Book>, ApiError> {
        parse_json(response)
    }

    pub fn parse_create_book(&self, response: HttpResponse) -> Result<Book, ApiError> {
        parse_json(response)
    }

    pub fn parse_update_book(&self, response: HttpResponse) -> Result<Book, ApiError> {
        parse_json(response)
    }

    /// Accept a create or update response whose body is any JSON value,
    /// whether or not it has the shape of a `Book`.
    pub fn parse_save_ack(&self, response: HttpResponse) -> Result<(), ApiError> {
        parse_json::<IgnoredAny>(response).map(|_| ())
    }

    /// The body of a delete response is never read.
    pub fn parse_delete_book(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }
}

fn json_request(method: HttpMethod, path: String, input: &BookInput) -> Result<HttpRequest, ApiError> {
    let body = serde_json::to_string(input).map_err(|e| ApiError::Serialization(e.to_string()))?;
    tracing::info!(%method, url = %path, body = %body, "request");
    Ok(HttpRequest {
        method,
        path,
        headers: vec![("content-type".to_string(), "application/json".to_string())],
        body: Some(body),
    })
}

fn parse_json<T: DeserializeOwned>(response: HttpResponse) -> Result<T, ApiError> {
    check_status(&response)?;
    serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
}

fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    Err(ApiError::Status {
        status: response.status,
        body: response.body.clone(),
    })
}
