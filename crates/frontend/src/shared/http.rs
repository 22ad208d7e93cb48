//! Thin JSON client over `gloo-net` for the REST collections.

use contracts::domain::common::ListEnvelope;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashSet;
use thiserror::Error;

/// Upper bound on followed `next` links for one collection load.
pub const MAX_PAGES: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server returned {status} for {url}")]
    Status { status: u16, url: String },
    #[error("failed to parse response: {0}")]
    Decode(String),
    #[error("failed to encode request: {0}")]
    Encode(String),
    /// A newer load for the same data started before this one finished.
    #[error("superseded by a newer request")]
    Superseded,
}

impl ApiError {
    pub fn is_superseded(&self) -> bool {
        matches!(self, ApiError::Superseded)
    }
}

fn check(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        Ok(response)
    } else {
        Err(ApiError::Status {
            status: response.status(),
            url: response.url(),
        })
    }
}

pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    check(response)?
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// GET a collection, accepting a bare array or a paginated envelope. Every
/// `next` link is followed and the pages concatenated.
pub async fn fetch_all<T: DeserializeOwned>(url: &str) -> Result<Vec<T>, ApiError> {
    let mut items = Vec::new();
    let mut visited = HashSet::new();
    let mut next = Some(url.to_string());

    while let Some(page_url) = next.take() {
        if !visited.insert(page_url.clone()) || visited.len() > MAX_PAGES {
            log::warn!("stopped following pagination at {}", page_url);
            break;
        }
        let envelope: ListEnvelope<T> = get_json(&page_url).await?;
        next = envelope.next_page().map(str::to_string);
        items.extend(envelope.into_items());
    }

    log::debug!("fetched {} records from {}", items.len(), url);
    Ok(items)
}

pub async fn create<B, R>(url: &str, body: &B) -> Result<R, ApiError>
where
    B: Serialize,
    R: DeserializeOwned,
{
    let response = Request::post(url)
        .json(body)
        .map_err(|e| ApiError::Encode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    check(response)?
        .json::<R>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Full replace of one record.
pub async fn update<B, R>(url: &str, body: &B) -> Result<R, ApiError>
where
    B: Serialize,
    R: DeserializeOwned,
{
    let response = Request::put(url)
        .json(body)
        .map_err(|e| ApiError::Encode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    check(response)?
        .json::<R>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

pub async fn delete(url: &str) -> Result<(), ApiError> {
    let response = Request::delete(url)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    check(response).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ApiError::Status {
            status: 404,
            url: "http://h/api/products/9/".to_string(),
        };
        assert_eq!(err.to_string(), "server returned 404 for http://h/api/products/9/");
        assert!(!err.is_superseded());
        assert!(ApiError::Superseded.is_superseded());
    }
}
