// src/client/mod.rs

//! Collection API client.
//!
//! Thin wrapper over the museum's search, object-detail, and department
//! endpoints. Transport failures surface as `Network`, a missing object
//! as `NotFound`, and an undecodable payload as `MalformedResponse`.
//! No retries happen at this layer.

mod wire;

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::{AppError, Result};
use crate::models::{ApiConfig, ArtworkRecord, Department, ObjectId};
use crate::query::SearchQuery;

use wire::{DepartmentsPayload, ObjectPayload, SearchPayload};

/// Read-only access to the remote collection.
///
/// The resolver is written against this trait so tests can substitute a
/// scripted backend.
#[async_trait]
pub trait CollectionApi {
    /// Run a search and return matching object ids in remote order.
    async fn search(&self, query: &SearchQuery) -> Result<Vec<ObjectId>>;

    /// Fetch the full record for one object.
    async fn get_object(&self, id: ObjectId) -> Result<ArtworkRecord>;

    /// List the museum's curatorial departments.
    async fn departments(&self) -> Result<Vec<Department>>;
}

/// reqwest-backed client for the live collection API.
pub struct HttpClient {
    http: reqwest::Client,
    base_url: Url,
}

impl HttpClient {
    /// Create a client from API configuration.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        // A trailing slash matters for Url::join
        let mut base = config.base_url.clone();
        if !base.ends_with('/') {
            base.push('/');
        }
        let base_url = Url::parse(&base)?;

        Ok(Self { http, base_url })
    }

    /// Decode a response body, mapping decode failures to `MalformedResponse`.
    async fn decode<T: DeserializeOwned>(
        response: reqwest::Response,
        context: &str,
    ) -> Result<T> {
        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|e| AppError::malformed(context, e))
    }
}

#[async_trait]
impl CollectionApi for HttpClient {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<ObjectId>> {
        let url = self.base_url.join("search")?;

        // The endpoint wants q present even when empty
        let mut params: Vec<(&str, String)> = vec![("q", query.q.clone())];
        if query.is_highlight {
            params.push(("isHighlight", "true".to_string()));
        }
        if let Some(department_id) = query.department_id {
            params.push(("departmentId", department_id.to_string()));
        }

        log::debug!("GET {} {:?}", url, params);
        let response = self
            .http
            .get(url)
            .query(&params)
            .send()
            .await?
            .error_for_status()?;

        let payload: SearchPayload = Self::decode(response, "search").await?;
        Ok(payload.object_ids.unwrap_or_default())
    }

    async fn get_object(&self, id: ObjectId) -> Result<ArtworkRecord> {
        let url = self.base_url.join(&format!("objects/{id}"))?;

        log::debug!("GET {}", url);
        let response = self.http.get(url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(AppError::NotFound(id));
        }
        let response = response.error_for_status()?;

        let payload: ObjectPayload = Self::decode(response, "objects").await?;
        Ok(payload.into())
    }

    async fn departments(&self) -> Result<Vec<Department>> {
        let url = self.base_url.join("departments")?;

        log::debug!("GET {}", url);
        let response = self.http.get(url).send().await?.error_for_status()?;

        let payload: DepartmentsPayload = Self::decode(response, "departments").await?;
        Ok(payload.departments.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_normalizes_base_url() {
        let config = ApiConfig {
            base_url: "https://example.com/v1".to_string(),
            ..ApiConfig::default()
        };
        let client = HttpClient::new(&config).unwrap();
        assert_eq!(
            client.base_url.join("search").unwrap().as_str(),
            "https://example.com/v1/search"
        );
    }

    #[test]
    fn test_new_rejects_invalid_base_url() {
        let config = ApiConfig {
            base_url: "not a url".to_string(),
            ..ApiConfig::default()
        };
        assert!(HttpClient::new(&config).is_err());
    }
}
