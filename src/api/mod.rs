//! REST API Client
//!
//! Typed wrappers over the study service. Endpoints live in `auth` and
//! `study` as `impl ApiClient` blocks. Requests carry the persisted bearer
//! token when one exists.

mod auth;
mod study;

use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::config::AppConfig;
use crate::error::ApiError;
use crate::models::ErrorBody;
use crate::storage::{self, LocalStorage};

/// Whether a 401 means "session expired" or just "bad credentials"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Access {
    Public,
    Authorized,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
    retry: u32,
}

impl ApiClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            base_url: config.api_base_url.clone(),
            retry: config.query.retry,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let request = reqwest::Client::new()
            .request(method, self.url(path))
            .header("Accept", "application/json");
        match storage::load_token(&LocalStorage) {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn execute(
        &self,
        request: RequestBuilder,
        access: Access,
        fallback: &str,
    ) -> Result<Response, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        log::debug!("{} {}", status.as_u16(), response.url());

        if status.is_success() {
            return Ok(response);
        }
        if status == StatusCode::UNAUTHORIZED && access == Access::Authorized {
            return Err(ApiError::Unauthorized);
        }

        let body = response.json::<ErrorBody>().await.unwrap_or_default();
        Err(ApiError::Status {
            status: status.as_u16(),
            message: error_message(body, fallback),
        })
    }

    /// Authorized GET, retried on transport errors and 5xx
    async fn get_json<T: DeserializeOwned>(&self, path: &str, fallback: &str) -> Result<T, ApiError> {
        let mut attempt = 0;
        loop {
            let result = match self.execute(self.request(Method::GET, path), Access::Authorized, fallback).await {
                Ok(response) => response.json::<T>().await.map_err(ApiError::from),
                Err(err) => Err(err),
            };
            match result {
                Err(err) if err.is_retryable() && attempt < self.retry => {
                    attempt += 1;
                    log::warn!("GET {path} failed ({err}), retry {attempt}/{}", self.retry);
                }
                other => return other,
            }
        }
    }
}

fn error_message(body: ErrorBody, fallback: &str) -> String {
    body.message
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_base_and_path() {
        let client = ApiClient::new(&AppConfig {
            api_base_url: "https://study.example.com".into(),
            ..AppConfig::from_env()
        });
        assert_eq!(client.url("/api/v1/studies/3"), "https://study.example.com/api/v1/studies/3");
    }

    #[test]
    fn test_error_message_prefers_server_text() {
        let body: ErrorBody = serde_json::from_str(r#"{"message":"이미 참여한 스터디입니다"}"#).unwrap();
        assert_eq!(error_message(body, "스터디 참가에 실패했습니다."), "이미 참여한 스터디입니다");

        let blank: ErrorBody = serde_json::from_str(r#"{"message":"  "}"#).unwrap();
        assert_eq!(error_message(blank, "스터디 참가에 실패했습니다."), "스터디 참가에 실패했습니다.");
        assert_eq!(error_message(ErrorBody::default(), "x"), "x");
    }
}
