//! Upstream API client implementation

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::domain::entities::{Billboard, BillboardSlot, Post, TimeFrame};
use crate::domain::ports::{BillboardSource, PostSource};
use crate::error::FetchError;

/// Implementation of the post and billboard sources over HTTP
pub struct UpstreamClient {
    http: Client,
    base_url: String,
}

impl UpstreamClient {
    pub fn new(base_url: String, timeout: Duration) -> Result<Self, FetchError> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn handle_response<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, FetchError> {
        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| FetchError::Deserialization(e.to_string()))
        } else if status == StatusCode::TOO_MANY_REQUESTS {
            Err(FetchError::RateLimited)
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(FetchError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[async_trait]
impl PostSource for UpstreamClient {
    async fn fetch_posts(&self, time_frame: &TimeFrame) -> Result<Vec<Post>, FetchError> {
        let mut request = self
            .http
            .get(self.url("/stories/feed"))
            .header("Accept", "application/json")
            .query(&[("page", "1")]);
        if !time_frame.is_default() {
            request = request.query(&[("timeframe", time_frame.as_str())]);
        }

        let resp = request.send().await?;
        self.handle_response(resp).await
    }
}

#[async_trait]
impl BillboardSource for UpstreamClient {
    async fn fetch_billboard(&self, slot: BillboardSlot) -> Result<Option<Billboard>, FetchError> {
        let resp = self
            .http
            .get(self.url(&format!("/billboards/{}", slot)))
            .send()
            .await?;

        let status = resp.status();
        if status == StatusCode::NOT_FOUND || status == StatusCode::NO_CONTENT {
            return Ok(None);
        }
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(FetchError::RateLimited);
        }
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(FetchError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let markup = resp.text().await?;
        if markup.trim().is_empty() {
            Ok(None)
        } else {
            Ok(Some(Billboard::new(slot, markup)))
        }
    }
}
