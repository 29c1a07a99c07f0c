use reqwest::{multipart::Form, Client, Response};
use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;
use url::Url;

use crate::error::{CmsError, Result};
use crate::types::ApiMessage;

pub struct CmsClient {
    http: Client,
    base_url: Url,
}

impl CmsClient {
    pub fn new(mut base_url: Url) -> Self {
        // Endpoints resolve relative to the base path, which must end in '/'
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Self {
            http: Client::new(),
            base_url,
        }
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| CmsError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                source: e,
            })
    }

    /// GET a JSON array, preserving the server's order.
    pub async fn get_list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>> {
        let url = self.endpoint(path)?;
        debug!(%url, "GET");

        let response = check_status(self.http.get(url).send().await?).await?;
        let items: Vec<T> = response.json().await?;

        debug!(path, count = items.len(), "received list");
        Ok(items)
    }

    pub async fn post_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<ApiMessage> {
        let url = self.endpoint(path)?;
        debug!(%url, "POST json");

        let response = self
            .http
            .post(url)
            .json(body)
            .send()
            .await?;

        read_message(check_status(response).await?).await
    }

    pub async fn post_multipart(&self, path: &str, form: Form) -> Result<ApiMessage> {
        let url = self.endpoint(path)?;
        debug!(%url, "POST multipart");

        let response = self.http.post(url).multipart(form).send().await?;

        read_message(check_status(response).await?).await
    }
}

async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    debug!(status = status.as_u16(), "response");

    if status.is_success() {
        return Ok(response);
    }

    Err(CmsError::ApiError {
        status: status.as_u16(),
        message: response
            .text()
            .await
            .unwrap_or_else(|_| "<failed to read response body>".to_string()),
    })
}

/// Acknowledgment bodies are informational; an empty or non-JSON body still counts as success.
async fn read_message(response: Response) -> Result<ApiMessage> {
    let text = response.text().await?;
    Ok(serde_json::from_str(&text).unwrap_or_default())
}
