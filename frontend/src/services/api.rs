//! HTTP client for the grouping backend.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use web_sys::{File, FormData};

use super::submit::Backend;
use crate::config::{endpoint, FILES_FIELD, GENERATE_PATH, GROUPS_PATH, HEADERS_PATH};
use crate::types::{AppError, AppResult, GroupResult, HeadersResponse};

/// Talks to the backend at a fixed base URL.
#[derive(Clone, Debug)]
pub struct HttpBackend {
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        endpoint(&self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        let url = self.url(path);
        log::debug!("GET {}", url);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;
        let response = ensure_ok(response).await?;

        response
            .json::<T>()
            .await
            .map_err(|e| AppError::Decode(e.to_string()))
    }
}

impl Backend for HttpBackend {
    type File = File;

    async fn generate(&self, files: &[File]) -> AppResult<()> {
        let form_data = build_form_data(files)?;
        let url = self.url(GENERATE_PATH);
        log::debug!("POST {} ({} file(s))", url, files.len());

        let request = Request::post(&url)
            .body(form_data)
            .map_err(|e| AppError::Payload(e.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;
        let response = ensure_ok(response).await?;

        // Body is a status message only.
        if let Ok(text) = response.text().await {
            log::debug!("generate: {}", text);
        }
        Ok(())
    }

    async fn headers(&self) -> AppResult<Vec<String>> {
        let response: HeadersResponse = self.get_json(HEADERS_PATH).await?;
        Ok(response.headers)
    }

    async fn groups(&self) -> AppResult<GroupResult> {
        self.get_json(GROUPS_PATH).await
    }
}

/// Multipart payload with every file under [`FILES_FIELD`], in order.
pub fn build_form_data(files: &[File]) -> AppResult<FormData> {
    let form_data =
        FormData::new().map_err(|e| AppError::Payload(format!("Failed to create FormData: {:?}", e)))?;

    for file in files {
        form_data
            .append_with_blob_and_filename(FILES_FIELD, file, &file.name())
            .map_err(|e| AppError::Payload(format!("Failed to append {}: {:?}", file.name(), e)))?;
    }

    Ok(form_data)
}

async fn ensure_ok(response: Response) -> AppResult<Response> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    Err(AppError::Status { status, body })
}
