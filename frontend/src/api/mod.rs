//! HTTP client for the external job search & matching service.
//!
//! Every function issues exactly one request against `common::api::API_BASE_URL`
//! and maps the outcome into `ApiError`. Nothing here retries or times out;
//! callers decide what to show.
//!
//! - `matching`: search, resume upload, job store and match analysis.
//! - `local`: saved-file listings and the dashboard's local actions.

pub mod local;
pub mod matching;

use common::api::endpoint;
use common::error::ApiError;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::{File, FormData};

/// Form field name the service expects the uploaded file under.
const FILE_FIELD: &str = "file";

pub(crate) async fn get_json<R: DeserializeOwned>(path: &str) -> Result<R, ApiError> {
    let response = Request::get(&endpoint(path))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_json(response).await
}

pub(crate) async fn post_json<B, R>(path: &str, body: &B) -> Result<R, ApiError>
where
    B: Serialize,
    R: DeserializeOwned,
{
    let response = send_json(path, body).await?;
    read_json(response).await
}

/// Same as `post_json` but only the status matters.
pub(crate) async fn post_json_discarding_body<B: Serialize>(
    path: &str,
    body: &B,
) -> Result<(), ApiError> {
    let response = send_json(path, body).await?;
    if response.ok() {
        Ok(())
    } else {
        Err(read_failure(response).await)
    }
}

/// Sends `file` as `multipart/form-data`. The browser sets the boundary
/// header itself, so no content type is given here.
pub(crate) async fn post_file<R: DeserializeOwned>(path: &str, file: &File) -> Result<R, ApiError> {
    let form = FormData::new().map_err(|e| ApiError::Browser(format!("{:?}", e)))?;
    form.append_with_blob_and_filename(FILE_FIELD, file, &file.name())
        .map_err(|e| ApiError::Browser(format!("{:?}", e)))?;

    let response = Request::post(&endpoint(path))
        .body(form)
        .map_err(|e| ApiError::Browser(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_json(response).await
}

async fn send_json<B: Serialize>(path: &str, body: &B) -> Result<Response, ApiError> {
    Request::post(&endpoint(path))
        .json(body)
        .map_err(|e| ApiError::Encode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))
}

async fn read_json<R: DeserializeOwned>(response: Response) -> Result<R, ApiError> {
    if !response.ok() {
        return Err(read_failure(response).await);
    }
    response
        .json::<R>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

async fn read_failure(response: Response) -> ApiError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    ApiError::from_status(status, &body)
}
