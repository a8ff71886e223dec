use common::api::{
    LOCAL_JOBS_LIST, LOCAL_JOBS_SEARCH, LOCAL_RESUME_COMPARE, LOCAL_RESUME_UPLOAD,
    LOCAL_UPLOADS_LIST,
};
use common::error::ApiError;
use common::model::local::{FileListing, JobFile, LocalActionResponse, ResumeFile};
use common::requests::{CompareRequest, LocalSearchRequest};
use web_sys::File;

use super::{get_json, post_file, post_json};

pub async fn list_job_files() -> Result<Vec<JobFile>, ApiError> {
    let listing: FileListing<JobFile> = get_json(LOCAL_JOBS_LIST).await?;
    Ok(listing.files)
}

pub async fn list_resume_files() -> Result<Vec<ResumeFile>, ApiError> {
    let listing: FileListing<ResumeFile> = get_json(LOCAL_UPLOADS_LIST).await?;
    Ok(listing.files)
}

pub async fn run_search(request: &LocalSearchRequest) -> Result<LocalActionResponse, ApiError> {
    post_json(LOCAL_JOBS_SEARCH, request).await
}

pub async fn compare_resume(request: &CompareRequest) -> Result<LocalActionResponse, ApiError> {
    post_json(LOCAL_RESUME_COMPARE, request).await
}

pub async fn upload_resume(file: &File) -> Result<LocalActionResponse, ApiError> {
    post_file(LOCAL_RESUME_UPLOAD, file).await
}
