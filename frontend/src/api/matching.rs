use common::api::{JOBS_SEARCH, MATCHING_ANALYZE, MATCHING_STORE_JOB, RESUME_UPLOAD};
use common::error::ApiError;
use common::model::job::{JobPosting, JobSearchResponse};
use common::model::matching::MatchResult;
use common::model::resume::ResumeReference;
use common::requests::{AnalyzeRequest, JobSearchRequest};
use web_sys::File;

use super::{post_file, post_json, post_json_discarding_body};

pub async fn search_jobs(request: &JobSearchRequest) -> Result<Vec<JobPosting>, ApiError> {
    let response: JobSearchResponse = post_json(JOBS_SEARCH, request).await?;
    Ok(response.jobs)
}

pub async fn upload_resume(file: &File) -> Result<ResumeReference, ApiError> {
    post_file(RESUME_UPLOAD, file).await
}

/// Puts `job` into the service's job store so `analyze` can find it by id.
pub async fn store_job(job: &JobPosting) -> Result<(), ApiError> {
    post_json_discarding_body(MATCHING_STORE_JOB, job).await
}

pub async fn analyze(request: &AnalyzeRequest) -> Result<MatchResult, ApiError> {
    post_json(MATCHING_ANALYZE, request).await
}
