//! Endpoint table for the external job search & matching service.
//!
//! The dashboard talks to exactly one origin. Paths are kept as constants so
//! the frontend client and the tests agree on the wire contract.

/// Origin of the external service. Not configurable at runtime.
pub const API_BASE_URL: &str = "http://localhost:8006";

pub const JOBS_SEARCH: &str = "/api/jobs/search";
pub const RESUME_UPLOAD: &str = "/api/resume/upload";
pub const MATCHING_STORE_JOB: &str = "/api/matching/store-job";
pub const MATCHING_ANALYZE: &str = "/api/matching/analyze";

pub const LOCAL_JOBS_LIST: &str = "/api/local/jobs/list";
pub const LOCAL_UPLOADS_LIST: &str = "/api/local/uploads/list";
pub const LOCAL_JOBS_SEARCH: &str = "/api/local/jobs/search";
pub const LOCAL_RESUME_COMPARE: &str = "/api/local/resume/compare";
pub const LOCAL_RESUME_UPLOAD: &str = "/api/local/resume/upload";
pub const LOCAL_COMPARISON_REPORT: &str = "/api/local/reports/comparison";

/// Absolute URL for `path` on the service origin.
pub fn endpoint(path: &str) -> String {
    format!("{}{}", API_BASE_URL, path)
}

/// URL of a saved job-results file, opened directly by the browser.
/// The filename is percent-encoded so names with spaces or `#` stay intact.
pub fn local_job_file_url(filename: &str) -> String {
    endpoint(&format!("/api/local/jobs/{}", urlencoding::encode(filename)))
}

/// URL of the last rendered resume comparison report.
pub fn comparison_report_url() -> String {
    endpoint(LOCAL_COMPARISON_REPORT)
}
