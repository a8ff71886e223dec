use serde::{Deserialize, Serialize};

/// A single job posting as returned by the search endpoint.
///
/// Postings are never edited on the client. The same value is echoed back
/// to the matching service's job store before an analysis is requested, so
/// optional fields the service sent are kept and re-serialized untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: String,
    pub title: String,
    pub company: String,
    #[serde(default)]
    pub location: Option<String>,
    pub description: String,
    pub url: String,
    /// Platform the posting was scraped from (`linkedin`, `indeed`, ...).
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posted_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_type: Option<String>,
}

/// Job boards the search panel can toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobSource {
    LinkedIn,
    Indeed,
}

impl JobSource {
    pub const ALL: [JobSource; 2] = [JobSource::LinkedIn, JobSource::Indeed];

    pub fn label(&self) -> &'static str {
        match self {
            JobSource::LinkedIn => "LinkedIn",
            JobSource::Indeed => "Indeed",
        }
    }
}

/// Body of a successful `/api/jobs/search` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobSearchResponse {
    pub jobs: Vec<JobPosting>,
    #[serde(default)]
    pub total: Option<usize>,
}
