//! Request payloads sent by the dashboard.
//!
//! Constructors that can fail run the client-side checks the panels rely on:
//! when they return an error, no request is sent.

use serde::Serialize;

use crate::error::ApiError;
use crate::model::job::JobSource;

pub const MIN_RESULTS: u32 = 1;
pub const MAX_RESULTS: u32 = 100;
pub const DEFAULT_MAX_RESULTS: u32 = 20;

/// Result count for the dashboard's local search.
pub const LOCAL_SEARCH_MAX_RESULTS: u32 = 30;
/// Number of best matches the comparison report includes.
pub const COMPARE_TOP_N: u32 = 10;
pub const DEFAULT_JOBS_FILE: &str = "latest.json";
pub const DEFAULT_LOCATION: &str = "Seoul, South Korea";

/// Body of `POST /api/jobs/search`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobSearchRequest {
    pub keyword: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub max_results: u32,
    pub sources: Vec<JobSource>,
}

impl JobSearchRequest {
    /// Validates the search form. A blank location is dropped from the body;
    /// `max_results` is sent as given (the form clamps it while typing).
    pub fn new(
        keyword: &str,
        location: &str,
        max_results: u32,
        sources: &[JobSource],
    ) -> Result<Self, ApiError> {
        if keyword.trim().is_empty() {
            return Err(ApiError::InvalidInput(
                "검색 키워드를 입력하세요".to_string(),
            ));
        }
        if sources.is_empty() {
            return Err(ApiError::InvalidInput(
                "검색할 플랫폼을 하나 이상 선택하세요".to_string(),
            ));
        }
        Ok(Self {
            keyword: keyword.to_string(),
            location: if location.is_empty() {
                None
            } else {
                Some(location.to_string())
            },
            max_results,
            sources: sources.to_vec(),
        })
    }
}

/// Parses the result-count input, keeping it inside `1..=100`.
/// Unparseable input leaves `current` untouched.
pub fn clamp_max_results(raw: &str, current: u32) -> u32 {
    match raw.trim().parse::<i64>() {
        Ok(value) => value.clamp(MIN_RESULTS as i64, MAX_RESULTS as i64) as u32,
        Err(_) => current,
    }
}

/// Body of `POST /api/matching/analyze`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyzeRequest {
    pub resume_id: String,
    pub job_id: String,
}

/// Body of `POST /api/local/jobs/search`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocalSearchRequest {
    pub keyword: String,
    pub location: String,
    pub max_results: u32,
}

impl LocalSearchRequest {
    pub fn new(keyword: &str, location: &str) -> Result<Self, ApiError> {
        if keyword.trim().is_empty() {
            return Err(ApiError::InvalidInput(
                "검색 키워드를 입력하세요".to_string(),
            ));
        }
        Ok(Self {
            keyword: keyword.to_string(),
            location: location.to_string(),
            max_results: LOCAL_SEARCH_MAX_RESULTS,
        })
    }
}

/// Body of `POST /api/local/resume/compare`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompareRequest {
    pub resume_path: String,
    pub jobs_file: String,
    pub top_n: u32,
}

impl CompareRequest {
    pub fn new(resume_path: Option<&str>, jobs_file: &str) -> Result<Self, ApiError> {
        match resume_path {
            Some(path) if !path.is_empty() => Ok(Self {
                resume_path: path.to_string(),
                jobs_file: jobs_file.to_string(),
                top_n: COMPARE_TOP_N,
            }),
            _ => Err(ApiError::InvalidInput("이력서를 선택하세요".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_body_matches_wire_contract() {
        let request = JobSearchRequest::new(
            "Python Developer",
            "Seoul, South Korea",
            20,
            &[JobSource::LinkedIn, JobSource::Indeed],
        )
        .unwrap();
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"keyword":"Python Developer","location":"Seoul, South Korea","max_results":20,"sources":["linkedin","indeed"]}"#
        );
    }

    #[test]
    fn blank_location_is_omitted() {
        let request = JobSearchRequest::new("rust", "", 5, &[JobSource::Indeed]).unwrap();
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"keyword":"rust","max_results":5,"sources":["indeed"]}"#
        );
    }

    #[test]
    fn source_order_follows_selection() {
        let request =
            JobSearchRequest::new("rust", "", 5, &[JobSource::Indeed, JobSource::LinkedIn])
                .unwrap();
        assert_eq!(request.sources, [JobSource::Indeed, JobSource::LinkedIn]);
    }

    #[test]
    fn empty_source_set_is_rejected() {
        let err = JobSearchRequest::new("rust", "", 20, &[]).unwrap_err();
        assert!(matches!(err, ApiError::InvalidInput(_)));
    }

    #[test]
    fn blank_keyword_is_rejected() {
        assert!(JobSearchRequest::new("   ", "", 20, &JobSource::ALL).is_err());
        assert!(LocalSearchRequest::new("", DEFAULT_LOCATION).is_err());
    }

    #[test]
    fn max_results_is_clamped_while_typing() {
        assert_eq!(clamp_max_results("50", 20), 50);
        assert_eq!(clamp_max_results("0", 20), 1);
        assert_eq!(clamp_max_results("-3", 20), 1);
        assert_eq!(clamp_max_results("250", 20), 100);
        assert_eq!(clamp_max_results("", 20), 20);
        assert_eq!(clamp_max_results("abc", 42), 42);
    }

    #[test]
    fn analyze_body_shape() {
        let request = AnalyzeRequest {
            resume_id: "abc123".into(),
            job_id: "li-42".into(),
        };
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"resume_id":"abc123","job_id":"li-42"}"#
        );
    }

    #[test]
    fn local_search_uses_fixed_result_count() {
        let request = LocalSearchRequest::new("Data Engineer", DEFAULT_LOCATION).unwrap();
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"keyword":"Data Engineer","location":"Seoul, South Korea","max_results":30}"#
        );
    }

    #[test]
    fn compare_requires_a_resume() {
        assert!(CompareRequest::new(None, DEFAULT_JOBS_FILE).is_err());
        assert!(CompareRequest::new(Some(""), DEFAULT_JOBS_FILE).is_err());

        let request = CompareRequest::new(Some("uploads/resume.pdf"), DEFAULT_JOBS_FILE).unwrap();
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"resume_path":"uploads/resume.pdf","jobs_file":"latest.json","top_n":10}"#
        );
    }
}
