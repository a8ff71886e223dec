//! Payloads of the `/api/local/*` endpoints backing the dashboard: listings
//! of saved job-result files and uploaded resumes, and the `{success,
//! message}` envelope returned by the long-running local actions.

use serde::{Deserialize, Serialize};

/// A saved job-search result file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobFile {
    pub name: String,
    pub size: u64,
    /// ISO-8601 timestamp as written by the service.
    pub modified: String,
}

/// An uploaded resume file. `path` is what the compare action sends back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeFile {
    pub name: String,
    pub size: u64,
    pub modified: String,
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileListing<T> {
    #[serde(default = "Vec::new")]
    pub files: Vec<T>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalActionResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

impl LocalActionResponse {
    /// `Ok` when the service reported success, otherwise the service message
    /// or `fallback` when it sent none.
    pub fn into_outcome(self, fallback: &str) -> Result<(), String> {
        if self.success {
            Ok(())
        } else {
            Err(self
                .message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| fallback.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn job_listing_decodes_in_server_order() {
        let body = r#"{"files": [
            {"name": "latest.json", "size": 2048, "modified": "2024-05-01T09:30:00"},
            {"name": "jobs_20240430.json", "size": 1024, "modified": "2024-04-30T09:30:00"}
        ]}"#;
        let listing: FileListing<JobFile> = serde_json::from_str(body).unwrap();
        assert_eq!(listing.files.len(), 2);
        assert_eq!(listing.files[0].name, "latest.json");
        assert_eq!(listing.files[1].size, 1024);
    }

    #[test]
    fn resume_listing_carries_path() {
        let body = r#"{"files": [
            {"name": "resume.pdf", "size": 51200, "modified": "2024-05-01T10:00:00", "path": "uploads/resume.pdf"}
        ]}"#;
        let listing: FileListing<ResumeFile> = serde_json::from_str(body).unwrap();
        assert_eq!(listing.files[0].path, "uploads/resume.pdf");
    }

    #[test]
    fn missing_files_key_is_empty_listing() {
        let listing: FileListing<JobFile> = serde_json::from_str("{}").unwrap();
        assert!(listing.files.is_empty());
    }

    #[test]
    fn action_outcome_uses_message_then_fallback() {
        let ok: LocalActionResponse =
            serde_json::from_str(r#"{"success": true, "message": "검색 완료", "data": {}}"#).unwrap();
        assert_eq!(ok.into_outcome("fallback"), Ok(()));

        let failed: LocalActionResponse =
            serde_json::from_str(r#"{"success": false, "message": "검색 시간이 초과되었습니다"}"#)
                .unwrap();
        assert_eq!(
            failed.into_outcome("fallback"),
            Err("검색 시간이 초과되었습니다".to_string())
        );

        let bare: LocalActionResponse = serde_json::from_str(r#"{"detail": "nope"}"#).unwrap();
        assert_eq!(bare.into_outcome("fallback"), Err("fallback".to_string()));
    }
}
