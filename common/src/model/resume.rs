use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Handle returned by `/api/resume/upload` once the service has parsed a file.
///
/// `resume_data` is whatever structure the parser produced; the dashboard
/// only peeks at a few well-known keys for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeReference {
    pub file_id: String,
    pub filename: String,
    #[serde(default)]
    pub resume_data: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// The few parsed fields worth echoing back to the user after an upload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResumeSummary {
    pub name: Option<String>,
    pub email: Option<String>,
    pub skill_count: usize,
}

impl ResumeReference {
    pub fn summary(&self) -> ResumeSummary {
        let text = |key: &str| {
            self.resume_data
                .get(key)
                .and_then(Value::as_str)
                .filter(|s| !s.trim().is_empty())
                .map(str::to_string)
        };
        ResumeSummary {
            name: text("name"),
            email: text("email"),
            skill_count: self
                .resume_data
                .get("skills")
                .and_then(Value::as_array)
                .map_or(0, Vec::len),
        }
    }
}
