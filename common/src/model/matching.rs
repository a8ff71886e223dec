use serde::{Deserialize, Serialize};

/// Score breakdown computed by the matching service. Values are percentages
/// in `0..=100` and are displayed exactly as received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchScore {
    pub overall_score: f64,
    pub skills_match: f64,
    pub experience_match: f64,
    pub education_match: f64,
    pub description_match: f64,
    #[serde(default)]
    pub matched_keywords: Vec<String>,
    #[serde(default)]
    pub missing_keywords: Vec<String>,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

impl MatchScore {
    /// Labelled sub-scores in display order.
    pub fn breakdown(&self) -> [(&'static str, f64); 4] {
        [
            ("스킬 매칭", self.skills_match),
            ("경력 매칭", self.experience_match),
            ("학력 매칭", self.education_match),
            ("설명 매칭", self.description_match),
        ]
    }
}

/// Body of a successful `/api/matching/analyze` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub match_score: MatchScore,
    pub analysis: String,
    #[serde(default)]
    pub resume_id: Option<String>,
    #[serde(default)]
    pub job_id: Option<String>,
    #[serde(default)]
    pub job_title: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
}

/// Renders a score as the service sent it, followed by `%`.
pub fn format_percent(value: f64) -> String {
    format!("{}%", value)
}
