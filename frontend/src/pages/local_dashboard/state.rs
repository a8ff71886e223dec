//! State of the local dashboard: tab selection, saved-file listings, the two
//! long-running actions (search, compare), resume uploads and the message
//! banner.
//!
//! Everything here is plain data plus the guard logic deciding whether an
//! action may fire; `update.rs` performs the requests.

use common::error::ApiError;
use common::model::local::{JobFile, LocalActionResponse, ResumeFile};
use common::requests::{CompareRequest, LocalSearchRequest, DEFAULT_JOBS_FILE, DEFAULT_LOCATION};

use crate::sequence::RequestSequence;

pub const SEARCH_FAILED: &str = "검색 중 오류가 발생했습니다";
pub const SEARCH_SUCCEEDED: &str = "채용 공고 검색이 완료되었습니다!";
pub const COMPARE_FAILED: &str = "비교 중 오류가 발생했습니다";
pub const COMPARE_SUCCEEDED: &str = "비교 분석이 완료되었습니다!";
pub const UPLOAD_FAILED: &str = "업로드 중 오류가 발생했습니다";
pub const UPLOAD_SUCCEEDED: &str = "이력서가 업로드되었습니다!";

/// Delay between a successful search and the switch to the results tab.
pub const RESULTS_SWITCH_DELAY_MS: u32 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardTab {
    Search,
    Results,
    Compare,
}

impl DashboardTab {
    pub const ALL: [DashboardTab; 3] = [
        DashboardTab::Search,
        DashboardTab::Results,
        DashboardTab::Compare,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DashboardTab::Search => "채용 공고 검색",
            DashboardTab::Results => "결과 확인",
            DashboardTab::Compare => "이력서 비교",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    pub fn class(&self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

pub struct LocalDashboard {
    pub active_tab: DashboardTab,
    pub job_files: Vec<JobFile>,
    pub resume_files: Vec<ResumeFile>,
    pub selected_job_file: String,
    /// `path` of the chosen resume.
    pub selected_resume: Option<String>,
    pub search_keyword: String,
    pub search_location: String,
    pub searching: bool,
    pub comparing: bool,
    pub uploading: bool,
    pub notice: Option<Notice>,
    pub job_listing: RequestSequence,
    pub resume_listing: RequestSequence,
    pub upload_input_id: String,
    /// Guard so the listings are fetched once on mount.
    pub loaded: bool,
}

impl LocalDashboard {
    pub fn new() -> Self {
        Self {
            active_tab: DashboardTab::Search,
            job_files: Vec::new(),
            resume_files: Vec::new(),
            selected_job_file: DEFAULT_JOBS_FILE.to_string(),
            selected_resume: None,
            search_keyword: String::new(),
            search_location: DEFAULT_LOCATION.to_string(),
            searching: false,
            comparing: false,
            uploading: false,
            notice: None,
            job_listing: RequestSequence::default(),
            resume_listing: RequestSequence::default(),
            upload_input_id: format!("resume-upload-{}", uuid::Uuid::new_v4()),
            loaded: false,
        }
    }

    fn notify(&mut self, kind: NoticeKind, text: impl Into<String>) {
        self.notice = Some(Notice {
            kind,
            text: text.into(),
        });
    }

    /// Applies a job listing if it answers the latest listing request.
    /// A selection the listing no longer contains moves to its first file,
    /// which is what the picker shows.
    pub fn accept_job_files(&mut self, ticket: u64, files: Vec<JobFile>) -> bool {
        if !self.job_listing.is_current(ticket) {
            return false;
        }
        if !files.iter().any(|file| file.name == self.selected_job_file) {
            if let Some(first) = files.first() {
                self.selected_job_file = first.name.clone();
            }
        }
        self.job_files = files;
        true
    }

    pub fn accept_resume_files(&mut self, ticket: u64, files: Vec<ResumeFile>) -> bool {
        if !self.resume_listing.is_current(ticket) {
            return false;
        }
        self.resume_files = files;
        true
    }

    pub fn begin_search(&mut self) -> Option<LocalSearchRequest> {
        if self.searching {
            return None;
        }
        match LocalSearchRequest::new(&self.search_keyword, &self.search_location) {
            Ok(request) => {
                self.searching = true;
                self.notice = None;
                Some(request)
            }
            Err(err) => {
                self.notify(NoticeKind::Error, err.user_message(SEARCH_FAILED));
                None
            }
        }
    }

    /// Returns `true` when the search succeeded.
    pub fn finish_search(&mut self, outcome: Result<(), String>) -> bool {
        self.searching = false;
        match outcome {
            Ok(()) => {
                self.notify(NoticeKind::Success, SEARCH_SUCCEEDED);
                true
            }
            Err(text) => {
                self.notify(NoticeKind::Error, text);
                false
            }
        }
    }

    pub fn can_compare(&self) -> bool {
        !self.comparing && self.selected_resume.is_some() && !self.job_files.is_empty()
    }

    pub fn begin_compare(&mut self) -> Option<CompareRequest> {
        if self.comparing {
            return None;
        }
        match CompareRequest::new(self.selected_resume.as_deref(), &self.selected_job_file) {
            Ok(request) => {
                self.comparing = true;
                self.notice = None;
                Some(request)
            }
            Err(err) => {
                self.notify(NoticeKind::Error, err.user_message(COMPARE_FAILED));
                None
            }
        }
    }

    pub fn finish_compare(&mut self, outcome: Result<(), String>) -> bool {
        self.comparing = false;
        match outcome {
            Ok(()) => {
                self.notify(NoticeKind::Success, COMPARE_SUCCEEDED);
                true
            }
            Err(text) => {
                self.notify(NoticeKind::Error, text);
                false
            }
        }
    }

    pub fn begin_upload(&mut self) -> bool {
        if self.uploading {
            return false;
        }
        self.uploading = true;
        true
    }

    pub fn finish_upload(&mut self, outcome: Result<(), String>) -> bool {
        self.uploading = false;
        match outcome {
            Ok(()) => {
                self.notify(NoticeKind::Success, UPLOAD_SUCCEEDED);
                true
            }
            Err(text) => {
                self.notify(NoticeKind::Error, text);
                false
            }
        }
    }
}

/// Collapses a local action's response into what the banner shows.
/// Transport failures keep their own text behind an `오류:` prefix.
pub fn action_outcome(
    result: Result<LocalActionResponse, ApiError>,
    fallback: &str,
) -> Result<(), String> {
    match result {
        Ok(response) => response.into_outcome(fallback),
        Err(ApiError::Network(message)) => Err(format!("오류: {}", message)),
        Err(err) => Err(err.user_message(fallback)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job_file(name: &str) -> JobFile {
        JobFile {
            name: name.into(),
            size: 2048,
            modified: "2024-05-01T09:30:00".into(),
        }
    }

    #[test]
    fn starts_on_search_with_defaults() {
        let dashboard = LocalDashboard::new();
        assert_eq!(dashboard.active_tab, DashboardTab::Search);
        assert_eq!(dashboard.selected_job_file, "latest.json");
        assert_eq!(dashboard.search_location, "Seoul, South Korea");
        assert!(dashboard.job_files.is_empty());
        assert!(dashboard.resume_files.is_empty());
    }

    #[test]
    fn blank_keyword_search_sends_nothing() {
        let mut dashboard = LocalDashboard::new();
        dashboard.search_keyword = "  ".into();
        assert!(dashboard.begin_search().is_none());
        assert!(!dashboard.searching);
        assert_eq!(
            dashboard.notice.as_ref().map(|n| n.kind),
            Some(NoticeKind::Error)
        );
    }

    #[test]
    fn search_is_guarded_while_running() {
        let mut dashboard = LocalDashboard::new();
        dashboard.search_keyword = "Python Developer".into();
        let request = dashboard.begin_search().unwrap();
        assert_eq!(request.max_results, 30);
        assert!(dashboard.begin_search().is_none());

        assert!(dashboard.finish_search(Ok(())));
        assert!(!dashboard.searching);
        assert_eq!(
            dashboard.notice,
            Some(Notice {
                kind: NoticeKind::Success,
                text: SEARCH_SUCCEEDED.into()
            })
        );
    }

    #[test]
    fn compare_requires_resume_and_listing() {
        let mut dashboard = LocalDashboard::new();
        assert!(!dashboard.can_compare());
        assert!(dashboard.begin_compare().is_none());
        assert_eq!(
            dashboard.notice.as_ref().map(|n| n.text.as_str()),
            Some("이력서를 선택하세요")
        );

        dashboard.selected_resume = Some("uploads/resume.pdf".into());
        assert!(!dashboard.can_compare());
        dashboard.job_files = vec![job_file("latest.json")];
        assert!(dashboard.can_compare());

        let request = dashboard.begin_compare().unwrap();
        assert_eq!(request.resume_path, "uploads/resume.pdf");
        assert_eq!(request.jobs_file, "latest.json");
        assert_eq!(request.top_n, 10);
        assert!(!dashboard.can_compare());
    }

    #[test]
    fn stale_listing_is_dropped() {
        let mut dashboard = LocalDashboard::new();
        let first = dashboard.job_listing.next();
        let second = dashboard.job_listing.next();
        assert!(dashboard.accept_job_files(second, vec![job_file("new.json")]));
        assert!(!dashboard.accept_job_files(first, vec![job_file("old.json")]));
        assert_eq!(dashboard.job_files, vec![job_file("new.json")]);
    }

    #[test]
    fn upload_is_guarded() {
        let mut dashboard = LocalDashboard::new();
        assert!(dashboard.begin_upload());
        assert!(!dashboard.begin_upload());
        assert!(!dashboard.finish_upload(Err("nope".into())));
        assert!(dashboard.begin_upload());
    }

    #[test]
    fn outcome_mapping() {
        let ok = LocalActionResponse {
            success: true,
            message: None,
        };
        assert_eq!(action_outcome(Ok(ok), SEARCH_FAILED), Ok(()));

        let failed = LocalActionResponse {
            success: false,
            message: Some("검색 시간이 초과되었습니다".into()),
        };
        assert_eq!(
            action_outcome(Ok(failed), SEARCH_FAILED),
            Err("검색 시간이 초과되었습니다".into())
        );

        assert_eq!(
            action_outcome(Err(ApiError::Network("Failed to fetch".into())), SEARCH_FAILED),
            Err("오류: Failed to fetch".into())
        );
        assert_eq!(
            action_outcome(Err(ApiError::from_status(500, "")), COMPARE_FAILED),
            Err(COMPARE_FAILED.into())
        );
        assert_eq!(
            action_outcome(
                Err(ApiError::from_status(500, r#"{"detail": "업로드 오류: disk full"}"#)),
                UPLOAD_FAILED
            ),
            Err("업로드 오류: disk full".into())
        );
    }

    #[test]
    fn selection_follows_listing_contents() {
        let mut dashboard = LocalDashboard::new();
        dashboard.selected_resume = Some("uploads/resume.pdf".into());

        let ticket = dashboard.job_listing.next();
        dashboard.accept_job_files(ticket, vec![job_file("jobs_20240501.json")]);
        assert_eq!(dashboard.selected_job_file, "jobs_20240501.json");
        assert_eq!(
            dashboard.begin_compare().map(|r| r.jobs_file).as_deref(),
            Some("jobs_20240501.json")
        );
    }

    #[test]
    fn listed_selection_is_kept() {
        let mut dashboard = LocalDashboard::new();
        let ticket = dashboard.job_listing.next();
        dashboard.accept_job_files(
            ticket,
            vec![job_file("jobs_20240501.json"), job_file("latest.json")],
        );
        assert_eq!(dashboard.selected_job_file, "latest.json");

        let ticket = dashboard.job_listing.next();
        dashboard.accept_job_files(ticket, vec![]);
        assert_eq!(dashboard.selected_job_file, "latest.json");
    }
}
