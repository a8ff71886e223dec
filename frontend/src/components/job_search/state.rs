use common::error::ApiError;
use common::model::job::JobSource;
use common::requests::{clamp_max_results, JobSearchRequest, DEFAULT_MAX_RESULTS};

/// Form and request state of the search panel.
pub struct JobSearch {
    pub keyword: String,
    pub location: String,
    pub max_results: u32,
    /// Selected platforms in the order they were switched on.
    pub sources: Vec<JobSource>,
    /// A search request is in flight; submit is disabled.
    pub loading: bool,
    pub error: Option<String>,
}

impl JobSearch {
    pub fn new() -> Self {
        Self {
            keyword: String::new(),
            location: String::new(),
            max_results: DEFAULT_MAX_RESULTS,
            sources: JobSource::ALL.to_vec(),
            loading: false,
            error: None,
        }
    }

    pub fn toggle_source(&mut self, source: JobSource) {
        if let Some(pos) = self.sources.iter().position(|s| *s == source) {
            self.sources.remove(pos);
        } else {
            self.sources.push(source);
        }
    }

    pub fn is_selected(&self, source: JobSource) -> bool {
        self.sources.contains(&source)
    }

    pub fn set_max_results(&mut self, raw: &str) {
        self.max_results = clamp_max_results(raw, self.max_results);
    }

    pub fn can_submit(&self) -> bool {
        !self.loading && !self.sources.is_empty()
    }

    /// Starts a submission: returns the request to send, or `None` when the
    /// form is not submittable. Validation failures land in `error`.
    pub fn begin_submit(&mut self) -> Option<JobSearchRequest> {
        if !self.can_submit() {
            return None;
        }
        match JobSearchRequest::new(
            &self.keyword,
            &self.location,
            self.max_results,
            &self.sources,
        ) {
            Ok(request) => {
                self.loading = true;
                self.error = None;
                Some(request)
            }
            Err(err) => {
                self.error = Some(err.user_message(SEARCH_FAILED));
                None
            }
        }
    }

    pub fn finish(&mut self, error: Option<&ApiError>) {
        self.loading = false;
        self.error = error.map(|e| e.user_message(SEARCH_FAILED));
    }
}

pub const SEARCH_FAILED: &str = "검색 중 오류가 발생했습니다.";
