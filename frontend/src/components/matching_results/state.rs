use common::error::ApiError;
use common::model::matching::MatchResult;

use crate::sequence::RequestSequence;

pub const ANALYSIS_FAILED: &str = "분석 중 오류가 발생했습니다.";

/// What became of a finished sequence.
#[derive(Debug)]
pub enum Settled {
    /// A newer pair took over; nothing may be shown or emitted.
    Stale,
    Failed(ApiError),
    Matched(MatchResult),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchKey {
    pub resume_id: String,
    pub job_id: String,
}

pub struct MatchingResults {
    /// Pair the running (or last finished) sequence belongs to.
    pub current: Option<MatchKey>,
    pub sequence: RequestSequence,
    pub loading: bool,
    pub error: Option<String>,
}

impl MatchingResults {
    pub fn new() -> Self {
        Self {
            current: None,
            sequence: RequestSequence::default(),
            loading: false,
            error: None,
        }
    }

    /// Returns a ticket when `key` differs from the pair last started.
    /// An unchanged pair never starts a second sequence.
    pub fn begin(&mut self, key: MatchKey) -> Option<u64> {
        if self.current.as_ref() == Some(&key) {
            return None;
        }
        self.current = Some(key);
        self.loading = false;
        self.error = None;
        Some(self.sequence.next())
    }

    pub fn analyzing(&mut self, ticket: u64) -> bool {
        if !self.sequence.is_current(ticket) {
            return false;
        }
        self.loading = true;
        self.error = None;
        true
    }

    /// Applies the outcome of sequence `ticket`. Returns `false` when the
    /// ticket was superseded and the outcome must be ignored.
    pub fn finish(&mut self, ticket: u64, error: Option<&ApiError>) -> bool {
        if !self.sequence.is_current(ticket) {
            return false;
        }
        self.loading = false;
        self.error = error.map(|e| e.user_message(ANALYSIS_FAILED));
        true
    }

    pub fn settle(&mut self, ticket: u64, result: Result<MatchResult, ApiError>) -> Settled {
        if !self.finish(ticket, result.as_ref().err()) {
            return Settled::Stale;
        }
        match result {
            Ok(result) => Settled::Matched(result),
            Err(err) => Settled::Failed(err),
        }
    }
}
