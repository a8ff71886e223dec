use common::model::job::JobPosting;
use common::model::matching::MatchResult;
use common::model::resume::ResumeReference;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct MatchingResultsProps {
    pub resume: ResumeReference,
    pub job: JobPosting,
    /// Receives the analysis of the current pair.
    pub on_result: Callback<MatchResult>,
}
