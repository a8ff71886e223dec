use common::model::job::JobPosting;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct JobSearchProps {
    /// Receives the postings of each successful search, in server order.
    pub on_jobs_found: Callback<Vec<JobPosting>>,
}
