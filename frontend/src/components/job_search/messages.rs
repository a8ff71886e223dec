use common::error::ApiError;
use common::model::job::{JobPosting, JobSource};

pub enum Msg {
    SetKeyword(String),
    SetLocation(String),
    SetMaxResults(String),
    ToggleSource(JobSource),
    Submit,
    Finished(Result<Vec<JobPosting>, ApiError>),
}
