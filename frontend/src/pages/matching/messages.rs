use common::model::job::JobPosting;
use common::model::matching::MatchResult;
use common::model::resume::ResumeReference;

pub enum Msg {
    JobsFound(Vec<JobPosting>),
    ResumeUploaded(ResumeReference),
    SelectJob(JobPosting),
    MatchResult(MatchResult),
}
