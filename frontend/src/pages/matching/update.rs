use super::messages::Msg;
use super::state::MatchingPage;

pub fn update(page: &mut MatchingPage, msg: Msg) -> bool {
    match msg {
        Msg::JobsFound(jobs) => page.set_jobs(jobs),
        Msg::ResumeUploaded(resume) => page.set_resume(resume),
        Msg::SelectJob(job) => page.select_job(job),
        Msg::MatchResult(result) => page.match_result = Some(result),
    }
    true
}
