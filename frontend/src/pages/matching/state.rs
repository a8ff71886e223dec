use common::model::job::JobPosting;
use common::model::matching::MatchResult;
use common::model::resume::ResumeReference;

pub struct MatchingPage {
    /// Postings of the last successful search, exactly as received.
    pub jobs: Vec<JobPosting>,
    pub resume: Option<ResumeReference>,
    pub selected_job: Option<JobPosting>,
    /// Analysis of the current `(resume, selected_job)` pair.
    pub match_result: Option<MatchResult>,
}

impl MatchingPage {
    pub fn new() -> Self {
        Self {
            jobs: Vec::new(),
            resume: None,
            selected_job: None,
            match_result: None,
        }
    }

    pub fn set_jobs(&mut self, jobs: Vec<JobPosting>) {
        self.jobs = jobs;
    }

    /// A resume with a new `file_id` invalidates the current result.
    pub fn set_resume(&mut self, resume: ResumeReference) {
        if self.resume.as_ref().map(|r| &r.file_id) != Some(&resume.file_id) {
            self.match_result = None;
        }
        self.resume = Some(resume);
    }

    /// Re-selecting the same posting keeps the current result.
    pub fn select_job(&mut self, job: JobPosting) {
        if self.selected_job.as_ref().map(|j| &j.id) != Some(&job.id) {
            self.match_result = None;
        }
        self.selected_job = Some(job);
    }

    pub fn is_selected(&self, job: &JobPosting) -> bool {
        self.selected_job.as_ref().is_some_and(|j| j.id == job.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::matching::MatchScore;

    fn job(id: &str) -> JobPosting {
        JobPosting {
            id: id.into(),
            title: "Python Developer".into(),
            company: "Acme".into(),
            location: Some("Seoul, South Korea".into()),
            description: "Build APIs".into(),
            url: format!("https://example.com/{}", id),
            source: "linkedin".into(),
            posted_date: None,
            salary: None,
            job_type: None,
        }
    }

    fn result() -> MatchResult {
        MatchResult {
            match_score: MatchScore {
                overall_score: 70.0,
                skills_match: 70.0,
                experience_match: 70.0,
                education_match: 70.0,
                description_match: 70.0,
                matched_keywords: vec![],
                missing_keywords: vec![],
                recommendations: vec![],
            },
            analysis: String::new(),
            resume_id: None,
            job_id: None,
            job_title: None,
            company: None,
        }
    }

    #[test]
    fn search_results_replace_list_verbatim() {
        let mut page = MatchingPage::new();
        page.set_jobs(vec![job("b"), job("a")]);
        page.set_jobs(vec![job("c"), job("a"), job("b")]);
        let ids: Vec<&str> = page.jobs.iter().map(|j| j.id.as_str()).collect();
        assert_eq!(ids, ["c", "a", "b"]);
    }

    #[test]
    fn selecting_another_job_clears_result() {
        let mut page = MatchingPage::new();
        page.select_job(job("a"));
        page.match_result = Some(result());

        page.select_job(job("a"));
        assert!(page.match_result.is_some());

        page.select_job(job("b"));
        assert!(page.match_result.is_none());
        assert!(page.is_selected(&job("b")));
        assert!(!page.is_selected(&job("a")));
    }

    #[test]
    fn new_resume_clears_result() {
        let mut page = MatchingPage::new();
        page.match_result = Some(result());
        page.set_resume(ResumeReference {
            file_id: "abc123".into(),
            filename: "resume.pdf".into(),
            resume_data: serde_json::json!({}),
            message: None,
        });
        assert!(page.match_result.is_none());
        assert_eq!(page.resume.as_ref().map(|r| r.file_id.as_str()), Some("abc123"));
    }
}
