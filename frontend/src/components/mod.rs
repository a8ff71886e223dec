pub mod job_card;
pub mod job_search;
pub mod match_score_card;
pub mod matching_results;
pub mod resume_upload;
