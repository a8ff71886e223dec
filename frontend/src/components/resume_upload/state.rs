use common::error::ApiError;
use common::model::resume::ResumeSummary;

pub const ACCEPTED_EXTENSIONS: &str = ".pdf,.docx,.doc,.txt";
pub const UPLOAD_FAILED: &str = "업로드 중 오류가 발생했습니다.";
pub const UPLOAD_SUCCEEDED: &str = "이력서가 성공적으로 업로드되었습니다!";
pub const NO_FILE_SELECTED: &str = "파일을 선택해주세요.";

/// Name and size of the picked file, kept apart from the browser handle so
/// the gating rules do not depend on a live `File`.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile {
    pub name: String,
    pub size: u64,
}

pub struct ResumeUpload {
    pub file: Option<web_sys::File>,
    pub selected: Option<SelectedFile>,
    pub loading: bool,
    pub error: Option<String>,
    pub success: Option<String>,
    /// Summary of the last successful upload.
    pub summary: Option<ResumeSummary>,
    /// `id` of the file input, so its label stays clickable.
    pub input_id: String,
}

impl ResumeUpload {
    pub fn new() -> Self {
        Self {
            file: None,
            selected: None,
            loading: false,
            error: None,
            success: None,
            summary: None,
            input_id: format!("resume-file-{}", uuid::Uuid::new_v4()),
        }
    }

    /// Records a picker change. An empty pick keeps the previous file.
    pub fn choose(&mut self, file: Option<web_sys::File>, selected: Option<SelectedFile>) {
        if selected.is_some() {
            self.file = file;
            self.selected = selected;
            self.error = None;
            self.success = None;
        }
    }

    pub fn can_submit(&self) -> bool {
        !self.loading && self.selected.is_some()
    }

    /// Starts a submission; `false` means nothing may be sent.
    pub fn begin_submit(&mut self) -> bool {
        if self.loading {
            return false;
        }
        if self.selected.is_none() {
            self.error = Some(NO_FILE_SELECTED.to_string());
            return false;
        }
        self.loading = true;
        self.error = None;
        self.success = None;
        true
    }

    pub fn finish(&mut self, outcome: Result<ResumeSummary, &ApiError>) {
        self.loading = false;
        match outcome {
            Ok(summary) => {
                self.success = Some(UPLOAD_SUCCEEDED.to_string());
                self.summary = Some(summary);
            }
            Err(err) => self.error = Some(err.user_message(UPLOAD_FAILED)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resume_pdf() -> Option<SelectedFile> {
        Some(SelectedFile {
            name: "resume.pdf".into(),
            size: 50 * 1024,
        })
    }

    #[test]
    fn submit_without_file_is_rejected() {
        let mut upload = ResumeUpload::new();
        assert!(!upload.can_submit());
        assert!(!upload.begin_submit());
        assert_eq!(upload.error.as_deref(), Some(NO_FILE_SELECTED));
        assert!(!upload.loading);
    }

    #[test]
    fn choosing_a_file_enables_submit_and_clears_messages() {
        let mut upload = ResumeUpload::new();
        upload.begin_submit();
        upload.choose(None, resume_pdf());
        assert!(upload.can_submit());
        assert_eq!(upload.error, None);
    }

    #[test]
    fn cancelled_pick_keeps_previous_file() {
        let mut upload = ResumeUpload::new();
        upload.choose(None, resume_pdf());
        upload.choose(None, None);
        assert_eq!(upload.selected, resume_pdf());
    }

    #[test]
    fn loading_blocks_second_submit() {
        let mut upload = ResumeUpload::new();
        upload.choose(None, resume_pdf());
        assert!(upload.begin_submit());
        assert!(!upload.can_submit());
        assert!(!upload.begin_submit());
    }

    #[test]
    fn success_and_failure_messages() {
        let mut upload = ResumeUpload::new();
        upload.choose(None, resume_pdf());
        upload.begin_submit();
        upload.finish(Ok(ResumeSummary::default()));
        assert_eq!(upload.success.as_deref(), Some(UPLOAD_SUCCEEDED));
        assert!(upload.can_submit());

        upload.begin_submit();
        assert_eq!(upload.success, None);
        upload.finish(Err(&ApiError::from_status(500, "")));
        assert_eq!(upload.error.as_deref(), Some(UPLOAD_FAILED));
    }
}
