use common::model::local::{JobFile, ResumeFile};

use super::state::DashboardTab;

pub enum Msg {
    SetTab(DashboardTab),
    DismissNotice,

    ReloadJobFiles,
    ReloadResumeFiles,
    JobFilesLoaded { ticket: u64, files: Vec<JobFile> },
    ResumeFilesLoaded { ticket: u64, files: Vec<ResumeFile> },

    SetKeyword(String),
    SetLocation(String),
    Search,
    SearchFinished(Result<(), String>),

    SelectResume(String),
    SelectJobFile(String),
    Compare,
    CompareFinished(Result<(), String>),

    UploadFile(web_sys::File),
    UploadFinished(Result<(), String>),

    ViewJobFile(String),
}
