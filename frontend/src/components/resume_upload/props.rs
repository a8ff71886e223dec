use common::model::resume::ResumeReference;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ResumeUploadProps {
    pub on_resume_uploaded: Callback<ResumeReference>,
}
