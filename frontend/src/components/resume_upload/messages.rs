use common::error::ApiError;
use common::model::resume::ResumeReference;

pub enum Msg {
    FileChosen(Option<web_sys::File>),
    Submit,
    Finished(Result<ResumeReference, ApiError>),
}
