//! Upload panel: picks exactly one resume file and sends it as
//! `multipart/form-data` to `/api/resume/upload`. The parsed reference the
//! service returns becomes the active resume through `on_resume_uploaded`.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::ResumeUploadProps;
pub use state::{ResumeUpload, ACCEPTED_EXTENSIONS};

impl Component for ResumeUpload {
    type Message = Msg;
    type Properties = ResumeUploadProps;

    fn create(_ctx: &Context<Self>) -> Self {
        ResumeUpload::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
