use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;

use super::messages::Msg;
use super::state::{ResumeUpload, SelectedFile};

pub fn update(component: &mut ResumeUpload, ctx: &Context<ResumeUpload>, msg: Msg) -> bool {
    match msg {
        Msg::FileChosen(file) => {
            let selected = file.as_ref().map(|f| SelectedFile {
                name: f.name(),
                size: f.size() as u64,
            });
            component.choose(file, selected);
            true
        }
        Msg::Submit => {
            if !component.begin_submit() {
                return true;
            }
            let Some(file) = component.file.clone() else {
                return true;
            };
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = api::matching::upload_resume(&file).await;
                link.send_message(Msg::Finished(result));
            });
            true
        }
        Msg::Finished(Ok(resume)) => {
            component.finish(Ok(resume.summary()));
            ctx.props().on_resume_uploaded.emit(resume);
            true
        }
        Msg::Finished(Err(err)) => {
            gloo_console::error!("Upload error:", err.to_string());
            component.finish(Err(&err));
            true
        }
    }
}
