use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;

use super::messages::Msg;
use super::state::JobSearch;

pub fn update(component: &mut JobSearch, ctx: &Context<JobSearch>, msg: Msg) -> bool {
    match msg {
        Msg::SetKeyword(keyword) => {
            component.keyword = keyword;
            true
        }
        Msg::SetLocation(location) => {
            component.location = location;
            true
        }
        Msg::SetMaxResults(raw) => {
            component.set_max_results(&raw);
            true
        }
        Msg::ToggleSource(source) => {
            component.toggle_source(source);
            true
        }
        Msg::Submit => {
            let Some(request) = component.begin_submit() else {
                return true;
            };
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = api::matching::search_jobs(&request).await;
                link.send_message(Msg::Finished(result));
            });
            true
        }
        Msg::Finished(Ok(jobs)) => {
            component.finish(None);
            ctx.props().on_jobs_found.emit(jobs);
            true
        }
        Msg::Finished(Err(err)) => {
            gloo_console::error!("Search error:", err.to_string());
            component.finish(Some(&err));
            true
        }
    }
}
