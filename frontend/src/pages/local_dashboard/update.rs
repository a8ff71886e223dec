use std::future::Future;

use common::api::{comparison_report_url, local_job_file_url};
use gloo_timers::future::TimeoutFuture;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::helpers::open_in_new_tab;

use super::messages::Msg;
use super::state::{
    action_outcome, DashboardTab, LocalDashboard, COMPARE_FAILED, RESULTS_SWITCH_DELAY_MS,
    SEARCH_FAILED, UPLOAD_FAILED,
};

/// Refreshes the job listing, waits `RESULTS_SWITCH_DELAY_MS`, then shows
/// the results tab.
pub(crate) async fn follow_successful_search<S, D, F>(send: S, delay: D)
where
    S: Fn(Msg),
    D: FnOnce(u32) -> F,
    F: Future<Output = ()>,
{
    send(Msg::ReloadJobFiles);
    delay(RESULTS_SWITCH_DELAY_MS).await;
    send(Msg::SetTab(DashboardTab::Results));
}

pub fn update(component: &mut LocalDashboard, ctx: &Context<LocalDashboard>, msg: Msg) -> bool {
    match msg {
        Msg::SetTab(tab) => {
            component.active_tab = tab;
            true
        }
        Msg::DismissNotice => {
            component.notice = None;
            true
        }

        Msg::ReloadJobFiles => {
            let ticket = component.job_listing.next();
            let link = ctx.link().clone();
            spawn_local(async move {
                match api::local::list_job_files().await {
                    Ok(files) => link.send_message(Msg::JobFilesLoaded { ticket, files }),
                    Err(err) => gloo_console::error!("Failed to load job files:", err.to_string()),
                }
            });
            false
        }
        Msg::ReloadResumeFiles => {
            let ticket = component.resume_listing.next();
            let link = ctx.link().clone();
            spawn_local(async move {
                match api::local::list_resume_files().await {
                    Ok(files) => link.send_message(Msg::ResumeFilesLoaded { ticket, files }),
                    Err(err) => {
                        gloo_console::error!("Failed to load resume files:", err.to_string())
                    }
                }
            });
            false
        }
        Msg::JobFilesLoaded { ticket, files } => {
            let accepted = component.accept_job_files(ticket, files);
            if !accepted {
                gloo_console::log!("Discarded stale job listing", ticket.to_string());
            }
            accepted
        }
        Msg::ResumeFilesLoaded { ticket, files } => {
            let accepted = component.accept_resume_files(ticket, files);
            if !accepted {
                gloo_console::log!("Discarded stale resume listing", ticket.to_string());
            }
            accepted
        }

        Msg::SetKeyword(keyword) => {
            component.search_keyword = keyword;
            true
        }
        Msg::SetLocation(location) => {
            component.search_location = location;
            true
        }
        Msg::Search => {
            let Some(request) = component.begin_search() else {
                return true;
            };
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = api::local::run_search(&request).await;
                link.send_message(Msg::SearchFinished(action_outcome(result, SEARCH_FAILED)));
            });
            true
        }
        Msg::SearchFinished(outcome) => {
            if component.finish_search(outcome) {
                let link = ctx.link().clone();
                wasm_bindgen_futures::spawn_local(follow_successful_search(
                    move |msg| link.send_message(msg),
                    TimeoutFuture::new,
                ));
            }
            true
        }

        Msg::SelectResume(path) => {
            component.selected_resume = Some(path);
            true
        }
        Msg::SelectJobFile(name) => {
            component.selected_job_file = name;
            true
        }
        Msg::Compare => {
            let Some(request) = component.begin_compare() else {
                return true;
            };
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = api::local::compare_resume(&request).await;
                link.send_message(Msg::CompareFinished(action_outcome(result, COMPARE_FAILED)));
            });
            true
        }
        Msg::CompareFinished(outcome) => {
            if component.finish_compare(outcome) {
                open_in_new_tab(&comparison_report_url());
            }
            true
        }

        Msg::UploadFile(file) => {
            if !component.begin_upload() {
                return false;
            }
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = api::local::upload_resume(&file).await;
                link.send_message(Msg::UploadFinished(action_outcome(result, UPLOAD_FAILED)));
            });
            true
        }
        Msg::UploadFinished(outcome) => {
            if component.finish_upload(outcome) {
                ctx.link().send_message(Msg::ReloadResumeFiles);
            }
            true
        }

        Msg::ViewJobFile(name) => {
            open_in_new_tab(&local_job_file_url(&name));
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn describe(msg: &Msg) -> String {
        match msg {
            Msg::ReloadJobFiles => "reload job files".into(),
            Msg::SetTab(tab) => format!("tab {}", tab.label()),
            _ => "other".into(),
        }
    }

    #[tokio::test]
    async fn search_success_reloads_then_switches_after_delay() {
        let events = RefCell::new(Vec::new());
        follow_successful_search(
            |msg| events.borrow_mut().push(describe(&msg)),
            |ms| {
                events.borrow_mut().push(format!("wait {}ms", ms));
                tokio::task::yield_now()
            },
        )
        .await;

        assert_eq!(
            events.into_inner(),
            [
                "reload job files".to_string(),
                format!("wait {}ms", RESULTS_SWITCH_DELAY_MS),
                format!("tab {}", DashboardTab::Results.label()),
            ]
        );
        assert_eq!(RESULTS_SWITCH_DELAY_MS, 1000);
    }
}
