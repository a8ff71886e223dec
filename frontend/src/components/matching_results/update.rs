use common::error::ApiError;
use common::model::job::JobPosting;
use common::model::matching::MatchResult;
use common::requests::AnalyzeRequest;
use yew::html::Scope;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;

use super::messages::Msg;
use super::state::{MatchKey, MatchingResults, Settled};

/// The two service calls of a match plus the hooks fired between them.
pub(crate) trait MatchSteps {
    async fn store_job(&self, job: &JobPosting) -> Result<(), ApiError>;
    async fn analyze(&self, request: &AnalyzeRequest) -> Result<MatchResult, ApiError>;
    fn store_failed(&self, err: &ApiError);
    fn analyzing(&self);
}

struct ServiceSteps {
    link: Scope<MatchingResults>,
    ticket: u64,
}

impl MatchSteps for ServiceSteps {
    async fn store_job(&self, job: &JobPosting) -> Result<(), ApiError> {
        api::matching::store_job(job).await
    }

    async fn analyze(&self, request: &AnalyzeRequest) -> Result<MatchResult, ApiError> {
        api::matching::analyze(request).await
    }

    fn store_failed(&self, err: &ApiError) {
        gloo_console::error!("Failed to store job:", err.to_string());
    }

    fn analyzing(&self) {
        self.link.send_message(Msg::Analyzing(self.ticket));
    }
}

/// Stores `job`, then analyzes it against the resume in `key`.
///
/// The analyze endpoint looks the posting up by id, so it is stored first.
/// A failed store is not fatal: the posting may already be there.
pub(crate) async fn run_match_sequence<S: MatchSteps>(
    steps: &S,
    job: &JobPosting,
    key: MatchKey,
) -> Result<MatchResult, ApiError> {
    if let Err(err) = steps.store_job(job).await {
        steps.store_failed(&err);
    }
    steps.analyzing();
    let request = AnalyzeRequest {
        resume_id: key.resume_id,
        job_id: key.job_id,
    };
    steps.analyze(&request).await
}

/// Starts the store/analyze sequence when the props name a new pair.
pub fn start_if_changed(component: &mut MatchingResults, ctx: &Context<MatchingResults>) {
    let props = ctx.props();
    let key = MatchKey {
        resume_id: props.resume.file_id.clone(),
        job_id: props.job.id.clone(),
    };
    let Some(ticket) = component.begin(key.clone()) else {
        return;
    };

    let job = props.job.clone();
    let link = ctx.link().clone();
    spawn_local(async move {
        let steps = ServiceSteps {
            link: link.clone(),
            ticket,
        };
        let result = run_match_sequence(&steps, &job, key).await;
        link.send_message(Msg::Finished { ticket, result });
    });
}

pub fn update(
    component: &mut MatchingResults,
    ctx: &Context<MatchingResults>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::Analyzing(ticket) => component.analyzing(ticket),
        Msg::Finished { ticket, result } => match component.settle(ticket, result) {
            Settled::Stale => {
                gloo_console::log!("Discarded stale match response", ticket.to_string());
                false
            }
            Settled::Failed(err) => {
                gloo_console::error!("Matching error:", err.to_string());
                true
            }
            Settled::Matched(result) => {
                ctx.props().on_result.emit(result);
                true
            }
        },
    }
}
