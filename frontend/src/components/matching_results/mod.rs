//! Matching panel: runs the store-job / analyze sequence for the active
//! resume and the selected posting.
//!
//! The sequence is started from `create` and from `changed` whenever the
//! `(resume_id, job_id)` pair differs from the one last started. Responses
//! belonging to a superseded pair are dropped, so a slow analysis for an old
//! selection can never overwrite the result for the current one.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::MatchingResultsProps;
pub use state::MatchingResults;

impl Component for MatchingResults {
    type Message = Msg;
    type Properties = MatchingResultsProps;

    fn create(ctx: &Context<Self>) -> Self {
        let mut component = MatchingResults::new();
        update::start_if_changed(&mut component, ctx);
        component
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        update::start_if_changed(self, ctx);
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
