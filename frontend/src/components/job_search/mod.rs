//! Search panel: keyword, optional location, result count and platform
//! toggles, submitted as one `POST /api/jobs/search`.
//!
//! The panel keeps its own form state and loading flag; the postings of a
//! successful search are handed to the parent through `on_jobs_found`.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::JobSearchProps;
pub use state::JobSearch;

impl Component for JobSearch {
    type Message = Msg;
    type Properties = JobSearchProps;

    fn create(_ctx: &Context<Self>) -> Self {
        JobSearch::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
