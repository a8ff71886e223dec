//! Matching page: search results, the active resume and the selected posting
//! side by side. The matching panel is mounted only while both a resume and
//! a posting are present, so the analysis runs as soon as the pair exists.

use yew::prelude::*;

mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::MatchingPage;

impl Component for MatchingPage {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        MatchingPage::new()
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
