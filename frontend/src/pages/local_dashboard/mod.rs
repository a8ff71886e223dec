//! Local dashboard: runs searches and resume comparisons on the service's
//! own machine and browses the files those runs leave behind.
//!
//! On first render the job-result and resume listings are fetched
//! independently; a failed listing is logged and the list stays empty.

use yew::prelude::*;

mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::LocalDashboard;

impl Component for LocalDashboard {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        LocalDashboard::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            ctx.link()
                .send_message_batch(vec![Msg::ReloadJobFiles, Msg::ReloadResumeFiles]);
        }
    }
}
