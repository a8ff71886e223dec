use crate::pages::local_dashboard::LocalDashboard;
use crate::pages::matching::MatchingPage;
use yew::{classes, html, Component, Context, Html};

/// Top-level screens. The local dashboard is the landing screen.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Local,
    Api,
}

impl ViewMode {
    fn label(&self) -> &'static str {
        match self {
            ViewMode::Local => "로컬 대시보드",
            ViewMode::Api => "검색 & 매칭",
        }
    }
}

pub struct App {
    mode: ViewMode,
}

impl Component for App {
    type Message = ViewMode;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            mode: ViewMode::Local,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, mode: Self::Message) -> bool {
        if self.mode == mode {
            return false;
        }
        self.mode = mode;
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let mode_button = |mode: ViewMode| {
            html! {
                <button
                    class={classes!("mode-btn", (self.mode == mode).then_some("active"))}
                    onclick={link.callback(move |_| mode)}
                >
                    { mode.label() }
                </button>
            }
        };

        html! {
            <div class="app">
                <nav class="mode-switch">
                    { mode_button(ViewMode::Local) }
                    { mode_button(ViewMode::Api) }
                </nav>
                {
                    match self.mode {
                        ViewMode::Local => html! { <LocalDashboard /> },
                        ViewMode::Api => html! {
                            <>
                                <header class="app-header">
                                    <h1>{"🔍 Job Search & Resume Matching"}</h1>
                                    <p>{"LinkedIn과 Indeed에서 채용 공고를 검색하고 이력서 적합도를 분석하세요"}</p>
                                </header>
                                <MatchingPage />
                            </>
                        },
                    }
                }
            </div>
        }
    }
}
