use yew::prelude::*;

use super::state::MatchingResults;

pub fn view(component: &MatchingResults, _ctx: &Context<MatchingResults>) -> Html {
    if component.loading {
        return html! {
            <div class="matching-results">
                <h2>{"적합도 분석 중..."}</h2>
                <div class="loading-spinner">{"⏳"}</div>
            </div>
        };
    }

    match &component.error {
        Some(error) => html! {
            <div class="matching-results">
                <div class="error-message">{ error.clone() }</div>
            </div>
        },
        None => html! {},
    }
}
