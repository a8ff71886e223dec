use common::model::job::JobSource;
use common::requests::{MAX_RESULTS, MIN_RESULTS};
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::JobSearch;

pub fn view(component: &JobSearch, ctx: &Context<JobSearch>) -> Html {
    let link = ctx.link();

    html! {
        <div class="job-search">
            <h2>{"채용 공고 검색"}</h2>
            <form
                class="search-form"
                onsubmit={link.callback(|e: SubmitEvent| {
                    e.prevent_default();
                    Msg::Submit
                })}
            >
                <div class="form-group">
                    <label for="keyword">{"검색 키워드 *"}</label>
                    <input
                        type="text"
                        id="keyword"
                        value={component.keyword.clone()}
                        placeholder="예: Python Developer, Software Engineer"
                        required={true}
                        oninput={link.callback(|e: InputEvent| {
                            Msg::SetKeyword(e.target_unchecked_into::<HtmlInputElement>().value())
                        })}
                    />
                </div>

                <div class="form-group">
                    <label for="location">{"지역 (선택사항)"}</label>
                    <input
                        type="text"
                        id="location"
                        value={component.location.clone()}
                        placeholder="예: Seoul, South Korea"
                        oninput={link.callback(|e: InputEvent| {
                            Msg::SetLocation(e.target_unchecked_into::<HtmlInputElement>().value())
                        })}
                    />
                </div>

                <div class="form-group">
                    <label for="max-results">{"최대 결과 수"}</label>
                    <input
                        type="number"
                        id="max-results"
                        value={component.max_results.to_string()}
                        min={MIN_RESULTS.to_string()}
                        max={MAX_RESULTS.to_string()}
                        onchange={link.callback(|e: Event| {
                            Msg::SetMaxResults(e.target_unchecked_into::<HtmlInputElement>().value())
                        })}
                    />
                </div>

                <div class="form-group">
                    <label>{"검색 플랫폼"}</label>
                    <div class="source-buttons">
                        { for JobSource::ALL.iter().map(|source| source_button(component, link, *source)) }
                    </div>
                </div>

                {
                    if let Some(error) = &component.error {
                        html! { <div class="error-message">{ error.clone() }</div> }
                    } else {
                        html! {}
                    }
                }

                <button type="submit" class="search-btn" disabled={!component.can_submit()}>
                    { if component.loading { "검색 중..." } else { "검색하기" } }
                </button>
            </form>
        </div>
    }
}

fn source_button(component: &JobSearch, link: &Scope<JobSearch>, source: JobSource) -> Html {
    let active = component.is_selected(source);
    html! {
        <button
            type="button"
            class={classes!("source-btn", active.then_some("active"))}
            onclick={link.callback(move |_| Msg::ToggleSource(source))}
        >
            { source.label() }
        </button>
    }
}
