use common::model::matching::{format_percent, MatchResult};
use yew::prelude::*;

use crate::helpers::render_analysis;

/// Score breakdown and analysis of one match result. Scores are shown as
/// received; the analysis text is rendered as markdown.
pub fn match_score_card(result: &MatchResult) -> Html {
    let score = &result.match_score;

    html! {
        <section class="result-section">
            <h2>{"적합도 분석 결과"}</h2>
            {
                match (&result.job_title, &result.company) {
                    (Some(title), Some(company)) => html! {
                        <p class="result-target">{ format!("{} · {}", title, company) }</p>
                    },
                    _ => html! {},
                }
            }
            <div class="match-score">
                <div class="score-circle">
                    <span class="score-value">{ format_percent(score.overall_score) }</span>
                    <span class="score-label">{"전체 적합도"}</span>
                </div>
                <div class="score-details">
                    {
                        for score.breakdown().iter().map(|(label, value)| html! {
                            <div class="score-item">
                                <span>{ *label }</span>
                                <span>{ format_percent(*value) }</span>
                            </div>
                        })
                    }
                </div>
            </div>
            { keyword_list("매칭된 키워드", "matched", &score.matched_keywords) }
            { keyword_list("부족한 키워드", "missing", &score.missing_keywords) }
            {
                if score.recommendations.is_empty() {
                    html! {}
                } else {
                    html! {
                        <div class="recommendations">
                            <h4>{"추천 사항"}</h4>
                            <ul>
                                { for score.recommendations.iter().map(|r| html! { <li>{ r.clone() }</li> }) }
                            </ul>
                        </div>
                    }
                }
            }
            <div class="analysis">
                <h3>{"상세 분석"}</h3>
                <div class="analysis-body">{ Html::from_html_unchecked(render_analysis(&result.analysis)) }</div>
            </div>
        </section>
    }
}

fn keyword_list(title: &str, kind: &'static str, keywords: &[String]) -> Html {
    if keywords.is_empty() {
        return html! {};
    }
    html! {
        <div class={classes!("keyword-list", kind)}>
            <h4>{ title.to_string() }</h4>
            { for keywords.iter().map(|k| html! { <span class="keyword">{ k.clone() }</span> }) }
        </div>
    }
}
