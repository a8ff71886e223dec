use common::model::job::JobPosting;
use yew::prelude::*;

use crate::helpers::excerpt;

const DESCRIPTION_PREVIEW_CHARS: usize = 150;

/// Card for one posting in the results grid. Clicking the card selects it;
/// the link opens the original posting without selecting.
pub fn job_card(job: &JobPosting, selected: bool, on_select: Callback<JobPosting>) -> Html {
    let onclick = {
        let job = job.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(job.clone()))
    };
    let optional = |class: &'static str, value: &Option<String>, prefix: &str| match value {
        Some(value) if !value.is_empty() => html! { <p class={class}>{ format!("{}{}", prefix, value) }</p> },
        _ => html! {},
    };

    html! {
        <div class={classes!("job-card", selected.then_some("selected"))} {onclick}>
            <h3>{ job.title.clone() }</h3>
            <p class="company">{ job.company.clone() }</p>
            { optional("location", &job.location, "📍 ") }
            { optional("job-type", &job.job_type, "") }
            { optional("salary", &job.salary, "💰 ") }
            <p class="source">{ format!("출처: {}", job.source) }</p>
            <p class="description">{ excerpt(&job.description, DESCRIPTION_PREVIEW_CHARS) }</p>
            <a
                href={job.url.clone()}
                target="_blank"
                rel="noopener noreferrer"
                class="job-link"
                onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}
            >
                {"자세히 보기 →"}
            </a>
        </div>
    }
}
