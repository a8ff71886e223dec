use yew::prelude::*;

use crate::components::job_card::job_card;
use crate::components::job_search::JobSearch;
use crate::components::match_score_card::match_score_card;
use crate::components::matching_results::MatchingResults;
use crate::components::resume_upload::ResumeUpload;

use super::messages::Msg;
use super::state::MatchingPage;

pub fn view(page: &MatchingPage, ctx: &Context<MatchingPage>) -> Html {
    let link = ctx.link();

    html! {
        <main class="app-main">
            <div class="container">
                <section class="search-section">
                    <JobSearch on_jobs_found={link.callback(Msg::JobsFound)} />
                </section>

                <section class="upload-section">
                    <ResumeUpload on_resume_uploaded={link.callback(Msg::ResumeUploaded)} />
                </section>

                { jobs_section(page, ctx) }

                {
                    match (&page.resume, &page.selected_job) {
                        (Some(resume), Some(job)) => html! {
                            <section class="matching-section">
                                <MatchingResults
                                    resume={resume.clone()}
                                    job={job.clone()}
                                    on_result={link.callback(Msg::MatchResult)}
                                />
                            </section>
                        },
                        _ => html! {},
                    }
                }

                {
                    match &page.match_result {
                        Some(result) => match_score_card(result),
                        None => html! {},
                    }
                }
            </div>
        </main>
    }
}

fn jobs_section(page: &MatchingPage, ctx: &Context<MatchingPage>) -> Html {
    if page.jobs.is_empty() {
        return html! {};
    }
    let on_select = ctx.link().callback(Msg::SelectJob);

    html! {
        <section class="jobs-section">
            <h2>{ format!("검색 결과 ({}개)", page.jobs.len()) }</h2>
            <div class="jobs-grid">
                {
                    for page
                        .jobs
                        .iter()
                        .map(|job| job_card(job, page.is_selected(job), on_select.clone()))
                }
            </div>
        </section>
    }
}
