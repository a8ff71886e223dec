use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::helpers::format_kib;

use super::messages::Msg;
use super::state::{ResumeUpload, ACCEPTED_EXTENSIONS};

pub fn view(component: &ResumeUpload, ctx: &Context<ResumeUpload>) -> Html {
    let link = ctx.link();

    html! {
        <div class="resume-upload">
            <h2>{"이력서 업로드"}</h2>
            <form
                class="upload-form"
                onsubmit={link.callback(|e: SubmitEvent| {
                    e.prevent_default();
                    Msg::Submit
                })}
            >
                <div class="form-group">
                    <label for={component.input_id.clone()}>{"이력서 파일 (PDF, DOCX, TXT)"}</label>
                    <input
                        type="file"
                        id={component.input_id.clone()}
                        class="file-input"
                        accept={ACCEPTED_EXTENSIONS}
                        onchange={link.callback(|e: Event| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            Msg::FileChosen(input.files().and_then(|files| files.get(0)))
                        })}
                    />
                    {
                        if let Some(selected) = &component.selected {
                            html! {
                                <div class="file-info">
                                    {"선택된 파일: "}<strong>{ selected.name.clone() }</strong>
                                    { format!(" ({})", format_kib(selected.size)) }
                                </div>
                            }
                        } else {
                            html! {}
                        }
                    }
                </div>

                {
                    if let Some(error) = &component.error {
                        html! { <div class="error-message">{ error.clone() }</div> }
                    } else {
                        html! {}
                    }
                }
                {
                    if let Some(success) = &component.success {
                        html! { <div class="success-message">{ success.clone() }{ summary_line(component) }</div> }
                    } else {
                        html! {}
                    }
                }

                <button type="submit" class="upload-btn" disabled={!component.can_submit()}>
                    { if component.loading { "업로드 중..." } else { "이력서 업로드" } }
                </button>
            </form>
        </div>
    }
}

fn summary_line(component: &ResumeUpload) -> Html {
    let Some(summary) = &component.summary else {
        return html! {};
    };
    let mut parts: Vec<String> = Vec::new();
    if let Some(name) = &summary.name {
        parts.push(name.clone());
    }
    if let Some(email) = &summary.email {
        parts.push(email.clone());
    }
    if summary.skill_count > 0 {
        parts.push(format!("스킬 {}개", summary.skill_count));
    }
    if parts.is_empty() {
        html! {}
    } else {
        html! { <div class="resume-summary">{ parts.join(" · ") }</div> }
    }
}
