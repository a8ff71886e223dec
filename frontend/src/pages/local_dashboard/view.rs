use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

use crate::components::resume_upload::ACCEPTED_EXTENSIONS;
use crate::helpers::{format_kib, format_modified};

use super::messages::Msg;
use super::state::{DashboardTab, LocalDashboard};

pub fn view(component: &LocalDashboard, ctx: &Context<LocalDashboard>) -> Html {
    let link = ctx.link();

    html! {
        <div class="local-dashboard">
            <header class="dashboard-header">
                <h1>{"🔍 Job Search & Resume Matching - Local Dashboard"}</h1>
                <p>{"로컬에서 채용 공고를 검색하고 이력서를 비교하세요"}</p>
            </header>

            { notice_banner(component, link) }
            { build_tab_bar(component, link) }

            <div class="tab-content">
                {
                    match component.active_tab {
                        DashboardTab::Search => search_panel(component, link),
                        DashboardTab::Results => results_panel(component, link),
                        DashboardTab::Compare => compare_panel(component, link),
                    }
                }
            </div>
        </div>
    }
}

fn notice_banner(component: &LocalDashboard, link: &Scope<LocalDashboard>) -> Html {
    let Some(notice) = &component.notice else {
        return html! {};
    };
    html! {
        <div class={classes!("message", notice.kind.class())}>
            { notice.text.clone() }
            <button onclick={link.callback(|_| Msg::DismissNotice)}>{"×"}</button>
        </div>
    }
}

fn build_tab_bar(component: &LocalDashboard, link: &Scope<LocalDashboard>) -> Html {
    html! {
        <div class="tabs">
            {
                for DashboardTab::ALL.iter().map(|tab| {
                    let tab = *tab;
                    html! {
                        <button
                            class={classes!((component.active_tab == tab).then_some("active"))}
                            onclick={link.callback(move |_| Msg::SetTab(tab))}
                        >
                            { tab.label() }
                        </button>
                    }
                })
            }
        </div>
    }
}

fn search_panel(component: &LocalDashboard, link: &Scope<LocalDashboard>) -> Html {
    html! {
        <div class="search-panel">
            <h2>{"채용 공고 검색"}</h2>
            <div class="form-group">
                <label>{"검색 키워드 *"}</label>
                <input
                    type="text"
                    value={component.search_keyword.clone()}
                    placeholder="예: Python Developer, Software Engineer"
                    oninput={link.callback(|e: InputEvent| {
                        Msg::SetKeyword(e.target_unchecked_into::<HtmlInputElement>().value())
                    })}
                    onkeydown={link.batch_callback(|e: KeyboardEvent| {
                        if e.key() == "Enter" { vec![Msg::Search] } else { vec![] }
                    })}
                />
            </div>
            <div class="form-group">
                <label>{"검색 지역"}</label>
                <input
                    type="text"
                    value={component.search_location.clone()}
                    placeholder="예: Seoul, South Korea"
                    oninput={link.callback(|e: InputEvent| {
                        Msg::SetLocation(e.target_unchecked_into::<HtmlInputElement>().value())
                    })}
                />
            </div>
            <button
                class="primary-button"
                onclick={link.callback(|_| Msg::Search)}
                disabled={component.searching}
            >
                { if component.searching { "검색 중..." } else { "검색 시작" } }
            </button>
            {
                if component.searching {
                    html! {
                        <div class="loading">
                            <p>{"채용 공고를 수집하고 있습니다. 몇 분 정도 걸릴 수 있습니다..."}</p>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

fn results_panel(component: &LocalDashboard, link: &Scope<LocalDashboard>) -> Html {
    html! {
        <div class="results-panel">
            <h2>{"수집된 채용 공고"}</h2>
            <div class="file-list">
                {
                    if component.job_files.is_empty() {
                        html! { <p class="empty">{"수집된 채용 공고가 없습니다. 먼저 검색을 실행하세요."}</p> }
                    } else {
                        component.job_files.iter().map(|file| {
                            let name = file.name.clone();
                            html! {
                                <div class="file-item">
                                    <div class="file-info">
                                        <h3>{ file.name.clone() }</h3>
                                        <p>
                                            { format!(
                                                "크기: {} | 수정: {}",
                                                format_kib(file.size),
                                                format_modified(&file.modified)
                                            ) }
                                        </p>
                                    </div>
                                    <button
                                        class="secondary-button"
                                        onclick={link.callback(move |_| Msg::ViewJobFile(name.clone()))}
                                    >
                                        {"JSON 보기"}
                                    </button>
                                </div>
                            }
                        }).collect::<Html>()
                    }
                }
            </div>
        </div>
    }
}

fn compare_panel(component: &LocalDashboard, link: &Scope<LocalDashboard>) -> Html {
    html! {
        <div class="compare-panel">
            <h2>{"이력서와 채용 공고 비교"}</h2>

            <div class="form-section">
                <h3>{"1. 이력서 업로드"}</h3>
                <div class="upload-area">
                    <input
                        type="file"
                        id={component.upload_input_id.clone()}
                        accept={ACCEPTED_EXTENSIONS}
                        style="display: none"
                        disabled={component.uploading}
                        onchange={link.batch_callback(|e: Event| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            let file = input.files().and_then(|files| files.get(0));
                            // Reset so picking the same file again still fires `change`.
                            input.set_value("");
                            file.map(Msg::UploadFile)
                        })}
                    />
                    <label
                        for={component.upload_input_id.clone()}
                        class={classes!("upload-button", component.uploading.then_some("disabled"))}
                    >
                        { if component.uploading { "업로드 중..." } else { "📄 이력서 파일 선택 (PDF, DOCX, TXT)" } }
                    </label>
                </div>
                { resume_list(component, link) }
            </div>

            <div class="form-section">
                <h3>{"2. 채용 공고 선택"}</h3>
                <select
                    class="select-input"
                    onchange={link.callback(|e: Event| {
                        Msg::SelectJobFile(e.target_unchecked_into::<HtmlSelectElement>().value())
                    })}
                >
                    {
                        for component.job_files.iter().map(|file| html! {
                            <option
                                value={file.name.clone()}
                                selected={file.name == component.selected_job_file}
                            >
                                { file.name.clone() }
                            </option>
                        })
                    }
                </select>
            </div>

            <div class="form-section">
                <button
                    class="primary-button"
                    onclick={link.callback(|_| Msg::Compare)}
                    disabled={!component.can_compare()}
                >
                    { if component.comparing { "비교 중..." } else { "비교 분석 시작" } }
                </button>
                {
                    if component.comparing {
                        html! {
                            <div class="loading">
                                <p>{"이력서와 채용 공고를 비교하고 있습니다..."}</p>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
        </div>
    }
}

fn resume_list(component: &LocalDashboard, link: &Scope<LocalDashboard>) -> Html {
    if component.resume_files.is_empty() {
        return html! {};
    }
    html! {
        <div class="resume-list">
            <h4>{"업로드된 이력서:"}</h4>
            {
                for component.resume_files.iter().map(|file| {
                    let checked = component.selected_resume.as_deref() == Some(file.path.as_str());
                    html! {
                        <label class="resume-item">
                            <input
                                type="radio"
                                name="resume"
                                value={file.path.clone()}
                                {checked}
                                onchange={link.callback(|e: Event| {
                                    Msg::SelectResume(e.target_unchecked_into::<HtmlInputElement>().value())
                                })}
                            />
                            <span>{ file.name.clone() }</span>
                            <small>{ format_kib(file.size) }</small>
                        </label>
                    }
                })
            }
        </div>
    }
}
