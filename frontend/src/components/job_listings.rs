//! 职位列表页
//!
//! 挂载时拉取全量列表；非空检索词走检索端点，清空检索词
//! 重新发起与初始加载相同的全量请求。

use crate::api::ApiClient;
use crate::components::icons::{Briefcase, Building, Calendar, MapPin, Search};
use crate::web::router::Link;
use jobboard_shared::JobPosting;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn JobListingsPage() -> impl IntoView {
    let (jobs, set_jobs) = signal(Vec::<JobPosting>::new());
    let (loading, set_loading) = signal(true);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);
    let (search_term, set_search_term) = signal(String::new());

    let load_jobs = move |term: String| {
        set_loading.set(true);
        set_error_msg.set(None);
        spawn_local(async move {
            match ApiClient::new().search_job_posts(&term).await {
                Ok(data) => {
                    set_jobs.try_set(data);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[Jobs] fetch failed: {e}").into());
                    set_error_msg
                        .try_set(Some("Failed to load jobs. Please try again.".to_string()));
                }
            }
            set_loading.try_set(false);
        });
    };

    // 初始加载
    Effect::new(move |_| {
        load_jobs(String::new());
    });

    let on_search = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        load_jobs(search_term.get());
    };

    let on_clear = move |_| {
        set_search_term.set(String::new());
        load_jobs(String::new());
    };

    view! {
        <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
            <h1 class="text-3xl font-bold text-gray-900 mb-4">"Browse Jobs"</h1>

            <form class="card mb-8" on:submit=on_search>
                <div class="flex flex-col md:flex-row gap-4">
                    <div class="relative flex-1">
                        <Search attr:class="absolute left-3 top-1/2 -translate-y-1/2 h-5 w-5 text-gray-400" />
                        <input
                            type="text"
                            class="input pl-10"
                            placeholder="Search by job title, company, or location..."
                            prop:value=search_term
                            on:input=move |ev| set_search_term.set(event_target_value(&ev))
                        />
                    </div>
                    <button type="submit" class="btn btn-primary">
                        "Search Jobs"
                    </button>
                    <button type="button" class="btn btn-secondary" on:click=on_clear>
                        "Clear"
                    </button>
                </div>
            </form>

            {move || {
                error_msg
                    .get()
                    .map(|msg| view! {
                        <div class="bg-red-50 border border-red-400 text-red-700 px-4 py-3 rounded mb-6">
                            {msg}
                        </div>
                    })
            }}

            <Show
                when=move || !loading.get()
                fallback=|| view! {
                    <div class="flex items-center justify-center py-20">
                        <div class="animate-spin rounded-full h-12 w-12 border-b-2 border-primary-600"></div>
                    </div>
                }
            >
                <Show
                    when=move || !jobs.with(Vec::is_empty)
                    fallback=|| view! {
                        <div class="card text-center py-12">
                            <Briefcase attr:class="h-12 w-12 text-gray-400 mx-auto mb-4" />
                            <p class="text-gray-600 text-lg">"No jobs found"</p>
                        </div>
                    }
                >
                    <div class="space-y-4">
                        <For
                            each=move || jobs.get()
                            key=|job| job.id
                            children=move |job| {
                                let path = format!("/jobs/{}", job.id);
                                view! {
                                    <Link to=path attr:class="card block hover:shadow-lg transition-shadow">
                                        <h2 class="text-xl font-semibold text-gray-900 mb-2">
                                            {job.job_title.clone()}
                                        </h2>
                                        <div class="flex flex-wrap gap-4 text-sm text-gray-600 mb-3">
                                            <span class="flex items-center gap-1">
                                                <Building attr:class="h-4 w-4" />
                                                {job.company_name.clone()}
                                            </span>
                                            <span class="flex items-center gap-1">
                                                <MapPin attr:class="h-4 w-4" />
                                                {job.job_location.clone()}
                                            </span>
                                            <span class="flex items-center gap-1">
                                                <Briefcase attr:class="h-4 w-4" />
                                                {job.job_type.label()}
                                            </span>
                                        </div>
                                        <p class="text-gray-700 mb-3 line-clamp-2">
                                            {job.job_description.clone()}
                                        </p>
                                        <div class="flex items-center text-sm text-gray-500 gap-4">
                                            <span class="flex items-center gap-1">
                                                <Calendar attr:class="h-4 w-4" />
                                                "Posted: " {job.posted_date.format("%b %d, %Y").to_string()}
                                            </span>
                                            {job.dead_line_date.map(|d| view! {
                                                <span>"Deadline: " {d.format("%b %d, %Y").to_string()}</span>
                                            })}
                                        </div>
                                    </Link>
                                }
                            }
                        />
                    </div>
                </Show>
            </Show>
        </div>
    }
}
