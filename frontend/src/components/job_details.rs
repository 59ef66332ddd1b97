//! 职位详情页
//!
//! 服务端没有单条查询端点：取全量列表后按 id 在客户端选取，
//! 找不到渲染未找到态。

use crate::api::ApiClient;
use crate::auth::use_auth;
use crate::components::icons::{ArrowLeft, Briefcase, Building, Calendar, MapPin};
use crate::web::router::use_router;
use jobboard_shared::{ApplyRequest, JobPosting, Role};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn JobDetailsPage(id: i64) -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let user = auth.user_signal();

    let (job, set_job) = signal(Option::<JobPosting>::None);
    let (loading, set_loading) = signal(true);
    let (applying, set_applying) = signal(false);
    // (文案, 是否错误)
    let (message, set_message) = signal(Option::<(String, bool)>::None);

    Effect::new(move |_| {
        spawn_local(async move {
            match ApiClient::new().job_posts().await {
                Ok(jobs) => {
                    set_job.try_set(jobs.into_iter().find(|j| j.id == id));
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[JobDetail] fetch failed: {e}").into());
                }
            }
            set_loading.try_set(false);
        });
    });

    let handle_apply = move |_| {
        let Some(current) = user.get_untracked() else {
            // 未登录先去登录，不创建申请
            router.navigate("/login");
            return;
        };
        if current.role != Role::Employee {
            set_message.set(Some(("Only employees can apply for jobs".to_string(), true)));
            return;
        }
        let Some(job) = job.get_untracked() else {
            return;
        };

        // 请求在途时按钮已禁用；服务端没有去重，这是已知的缺口
        set_applying.set(true);
        set_message.set(None);
        spawn_local(async move {
            let req = ApplyRequest {
                employee_email: current.email,
                job_id: job.id,
                recruiter_email: job.recruiter_email,
            };
            match ApiClient::new().apply(&req).await {
                Ok(_) => {
                    set_message
                        .try_set(Some(("Application submitted successfully!".to_string(), false)));
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[JobDetail] apply failed: {e}").into());
                    set_message
                        .try_set(Some((e.user_message("Failed to submit application"), true)));
                }
            }
            set_applying.try_set(false);
        });
    };

    view! {
        <div class="max-w-4xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
            <button
                class="flex items-center text-gray-600 hover:text-gray-900 mb-6"
                on:click=move |_| router.navigate("/jobs")
            >
                <ArrowLeft attr:class="h-5 w-5 mr-1" />
                "Back to Jobs"
            </button>

            <Show
                when=move || !loading.get()
                fallback=|| view! {
                    <div class="flex items-center justify-center py-20">
                        <div class="animate-spin rounded-full h-12 w-12 border-b-2 border-primary-600"></div>
                    </div>
                }
            >
                {move || match job.get() {
                    None => view! {
                        <div class="card text-center py-12">
                            <p class="text-gray-600 text-lg">"Job not found"</p>
                            <button class="btn btn-primary mt-4 mx-auto" on:click=move |_| router.navigate("/jobs")>
                                "Back to Jobs"
                            </button>
                        </div>
                    }
                        .into_any(),
                    Some(j) => view! {
                        <div class="card">
                            <h1 class="text-3xl font-bold text-gray-900 mb-4">{j.job_title.clone()}</h1>

                            <div class="flex flex-wrap gap-4 text-gray-600 mb-6">
                                <span class="flex items-center gap-2 font-medium">
                                    <Building attr:class="h-5 w-5" />
                                    {j.company_name.clone()}
                                </span>
                                <span class="flex items-center gap-2">
                                    <MapPin attr:class="h-5 w-5" />
                                    {j.job_location.clone()}
                                </span>
                                <span class="flex items-center gap-2">
                                    <Briefcase attr:class="h-5 w-5" />
                                    {j.job_type.label()}
                                </span>
                            </div>

                            <div class="flex items-center text-sm text-gray-500 mb-6 gap-4">
                                <span class="flex items-center gap-1">
                                    <Calendar attr:class="h-4 w-4" />
                                    "Posted: " {j.posted_date.format("%B %d, %Y").to_string()}
                                </span>
                                {j.dead_line_date.map(|d| view! {
                                    <span class="text-red-600 font-medium">
                                        "Deadline: " {d.format("%B %d, %Y").to_string()}
                                    </span>
                                })}
                            </div>

                            {move || message.get().map(|(text, is_err)| view! {
                                <div class=if is_err {
                                    "mb-6 px-4 py-3 rounded bg-red-50 border border-red-400 text-red-700"
                                } else {
                                    "mb-6 px-4 py-3 rounded bg-green-50 border border-green-400 text-green-700"
                                }>{text}</div>
                            })}

                            <div class="mb-8">
                                <h2 class="text-xl font-semibold text-gray-900 mb-3">"Job Description"</h2>
                                <p class="text-gray-700 whitespace-pre-line">{j.job_description.clone()}</p>
                            </div>

                            {move || match user.get() {
                                Some(u) if u.role == Role::Employee => view! {
                                    <button
                                        class="btn btn-primary w-full py-3 text-lg"
                                        on:click=handle_apply
                                        disabled=move || applying.get()
                                    >
                                        {move || if applying.get() { "Submitting..." } else { "Apply for this Job" }}
                                    </button>
                                }
                                    .into_any(),
                                Some(_) => ().into_any(),
                                None => view! {
                                    <button
                                        class="btn btn-primary w-full py-3 text-lg"
                                        on:click=move |_| router.navigate("/login")
                                    >
                                        "Login to Apply"
                                    </button>
                                }
                                    .into_any(),
                            }}
                        </div>
                    }
                        .into_any(),
                }}
            </Show>
        </div>
    }
}
