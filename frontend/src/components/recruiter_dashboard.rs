//! 招聘者面板
//!
//! "我的职位"与"我的申请"两个独立请求并发发出，合流后才进入
//! 就绪态；任一失败整体进入错误态，不渲染部分成功的结果。

use crate::api::ApiClient;
use crate::auth::use_auth;
use crate::components::icons::{Briefcase, FileText, Users};
use crate::components::job_form::JobPostForm;
use jobboard_shared::{
    Application, ApplicationStatus, CreateJobPostRequest, JobPosting, StatusUpdateRequest,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

fn status_badge_class(status: ApplicationStatus) -> &'static str {
    match status {
        ApplicationStatus::Accepted => "text-green-600 bg-green-50",
        ApplicationStatus::Rejected => "text-red-600 bg-red-50",
        ApplicationStatus::Pending => "text-yellow-600 bg-yellow-50",
    }
}

#[component]
pub fn RecruiterDashboardPage() -> impl IntoView {
    let auth = use_auth();
    let user = auth.user_signal();

    let (jobs, set_jobs) = signal(Vec::<JobPosting>::new());
    let (applications, set_applications) = signal(Vec::<Application>::new());
    let (loading, set_loading) = signal(true);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);
    // (文案, 是否出错)
    let (notification, set_notification) = signal(Option::<(String, bool)>::None);

    let load_data = move || {
        let Some(u) = user.get_untracked() else {
            return;
        };
        set_loading.set(true);
        set_error_msg.set(None);
        spawn_local(async move {
            let api = ApiClient::new();
            let (jobs_res, apps_res) = futures::join!(
                api.recruiter_job_posts(&u.email),
                api.recruiter_applications(&u.email),
            );
            match (jobs_res, apps_res) {
                (Ok(j), Ok(a)) => {
                    set_jobs.try_set(j);
                    set_applications.try_set(a);
                }
                (Err(e), _) | (_, Err(e)) => {
                    web_sys::console::error_1(
                        &format!("[RecruiterDashboard] fetch failed: {e}").into(),
                    );
                    set_error_msg.try_set(Some(
                        "Failed to load dashboard data. Please try again.".to_string(),
                    ));
                }
            }
            set_loading.try_set(false);
        });
    };

    // 初始加载
    Effect::new(move |_| {
        if user.get().is_some() {
            load_data();
        }
    });

    let handle_create_job = move |req: CreateJobPostRequest| {
        spawn_local(async move {
            match ApiClient::new().create_job_post(&req).await {
                Ok(_) => {
                    set_notification.try_set(Some(("Job posted successfully!".to_string(), false)));
                    load_data();
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("[RecruiterDashboard] create job failed: {e}").into(),
                    );
                    set_notification
                        .try_set(Some((e.user_message("Failed to create job posting"), true)));
                }
            }
        });
    };

    let handle_status = move |application_id: i64, status: ApplicationStatus| {
        spawn_local(async move {
            let req = StatusUpdateRequest {
                application_id,
                status,
            };
            match ApiClient::new().update_application_status(&req).await {
                Ok(_) => {
                    // 写后重取，展示服务器侧的新状态
                    set_notification.try_set(Some(("Application updated.".to_string(), false)));
                    load_data();
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("[RecruiterDashboard] status update failed: {e}").into(),
                    );
                    set_notification
                        .try_set(Some((e.user_message("Failed to update application"), true)));
                }
            }
        });
    };

    // 3秒后清除通知
    Effect::new(move |_| {
        if notification.get().is_some() {
            set_timeout(
                move || {
                    set_notification.try_set(None);
                },
                std::time::Duration::from_secs(3),
            );
        }
    });

    let pending_count = move || {
        applications.with(|apps| {
            apps.iter()
                .filter(|a| a.status == ApplicationStatus::Pending)
                .count()
        })
    };

    view! {
        <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
            <Show when=move || notification.get().is_some()>
                <div class="fixed top-20 right-6 z-50">
                    <div class=move || {
                        match notification.get() {
                            Some((_, true)) => "px-4 py-3 rounded shadow-lg bg-red-50 border border-red-400 text-red-700",
                            _ => "px-4 py-3 rounded shadow-lg bg-green-50 border border-green-400 text-green-700",
                        }
                    }>
                        {move || notification.get().map(|(text, _)| text)}
                    </div>
                </div>
            </Show>

            <div class="mb-8">
                <h1 class="text-3xl font-bold text-gray-900">"Recruiter Dashboard"</h1>
                <p class="text-gray-600 mt-2">
                    "Welcome back, " {move || user.get().map(|u| u.name)} "!"
                </p>
            </div>

            {move || {
                error_msg
                    .get()
                    .map(|msg| view! {
                        <div class="bg-red-50 border border-red-400 text-red-700 px-4 py-3 rounded mb-6">
                            {msg}
                        </div>
                    })
            }}

            <div class="grid md:grid-cols-3 gap-6 mb-8">
                <div class="card">
                    <div class="flex items-center justify-between">
                        <div>
                            <p class="text-gray-600 text-sm">"Active Jobs"</p>
                            <p class="text-3xl font-bold text-gray-900">{move || jobs.with(Vec::len)}</p>
                        </div>
                        <Briefcase attr:class="h-12 w-12 text-primary-600" />
                    </div>
                </div>
                <div class="card">
                    <div class="flex items-center justify-between">
                        <div>
                            <p class="text-gray-600 text-sm">"Total Applications"</p>
                            <p class="text-3xl font-bold text-gray-900">
                                {move || applications.with(Vec::len)}
                            </p>
                        </div>
                        <FileText attr:class="h-12 w-12 text-primary-600" />
                    </div>
                </div>
                <div class="card">
                    <div class="flex items-center justify-between">
                        <div>
                            <p class="text-gray-600 text-sm">"Pending Review"</p>
                            <p class="text-3xl font-bold text-yellow-600">{pending_count}</p>
                        </div>
                        <Users attr:class="h-12 w-12 text-yellow-600" />
                    </div>
                </div>
            </div>

            <div class="mb-8">
                {move || {
                    user.get()
                        .map(|u| view! {
                            <JobPostForm recruiter_email=u.email on_submit=handle_create_job />
                        })
                }}
            </div>

            <Show
                when=move || !loading.get()
                fallback=|| view! {
                    <div class="flex items-center justify-center py-20">
                        <div class="animate-spin rounded-full h-12 w-12 border-b-2 border-primary-600"></div>
                    </div>
                }
            >
                <div class="card mb-8">
                    <h2 class="text-xl font-semibold text-gray-900 mb-4">"My Job Postings"</h2>
                    <Show
                        when=move || !jobs.with(Vec::is_empty)
                        fallback=|| view! {
                            <p class="text-gray-600 text-center py-8">
                                "No job postings yet. Post one to get started."
                            </p>
                        }
                    >
                        <div class="overflow-x-auto">
                            <table class="min-w-full divide-y divide-gray-200">
                                <thead class="bg-gray-50">
                                    <tr>
                                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">
                                            "Title"
                                        </th>
                                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">
                                            "Location"
                                        </th>
                                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">
                                            "Type"
                                        </th>
                                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">
                                            "Deadline"
                                        </th>
                                    </tr>
                                </thead>
                                <tbody class="bg-white divide-y divide-gray-200">
                                    <For
                                        each=move || jobs.get()
                                        key=|job| job.id
                                        children=move |job| view! {
                                            <tr class="hover:bg-gray-50">
                                                <td class="px-6 py-4 whitespace-nowrap font-medium text-gray-900">
                                                    {job.job_title.clone()}
                                                </td>
                                                <td class="px-6 py-4 whitespace-nowrap text-gray-600">
                                                    {job.job_location.clone()}
                                                </td>
                                                <td class="px-6 py-4 whitespace-nowrap text-gray-600">
                                                    {job.job_type.label()}
                                                </td>
                                                <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-600">
                                                    {job.dead_line_date
                                                        .map(|d| d.format("%b %d, %Y").to_string())
                                                        .unwrap_or_else(|| "-".to_string())}
                                                </td>
                                            </tr>
                                        }
                                    />
                                </tbody>
                            </table>
                        </div>
                    </Show>
                </div>

                <div class="card">
                    <h2 class="text-xl font-semibold text-gray-900 mb-4">"Applications"</h2>
                    <Show
                        when=move || !applications.with(Vec::is_empty)
                        fallback=|| view! {
                            <p class="text-gray-600 text-center py-8">"No applications yet"</p>
                        }
                    >
                        <div class="overflow-x-auto">
                            <table class="min-w-full divide-y divide-gray-200">
                                <thead class="bg-gray-50">
                                    <tr>
                                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">
                                            "Applicant"
                                        </th>
                                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">
                                            "Job Title"
                                        </th>
                                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">
                                            "Applied Date"
                                        </th>
                                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">
                                            "Status"
                                        </th>
                                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">
                                            "Actions"
                                        </th>
                                    </tr>
                                </thead>
                                <tbody class="bg-white divide-y divide-gray-200">
                                    <For
                                        each=move || applications.get()
                                        key=|app| app.id
                                        children=move |app| {
                                            let id = app.id;
                                            view! {
                                                <tr class="hover:bg-gray-50">
                                                    <td class="px-6 py-4 whitespace-nowrap">
                                                        <div class="font-medium text-gray-900">
                                                            {app.employee_name.clone()}
                                                        </div>
                                                        <div class="text-sm text-gray-500">
                                                            {app.employee_email.clone()}
                                                        </div>
                                                    </td>
                                                    <td class="px-6 py-4 whitespace-nowrap text-gray-600">
                                                        {app.job_title.clone()}
                                                    </td>
                                                    <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-600">
                                                        {app.applied_date.format("%b %d, %Y").to_string()}
                                                    </td>
                                                    <td class="px-6 py-4 whitespace-nowrap">
                                                        <span class=format!(
                                                            "inline-flex px-3 py-1 rounded-full text-sm font-medium {}",
                                                            status_badge_class(app.status),
                                                        )>{app.status.label()}</span>
                                                    </td>
                                                    <td class="px-6 py-4 whitespace-nowrap text-sm">
                                                        {(app.status == ApplicationStatus::Pending)
                                                            .then(|| view! {
                                                                <div class="flex gap-2">
                                                                    <button
                                                                        class="text-green-600 hover:text-green-800 font-medium"
                                                                        on:click=move |_| handle_status(
                                                                            id,
                                                                            ApplicationStatus::Accepted,
                                                                        )
                                                                    >
                                                                        "Accept"
                                                                    </button>
                                                                    <button
                                                                        class="text-red-600 hover:text-red-800 font-medium"
                                                                        on:click=move |_| handle_status(
                                                                            id,
                                                                            ApplicationStatus::Rejected,
                                                                        )
                                                                    >
                                                                        "Reject"
                                                                    </button>
                                                                </div>
                                                            })}
                                                    </td>
                                                </tr>
                                            }
                                        }
                                    />
                                </tbody>
                            </table>
                        </div>
                    </Show>
                </div>
            </Show>
        </div>
    }
}
