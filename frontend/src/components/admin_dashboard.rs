//! 管理面板
//!
//! 用户列表（可按角色过滤）与平台计数并发拉取，合流后渲染。
//! 管理员自己的行不提供停用操作。

use crate::api::ApiClient;
use crate::auth::use_auth;
use crate::components::icons::{Briefcase, Shield, TrendingUp, Users};
use crate::components::job_form::JobPostForm;
use jobboard_shared::{CreateJobPostRequest, ManagedUser, PlatformStats, Role, UserStatusUpdate};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let auth = use_auth();
    let user = auth.user_signal();

    let (users, set_users) = signal(Vec::<ManagedUser>::new());
    let (stats, set_stats) = signal(Option::<PlatformStats>::None);
    let (loading, set_loading) = signal(true);
    // None 表示不过滤（"All Roles"）
    let (role_filter, set_role_filter) = signal(Option::<Role>::None);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);
    let (notification, set_notification) = signal(Option::<(String, bool)>::None);

    let load_data = move || {
        let filter = role_filter.get_untracked();
        set_loading.set(true);
        set_error_msg.set(None);
        spawn_local(async move {
            let api = ApiClient::new();
            let users_fut = async {
                match filter {
                    None => api.admin_users().await,
                    Some(role) => api.admin_users_by_role(role).await,
                }
            };
            let (users_res, stats_res) = futures::join!(users_fut, api.platform_stats());
            match (users_res, stats_res) {
                (Ok(u), Ok(s)) => {
                    set_users.try_set(u);
                    set_stats.try_set(Some(s));
                }
                (Err(e), _) | (_, Err(e)) => {
                    web_sys::console::error_1(
                        &format!("[AdminDashboard] fetch failed: {e}").into(),
                    );
                    set_error_msg.try_set(Some(
                        "Failed to load dashboard data. Please try again.".to_string(),
                    ));
                }
            }
            set_loading.try_set(false);
        });
    };

    // 初始加载；过滤条件变化时重新拉取
    Effect::new(move |_| {
        role_filter.track();
        load_data();
    });

    let handle_toggle = move |email: String, currently_active: bool| {
        spawn_local(async move {
            let req = UserStatusUpdate {
                email,
                is_active: !currently_active,
            };
            match ApiClient::new().set_user_active(&req).await {
                Ok(()) => {
                    set_notification.try_set(Some(("User status updated.".to_string(), false)));
                    load_data();
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("[AdminDashboard] status toggle failed: {e}").into(),
                    );
                    set_notification
                        .try_set(Some((e.user_message("Failed to update user status"), true)));
                }
            }
        });
    };

    let handle_create_job = move |req: CreateJobPostRequest| {
        spawn_local(async move {
            match ApiClient::new().create_job_post(&req).await {
                Ok(_) => {
                    set_notification.try_set(Some(("Job posted successfully!".to_string(), false)));
                    load_data();
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("[AdminDashboard] create job failed: {e}").into(),
                    );
                    set_notification
                        .try_set(Some((e.user_message("Failed to create job posting"), true)));
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

    // 当前管理员的邮箱，用于隐藏自己行上的停用操作
    let admin_email = Signal::derive(move || user.get().map(|u| u.email).unwrap_or_default());

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
                <h1 class="text-3xl font-bold text-gray-900">"Admin Dashboard"</h1>
                <p class="text-gray-600 mt-2">"System Overview and User Management"</p>
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

            {move || {
                stats
                    .get()
                    .map(|s| view! {
                        <div class="grid md:grid-cols-4 gap-6 mb-8">
                            <div class="card">
                                <div class="flex items-center justify-between">
                                    <div>
                                        <p class="text-gray-600 text-sm">"Total Users"</p>
                                        <p class="text-3xl font-bold text-gray-900">{s.total_users}</p>
                                    </div>
                                    <Users attr:class="h-12 w-12 text-primary-600" />
                                </div>
                            </div>
                            <div class="card">
                                <div class="flex items-center justify-between">
                                    <div>
                                        <p class="text-gray-600 text-sm">"Total Jobs"</p>
                                        <p class="text-3xl font-bold text-gray-900">{s.total_jobs}</p>
                                    </div>
                                    <Briefcase attr:class="h-12 w-12 text-primary-600" />
                                </div>
                            </div>
                            <div class="card">
                                <div class="flex items-center justify-between">
                                    <div>
                                        <p class="text-gray-600 text-sm">"Applications"</p>
                                        <p class="text-3xl font-bold text-gray-900">{s.total_applications}</p>
                                    </div>
                                    <TrendingUp attr:class="h-12 w-12 text-primary-600" />
                                </div>
                            </div>
                            <div class="card">
                                <div class="flex items-center justify-between">
                                    <div>
                                        <p class="text-gray-600 text-sm">"Active Users"</p>
                                        <p class="text-3xl font-bold text-green-600">{s.active_users}</p>
                                    </div>
                                    <Shield attr:class="h-12 w-12 text-green-600" />
                                </div>
                            </div>
                        </div>
                    })
            }}

            <div class="mb-8">
                {move || {
                    user.get()
                        .map(|u| view! {
                            <JobPostForm recruiter_email=u.email on_submit=handle_create_job />
                        })
                }}
            </div>

            <div class="card">
                <div class="flex justify-between items-center mb-6">
                    <h2 class="text-xl font-semibold text-gray-900">"User Management"</h2>
                    <div class="flex items-center gap-2">
                        <label class="text-sm text-gray-600">"Filter by Role:"</label>
                        <select
                            class="input py-2"
                            on:change=move |ev| {
                                // "ALL" 解析不到角色，即不过滤
                                set_role_filter.set(Role::from_str(&event_target_value(&ev)));
                            }
                        >
                            <option value="ALL">"All Roles"</option>
                            <option value="EMPLOYEE">"Employees"</option>
                            <option value="RECRUITER">"Recruiters"</option>
                            <option value="ADMIN">"Admins"</option>
                        </select>
                    </div>
                </div>

                <Show
                    when=move || !loading.get()
                    fallback=|| view! {
                        <div class="flex items-center justify-center py-12">
                            <div class="animate-spin rounded-full h-12 w-12 border-b-2 border-primary-600"></div>
                        </div>
                    }
                >
                    <Show
                        when=move || !users.with(Vec::is_empty)
                        fallback=|| view! {
                            <p class="text-gray-600 text-center py-8">"No users found"</p>
                        }
                    >
                        <div class="overflow-x-auto">
                            <table class="min-w-full divide-y divide-gray-200">
                                <thead class="bg-gray-50">
                                    <tr>
                                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">
                                            "Name"
                                        </th>
                                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">
                                            "Email"
                                        </th>
                                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">
                                            "Role"
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
                                        each=move || users.get()
                                        key=|u| u.id
                                        children=move |u| {
                                            let email = u.email.clone();
                                            let row_email = u.email.clone();
                                            let active = u.is_active;
                                            view! {
                                                <tr class="hover:bg-gray-50">
                                                    <td class="px-6 py-4 whitespace-nowrap font-medium text-gray-900">
                                                        {u.name.clone()}
                                                    </td>
                                                    <td class="px-6 py-4 whitespace-nowrap text-gray-600">
                                                        {u.email.clone()}
                                                    </td>
                                                    <td class="px-6 py-4 whitespace-nowrap">
                                                        <span class="px-3 py-1 inline-flex text-xs font-semibold rounded-full bg-blue-100 text-blue-800">
                                                            {u.role.as_str()}
                                                        </span>
                                                    </td>
                                                    <td class="px-6 py-4 whitespace-nowrap">
                                                        <span class=if active {
                                                            "px-3 py-1 inline-flex text-xs font-semibold rounded-full bg-green-100 text-green-800"
                                                        } else {
                                                            "px-3 py-1 inline-flex text-xs font-semibold rounded-full bg-red-100 text-red-800"
                                                        }>{if active { "Active" } else { "Inactive" }}</span>
                                                    </td>
                                                    <td class="px-6 py-4 whitespace-nowrap text-sm">
                                                        {move || {
                                                            // 管理员不能停用自己：自己的行不渲染操作
                                                            (admin_email.get() != row_email)
                                                                .then(|| {
                                                                    let email = email.clone();
                                                                    view! {
                                                                        <button
                                                                            class=if active {
                                                                                "text-red-600 hover:text-red-800 font-medium"
                                                                            } else {
                                                                                "text-green-600 hover:text-green-800 font-medium"
                                                                            }
                                                                            on:click=move |_| handle_toggle(
                                                                                email.clone(),
                                                                                active,
                                                                            )
                                                                        >
                                                                            {if active { "Deactivate" } else { "Activate" }}
                                                                        </button>
                                                                    }
                                                                })
                                                        }}
                                                    </td>
                                                </tr>
                                            }
                                        }
                                    />
                                </tbody>
                            </table>
                        </div>
                    </Show>
                </Show>
            </div>
        </div>
    }
}
