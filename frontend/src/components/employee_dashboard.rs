//! 求职者面板

use crate::api::ApiClient;
use crate::auth::use_auth;
use crate::components::icons::{Briefcase, CheckCircle, Clock, FileText, User, XCircle};
use crate::web::router::Link;
use jobboard_shared::{Application, ApplicationStatus};
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
pub fn EmployeeDashboardPage() -> impl IntoView {
    let auth = use_auth();
    let user = auth.user_signal();

    let (applications, set_applications) = signal(Vec::<Application>::new());
    let (loading, set_loading) = signal(true);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    Effect::new(move |_| {
        let Some(u) = user.get() else {
            return;
        };
        spawn_local(async move {
            match ApiClient::new().employee_applications(&u.email).await {
                Ok(data) => {
                    set_applications.try_set(data);
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("[EmployeeDashboard] fetch failed: {e}").into(),
                    );
                    set_error_msg.try_set(Some("Failed to load your applications.".to_string()));
                }
            }
            set_loading.try_set(false);
        });
    });

    let total = move || applications.with(Vec::len);
    let pending = move || {
        applications.with(|apps| {
            apps.iter()
                .filter(|a| a.status == ApplicationStatus::Pending)
                .count()
        })
    };
    let accepted = move || {
        applications.with(|apps| {
            apps.iter()
                .filter(|a| a.status == ApplicationStatus::Accepted)
                .count()
        })
    };

    view! {
        <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
            <div class="mb-8">
                <h1 class="text-3xl font-bold text-gray-900">"Employee Dashboard"</h1>
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
                            <p class="text-gray-600 text-sm">"Total Applications"</p>
                            <p class="text-3xl font-bold text-gray-900">{total}</p>
                        </div>
                        <FileText attr:class="h-12 w-12 text-primary-600" />
                    </div>
                </div>
                <div class="card">
                    <div class="flex items-center justify-between">
                        <div>
                            <p class="text-gray-600 text-sm">"Pending"</p>
                            <p class="text-3xl font-bold text-yellow-600">{pending}</p>
                        </div>
                        <Clock attr:class="h-12 w-12 text-yellow-600" />
                    </div>
                </div>
                <div class="card">
                    <div class="flex items-center justify-between">
                        <div>
                            <p class="text-gray-600 text-sm">"Accepted"</p>
                            <p class="text-3xl font-bold text-green-600">{accepted}</p>
                        </div>
                        <CheckCircle attr:class="h-12 w-12 text-green-600" />
                    </div>
                </div>
            </div>

            <div class="grid md:grid-cols-2 gap-6 mb-8">
                <Link to="/jobs" attr:class="card hover:shadow-lg transition-shadow block">
                    <div class="flex items-center">
                        <Briefcase attr:class="h-10 w-10 text-primary-600 mr-4" />
                        <div>
                            <h3 class="font-semibold text-lg">"Browse Jobs"</h3>
                            <p class="text-gray-600 text-sm">"Find your next opportunity"</p>
                        </div>
                    </div>
                </Link>
                <Link to="/employee/profile" attr:class="card hover:shadow-lg transition-shadow block">
                    <div class="flex items-center">
                        <User attr:class="h-10 w-10 text-primary-600 mr-4" />
                        <div>
                            <h3 class="font-semibold text-lg">"Update Profile"</h3>
                            <p class="text-gray-600 text-sm">"Keep your information current"</p>
                        </div>
                    </div>
                </Link>
            </div>

            <div class="card">
                <h2 class="text-xl font-semibold text-gray-900 mb-4">"My Applications"</h2>

                <Show
                    when=move || !loading.get()
                    fallback=|| view! {
                        <div class="flex items-center justify-center py-12">
                            <div class="animate-spin rounded-full h-12 w-12 border-b-2 border-primary-600"></div>
                        </div>
                    }
                >
                    <Show
                        when=move || { total() > 0 }
                        fallback=|| view! {
                            <div class="text-center py-12">
                                <FileText attr:class="h-12 w-12 text-gray-400 mx-auto mb-4" />
                                <p class="text-gray-600">"No applications yet"</p>
                                <Link to="/jobs" attr:class="btn btn-primary mt-4 inline-block">
                                    "Browse Jobs"
                                </Link>
                            </div>
                        }
                    >
                        <div class="overflow-x-auto">
                            <table class="min-w-full divide-y divide-gray-200">
                                <thead class="bg-gray-50">
                                    <tr>
                                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">
                                            "Job Title"
                                        </th>
                                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">
                                            "Company"
                                        </th>
                                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">
                                            "Applied Date"
                                        </th>
                                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">
                                            "Status"
                                        </th>
                                    </tr>
                                </thead>
                                <tbody class="bg-white divide-y divide-gray-200">
                                    <For
                                        each=move || applications.get()
                                        key=|app| app.id
                                        children=move |app| view! {
                                            <tr class="hover:bg-gray-50">
                                                <td class="px-6 py-4 whitespace-nowrap font-medium text-gray-900">
                                                    {app.job_title.clone()}
                                                </td>
                                                <td class="px-6 py-4 whitespace-nowrap text-gray-600">
                                                    {app.company_name.clone()}
                                                </td>
                                                <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-600">
                                                    {app.applied_date.format("%b %d, %Y").to_string()}
                                                </td>
                                                <td class="px-6 py-4 whitespace-nowrap">
                                                    <span class=format!(
                                                        "inline-flex items-center gap-2 px-3 py-1 rounded-full text-sm font-medium {}",
                                                        status_badge_class(app.status),
                                                    )>
                                                        {match app.status {
                                                            ApplicationStatus::Accepted => view! { <CheckCircle attr:class="h-4 w-4" /> }.into_any(),
                                                            ApplicationStatus::Rejected => view! { <XCircle attr:class="h-4 w-4" /> }.into_any(),
                                                            ApplicationStatus::Pending => view! { <Clock attr:class="h-4 w-4" /> }.into_any(),
                                                        }}
                                                        {app.status.label()}
                                                    </span>
                                                </td>
                                            </tr>
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
