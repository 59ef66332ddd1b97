//! 招聘者档案页

use crate::api::ApiClient;
use crate::auth::use_auth;
use jobboard_shared::RecruiterProfile;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 空字符串归一为 None
fn non_empty(s: String) -> Option<String> {
    let s = s.trim().to_string();
    if s.is_empty() { None } else { Some(s) }
}

fn field_row(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div>
            <p class="text-sm text-gray-500">{label}</p>
            <p class="text-gray-900">{value}</p>
        </div>
    }
}

#[component]
pub fn RecruiterProfilePage() -> impl IntoView {
    let auth = use_auth();
    let user = auth.user_signal();

    let (profile, set_profile) = signal(Option::<RecruiterProfile>::None);
    let (loading, set_loading) = signal(true);
    let (editing, set_editing) = signal(false);
    let (message, set_message) = signal(Option::<(String, bool)>::None);

    // 表单字段
    let name = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let company_name = RwSignal::new(String::new());
    let company_address = RwSignal::new(String::new());

    let fill_form = move |p: &RecruiterProfile| {
        name.set(p.name.clone());
        phone.set(p.phone.clone().unwrap_or_default());
        company_name.set(p.company_name.clone().unwrap_or_default());
        company_address.set(p.company_address.clone().unwrap_or_default());
    };

    let load_profile = move || {
        let Some(u) = user.get_untracked() else {
            return;
        };
        spawn_local(async move {
            match ApiClient::new().recruiter_profile(&u.email).await {
                Ok(p) => {
                    fill_form(&p);
                    set_profile.try_set(Some(p));
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("[RecruiterProfile] fetch failed: {e}").into(),
                    );
                    set_message.try_set(Some(("Failed to load profile.".to_string(), true)));
                }
            }
            set_loading.try_set(false);
        });
    };

    Effect::new(move |_| {
        if user.get().is_some() {
            load_profile();
        }
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(u) = user.get_untracked() else {
            return;
        };
        set_message.set(None);
        spawn_local(async move {
            // email 不可修改，原样回传
            let update = RecruiterProfile {
                name: name.get_untracked(),
                email: u.email,
                phone: non_empty(phone.get_untracked()),
                company_name: non_empty(company_name.get_untracked()),
                company_address: non_empty(company_address.get_untracked()),
            };
            match ApiClient::new().save_recruiter_profile(&update).await {
                Ok(_) => {
                    set_message.try_set(Some(("Profile updated successfully!".to_string(), false)));
                    set_editing.try_set(false);
                    load_profile();
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("[RecruiterProfile] save failed: {e}").into(),
                    );
                    set_message.try_set(Some((e.user_message("Failed to update profile"), true)));
                }
            }
        });
    };

    view! {
        <div class="max-w-4xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
            <div class="mb-8">
                <h1 class="text-3xl font-bold text-gray-900">"Recruiter Profile"</h1>
                <p class="text-gray-600 mt-2">"Manage your company information"</p>
            </div>

            {move || message.get().map(|(text, is_err)| view! {
                <div class=if is_err {
                    "mb-6 px-4 py-3 rounded bg-red-50 border border-red-400 text-red-700"
                } else {
                    "mb-6 px-4 py-3 rounded bg-green-50 border border-green-400 text-green-700"
                }>{text}</div>
            })}

            <Show
                when=move || !loading.get()
                fallback=|| view! {
                    <div class="flex items-center justify-center py-20">
                        <div class="animate-spin rounded-full h-12 w-12 border-b-2 border-primary-600"></div>
                    </div>
                }
            >
                <div class="card">
                    <div class="flex justify-between items-center mb-6">
                        <h2 class="text-xl font-semibold text-gray-900">"Profile Information"</h2>
                        <button class="btn btn-primary" on:click=move |_| set_editing.update(|e| *e = !*e)>
                            {move || if editing.get() { "Cancel" } else { "Edit Profile" }}
                        </button>
                    </div>

                    <Show
                        when=move || editing.get()
                        fallback=move || view! {
                            {move || {
                                profile
                                    .get()
                                    .map(|p| view! {
                                        <div class="space-y-4">
                                            {field_row("Full Name", p.name)}
                                            {field_row("Email", p.email)}
                                            {field_row(
                                                "Phone",
                                                p.phone.unwrap_or_else(|| "Not provided".to_string()),
                                            )}
                                            {field_row(
                                                "Company Name",
                                                p.company_name.unwrap_or_else(|| "Not provided".to_string()),
                                            )}
                                            {field_row(
                                                "Company Address",
                                                p.company_address
                                                    .unwrap_or_else(|| "Not provided".to_string()),
                                            )}
                                        </div>
                                    })
                            }}
                        }
                    >
                        <form class="space-y-4" on:submit=on_submit>
                            <div>
                                <label class="block text-sm font-medium text-gray-700 mb-1">
                                    "Full Name"
                                </label>
                                <input
                                    type="text"
                                    class="input"
                                    prop:value=name
                                    on:input=move |ev| name.set(event_target_value(&ev))
                                    required
                                />
                            </div>
                            <div>
                                <label class="block text-sm font-medium text-gray-700 mb-1">
                                    "Email"
                                </label>
                                // email 一经设置不可修改
                                <input
                                    type="email"
                                    class="input bg-gray-100 cursor-not-allowed"
                                    prop:value=move || user.get().map(|u| u.email).unwrap_or_default()
                                    disabled
                                />
                            </div>
                            <div>
                                <label class="block text-sm font-medium text-gray-700 mb-1">
                                    "Phone"
                                </label>
                                <input
                                    type="tel"
                                    class="input"
                                    prop:value=phone
                                    on:input=move |ev| phone.set(event_target_value(&ev))
                                />
                            </div>
                            <div>
                                <label class="block text-sm font-medium text-gray-700 mb-1">
                                    "Company Name"
                                </label>
                                <input
                                    type="text"
                                    class="input"
                                    prop:value=company_name
                                    on:input=move |ev| company_name.set(event_target_value(&ev))
                                />
                            </div>
                            <div>
                                <label class="block text-sm font-medium text-gray-700 mb-1">
                                    "Company Address"
                                </label>
                                <input
                                    type="text"
                                    class="input"
                                    prop:value=company_address
                                    on:input=move |ev| company_address.set(event_target_value(&ev))
                                />
                            </div>
                            <button type="submit" class="btn btn-primary">
                                "Save Changes"
                            </button>
                        </form>
                    </Show>
                </div>
            </Show>
        </div>
    }
}
