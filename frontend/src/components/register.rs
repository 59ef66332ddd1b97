//! 注册页面
//!
//! 注册只开放求职者与招聘者两种角色，管理员由后台开通。

use crate::auth::{register, use_auth};
use crate::web::router::Link;
use jobboard_shared::Role;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = use_auth();

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (role, set_role) = signal(Role::Employee);
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if name.get().is_empty() || email.get().is_empty() || password.get().is_empty() {
            set_error_msg.set(Some("Please fill in all fields".to_string()));
            return;
        }

        set_is_submitting.set(true);
        set_error_msg.set(None);

        spawn_local(async move {
            let result = register(
                &auth,
                name.get_untracked(),
                email.get_untracked(),
                password.get_untracked(),
                role.get_untracked(),
            )
            .await;
            // 成功后的跳转由路由服务监听角色信号自动完成
            if let Err(msg) = result {
                set_error_msg.try_set(Some(msg));
            }
            set_is_submitting.try_set(false);
        });
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50 px-4">
            <div class="w-full max-w-md">
                <div class="text-center mb-6">
                    <h1 class="text-3xl font-bold text-gray-900">"Create your account"</h1>
                    <p class="text-gray-600 mt-2">"Join as a job seeker or a recruiter"</p>
                </div>

                <form class="card space-y-4" on:submit=on_submit>
                    <Show when=move || error_msg.get().is_some()>
                        <div class="bg-red-50 border border-red-400 text-red-700 px-4 py-3 rounded text-sm">
                            {move || error_msg.get().unwrap_or_default()}
                        </div>
                    </Show>

                    <div>
                        <label class="block text-sm font-medium text-gray-700 mb-1" for="name">
                            "Full Name"
                        </label>
                        <input
                            id="name"
                            type="text"
                            class="input"
                            prop:value=name
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                            required
                        />
                    </div>

                    <div>
                        <label class="block text-sm font-medium text-gray-700 mb-1" for="email">
                            "Email"
                        </label>
                        <input
                            id="email"
                            type="email"
                            class="input"
                            placeholder="you@example.com"
                            prop:value=email
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            required
                        />
                    </div>

                    <div>
                        <label class="block text-sm font-medium text-gray-700 mb-1" for="password">
                            "Password"
                        </label>
                        <input
                            id="password"
                            type="password"
                            class="input"
                            prop:value=password
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                        />
                    </div>

                    <div>
                        <label class="block text-sm font-medium text-gray-700 mb-1" for="role">
                            "I am a"
                        </label>
                        <select
                            id="role"
                            class="input"
                            on:change=move |ev| {
                                if let Some(r) = Role::from_str(&event_target_value(&ev)) {
                                    set_role.set(r);
                                }
                            }
                        >
                            <option value="EMPLOYEE" selected=move || role.get() == Role::Employee>
                                "Job Seeker"
                            </option>
                            <option value="RECRUITER" selected=move || role.get() == Role::Recruiter>
                                "Recruiter"
                            </option>
                        </select>
                    </div>

                    <button
                        type="submit"
                        class="btn btn-primary w-full"
                        disabled=move || is_submitting.get()
                    >
                        {move || if is_submitting.get() { "Creating account..." } else { "Sign up" }}
                    </button>

                    <p class="text-center text-sm text-gray-600">
                        "Already have an account? "
                        <Link to="/login" attr:class="text-primary-600 hover:underline">
                            "Sign in"
                        </Link>
                    </p>
                </form>
            </div>
        </div>
    }
}
