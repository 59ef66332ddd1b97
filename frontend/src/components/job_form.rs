//! 职位发布表单
//!
//! 将零散的 signal 整合为 `JobFormState` 结构体，负责：
//! - 数据的持有
//! - 数据的重置
//! - 数据到请求对象的转换
//!
//! 招聘者面板与管理面板共用。

use crate::components::icons::PlusCircle;
use chrono::NaiveDate;
use jobboard_shared::{CreateJobPostRequest, JobType};
use leptos::prelude::*;

/// 本地时区的今天（作为发布日期）
fn today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() + 1,
        now.get_date(),
    )
    .unwrap_or_default()
}

/// 表单状态结构体
///
/// 使用 `RwSignal` 因为它实现了 `Copy` trait，适合在组件间传递。
#[derive(Clone, Copy)]
pub struct JobFormState {
    pub job_title: RwSignal<String>,
    pub company_name: RwSignal<String>,
    pub job_type: RwSignal<JobType>,
    pub job_description: RwSignal<String>,
    pub job_location: RwSignal<String>,
    /// YYYY-MM-DD 文本，来自 date 输入框
    pub dead_line_date: RwSignal<String>,
}

impl JobFormState {
    /// 创建新的表单状态，所有字段使用默认值
    pub fn new() -> Self {
        Self {
            job_title: RwSignal::new(String::new()),
            company_name: RwSignal::new(String::new()),
            job_type: RwSignal::new(JobType::FullTime),
            job_description: RwSignal::new(String::new()),
            job_location: RwSignal::new(String::new()),
            dead_line_date: RwSignal::new(String::new()),
        }
    }

    /// 重置表单到初始状态
    pub fn reset(&self) {
        self.job_title.set(String::new());
        self.company_name.set(String::new());
        self.job_type.set(JobType::FullTime);
        self.job_description.set(String::new());
        self.job_location.set(String::new());
        self.dead_line_date.set(String::new());
    }

    /// 将表单状态转换为 API 请求对象
    pub fn to_request(&self, recruiter_email: String) -> CreateJobPostRequest {
        CreateJobPostRequest {
            job_title: self.job_title.get(),
            company_name: self.company_name.get(),
            job_type: self.job_type.get(),
            job_description: self.job_description.get(),
            job_location: self.job_location.get(),
            posted_date: today(),
            dead_line_date: NaiveDate::parse_from_str(&self.dead_line_date.get(), "%Y-%m-%d").ok(),
            recruiter_email,
        }
    }
}

impl Default for JobFormState {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn JobPostForm(
    /// 发布者邮箱（招聘者本人，或代发的管理员）
    #[prop(into)] recruiter_email: String,
    #[prop(into)] on_submit: Callback<CreateJobPostRequest>,
) -> impl IntoView {
    let (open, set_open) = signal(false);
    let form = JobFormState::new();
    let email = StoredValue::new(recruiter_email);

    let handle_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(form.to_request(email.get_value()));
        set_open.set(false);
        form.reset();
    };

    view! {
        <button
            class="btn btn-primary flex items-center gap-2"
            on:click=move |_| set_open.update(|o| *o = !*o)
        >
            <PlusCircle attr:class="h-5 w-5" />
            "Post New Job"
        </button>

        <Show when=move || open.get()>
            <div class="card mt-4">
                <h2 class="text-xl font-semibold text-gray-900 mb-4">"Create Job Posting"</h2>
                <form class="space-y-4" on:submit=handle_submit>
                    <div class="grid md:grid-cols-2 gap-4">
                        <div>
                            <label class="block text-sm font-medium text-gray-700 mb-1">
                                "Job Title"
                            </label>
                            <input
                                type="text"
                                class="input"
                                prop:value=form.job_title
                                on:input=move |ev| form.job_title.set(event_target_value(&ev))
                                required
                            />
                        </div>
                        <div>
                            <label class="block text-sm font-medium text-gray-700 mb-1">
                                "Company Name"
                            </label>
                            <input
                                type="text"
                                class="input"
                                prop:value=form.company_name
                                on:input=move |ev| form.company_name.set(event_target_value(&ev))
                                required
                            />
                        </div>
                    </div>

                    <div class="grid md:grid-cols-2 gap-4">
                        <div>
                            <label class="block text-sm font-medium text-gray-700 mb-1">
                                "Job Type"
                            </label>
                            <select
                                class="input"
                                on:change=move |ev| {
                                    if let Some(t) = JobType::from_str(&event_target_value(&ev)) {
                                        form.job_type.set(t);
                                    }
                                }
                            >
                                {JobType::ALL
                                    .into_iter()
                                    .map(|t| view! {
                                        <option value=t.as_str() selected=move || form.job_type.get() == t>
                                            {t.label()}
                                        </option>
                                    })
                                    .collect_view()}
                            </select>
                        </div>
                        <div>
                            <label class="block text-sm font-medium text-gray-700 mb-1">
                                "Location"
                            </label>
                            <input
                                type="text"
                                class="input"
                                prop:value=form.job_location
                                on:input=move |ev| form.job_location.set(event_target_value(&ev))
                                required
                            />
                        </div>
                    </div>

                    <div>
                        <label class="block text-sm font-medium text-gray-700 mb-1">
                            "Application Deadline"
                        </label>
                        <input
                            type="date"
                            class="input"
                            prop:value=form.dead_line_date
                            on:input=move |ev| form.dead_line_date.set(event_target_value(&ev))
                            required
                        />
                    </div>

                    <div>
                        <label class="block text-sm font-medium text-gray-700 mb-1">
                            "Job Description"
                        </label>
                        <textarea
                            class="input"
                            rows="5"
                            prop:value=form.job_description
                            on:input=move |ev| form.job_description.set(event_target_value(&ev))
                            required
                        ></textarea>
                    </div>

                    <div class="flex gap-4">
                        <button type="submit" class="btn btn-primary">
                            "Post Job"
                        </button>
                        <button type="button" class="btn btn-secondary" on:click=move |_| set_open.set(false)>
                            "Cancel"
                        </button>
                    </div>
                </form>
            </div>
        </Show>
    }
}
