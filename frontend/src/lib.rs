//! JobBoard 前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `web::route`: 路由定义与能力守卫（领域模型）
//! - `web::router`: 路由服务（核心引擎）
//! - `session`: 会话存储（{token, user} 对的唯一归属）
//! - `auth`: 认证状态管理（会话存储的单一写者）
//! - `api`: API 网关客户端（逐请求附加 Bearer 凭据）
//! - `chat`: 规则问答助手（纯查表，无网络）
//! - `components`: UI 组件层

mod api;
mod auth;
mod chat;
mod config;
mod error;
mod session;

mod components {
    pub mod admin_dashboard;
    pub mod chat_widget;
    pub mod employee_dashboard;
    pub mod employee_profile;
    pub mod home;
    mod icons;
    pub mod job_details;
    pub mod job_form;
    pub mod job_listings;
    pub mod login;
    pub mod navbar;
    pub mod recruiter_dashboard;
    pub mod recruiter_profile;
    pub mod register;
}

// 原生 Web API 封装模块
// 此模块提供对浏览器原生 API 的轻量级封装。
pub(crate) mod web {
    pub mod route;
    pub mod router;
    mod storage;
    mod timer;

    pub use storage::LocalStorage;
    pub use timer::Timeout;
}

use crate::auth::{AuthContext, init_auth};
use crate::components::admin_dashboard::AdminDashboardPage;
use crate::components::chat_widget::ChatWidget;
use crate::components::employee_dashboard::EmployeeDashboardPage;
use crate::components::employee_profile::EmployeeProfilePage;
use crate::components::home::HomePage;
use crate::components::job_details::JobDetailsPage;
use crate::components::job_listings::JobListingsPage;
use crate::components::login::LoginPage;
use crate::components::navbar::Navbar;
use crate::components::recruiter_dashboard::RecruiterDashboardPage;
use crate::components::recruiter_profile::RecruiterProfilePage;
use crate::components::register::RegisterPage;

use leptos::prelude::*;

use web::route::AppRoute;
use web::router::{Router, RouterOutlet};

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件。
/// 能力检查已在路由服务完成，这里只做展示分发。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Home => view! { <HomePage /> }.into_any(),
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Register => view! { <RegisterPage /> }.into_any(),
        AppRoute::Jobs => view! { <JobListingsPage /> }.into_any(),
        AppRoute::JobDetail(id) => view! { <JobDetailsPage id=id /> }.into_any(),
        AppRoute::EmployeeDashboard => view! { <EmployeeDashboardPage /> }.into_any(),
        AppRoute::EmployeeProfile => view! { <EmployeeProfilePage /> }.into_any(),
        AppRoute::RecruiterDashboard => view! { <RecruiterDashboardPage /> }.into_any(),
        AppRoute::RecruiterProfile => view! { <RecruiterProfilePage /> }.into_any(),
        AppRoute::AdminDashboard => view! { <AdminDashboardPage /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-screen bg-gray-50">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-gray-300">"404"</h1>
                    <p class="text-xl mt-4 text-gray-600">"Page not found"</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 创建认证上下文
    let auth_ctx = AuthContext::new();
    provide_context(auth_ctx);

    // 2. 同步水合：存在有效会话对则直接进入 Authenticated
    init_auth(&auth_ctx);

    // 3. 获取角色信号，用于注入路由服务（解耦！）
    let role = auth_ctx.role_signal();

    view! {
        // 4. 路由器组件：注入角色信号实现守卫
        <Router role=role>
            <div class="min-h-screen bg-gray-50">
                <Navbar />
                <RouterOutlet matcher=route_matcher />
                <ChatWidget />
            </div>
        </Router>
    }
}
