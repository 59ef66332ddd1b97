//! 路由服务模块 - 核心引擎
//!
//! 封装了 web_sys 的 History API，实现高内聚：
//! 所有对 window.history 的操作都集中在此模块。
//! 实现了"监听 -> 守卫 -> 处理 -> 加载"的导航流程。
//! 守卫通过注入的角色信号检查能力，与认证系统解耦。

use jobboard_shared::Role;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use super::route::{AppRoute, RouteAccess, check_access};

/// 获取当前浏览器路径
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// 推送 History 状态（内部工具函数）
fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 替换 History 状态（内部工具函数，用于重定向）
fn replace_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 对目标路由执行守卫，返回最终允许呈现的路由。
///
/// 两条规则：受保护路由的能力检查（未认证去登录页，角色不匹配
/// 送回自己的面板），以及已认证用户回避登录/注册页。
fn guard_target(target: AppRoute, role: Option<Role>) -> AppRoute {
    let target = match check_access(&target, role) {
        RouteAccess::Grant => target,
        RouteAccess::LoginRedirect => {
            web_sys::console::log_1(&"[Router] Access denied. Redirecting to login.".into());
            AppRoute::Login
        }
        RouteAccess::DeniedRedirect(fallback) => {
            web_sys::console::log_1(
                &format!("[Router] Role mismatch for {target}. Redirecting to {fallback}.").into(),
            );
            fallback
        }
    };
    match role {
        Some(r) if target.should_redirect_when_authenticated() => AppRoute::dashboard_for(r),
        _ => target,
    }
}

/// 路由器服务
///
/// 封装所有路由操作，通过 Signal 驱动界面更新。
#[derive(Clone, Copy)]
pub struct RouterService {
    /// 当前路由（只读信号）
    current_route: ReadSignal<AppRoute>,
    /// 设置当前路由（写入信号）
    set_route: WriteSignal<AppRoute>,
    /// 当前角色（注入的信号，None 表示未认证）
    role: Signal<Option<Role>>,
}

impl RouterService {
    /// 创建新的路由服务
    ///
    /// 初始路由同样要过守卫：受保护视图一帧也不渲染。
    fn new(role: Signal<Option<Role>>) -> Self {
        let requested = AppRoute::from_path(&current_path());
        let initial_route = guard_target(requested.clone(), role.get_untracked());
        if initial_route != requested {
            replace_history_state(&initial_route.to_path());
        }
        let (current_route, set_route) = signal(initial_route);

        Self {
            current_route,
            set_route,
            role,
        }
    }

    /// 获取当前路由信号
    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    /// **核心方法：导航与守卫**
    ///
    /// 流程：请求 -> 守卫 -> 处理 -> 加载
    pub fn navigate(&self, path: &str) {
        self.navigate_to_route(AppRoute::from_path(path), true);
    }

    /// 以路由枚举导航（带参数路由用这个，避免拼 path）
    pub fn navigate_route(&self, route: AppRoute) {
        self.navigate_to_route(route, true);
    }

    /// 导航到指定路由
    ///
    /// # Arguments
    /// * `use_push` - true 使用 pushState, false 使用 replaceState
    fn navigate_to_route(&self, target_route: AppRoute, use_push: bool) {
        let target = guard_target(target_route, self.role.get_untracked());
        if use_push {
            push_history_state(&target.to_path());
        } else {
            replace_history_state(&target.to_path());
        }
        self.set_route.set(target);
    }

    /// 初始化浏览器后退/前进按钮监听
    fn init_popstate_listener(&self) {
        let set_route = self.set_route;
        let role = self.role;

        let closure = Closure::<dyn Fn()>::new(move || {
            let requested = AppRoute::from_path(&current_path());
            // popstate 时也执行守卫逻辑，拦截时用 replace 修正地址栏
            let target = guard_target(requested.clone(), role.get_untracked());
            if target != requested {
                replace_history_state(&target.to_path());
            }
            set_route.set(target);
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }

    /// 设置认证状态变化时的自动重定向
    ///
    /// 登录后离开登录页，登出后离开受保护页面，
    /// 角色不匹配时送回自己的面板。
    fn setup_auth_redirect(&self) {
        let current_route = self.current_route;
        let set_route = self.set_route;
        let role = self.role;

        Effect::new(move |_| {
            let role = role.get();
            let route = current_route.get_untracked();
            let target = guard_target(route.clone(), role);

            if target != route {
                push_history_state(&target.to_path());
                set_route.set(target);
                web_sys::console::log_1(&"[Router] Auth state changed, redirecting.".into());
            }
        });
    }
}

/// 提供路由服务到 Context 并初始化
fn provide_router(role: Signal<Option<Role>>) -> RouterService {
    let router = RouterService::new(role);

    // 初始化监听器
    router.init_popstate_listener();
    router.setup_auth_redirect();

    provide_context(router);
    router
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件
///
/// 提供路由上下文，应在 App 根部使用。
#[component]
pub fn Router(
    /// 当前角色信号
    role: Signal<Option<Role>>,
    /// 子组件
    children: Children,
) -> impl IntoView {
    // 提供路由服务到 Context
    provide_router(role);

    children()
}

/// 路由出口组件
///
/// 根据当前路由状态渲染对应的组件。
#[component]
pub fn RouterOutlet(
    /// 路由匹配函数：接收当前路由，返回对应视图
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || {
        let current = router.current_route().get();
        matcher(current)
    }
}

/// 客户端导航链接
#[component]
pub fn Link(
    /// 目标路径
    #[prop(into)]
    to: String,
    /// 子内容
    children: Children,
) -> impl IntoView {
    let router = use_router();

    let href = to.clone();
    let on_click = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        router.navigate(&to);
    };

    view! {
        <a href=href on:click=on_click>
            {children()}
        </a>
    }
}
