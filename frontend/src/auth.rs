//! 认证模块
//!
//! 管理用户认证状态，与路由系统解耦。
//! 路由服务通过注入的角色信号来检查能力。
//! 会话存储只由这里的状态迁移写入（单一写者）。

use crate::api::ApiClient;
use crate::session::{Session, SessionStore};
use jobboard_shared::protocol::ApiRequest;
use jobboard_shared::{AuthResponse, LoginRequest, RegisterRequest, Role, UserSummary};
use leptos::prelude::*;

/// 认证阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthPhase {
    /// 初始状态，无会话
    #[default]
    Unauthenticated,
    /// 登录/注册请求进行中
    Authenticating,
    /// 会话存在
    Authenticated,
}

/// 认证状态
#[derive(Clone, Default)]
pub struct AuthState {
    pub phase: AuthPhase,
    /// 登录时刻的用户快照（Authenticated 时存在）。
    /// 不会自动刷新：服务器侧的角色或名字变更要到下次登录才可见。
    pub user: Option<UserSummary>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.phase == AuthPhase::Authenticated
    }
}

/// 认证上下文
///
/// 包含读写信号，通过 Context 在组件间共享。
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// 认证状态（只读）
    pub state: ReadSignal<AuthState>,
    /// 设置认证状态（只在本模块的迁移逻辑里写）
    set_state: WriteSignal<AuthState>,
}

impl AuthContext {
    /// 创建新的认证上下文
    pub fn new() -> Self {
        let (state, set_state) = signal(AuthState::default());
        Self { state, set_state }
    }

    /// 当前角色信号（用于路由守卫注入）
    pub fn role_signal(&self) -> Signal<Option<Role>> {
        let state = self.state;
        Signal::derive(move || state.get().user.as_ref().map(|u| u.role))
    }

    /// 当前用户信号
    pub fn user_signal(&self) -> Signal<Option<UserSummary>> {
        let state = self.state;
        Signal::derive(move || state.get().user.clone())
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// 初始化认证状态
///
/// 进程启动时同步从会话存储水合：存在有效的 {token, user} 对
/// 就以缓存快照直接进入 Authenticated，在下一次认证调用失败前
/// 不与服务器核对。
pub fn init_auth(ctx: &AuthContext) {
    if let Some(Session { user, .. }) = SessionStore::load() {
        web_sys::console::log_1(&"[Auth] Session restored from storage.".into());
        ctx.set_state.set(AuthState {
            phase: AuthPhase::Authenticated,
            user: Some(user),
        });
    }
}

/// 登录
///
/// 成功时从响应提取 {token, user} 对持久化并进入 Authenticated，
/// 返回用户快照；失败时回到调用前的状态，返回按优先级提取的
/// 错误文案（服务端 message > 原始响应体 > 传输错误 > 兜底）。
pub async fn login(
    ctx: &AuthContext,
    email: String,
    password: String,
) -> Result<UserSummary, String> {
    submit_credentials(
        ctx,
        LoginRequest { email, password },
        "Login failed. Please check your credentials.",
    )
    .await
}

/// 注册，与登录同构
pub async fn register(
    ctx: &AuthContext,
    name: String,
    email: String,
    password: String,
    role: Role,
) -> Result<UserSummary, String> {
    submit_credentials(
        ctx,
        RegisterRequest {
            name,
            email,
            password,
            role,
        },
        "Registration failed. Please try again.",
    )
    .await
}

/// 登录与注册共用的状态迁移：
/// 先前状态 -> Authenticating -> Authenticated / 回退
async fn submit_credentials<R>(
    ctx: &AuthContext,
    request: R,
    fallback: &str,
) -> Result<UserSummary, String>
where
    R: ApiRequest<Response = AuthResponse>,
{
    let previous = ctx.state.get_untracked();
    ctx.set_state.update(|s| s.phase = AuthPhase::Authenticating);

    match ApiClient::new().send(&request).await {
        Ok(response) => {
            let (token, user) = response.into_parts();
            SessionStore::save(&Session {
                token,
                user: user.clone(),
            });
            ctx.set_state.set(AuthState {
                phase: AuthPhase::Authenticated,
                user: Some(user.clone()),
            });
            Ok(user)
        }
        Err(err) => {
            web_sys::console::error_1(&format!("[Auth] credential request failed: {err}").into());
            ctx.set_state.set(previous);
            Err(err.user_message(fallback))
        }
    }
}

/// 注销并清除状态
///
/// 同步执行，总是成功；任何先前状态都回到 Unauthenticated。
/// 导航由路由服务对角色信号的监听自动处理。
pub fn logout(ctx: &AuthContext) {
    SessionStore::clear();
    ctx.set_state.set(AuthState::default());
}
