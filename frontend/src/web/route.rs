//! 路由定义模块 - 领域模型
//!
//! 这是纯粹的业务逻辑层，不依赖于 DOM 或 web_sys。
//! 路由到所需角色的能力表也定义在这里：守卫只在路由边界
//! 查一次表，各视图内部不再散落角色判等。

use jobboard_shared::Role;
use std::fmt::Display;

/// 应用路由枚举
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// 落地页 (默认路由)
    #[default]
    Home,
    /// 登录页面
    Login,
    /// 注册页面
    Register,
    /// 职位列表（公开）
    Jobs,
    /// 职位详情（公开）
    JobDetail(i64),
    /// 求职者面板 (需要 EMPLOYEE)
    EmployeeDashboard,
    /// 求职者档案 (需要 EMPLOYEE)
    EmployeeProfile,
    /// 招聘者面板 (需要 RECRUITER)
    RecruiterDashboard,
    /// 招聘者档案 (需要 RECRUITER)
    RecruiterProfile,
    /// 管理面板 (需要 ADMIN)
    AdminDashboard,
    /// 页面未找到
    NotFound,
}

impl AppRoute {
    /// 将 URL path 解析为路由枚举
    pub fn from_path(path: &str) -> Self {
        let path = if path.len() > 1 {
            path.trim_end_matches('/')
        } else {
            path
        };
        match path {
            "/" => Self::Home,
            "/login" => Self::Login,
            "/register" => Self::Register,
            "/jobs" => Self::Jobs,
            "/employee/dashboard" => Self::EmployeeDashboard,
            "/employee/profile" => Self::EmployeeProfile,
            "/recruiter/dashboard" => Self::RecruiterDashboard,
            "/recruiter/profile" => Self::RecruiterProfile,
            "/admin/dashboard" => Self::AdminDashboard,
            _ => match path
                .strip_prefix("/jobs/")
                .and_then(|id| id.parse::<i64>().ok())
            {
                Some(id) => Self::JobDetail(id),
                None => Self::NotFound,
            },
        }
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Login => "/login".to_string(),
            Self::Register => "/register".to_string(),
            Self::Jobs => "/jobs".to_string(),
            Self::JobDetail(id) => format!("/jobs/{id}"),
            Self::EmployeeDashboard => "/employee/dashboard".to_string(),
            Self::EmployeeProfile => "/employee/profile".to_string(),
            Self::RecruiterDashboard => "/recruiter/dashboard".to_string(),
            Self::RecruiterProfile => "/recruiter/profile".to_string(),
            Self::AdminDashboard => "/admin/dashboard".to_string(),
            Self::NotFound => "/404".to_string(),
        }
    }

    /// **能力表：路由 -> 所需角色**，`None` 表示公开路由
    pub fn required_role(&self) -> Option<Role> {
        match self {
            Self::EmployeeDashboard | Self::EmployeeProfile => Some(Role::Employee),
            Self::RecruiterDashboard | Self::RecruiterProfile => Some(Role::Recruiter),
            Self::AdminDashboard => Some(Role::Admin),
            _ => None,
        }
    }

    /// 定义已认证用户是否应该离开此路由（登录/注册页）
    pub fn should_redirect_when_authenticated(&self) -> bool {
        matches!(self, Self::Login | Self::Register)
    }

    /// 各角色的默认落地面板
    pub fn dashboard_for(role: Role) -> Self {
        match role {
            Role::Employee => Self::EmployeeDashboard,
            Role::Recruiter => Self::RecruiterDashboard,
            Role::Admin => Self::AdminDashboard,
        }
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

/// 守卫裁决
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteAccess {
    /// 放行
    Grant,
    /// 未认证访问受保护路由，去登录页
    LoginRedirect,
    /// 角色不匹配，一致地重定向到访问者自己的面板。
    /// 受保护视图在任何情况下都不渲染。
    DeniedRedirect(AppRoute),
}

/// **核心守卫逻辑**：在路由边界做一次能力检查
pub fn check_access(route: &AppRoute, role: Option<Role>) -> RouteAccess {
    let Some(required) = route.required_role() else {
        return RouteAccess::Grant;
    };
    match role {
        None => RouteAccess::LoginRedirect,
        Some(r) if r == required => RouteAccess::Grant,
        Some(r) => RouteAccess::DeniedRedirect(AppRoute::dashboard_for(r)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROTECTED: [(AppRoute, Role); 5] = [
        (AppRoute::EmployeeDashboard, Role::Employee),
        (AppRoute::EmployeeProfile, Role::Employee),
        (AppRoute::RecruiterDashboard, Role::Recruiter),
        (AppRoute::RecruiterProfile, Role::Recruiter),
        (AppRoute::AdminDashboard, Role::Admin),
    ];

    #[test]
    fn paths_round_trip() {
        let routes = [
            AppRoute::Home,
            AppRoute::Login,
            AppRoute::Register,
            AppRoute::Jobs,
            AppRoute::JobDetail(42),
            AppRoute::EmployeeDashboard,
            AppRoute::EmployeeProfile,
            AppRoute::RecruiterDashboard,
            AppRoute::RecruiterProfile,
            AppRoute::AdminDashboard,
        ];
        for route in routes {
            assert_eq!(AppRoute::from_path(&route.to_path()), route);
        }
    }

    #[test]
    fn job_detail_parsing() {
        assert_eq!(AppRoute::from_path("/jobs/42"), AppRoute::JobDetail(42));
        assert_eq!(AppRoute::from_path("/jobs/42/"), AppRoute::JobDetail(42));
        assert_eq!(AppRoute::from_path("/jobs/abc"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/nowhere"), AppRoute::NotFound);
    }

    #[test]
    fn unauthenticated_is_always_sent_to_login() {
        for (route, _) in PROTECTED {
            assert_eq!(check_access(&route, None), RouteAccess::LoginRedirect);
        }
    }

    #[test]
    fn guard_never_grants_a_mismatched_role() {
        let roles = [Role::Employee, Role::Recruiter, Role::Admin];
        for (route, required) in PROTECTED {
            for role in roles {
                let access = check_access(&route, Some(role));
                if role == required {
                    assert_eq!(access, RouteAccess::Grant);
                } else {
                    // 拒绝时一致地送回访问者自己的面板
                    assert_eq!(
                        access,
                        RouteAccess::DeniedRedirect(AppRoute::dashboard_for(role)),
                        "{route} must not render for {role}"
                    );
                }
            }
        }
    }

    #[test]
    fn public_routes_are_open_to_everyone() {
        for route in [AppRoute::Home, AppRoute::Jobs, AppRoute::JobDetail(1)] {
            assert_eq!(check_access(&route, None), RouteAccess::Grant);
            assert_eq!(
                check_access(&route, Some(Role::Employee)),
                RouteAccess::Grant
            );
        }
    }

    #[test]
    fn auth_pages_redirect_once_signed_in() {
        assert!(AppRoute::Login.should_redirect_when_authenticated());
        assert!(AppRoute::Register.should_redirect_when_authenticated());
        assert!(!AppRoute::Jobs.should_redirect_when_authenticated());
    }
}
