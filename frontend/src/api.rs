//! API 网关客户端
//!
//! 单一的请求门面：只持有基地址；Bearer token 在每次调用时
//! 从会话存储读取，登录登出之后无需重建客户端。
//! 单次往返，无重试、无超时、无退避，失败处理交给调用方。

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config;
use crate::error::ApiError;
use crate::session::SessionStore;
use jobboard_shared::protocol::{
    ApiRequest, HttpMethod, ListJobPostsRequest, ListUsersRequest, PlatformStatsRequest,
};
use jobboard_shared::{
    Application, ApplyRequest, BEARER_PREFIX, CreateJobPostRequest, EmployeeProfile, HEADER_AUTH,
    JobPosting, ManagedUser, PlatformStats, RecruiterProfile, Role, StatusUpdateRequest,
    UserStatusUpdate,
};

/// 职位列表查询路径：空白检索词等价于全量列表
pub(crate) fn jobs_path(term: &str) -> String {
    let term = term.trim();
    if term.is_empty() {
        "/jobposts".to_string()
    } else {
        format!("/jobposts/search/{term}")
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        let base_url = config::api_base_url().trim_end_matches('/').to_string();
        Self { base_url }
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// 附加 Bearer 凭据（调用时刻读取，可能不存在）
    fn authorize(builder: RequestBuilder) -> RequestBuilder {
        match SessionStore::token() {
            Some(token) => builder.header(HEADER_AUTH, &format!("{BEARER_PREFIX}{token}")),
            None => builder,
        }
    }

    /// 统一的响应处理：非 2xx 转服务端错误，2xx 解析 JSON
    async fn parse<T: DeserializeOwned>(res: Response) -> Result<T, ApiError> {
        if !res.ok() {
            let status = res.status();
            let status_text = res.status_text();
            let body = res.text().await.unwrap_or_default();
            return Err(ApiError::from_response(status, status_text, body));
        }
        res.json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let res = Self::authorize(Request::get(&self.url(path)))
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Self::parse(res).await
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let res = Self::authorize(Request::post(&self.url(path)))
            .json(body)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Self::parse(res).await
    }

    pub async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let res = Self::authorize(Request::put(&self.url(path)))
            .json(body)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Self::parse(res).await
    }

    /// 固定路径端点的泛型派发
    pub async fn send<R: ApiRequest>(&self, request: &R) -> Result<R::Response, ApiError> {
        match R::METHOD {
            HttpMethod::Get => self.get(R::PATH).await,
            HttpMethod::Post => self.post(R::PATH, request).await,
            HttpMethod::Put => self.put(R::PATH, request).await,
        }
    }

    // ---- 职位 ----

    pub async fn job_posts(&self) -> Result<Vec<JobPosting>, ApiError> {
        self.send(&ListJobPostsRequest).await
    }

    /// 按标题/公司/地点检索；空白检索词回到全量列表
    pub async fn search_job_posts(&self, term: &str) -> Result<Vec<JobPosting>, ApiError> {
        self.get(&jobs_path(term)).await
    }

    pub async fn recruiter_job_posts(&self, email: &str) -> Result<Vec<JobPosting>, ApiError> {
        self.get(&format!("/jobposts/recruiters/{email}")).await
    }

    pub async fn create_job_post(&self, req: &CreateJobPostRequest) -> Result<JobPosting, ApiError> {
        self.send(req).await
    }

    // ---- 申请 ----

    pub async fn employee_applications(&self, email: &str) -> Result<Vec<Application>, ApiError> {
        self.get(&format!("/applications/employee/{email}")).await
    }

    pub async fn recruiter_applications(&self, email: &str) -> Result<Vec<Application>, ApiError> {
        self.get(&format!("/applications/recruiter/{email}")).await
    }

    pub async fn apply(&self, req: &ApplyRequest) -> Result<Application, ApiError> {
        self.send(req).await
    }

    pub async fn update_application_status(
        &self,
        req: &StatusUpdateRequest,
    ) -> Result<Application, ApiError> {
        self.send(req).await
    }

    // ---- 档案 ----

    pub async fn employee_profile(&self, email: &str) -> Result<EmployeeProfile, ApiError> {
        self.get(&format!("/employees/{email}")).await
    }

    pub async fn update_employee_profile(
        &self,
        profile: &EmployeeProfile,
    ) -> Result<EmployeeProfile, ApiError> {
        self.send(profile).await
    }

    pub async fn recruiter_profile(&self, email: &str) -> Result<RecruiterProfile, ApiError> {
        self.get(&format!("/recruiters/{email}")).await
    }

    pub async fn save_recruiter_profile(
        &self,
        profile: &RecruiterProfile,
    ) -> Result<RecruiterProfile, ApiError> {
        self.send(profile).await
    }

    // ---- 管理 ----

    pub async fn admin_users(&self) -> Result<Vec<ManagedUser>, ApiError> {
        self.send(&ListUsersRequest).await
    }

    pub async fn admin_users_by_role(&self, role: Role) -> Result<Vec<ManagedUser>, ApiError> {
        self.get(&format!("/admins/users/role?role={}", role.as_str()))
            .await
    }

    /// 启用/停用用户。响应体是纯文本确认，只检查状态行。
    pub async fn set_user_active(&self, req: &UserStatusUpdate) -> Result<(), ApiError> {
        let res = Self::authorize(Request::put(&self.url("/admins/users/status")))
            .json(req)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !res.ok() {
            let status = res.status();
            let status_text = res.status_text();
            let body = res.text().await.unwrap_or_default();
            return Err(ApiError::from_response(status, status_text, body));
        }
        Ok(())
    }

    pub async fn platform_stats(&self) -> Result<PlatformStats, ApiError> {
        self.send(&PlatformStatsRequest).await
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_search_term_falls_back_to_full_listing() {
        // 清空检索词后重新发起的就是初始的全量请求
        assert_eq!(jobs_path(""), "/jobposts");
        assert_eq!(jobs_path("   "), "/jobposts");
        assert_eq!(jobs_path("rust"), "/jobposts/search/rust");
        assert_eq!(jobs_path(" rust "), "/jobposts/search/rust");
    }

    #[test]
    fn url_join_handles_slashes() {
        let client = ApiClient {
            base_url: "http://localhost:8080".to_string(),
        };
        assert_eq!(client.url("/jobposts"), "http://localhost:8080/jobposts");
        assert_eq!(client.url("jobposts"), "http://localhost:8080/jobposts");
    }
}
