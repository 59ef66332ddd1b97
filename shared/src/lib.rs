use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub mod protocol;

// =========================================================
// 常量定义 (Constants)
// =========================================================

/// 认证头名称，token 以 Bearer 形式附加
pub const HEADER_AUTH: &str = "Authorization";
pub const BEARER_PREFIX: &str = "Bearer ";

// =========================================================
// 领域枚举 (Domain Enums)
// =========================================================

/// 用户角色，决定可达的视图集合
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Employee,
    Recruiter,
    Admin,
}

impl Role {
    /// 线上字符串表示（与后端枚举一致，也用于 query 参数）
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Employee => "EMPLOYEE",
            Role::Recruiter => "RECRUITER",
            Role::Admin => "ADMIN",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "EMPLOYEE" => Some(Role::Employee),
            "RECRUITER" => Some(Role::Recruiter),
            "ADMIN" => Some(Role::Admin),
            _ => None,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobType {
    FullTime,
    PartTime,
    Contract,
    Internship,
}

impl JobType {
    pub const ALL: [JobType; 4] = [
        JobType::FullTime,
        JobType::PartTime,
        JobType::Contract,
        JobType::Internship,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            JobType::FullTime => "FULL_TIME",
            JobType::PartTime => "PART_TIME",
            JobType::Contract => "CONTRACT",
            JobType::Internship => "INTERNSHIP",
        }
    }

    /// 界面展示用标签
    pub fn label(&self) -> &'static str {
        match self {
            JobType::FullTime => "Full Time",
            JobType::PartTime => "Part Time",
            JobType::Contract => "Contract",
            JobType::Internship => "Internship",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "FULL_TIME" => Some(JobType::FullTime),
            "PART_TIME" => Some(JobType::PartTime),
            "CONTRACT" => Some(JobType::Contract),
            "INTERNSHIP" => Some(JobType::Internship),
            _ => None,
        }
    }
}

impl Default for JobType {
    fn default() -> Self {
        JobType::FullTime
    }
}

/// 申请状态，只允许 Pending -> Accepted / Pending -> Rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationStatus {
    Pending,
    Accepted,
    Rejected,
}

impl ApplicationStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "PENDING",
            ApplicationStatus::Accepted => "ACCEPTED",
            ApplicationStatus::Rejected => "REJECTED",
        }
    }
}

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

/// 登录时刻的用户快照，在下次登录前不会刷新
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    pub id: i64,
    pub job_title: String,
    pub company_name: String,
    pub job_type: JobType,
    pub job_description: String,
    pub job_location: String,
    pub posted_date: NaiveDate,
    #[serde(default)]
    pub dead_line_date: Option<NaiveDate>,
    pub recruiter_email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: i64,
    pub employee_email: String,
    pub employee_name: String,
    pub job_id: i64,
    pub job_title: String,
    pub company_name: String,
    pub recruiter_email: String,
    pub applied_date: NaiveDate,
    pub status: ApplicationStatus,
}

/// 求职者档案。email 一经设置不可修改（保存时原样回传）。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeProfile {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub skills: Option<String>,
    #[serde(default)]
    pub experience: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecruiterProfile {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub company_address: Option<String>,
}

/// 管理端用户列表行
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagedUser {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub is_active: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformStats {
    pub total_users: u64,
    pub total_jobs: u64,
    pub total_applications: u64,
    pub active_users: u64,
}

// =========================================================
// 请求 / 响应 DTO
// =========================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// 登录/注册成功响应：token 与用户字段平铺在同一层
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl AuthResponse {
    /// 拆分为凭据与用户快照。快照只保留 id/name/email/role，
    /// 其余响应字段不进入持久化状态。
    pub fn into_parts(self) -> (String, UserSummary) {
        let AuthResponse {
            token,
            id,
            name,
            email,
            role,
        } = self;
        (
            token,
            UserSummary {
                id,
                name,
                email,
                role,
            },
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyRequest {
    pub employee_email: String,
    pub job_id: i64,
    pub recruiter_email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusUpdateRequest {
    pub application_id: i64,
    pub status: ApplicationStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobPostRequest {
    pub job_title: String,
    pub company_name: String,
    pub job_type: JobType,
    pub job_description: String,
    pub job_location: String,
    pub posted_date: NaiveDate,
    pub dead_line_date: Option<NaiveDate>,
    pub recruiter_email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStatusUpdate {
    pub email: String,
    pub is_active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_wire_names_match_backend_enum() {
        assert_eq!(
            serde_json::to_string(&Role::Employee).unwrap(),
            "\"EMPLOYEE\""
        );
        assert_eq!(
            serde_json::to_string(&Role::Recruiter).unwrap(),
            "\"RECRUITER\""
        );
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"ADMIN\"");
        assert_eq!(Role::from_str("ADMIN"), Some(Role::Admin));
        assert_eq!(Role::from_str("admin"), None);
    }

    #[test]
    fn job_posting_uses_backend_field_names() {
        let job = JobPosting {
            id: 42,
            job_title: "Backend Engineer".into(),
            company_name: "Acme".into(),
            job_type: JobType::FullTime,
            job_description: "Build things".into(),
            job_location: "Remote".into(),
            posted_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            dead_line_date: Some(NaiveDate::from_ymd_opt(2024, 2, 15).unwrap()),
            recruiter_email: "r@acme.com".into(),
        };
        let v: serde_json::Value = serde_json::to_value(&job).unwrap();
        assert_eq!(v["jobTitle"], "Backend Engineer");
        assert_eq!(v["jobType"], "FULL_TIME");
        // 后端字段拼写是 deadLineDate，不是 deadlineDate
        assert_eq!(v["deadLineDate"], "2024-02-15");
        assert_eq!(v["postedDate"], "2024-01-15");
        assert_eq!(v["recruiterEmail"], "r@acme.com");
    }

    #[test]
    fn job_posting_deadline_is_optional() {
        let json = r#"{
            "id": 1, "jobTitle": "T", "companyName": "C", "jobType": "CONTRACT",
            "jobDescription": "D", "jobLocation": "L", "postedDate": "2024-03-01",
            "recruiterEmail": "r@x.com"
        }"#;
        let job: JobPosting = serde_json::from_str(json).unwrap();
        assert_eq!(job.job_type, JobType::Contract);
        assert_eq!(job.dead_line_date, None);
    }

    #[test]
    fn status_update_uses_application_id_field() {
        let req = StatusUpdateRequest {
            application_id: 7,
            status: ApplicationStatus::Accepted,
        };
        let v: serde_json::Value = serde_json::to_value(&req).unwrap();
        assert_eq!(v["applicationId"], 7);
        assert_eq!(v["status"], "ACCEPTED");
    }

    #[test]
    fn managed_user_uses_is_active_field() {
        let json = r#"{"id":1,"name":"A","email":"a@x.com","role":"EMPLOYEE","isActive":false}"#;
        let user: ManagedUser = serde_json::from_str(json).unwrap();
        assert!(!user.is_active);
        let v: serde_json::Value = serde_json::to_value(&user).unwrap();
        assert_eq!(v["isActive"], false);
    }

    #[test]
    fn auth_response_splits_into_token_and_snapshot_only() {
        let resp = AuthResponse {
            token: "jwt-abc".into(),
            id: 9,
            name: "Jo".into(),
            email: "jo@x.com".into(),
            role: Role::Recruiter,
        };
        let (token, user) = resp.into_parts();
        assert_eq!(token, "jwt-abc");
        let v: serde_json::Value = serde_json::to_value(&user).unwrap();
        let mut keys: Vec<&str> = v.as_object().unwrap().keys().map(|k| k.as_str()).collect();
        keys.sort_unstable();
        // 持久化的快照里只有这四个字段，token 不落入 user 条目
        assert_eq!(keys, ["email", "id", "name", "role"]);
    }
}
