use crate::{
    Application, ApplyRequest, AuthResponse, CreateJobPostRequest, EmployeeProfile, JobPosting,
    LoginRequest, ManagedUser, PlatformStats, RecruiterProfile, RegisterRequest,
    StatusUpdateRequest,
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
}

/// A trait that defines the request-response relationship and metadata for an
/// API endpoint with a fixed path.
///
/// Endpoints whose path embeds a parameter (search term, e-mail keyed
/// lookups, role filter) are issued through dedicated client methods instead.
pub trait ApiRequest: Serialize + DeserializeOwned {
    /// The response type returned by this request.
    type Response: DeserializeOwned;
    /// The URL path (or suffix).
    const PATH: &'static str;
    /// The HTTP method.
    const METHOD: HttpMethod;
}

// =========================================================
// Request Definitions
// =========================================================

impl ApiRequest for LoginRequest {
    type Response = AuthResponse;
    const PATH: &'static str = "/auth/login";
    const METHOD: HttpMethod = HttpMethod::Post;
}

impl ApiRequest for RegisterRequest {
    type Response = AuthResponse;
    const PATH: &'static str = "/auth/register";
    const METHOD: HttpMethod = HttpMethod::Post;
}

/// List every job posting
#[derive(Debug, Serialize, Deserialize)]
pub struct ListJobPostsRequest;

impl ApiRequest for ListJobPostsRequest {
    type Response = Vec<JobPosting>;
    const PATH: &'static str = "/jobposts";
    const METHOD: HttpMethod = HttpMethod::Get;
}

impl ApiRequest for CreateJobPostRequest {
    type Response = JobPosting;
    const PATH: &'static str = "/jobposts";
    const METHOD: HttpMethod = HttpMethod::Post;
}

impl ApiRequest for ApplyRequest {
    type Response = Application;
    const PATH: &'static str = "/applications/apply";
    const METHOD: HttpMethod = HttpMethod::Post;
}

impl ApiRequest for StatusUpdateRequest {
    type Response = Application;
    const PATH: &'static str = "/applications/status";
    const METHOD: HttpMethod = HttpMethod::Put;
}

// Profile saves post the whole editable record back and receive the stored
// version in return, so the model doubles as its own request type.
impl ApiRequest for EmployeeProfile {
    type Response = EmployeeProfile;
    const PATH: &'static str = "/employees/update";
    const METHOD: HttpMethod = HttpMethod::Post;
}

impl ApiRequest for RecruiterProfile {
    type Response = RecruiterProfile;
    const PATH: &'static str = "/recruiters/save";
    const METHOD: HttpMethod = HttpMethod::Post;
}

/// List every registered user (admin only)
#[derive(Debug, Serialize, Deserialize)]
pub struct ListUsersRequest;

impl ApiRequest for ListUsersRequest {
    type Response = Vec<ManagedUser>;
    const PATH: &'static str = "/admins/users";
    const METHOD: HttpMethod = HttpMethod::Get;
}

/// Platform-wide counters (admin only)
#[derive(Debug, Serialize, Deserialize)]
pub struct PlatformStatsRequest;

impl ApiRequest for PlatformStatsRequest {
    type Response = PlatformStats;
    const PATH: &'static str = "/admins/status";
    const METHOD: HttpMethod = HttpMethod::Get;
}

// Note: PUT /admins/users/status acknowledges with a plain "ok" body, not
// JSON, so `UserStatusUpdate` stays outside this trait and the client checks
// the status line only.
