//! 运行配置
//!
//! API 基地址解析：优先 LocalStorage 覆盖项（方便联调指向
//! 不同环境），其次编译期默认值。

use crate::web::LocalStorage;

/// LocalStorage 中后端地址覆盖项的键名
const STORAGE_API_URL_KEY: &str = "jobboard_api_url";

/// 默认后端地址
const DEFAULT_API_URL: &str = "http://localhost:8080";

/// 解析 API 基地址
pub fn api_base_url() -> String {
    LocalStorage::get(STORAGE_API_URL_KEY).unwrap_or_else(|| DEFAULT_API_URL.to_string())
}
