//! API 错误类型
//!
//! 请求失败的三类：未到达服务器、服务器拒绝、成功响应解析失败。
//! 所有错误都在视图边界被恢复为错误状态，不向外传播。

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// 网络层失败，请求未到达服务器
    Transport(String),
    /// 服务器返回非 2xx
    Server {
        status: u16,
        status_text: String,
        /// 响应体若是带 message 字段的 JSON，在这里提取出来
        message: Option<String>,
        /// 原始响应体
        body: String,
    },
    /// 2xx 响应体解析失败
    Decode(String),
}

impl ApiError {
    /// 由状态行与原始响应体构造服务端错误
    pub fn from_response(status: u16, status_text: String, body: String) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| {
                v.get("message")
                    .and_then(|m| m.as_str())
                    .map(str::to_string)
            });
        ApiError::Server {
            status,
            status_text,
            message,
            body,
        }
    }

    /// 面向用户的错误文案
    ///
    /// 提取优先级：服务端 message 字段 > 原始响应体 > 状态行 /
    /// 传输层错误信息 > 调用方兜底文案。
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Server {
                message: Some(m), ..
            } if !m.is_empty() => m.clone(),
            ApiError::Server {
                body, status_text, ..
            } => {
                let body = body.trim();
                if !body.is_empty() {
                    body.to_string()
                } else if !status_text.is_empty() {
                    status_text.clone()
                } else {
                    fallback.to_string()
                }
            }
            ApiError::Transport(m) if !m.is_empty() => m.clone(),
            _ => fallback.to_string(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(m) => write!(f, "网络错误: {m}"),
            ApiError::Server {
                status,
                status_text,
                ..
            } => write!(f, "HTTP {status} {status_text}"),
            ApiError::Decode(m) => write!(f, "响应解析失败: {m}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_json_message_field() {
        let err = ApiError::from_response(
            400,
            "Bad Request".into(),
            r#"{"message":"Email already registered"}"#.into(),
        );
        assert_eq!(err.user_message("fallback"), "Email already registered");
    }

    #[test]
    fn raw_body_when_no_message_field() {
        let err = ApiError::from_response(401, "Unauthorized".into(), "Invalid credentials".into());
        assert_eq!(err.user_message("fallback"), "Invalid credentials");
    }

    #[test]
    fn status_text_when_body_is_empty() {
        let err = ApiError::from_response(500, "Internal Server Error".into(), String::new());
        assert_eq!(err.user_message("fallback"), "Internal Server Error");
    }

    #[test]
    fn transport_message_then_fallback() {
        assert_eq!(
            ApiError::Transport("Network request failed".into()).user_message("fallback"),
            "Network request failed"
        );
        assert_eq!(
            ApiError::Transport(String::new()).user_message("fallback"),
            "fallback"
        );
        assert_eq!(
            ApiError::Decode("missing field".into()).user_message("fallback"),
            "fallback"
        );
    }

    #[test]
    fn json_message_beats_raw_body() {
        let err = ApiError::from_response(
            403,
            "Forbidden".into(),
            r#"{"message":"Account disabled","detail":"x"}"#.into(),
        );
        assert_eq!(err.user_message("fallback"), "Account disabled");
    }
}
