//! 会话存储
//!
//! 持久化 `{token, user}` 对，按固定键名写入 LocalStorage：
//! `"token"` 存字符串，`"user"` 存用户快照的 JSON。
//! 两个条目成对写入、成对清除，任何读取方都观察不到半写状态；
//! 缺失或损坏的数据柔性失败为 `None` 并清理残留。
//!
//! 只有认证协调器（auth 模块的状态迁移）写这里，单一写者。

use crate::web::LocalStorage;
use jobboard_shared::UserSummary;

pub const KEY_TOKEN: &str = "token";
pub const KEY_USER: &str = "user";

/// 客户端持有的认证凭据：token 与登录时刻的用户快照
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: UserSummary,
}

/// 会话存储操作封装
pub struct SessionStore;

impl SessionStore {
    /// 读取持久化的会话对
    ///
    /// 缺失或损坏时返回 `None`，并清掉残缺的一半，
    /// 保证后续读取观察不到部分状态。
    pub fn load() -> Option<Session> {
        let token = LocalStorage::get(KEY_TOKEN);
        let user_json = LocalStorage::get(KEY_USER);
        let any_present = token.is_some() || user_json.is_some();

        match decode_pair(token, user_json) {
            Some(session) => Some(session),
            None => {
                if any_present {
                    Self::clear();
                }
                None
            }
        }
    }

    /// 成对写入两个条目
    pub fn save(session: &Session) {
        LocalStorage::set(KEY_TOKEN, &session.token);
        LocalStorage::set_json(KEY_USER, &session.user);
    }

    /// 成对清除
    pub fn clear() {
        LocalStorage::delete(KEY_TOKEN);
        LocalStorage::delete(KEY_USER);
    }

    /// 调用时刻读取 token
    ///
    /// API 客户端逐请求调用，登录登出之后无需重建客户端。
    pub fn token() -> Option<String> {
        LocalStorage::get(KEY_TOKEN).filter(|t| !t.is_empty())
    }
}

/// 纯解码：token 与 user JSON 必须同时有效才构成会话
fn decode_pair(token: Option<String>, user_json: Option<String>) -> Option<Session> {
    let token = token?;
    if token.is_empty() {
        return None;
    }
    let user: UserSummary = serde_json::from_str(&user_json?).ok()?;
    Some(Session { token, user })
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobboard_shared::Role;

    fn user_json() -> String {
        r#"{"id":1,"name":"Ann","email":"ann@x.com","role":"EMPLOYEE"}"#.to_string()
    }

    #[test]
    fn decodes_a_complete_pair() {
        let session = decode_pair(Some("jwt".into()), Some(user_json())).unwrap();
        assert_eq!(session.token, "jwt");
        assert_eq!(session.user.role, Role::Employee);
        assert_eq!(session.user.email, "ann@x.com");
    }

    #[test]
    fn missing_token_is_no_session() {
        assert_eq!(decode_pair(None, Some(user_json())), None);
    }

    #[test]
    fn missing_user_is_no_session() {
        assert_eq!(decode_pair(Some("jwt".into()), None), None);
    }

    #[test]
    fn empty_token_is_no_session() {
        // 非空 user 隐含非空 token，二者一起签发
        assert_eq!(decode_pair(Some(String::new()), Some(user_json())), None);
    }

    #[test]
    fn corrupt_user_json_fails_soft() {
        assert_eq!(decode_pair(Some("jwt".into()), Some("{oops".into())), None);
        assert_eq!(
            decode_pair(Some("jwt".into()), Some(r#"{"id":1}"#.into())),
            None
        );
    }
}
