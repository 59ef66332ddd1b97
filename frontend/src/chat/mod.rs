//! 聊天助手模块
//!
//! 规则匹配是纯查表逻辑（`rules`），这里定义对话转录的数据类型。
//! 不依赖认证，不发网络请求。

pub mod rules;

/// 机器人"正在输入"的模拟延迟（毫秒）
pub const TYPING_DELAY_MS: u32 = 500;

/// 消息发送方
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    Bot,
    User,
}

/// 转录中的一条消息。转录只追加，不修改。
#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
    /// 本地时钟的 HH:MM 展示时间
    pub time: String,
}

impl ChatMessage {
    pub fn new(sender: Sender, text: impl Into<String>, time: String) -> Self {
        Self {
            sender,
            text: text.into(),
            time,
        }
    }
}
