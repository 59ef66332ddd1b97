//! 聊天规则表
//!
//! 纯查表逻辑：小写化输入，按声明顺序做子串匹配，命中第一条
//! 即返回对应的固定回复，全部未命中返回默认帮助文案。

/// 机器人开场白
pub const GREETING: &str = "Hello! I'm your JobBoard assistant. How can I help you today?";

/// 首轮展示的快捷提问
pub const QUICK_REPLIES: [&str; 4] = [
    "How do I apply for a job?",
    "How do I post a job?",
    "Update my profile",
    "Contact support",
];

/// 未命中任何规则时的兜底回复
pub const DEFAULT_REPLY: &str = "I'm here to help! You can ask me about:\n\
• Applying for jobs\n\
• Posting job openings\n\
• Updating your profile\n\
• Registration and login\n\
Or just type \"help\" for more options";

/// 关键词规则：keywords 中任一子串命中即触发
struct Rule {
    keywords: &'static [&'static str],
    reply: &'static str,
}

/// 规则按声明顺序匹配，靠前者优先
static RULES: [Rule; 8] = [
    Rule {
        keywords: &["apply", "job application"],
        reply: "To apply for a job:\n\
1. Browse available jobs from the Jobs page\n\
2. Click on a job you're interested in\n\
3. Click the \"Apply for this Job\" button\n\
4. Your application will be submitted instantly!",
    },
    Rule {
        keywords: &["post", "create job"],
        reply: "To post a job:\n\
1. Go to your Recruiter Dashboard\n\
2. Click \"Post New Job\"\n\
3. Fill in the job details (title, company, description, etc.)\n\
4. Click \"Post Job\" to publish it!",
    },
    Rule {
        keywords: &["profile", "update"],
        reply: "To update your profile:\n\
1. Go to your Dashboard\n\
2. Click on \"Update Profile\" or \"Profile\"\n\
3. Edit your information\n\
4. Click \"Save Changes\"",
    },
    Rule {
        keywords: &["status", "application status"],
        reply: "To check your application status:\n\
1. Go to Employee Dashboard\n\
2. View \"My Applications\" section\n\
3. You can see status: Pending, Accepted, or Rejected",
    },
    Rule {
        keywords: &["register", "sign up"],
        reply: "To create an account:\n\
1. Click \"Sign Up\" in the navigation\n\
2. Enter your details (name, email, password)\n\
3. Select your role (Job Seeker or Recruiter)\n\
4. Click \"Sign up\" to create your account!",
    },
    Rule {
        keywords: &["login", "sign in"],
        reply: "To login:\n\
1. Click \"Login\" in the navigation\n\
2. Enter your email and password\n\
3. Click \"Sign in\"\n\
4. You'll be redirected to your dashboard!",
    },
    Rule {
        keywords: &["help", "support"],
        reply: "I can help you with:\n\
• Job applications\n\
• Creating job posts\n\
• Profile updates\n\
• Account registration\n\
• Navigation tips\n\
\nJust ask me anything!",
    },
    Rule {
        keywords: &["hello", "hi", "hey"],
        reply: "Hello! How can I assist you with the JobBoard today?",
    },
];

/// 对用户输入给出回复
pub fn respond(input: &str) -> &'static str {
    let msg = input.to_lowercase();
    RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|k| msg.contains(k)))
        .map(|rule| rule.reply)
        .unwrap_or(DEFAULT_REPLY)
}

/// 空白输入不产生消息
pub fn is_sendable(input: &str) -> bool {
    !input.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_question_hits_the_apply_flow() {
        let reply = respond("How do I apply for a job?");
        assert!(reply.starts_with("To apply for a job:"));
    }

    #[test]
    fn unknown_input_gets_the_default_reply() {
        assert_eq!(respond("xyz123"), DEFAULT_REPLY);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(respond("HOW DO I APPLY?"), respond("how do i apply?"));
        assert!(respond("LOGIN").starts_with("To login:"));
    }

    #[test]
    fn earlier_rules_win_on_overlap() {
        // "update my status" 同时含 update 与 status，档案规则在前
        let reply = respond("update my status");
        assert!(reply.starts_with("To update your profile:"));
    }

    #[test]
    fn greeting_matches_last() {
        assert!(respond("hey there").starts_with("Hello!"));
        // 问句里顺带的 hi 不应盖过具体规则
        assert!(respond("hi, how do I apply?").starts_with("To apply for a job:"));
    }

    #[test]
    fn blank_input_is_not_sendable() {
        assert!(!is_sendable(""));
        assert!(!is_sendable("   "));
        assert!(!is_sendable("\n\t"));
        assert!(is_sendable("help"));
    }
}
