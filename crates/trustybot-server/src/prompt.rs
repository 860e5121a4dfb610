// crates/trustybot-server/src/prompt.rs

/// TrustyBot persona, sent as the `system` field of every upstream call
pub const SYSTEM_PROMPT: &str = include_str!("../prompts/trustybot.md");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_persona_is_bundled() {
        assert!(SYSTEM_PROMPT.starts_with("You are TrustyBot"));
        assert!(SYSTEM_PROMPT.contains("No emojis"));
    }
}
