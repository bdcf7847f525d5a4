//! Command parsing: `/name@botname args` → routing key plus argument string.

/// A parsed bot command. `name` is lowercased without the leading slash;
/// `args` is the trimmed remainder of the message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand<'a> {
    pub name: String,
    pub args: &'a str,
}

/// Parses a command message.
///
/// Returns `None` for non-command text and for commands addressed to a
/// different bot (`/cmd@otherbot`). When our own username is not yet known,
/// addressed commands are accepted.
pub fn parse_command<'a>(text: &'a str, bot_username: Option<&str>) -> Option<ParsedCommand<'a>> {
    let text = text.trim();
    if !text.starts_with('/') {
        return None;
    }

    let (token, args) = match text.split_once(char::is_whitespace) {
        Some((token, rest)) => (token, rest.trim()),
        None => (text, ""),
    };

    let token = &token[1..];
    let (name, target) = match token.split_once('@') {
        Some((name, target)) => (name, Some(target)),
        None => (token, None),
    };
    if name.is_empty() {
        return None;
    }

    if let (Some(target), Some(own)) = (target, bot_username) {
        if !target.eq_ignore_ascii_case(own) {
            return None;
        }
    }

    Some(ParsedCommand {
        name: name.to_lowercase(),
        args,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_command() {
        let cmd = parse_command("/settings", None).expect("command");
        assert_eq!(cmd.name, "settings");
        assert_eq!(cmd.args, "");
    }

    #[test]
    fn test_command_with_args() {
        let cmd = parse_command("/set_memory  This chat is about Rust ", None).expect("command");
        assert_eq!(cmd.name, "set_memory");
        assert_eq!(cmd.args, "This chat is about Rust");
    }

    #[test]
    fn test_addressed_to_us() {
        let cmd = parse_command("/Settings@MemBot", Some("membot")).expect("command");
        assert_eq!(cmd.name, "settings");
    }

    #[test]
    fn test_addressed_to_other_bot() {
        assert!(parse_command("/settings@otherbot", Some("membot")).is_none());
    }

    #[test]
    fn test_addressed_with_unknown_own_username() {
        assert!(parse_command("/settings@membot", None).is_some());
    }

    #[test]
    fn test_non_command_text() {
        assert!(parse_command("hello /settings", None).is_none());
        assert!(parse_command("plain text", None).is_none());
        assert!(parse_command("/", None).is_none());
    }
}
