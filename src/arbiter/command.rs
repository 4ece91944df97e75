/// A line received from the referee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// We play first
    Start,
    /// Opponent move token, e.g. "3R" (not yet validated)
    Move(String),
    /// Final result announced by the referee
    Result(String),
    Unknown(String),
}

/// Classify a referee line. Returns `None` for blank lines.
#[must_use]
pub fn parse_command(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    let cmd = if trimmed.contains("RESULT") {
        Command::Result(trimmed.to_string())
    } else if trimmed == "START" {
        Command::Start
    } else if looks_like_move(trimmed) {
        Command::Move(trimmed.to_string())
    } else {
        Command::Unknown(trimmed.to_string())
    };

    Some(cmd)
}

/// Digits followed by at least one letter. Legality is checked later.
fn looks_like_move(token: &str) -> bool {
    let split = token
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(token.len());
    let (digits, suffix) = token.split_at(split);
    !digits.is_empty() && suffix.starts_with(|c: char| c.is_ascii_alphabetic())
}
