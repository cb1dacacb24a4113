// Helper functions for safe logging, prompting and formatting

use std::io::{self, BufRead, Write};

use chrono::DateTime;

/// Masks tokens for safe logging
/// Shows only first and last 4 characters
///
/// # Example
/// ```
/// let masked = safe_token_log("eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9");
/// // Returns: "eyJh...kpXVCJ9"
/// ```
pub fn safe_token_log(token: &str) -> String {
    if token.len() > 8 {
        format!("{}...{}", &token[..4], &token[token.len() - 4..])
    } else {
        "***".to_string()
    }
}

/// Asks the user to confirm a destructive action.
///
/// Returns true only on an explicit "y"/"yes" answer; anything else (including
/// EOF) declines. `assume_yes` skips the prompt for scripted use.
pub fn confirm(prompt: &str, assume_yes: bool) -> io::Result<bool> {
    if assume_yes {
        return Ok(true);
    }

    print!("{} [y/N]: ", prompt);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(is_affirmative(&line))
}

fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

/// Renders a server timestamp (RFC 3339) for display; falls back to the raw
/// string when it does not parse.
pub fn format_timestamp(raw: &str) -> String {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_masking() {
        assert_eq!(safe_token_log("eyJhbGciOiJIUzI1NiJ9"), "eyJh...NiJ9");
        assert_eq!(safe_token_log("short"), "***");
    }

    #[test]
    fn test_affirmative_answers() {
        assert!(is_affirmative("y\n"));
        assert!(is_affirmative("  YES  "));
        assert!(!is_affirmative(""));
        assert!(!is_affirmative("n\n"));
        assert!(!is_affirmative("yep"));
    }

    #[test]
    fn test_timestamp_fallback() {
        assert_eq!(format_timestamp("not-a-date"), "not-a-date");
        assert_eq!(
            format_timestamp("2024-11-05T09:30:00+00:00"),
            "2024-11-05 09:30"
        );
    }
}
