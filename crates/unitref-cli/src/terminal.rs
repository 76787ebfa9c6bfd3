// Rust guideline compliant 2026-02-06

//! Terminal UI utilities for the unitref CLI.

use std::env;
use std::io::Write;
use termcolor::{Buffer, Color, ColorSpec, WriteColor};

/// Determines if colored output should be used.
///
/// Respects the NO_COLOR environment variable and terminal capabilities.
pub fn should_use_color() -> bool {
    if env::var("NO_COLOR").is_ok() {
        return false;
    }

    atty::is(atty::Stream::Stdout)
}

/// Wraps `text` in ANSI color codes.
pub fn paint(text: &str, color: Color, bold: bool) -> String {
    let mut buffer = Buffer::ansi();
    let _ = buffer.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(bold));
    let _ = write!(buffer, "{}", text);
    let _ = buffer.reset();
    String::from_utf8_lossy(buffer.as_slice()).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paint_wraps_text() {
        let painted = paint("prod/app1", Color::Green, true);
        assert!(painted.contains("prod/app1"));
        assert!(painted.starts_with('\u{1b}'));
        assert_ne!(painted, "prod/app1");
    }

    #[test]
    fn test_no_color_env_disables_color() {
        env::set_var("NO_COLOR", "1");
        assert!(!should_use_color());
        env::remove_var("NO_COLOR");
    }
}
