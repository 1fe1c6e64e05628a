//! Color rendering for trace lines.

use colored::{Color, Colorize};

/// Sentinel color name meaning "leave the text unstyled".
///
/// This is the default color everywhere a color can be staged.
pub const UNCHANGED: &str = "unchanged";

/// Renders `text` in the named color.
///
/// The sentinel [`UNCHANGED`] and any unrecognized name return `text`
/// byte-for-byte; recognized names apply an ANSI styling wrapper. Names are
/// matched case-insensitively.
///
/// # Examples
///
/// ```
/// use trace_time::render;
///
/// assert_eq!(render("plain", "unchanged"), "plain");
/// assert_eq!(render("plain", "no-such-color"), "plain");
/// ```
#[must_use]
pub fn render(text: &str, color: &str) -> String {
    match parse(color) {
        Some(color) => text.color(color).to_string(),
        None => text.to_string(),
    }
}

fn parse(name: &str) -> Option<Color> {
    let name = name.to_ascii_lowercase();

    Some(match name.as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" | "purple" => Color::Magenta,
        "cyan" => Color::Cyan,
        "white" => Color::White,
        "bright black" => Color::BrightBlack,
        "bright red" => Color::BrightRed,
        "bright green" => Color::BrightGreen,
        "bright yellow" => Color::BrightYellow,
        "bright blue" => Color::BrightBlue,
        "bright magenta" => Color::BrightMagenta,
        "bright cyan" => Color::BrightCyan,
        "bright white" => Color::BrightWhite,
        _ => return None,
    })
}
