mod icons;
mod logo;
mod time;

pub use icons::{status_glyph, MERGE_TRAIN, NOT_FOUND, NO_CONNECTION, NO_PIPELINE};
pub use logo::GITLAB_LOGO;
pub use time::normalize_time;

use std::fmt;

/// One line of xbar/SwiftBar menu markup.
///
/// Rendered as `--text | key=value key2=value2`: the number of leading
/// `--` pairs is the submenu depth, and everything after the `|` is
/// metadata interpreted by the status-bar host (link target, color,
/// font, image payload). A bare `---` is a menu separator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    text: String,
    depth: usize,
    params: Vec<(&'static str, String)>,
}

impl Line {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            depth: 0,
            params: Vec::new(),
        }
    }

    /// A `---` separator; at the top level it closes the current block.
    pub fn separator() -> Self {
        Self::new("---")
    }

    /// Nest the line `depth` levels deep in submenus.
    pub fn indent(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }

    /// Make the line clickable, opening `url` in the browser.
    pub fn href(self, url: impl Into<String>) -> Self {
        self.param("href", url)
    }

    pub fn color(self, color: impl Into<String>) -> Self {
        self.param("color", color)
    }

    pub fn font(self, font: impl Into<String>) -> Self {
        self.param("font", font)
    }

    /// Attach a base64-encoded image shown in place of text.
    pub fn image(self, payload: impl Into<String>) -> Self {
        self.param("image", payload)
    }

    fn param(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.params.push((key, value.into()));
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn params(&self) -> &[(&'static str, String)] {
        &self.params
    }

    pub fn is_separator(&self) -> bool {
        self.depth == 0 && self.text == "---"
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for _ in 0..self.depth {
            write!(f, "--")?;
        }
        write!(f, "{}", self.text)?;

        if !self.params.is_empty() {
            if self.depth > 0 || !self.text.is_empty() {
                write!(f, " ")?;
            }
            write!(f, "|")?;
            for (key, value) in &self.params {
                write!(f, " {key}={value}")?;
            }
        }

        Ok(())
    }
}
