//! Column layout engine
//!
//! Pure padding math shared by every construct renderer. Alignment is a
//! ratchet: if content has already passed the target column no characters
//! are ever removed, the field simply starts late and columns after it
//! drift right by the overflow.

use crate::config::Config;

/// The fixed indentation unit.
pub const INDENT: &str = "    ";

pub fn indentation(level: usize) -> String {
    INDENT.repeat(level)
}

/// Number of spaces needed to move from `current` to `target`. Zero when
/// the target has already been passed.
pub fn pad(current: usize, target: usize) -> usize {
    target.saturating_sub(current)
}

/// A single line under construction, tracking its absolute column. `base`
/// is the column the line starts at, so renderers invoked below an indent
/// prefix still measure against absolute target columns.
pub struct LineBuilder {
    text: String,
    base: usize,
}

impl LineBuilder {
    pub fn new(base: usize) -> LineBuilder {
        LineBuilder {
            text: String::new(),
            base,
        }
    }

    pub fn column(&self) -> usize {
        self.base
            + self
                .text
                .chars()
                .count()
    }

    pub fn push(&mut self, content: &str) {
        self.text
            .push_str(content);
    }

    /// Append one space unless the line is empty or already ends in one.
    pub fn space(&mut self) {
        if !self
            .text
            .is_empty()
            && !self
                .text
                .ends_with(' ')
        {
            self.text
                .push(' ');
        }
    }

    /// Pad with spaces out to the target column, then append.
    pub fn field(&mut self, target: usize, content: &str) {
        let spaces = pad(self.column(), target);
        for _ in 0..spaces {
            self.text
                .push(' ');
        }
        self.text
            .push_str(content);
    }

    pub fn is_empty(&self) -> bool {
        self.text
            .is_empty()
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

/// Render a `[msb:lsb]` bit range with the MSB right-justified to the
/// configured minimum width and the LSB left-justified likewise. This
/// sub-layout is independent of the outer column engine.
pub fn format_range(msb: &str, lsb: &str, config: &Config) -> String {
    format!(
        "[{:>up$}:{:<low$}]",
        msb,
        lsb,
        up = config.upbound,
        low = config.lowbound
    )
}
