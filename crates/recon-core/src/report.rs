//! Ordered report sections and their plain-text rendering.

use std::fmt::Write;

use serde::Serialize;

/// A titled block of report lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReportSection {
    pub title: String,
    pub lines: Vec<String>,
}

impl ReportSection {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lines: Vec::new(),
        }
    }

    /// Append one body line.
    pub fn line(&mut self, line: impl Into<String>) -> &mut Self {
        self.lines.push(line.into());
        self
    }
}

/// Sections in the exact order they were pushed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    pub sections: Vec<ReportSection>,
}

impl Report {
    pub fn push(&mut self, section: ReportSection) {
        self.sections.push(section);
    }

    /// Render as numbered banners followed by body lines.
    ///
    /// An empty report renders as an empty string.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (index, section) in self.sections.iter().enumerate() {
            if index > 0 {
                out.push('\n');
            }
            let _ = writeln!(out, "=== {}. {} ===", index + 1, section.title.to_uppercase());
            for line in &section.lines {
                let _ = writeln!(out, "{line}");
            }
        }
        out
    }
}
