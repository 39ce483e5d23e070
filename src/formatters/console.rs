use std::path::Path;

use crate::types::{PartialCopy, PresenceDiff};

const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Plain,
    Red,
    Green,
    Yellow,
}

impl Color {
    fn code(self) -> &'static str {
        match self {
            Color::Plain => "",
            Color::Red => "\x1b[91m",    // bright red
            Color::Green => "\x1b[92m",  // bright green
            Color::Yellow => "\x1b[93m", // bright yellow
        }
    }
}

/// Wraps `s` in the escape codes for `color` and optional bold, always ending with a reset.
pub fn paint(s: &str, color: Color, bold: bool) -> String {
    let bold_code = if bold { BOLD } else { "" };
    format!("{bold_code}{}{s}{RESET}", color.code())
}

/// Renders the missing and extra sections. Headers are printed even when a section is empty.
pub fn format_presence(diff: &PresenceDiff, dest: &Path) -> String {
    let mut lines = Vec::with_capacity(diff.missing_in_dest.len() + diff.missing_in_src.len() + 3);

    lines.push(paint(
        &format!("Files missing in {}:", dest.display()),
        Color::Plain,
        true,
    ));
    for rel in &diff.missing_in_dest {
        lines.push(paint(&format!("-{}", rel.display()), Color::Red, false));
    }

    lines.push(String::new());
    lines.push(paint(
        &format!("Additional files only existing in {}:", dest.display()),
        Color::Plain,
        true,
    ));
    for rel in &diff.missing_in_src {
        lines.push(paint(&format!("+{}", rel.display()), Color::Green, false));
    }

    lines.join("\n")
}

pub fn format_partial(partial: &[PartialCopy]) -> String {
    let mut lines = Vec::with_capacity(partial.len() + 1);
    lines.push(paint("Partially copied files:", Color::Plain, true));
    for p in partial {
        lines.push(paint(
            &format!("~{}", p.name.to_string_lossy()),
            Color::Yellow,
            false,
        ));
    }
    lines.join("\n")
}
