//! Tree rendering using ratatui Line/Span styling.

use crate::tree::TreeRow;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use std::collections::HashSet;

/// Configuration for the rendering pipeline.
pub struct RenderConfig {
    /// Whether to emit color styling.
    pub use_color: bool,
    /// Current terminal width in columns.
    #[allow(dead_code)]
    pub terminal_width: u16,
}

const BRANCH_STYLE: Style = Style::new().fg(Color::Blue).add_modifier(Modifier::BOLD);
const COLLAPSED_STYLE: Style = Style::new().fg(Color::DarkGray);
const PREFIX_STYLE: Style = Style::new().fg(Color::White);
const RECENT_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
// Turquoise-green for recently touched branches (distinct from default blue).
const RECENT_BRANCH_STYLE: Style = Style::new()
    .fg(Color::Rgb(64, 224, 208))
    .add_modifier(Modifier::BOLD);

/// Sanitize control characters to avoid terminal control-sequence injection.
/// Path lists come from untrusted files, so names go through this before
/// reaching the terminal.
pub fn sanitize_terminal_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                let code = c as u32;
                if code <= 0xFF {
                    out.push_str(&format!("\\x{:02X}", code));
                } else {
                    out.push_str(&format!("\\u{{{:X}}}", code));
                }
            }
            _ => out.push(c),
        }
    }
    out
}

/// Convert visible rows into styled ratatui `Line` objects.
pub fn rows_to_lines(
    rows: &[TreeRow],
    config: &RenderConfig,
    selected: Option<usize>,
    recent_paths: &HashSet<String>,
) -> Vec<Line<'static>> {
    rows.iter()
        .enumerate()
        .map(|(i, row)| row_to_line(row, config, selected == Some(i), recent_paths))
        .collect()
}

/// Convert a single row into a styled `Line`.
fn row_to_line(
    row: &TreeRow,
    config: &RenderConfig,
    is_selected: bool,
    recent_paths: &HashSet<String>,
) -> Line<'static> {
    let is_recent = config.use_color && recent_paths.contains(&row.full_path);
    let mut spans = Vec::new();
    let safe_name = sanitize_terminal_text(&row.name);

    // Prefix (tree-drawing characters)
    if !row.prefix.is_empty() {
        if config.use_color {
            spans.push(Span::styled(row.prefix.clone(), PREFIX_STYLE));
        } else {
            spans.push(Span::raw(row.prefix.clone()));
        }
    }

    // Name + decorations
    let name_style = if is_recent {
        if row.has_children {
            RECENT_BRANCH_STYLE
        } else {
            RECENT_STYLE
        }
    } else if row.has_children {
        BRANCH_STYLE
    } else {
        Style::new()
    };

    if config.use_color {
        spans.push(Span::styled(safe_name, name_style));
    } else {
        spans.push(Span::raw(safe_name));
    }

    if row.is_collapsed {
        let marker = format!(" [{} hidden]", row.hidden_count);
        if config.use_color {
            spans.push(Span::styled(marker, COLLAPSED_STYLE));
        } else {
            spans.push(Span::raw(marker));
        }
    }

    let mut line = Line::from(spans);
    if is_selected {
        line = line.style(Style::new().add_modifier(Modifier::REVERSED));
    }
    line
}

/// Build a styled status bar `Line`.
pub fn status_bar_line(source: &str, node_info: &str, message: Option<&str>) -> Line<'static> {
    let msg_text = match message {
        Some(m) => sanitize_terminal_text(m),
        None => "Ready".to_string(),
    };

    let safe_source = sanitize_terminal_text(source);
    let safe_info = sanitize_terminal_text(node_info);
    let text = format!(" Viewing: {}  |  {}  |  {}", safe_source, safe_info, msg_text);

    let style = Style::new()
        .fg(Color::White)
        .bg(Color::DarkGray)
        .add_modifier(Modifier::BOLD);

    Line::from(Span::styled(text, style))
}

/// Build a help bar `Line` showing available keyboard shortcuts.
pub fn help_bar_line() -> Line<'static> {
    let text = " q: Quit  |  ↑↓/jk: Move  |  Enter/Space: Collapse/Expand  |  ←→: Close/Open  |  E/C: All  |  a: Add path";
    let style = Style::new().fg(Color::DarkGray);
    Line::from(Span::styled(text.to_string(), style))
}

/// Build the input prompt `Line` shown while entering a new path.
pub fn input_bar_line(buffer: &str) -> Line<'static> {
    let safe = sanitize_terminal_text(buffer);
    let text = format!(" Add path: {}\u{2588}", safe); // block cursor
    let style = Style::new().fg(Color::Black).bg(Color::Cyan);
    Line::from(Span::styled(text, style))
}

/// Extract plain text from a `Line` (useful for testing).
#[allow(dead_code)]
pub fn line_to_plain_text(line: &Line<'_>) -> String {
    line.spans.iter().map(|s| s.content.as_ref()).collect()
}
