use pathview::render::RenderConfig;
use pathview::tree::{build_tree, PathNode, TreeConfig};

/// Convert a slice of literals into an owned path list.
pub fn paths(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

/// Default TreeConfig: '/' delimiter, no depth cap, no ignores.
pub fn default_tree_config() -> TreeConfig {
    TreeConfig::default()
}

/// Build a tree from a list of literals with the default config.
pub fn build(list: &[&str]) -> PathNode {
    build_tree(&paths(list), &default_tree_config())
}

/// RenderConfig with color disabled.
pub fn no_color_render_config(width: u16) -> RenderConfig {
    RenderConfig {
        use_color: false,
        terminal_width: width,
    }
}

/// Extract plain text from a ratatui Line.
pub fn line_to_text(line: &ratatui::text::Line<'_>) -> String {
    line.spans.iter().map(|s| s.content.as_ref()).collect()
}
