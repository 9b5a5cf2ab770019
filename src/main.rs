#![forbid(unsafe_code)]
mod cli;
mod event_loop;
mod export;
mod input;
mod recent;
mod render;
mod terminal;
mod tree;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Args, Format};
use event_loop::App;
use render::RenderConfig;
use tree::{build_ignore_set, build_tree, TreeConfig};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("pathview: {e:#}");
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let args = Args::parse().validated();

    let stdin_source = args.file.as_deref() == Some(std::path::Path::new("-"));
    anyhow::ensure!(
        !stdin_source || args.print,
        "reading paths from stdin requires --print (the interactive UI needs the terminal)"
    );
    anyhow::ensure!(
        args.demo || args.file.is_some(),
        "no input: pass a path list file or --demo"
    );

    let (paths, source_label) = if args.demo {
        (input::demo_paths(), "demo".to_string())
    } else if stdin_source {
        (input::read_paths_stdin()?, "stdin".to_string())
    } else {
        let file = args.file.as_deref().context("no path list file")?;
        let label = file
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| file.to_string_lossy().to_string());
        (input::read_paths_file(file)?, label)
    };

    let tree_config = TreeConfig {
        delimiter: args.delimiter,
        max_depth: args.max_depth,
        ignore_patterns: build_ignore_set(&args.ignore),
    };

    if args.verbose > 0 && !args.quiet {
        eprintln!(
            "pathview: {} path(s) from {} (delimiter={:?}, color={})",
            paths.len(),
            source_label,
            args.delimiter,
            if args.no_color { "off" } else { "on" }
        );
    }

    let mut root = build_tree(&paths, &tree_config);
    if args.collapsed {
        root.collapse_all();
    }

    if args.print {
        let out = match args.format {
            Format::Ascii => export::ascii_tree(&root),
            Format::Json => serde_json::to_string_pretty(&export::nested_value(&root))
                .context("failed to serialize tree")?,
            Format::Records => serde_json::to_string_pretty(&export::record_list(&root))
                .context("failed to serialize records")?,
        };
        println!("{}", out);
        return Ok(());
    }

    let (term_width, _) = terminal::terminal_size();

    // Set the terminal (window/pane) title so multiplexers can display a
    // meaningful name, truncated with an ellipsis if it would exceed the
    // terminal width.
    if let Some(title) = build_terminal_title(&source_label, term_width as usize) {
        use std::io::Write as _;
        let mut stdout = std::io::stdout();
        let _ = write!(stdout, "\x1b]0;{}\x07", title);
        let _ = stdout.flush();
    }

    let render_config = RenderConfig {
        use_color: !args.no_color,
        terminal_width: term_width,
    };

    terminal::install_panic_hook();
    let mut term = terminal::init().context("failed to initialize terminal")?;

    let mut app = App::new(root, tree_config, render_config, source_label);
    let result = event_loop::run(&mut term, &mut app);

    terminal::restore();
    result
}

/// Build a terminal title of the form "Path Tree of <source>", truncated
/// with a middle ellipsis so it does not exceed `max_cols` characters.
fn build_terminal_title(source: &str, max_cols: usize) -> Option<String> {
    if max_cols == 0 {
        return None;
    }
    let raw_title = format!("Path Tree of {}", source);
    let sanitized = sanitize_title(&raw_title);
    Some(truncate_middle(&sanitized, max_cols))
}

/// Remove control characters that might interfere with terminal behavior.
fn sanitize_title(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_control() || *c == ' ')
        .collect()
}

/// Truncate a string in the middle with "..." so its length does not exceed
/// `max_cols`. If the string is already short enough, it is returned as-is.
fn truncate_middle(input: &str, max_cols: usize) -> String {
    if input.len() <= max_cols {
        return input.to_string();
    }
    if max_cols == 0 {
        return String::new();
    }
    if max_cols <= 3 {
        return ".".repeat(max_cols);
    }

    let ellipsis = "...";
    let keep = max_cols - ellipsis.len();
    let prefix_len = keep / 2 + keep % 2;
    let suffix_len = keep / 2;

    let prefix = &input[..prefix_len];
    let suffix = &input[input.len() - suffix_len..];

    format!("{prefix}{ellipsis}{suffix}")
}
