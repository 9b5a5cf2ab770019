use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for non-interactive printing.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Plain prefixed tree text
    Ascii,
    /// Nested name-keyed JSON object
    Json,
    /// Flat JSON list of {name, parent, children} records
    Records,
}

#[derive(Parser, Debug, Clone)]
#[command(
    name = "pathview",
    version,
    about = "Interactive terminal tree viewer for delimited path lists",
    after_help = "Examples:\n  pathview paths.txt\n  pathview --demo\n  pathview -d , labels.csv\n  cat paths.txt | pathview - --print\n  pathview paths.txt --print --format json"
)]
pub struct Args {
    /// Path list file, one path per line ("-" for stdin, print mode only)
    pub file: Option<PathBuf>,

    /// Use the built-in sample path list
    #[arg(long)]
    pub demo: bool,

    /// Segment delimiter
    #[arg(short = 'd', long = "delimiter", default_value_t = '/')]
    pub delimiter: char,

    /// Max tree depth
    #[arg(short = 'L', long = "level")]
    pub max_depth: Option<usize>,

    /// Glob patterns to exclude (repeatable)
    #[arg(short = 'I', long = "ignore", action = clap::ArgAction::Append)]
    pub ignore: Vec<String>,

    /// Start with all branches collapsed
    #[arg(long)]
    pub collapsed: bool,

    /// Render once to stdout and exit (no interactive UI)
    #[arg(short = 'p', long = "print")]
    pub print: bool,

    /// Output format (implies --print for non-ascii formats)
    #[arg(long = "format", value_enum, default_value_t = Format::Ascii)]
    pub format: Format,

    /// Disable colored output
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Increase diagnostic verbosity (repeatable)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

impl Args {
    /// Enforce invariants after parsing.
    pub fn validated(mut self) -> Self {
        // Respect NO_COLOR env var
        if std::env::var("NO_COLOR").is_ok() {
            self.no_color = true;
        }
        if self.quiet {
            self.verbose = 0;
        }
        // A structured format only makes sense on stdout
        if self.format != Format::Ascii {
            self.print = true;
        }
        self
    }
}
