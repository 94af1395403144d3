//! CLI entry point for canopy

use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::process;

use clap::{ArgGroup, Parser, ValueEnum};
use canopy::menu::DEFAULT_HTML_PATH;
use canopy::output::print_query_json;
use canopy::{
    BuildConfig, Menu, OutputConfig, Query, TreeBuilder, TreeFormatter, TreeIndex, export_html,
    format_report, print_json,
};
use tracing::debug;

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            io::stdout().is_terminal()
        }
    }
}

/// Verbosity of diagnostic logging on stderr
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum LogLevel {
    Debug,
    Info,
    #[default]
    Warn,
    Error,
    Silent,
}

impl LogLevel {
    fn to_tracing_level(self) -> Option<tracing::Level> {
        match self {
            LogLevel::Debug => Some(tracing::Level::DEBUG),
            LogLevel::Info => Some(tracing::Level::INFO),
            LogLevel::Warn => Some(tracing::Level::WARN),
            LogLevel::Error => Some(tracing::Level::ERROR),
            LogLevel::Silent => None,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "canopy")]
#[command(about = "Build a sized tree of a directory, then display, export or query it")]
#[command(version)]
#[command(group(
    ArgGroup::new("query")
        .args(["largest", "larger_than", "most_children", "extension", "empty_dirs"])
))]
struct Args {
    /// Directory to load
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Show sizes as 1.5K, 3.0M instead of bytes
    #[arg(short = 'H', long = "human")]
    human: bool,

    /// Output in JSON format (the tree, or the query result)
    #[arg(long = "json", conflicts_with_all = ["html", "interactive"])]
    json: bool,

    /// Export the tree as an HTML report to FILE
    #[arg(long = "html", value_name = "FILE", conflicts_with_all = ["query", "interactive"])]
    html: Option<PathBuf>,

    /// Fail on the first unreadable entry instead of skipping it
    #[arg(long = "strict")]
    strict: bool,

    /// Diagnostic log level on stderr
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "warn")]
    log_level: LogLevel,

    /// Start the interactive menu
    #[arg(short = 'i', long = "interactive", conflicts_with = "query")]
    interactive: bool,

    /// File the interactive menu exports HTML to (default: tree.html)
    #[arg(long = "html-out", value_name = "FILE", requires = "interactive")]
    html_out: Option<PathBuf>,

    /// List the largest file(s)
    #[arg(long = "largest")]
    largest: bool,

    /// List files strictly larger than BYTES
    #[arg(long = "larger-than", value_name = "BYTES")]
    larger_than: Option<u64>,

    /// List the director(y/ies) with the most direct children
    #[arg(long = "most-children")]
    most_children: bool,

    /// List files whose extension is exactly EXT (e.g. .txt)
    #[arg(long = "extension", value_name = "EXT")]
    extension: Option<String>,

    /// List empty directories
    #[arg(long = "empty-dirs")]
    empty_dirs: bool,
}

impl Args {
    fn query(&self) -> Option<Query> {
        if self.largest {
            Some(Query::Largest)
        } else if let Some(threshold) = self.larger_than {
            Some(Query::LargerThan(threshold))
        } else if self.most_children {
            Some(Query::MostChildren)
        } else if let Some(ref ext) = self.extension {
            Some(Query::Extension(ext.clone()))
        } else if self.empty_dirs {
            Some(Query::EmptyDirectories)
        } else {
            None
        }
    }
}

fn setup_tracing(level: LogLevel) {
    if let Some(level) = level.to_tracing_level() {
        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_writer(io::stderr)
            .without_time()
            .compact()
            .init();
    }
}

fn main() {
    let args = Args::parse();
    setup_tracing(args.log_level);
    debug!("Parsed CLI arguments: {args:?}");

    let builder = TreeBuilder::new(BuildConfig {
        strict: args.strict,
    });
    let scan = match builder.build_root(&args.path) {
        Ok(scan) => scan,
        Err(e) => {
            eprintln!("canopy: {}", e);
            process::exit(1);
        }
    };

    if !scan.failures.is_empty() {
        eprintln!(
            "canopy: warning: skipped {} unreadable entries",
            scan.failures.len()
        );
    }

    let output_config = OutputConfig {
        use_color: !args.json && should_use_color(args.color),
        human_sizes: args.human,
    };

    let result = if args.interactive {
        let html_path = args
            .html_out
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_HTML_PATH));
        Menu::new(
            Some(&scan.root),
            output_config,
            io::stdin().lock(),
            io::stdout().lock(),
        )
        .with_html_path(html_path)
        .run()
    } else if let Some(query) = args.query() {
        let index = TreeIndex::new(Some(&scan.root));
        let report = query.run(&index);
        if args.json {
            print_query_json(&report)
        } else {
            write!(io::stdout().lock(), "{}", format_report(&report, &output_config))
        }
    } else if let Some(ref html) = args.html {
        export_html(&scan.root, html, &output_config)
            .map(|()| println!("Wrote HTML report to {}", html.display()))
    } else if args.json {
        print_json(&scan.root)
    } else {
        TreeFormatter::new(output_config).print(&scan.root)
    };

    if let Err(e) = result {
        eprintln!("canopy: error writing output: {}", e);
        process::exit(1);
    }
}
