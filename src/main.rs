//! CLI entry point for wintree

use std::io;
use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser};
use wintree::{
    ConnectorStyle, FileMatcher, FilterConfig, OutputSink, RenderConfig, Result, TreeRenderer,
    resolve_root,
};

/// Maximum walk depth; `None` means unlimited.
#[derive(Debug, Clone, Copy)]
struct MaxDepth(Option<usize>);

#[derive(Parser, Debug)]
#[command(name = "wintree")]
#[command(about = "A modern, cross-platform tree command with include and exclude filters")]
#[command(version)]
struct Args {
    /// Directory to display
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Glob pattern to exclude (e.g., .git, *.log, node_modules); can be used multiple times
    #[arg(short = 'e', long = "exclude", value_name = "PATTERN")]
    exclude: Vec<String>,

    /// Glob pattern to include (e.g., *.go, *.{md,txt}, src); can be used multiple times.
    /// Directory names are matched exactly, file names by glob
    #[arg(short = 'i', long = "include", value_name = "PATTERN")]
    include: Vec<String>,

    /// Maximum depth of the tree to display (-1 for unlimited)
    #[arg(
        short = 'd',
        long = "depth",
        default_value = "1",
        allow_negative_numbers = true,
        value_parser = parse_depth
    )]
    depth: MaxDepth,

    /// Write output to a file instead of the console
    #[arg(short = 'o', long = "out", value_name = "FILE")]
    out: Option<PathBuf>,

    /// Print the full path of the root above the tree
    #[arg(short = 'f', long = "full-path")]
    full_path: bool,

    /// Draw the tree with ASCII characters instead of box-drawing ones
    #[arg(long = "ascii")]
    ascii: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

/// Parse a depth argument: -1 for unlimited, otherwise a non-negative level.
fn parse_depth(s: &str) -> std::result::Result<MaxDepth, String> {
    let depth: i64 = s
        .trim()
        .parse()
        .map_err(|_| format!("invalid number: {}", s))?;

    match depth {
        -1 => Ok(MaxDepth(None)),
        d if d < 0 => Err(format!("depth must be -1 or at least 0, got {}", d)),
        d => usize::try_from(d)
            .map(|d| MaxDepth(Some(d)))
            .map_err(|e| e.to_string()),
    }
}

fn setup_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
    log::trace!("logger initialized with level {:?}", level);
}

fn main() {
    let args = Args::parse();
    setup_logging(args.verbose);
    log::debug!("parsed arguments: {:?}", args);

    if let Err(e) = run(&args) {
        eprintln!("wintree: {}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let root = resolve_root(&args.path)?;

    let filters =
        FilterConfig::from_patterns(&args.exclude, &args.include).with_max_depth(args.depth.0);
    let matcher = FileMatcher::new(filters);
    let matches = matcher.find_matches(&root)?;

    // Whitelist mode with nothing matched: say so rather than draw a bare root
    if matcher.config().is_include_mode() && matches.is_empty() {
        println!("No files found matching the given patterns.");
        return Ok(());
    }

    let renderer = TreeRenderer::new(RenderConfig {
        show_full_path: args.full_path,
        style: if args.ascii {
            ConnectorStyle::Ascii
        } else {
            ConnectorStyle::Unicode
        },
    });
    let tree = renderer.render(&root, &matches);

    let sink = args
        .out
        .clone()
        .map_or(OutputSink::Console, OutputSink::File);
    log::info!("rendered {} matched files", matches.len());
    sink.write(&tree, &mut io::stdout().lock())
}
