//! CLI entry point for treeshot

use std::path::PathBuf;
use std::process;

use clap::Parser;
use log::{info, warn};
use treeshot::{
    AllViews, ColorWhen, FocusedWindowFilter, OutputConfig, RendererConfig, RendererPipeline,
    Scanner, SkipIdsFilter, Snapshot, View, ViewFilter, ViewFilterExt, print_scan,
    with_silenced_panics,
};

#[derive(Parser, Debug)]
#[command(name = "treeshot")]
#[command(about = "Pretty-print a captured UI hierarchy")]
#[command(version)]
struct Args {
    /// JSON snapshot of the hierarchy to scan
    snapshot: PathBuf,

    /// Include literal text content (may contain personal data)
    #[arg(short = 't', long = "include-text")]
    include_text: bool,

    /// Ellipsize text longer than N characters (with --include-text)
    #[arg(long = "text-max-length", value_name = "N", requires = "include_text")]
    text_max_length: Option<usize>,

    /// Skip views with this id, and their subtrees (glob patterns allowed, repeatable)
    #[arg(short = 'I', long = "skip-id", value_name = "ID")]
    skip_id: Vec<String>,

    /// Only scan the window holding focus (all windows if none does)
    #[arg(short = 'f', long = "focused-window")]
    focused_window: bool,

    /// Only scan the window at this index
    #[arg(short = 'w', long = "window", value_name = "INDEX")]
    window: Option<usize>,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorWhen,
}

fn build_filter(args: &Args) -> Box<dyn ViewFilter> {
    let mut filter: Box<dyn ViewFilter> = Box::new(AllViews);

    if !args.skip_id.is_empty() {
        let skip = SkipIdsFilter::from_specs(&args.skip_id).unwrap_or_else(|e| {
            eprintln!("treeshot: invalid --skip-id pattern: {}", e);
            process::exit(1);
        });
        filter = Box::new(filter.and(skip));
    }

    if args.focused_window {
        filter = Box::new(filter.and(FocusedWindowFilter));
    }

    filter
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let snapshot = Snapshot::load(&args.snapshot).unwrap_or_else(|e| {
        eprintln!("treeshot: {}", e);
        process::exit(1);
    });
    info!(
        "loaded {} windows from {}",
        snapshot.windows().len(),
        args.snapshot.display()
    );

    let root: Option<&dyn View> = match args.window {
        Some(index) => match snapshot.window(index) {
            Some(window) => Some(window as &dyn View),
            None => {
                eprintln!(
                    "treeshot: no window at index {} ({} windows in snapshot)",
                    index,
                    snapshot.windows().len()
                );
                process::exit(1);
            }
        },
        None => None,
    };

    let renderer_config = RendererConfig {
        include_pii: args.include_text,
        text_max_length: args.text_max_length,
    };

    let scanner = Scanner::new()
        .with_renderers(RendererPipeline::from_config(&renderer_config))
        .with_filter(build_filter(&args));

    // Failing windows are reported in the output; keep stderr for real errors.
    let text = with_silenced_panics(|| scanner.scan(root, &snapshot)).unwrap_or_else(|e| {
        eprintln!("treeshot: {}", e);
        process::exit(1);
    });
    if text.is_empty() {
        warn!("no windows left to scan");
    }

    if let Err(e) = print_scan(&text, &OutputConfig::from_env(args.color)) {
        eprintln!("treeshot: error writing output: {}", e);
        process::exit(1);
    }
}
