//! CLI entry point for dirmap

use std::io::{self, BufRead, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, ValueEnum};
use dirmap::output::{Markup, frame_root, root_name};
use dirmap::{
    DirectoryWalker, Documents, HostMessage, MessageHandler, Notification, PanelAssembler,
    PanelConfig, SaveTarget, SecondView, StatErrorPolicy, WalkError, WalkerConfig, print_json,
    print_notification, render_graph, render_outline, render_tree,
};
use tracing_subscriber::EnvFilter;

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
            // Notifications go to stderr
            io::stderr().is_terminal()
        }
    }
}

/// What to print on stdout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Indented tree with icons
    #[default]
    Tree,
    /// Flow-diagram edge list
    Graph,
    /// Nested markdown outline
    Outline,
    /// HTML panel with the tree and the selected second view
    Html,
    /// All three renderings as JSON
    Json,
}

/// Second view paired with the tree in the panel and used for saving
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum View {
    #[default]
    Graph,
    Outline,
}

impl From<View> for SecondView {
    fn from(view: View) -> Self {
        match view {
            View::Graph => SecondView::Graph,
            View::Outline => SecondView::Outline,
        }
    }
}

/// Where `MindMap.md` is written
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum SaveTo {
    /// Root of the workspace given with --workspace
    #[default]
    Workspace,
    /// Directory containing the dirmap executable
    Extension,
}

#[derive(Parser, Debug)]
#[command(name = "dirmap")]
#[command(about = "Render a directory as an icon tree, a flow-diagram edge list, or a markdown outline")]
#[command(version)]
struct Args {
    /// Directory to render
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "tree")]
    format: Format,

    /// Second view shown in the HTML panel and written by --save
    #[arg(long = "view", default_value = "graph")]
    view: View,

    /// Save the second view as MindMap.md
    #[arg(short = 's', long = "save")]
    save: bool,

    /// Where MindMap.md is written
    #[arg(long = "save-to", value_name = "TARGET", default_value = "workspace")]
    save_to: SaveTo,

    /// Workspace root folder for --save-to workspace
    #[arg(short = 'w', long = "workspace", value_name = "DIR")]
    workspace: Option<PathBuf>,

    /// Read newline-delimited JSON panel messages from stdin and act on them
    #[arg(long = "messages")]
    messages: bool,

    /// Skip entries that cannot be classified or listed instead of failing
    #[arg(long = "skip-unreadable")]
    skip_unreadable: bool,

    /// Descend into directories even when they link back to an ancestor
    #[arg(long = "no-cycle-guard")]
    no_cycle_guard: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("dirmap=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Rendered stdout content.
enum Output {
    Text(String),
    Json(Documents),
}

/// Render the requested format. Also returns the second view's text when
/// it was rendered along the way.
fn render(
    args: &Args,
    walker: &DirectoryWalker,
    root: &Path,
) -> Result<(Output, Option<String>), WalkError> {
    let second = SecondView::from(args.view);
    match args.format {
        Format::Tree => {
            let mut text = frame_root(&root_name(root), Markup::Plain);
            text.push_str(&render_tree(walker, root, 0)?);
            Ok((Output::Text(text), None))
        }
        Format::Graph => {
            let text = render_graph(walker, root, 0, "")?;
            let reuse = (second == SecondView::Graph).then(|| text.clone());
            Ok((Output::Text(text), reuse))
        }
        Format::Outline => {
            let text = render_outline(walker, root, 0)?;
            let reuse = (second == SecondView::Outline).then(|| text.clone());
            Ok((Output::Text(text), reuse))
        }
        Format::Html => {
            let panel = PanelAssembler::new(walker.clone(), PanelConfig { second }).assemble(root)?;
            Ok((Output::Text(panel.html), Some(panel.second_text)))
        }
        Format::Json => {
            let docs = Documents::render(walker, root)?;
            let reuse = match second {
                SecondView::Graph => docs.graph.clone(),
                SecondView::Outline => docs.outline.clone(),
            };
            Ok((Output::Json(docs), Some(reuse)))
        }
    }
}

fn write_text(text: &str) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()
}

fn main() {
    init_tracing();
    let args = Args::parse();

    let walker = DirectoryWalker::new(WalkerConfig {
        on_stat_error: if args.skip_unreadable {
            StatErrorPolicy::Skip
        } else {
            StatErrorPolicy::Abort
        },
        cycle_guard: !args.no_cycle_guard,
    });

    let root = if args.path.is_absolute() {
        args.path.clone()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(&args.path)
    };

    let (output, second_text) = match render(&args, &walker, &root) {
        Ok(rendered) => rendered,
        Err(e) => {
            eprintln!("dirmap: render failed: {}", e);
            process::exit(1);
        }
    };

    let written = match &output {
        Output::Text(text) => write_text(text),
        Output::Json(docs) => print_json(docs),
    };
    if let Err(e) = written {
        eprintln!("dirmap: error writing output: {}", e);
        process::exit(1);
    }

    let target = match args.save_to {
        SaveTo::Workspace => SaveTarget::Workspace(args.workspace.clone()),
        SaveTo::Extension => SaveTarget::extension_root(),
    };
    let handler = MessageHandler::new(target);
    let use_color = should_use_color(args.color);
    let mut failed = false;

    if args.save {
        let text = match second_text {
            Some(text) => text,
            None => match SecondView::from(args.view).render(&walker, &root) {
                Ok(text) => text,
                Err(e) => {
                    eprintln!("dirmap: render failed: {}", e);
                    process::exit(1);
                }
            },
        };
        failed |= report(&handler.handle(&HostMessage::SaveMindMap { text }), use_color);
    }

    if args.messages {
        for line in io::stdin().lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    eprintln!("dirmap: error reading messages: {}", e);
                    process::exit(1);
                }
            };
            if line.trim().is_empty() {
                continue;
            }
            if let Some(message) = HostMessage::parse(&line) {
                failed |= report(&handler.handle(&message), use_color);
            }
        }
    }

    if failed {
        process::exit(2);
    }
}

/// Print a notification; returns true if it reports a failure.
fn report(notification: &Notification, use_color: bool) -> bool {
    if let Err(e) = print_notification(notification, use_color) {
        eprintln!("dirmap: {}", notification.message);
        tracing::debug!(error = %e, "notification fell back to plain stderr");
    }
    notification.is_error()
}
