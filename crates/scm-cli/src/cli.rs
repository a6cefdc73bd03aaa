//! CLI argument definitions for the context menu host.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "scm",
    version,
    about = "Simple context menus - actions mirrored from a folder of scripts",
    long_about = "Build a context menu from the Extensions and TopLevelItems folders and\n\
                  launch the chosen action with the selected paths as arguments.\n\n\
                  Entry names follow <Label>[.<TAG>|.<ext>]*[.<script-extension>]:\n\
                  upper-case tags are MIME major types, lower-case tags are file extensions."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[command(flatten)]
    pub roots: RootArgs,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

/// Where the menu roots come from.
#[derive(Args, Clone, Default)]
pub struct RootArgs {
    /// Configuration file (default: scm.toml next to the executable).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Folder mirrored into the extensions submenu.
    #[arg(long = "extensions-dir", value_name = "DIR", global = true)]
    pub extensions_dir: Option<PathBuf>,

    /// Folder whose actions appear directly in the menu.
    #[arg(long = "top-level-dir", value_name = "DIR", global = true)]
    pub top_level_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Build and print the menu for a selection.
    Menu(MenuArgs),

    /// Rebuild the menu and launch the action at a label path.
    Activate(ActivateArgs),

    /// Launch an action file directly.
    Launch(LaunchArgs),

    /// Show how entry names decode into labels and tags.
    Decode(DecodeArgs),
}

#[derive(Parser)]
pub struct MenuArgs {
    /// Folder the menu was opened in (default: current directory).
    #[arg(long = "folder", value_name = "DIR")]
    pub folder: Option<PathBuf>,

    /// Output format.
    #[arg(long = "output", value_enum, default_value = "tree")]
    pub output: OutputArg,

    /// Show the launch path of every leaf in tree output.
    #[arg(long = "paths")]
    pub show_paths: bool,

    /// Selected files and folders (none for a folder background click).
    #[arg(value_name = "PATHS")]
    pub paths: Vec<PathBuf>,
}

#[derive(Parser)]
pub struct ActivateArgs {
    /// Folder the menu was opened in (default: current directory).
    #[arg(long = "folder", value_name = "DIR")]
    pub folder: Option<PathBuf>,

    /// Labels from the top of the menu to the leaf, separated by '/'
    /// (for example "Extensions/Images/Shrink").
    #[arg(value_name = "LABEL_PATH")]
    pub label_path: String,

    /// Selected files and folders passed to the action.
    #[arg(value_name = "PATHS")]
    pub paths: Vec<PathBuf>,
}

#[derive(Parser)]
pub struct LaunchArgs {
    /// Folder the menu was opened in; becomes the working directory.
    #[arg(long = "folder", value_name = "DIR")]
    pub folder: Option<PathBuf>,

    /// Action file to start.
    #[arg(value_name = "ACTION")]
    pub action: PathBuf,

    /// Selected files and folders passed to the action.
    #[arg(value_name = "PATHS")]
    pub paths: Vec<PathBuf>,
}

#[derive(Parser)]
pub struct DecodeArgs {
    /// Treat the names as directories (no extension is stripped).
    #[arg(long = "dir")]
    pub dir: bool,

    /// Entry names to decode.
    #[arg(value_name = "NAME", required = true)]
    pub names: Vec<String>,
}

/// Menu output choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum OutputArg {
    Tree,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
