use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use scm_core::{MenuRoots, compose_menu, decode, executable_dir, launch};
use scm_model::{ContextMenu, Selection};
use tracing::{debug, info_span};

use scm_cli::config::MenuConfig;
use scm_cli::render::{decode_table, render_menu};

use crate::cli::{ActivateArgs, DecodeArgs, LaunchArgs, MenuArgs, OutputArg, RootArgs};

pub fn run_menu(roots: &RootArgs, args: &MenuArgs) -> Result<()> {
    let folder = resolve_folder(args.folder.as_deref())?;
    let selection = Selection::new(args.paths.clone());
    let menu = build_menu(roots, &selection, &folder)?;
    match args.output {
        OutputArg::Tree => print!("{}", render_menu(&menu, args.show_paths)),
        OutputArg::Json => {
            let json = serde_json::to_string_pretty(&menu).context("serialize menu")?;
            println!("{json}");
        }
    }
    Ok(())
}

pub fn run_activate(roots: &RootArgs, args: &ActivateArgs) -> Result<()> {
    let folder = resolve_folder(args.folder.as_deref())?;
    let selection = Selection::new(args.paths.clone());
    let menu = build_menu(roots, &selection, &folder)?;
    let labels: Vec<&str> = args
        .label_path
        .split('/')
        .filter(|label| !label.is_empty())
        .collect();
    let program = menu
        .find_leaf(&labels)
        .and_then(|leaf| leaf.launch_path())
        .ok_or_else(|| anyhow!("no action at {:?} for this selection", args.label_path))?;
    launch(program, &selection, &folder)
        .with_context(|| format!("activate {}", args.label_path))?;
    Ok(())
}

pub fn run_launch(args: &LaunchArgs) -> Result<()> {
    let folder = resolve_folder(args.folder.as_deref())?;
    let selection = Selection::new(args.paths.clone());
    launch(&args.action, &selection, &folder)?;
    Ok(())
}

pub fn run_decode(args: &DecodeArgs) -> Result<()> {
    let decoded: Vec<_> = args
        .names
        .iter()
        .map(|name| (name.as_str(), decode(Path::new(name), args.dir)))
        .collect();
    let table = decode_table(decoded.iter().map(|(name, parsed)| (*name, parsed)));
    println!("{table}");
    Ok(())
}

fn build_menu(roots: &RootArgs, selection: &Selection, folder: &Path) -> Result<ContextMenu> {
    let span = info_span!("menu", folder = %folder.display());
    let _guard = span.enter();
    let roots = resolve_roots(roots)?;
    debug!(?roots, "resolved menu roots");
    compose_menu(&roots, selection, folder).context("build context menu")
}

/// Flags first, then the config file, then the folders next to the executable.
fn resolve_roots(args: &RootArgs) -> Result<MenuRoots> {
    let exe_dir = executable_dir().ok();
    let config = MenuConfig::discover(args.config.as_deref(), exe_dir.as_deref())?;
    let roots = config.roots(args.extensions_dir.clone(), args.top_level_dir.clone());
    Ok(match exe_dir {
        Some(dir) => roots.or(MenuRoots::beside(&dir)),
        None => roots,
    })
}

fn resolve_folder(folder: Option<&Path>) -> Result<PathBuf> {
    match folder {
        Some(folder) => Ok(folder.to_path_buf()),
        None => std::env::current_dir().context("determine current directory"),
    }
}
