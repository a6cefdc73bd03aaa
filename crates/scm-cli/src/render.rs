//! Text rendering of menus and decoded names for the terminal.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};
use scm_model::{ActionNode, ContextMenu, MenuItem, ParsedName};

const SEPARATOR_LINE: &str = "────────";

/// Renders `menu` as an indented tree, one row per line.
///
/// Groups end with `/`. With `show_paths`, leaves are followed by their
/// launch path.
pub fn render_menu(menu: &ContextMenu, show_paths: bool) -> String {
    let mut out = String::new();
    for item in &menu.items {
        match item {
            MenuItem::Separator => {
                out.push_str(SEPARATOR_LINE);
                out.push('\n');
            }
            MenuItem::Node(node) => {
                push_line(&mut out, "", node, show_paths);
                push_children(&mut out, "", node.children(), show_paths);
            }
        }
    }
    out
}

fn push_children(out: &mut String, prefix: &str, children: &[ActionNode], show_paths: bool) {
    for (index, child) in children.iter().enumerate() {
        let last = index + 1 == children.len();
        let branch = if last { "└── " } else { "├── " };
        push_line(out, &format!("{prefix}{branch}"), child, show_paths);
        let nested = format!("{prefix}{}", if last { "    " } else { "│   " });
        push_children(out, &nested, child.children(), show_paths);
    }
}

fn push_line(out: &mut String, prefix: &str, node: &ActionNode, show_paths: bool) {
    out.push_str(prefix);
    out.push_str(node.label());
    match node.launch_path() {
        None => out.push('/'),
        Some(path) if show_paths => {
            out.push_str("  → ");
            out.push_str(&path.display().to_string());
        }
        Some(_) => {}
    }
    out.push('\n');
}

/// Table of entry names with their decoded label and tags.
pub fn decode_table<'a>(rows: impl IntoIterator<Item = (&'a str, &'a ParsedName)>) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Name"),
        header_cell("Label"),
        header_cell("MIME tags"),
        header_cell("Extension tags"),
    ]);
    apply_table_style(&mut table);
    for (name, parsed) in rows {
        table.add_row(vec![
            Cell::new(name),
            Cell::new(&parsed.display_label).add_attribute(Attribute::Bold),
            tag_cell(parsed.mime_tags.iter()),
            tag_cell(parsed.extension_tags.iter()),
        ]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn tag_cell<'a>(tags: impl Iterator<Item = &'a String>) -> Cell {
    let joined = tags.map(String::as_str).collect::<Vec<_>>().join(", ");
    if joined.is_empty() {
        Cell::new("-").add_attribute(Attribute::Dim)
    } else {
        Cell::new(joined)
    }
}
