//! End-to-end tests for building menus from action folders.

use std::fs;
use std::path::Path;

use scm_core::{MatchProfile, MenuRoots, TreeBuilder, build, compose_menu};
use scm_model::{ActionNode, MenuItem, Selection};
use tempfile::TempDir;

fn touch(path: &Path) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, "").unwrap();
}

#[test]
fn convert_script_shown_for_text_selection() {
    let root = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    touch(&root.path().join("Convert.TXT.py"));
    fs::create_dir(root.path().join("Unused")).unwrap();
    let report = work.path().join("report.txt");
    touch(&report);

    let nodes = build(root.path(), &Selection::new(vec![report]), work.path()).unwrap();

    assert_eq!(
        nodes,
        vec![ActionNode::leaf("Convert", root.path().join("Convert.TXT.py"))]
    );
}

#[test]
fn json_script_hidden_for_csv_selection() {
    let root = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    touch(&root.path().join("Group/Inner.JSON.py"));
    let data = work.path().join("data.csv");
    touch(&data);

    let nodes = build(root.path(), &Selection::new(vec![data]), work.path()).unwrap();

    assert!(nodes.is_empty());
}

#[test]
fn folder_tagged_action_needs_selected_directory() {
    let root = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    touch(&root.path().join("Open Terminal.folder.py"));
    let project = work.path().join("project");
    fs::create_dir(&project).unwrap();
    let readme = work.path().join("README.md");
    touch(&readme);

    let with_dir = build(root.path(), &Selection::new(vec![project]), work.path()).unwrap();
    let with_file = build(root.path(), &Selection::new(vec![readme]), work.path()).unwrap();

    assert_eq!(with_dir.len(), 1);
    assert_eq!(with_dir[0].label(), "Open Terminal");
    assert!(with_file.is_empty());
}

#[test]
fn background_click_matches_folder_contents() {
    let root = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    touch(&root.path().join("Images/Shrink.IMAGE.py"));
    touch(&root.path().join("Sheets/Merge.csv.py"));
    touch(&work.path().join("holiday.png"));

    let nodes = build(root.path(), &Selection::empty(), work.path()).unwrap();

    let labels: Vec<&str> = nodes.iter().map(ActionNode::label).collect();
    assert_eq!(labels, vec!["Images"]);
}

#[test]
fn background_click_in_large_folder_shows_everything() {
    let root = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    touch(&root.path().join("Video.VIDEO.py"));
    for index in 0..60 {
        touch(&work.path().join(format!("notes-{index}.txt")));
    }

    let nodes = build(root.path(), &Selection::empty(), work.path()).unwrap();

    assert_eq!(nodes.len(), 1);
}

#[test]
fn deep_branch_without_matches_is_pruned() {
    let root = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    touch(&root.path().join("A/B/C/Play.VIDEO.py"));
    touch(&root.path().join("A/Count.txt.py"));
    let notes = work.path().join("notes.txt");
    touch(&notes);

    let builder = TreeBuilder::new(&Selection::new(vec![notes]), work.path());
    let subtree = builder.build_subtree(root.path()).unwrap();

    assert!(subtree.any_visible);
    assert_eq!(
        subtree.nodes,
        vec![ActionNode::group(
            "A",
            vec![ActionNode::leaf("Count", root.path().join("A/Count.txt.py"))]
        )]
    );
}

#[test]
fn building_twice_is_identical() {
    let root = TempDir::new().unwrap();
    touch(&root.path().join("One.py"));
    touch(&root.path().join("Two.TEXT.py"));
    touch(&root.path().join("Nested/Three.py"));
    touch(&root.path().join("Nested/Deeper/Four.md.py"));

    let selection: Selection = ["/tmp/readme.md"].into_iter().collect();
    let builder = TreeBuilder::new(&selection, root.path());

    let first = builder.build(root.path()).unwrap();
    let second = builder.build(root.path()).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.iter().map(ActionNode::leaf_count).sum::<usize>(), 4);
}

#[test]
fn unrestricted_profile_keeps_all_leaves() {
    let root = TempDir::new().unwrap();
    touch(&root.path().join("X/Only.APPLICATION.py"));

    let nodes = TreeBuilder::with_profile(MatchProfile::Unrestricted)
        .build(root.path())
        .unwrap();

    assert_eq!(nodes.len(), 1);
    assert_eq!(nodes[0].leaf_count(), 1);
}

#[test]
fn composed_menu_resolves_leaves_by_label() {
    let install = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    touch(&install.path().join("Extensions/Text/Upper.TXT.py"));
    touch(&install.path().join("TopLevelItems/Here.py"));
    let file = work.path().join("a.txt");
    touch(&file);

    let roots = MenuRoots::beside(install.path());
    let menu = compose_menu(&roots, &Selection::new(vec![file]), work.path()).unwrap();

    assert_eq!(menu.items.first(), Some(&MenuItem::Separator));
    assert_eq!(menu.items.last(), Some(&MenuItem::Separator));
    assert_eq!(menu.leaf_count(), 2);

    let upper = menu.find_leaf(&["Extensions", "Text", "Upper"]).unwrap();
    assert_eq!(
        upper.launch_path(),
        Some(install.path().join("Extensions/Text/Upper.TXT.py").as_path())
    );
    assert!(menu.find_leaf(&["Here"]).is_some());
}

#[cfg(unix)]
#[test]
fn broken_entry_is_skipped_and_siblings_kept() {
    let root = TempDir::new().unwrap();
    touch(&root.path().join("Run.py"));
    touch(&root.path().join("Tools/Zip.py"));
    std::os::unix::fs::symlink(root.path().join("gone.py"), root.path().join("Broken.py")).unwrap();
    std::os::unix::fs::symlink(root.path().join("gone"), root.path().join("Tools/Lost")).unwrap();

    let nodes = TreeBuilder::with_profile(MatchProfile::Unrestricted)
        .build(root.path())
        .unwrap();

    assert_eq!(
        nodes,
        vec![
            ActionNode::group(
                "Tools",
                vec![ActionNode::leaf("Zip", root.path().join("Tools/Zip.py"))]
            ),
            ActionNode::leaf("Run", root.path().join("Run.py")),
        ]
    );
}
