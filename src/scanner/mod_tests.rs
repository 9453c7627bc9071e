use std::fs;
use std::path::Path;

use super::*;
use tempfile::TempDir;

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn default_scanner() -> RoleScanner<ExtensionFilter, PrunePolicy> {
    RoleScanner::from_config(&Config::default()).unwrap()
}

fn scan_text(root: &Path) -> String {
    default_scanner().scan(root).unwrap().render()
}

#[test]
fn unmarked_file_renders_path_only() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "a/role.txt", "Handles auth");
    write(temp_dir.path(), "a/x.js", "export const x = 1;\n");

    assert_eq!(scan_text(temp_dir.path()), "a : Handles auth\na/x.js");
}

#[test]
fn marked_file_embeds_full_content() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "a/role.txt", "Styles");
    write(temp_dir.path(), "a/y.css", "// role: styles\nbody{}");

    let report = default_scanner().scan(temp_dir.path()).unwrap();

    assert_eq!(
        report.entries()[1],
        ScanEntry::File {
            path: "a/y.css".to_string(),
            content: Some("// role: styles\nbody{}".to_string()),
        }
    );
    assert_eq!(
        report.render(),
        "a : Styles\na/y.css\n\n// role: styles\nbody{}\n"
    );
}

#[test]
fn role_description_is_trimmed() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "a/role.txt", "\n  Handles auth \n\n");

    assert_eq!(scan_text(temp_dir.path()), "a : Handles auth");
}

#[test]
fn marker_line_may_have_leading_whitespace() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "a/role.txt", "A");
    write(temp_dir.path(), "a/x.js", "   // role: entry\r\nconsole.log(1);\r\n");

    let report = default_scanner().scan(temp_dir.path()).unwrap();

    assert!(matches!(
        &report.entries()[1],
        ScanEntry::File { content: Some(c), .. } if c == "   // role: entry\r\nconsole.log(1);\r\n"
    ));
}

#[test]
fn marker_on_later_line_is_ignored() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "a/role.txt", "A");
    write(temp_dir.path(), "a/x.js", "import x from 'x';\n// role: late\n");

    assert_eq!(scan_text(temp_dir.path()), "a : A\na/x.js");
}

#[test]
fn empty_file_is_listed_without_content() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "a/role.txt", "A");
    write(temp_dir.path(), "a/empty.mjs", "");

    assert_eq!(scan_text(temp_dir.path()), "a : A\na/empty.mjs");
}

#[test]
fn directory_without_marker_emits_nothing_but_is_descended() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "src/App.jsx", "// role: app\n");
    write(temp_dir.path(), "src/stores/role.txt", "State stores");
    write(temp_dir.path(), "src/stores/auth.jsx", "export {}");

    assert_eq!(
        scan_text(temp_dir.path()),
        "src/stores : State stores\nsrc/stores/auth.jsx"
    );
}

#[test]
fn only_direct_files_of_marked_directory_are_listed() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "a/role.txt", "A");
    write(temp_dir.path(), "a/top.js", "");
    write(temp_dir.path(), "a/nested/deep.js", "");

    assert_eq!(scan_text(temp_dir.path()), "a : A\na/top.js");
}

#[test]
fn ineligible_extensions_are_skipped() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "a/role.txt", "A");
    write(temp_dir.path(), "a/readme.md", "");
    write(temp_dir.path(), "a/data.json", "{}");
    write(temp_dir.path(), "a/main.ts", "");
    write(temp_dir.path(), "a/view.jsx", "");

    assert_eq!(scan_text(temp_dir.path()), "a : A\na/view.jsx");
}

#[test]
fn git_prefixed_directories_are_pruned() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), ".git-hooks/role.txt", "Hooks");
    write(temp_dir.path(), ".git-hooks/pre.js", "");
    write(temp_dir.path(), ".git/role.txt", "Git");
    write(temp_dir.path(), ".github/workflows/role.txt", "CI");
    write(temp_dir.path(), "a/role.txt", "A");

    assert_eq!(scan_text(temp_dir.path()), "a : A");
}

#[test]
fn git_prefixed_files_are_not_pruned() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "a/role.txt", "A");
    write(temp_dir.path(), "a/.gitlab.js", "");

    assert_eq!(scan_text(temp_dir.path()), "a : A\na/.gitlab.js");
}

#[test]
fn marked_root_renders_as_dot() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "role.txt", "Project root");
    write(temp_dir.path(), "vite.config.js", "");

    assert_eq!(
        scan_text(temp_dir.path()),
        ". : Project root\n./vite.config.js"
    );
}

#[test]
fn nested_paths_use_forward_slashes() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "frontEnd/src/Components/role.txt", "UI");
    write(temp_dir.path(), "frontEnd/src/Components/Nav.jsx", "");

    assert_eq!(
        scan_text(temp_dir.path()),
        "frontEnd/src/Components : UI\nfrontEnd/src/Components/Nav.jsx"
    );
}

#[test]
fn traversal_order_is_deterministic() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "b/role.txt", "B");
    write(temp_dir.path(), "b/z.js", "");
    write(temp_dir.path(), "b/a.css", "");
    write(temp_dir.path(), "a/role.txt", "A");
    write(temp_dir.path(), "a/child/role.txt", "A child");
    write(temp_dir.path(), "a/m.js", "");

    assert_eq!(
        scan_text(temp_dir.path()),
        "a : A\na/m.js\na/child : A child\nb : B\nb/a.css\nb/z.js"
    );
}

#[test]
fn directory_record_precedes_its_files() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "a/role.txt", "A");
    write(temp_dir.path(), "a/one.js", "");
    write(temp_dir.path(), "a/sub/role.txt", "Sub");
    write(temp_dir.path(), "a/sub/two.js", "");

    let report = default_scanner().scan(temp_dir.path()).unwrap();
    let paths: Vec<&str> = report
        .entries()
        .iter()
        .map(|entry| match entry {
            ScanEntry::Directory { path, .. } | ScanEntry::File { path, .. } => path.as_str(),
        })
        .collect();

    assert_eq!(paths, vec!["a", "a/one.js", "a/sub", "a/sub/two.js"]);
}

#[test]
fn rescanning_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "a/role.txt", "A");
    write(temp_dir.path(), "a/x.js", "// role: x\nlet x;");
    write(temp_dir.path(), "b/c/role.txt", "C");
    write(temp_dir.path(), "b/c/y.css", "");

    let first = scan_text(temp_dir.path());
    let second = scan_text(temp_dir.path());

    assert_eq!(first, second);
}

#[test]
fn empty_tree_yields_empty_report() {
    let temp_dir = TempDir::new().unwrap();
    let report = default_scanner().scan(temp_dir.path()).unwrap();

    assert!(report.is_empty());
    assert_eq!(report.render(), "");
}

#[test]
fn non_utf8_eligible_file_is_decode_error() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "a/role.txt", "A");
    fs::write(temp_dir.path().join("a/logo.css"), [0xff, 0xfe, 0x00]).unwrap();

    let err = default_scanner().scan(temp_dir.path()).unwrap_err();

    assert!(matches!(err, RoleReportError::Decode { ref path, .. } if path.ends_with("logo.css")));
}

#[test]
fn non_utf8_file_in_unmarked_directory_is_not_read() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir_all(temp_dir.path().join("a")).unwrap();
    fs::write(temp_dir.path().join("a/logo.css"), [0xff, 0xfe]).unwrap();

    assert!(default_scanner().scan(temp_dir.path()).unwrap().is_empty());
}

#[test]
fn non_utf8_marker_file_is_decode_error() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir_all(temp_dir.path().join("a")).unwrap();
    fs::write(temp_dir.path().join("a/role.txt"), [0xc3, 0x28]).unwrap();

    let err = default_scanner().scan(temp_dir.path()).unwrap_err();

    assert_eq!(err.error_type(), "Decode");
}

#[test]
fn missing_root_is_error() {
    let temp_dir = TempDir::new().unwrap();
    let err = default_scanner()
        .scan(&temp_dir.path().join("nope"))
        .unwrap_err();

    assert!(err.to_string().contains("not a directory"));
}

#[test]
fn custom_configuration_changes_markers_and_extensions() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "svc/PURPOSE", "Service layer");
    write(temp_dir.path(), "svc/api.ts", "# role: api\nexport {}");
    write(temp_dir.path(), "svc/util.js", "");
    write(temp_dir.path(), "node_modules/pkg/PURPOSE", "vendored");

    let mut config = Config::default();
    config.scanner.marker_file = "PURPOSE".to_string();
    config.scanner.extensions = vec![".ts".to_string()];
    config.scanner.exclude = vec!["**/node_modules".to_string()];
    config.content.marker = "# role:".to_string();

    let report = RoleScanner::from_config(&config)
        .unwrap()
        .scan(temp_dir.path())
        .unwrap();

    assert_eq!(
        report.render(),
        "svc : Service layer\nsvc/api.ts\n\n# role: api\nexport {}\n"
    );
}

#[test]
fn custom_filters_plug_into_scanner() {
    struct AcceptAll;
    impl FileFilter for AcceptAll {
        fn should_include(&self, _path: &Path) -> bool {
            true
        }
    }

    struct NeverDescend;
    impl DescentFilter for NeverDescend {
        fn should_descend(&self, _relative: &Path) -> bool {
            false
        }
    }

    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "role.txt", "Root");
    write(temp_dir.path(), "notes.txt", "hi");
    write(temp_dir.path(), "sub/role.txt", "Sub");

    let scanner = RoleScanner::new(AcceptAll, NeverDescend, "role.txt", "// role:");
    let report = scanner.scan(temp_dir.path()).unwrap();

    assert_eq!(report.render(), ". : Root\n./notes.txt\n./role.txt");
}

#[test]
fn content_if_marked_detects_first_line() {
    let temp_dir = TempDir::new().unwrap();
    let marked = temp_dir.path().join("m.js");
    let plain = temp_dir.path().join("p.js");
    fs::write(&marked, "// role: marked\nrest").unwrap();
    fs::write(&plain, "rest\n// role: nope").unwrap();

    assert_eq!(
        content_if_marked(&marked, "// role:").unwrap().as_deref(),
        Some("// role: marked\nrest")
    );
    assert_eq!(content_if_marked(&plain, "// role:").unwrap(), None);
}

#[test]
fn read_text_missing_file_is_file_read_error() {
    let temp_dir = TempDir::new().unwrap();
    let err = read_text(&temp_dir.path().join("gone.js")).unwrap_err();

    assert!(matches!(err, RoleReportError::FileRead { .. }));
}

#[cfg(unix)]
#[test]
fn symlinked_directory_is_not_followed_or_listed() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "a/role.txt", "A");
    write(temp_dir.path(), "target/role.txt", "T");
    std::os::unix::fs::symlink(temp_dir.path().join("target"), temp_dir.path().join("a/link.js"))
        .unwrap();

    assert_eq!(scan_text(temp_dir.path()), "a : A\ntarget : T");
}

#[test]
fn directory_named_like_marker_does_not_mark() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir_all(temp_dir.path().join("a/role.txt")).unwrap();
    write(temp_dir.path(), "a/x.js", "");

    assert_eq!(scan_text(temp_dir.path()), "");
}

#[cfg(unix)]
#[test]
fn dangling_marker_symlink_is_read_error() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "a/x.js", "");
    std::os::unix::fs::symlink(
        temp_dir.path().join("missing.txt"),
        temp_dir.path().join("a/role.txt"),
    )
    .unwrap();

    let err = default_scanner().scan(temp_dir.path()).unwrap_err();

    assert!(matches!(
        err,
        RoleReportError::FileRead { ref path, .. } if path.ends_with("a/role.txt")
    ));
}

#[cfg(unix)]
#[test]
fn marker_symlink_to_file_marks_directory() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "roles/a.txt", "Linked role\n");
    write(temp_dir.path(), "a/x.js", "");
    std::os::unix::fs::symlink(
        temp_dir.path().join("roles/a.txt"),
        temp_dir.path().join("a/role.txt"),
    )
    .unwrap();

    assert_eq!(scan_text(temp_dir.path()), "a : Linked role\na/x.js");
}
