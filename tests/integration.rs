//! Integration tests for rmtwiddle and dirtree


use harness::{TestTree, run_dirtree, run_rmtwiddle};

// ============================================================================
// rmtwiddle
// ============================================================================

fn backup_tree() -> TestTree {
    let tree = TestTree::new();
    tree.add_file("a.txt", "keep");
    tree.add_file("b.txt~", "backup");
    tree.add_file("sub/c.pyc", "bytecode");
    tree
}

#[test]
fn test_removes_twiddle_files_by_default() {
    let tree = backup_tree();

    let (stdout, _stderr, success) = run_rmtwiddle(tree.path(), &["."]);
    assert!(success, "rmtwiddle should succeed");
    assert!(
        stdout.contains("  Deleting ./b.txt~"),
        "should announce deletion: {}",
        stdout
    );
    assert!(!tree.exists("b.txt~"), "backup should be gone");
    assert!(tree.exists("a.txt"), "regular file should stay");
    assert!(tree.exists("sub/c.pyc"), ".pyc needs -pyc");
}

#[test]
fn test_pyc_switch() {
    let tree = backup_tree();

    let (stdout, _stderr, success) = run_rmtwiddle(tree.path(), &["-pyc", "."]);
    assert!(success);
    assert!(stdout.contains("./sub/c.pyc"), "should delete .pyc: {}", stdout);
    assert!(!tree.exists("b.txt~"));
    assert!(!tree.exists("sub/c.pyc"));
    assert!(tree.exists("a.txt"));
}

#[test]
fn test_pretend_deletes_nothing() {
    let tree = backup_tree();

    let (stdout, _stderr, success) = run_rmtwiddle(tree.path(), &["-p", "-pyc", "."]);
    assert!(success);
    assert!(stdout.starts_with("Just pretending\n"), "{}", stdout);
    assert!(stdout.contains("  'Deleting' ./b.txt~"), "{}", stdout);
    assert!(stdout.contains("  'Deleting' ./sub/c.pyc"), "{}", stdout);
    assert!(tree.exists("b.txt~"));
    assert!(tree.exists("sub/c.pyc"));
}

#[test]
fn test_pretend_reports_the_same_files_as_a_real_run() {
    let build = || {
        let tree = TestTree::new();
        tree.add_file("x~", "");
        tree.add_file("deep/er/.x.swp", "");
        tree.add_file("deep/.depend", "");
        tree.add_file("deep/tags", "");
        tree
    };

    let pretend_tree = build();
    let (pretend_out, _, _) = run_rmtwiddle(pretend_tree.path(), &["-p", "-all", "."]);
    let real_tree = build();
    let (real_out, _, _) = run_rmtwiddle(real_tree.path(), &["-all", "."]);

    let pretend_files: Vec<_> = pretend_out
        .lines()
        .filter_map(|l| l.strip_prefix("  'Deleting' "))
        .collect();
    let real_files: Vec<_> = real_out
        .lines()
        .filter_map(|l| l.strip_prefix("  Deleting "))
        .collect();
    assert_eq!(pretend_files, real_files);
    assert_eq!(real_files, vec!["./deep/.depend", "./deep/er/.x.swp", "./x~"]);
    assert!(real_tree.exists("deep/tags"), "-all does not include -tag");
}

#[test]
fn test_each_extra_switch() {
    let tree = TestTree::new();
    tree.add_file(".a.swp", "");
    tree.add_file(".a.swo", "");
    tree.add_file(".depend", "");
    tree.add_file("tags", "");
    tree.add_file("m.pyc", "");

    let (_, _, success) = run_rmtwiddle(tree.path(), &["-swp", "."]);
    assert!(success);
    assert!(!tree.exists(".a.swp") && !tree.exists(".a.swo"));
    assert!(tree.exists(".depend"));

    run_rmtwiddle(tree.path(), &["-dep", "."]);
    assert!(!tree.exists(".depend"));
    assert!(tree.exists("tags"));

    run_rmtwiddle(tree.path(), &["-tag", "."]);
    assert!(!tree.exists("tags"));
    assert!(tree.exists("m.pyc"));

    run_rmtwiddle(tree.path(), &["-pyc", "."]);
    assert!(!tree.exists("m.pyc"));
}

#[test]
fn test_notwiddle_keeps_backups() {
    let tree = backup_tree();

    let (stdout, _stderr, success) = run_rmtwiddle(tree.path(), &["-notwiddle", "-pyc", "."]);
    assert!(success);
    assert!(!stdout.contains("b.txt~"), "{}", stdout);
    assert!(tree.exists("b.txt~"));
    assert!(!tree.exists("sub/c.pyc"));
}

#[test]
fn test_verbose_announces_directories() {
    let tree = backup_tree();

    let (stdout, _stderr, success) = run_rmtwiddle(tree.path(), &["-v", "."]);
    assert!(success);
    assert!(stdout.contains("Processing .\n"), "{}", stdout);
    assert!(stdout.contains("Processing ./sub\n"), "{}", stdout);
}

#[test]
fn test_second_run_finds_nothing() {
    let tree = backup_tree();

    run_rmtwiddle(tree.path(), &["-pyc", "."]);
    let (stdout, _stderr, success) = run_rmtwiddle(tree.path(), &["-pyc", "."]);
    assert!(success);
    assert!(!stdout.contains("Deleting"), "{}", stdout);
}

#[test]
fn test_no_arguments_prints_usage() {
    let tree = TestTree::new();

    let (stdout, _stderr, success) = run_rmtwiddle(tree.path(), &[]);
    assert!(success, "usage is not an error");
    assert!(stdout.contains("Usage"), "{}", stdout);
}

#[test]
fn test_switches_without_directory() {
    let tree = TestTree::new();

    let (stdout, _stderr, success) = run_rmtwiddle(tree.path(), &["-p", "-swp"]);
    assert!(success);
    assert!(stdout.starts_with("No directory specified"), "{}", stdout);
    assert!(stdout.contains("Usage"));
}

#[test]
fn test_missing_directory_is_a_warning() {
    let tree = backup_tree();

    let (stdout, _stderr, success) = run_rmtwiddle(tree.path(), &["nowhere", "."]);
    assert!(success, "missing directory must not fail the run");
    assert!(
        stdout.contains("!!! Directory 'nowhere' does not exist"),
        "{}",
        stdout
    );
    assert!(!tree.exists("b.txt~"), "remaining roots are still cleaned");
}

#[test]
fn test_file_root_is_a_warning() {
    let tree = backup_tree();

    let (stdout, _stderr, success) = run_rmtwiddle(tree.path(), &["a.txt"]);
    assert!(success);
    assert!(stdout.contains("!!! 'a.txt' is not a directory"), "{}", stdout);
    assert!(tree.exists("a.txt"));
}

#[test]
fn test_unrecognized_switch_is_reported() {
    let tree = backup_tree();

    let (_stdout, stderr, success) = run_rmtwiddle(tree.path(), &["-zap", "."]);
    assert!(success);
    assert!(stderr.contains("'-zap'"), "{}", stderr);
    assert!(!tree.exists("b.txt~"));
}

#[test]
fn test_switches_after_a_directory_are_directories() {
    let tree = backup_tree();

    let (stdout, _stderr, success) = run_rmtwiddle(tree.path(), &[".", "-p"]);
    assert!(success);
    assert!(!stdout.contains("Just pretending"), "{}", stdout);
    assert!(
        stdout.contains("!!! Directory '-p' does not exist"),
        "{}",
        stdout
    );
    assert!(!tree.exists("b.txt~"), "-p after a directory is not a switch");
}

#[test]
fn test_json_events() {
    let tree = backup_tree();

    let (stdout, _stderr, success) = run_rmtwiddle(tree.path(), &["-json", "-p", "."]);
    assert!(success);
    let events: Vec<serde_json::Value> = stdout
        .lines()
        .map(|l| serde_json::from_str(l).expect("each line is JSON"))
        .collect();
    assert_eq!(events.len(), 1, "{}", stdout);
    assert_eq!(events[0]["event"], "would_delete");
    assert_eq!(events[0]["path"], "./b.txt~");
    assert_eq!(events[0]["kind"], "twiddle");
}

// ============================================================================
// dirtree
// ============================================================================

#[cfg(unix)]
fn sample_tree() -> TestTree {
    let tree = TestTree::new();
    tree.add_file("root/dirA/x", "");
    tree.add_executable("root/file.sh", "#!/bin/sh\n");
    tree
}

#[test]
#[cfg(unix)]
fn test_tree_box_drawing() {
    let tree = sample_tree();

    let (stdout, _stderr, success) = run_dirtree(tree.path(), &["root"]);
    assert!(success);
    assert_eq!(stdout, "root/\n├─dirA/\n│ └─x\n└─file.sh*\n");
}

#[test]
#[cfg(unix)]
fn test_tree_ascii() {
    let tree = sample_tree();

    for switch in ["-a", "-ascii", "--ascii"] {
        let (stdout, _stderr, success) = run_dirtree(tree.path(), &[switch, "root"]);
        assert!(success);
        assert_eq!(stdout, "root/\n|- dirA/\n|  `- x\n`- file.sh*\n", "{switch}");
    }
}

#[test]
#[cfg(unix)]
fn test_tree_fold() {
    let tree = sample_tree();
    tree.add_file("root/.git/HEAD", "ref");

    let (stdout, _stderr, success) =
        run_dirtree(tree.path(), &["-f", ".git", "-fold", "dirA", "root"]);
    assert!(success);
    assert_eq!(stdout, "root/\n├─.git/...\n├─dirA/...\n└─file.sh*\n");
}

#[test]
fn test_tree_fold_name_starting_with_dash() {
    let tree = TestTree::new();
    tree.add_file("root/-odd/inner/x", "");
    tree.add_file("root/plain", "");

    for switch in ["-f", "-fold", "--fold"] {
        let (stdout, stderr, success) = run_dirtree(tree.path(), &[switch, "-odd", "root"]);
        assert!(success, "{switch}: {stderr}");
        assert_eq!(stdout, "root/\n├─-odd/...\n└─plain\n", "{switch}");
        assert!(!stdout.contains("inner"));
    }
}

#[test]
fn test_tree_defaults_to_current_directory() {
    let tree = TestTree::new();
    let project = tree.add_dir("project");
    tree.add_file("project/readme", "");

    let (stdout, _stderr, success) = run_dirtree(&project, &[]);
    assert!(success);
    assert_eq!(stdout, "project/\n└─readme\n");
}

#[test]
fn test_tree_missing_directory() {
    let tree = TestTree::new();

    let (_stdout, stderr, success) = run_dirtree(tree.path(), &["nowhere"]);
    assert!(!success);
    assert!(
        stderr.contains("cannot access 'nowhere': No such file or directory"),
        "{}",
        stderr
    );
}

#[test]
fn test_tree_extra_arguments_are_reported() {
    let tree = TestTree::new();
    tree.add_file("one/f", "");

    let (stdout, stderr, success) = run_dirtree(tree.path(), &["one", "two", "-q"]);
    assert!(success, "extra arguments do not abort the run");
    assert!(stderr.contains("'two'"), "{}", stderr);
    assert!(stderr.contains("'-q'"), "{}", stderr);
    assert_eq!(stdout, "one/\n└─f\n");
}

#[test]
fn test_tree_fold_needs_a_value() {
    let tree = TestTree::new();

    let (_stdout, _stderr, success) = run_dirtree(tree.path(), &["-f"]);
    assert!(!success, "-f without a name is a usage error");
}

#[test]
fn test_tree_help() {
    let tree = TestTree::new();

    for switch in ["-h", "-help", "--help"] {
        let (stdout, _stderr, success) = run_dirtree(tree.path(), &[switch]);
        assert!(success);
        assert!(stdout.contains("Usage"), "{switch}: {stdout}");
    }
}

#[test]
fn test_tree_json_lines() {
    let tree = TestTree::new();
    tree.add_file("root/a", "");

    let (stdout, _stderr, success) = run_dirtree(tree.path(), &["-json", "root"]);
    assert!(success);
    let lines: Vec<serde_json::Value> = stdout
        .lines()
        .map(|l| serde_json::from_str(l).expect("each line is JSON"))
        .collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["label"], "root/");
    assert_eq!(lines[0]["depth"], 0);
    assert_eq!(lines[1]["connector_prefix"], "└─");
    assert_eq!(lines[1]["kind"], "file");
}
