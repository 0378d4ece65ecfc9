//! Hygiene: enforces coding standards at test time.
//!
//! Scans the production sources under `src/` for patterns that crash the page
//! or swallow errors. Each pattern has a budget. The budget never grows: to
//! add one, fix an existing one first.
#![allow(clippy::absurd_extreme_comparisons)]

use std::fs;
use std::path::Path;

/// Pattern, budget, label.
type Budget = (&'static str, usize, &'static str);

// A panic inside a wasm frame callback kills the table for the whole page.
const UNWRAP: Budget = (".unwrap()", 0, ".unwrap()");
const EXPECT: Budget = (".expect(", 0, ".expect()");
const PANIC: Budget = ("panic!(", 0, "panic!()");
const UNREACHABLE: Budget = ("unreachable!(", 0, "unreachable!()");
const TODO: Budget = ("todo!(", 0, "todo!()");
const UNIMPLEMENTED: Budget = ("unimplemented!(", 0, "unimplemented!()");

// Silent loss.
const SILENT_DISCARD: Budget = ("let _ =", 0, "let _ =");
const DOT_OK: Budget = (".ok()", 0, ".ok()");

const ALLOW_DEAD_CODE: Budget = ("#[allow(dead_code)]", 0, "#[allow(dead_code)]");

struct SourceFile {
    path: String,
    content: String,
}

fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect(Path::new("src"), &mut files);
    files
}

fn collect(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect(&path, out);
            continue;
        }
        let path_str = path.to_string_lossy().to_string();
        if !path_str.ends_with(".rs") || path_str.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path: path_str, content });
        }
    }
}

fn check((pattern, max, label): Budget) {
    let hits: Vec<(String, usize)> = source_files()
        .into_iter()
        .map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (file.path, count)
        })
        .filter(|(_, count)| *count > 0)
        .collect();
    let found: usize = hits.iter().map(|(_, count)| count).sum();
    let listing = hits
        .iter()
        .map(|(path, count)| format!("  {path}: {count}"))
        .collect::<Vec<_>>()
        .join("\n");
    assert!(found <= max, "{label} budget exceeded: found {found}, max {max}.\n{listing}");
}

#[test]
fn sources_are_found() {
    assert!(source_files().iter().any(|f| f.path.ends_with("lib.rs")));
}

#[test]
fn unwrap_budget() {
    check(UNWRAP);
}

#[test]
fn expect_budget() {
    check(EXPECT);
}

#[test]
fn panic_budget() {
    check(PANIC);
}

#[test]
fn unreachable_budget() {
    check(UNREACHABLE);
}

#[test]
fn todo_budget() {
    check(TODO);
}

#[test]
fn unimplemented_budget() {
    check(UNIMPLEMENTED);
}

#[test]
fn silent_discard_budget() {
    check(SILENT_DISCARD);
}

#[test]
fn dot_ok_budget() {
    check(DOT_OK);
}

#[test]
fn allow_dead_code_budget() {
    check(ALLOW_DEAD_CODE);
}
