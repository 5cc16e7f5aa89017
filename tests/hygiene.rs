//! Hygiene checks enforced at test time.
//!
//! Scans `src/` for patterns that would let a theme call crash the page or
//! swallow a failure without logging it, and keeps browser bindings out of
//! the host-agnostic modules. Budgets are zero and stay there.

use std::fs;
use std::path::Path;

/// `(pattern, budget)`. Panics crash the page; discards hide failures.
const BUDGETS: &[(&str, usize)] = &[
    (".unwrap()", 0),
    (".expect(", 0),
    ("panic!(", 0),
    ("unreachable!(", 0),
    ("todo!(", 0),
    ("unimplemented!(", 0),
    ("let _ =", 0),
    (".ok()", 0),
    ("#[allow(dead_code)]", 0),
];

/// Only these files may talk to the browser directly.
const BROWSER_MODULES: &[&str] = &["browser.rs", "session.rs"];

struct SourceFile {
    path: String,
    content: String,
}

impl SourceFile {
    fn file_name(&self) -> &str {
        Path::new(&self.path).file_name().and_then(|n| n.to_str()).unwrap_or_default()
    }

    fn hits(&self, pattern: &str) -> usize {
        self.content.lines().filter(|line| line.contains(pattern)).count()
    }
}

/// Production `.rs` files under `src/`; `*_test.rs` files are skipped.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
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

#[test]
fn source_tree_is_scanned() {
    let files = source_files();
    assert!(files.iter().any(|f| f.file_name() == "controller.rs"), "run from the crate root");
}

#[test]
fn pattern_budgets() {
    let files = source_files();
    let mut failures = Vec::new();
    for &(pattern, budget) in BUDGETS {
        let hits: Vec<(String, usize)> = files
            .iter()
            .map(|f| (f.path.clone(), f.hits(pattern)))
            .filter(|(_, count)| *count > 0)
            .collect();
        let count: usize = hits.iter().map(|(_, c)| c).sum();
        if count > budget {
            let detail: Vec<String> = hits.iter().map(|(path, c)| format!("    {path}: {c}")).collect();
            failures.push(format!("  {pattern} found {count}, max {budget}\n{}", detail.join("\n")));
        }
    }
    assert!(failures.is_empty(), "hygiene budgets exceeded:\n{}", failures.join("\n"));
}

#[test]
fn browser_bindings_stay_in_browser_modules() {
    let offenders: Vec<String> = source_files()
        .iter()
        .filter(|f| !BROWSER_MODULES.contains(&f.file_name()))
        .filter(|f| f.hits("web_sys") > 0 || f.hits("wasm_bindgen") > 0)
        .map(|f| f.path.clone())
        .collect();
    assert!(offenders.is_empty(), "web-sys/wasm-bindgen used outside {BROWSER_MODULES:?}: {offenders:?}");
}
