use std::{fs, path::Path, time::Instant};

use seaglass_scan::{
    AbortReason, ContentScanner, ScanControl, ScanError, ScanPattern, SkippedFile,
};
use tempfile::TempDir;

fn write(root: &Path, relative: &str, content: &[u8]) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn project() -> TempDir {
    let temp = TempDir::new().unwrap();
    write(
        temp.path(),
        "index.html",
        br#"<div class="bg-teal-500 h-108">"#,
    );
    write(
        temp.path(),
        "src/components/card.rs",
        br#"html! { <p class="text-white dark:bg-aquamarine">{ "my-bg-teal-500-var" }</p> }"#,
    );
    write(temp.path(), "src/notes.md", b"shadow-teal-highlight");
    temp
}

#[test]
fn collects_candidates_across_patterns() {
    let temp = project();
    let scanner = ContentScanner::new(temp.path());

    let outcome = scanner
        .scan(&[ScanPattern::new("*.html"), ScanPattern::new("./src/**/*.rs")])
        .unwrap();

    assert_eq!(outcome.files.len(), 2);
    assert!(outcome.skipped.is_empty());
    for candidate in [
        "bg-teal-500",
        "h-108",
        "text-white",
        "dark:bg-aquamarine",
        "my-bg-teal-500-var",
    ] {
        assert!(
            outcome.candidates.contains(candidate),
            "missing {candidate}"
        );
    }
    assert!(!outcome.candidates.contains("shadow-teal-highlight"));
}

#[test]
fn single_star_stays_in_one_segment() {
    let temp = project();
    let scanner = ContentScanner::new(temp.path());

    let outcome = scanner.scan(&[ScanPattern::new("src/*.rs")]).unwrap();
    assert!(outcome.files.is_empty());

    let outcome = scanner.scan(&[ScanPattern::new("src/*/*.rs")]).unwrap();
    assert_eq!(outcome.files.len(), 1);
}

#[test]
fn extension_allowlist_filters_matches() {
    let temp = project();
    let scanner = ContentScanner::new(temp.path());

    let outcome = scanner
        .scan(&[ScanPattern::new("**/*").with_extensions(["md"])])
        .unwrap();

    assert_eq!(outcome.files.len(), 1);
    assert!(outcome.candidates.contains("shadow-teal-highlight"));
    assert!(!outcome.candidates.contains("bg-teal-500"));
}

#[test]
fn overlapping_patterns_read_each_file_once() {
    let temp = project();
    let scanner = ContentScanner::new(temp.path());

    let outcome = scanner
        .scan(&[ScanPattern::new("**/*.html"), ScanPattern::new("*.html")])
        .unwrap();
    assert_eq!(outcome.files.len(), 1);
}

#[test]
fn invalid_utf8_is_skipped() {
    let temp = project();
    write(temp.path(), "binary.html", &[0x62, 0x67, 0xff, 0xfe]);
    let scanner = ContentScanner::new(temp.path());

    let outcome = scanner.scan(&[ScanPattern::new("*.html")]).unwrap();

    assert_eq!(outcome.files.len(), 1);
    assert_eq!(outcome.skipped.len(), 1);
    match &outcome.skipped[0] {
        SkippedFile::Undecodable(e) => assert_eq!(e.valid_up_to, 2),
        other => panic!("expected a decode error, got {other:?}"),
    }
    assert!(outcome.candidates.contains("bg-teal-500"));
}

#[cfg(target_os = "linux")]
#[test]
fn unreadable_file_does_not_discard_others() {
    let temp = project();
    let scanner = ContentScanner::new(temp.path());

    // Matches as a regular file, but reading it fails with EIO
    let outcome = scanner
        .scan(&[ScanPattern::new("*.html"), ScanPattern::new("/proc/self/mem")])
        .unwrap();

    assert!(outcome.candidates.contains("bg-teal-500"));
    assert_eq!(outcome.files.len(), 1);
    assert_eq!(outcome.skipped.len(), 1);
    assert!(matches!(outcome.skipped[0], SkippedFile::Unreadable(_)));
    assert_eq!(outcome.skipped[0].path(), Path::new("/proc/self/mem"));
}

#[test]
fn base_dir_with_glob_metacharacters() {
    let temp = TempDir::new().unwrap();
    let base = temp.path().join("site[v2]");
    write(&base, "index.html", br#"<p class="bg-teal-500">"#);
    write(&base, "src/app.rs", br#"class="text-white""#);

    let outcome = ContentScanner::new(&base)
        .scan(&[ScanPattern::new("*.html"), ScanPattern::new("src/**/*.rs")])
        .unwrap();

    assert_eq!(outcome.files.len(), 2);
    assert!(outcome.candidates.contains("bg-teal-500"));
    assert!(outcome.candidates.contains("text-white"));
}

#[test]
fn scan_is_deterministic() {
    let temp = project();
    let scanner = ContentScanner::new(temp.path());
    let patterns = [ScanPattern::new("**/*")];

    let first = scanner.scan(&patterns).unwrap();
    let second = scanner.scan(&patterns).unwrap();
    assert_eq!(first.candidates, second.candidates);
    assert_eq!(first.files, second.files);
}

#[test]
fn expired_deadline_aborts() {
    let temp = project();
    let control = ScanControl::new().with_deadline(Instant::now());
    let scanner = ContentScanner::new(temp.path()).with_control(control);

    let err = scanner.scan(&[ScanPattern::new("**/*")]).unwrap_err();
    assert!(matches!(err, ScanError::Aborted(AbortReason::Deadline)));
}

#[test]
fn interrupt_aborts() {
    let temp = project();
    let control = ScanControl::new();
    control.interrupt();
    let scanner = ContentScanner::new(temp.path()).with_control(control);

    let err = scanner.scan(&[ScanPattern::new("**/*")]).unwrap_err();
    assert!(matches!(err, ScanError::Aborted(AbortReason::Interrupted)));
}

#[test]
fn invalid_pattern_is_an_error() {
    let temp = project();
    let scanner = ContentScanner::new(temp.path());

    let err = scanner.scan(&[ScanPattern::new("src/[*.rs")]).unwrap_err();
    assert!(matches!(err, ScanError::Pattern { .. }));
}
