// Copyright 2026
// SPDX-License-Identifier: Apache-2.0
//
// Concurrent lookups during dictionary reloads

use std::fs;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

use deny_filter::{DenyFilter, FilterConfig, LoadError};

#[test]
fn test_lookups_see_one_consistent_snapshot_during_reloads() {
    let dir = tempfile::tempdir().unwrap();
    let alpha = dir.path().join("alpha");
    let beta = dir.path().join("beta");
    fs::create_dir(&alpha).unwrap();
    fs::create_dir(&beta).unwrap();
    fs::write(alpha.join("words.txt"), "alpha\n").unwrap();
    fs::write(beta.join("words.txt"), "beta\n").unwrap();
    let alpha_glob = alpha.join("*.txt").to_str().unwrap().to_string();
    let beta_glob = beta.join("*.txt").to_str().unwrap().to_string();

    let filter = DenyFilter::open(FilterConfig::default(), &alpha_glob).unwrap();
    let done = AtomicBool::new(false);

    thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| {
                while !done.load(Ordering::Relaxed) {
                    let snapshot = filter.snapshot();
                    let spans = snapshot.scan("alpha beta");
                    assert_eq!(spans.len(), 1, "exactly one dictionary must be in effect");
                    let masked = filter.filter("alpha beta");
                    assert!(masked == "***** beta" || masked == "alpha ****", "{masked}");
                }
            });
        }

        for i in 0..50 {
            let pattern = if i % 2 == 0 { &beta_glob } else { &alpha_glob };
            assert_eq!(filter.reload(pattern).unwrap(), 1);
        }
        done.store(true, Ordering::Relaxed);
    });

    assert_eq!(filter.snapshot().generation(), 51);
}

#[test]
fn test_failed_reload_is_reported_and_harmless() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("words.txt"), "stale\n").unwrap();
    let pattern = dir.path().join("*.txt");

    let config = FilterConfig::default().with_require_sources(true);
    let filter = DenyFilter::open(config, pattern.to_str().unwrap()).unwrap();

    let empty = dir.path().join("*.missing");
    let err = filter.reload(empty.to_str().unwrap()).unwrap_err();
    assert!(matches!(err, LoadError::NoSources { .. }));
    assert!(filter.exists("stale"));
}

#[test]
fn test_invalid_utf8_line_does_not_abort_load() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("good.txt"), "kept\n").unwrap();
    fs::write(dir.path().join("binary.txt"), [0xffu8, 0xfe, b'\n', b'o', b'k', b'\n']).unwrap();
    let pattern = dir.path().join("*.txt");

    let filter = DenyFilter::default();
    let report = filter.reload_with_report(pattern.to_str().unwrap()).unwrap();
    assert_eq!(report.sources.len(), 2);
    assert_eq!(report.warnings.len(), 1);
    assert!(filter.exists("kept"));
    assert!(filter.exists("ok"));
}

#[cfg(unix)]
#[test]
fn test_unreadable_source_does_not_abort_load() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "survivor\n").unwrap();
    let dangling = dir.path().join("b.txt");
    std::os::unix::fs::symlink(dir.path().join("missing-target"), &dangling).unwrap();
    let pattern = dir.path().join("*.txt");

    let filter = DenyFilter::from_words(FilterConfig::default(), ["previous"]);
    let report = filter.reload_with_report(pattern.to_str().unwrap()).unwrap();

    assert_eq!(report.sources, vec![dir.path().join("a.txt")]);
    assert_eq!(report.warnings.len(), 1);
    assert_eq!(report.warnings[0].path, dangling);
    assert_eq!(report.warnings[0].line, None);
    assert!(filter.exists("a survivor"));
    assert!(!filter.exists("previous"));
    assert_eq!(filter.snapshot().source_count(), 1);
}
