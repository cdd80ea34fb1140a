//! End-to-end tests for the supervised tagger process.
//!
//! `/bin/sh` scripts stand in for the Java tagger: they speak the same
//! one-line-in, one-line-out protocol.

#![cfg(unix)]

use std::path::PathBuf;
use std::sync::Arc;

use french_parser::{Error, FrenchParser, MemoryLexicon, ProcessTagger, Request, Tagger, TaggerConfig, Tree};

// ============================================================================
// Helpers
// ============================================================================

fn sh(script: &str) -> TaggerConfig {
    TaggerConfig {
        interpreters: vec![PathBuf::from("/nonexistent/jre/bin/java"), PathBuf::from("/bin/sh")],
        fallback: Vec::new(),
        args: vec!["-c".into(), script.into()],
        current_dir: None,
    }
}

const ECHO_NPP: &str = "while read l; do echo \"${l}_NPP\"; done";

// ============================================================================
// Supervision
// ============================================================================

#[test]
fn test_restart_after_exit() {
    // Answers one request, then exits.
    let tagger = ProcessTagger::start(sh("read l; echo \"${l}_NC\"")).unwrap();
    let first_pid = tagger.pid();
    assert_eq!(tagger.tag("maison").unwrap(), "maison_NC");

    assert_eq!(tagger.tag("voiture").unwrap(), "voiture_NC");
    assert_ne!(tagger.pid(), first_pid);
}

#[test]
fn test_restart_fails_again() {
    let tagger = ProcessTagger::start(sh("exit 0")).unwrap();
    match tagger.tag("maison") {
        Err(Error::TaggerUnavailable(msg)) => assert!(msg.contains("after restart"), "{msg}"),
        other => panic!("Expected TaggerUnavailable, got {other:?}"),
    }
}

#[test]
fn test_old_process_is_gone_before_restart() {
    let dir = tempfile::tempdir().unwrap();
    let pid_file = dir.path().join("tagger.pid");
    // Reports whether the previous instance is still alive, answers once,
    // then closes its output while staying alive.
    let script = format!(
        "F='{}'; \
         if [ -f \"$F\" ] && kill -0 \"$(cat \"$F\")\" 2>/dev/null; then alive=yes; else alive=no; fi; \
         echo $$ > \"$F\"; \
         read l; echo \"${{l}}_${{alive}}\"; exec >&-; exec sleep 5",
        pid_file.display(),
    );
    let tagger = ProcessTagger::start(sh(&script)).unwrap();
    assert_eq!(tagger.tag("maison").unwrap(), "maison_no");
    assert_eq!(tagger.tag("voiture").unwrap(), "voiture_no");
}

#[test]
fn test_failed_restart_recovers_on_next_request() {
    let dir = tempfile::tempdir().unwrap();
    let interpreter = dir.path().join("sh");
    let ready = dir.path().join("ready");
    std::os::unix::fs::symlink("/bin/sh", &interpreter).unwrap();

    let script = format!(
        "if [ -f '{}' ]; then while read l; do echo \"${{l}}_NC\"; done; fi",
        ready.display(),
    );
    let config = TaggerConfig {
        interpreters: vec![interpreter.clone()],
        fallback: Vec::new(),
        args: vec!["-c".into(), script],
        current_dir: None,
    };
    let tagger = ProcessTagger::start(config).unwrap();

    // The running process exits at once and no interpreter is left to restart with.
    std::fs::remove_file(&interpreter).unwrap();
    assert!(matches!(tagger.tag("maison"), Err(Error::TaggerUnavailable(_))));
    assert_eq!(tagger.pid(), None);

    std::os::unix::fs::symlink("/bin/sh", &interpreter).unwrap();
    std::fs::write(&ready, "").unwrap();
    assert_eq!(tagger.tag("maison").unwrap(), "maison_NC");
    assert!(tagger.pid().is_some());
}

#[test]
fn test_fallback_command() {
    let config = TaggerConfig {
        interpreters: vec![PathBuf::from("/nonexistent/jre/bin/java")],
        fallback: vec!["/bin/sh".into()],
        args: vec!["-c".into(), ECHO_NPP.into()],
        current_dir: None,
    };
    let tagger = ProcessTagger::start(config).unwrap();
    assert_eq!(tagger.tag("Paris").unwrap(), "Paris_NPP");
}

#[test]
fn test_fallback_cannot_start() {
    let config = TaggerConfig {
        interpreters: vec![PathBuf::from("/nonexistent/jre/bin/java")],
        fallback: vec!["/nonexistent/bin/java".into()],
        args: Vec::new(),
        current_dir: None,
    };
    assert!(matches!(ProcessTagger::start(config), Err(Error::TaggerUnavailable(_))));
}

#[test]
fn test_working_directory() {
    let mut config = sh("while read l; do echo \"$(pwd)\"; done");
    config.current_dir = Some(PathBuf::from("/"));
    let tagger = ProcessTagger::start(config).unwrap();
    assert_eq!(tagger.tag("x").unwrap(), "/");
}

// ============================================================================
// Concurrency: one exchange at a time
// ============================================================================

#[test]
fn test_concurrent_requests_do_not_interleave() {
    let tagger = Arc::new(ProcessTagger::start(sh(ECHO_NPP)).unwrap());
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let tagger = Arc::clone(&tagger);
            std::thread::spawn(move || {
                for j in 0..20 {
                    let word = format!("mot{i}x{j}");
                    assert_eq!(tagger.tag(&word).unwrap(), format!("{word}_NPP"));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
}

// ============================================================================
// Full pipeline over a process
// ============================================================================

#[test]
fn test_pipeline_over_process() {
    let script = "while read l; do echo 'Où_ADVWH est_V la_DET France_NPP ?_PUNC'; done";
    let parser = FrenchParser::new(ProcessTagger::start(sh(script)).unwrap(), MemoryLexicon::new("fra"));
    assert_eq!(
        parser.parse("Où est la France ?").unwrap(),
        Tree::ask(Tree::resource("France"), Tree::resource("localisation")),
    );
}

#[test]
fn test_dead_tagger_is_a_non_answer() {
    let parser = FrenchParser::new(ProcessTagger::start(sh("exit 0")).unwrap(), MemoryLexicon::new("fra"));
    assert!(matches!(parser.parse("Où est la France ?"), Err(Error::TaggerUnavailable(_))));
    assert!(parser.answer(&Request::sentence("1", "fr", "Où est la France ?")).is_empty());
}
