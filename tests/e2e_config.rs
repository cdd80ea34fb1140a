//! Configuration loaded through `PPP_FRENCHPARSER_CONFIG`.
//!
//! The environment is process-wide, so every case lives in one test.

use std::io::Write;
use std::path::PathBuf;

use french_parser::config::CONFIG_PATH_VARIABLE;
use french_parser::{Config, Error};

#[test]
fn test_config_from_env() {
    // SAFETY: no other test in this binary reads or writes the environment.
    unsafe { std::env::remove_var(CONFIG_PATH_VARIABLE) };
    match Config::from_env() {
        Err(Error::Config(msg)) => assert!(msg.contains(CONFIG_PATH_VARIABLE), "{msg}"),
        other => panic!("Expected Config error, got {other:?}"),
    }

    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"class_path": "lib/tagger.jar", "working_dir": "/srv/tagger", "cache_size": 8}}"#).unwrap();
    // SAFETY: as above.
    unsafe { std::env::set_var(CONFIG_PATH_VARIABLE, file.path()) };

    let config = Config::from_env().unwrap();
    assert_eq!(config.class_path, "lib/tagger.jar");
    assert_eq!(config.cache_size, 8);
    assert_eq!(config.tagger().current_dir, Some(PathBuf::from("/srv/tagger")));

    // SAFETY: as above.
    unsafe { std::env::set_var(CONFIG_PATH_VARIABLE, "/nonexistent/french-parser.json") };
    assert!(matches!(Config::from_env(), Err(Error::Config(_))));
}
