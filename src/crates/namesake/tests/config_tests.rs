//! Credential loading from the environment and env files.

use namesake::{load_env_file, NamesakeConfig, NamesakeError, Provider};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_missing_credential_fails_before_client_exists() {
    let result = NamesakeConfig::from_env_var(Provider::Gemini, "NAMESAKE_IT_NEVER_SET_KEY");

    match result {
        Err(NamesakeError::Config(msg)) => {
            assert!(msg.contains("NAMESAKE_IT_NEVER_SET_KEY"), "{msg}");
        }
        other => panic!("expected config error, got {:?}", other),
    }
}

#[test]
fn test_env_file_provides_key() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "# local credentials").unwrap();
    writeln!(file, "NAMESAKE_IT_FILE_KEY=from-file").unwrap();

    assert!(load_env_file(file.path()).unwrap());

    let config = NamesakeConfig::from_env_var(Provider::OpenAi, "NAMESAKE_IT_FILE_KEY").unwrap();
    assert_eq!(config.llm.api_key, "from-file");
    assert_eq!(config.provider, Provider::OpenAi);
    assert_eq!(config.model(), "gpt-4o-mini");
}

#[test]
fn test_process_environment_wins_over_env_file() {
    std::env::set_var("NAMESAKE_IT_PRECEDENCE_KEY", "from-process");
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "NAMESAKE_IT_PRECEDENCE_KEY=from-file").unwrap();

    load_env_file(file.path()).unwrap();

    let config = NamesakeConfig::from_env_var(Provider::Gemini, "NAMESAKE_IT_PRECEDENCE_KEY").unwrap();
    assert_eq!(config.llm.api_key, "from-process");
}

#[test]
fn test_missing_env_file_is_not_an_error() {
    let dir = tempfile::tempdir().unwrap();

    let loaded = load_env_file(&dir.path().join(".env")).unwrap();

    assert!(!loaded);
}
