//! Suite file loading.

use std::io;
use std::path::Path;

use qltest_domain::TestCase;

/// Error type for suite file operations.
#[derive(Debug, thiserror::Error)]
pub enum SuiteFileError {
    /// The file could not be read.
    #[error("failed to read suite file: {0}")]
    Io(#[from] io::Error),

    /// JSON deserialization failed.
    #[error("invalid JSON suite: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML deserialization failed.
    #[error("invalid YAML suite: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The file extension is neither JSON nor YAML.
    #[error("unsupported suite file extension: {0}")]
    UnsupportedFormat(String),
}

/// Encoding of a suite file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuiteFormat {
    /// `.json`
    Json,
    /// `.yaml` / `.yml`
    Yaml,
}

impl SuiteFormat {
    /// Picks the format from the file extension.
    ///
    /// # Errors
    ///
    /// Returns [`SuiteFileError::UnsupportedFormat`] for any other extension.
    pub fn from_path(path: &Path) -> Result<Self, SuiteFileError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(SuiteFileError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Parses suite content.
///
/// Cases are not validated here; the runner checks each one when it is
/// reached.
///
/// # Errors
///
/// Returns an error if the content is not an array of test cases.
pub fn parse_suite(content: &str, format: SuiteFormat) -> Result<Vec<TestCase>, SuiteFileError> {
    Ok(match format {
        SuiteFormat::Json => serde_json::from_str(content)?,
        SuiteFormat::Yaml => serde_yaml::from_str(content)?,
    })
}

/// Reads and parses a suite file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, has an unsupported
/// extension, or does not parse.
pub async fn load_suite(path: &Path) -> Result<Vec<TestCase>, SuiteFileError> {
    let format = SuiteFormat::from_path(path)?;
    let content = tokio::fs::read_to_string(path).await?;
    parse_suite(&content, format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn test_format_from_path() {
        assert_eq!(SuiteFormat::from_path(Path::new("a.json")).ok(), Some(SuiteFormat::Json));
        assert_eq!(SuiteFormat::from_path(Path::new("a.YML")).ok(), Some(SuiteFormat::Yaml));
        assert_eq!(SuiteFormat::from_path(Path::new("a.yaml")).ok(), Some(SuiteFormat::Yaml));
        assert!(matches!(
            SuiteFormat::from_path(Path::new("a.toml")),
            Err(SuiteFileError::UnsupportedFormat(_))
        ));
        assert!(matches!(
            SuiteFormat::from_path(Path::new("suite")),
            Err(SuiteFileError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_parse_json() {
        let cases = parse_suite(
            r#"[
                {"name": "good request", "query": {"test": "test"}},
                {"positive": false, "name": "bad request", "query": "not json", "expected": "done"}
            ]"#,
            SuiteFormat::Json,
        )
        .expect("valid suite");

        assert_eq!(
            cases,
            vec![
                TestCase::positive("good request", json!({"test": "test"})),
                TestCase::negative("bad request", json!("not json")).expecting(json!("done")),
            ]
        );
    }

    #[test]
    fn test_parse_yaml() {
        let cases = parse_suite(
            "- name: good request\n  query:\n    test: test\n  expected: done\n\
             - name: missing query\n  positive: false\n",
            SuiteFormat::Yaml,
        )
        .expect("valid suite");

        assert_eq!(cases.len(), 2);
        assert_eq!(
            cases[0],
            TestCase::positive("good request", json!({"test": "test"})).expecting(json!("done"))
        );
        assert!(!cases[1].positive);
        assert_eq!(cases[1].query, None);
    }

    #[test]
    fn test_parse_rejects_non_array() {
        let result = parse_suite(r#"{"name": "alone"}"#, SuiteFormat::Json);
        assert!(matches!(result, Err(SuiteFileError::Json(_))));
    }

    #[tokio::test]
    async fn test_load_suite_from_file() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("suite.json");
        std::fs::write(&path, r#"[{"name": "ping", "query": {}}]"#).expect("write suite");

        let cases = load_suite(&path).await.expect("suite loads");
        assert_eq!(cases, vec![TestCase::positive("ping", json!({}))]);
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let dir = tempdir().expect("temp dir");
        let result = load_suite(&dir.path().join("absent.yaml")).await;
        assert!(matches!(result, Err(SuiteFileError::Io(_))));
    }
}
