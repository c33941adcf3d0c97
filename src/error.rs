//! Fatal error kinds and their process exit codes.

/// Exit code for failures that have no dedicated [`AppcastError`] kind.
pub const EXIT_FAILURE: u8 = 1;

/// Errors that abort a run with a dedicated exit code.
///
/// These are attached as context to the underlying cause, so
/// `anyhow::Error::downcast_ref::<AppcastError>()` finds them anywhere in the
/// context chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppcastError {
    /// `GITHUB_REPOSITORY` is unset or empty
    MissingRepository,
    /// `GITHUB_REPOSITORY` is not in `owner/repo` form
    InvalidRepository(String),
    /// The releases request failed or returned an error status
    Fetch(String),
    /// The releases response body is not valid JSON
    Parse(String),
}

impl AppcastError {
    pub fn exit_code(&self) -> u8 {
        match self {
            AppcastError::MissingRepository | AppcastError::InvalidRepository(_) => 2,
            AppcastError::Fetch(_) => 3,
            AppcastError::Parse(_) => 4,
        }
    }
}

impl std::fmt::Display for AppcastError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppcastError::MissingRepository => write!(f, "GITHUB_REPOSITORY not set"),
            AppcastError::InvalidRepository(value) => write!(
                f,
                "Invalid GITHUB_REPOSITORY '{}'. Expected 'owner/repo'.",
                value
            ),
            AppcastError::Fetch(url) => write!(f, "Failed to fetch releases from {}", url),
            AppcastError::Parse(url) => {
                write!(f, "Failed to parse GitHub API response from {} as JSON", url)
            }
        }
    }
}

impl std::error::Error for AppcastError {}

/// Picks the process exit code for an error returned by a run.
pub fn exit_code(error: &anyhow::Error) -> u8 {
    error
        .downcast_ref::<AppcastError>()
        .map_or(EXIT_FAILURE, AppcastError::exit_code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_exit_codes_are_distinct() {
        assert_eq!(AppcastError::MissingRepository.exit_code(), 2);
        assert_eq!(AppcastError::InvalidRepository("x".into()).exit_code(), 2);
        assert_eq!(AppcastError::Fetch("u".into()).exit_code(), 3);
        assert_eq!(AppcastError::Parse("u".into()).exit_code(), 4);
    }

    #[test]
    fn test_exit_code_found_through_context() {
        let result: Result<(), std::io::Error> = Err(std::io::Error::other("connection reset"));
        let err = result
            .with_context(|| AppcastError::Fetch("https://example.com".into()))
            .context("Failed to generate appcast")
            .unwrap_err();

        assert_eq!(exit_code(&err), 3);
        let message = format!("{:#}", err);
        assert!(message.contains("https://example.com"));
        assert!(message.contains("connection reset"));
    }

    #[test]
    fn test_exit_code_for_unclassified_error() {
        let err = anyhow::anyhow!("disk full");
        assert_eq!(exit_code(&err), EXIT_FAILURE);
    }

    #[test]
    fn test_exit_code_for_bare_error() {
        let err = anyhow::Error::from(AppcastError::MissingRepository);
        assert_eq!(exit_code(&err), 2);
        assert_eq!(err.to_string(), "GITHUB_REPOSITORY not set");
    }
}
