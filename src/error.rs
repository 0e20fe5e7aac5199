/// Error types for termfolio
///
/// The interpreter itself never fails on user input. These errors cover the
/// infrastructure around it: terminal I/O, configuration and registry setup.
/// Uses thiserror for ergonomic error handling.

use thiserror::Error;

/// Main error type for termfolio operations
#[derive(Error, Debug)]
pub enum PortfolioError {
    /// I/O errors (terminal, config file)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Two registry entries share a name
    #[error("Duplicate command: {0}")]
    DuplicateCommand(String),

    /// Alias points at a name that is not declared
    #[error("Alias '{alias}' points at unknown command '{target}'")]
    UnknownAliasTarget { alias: String, target: String },

    /// Alias chain loops back on itself
    #[error("Alias cycle detected: {0}")]
    AliasCycle(String),

    /// Malformed style markup in static content
    #[error("Markup error: {0}")]
    Markup(String),

    /// Host could not open an external link
    #[error("Could not open {url}: {reason}")]
    LinkOpen { url: String, reason: String },

    /// Generic error with message
    #[error("{0}")]
    Generic(String),
}

/// Result type alias for termfolio operations
pub type Result<T> = std::result::Result<T, PortfolioError>;

/// Convert PortfolioError to a user-friendly error message
impl PortfolioError {
    pub fn user_message(&self) -> String {
        match self {
            PortfolioError::Io(e) => {
                format!("Terminal or file error. Details: {}", e)
            }
            PortfolioError::Serialization(e) => {
                format!("Data format error: {}", e)
            }
            PortfolioError::Config(msg) => {
                format!("Configuration issue: {}", msg)
            }
            PortfolioError::DuplicateCommand(name) => {
                format!("Command '{}' is declared twice", name)
            }
            PortfolioError::UnknownAliasTarget { alias, target } => {
                format!("Alias '{}' refers to '{}', which does not exist", alias, target)
            }
            PortfolioError::AliasCycle(chain) => {
                format!("Aliases loop back on themselves: {}", chain)
            }
            PortfolioError::Markup(msg) => {
                format!("Content markup is malformed: {}", msg)
            }
            PortfolioError::LinkOpen { url, .. } => {
                format!("Could not open {} in a browser", url)
            }
            PortfolioError::Generic(msg) => msg.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_user_messages() {
        let err = PortfolioError::DuplicateCommand("help".to_string());
        assert!(err.user_message().contains("help"));

        let err = PortfolioError::AliasCycle("a -> b -> a".to_string());
        assert!(err.user_message().contains("a -> b -> a"));
    }

    #[test]
    fn test_error_display() {
        let err = PortfolioError::UnknownAliasTarget {
            alias: "ls".to_string(),
            target: "projcts".to_string(),
        };
        let display = format!("{}", err);
        assert!(display.contains("unknown command 'projcts'"));
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: PortfolioError = io.into();
        assert!(matches!(err, PortfolioError::Io(_)));
    }
}
