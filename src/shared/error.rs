use std::fmt;
use thiserror::Error;

/// Exit codes for the command-line entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// The digest was fetched, formatted and handed to the mail transport
    Success = 0,
    /// Any fetch, parse, configuration or delivery failure
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for digest generation and delivery.
///
/// Every variant is fatal: the run stops at the first one raised.
#[derive(Debug, Error)]
pub enum DigestError {
    #[error("Failed to fetch page: {url}\nDetails: {details}\n\n💡 Hint: Please check your internet connection")]
    FetchError { url: String, details: String },

    #[error("Page request returned HTTP {status}: {url}\n\n💡 Hint: The service may be down or the page path may have changed")]
    HttpStatusError { url: String, status: u16 },

    #[error("Unexpected {row_kind} row layout: expected {expected} cells, got {actual}\n\n💡 Hint: The page layout may have changed")]
    RowParseError {
        row_kind: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Failed to submit message via {program}\nDetails: {details}\n\n💡 Hint: Please verify that a local mail transfer agent is installed and configured")]
    DeliveryError { program: String, details: String },

    /// Validation error for configuration values
    #[error("Validation error: {message}")]
    Validation { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 3);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (3)"
        );
    }

    #[test]
    fn test_fetch_error_display() {
        let error = DigestError::FetchError {
            url: "http://heavens-above.com/IridiumFlares.aspx?".to_string(),
            details: "connection refused".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to fetch page"));
        assert!(display.contains("IridiumFlares.aspx"));
        assert!(display.contains("connection refused"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_http_status_error_display() {
        let error = DigestError::HttpStatusError {
            url: "http://heavens-above.com/PassSummary.aspx?satid=25544".to_string(),
            status: 503,
        };
        let display = format!("{}", error);
        assert!(display.contains("HTTP 503"));
        assert!(display.contains("satid=25544"));
    }

    #[test]
    fn test_row_parse_error_display() {
        let error = DigestError::RowParseError {
            row_kind: "pass",
            expected: 11,
            actual: 4,
        };
        let display = format!("{}", error);
        assert!(display.contains("Unexpected pass row layout"));
        assert!(display.contains("expected 11 cells, got 4"));
    }

    #[test]
    fn test_delivery_error_display() {
        let error = DigestError::DeliveryError {
            program: "/usr/sbin/sendmail".to_string(),
            details: "exit status: 75".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to submit message via /usr/sbin/sendmail"));
        assert!(display.contains("exit status: 75"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_validation_error_display() {
        let error = DigestError::Validation {
            message: "recipient must not be empty".to_string(),
        };
        assert_eq!(
            format!("{}", error),
            "Validation error: recipient must not be empty"
        );
    }
}
