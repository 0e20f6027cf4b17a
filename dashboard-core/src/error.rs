use std::fmt::Display;

/// Shown when an error renders to an empty message.
pub const DEFAULT_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

/// Turn any error into the message stored in fetch and mutation state.
pub fn error_message<E: Display + ?Sized>(error: &E) -> String {
    let message = error.to_string();
    let trimmed = message.trim();
    if trimmed.is_empty() {
        DEFAULT_ERROR_MESSAGE.to_string()
    } else {
        trimmed.to_string()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("invalid value for {key}: {value:?}")]
    InvalidConfig { key: &'static str, value: String },
    #[error("a report needs at least one table")]
    EmptyReport,
    #[error("failed to build spreadsheet: {0}")]
    Spreadsheet(#[from] rust_xlsxwriter::XlsxError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_messages_get_a_default() {
        assert_eq!(error_message(""), DEFAULT_ERROR_MESSAGE);
        assert_eq!(error_message("  \n"), DEFAULT_ERROR_MESSAGE);
    }

    #[test]
    fn messages_are_trimmed() {
        assert_eq!(error_message(" network down "), "network down");
    }

    #[test]
    fn client_errors_use_their_display() {
        let err = payloads::ClientError::Rejected("Rider not found".into());
        assert_eq!(error_message(&err), "Rider not found");
    }
}
