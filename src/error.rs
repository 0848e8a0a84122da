use std::fmt;
use std::io;

/// Error returned while encoding or committing htmx response headers
///
/// Encoding problems are reported from `encode()`/`headers()`/`commit()`,
/// sink problems from `commit()` and the `render_*` family. Nothing in this
/// crate retries; the caller decides whether to rebuild the whole response.
#[derive(Debug)]
pub enum HxError {
    /// A trigger detail or location context could not be serialized to JSON
    Encoding {
        /// What was being encoded (header name, trigger name, ...)
        subject: String,
        /// Serializer message
        message: String,
    },
    /// A swap style token that is not part of the protocol
    UnknownSwapStyle {
        /// The rejected token
        token: String,
    },
    /// The sink rejected a header value (control characters, ...)
    InvalidHeaderValue {
        /// Header being written
        header: &'static str,
        /// The rejected value
        value: String,
    },
    /// The sink rejected a status code
    InvalidStatus(u16),
    /// Writing the response body failed
    Write {
        /// What the write was for
        context: &'static str,
        /// Underlying I/O failure
        source: io::Error,
    },
    /// A template failed to render before any body byte was written
    Render {
        /// Renderer message
        message: String,
    },
    /// Configuration could not be loaded
    Config {
        /// Parser message
        message: String,
    },
}

impl HxError {
    pub(crate) fn encoding(subject: impl Into<String>, err: impl fmt::Display) -> Self {
        HxError::Encoding {
            subject: subject.into(),
            message: err.to_string(),
        }
    }
}

impl fmt::Display for HxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HxError::Encoding { subject, message } => {
                write!(f, "htmx encoding error: cannot serialize {subject}: {message}")
            }
            HxError::UnknownSwapStyle { token } => {
                write!(
                    f,
                    "htmx encoding error: unknown swap style '{token}'. \
                    Expected one of innerHTML, outerHTML, beforebegin, afterbegin, \
                    beforeend, afterend, delete, none"
                )
            }
            HxError::InvalidHeaderValue { header, value } => {
                write!(f, "invalid value for header {header}: {value:?}")
            }
            HxError::InvalidStatus(status) => write!(f, "invalid HTTP status code {status}"),
            HxError::Write { context, source } => write!(f, "{context}: {source}"),
            HxError::Render { message } => write!(f, "template render failed: {message}"),
            HxError::Config { message } => write!(f, "invalid htmx configuration: {message}"),
        }
    }
}

impl std::error::Error for HxError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HxError::Write { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_write_error_keeps_source() {
        let err = HxError::Write {
            context: "writing htmx response body",
            source: io::Error::new(io::ErrorKind::BrokenPipe, "connection closed"),
        };
        assert_eq!(
            err.to_string(),
            "writing htmx response body: connection closed"
        );
        assert!(err.source().is_some());
    }

    #[test]
    fn test_encoding_error_names_subject() {
        let err = HxError::encoding("trigger 'saved'", "key must be a string");
        assert!(err.to_string().contains("trigger 'saved'"));
        assert!(err.source().is_none());
    }
}
