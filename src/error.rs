use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Invalid interval \"{input}\" (expected a positive number of seconds)")]
    InvalidInterval { input: f64 },

    #[error("Invalid timeout \"{input}\" (expected a positive number of seconds)")]
    InvalidTimeout { input: f64 },

    #[error("{0}")]
    Load(#[from] LoadError),

    #[error("Failed to write output: {0}")]
    Output(std::io::Error),
}

/// Failure to obtain a session snapshot; aborts the whole render cycle
#[derive(Debug, Error)]
pub(crate) enum LoadError {
    #[error("Session data unavailable from {source_name}: {reason}")]
    SourceUnavailable { source_name: String, reason: String },

    #[error("Malformed session data from {source_name}: {reason}")]
    MalformedSnapshot { source_name: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_error_display_interval() {
        let e = AppError::InvalidInterval { input: -1.0 };
        assert_eq!(
            e.to_string(),
            r#"Invalid interval "-1" (expected a positive number of seconds)"#
        );
    }

    #[test]
    fn load_error_source_unavailable() {
        let e = LoadError::SourceUnavailable {
            source_name: "output.json".to_string(),
            reason: "No such file or directory".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "Session data unavailable from output.json: No such file or directory"
        );
    }

    #[test]
    fn load_error_malformed() {
        let e = LoadError::MalformedSnapshot {
            source_name: "stdin".to_string(),
            reason: "missing field `drivers`".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "Malformed session data from stdin: missing field `drivers`"
        );
    }

    #[test]
    fn app_error_from_load_error() {
        let load = LoadError::MalformedSnapshot {
            source_name: "x".to_string(),
            reason: "bad".to_string(),
        };
        let app: AppError = load.into();
        assert_eq!(app.to_string(), "Malformed session data from x: bad");
    }
}
