use thiserror::Error;

#[derive(Error, Debug)]
pub enum MergeError {
    #[error("Couldn't open file {path}: {source}")]
    FileAccess {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Expected 3 fields, got {fields} for {line}")]
    LineParse { fields: usize, line: String },

    #[error("Cannot merge unequal entries: {left} and {right}")]
    IncompatibleMerge { left: String, right: String },

    #[error("Error with file {path}: {source}")]
    InFile {
        path: String,
        #[source]
        source: Box<MergeError>,
    },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Bad input or configuration; the run is aborted.
    High,
    /// A broken internal invariant.
    Critical,
}

impl ErrorSeverity {
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl MergeError {
    /// Attaches the input file a failure came from.
    pub fn in_file(self, path: &str) -> Self {
        match self {
            // already names the file
            err @ (MergeError::FileAccess { .. } | MergeError::InFile { .. }) => err,
            err => MergeError::InFile {
                path: path.to_string(),
                source: Box::new(err),
            },
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            MergeError::IncompatibleMerge { .. } | MergeError::SerializationError(_) => {
                ErrorSeverity::Critical
            }
            MergeError::InFile { source, .. } => source.severity(),
            _ => ErrorSeverity::High,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            MergeError::FileAccess { path, source } => {
                format!("Error with file {}: couldn't open file: {}", path, source)
            }
            MergeError::ConfigError { message } => message.clone(),
            MergeError::IncompatibleMerge { .. } => {
                format!("Internal error, please report it: {}", self)
            }
            MergeError::InFile { path, source } => {
                format!("Error with file {}: {}", path, source.user_friendly_message())
            }
            _ => self.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MergeError>;
