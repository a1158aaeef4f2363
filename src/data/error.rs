use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the loading / aggregation pipeline.
///
/// `Parse` and `EmptyGroup` are recovered locally by the pipeline (the file
/// or group is skipped with a warning); the rest abort the plot request.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("path not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("walking {}: {source}", base.display())]
    Walk {
        base: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{file}: {reason}")]
    Parse { file: String, reason: String },

    #[error("run group '{group}' has no usable runs")]
    EmptyGroup { group: String },

    #[error("Please select at least one directory.")]
    NoSelection,

    #[error("none of the selected run groups contain usable runs")]
    AllGroupsEmpty { warnings: Vec<String> },
}

impl PipelineError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            PipelineError::NotFound { path }
        } else {
            PipelineError::Io { path, source }
        }
    }
}
