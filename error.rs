use std::path::PathBuf;
use thiserror::Error;

/// Fatal pipeline errors. Classification failures never reach this type
/// (they collapse to `FileKind::Unknown`), and report-write failures are
/// logged rather than raised.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("cannot list directory {}: {source}", path.display())]
    FilesystemAccess {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot read {}: {source}", path.display())]
    ContentRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("no files found under {}", .0.display())]
    EmptyFileList(PathBuf),

    #[error("cannot encode chart data: {0}")]
    ChartEncode(#[from] serde_json::Error),
}
