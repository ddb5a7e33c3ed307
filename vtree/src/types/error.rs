use std::fmt;

/// Structural problems with a tree as a whole.
///
/// Missing paths are never errors. These are the cases where there's no
/// sensible tree to traverse at all.
#[derive(Debug, PartialEq)]
pub enum Error {
    /// The thing offered as a file system root is a file, not a directory.
    RootNotDirectory,

    /// A JSON document couldn't be read as a tree.
    Json(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            Error::RootNotDirectory => write!(f, "File system root must be a directory"),
            Error::Json(msg) => write!(f, "Invalid tree document: {}", msg),
        }
    }
}
impl std::error::Error for Error {}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e.to_string())
    }
}

impl From<Error> for std::io::Error {
    fn from(e: Error) -> Self {
        Self::other(e)
    }
}
