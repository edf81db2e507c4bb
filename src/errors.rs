use git2::Error as Git2Error;
use std::fmt;
use std::io;

#[derive(Debug)]
pub enum LogiError {
    IoError(io::Error),
    GitError(Git2Error),
}

impl From<io::Error> for LogiError {
    fn from(error: io::Error) -> Self {
        LogiError::IoError(error)
    }
}

impl From<Git2Error> for LogiError {
    fn from(error: Git2Error) -> Self {
        LogiError::GitError(error)
    }
}

impl fmt::Display for LogiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogiError::IoError(e) => write!(f, "I/O error: {}", e),
            LogiError::GitError(e) => write!(f, "Git error: {}", e),
        }
    }
}

pub type LogiResult<T> = Result<T, LogiError>;
