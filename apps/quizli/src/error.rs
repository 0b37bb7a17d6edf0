//! Error types for the quizli app.

use crate::db::DbError;
use quiz_core::QuizError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors loading a quiz document.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot read {} as a Word document: {message}", .path.display())]
    Docx { path: PathBuf, message: String },
}

/// Ways an interactive session can end without a saved result.
///
/// The display text of the early-exit variants is the message shown to
/// the user.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Goodbye!")]
    UserAbort,

    #[error("Folder does not exist.")]
    FolderNotFound(PathBuf),

    #[error("No Word files found in the folder.")]
    NoDocuments(PathBuf),

    #[error("Invalid choice.")]
    InvalidSelection(String),

    #[error("No questions found in the selected file.")]
    EmptyQuiz(String),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Quiz(#[from] QuizError),

    #[error(transparent)]
    Db(#[from] DbError),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl SessionError {
    /// Early exits are reported to the user and end the process normally.
    pub fn is_early_exit(&self) -> bool {
        matches!(
            self,
            Self::UserAbort
                | Self::FolderNotFound(_)
                | Self::NoDocuments(_)
                | Self::InvalidSelection(_)
                | Self::EmptyQuiz(_)
                | Self::Load(_)
        )
    }
}
