use std::fmt;
use std::ops::{Deref, DerefMut};

use arcstr::ArcStr;

/// The pipeline stage a [`TransformError`] originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorStage {
  Parse,
  Resolve,
  Assemble,
}

impl fmt::Display for ErrorStage {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Parse => f.write_str("parse"),
      Self::Resolve => f.write_str("resolve"),
      Self::Assemble => f.write_str("assemble"),
    }
  }
}

/// A non-fatal diagnostic attributed to one file, or to the project as a
/// whole when `path` is `None`. Builds collect these and always complete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformError {
  pub path: Option<ArcStr>,
  pub stage: ErrorStage,
  pub message: String,
}

impl TransformError {
  pub fn parse(path: impl Into<ArcStr>, message: impl Into<String>) -> Self {
    Self { path: Some(path.into()), stage: ErrorStage::Parse, message: message.into() }
  }

  pub fn resolve(path: impl Into<ArcStr>, message: impl Into<String>) -> Self {
    Self { path: Some(path.into()), stage: ErrorStage::Resolve, message: message.into() }
  }

  pub fn entry_missing() -> Self {
    Self {
      path: None,
      stage: ErrorStage::Assemble,
      message: "No usable entry point. Create an App.jsx or index.jsx file to get started."
        .to_string(),
    }
  }

  pub fn empty_project() -> Self {
    Self {
      path: None,
      stage: ErrorStage::Assemble,
      message: "The project has no files to preview.".to_string(),
    }
  }

}

impl fmt::Display for TransformError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match &self.path {
      Some(path) => write!(f, "[{}] {path}: {}", self.stage, self.message),
      None => write!(f, "[{}] {}", self.stage, self.message),
    }
  }
}

impl std::error::Error for TransformError {}

pub type BuildResult<T> = Result<T, TransformError>;

/// Accumulator for the per-build error list. Errors never abort a build;
/// they are appended here and rendered by the document assembler.
#[derive(Debug, Default)]
pub struct ErrorSink(pub Vec<TransformError>);

impl Deref for ErrorSink {
  type Target = Vec<TransformError>;

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

impl DerefMut for ErrorSink {
  fn deref_mut(&mut self) -> &mut Self::Target {
    &mut self.0
  }
}

impl From<TransformError> for ErrorSink {
  fn from(error: TransformError) -> Self {
    Self(vec![error])
  }
}

impl From<Vec<TransformError>> for ErrorSink {
  fn from(errors: Vec<TransformError>) -> Self {
    Self(errors)
  }
}

impl ErrorSink {
  pub fn into_inner(self) -> Vec<TransformError> {
    self.0
  }
}

#[test]
fn display_includes_stage_and_path() {
  let err = TransformError::parse("/App.jsx", "unexpected token");
  assert_eq!(err.to_string(), "[parse] /App.jsx: unexpected token");

  let err = TransformError::empty_project();
  assert!(err.to_string().starts_with("[assemble]"));
  assert!(err.path.is_none());
}
