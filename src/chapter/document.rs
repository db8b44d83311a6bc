use crate::foundation::error::{IrError, IrResult};
use crate::validate::diagnostic::ValidationReport;
use crate::validate::validator::ChapterValidator;
use serde_json::Value;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::str::FromStr;

/// A decoded chapter IR document.
///
/// Decoding only checks that the input is JSON; the shape is whatever the generator produced
/// and is checked by [`Chapter::validate`].
#[derive(Debug, Clone, PartialEq)]
pub struct Chapter {
    value: Value,
}

impl Chapter {
    /// Wrap an already decoded value.
    pub fn from_value(value: Value) -> Self {
        Self { value }
    }

    /// Parse a chapter from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> IrResult<Self> {
        let value: Value = serde_json::from_reader(r)
            .map_err(|e| IrError::serde(format!("parse chapter JSON: {e}")))?;
        Ok(Self { value })
    }

    /// Parse a chapter from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> IrResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            IrError::Io(std::io::Error::new(
                e.kind(),
                format!("open chapter JSON '{}': {e}", path.display()),
            ))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Run structural validation.
    pub fn validate(&self, validator: &ChapterValidator) -> ValidationReport {
        validator.validate_chapter(&self.value)
    }

    /// Run structural validation and turn a failing report into [`IrError::Validation`].
    pub fn ensure_valid(&self, validator: &ChapterValidator) -> IrResult<()> {
        let report = self.validate(validator);
        if report.ok() {
            Ok(())
        } else {
            Err(IrError::validation(format!(
                "chapter IR validation failed:\n{report}"
            )))
        }
    }

    /// `chapterId`, when it is a string.
    pub fn chapter_id(&self) -> Option<&str> {
        self.value.get("chapterId").and_then(Value::as_str)
    }

    /// `title`, when it is a string.
    pub fn title(&self) -> Option<&str> {
        self.value.get("title").and_then(Value::as_str)
    }

    /// The raw decoded value.
    pub fn as_value(&self) -> &Value {
        &self.value
    }

    /// Unwrap into the raw decoded value.
    pub fn into_value(self) -> Value {
        self.value
    }
}

impl FromStr for Chapter {
    type Err = IrError;

    fn from_str(s: &str) -> IrResult<Self> {
        let value: Value = serde_json::from_str(s)
            .map_err(|e| IrError::serde(format!("parse chapter JSON: {e}")))?;
        Ok(Self { value })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/chapter/document.rs"]
mod tests;
