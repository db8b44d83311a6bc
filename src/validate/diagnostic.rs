use crate::foundation::path::IrPath;
use serde_json::Value;
use std::fmt;

/// Category of a structural defect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// A required key is absent.
    MissingField,
    /// Present, but not the required container kind, or empty where emptiness is disallowed.
    WrongShape,
    /// Value outside its fixed allowed set.
    InvalidValue,
    /// A constraint spanning two fields fails.
    Inconsistent,
    /// `type` discriminator outside the closed vocabulary.
    UnknownType,
    /// Nesting deeper than the configured limit.
    TooDeep,
}

/// One path-qualified defect found in a chapter.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Diagnostic {
    /// Category.
    pub kind: DiagnosticKind,
    /// Location of the offending node.
    pub path: IrPath,
    /// Human-readable message, already prefixed with the rendered path.
    pub message: String,
}

impl Diagnostic {
    pub(crate) fn new(kind: DiagnosticKind, path: IrPath, message: String) -> Self {
        Self {
            kind,
            path,
            message,
        }
    }

    /// `<path> is missing`.
    pub(crate) fn missing(path: IrPath) -> Self {
        let message = format!("{path} is missing");
        Self::new(DiagnosticKind::MissingField, path, message)
    }

    /// `<path> <what>`, for shape problems.
    pub(crate) fn shape(path: IrPath, what: &str) -> Self {
        let message = format!("{path} {what}");
        Self::new(DiagnosticKind::WrongShape, path, message)
    }

    /// `<path> is invalid: <value>`.
    pub(crate) fn invalid(path: IrPath, value: Option<&Value>) -> Self {
        let message = format!("{path} is invalid: {}", ValueRepr(value));
        Self::new(DiagnosticKind::InvalidValue, path, message)
    }

    /// `<path> is not supported: <value>`.
    pub(crate) fn unsupported(path: IrPath, value: Option<&Value>) -> Self {
        let message = format!("{path} is not supported: {}", ValueRepr(value));
        Self::new(DiagnosticKind::UnknownType, path, message)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Renders an offending value inside a message: strings bare, absent as `null`, anything
/// else as compact JSON.
pub(crate) struct ValueRepr<'a>(pub(crate) Option<&'a Value>);

impl fmt::Display for ValueRepr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            None => f.write_str("null"),
            Some(Value::String(s)) => f.write_str(s),
            Some(other) => write!(f, "{other}"),
        }
    }
}

/// Outcome of validating one chapter.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct ValidationReport {
    /// IR version the chapter was checked against.
    pub schema_version: String,
    /// Defects in tree-walk order.
    pub errors: Vec<Diagnostic>,
}

impl ValidationReport {
    /// `true` when no defect was found.
    pub fn ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Rendered diagnostic messages, in order.
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(|d| d.message.clone()).collect()
    }

    /// The `(ok, errors)` pair callers persist or forward upstream.
    pub fn into_parts(self) -> (bool, Vec<String>) {
        let ok = self.ok();
        let msgs = self.errors.into_iter().map(|d| d.message).collect();
        (ok, msgs)
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.errors.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{e}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/validate/diagnostic.rs"]
mod tests;
