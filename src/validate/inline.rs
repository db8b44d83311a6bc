use crate::foundation::path::IrPath;
use crate::validate::diagnostic::{Diagnostic, DiagnosticKind};
use crate::validate::validator::Walk;
use serde_json::Value;

/// General inline run check: object shape, `text`, and each mark against the registry.
///
/// `marks` absent or `null` means no marks. An empty array is fine too.
pub(crate) fn check_run(w: &mut Walk<'_>, run: &Value, path: &IrPath) {
    let Some(run) = run.as_object() else {
        w.push(Diagnostic::shape(path.clone(), "must be an object"));
        return;
    };
    w.require(run, "text", path);

    let marks = match run.get("marks") {
        None | Some(Value::Null) => return,
        Some(Value::Array(marks)) => marks,
        Some(_) => {
            w.push(Diagnostic::shape(path.field("marks"), "must be an array"));
            return;
        }
    };

    let base = path.field("marks");
    for (i, mark) in marks.iter().enumerate() {
        let mark_path = base.index(i);
        let Some(mark) = mark.as_object() else {
            w.push(Diagnostic::shape(mark_path, "must be an object"));
            continue;
        };
        let ty = mark.get("type");
        let known = ty
            .and_then(Value::as_str)
            .is_some_and(|t| w.registry().is_mark_kind(t));
        if !known {
            w.push(Diagnostic::unsupported(mark_path.field("type"), ty));
        }
    }
}

/// Extra constraint layered on top of [`check_run`]: every mark `type` must be in `allowed`.
///
/// Shape problems (non-object run, non-array `marks`, non-object mark) were already reported by
/// [`check_run`] at the same paths and are skipped here.
pub(crate) fn restrict_marks(w: &mut Walk<'_>, run: &Value, path: &IrPath, allowed: &[&str]) {
    let Some(marks) = run.get("marks").and_then(Value::as_array) else {
        return;
    };
    let base = path.field("marks");
    for (i, mark) in marks.iter().enumerate() {
        if !mark.is_object() {
            continue;
        }
        let ok = mark
            .get("type")
            .and_then(Value::as_str)
            .is_some_and(|t| allowed.contains(&t));
        if !ok {
            let p = base.index(i).field("type");
            let message = format!("{p} only {} are allowed", allowed.join("/"));
            w.push(Diagnostic::new(DiagnosticKind::InvalidValue, p, message));
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/validate/inline.rs"]
mod tests;
