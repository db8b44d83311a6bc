//! Per-kind block checkers and the kind -> checker table.
//!
//! Each checker receives a block already known to be an object with a registered `type`, the
//! block's own path and its nesting depth. Checkers that recurse hand nested blocks back to
//! [`Walk::block`] at `depth + 1`.

use crate::foundation::path::IrPath;
use crate::validate::diagnostic::{Diagnostic, DiagnosticKind};
use crate::validate::inline::{check_run, restrict_marks};
use crate::validate::validator::Walk;
use serde_json::{Map, Value};

/// Signature shared by all block checkers.
pub(crate) type BlockCheck = fn(&mut Walk<'_>, &Map<String, Value>, &IrPath, usize);

/// Kind tag -> checker. A new block kind is one entry here plus one entry in the registry.
const CHECKERS: &[(&str, BlockCheck)] = &[
    ("heading", check_heading),
    ("paragraph", check_paragraph),
    ("list", check_list),
    ("table", check_table),
    ("blockquote", check_blockquote),
    ("engineQuote", check_engine_quote),
    ("callout", check_callout),
    ("kpiGrid", check_kpi_grid),
    ("widget", check_widget),
    ("code", check_code),
    ("math", check_math),
    ("figure", check_figure),
];

const LIST_TYPES: &[&str] = &["ordered", "bullet", "task"];
const CALLOUT_TONES: &[&str] = &["info", "warning", "success", "danger"];
/// Marks allowed on runs inside `engineQuote` paragraphs.
pub(crate) const ENGINE_QUOTE_MARKS: &[&str] = &["bold", "italic"];

pub(crate) fn checker_for(kind: &str) -> Option<BlockCheck> {
    CHECKERS
        .iter()
        .find(|(k, _)| *k == kind)
        .map(|(_, check)| *check)
}

fn one_of(value: Option<&Value>, allowed: &[&str]) -> bool {
    value
        .and_then(Value::as_str)
        .is_some_and(|s| allowed.contains(&s))
}

fn check_enum(
    w: &mut Walk<'_>,
    block: &Map<String, Value>,
    key: &'static str,
    allowed: &[&str],
    path: &IrPath,
) {
    let value = block.get(key);
    if !one_of(value, allowed) {
        w.push(Diagnostic::invalid(path.field(key), value));
    }
}

fn check_heading(w: &mut Walk<'_>, block: &Map<String, Value>, path: &IrPath, _depth: usize) {
    match block.get("level") {
        Some(level) if level.is_i64() || level.is_u64() => {}
        level => {
            let kind = if level.is_none() {
                DiagnosticKind::MissingField
            } else {
                DiagnosticKind::WrongShape
            };
            let p = path.field("level");
            let message = format!("{p} must be an integer");
            w.push(Diagnostic::new(kind, p, message));
        }
    }
    w.require(block, "text", path);
    w.require(block, "anchor", path);
}

fn check_paragraph(w: &mut Walk<'_>, block: &Map<String, Value>, path: &IrPath, _depth: usize) {
    check_inlines(w, block, path, None);
}

/// Check each run of `block.inlines`; with `allowed`, each run's marks are also restricted to
/// that set right after its general check.
fn check_inlines(
    w: &mut Walk<'_>,
    block: &Map<String, Value>,
    path: &IrPath,
    allowed: Option<&[&str]>,
) {
    let Some(inlines) = w.non_empty_array(block, "inlines", path) else {
        return;
    };
    let base = path.field("inlines");
    for (i, run) in inlines.iter().enumerate() {
        let run_path = base.index(i);
        check_run(w, run, &run_path);
        if let Some(allowed) = allowed {
            restrict_marks(w, run, &run_path, allowed);
        }
    }
}

fn check_list(w: &mut Walk<'_>, block: &Map<String, Value>, path: &IrPath, depth: usize) {
    check_enum(w, block, "listType", LIST_TYPES, path);

    let Some(items) = w.non_empty_array(block, "items", path) else {
        return;
    };
    let base = path.field("items");
    for (i, item) in items.iter().enumerate() {
        let item_path = base.index(i);
        match item.as_array() {
            Some(sub) if !sub.is_empty() => w.block_seq(sub, &item_path, depth + 1),
            _ => w.push(Diagnostic::shape(
                item_path,
                "must be a non-empty array of blocks",
            )),
        }
    }
}

fn check_table(w: &mut Walk<'_>, block: &Map<String, Value>, path: &IrPath, depth: usize) {
    let Some(rows) = w.non_empty_array(block, "rows", path) else {
        return;
    };
    let rows_path = path.field("rows");
    for (r, row) in rows.iter().enumerate() {
        let row_path = rows_path.index(r);
        let cells = match row.get("cells").and_then(Value::as_array) {
            Some(cells) if !cells.is_empty() => cells,
            _ => {
                w.push(Diagnostic::shape(
                    row_path.field("cells"),
                    "must be a non-empty array",
                ));
                continue;
            }
        };

        let cells_path = row_path.field("cells");
        for (c, cell) in cells.iter().enumerate() {
            let cell_path = cells_path.index(c);
            let Some(cell) = cell.as_object() else {
                w.push(Diagnostic::shape(cell_path, "must be an object"));
                continue;
            };
            if let Some(blocks) = w.non_empty_array(cell, "blocks", &cell_path) {
                w.block_seq(blocks, &cell_path.field("blocks"), depth + 1);
            }
        }
    }
}

fn check_blockquote(w: &mut Walk<'_>, block: &Map<String, Value>, path: &IrPath, depth: usize) {
    if let Some(blocks) = w.non_empty_array(block, "blocks", path) {
        w.block_seq(blocks, &path.field("blocks"), depth + 1);
    }
}

fn check_engine_quote(w: &mut Walk<'_>, block: &Map<String, Value>, path: &IrPath, _depth: usize) {
    let raw_engine = block.get("engine");
    let engine = raw_engine
        .and_then(Value::as_str)
        .map(str::to_ascii_lowercase);
    let expected_title = engine.as_deref().and_then(|e| w.registry().engine_title(e));
    if expected_title.is_none() {
        w.push(Diagnostic::invalid(path.field("engine"), raw_engine));
    }

    let title_path = path.field("title");
    match block.get("title") {
        None | Some(Value::Null) => w.push(Diagnostic::missing(title_path)),
        Some(Value::String(title)) => {
            if let Some(expected) = expected_title
                && title != expected
            {
                let message =
                    format!("{title_path} must match the engine agent name: {expected}");
                w.push(Diagnostic::new(
                    DiagnosticKind::Inconsistent,
                    title_path,
                    message,
                ));
            }
        }
        Some(_) => w.push(Diagnostic::shape(title_path, "must be a string")),
    }

    let Some(inner) = w.non_empty_array(block, "blocks", path) else {
        return;
    };
    let base = path.field("blocks");
    for (i, sub) in inner.iter().enumerate() {
        let sub_path = base.index(i);
        let Some(sub) = sub.as_object() else {
            w.push(Diagnostic::shape(sub_path, "must be an object"));
            continue;
        };
        if sub.get("type").and_then(Value::as_str) != Some("paragraph") {
            let p = sub_path.field("type");
            let message = format!("{p} only paragraph is allowed");
            w.push(Diagnostic::new(DiagnosticKind::InvalidValue, p, message));
            continue;
        }

        check_inlines(w, sub, &sub_path, Some(ENGINE_QUOTE_MARKS));
    }
}

fn check_callout(w: &mut Walk<'_>, block: &Map<String, Value>, path: &IrPath, depth: usize) {
    check_enum(w, block, "tone", CALLOUT_TONES, path);
    if let Some(blocks) = w.non_empty_array(block, "blocks", path) {
        w.block_seq(blocks, &path.field("blocks"), depth + 1);
    }
}

fn check_kpi_grid(w: &mut Walk<'_>, block: &Map<String, Value>, path: &IrPath, _depth: usize) {
    let Some(items) = w.non_empty_array(block, "items", path) else {
        return;
    };
    let base = path.field("items");
    for (i, item) in items.iter().enumerate() {
        let item_path = base.index(i);
        let Some(item) = item.as_object() else {
            w.push(Diagnostic::shape(item_path, "must be an object"));
            continue;
        };
        if !item.contains_key("label") || !item.contains_key("value") {
            let message = format!("{item_path} requires label and value");
            w.push(Diagnostic::new(
                DiagnosticKind::MissingField,
                item_path,
                message,
            ));
        }
    }
}

fn check_widget(w: &mut Walk<'_>, block: &Map<String, Value>, path: &IrPath, _depth: usize) {
    w.require(block, "widgetId", path);
    w.require(block, "widgetType", path);
    // Both present is accepted.
    if !block.contains_key("data") && !block.contains_key("dataRef") {
        let message = format!("{path} requires data or dataRef");
        w.push(Diagnostic::new(
            DiagnosticKind::MissingField,
            path.clone(),
            message,
        ));
    }
}

fn check_code(w: &mut Walk<'_>, block: &Map<String, Value>, path: &IrPath, _depth: usize) {
    w.require(block, "content", path);
}

fn check_math(w: &mut Walk<'_>, block: &Map<String, Value>, path: &IrPath, _depth: usize) {
    w.require(block, "latex", path);
}

fn check_figure(w: &mut Walk<'_>, block: &Map<String, Value>, path: &IrPath, _depth: usize) {
    let img_path = path.field("img");
    let Some(img) = block.get("img").and_then(Value::as_object) else {
        w.push(Diagnostic::shape(img_path, "must be an object"));
        return;
    };
    w.require(img, "src", &img_path);
}

#[cfg(test)]
#[path = "../../tests/unit/validate/blocks.rs"]
mod tests;
