use crate::foundation::error::{IrError, IrResult};
use crate::foundation::path::IrPath;
use crate::schema::registry::{IR_VERSION, SchemaRegistry};
use crate::validate::blocks::checker_for;
use crate::validate::diagnostic::{Diagnostic, DiagnosticKind, ValidationReport};
use serde_json::{Map, Value};

/// Keys every chapter object must carry.
const CHAPTER_FIELDS: &[&str] = &["chapterId", "title", "anchor", "order", "blocks"];

const DEFAULT_MAX_DEPTH: usize = 64;

/// Options controlling chapter validation.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidatorOpts {
    /// IR version recorded on every report. Only tagged, never migrated.
    pub schema_version: String,
    /// Maximum block nesting depth; top-level blocks are depth 1.
    pub max_depth: usize,
}

impl Default for ValidatorOpts {
    fn default() -> Self {
        Self {
            schema_version: IR_VERSION.to_owned(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ValidatorOpts {
    /// Parse options from a JSON reader. Missing keys take their defaults.
    pub fn from_reader<R: std::io::Read>(r: R) -> IrResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| IrError::serde(format!("parse validator options JSON: {e}")))
    }
}

/// Structural validator for a single chapter IR value.
///
/// The validator holds no mutable state: every [`ChapterValidator::validate_chapter`] call owns
/// its own diagnostics buffer, so one instance can be shared freely across threads.
#[derive(Clone, Debug)]
pub struct ChapterValidator {
    registry: SchemaRegistry,
    opts: ValidatorOpts,
}

impl Default for ChapterValidator {
    fn default() -> Self {
        Self {
            registry: SchemaRegistry::default(),
            opts: ValidatorOpts::default(),
        }
    }
}

impl ChapterValidator {
    /// Construct a validator over the built-in registry.
    pub fn new(opts: ValidatorOpts) -> IrResult<Self> {
        Self::with_registry(SchemaRegistry::default(), opts)
    }

    pub(crate) fn with_registry(registry: SchemaRegistry, opts: ValidatorOpts) -> IrResult<Self> {
        if opts.max_depth == 0 {
            return Err(IrError::config("validator 'max_depth' must be >= 1"));
        }
        if opts.schema_version.trim().is_empty() {
            return Err(IrError::config("validator 'schema_version' must be non-empty"));
        }
        Ok(Self { registry, opts })
    }

    /// IR version this validator tags its reports with.
    pub fn schema_version(&self) -> &str {
        &self.opts.schema_version
    }

    /// Vocabulary tables in use.
    pub fn registry(&self) -> &SchemaRegistry {
        &self.registry
    }

    /// Options in use.
    pub fn opts(&self) -> &ValidatorOpts {
        &self.opts
    }

    /// Check one decoded chapter.
    ///
    /// Never fails: every defect becomes a [`Diagnostic`] in the returned report. A chapter that
    /// is not a JSON object yields exactly one diagnostic and nothing else is inspected.
    #[tracing::instrument(skip_all, fields(schema_version = %self.opts.schema_version))]
    pub fn validate_chapter(&self, chapter: &Value) -> ValidationReport {
        let mut walk = Walk::new(self);
        walk.chapter(chapter);
        let report = ValidationReport {
            schema_version: self.opts.schema_version.clone(),
            errors: walk.errors,
        };
        let chapter_id = chapter.get("chapterId").and_then(Value::as_str);
        tracing::debug!(
            chapter_id,
            errors = report.errors.len(),
            "chapter validated"
        );
        report
    }
}

/// Per-call traversal state: the shared validator plus a fresh diagnostics buffer.
pub(crate) struct Walk<'a> {
    validator: &'a ChapterValidator,
    errors: Vec<Diagnostic>,
}

impl<'a> Walk<'a> {
    fn new(validator: &'a ChapterValidator) -> Self {
        Self {
            validator,
            errors: Vec::new(),
        }
    }

    pub(crate) fn registry(&self) -> &SchemaRegistry {
        &self.validator.registry
    }

    pub(crate) fn push(&mut self, d: Diagnostic) {
        self.errors.push(d);
    }

    fn chapter(&mut self, chapter: &Value) {
        let root = IrPath::root().field("chapter");
        let Some(obj) = chapter.as_object() else {
            self.push(Diagnostic::new(
                DiagnosticKind::WrongShape,
                root,
                "chapter must be an object".to_owned(),
            ));
            return;
        };

        for &field in CHAPTER_FIELDS {
            if !obj.contains_key(field) {
                let path = root.field(field);
                let message = format!("missing {path}");
                self.push(Diagnostic::new(DiagnosticKind::MissingField, path, message));
            }
        }

        let Some(blocks) = self.non_empty_array(obj, "blocks", &root) else {
            return;
        };
        // Block paths are addressed from the chapter's `blocks`, without the `chapter.` prefix.
        self.block_seq(blocks, &IrPath::root().field("blocks"), 1);
    }

    /// Validate one block and dispatch on its `type`.
    pub(crate) fn block(&mut self, value: &Value, path: &IrPath, depth: usize) {
        let max_depth = self.validator.opts.max_depth;
        if depth > max_depth {
            tracing::warn!(path = %path, max_depth, "block nesting too deep");
            let message = format!("{path} exceeds maximum nesting depth of {max_depth}");
            self.push(Diagnostic::new(DiagnosticKind::TooDeep, path.clone(), message));
            return;
        }

        let Some(block) = value.as_object() else {
            self.push(Diagnostic::shape(path.clone(), "must be an object"));
            return;
        };

        let kind = block.get("type");
        let known = kind
            .and_then(Value::as_str)
            .filter(|k| self.registry().is_block_kind(k));
        let Some(kind) = known else {
            self.push(Diagnostic::unsupported(path.field("type"), kind));
            return;
        };

        if let Some(check) = checker_for(kind) {
            check(self, block, path, depth);
        }
    }

    /// Validate every element of `blocks` as a block at `path[i]`, one level deeper.
    pub(crate) fn block_seq(&mut self, blocks: &[Value], path: &IrPath, depth: usize) {
        for (i, b) in blocks.iter().enumerate() {
            self.block(b, &path.index(i), depth);
        }
    }

    /// `obj[key]` as a non-empty array, or a `must be a non-empty array` diagnostic.
    pub(crate) fn non_empty_array<'v>(
        &mut self,
        obj: &'v Map<String, Value>,
        key: &'static str,
        path: &IrPath,
    ) -> Option<&'v [Value]> {
        match obj.get(key).and_then(Value::as_array) {
            Some(arr) if !arr.is_empty() => Some(arr.as_slice()),
            _ => {
                self.push(Diagnostic::shape(
                    path.field(key),
                    "must be a non-empty array",
                ));
                None
            }
        }
    }

    /// Presence check; a present `null` counts as present.
    pub(crate) fn require(&mut self, obj: &Map<String, Value>, key: &'static str, path: &IrPath) {
        if !obj.contains_key(key) {
            self.push(Diagnostic::missing(path.field(key)));
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/validate/validator.rs"]
mod tests;
