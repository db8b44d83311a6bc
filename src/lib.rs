//! chapter-ir validates chapter-level report IR before it is persisted or rendered.
//!
//! An upstream generator emits one JSON chapter at a time: a header (`chapterId`, `title`,
//! `anchor`, `order`) and a tree of typed blocks (headings, paragraphs, lists, tables,
//! quotes, callouts, KPI grids, widgets, code, math, figures). Renderers assume that tree is
//! well-formed; this crate rejects chapters that are not, with one path-qualified diagnostic per
//! defect, e.g. `blocks[3].rows[0].cells[1].blocks[0].inlines must be a non-empty array`.
//!
//! # Pipeline overview
//!
//! 1. **Load**: JSON reader/path -> [`Chapter`] (decoding only, no shape checks)
//! 2. **Validate**: [`ChapterValidator::validate_chapter`] -> [`ValidationReport`]
//! 3. **Batch** (optional): [`validate_paths`] over many files, optionally on a rayon pool
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Validation never fails**: malformed input is reported, not returned as `Err`.
//! - **No shared mutable state**: one validator may serve many threads at once.
//! - **Bounded recursion**: nesting beyond [`ValidatorOpts::max_depth`] is a diagnostic.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod batch;
mod chapter;
mod foundation;
mod schema;
mod validate;

pub use batch::runner::{BatchOpts, BatchReport, FileOutcome, FileReport, validate_paths};
pub use chapter::document::Chapter;
pub use foundation::error::{IrError, IrResult};
pub use foundation::path::{IrPath, PathElem};
pub use schema::registry::{
    ALLOWED_BLOCK_TYPES, ALLOWED_INLINE_MARKS, ENGINE_AGENT_TITLES, IR_VERSION, SchemaRegistry,
};
pub use validate::diagnostic::{Diagnostic, DiagnosticKind, ValidationReport};
pub use validate::validator::{ChapterValidator, ValidatorOpts};
