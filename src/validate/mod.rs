//! Chapter IR structural validation.
//!
//! [`validator::ChapterValidator`] walks a decoded chapter top-down. Container shape problems
//! stop descent into that container; sibling nodes are always all checked, so a single call
//! reports every defect of the chapter.

pub(crate) mod blocks;
pub(crate) mod diagnostic;
pub(crate) mod inline;
pub(crate) mod validator;
