use smallvec::SmallVec;
use std::fmt;

/// One step of an [`IrPath`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathElem {
    /// Field access on an object, rendered as `.name`.
    Field(&'static str),
    /// Position inside a sequence, rendered as `[i]`.
    Index(usize),
}

/// Address of a node inside a chapter tree, e.g. `blocks[2].items[0][1].inlines[0]`.
///
/// Paths are immutable: [`IrPath::field`] and [`IrPath::index`] return extended copies and
/// leave `self` untouched, so a parent path can be shared by every sibling it is extended for.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct IrPath {
    elems: SmallVec<[PathElem; 8]>,
}

impl IrPath {
    /// The empty path (the chapter itself).
    pub fn root() -> Self {
        Self::default()
    }

    /// Extend with a field access.
    #[must_use]
    pub fn field(&self, name: &'static str) -> Self {
        self.with(PathElem::Field(name))
    }

    /// Extend with a sequence index.
    #[must_use]
    pub fn index(&self, i: usize) -> Self {
        self.with(PathElem::Index(i))
    }

    /// Path elements from the root down.
    pub fn elems(&self) -> &[PathElem] {
        &self.elems
    }

    /// Whether this is the root path.
    pub fn is_empty(&self) -> bool {
        self.elems.is_empty()
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.elems.len()
    }

    fn with(&self, elem: PathElem) -> Self {
        let mut elems = self.elems.clone();
        elems.push(elem);
        Self { elems }
    }
}

impl fmt::Display for IrPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, elem) in self.elems.iter().enumerate() {
            match *elem {
                PathElem::Field(name) => {
                    if i > 0 {
                        f.write_str(".")?;
                    }
                    f.write_str(name)?;
                }
                PathElem::Index(idx) => write!(f, "[{idx}]")?,
            }
        }
        Ok(())
    }
}

impl serde::Serialize for IrPath {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/path.rs"]
mod tests;
