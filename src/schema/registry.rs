/// Version tag of the chapter IR contract.
pub const IR_VERSION: &str = "1.0";

/// Closed vocabulary of block `type` tags.
pub const ALLOWED_BLOCK_TYPES: &[&str] = &[
    "heading",
    "paragraph",
    "list",
    "table",
    "blockquote",
    "engineQuote",
    "callout",
    "kpiGrid",
    "widget",
    "code",
    "math",
    "figure",
];

/// Closed vocabulary of inline mark `type` tags.
pub const ALLOWED_INLINE_MARKS: &[&str] = &[
    "bold",
    "italic",
    "underline",
    "strike",
    "code",
    "link",
    "color",
    "font",
    "highlight",
    "subscript",
    "superscript",
    "math",
];

/// Engine identifier -> canonical display title used by `engineQuote` blocks.
pub const ENGINE_AGENT_TITLES: &[(&str, &str)] = &[
    ("insight", "Insight Agent"),
    ("media", "Media Agent"),
    ("query", "Query Agent"),
];

/// Read-only view over the IR vocabulary tables.
///
/// The registry only borrows `'static` tables, so it is `Copy` and can be handed to any
/// number of validators or threads.
#[derive(Debug, Clone, Copy, serde::Serialize)]
pub struct SchemaRegistry {
    version: &'static str,
    block_types: &'static [&'static str],
    inline_marks: &'static [&'static str],
    #[serde(serialize_with = "serialize_engine_titles")]
    engine_titles: &'static [(&'static str, &'static str)],
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self {
            version: IR_VERSION,
            block_types: ALLOWED_BLOCK_TYPES,
            inline_marks: ALLOWED_INLINE_MARKS,
            engine_titles: ENGINE_AGENT_TITLES,
        }
    }
}

impl SchemaRegistry {
    /// IR contract version.
    pub fn version(&self) -> &'static str {
        self.version
    }

    /// All allowed block kinds, in declaration order.
    pub fn block_types(&self) -> &'static [&'static str] {
        self.block_types
    }

    /// All allowed inline mark kinds, in declaration order.
    pub fn inline_marks(&self) -> &'static [&'static str] {
        self.inline_marks
    }

    /// Whether `kind` is a known block `type`. Case-sensitive.
    pub fn is_block_kind(&self, kind: &str) -> bool {
        self.block_types.contains(&kind)
    }

    /// Whether `kind` is a known mark `type`. Case-sensitive.
    pub fn is_mark_kind(&self, kind: &str) -> bool {
        self.inline_marks.contains(&kind)
    }

    /// Canonical title for a (lowercase) engine identifier.
    pub fn engine_title(&self, engine: &str) -> Option<&'static str> {
        self.engine_titles
            .iter()
            .find(|(id, _)| *id == engine)
            .map(|(_, title)| *title)
    }

    /// Known engine identifiers.
    pub fn engines(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.engine_titles.iter().map(|(id, _)| *id)
    }
}

fn serialize_engine_titles<S: serde::Serializer>(
    titles: &&'static [(&'static str, &'static str)],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_map(titles.iter().copied())
}

#[cfg(test)]
#[path = "../../tests/unit/schema/registry.rs"]
mod tests;
