//! Data model for a scanned header — format-agnostic.

use serde::Serialize;

/// Complete scan result for a single header file.
#[derive(Debug)]
pub struct Document {
    pub source: Source,
    pub blocks: Vec<Block>,
    /// Scopes whose body was never closed by a `};` line
    pub unclosed: Vec<Scope>,
}

impl Document {
    /// Recognized declarations, skipping close separators.
    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.blocks.iter().filter_map(|block| match block {
            Block::Entry(entry) => Some(entry),
            Block::Close(_) => None,
        })
    }
}

/// Where the header came from, as given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    pub path: String,
    /// Cross-reference label, e.g. "video-display-mode"
    pub anchor: String,
    /// Path used in the `#include <...>` notice
    pub include: String,
}

/// One unit of output, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Entry(Entry),
    /// End of an enum or class body
    Close(Scope),
}

/// A recognized declaration and where it goes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    /// 1-based source line
    pub line: usize,
    /// Indentation of the directive line, in spaces
    pub indent: usize,
    #[serde(flatten)]
    pub declaration: Declaration,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Declaration {
    Namespace { name: String },
    Class { name: String },
    Enum { scoped: bool, name: Option<String> },
    Enumerator { name: String },
    Function { signature: String },
}

impl Declaration {
    /// Directive name in the Sphinx C++ domain.
    pub fn directive(&self) -> &'static str {
        match self {
            Declaration::Namespace { .. } => "namespace",
            Declaration::Class { .. } => "class",
            Declaration::Enum { .. } => "enum",
            Declaration::Enumerator { .. } => "enumerator",
            Declaration::Function { .. } => "function",
        }
    }

    /// Text following the directive marker.
    pub fn title(&self) -> String {
        match self {
            Declaration::Namespace { name }
            | Declaration::Class { name }
            | Declaration::Enumerator { name } => name.clone(),
            Declaration::Enum { scoped, name } => {
                let name = name.as_deref().unwrap_or("anonymous");
                if *scoped {
                    format!("class {}", name)
                } else {
                    name.to_string()
                }
            }
            Declaration::Function { signature } => signature.clone(),
        }
    }

    /// Namespaces only switch scope and get no body text.
    pub fn has_placeholder(&self) -> bool {
        !matches!(self, Declaration::Namespace { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    Class,
    Enum,
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Scope::Class => f.write_str("class"),
            Scope::Enum => f.write_str("enum"),
        }
    }
}
