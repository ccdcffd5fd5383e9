//! reStructuredText skeleton renderer for the Sphinx C++ domain.
//!
//! Directive text and blank-line layout are byte-stable; regenerated
//! skeletons are diffed against hand-edited ones.

use crate::model::*;
use crate::render::Renderer;
use anyhow::Result;

pub struct RstRenderer;

const PLACEHOLDER: &str = "Insert text here";

impl Renderer for RstRenderer {
    fn render(&self, doc: &Document) -> Result<String> {
        let mut pieces = preamble(&doc.source);

        for block in &doc.blocks {
            match block {
                Block::Entry(entry) => push_entry(&mut pieces, entry),
                Block::Close(Scope::Enum) => pieces.push(String::new()),
                Block::Close(Scope::Class) => pieces.push("\n".to_string()),
            }
        }

        let mut output = pieces.join("\n");
        output.push('\n');
        Ok(output)
    }

    fn file_extension(&self) -> &str {
        "rst"
    }
}

/// File-level directives, title placeholder and include notice.
fn preamble(source: &Source) -> Vec<String> {
    vec![
        ".. default-domain:: cpp".to_string(),
        ".. highlight:: cpp".to_string(),
        format!(".. _{}:\n", source.anchor),
        "Insert Title Here".to_string(),
        "====================\n".to_string(),
        format!("{}\n", PLACEHOLDER),
        "This file is included through: ::\n".to_string(),
        format!("    #include <{}>\n", source.include),
    ]
}

fn push_entry(pieces: &mut Vec<String>, entry: &Entry) {
    let decl = &entry.declaration;
    pieces.push(format!(
        "{}.. {}:: {}\n",
        indent(entry.indent),
        decl.directive(),
        decl.title()
    ));
    if decl.has_placeholder() {
        pieces.push(format!("{}{}", indent(entry.indent + 4), PLACEHOLDER));
    }
}

fn indent(width: usize) -> String {
    " ".repeat(width)
}
