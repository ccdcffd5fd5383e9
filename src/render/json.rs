//! JSON renderer — structured outline for tooling integration.
//!
//! Lists every recognized declaration with its source line and the
//! indentation the rst skeleton would give it.

use crate::model::*;
use crate::render::Renderer;
use anyhow::{Context, Result};
use serde::Serialize;

pub struct JsonRenderer;

#[derive(Serialize)]
struct Outline<'a> {
    source: &'a str,
    anchor: &'a str,
    include: &'a str,
    declarations: Vec<&'a Entry>,
    unclosed: &'a [Scope],
}

impl Renderer for JsonRenderer {
    fn render(&self, doc: &Document) -> Result<String> {
        let outline = Outline {
            source: &doc.source.path,
            anchor: &doc.source.anchor,
            include: &doc.source.include,
            declarations: doc.entries().collect(),
            unclosed: &doc.unclosed,
        };
        let mut out =
            serde_json::to_string_pretty(&outline).context("failed to serialize outline")?;
        out.push('\n');
        Ok(out)
    }

    fn file_extension(&self) -> &str {
        "json"
    }
}
