//! JSON renderer — the agnostic format itself, for downstream tooling.

use crate::model::DocAgnosticFormat;
use crate::render::Renderer;
use anyhow::{Context, Result};

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, docs: &DocAgnosticFormat) -> Result<String> {
        let mut out = serde_json::to_string_pretty(docs)
            .context("failed to serialize documentation")?;
        out.push('\n');
        Ok(out)
    }

    fn file_extension(&self) -> &str {
        "json"
    }
}
