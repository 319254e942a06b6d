//! Implementation of the `docchat chunks` command.

use anyhow::Result;
use comfy_table::Cell;
use serde::Serialize;

use crate::cli::commands::{build_embedder, load_knowledge};
use crate::cli::display::{list_table, output, render_list, single_line, truncate, CommandOutput};
use crate::domain::models::{Chunk, Config};

const PREVIEW_WIDTH: usize = 60;

#[derive(Debug, Serialize)]
pub struct ChunkRow {
    pub index: usize,
    pub chars: usize,
    pub content: String,
}

impl From<&Chunk> for ChunkRow {
    fn from(chunk: &Chunk) -> Self {
        Self {
            index: chunk.index(),
            chars: chunk.char_count(),
            content: chunk.content().to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ChunkListOutput {
    pub source: String,
    pub dimensions: usize,
    pub chunks: Vec<ChunkRow>,
    pub total: usize,
}

impl CommandOutput for ChunkListOutput {
    fn to_human(&self) -> String {
        let mut table = list_table(&["index", "chars", "preview"]);
        for row in &self.chunks {
            table.add_row(vec![
                Cell::new(row.index),
                Cell::new(row.chars),
                Cell::new(truncate(&single_line(&row.content), PREVIEW_WIDTH)),
            ]);
        }
        format!(
            "Source: {}\n{}",
            self.source,
            render_list("chunk", &table, self.total)
        )
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub fn execute(config: &Config, json_mode: bool) -> Result<()> {
    let embedder = build_embedder(config)?;
    let knowledge = load_knowledge(config, &embedder)?;

    let chunks: Vec<ChunkRow> = knowledge.chunks().iter().map(ChunkRow::from).collect();
    let result = ChunkListOutput {
        source: knowledge.source().to_string(),
        dimensions: knowledge.table().dimensions(),
        total: chunks.len(),
        chunks,
    };

    output(&result, json_mode);
    Ok(())
}
