//! Implementation of the `docchat ask` command.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::cli::commands::{build_embedder, build_formatter, load_knowledge};
use crate::cli::display::{output, CommandOutput};
use crate::domain::models::{Answer, Config};
use crate::services::RetrievalPipeline;

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct AskArgs {
    /// Question to answer
    pub question: String,
}

#[derive(Debug, Serialize)]
pub struct AskOutput {
    pub success: bool,
    #[serde(flatten)]
    pub answer: Answer,
}

impl CommandOutput for AskOutput {
    fn to_human(&self) -> String {
        format!("Answer: {}", self.answer.response)
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub fn execute(args: &AskArgs, config: &Config, json_mode: bool) -> Result<()> {
    let embedder = build_embedder(config)?;
    let knowledge = load_knowledge(config, &embedder)?;
    let formatter = build_formatter(config);
    let pipeline = RetrievalPipeline::new(&knowledge, &embedder, &formatter)
        .with_no_match_message(config.retrieval.no_match_message.as_str());

    let answer = pipeline.answer_with_details(&args.question)?;

    output(
        &AskOutput {
            success: true,
            answer,
        },
        json_mode,
    );
    Ok(())
}
