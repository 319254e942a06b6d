//! Implementation of the `docchat chat` command (the default).
//!
//! Loads the corpus with progress messages, then runs a blocking
//! read-question / print-answer loop until `exit` or end of input. An empty
//! corpus prints a notice and ends the command without entering the loop.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::cli::commands::{build_embedder, build_formatter, corpus_source};
use crate::cli::display::banner;
use crate::domain::models::Config;
use crate::domain::ports::ChunkSource;
use crate::domain::DomainError;
use crate::services::{KnowledgeBase, RetrievalPipeline};

const EXIT_COMMAND: &str = "exit";

pub fn execute(config: &Config) -> Result<()> {
    let mut out = io::stdout().lock();

    writeln!(
        out,
        "{}",
        banner("Starting AI-Powered Document Analysis Chatbot...")
    )?;
    writeln!(out, "Loading documents...")?;

    let source = corpus_source(config);
    let chunks = KnowledgeBase::load_chunks(&source);
    if chunks.is_empty() {
        // The session never starts, but an empty corpus is not a failed run
        let empty = DomainError::EmptyCorpus(source.describe());
        warn!(error = %empty, "chat session not started");
        writeln!(out, "{empty}")?;
        return Ok(());
    }
    writeln!(out, "{} document chunks loaded.", chunks.len())?;

    let embedder = build_embedder(config)?;
    let knowledge = KnowledgeBase::build(source.describe(), chunks, &embedder)?;
    writeln!(out, "Documents embedded successfully.")?;

    let formatter = build_formatter(config);
    let pipeline = RetrievalPipeline::new(&knowledge, &embedder, &formatter)
        .with_no_match_message(config.retrieval.no_match_message.as_str());

    let answered = run_session(&pipeline, io::stdin().lock(), &mut out)?;
    info!(answered, "chat session ended");
    Ok(())
}

/// Run the interactive loop over arbitrary input and output streams
///
/// Returns the number of questions answered.
pub fn run_session<R: BufRead, W: Write>(
    pipeline: &RetrievalPipeline<'_>,
    mut input: R,
    output: &mut W,
) -> Result<usize> {
    writeln!(
        output,
        "\n{}",
        banner("Chatbot is ready. Enter your question (or type 'exit' to quit):")
    )?;

    let mut buf = Vec::new();
    let mut answered = 0;

    loop {
        write!(output, "> ")?;
        output.flush()?;

        buf.clear();
        let read = input
            .read_until(b'\n', &mut buf)
            .context("Failed to read question from input")?;
        if read == 0 {
            // end of input: finish the prompt line before the farewell
            writeln!(output)?;
            break;
        }

        // Invalid UTF-8 is replaced, never rejected
        let line = String::from_utf8_lossy(&buf);
        let question = line.trim_end_matches(['\n', '\r']);
        if question.eq_ignore_ascii_case(EXIT_COMMAND) {
            break;
        }

        let answer = pipeline.answer(question)?;
        writeln!(output, "Answer: {answer}")?;
        answered += 1;
    }

    writeln!(output, "Exiting. Thank you for using the chatbot.")?;
    Ok(answered)
}
