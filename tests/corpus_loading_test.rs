//! Integration tests for corpus loading and paragraph chunking.

use std::fs;

use docchat::domain::models::Chunk;
use docchat::domain::ports::ChunkSource;
use docchat::infrastructure::corpus::{split_paragraphs, ParagraphFileSource};
use docchat::DomainError;

mod common;

fn contents(chunks: &[Chunk]) -> Vec<&str> {
    chunks.iter().map(Chunk::content).collect()
}

#[test]
fn test_sample_corpus_chunks() {
    let (_dir, path) = common::corpus_dir(common::SAMPLE_CORPUS);
    let chunks = ParagraphFileSource::new(&path).load().unwrap();

    assert_eq!(chunks.len(), 4);
    for (i, chunk) in chunks.iter().enumerate() {
        assert_eq!(chunk.index(), i);
        assert_eq!(chunk.content(), chunk.content().trim());
        assert!(!chunk.content().is_empty());
    }
    assert!(chunks[0].content().starts_with("Apple pie"));
    assert!(chunks[3].content().starts_with("Espresso"));
}

#[test]
fn test_extra_blank_lines_match_single_blank_lines() {
    let tight = "alpha\n\nbeta\n\ngamma";
    let loose = "\n\n  alpha  \n\n\n\n\tbeta\n \t \n\n  gamma\n\n\n";

    assert_eq!(contents(&split_paragraphs(tight)), vec!["alpha", "beta", "gamma"]);
    assert_eq!(split_paragraphs(tight), split_paragraphs(loose));
}

#[test]
fn test_single_newlines_stay_in_chunk() {
    let chunks = split_paragraphs("line one\nline two\n\nline three");
    assert_eq!(contents(&chunks), vec!["line one\nline two", "line three"]);
}

#[test]
fn test_windows_line_endings() {
    let chunks = split_paragraphs("first\r\n\r\nsecond\r\n");
    assert_eq!(contents(&chunks), vec!["first", "second"]);
}

#[test]
fn test_whitespace_only_file_has_no_chunks() {
    let (_dir, path) = common::corpus_dir(" \n\n\t\n   ");
    let chunks = ParagraphFileSource::new(&path).load().unwrap();
    assert!(chunks.is_empty());
}

#[test]
fn test_binary_file_is_read_lossily() {
    let dir = common::temp_dir();
    let path = dir.path().join("binary.bin");
    fs::write(&path, [0x66, 0x6f, 0x6f, 0xff, 0xfe, b'\n', b'\n', 0x62, 0x61, 0x72]).unwrap();

    let chunks = ParagraphFileSource::new(&path).load().unwrap();
    assert_eq!(chunks.len(), 2);
    assert!(chunks[0].content().starts_with("foo"));
    assert!(chunks[0].content().contains('\u{FFFD}'));
    assert_eq!(chunks[1].content(), "bar");
}

#[test]
fn test_missing_file_is_unreadable() {
    let dir = common::temp_dir();
    let path = dir.path().join("missing.txt");
    let source = ParagraphFileSource::new(&path);

    assert_eq!(source.describe(), path.display().to_string());
    match source.load() {
        Err(DomainError::CorpusUnreadable { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected CorpusUnreadable, got {other:?}"),
    }
}
