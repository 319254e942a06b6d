//! Template-based response formatter
//!
//! Placeholder for a generation backend: it renders the question and the
//! retrieved context into a fixed template.

use crate::domain::models::DEFAULT_RESPONSE_TEMPLATE;
use crate::domain::ports::ResponseFormatter;

const QUESTION_PLACEHOLDER: &str = "{question}";
const CONTEXT_PLACEHOLDER: &str = "{context}";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Question,
    Context,
}

/// Renders responses from a `{question}` / `{context}` template
///
/// The template is parsed once. Substitution is single-pass, so braces inside
/// the question or context are copied verbatim.
#[derive(Debug, Clone)]
pub struct TemplateResponseFormatter {
    segments: Vec<Segment>,
}

impl TemplateResponseFormatter {
    /// Create a formatter for the given template
    pub fn new(template: &str) -> Self {
        Self {
            segments: parse_template(template),
        }
    }

    /// Returns true if rendered responses include the context
    pub fn includes_context(&self) -> bool {
        self.segments.contains(&Segment::Context)
    }
}

impl Default for TemplateResponseFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_RESPONSE_TEMPLATE)
    }
}

impl ResponseFormatter for TemplateResponseFormatter {
    fn format(&self, question: &str, context: &str) -> String {
        let mut response = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => response.push_str(text),
                Segment::Question => response.push_str(question),
                Segment::Context => response.push_str(context),
            }
        }
        response
    }
}

fn parse_template(template: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut rest = template;

    while !rest.is_empty() {
        let next = match (rest.find(QUESTION_PLACEHOLDER), rest.find(CONTEXT_PLACEHOLDER)) {
            (Some(q), Some(c)) if q < c => Some((q, QUESTION_PLACEHOLDER, Segment::Question)),
            (_, Some(c)) => Some((c, CONTEXT_PLACEHOLDER, Segment::Context)),
            (Some(q), None) => Some((q, QUESTION_PLACEHOLDER, Segment::Question)),
            (None, None) => None,
        };

        let Some((pos, placeholder, segment)) = next else {
            segments.push(Segment::Literal(rest.to_string()));
            break;
        };

        if pos > 0 {
            segments.push(Segment::Literal(rest[..pos].to_string()));
        }
        segments.push(segment);
        rest = &rest[pos + placeholder.len()..];
    }

    segments
}
