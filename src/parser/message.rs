//! Single-pass scanner for the assistant tag protocol.
//!
//! The scanner walks the text left-to-right once per span family
//! (reasoning, final answer, sources). Matches are non-overlapping and
//! non-nested: the first open tag wins, pairs with the first close tag
//! carrying the identical kind token and identical (or identically
//! absent) iteration suffix, and consumed text is never re-scanned. An
//! open tag with no matching close is skipped and scanning continues
//! directly after it.

use crate::types::{ParsedMessage, ReasoningBlock, ReasoningKind, SourceCitation};
use std::ops::Range;

const FINAL_OPEN: &str = "<final_answer>";
const FINAL_CLOSE: &str = "</final_answer>";
const SOURCES_OPEN: &str = "<sources>";
const SOURCES_CLOSE: &str = "</sources>";

/// Parse a raw assistant response into its structured sections.
///
/// Total over all inputs. Empty input yields an empty message; input with
/// no recognized tags becomes the final answer verbatim (trimmed); a
/// scanner panic - which no known input triggers - degrades to the same
/// raw-text fallback rather than propagating.
pub fn parse(raw: &str) -> ParsedMessage {
    if raw.is_empty() {
        return ParsedMessage::default();
    }

    match std::panic::catch_unwind(|| parse_sections(raw)) {
        Ok(message) => message,
        Err(_) => {
            tracing::warn!("tag scanner panicked, degrading to raw final answer");
            ParsedMessage {
                reasoning: Vec::new(),
                final_answer: Some(raw.trim().to_string()),
                sources: Vec::new(),
            }
        }
    }
}

fn parse_sections(raw: &str) -> ParsedMessage {
    let reasoning_spans = scan_reasoning(raw);
    let final_spans = scan_pairs(raw, FINAL_OPEN, FINAL_CLOSE);
    let sources_spans = scan_pairs(raw, SOURCES_OPEN, SOURCES_CLOSE);

    let reasoning: Vec<ReasoningBlock> = reasoning_spans
        .iter()
        .map(|(_, block)| block.clone())
        .collect();

    // Multiple final_answer pairs concatenate in document order.
    let joined = final_spans
        .iter()
        .map(|span| raw[span.body.clone()].trim())
        .filter(|body| !body.is_empty())
        .collect::<Vec<_>>()
        .join("\n");
    let mut final_answer = (!joined.is_empty()).then(|| joined);

    // Only the first sources span is parsed; later ones are ignored.
    let sources = sources_spans
        .first()
        .map(|span| parse_sources(&raw[span.body.clone()]))
        .unwrap_or_default();

    if final_answer.is_none() {
        final_answer = fallback_answer(raw, &reasoning_spans);
    }

    ParsedMessage {
        reasoning,
        final_answer,
        sources,
    }
}

/// No final_answer pair anywhere: strip matched reasoning spans, then
/// matched sources spans, then stray final_answer marker tokens, and use
/// whatever non-empty text remains. The strips run sequentially on the
/// progressively reduced text, mirroring the upstream protocol's
/// reference behavior.
fn fallback_answer(raw: &str, reasoning_spans: &[(Range<usize>, ReasoningBlock)]) -> Option<String> {
    let ranges: Vec<Range<usize>> = reasoning_spans.iter().map(|(r, _)| r.clone()).collect();
    let without_reasoning = strip_ranges(raw, &ranges);

    let sources_ranges: Vec<Range<usize>> =
        scan_pairs(&without_reasoning, SOURCES_OPEN, SOURCES_CLOSE)
            .into_iter()
            .map(|span| span.full)
            .collect();
    let without_sources = strip_ranges(&without_reasoning, &sources_ranges);

    let leftover = without_sources
        .replace(FINAL_OPEN, "")
        .replace(FINAL_CLOSE, "");
    let leftover = leftover.trim();

    (!leftover.is_empty()).then(|| leftover.to_string())
}

// ============= Reasoning Spans =============

struct OpenTag {
    kind: ReasoningKind,
    iteration: Option<u32>,
    /// Byte offset just past the closing `>` of the open tag.
    end: usize,
}

fn scan_reasoning(raw: &str) -> Vec<(Range<usize>, ReasoningBlock)> {
    let mut out = Vec::new();
    let mut cursor = 0;

    while let Some((start, open)) = next_open_tag(raw, cursor) {
        let close = close_token(open.kind, open.iteration);
        match raw[open.end..].find(&close) {
            Some(rel) => {
                let close_start = open.end + rel;
                let full = start..close_start + close.len();
                let block = ReasoningBlock {
                    kind: open.kind,
                    iteration: open.iteration.unwrap_or(1),
                    body: raw[open.end..close_start].trim().to_string(),
                };
                out.push((full, block));
                cursor = close_start + close.len();
            }
            // Unmatched open tag: skip past it, keep scanning.
            None => cursor = open.end,
        }
    }

    out
}

fn next_open_tag(raw: &str, from: usize) -> Option<(usize, OpenTag)> {
    let mut pos = from;
    while pos < raw.len() {
        let start = pos + raw[pos..].find('<')?;
        if let Some(tag) = parse_open_tag(raw, start) {
            return Some((start, tag));
        }
        pos = start + 1;
    }
    None
}

/// Try to read `<KIND>` or `<KIND_N>` at `start` (which points at `<`).
fn parse_open_tag(raw: &str, start: usize) -> Option<OpenTag> {
    let rest = &raw[start + 1..];

    for kind in [ReasoningKind::Thinking, ReasoningKind::StressTest] {
        let token = kind.as_tag();
        let Some(after) = rest.strip_prefix(token) else {
            continue;
        };

        if after.starts_with('>') {
            return Some(OpenTag {
                kind,
                iteration: None,
                end: start + 1 + token.len() + 1,
            });
        }

        if let Some(suffixed) = after.strip_prefix('_') {
            let digits: &str = &suffixed[..suffixed
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(suffixed.len())];
            if !digits.is_empty() && suffixed[digits.len()..].starts_with('>') {
                if let Ok(iteration) = digits.parse::<u32>() {
                    return Some(OpenTag {
                        kind,
                        iteration: Some(iteration),
                        end: start + 1 + token.len() + 1 + digits.len() + 1,
                    });
                }
            }
        }
    }

    None
}

fn close_token(kind: ReasoningKind, iteration: Option<u32>) -> String {
    match iteration {
        Some(n) => format!("</{}_{}>", kind.as_tag(), n),
        None => format!("</{}>", kind.as_tag()),
    }
}

// ============= Literal Tag Pairs =============

struct Span {
    full: Range<usize>,
    body: Range<usize>,
}

fn scan_pairs(raw: &str, open: &str, close: &str) -> Vec<Span> {
    let mut out = Vec::new();
    let mut cursor = 0;

    while let Some(rel) = raw[cursor..].find(open) {
        let start = cursor + rel;
        let body_start = start + open.len();
        let Some(rel_close) = raw[body_start..].find(close) else {
            // No close anywhere after this open; no further pair can form.
            break;
        };
        let body_end = body_start + rel_close;
        out.push(Span {
            full: start..body_end + close.len(),
            body: body_start..body_end,
        });
        cursor = body_end + close.len();
    }

    out
}

/// Rebuild `raw` with the given sorted, non-overlapping byte ranges removed.
fn strip_ranges(raw: &str, ranges: &[Range<usize>]) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut cursor = 0;
    for range in ranges {
        out.push_str(&raw[cursor..range.start]);
        cursor = range.end;
    }
    out.push_str(&raw[cursor..]);
    out
}

// ============= Sources =============

fn parse_sources(body: &str) -> Vec<SourceCitation> {
    body.lines()
        .map(str::trim)
        .filter(|line| line.starts_with('-'))
        .enumerate()
        .map(|(i, line)| {
            let content = line[1..].trim();
            let (url, title) = split_url(content);
            SourceCitation {
                index: i + 1,
                url,
                title,
            }
        })
        .collect()
}

/// Locate the first http/https URL on a bullet line. Text before the URL
/// is dropped; text after it (if any) becomes the title. Lines with no
/// URL use their whole text as the URL.
fn split_url(content: &str) -> (String, Option<String>) {
    let position = match (content.find("http://"), content.find("https://")) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (Some(a), None) => Some(a),
        (None, Some(b)) => Some(b),
        (None, None) => None,
    };

    let Some(start) = position else {
        return (content.to_string(), None);
    };

    let rest = &content[start..];
    let url_end = rest.find(char::is_whitespace).unwrap_or(rest.len());
    let url = rest[..url_end].to_string();
    let title = rest[url_end..].trim();

    if title.is_empty() {
        (url, None)
    } else {
        (url, Some(title.to_string()))
    }
}
