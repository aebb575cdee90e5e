//! Integration tests for the tag parser.

use cora::parser;
use cora::types::ReasoningKind;
use rstest::rstest;

#[test]
fn full_reply_with_all_sections() {
    let raw = "<thinking>weigh the options</thinking>\n\
               <stress_test>check the edge cases</stress_test>\n\
               <final_answer>Go with option B.</final_answer>\n\
               <sources>\n\
               - https://example.com/a First source\n\
               - https://example.com/b\n\
               </sources>";

    let parsed = parser::parse(raw);

    assert_eq!(parsed.reasoning.len(), 2);
    assert_eq!(parsed.reasoning[0].kind, ReasoningKind::Thinking);
    assert_eq!(parsed.reasoning[0].iteration, 1);
    assert_eq!(parsed.reasoning[0].body, "weigh the options");
    assert_eq!(parsed.reasoning[1].kind, ReasoningKind::StressTest);

    assert_eq!(parsed.final_answer.as_deref(), Some("Go with option B."));

    assert_eq!(parsed.sources.len(), 2);
    assert_eq!(parsed.sources[0].index, 1);
    assert_eq!(parsed.sources[0].url, "https://example.com/a");
    assert_eq!(parsed.sources[0].title.as_deref(), Some("First source"));
    assert_eq!(parsed.sources[1].index, 2);
    assert!(parsed.sources[1].title.is_none());
}

#[test]
fn suffixed_rounds_keep_their_iteration_numbers() {
    let raw = "<thinking_2>round two thoughts</thinking_2>\
               <stress_test_2>round two checks</stress_test_2>\
               <final_answer>done</final_answer>";

    let parsed = parser::parse(raw);

    assert_eq!(parsed.reasoning.len(), 2);
    assert_eq!(parsed.reasoning[0].iteration, 2);
    assert_eq!(parsed.reasoning[1].iteration, 2);
    assert_eq!(parsed.final_answer.as_deref(), Some("done"));
}

#[test]
fn repeated_final_answer_spans_are_concatenated() {
    let raw = "<final_answer>first part</final_answer>\
               middle noise\
               <final_answer>second part</final_answer>";

    let parsed = parser::parse(raw);

    assert_eq!(
        parsed.final_answer.as_deref(),
        Some("first part\nsecond part")
    );
}

#[test]
fn mismatched_close_suffix_leaves_span_unpaired() {
    // <thinking_2> closed by </thinking> is not a pair; the opener is
    // skipped and the rest of the text is still scanned.
    let raw = "<thinking_2>orphan</thinking><final_answer>ok</final_answer>";

    let parsed = parser::parse(raw);

    assert!(parsed.reasoning.is_empty());
    assert_eq!(parsed.final_answer.as_deref(), Some("ok"));
}

#[test]
fn fallback_uses_leftover_text_as_answer() {
    let raw = "<thinking>hidden</thinking>The visible reply.";

    let parsed = parser::parse(raw);

    assert_eq!(parsed.reasoning.len(), 1);
    assert_eq!(parsed.final_answer.as_deref(), Some("The visible reply."));
}

#[test]
fn fallback_strips_sources_span_from_answer() {
    let raw = "Answer text here.\n<sources>\n- https://example.com/x\n</sources>";

    let parsed = parser::parse(raw);

    assert_eq!(parsed.sources.len(), 1);
    assert_eq!(parsed.final_answer.as_deref(), Some("Answer text here."));
}

#[test]
fn plain_text_becomes_the_answer() {
    let parsed = parser::parse("Just a normal sentence.");

    assert!(parsed.reasoning.is_empty());
    assert!(parsed.sources.is_empty());
    assert_eq!(parsed.final_answer.as_deref(), Some("Just a normal sentence."));
}

#[rstest]
#[case("")]
#[case("   \n\t  ")]
fn blank_input_parses_to_nothing(#[case] raw: &str) {
    let parsed = parser::parse(raw);

    assert!(parsed.reasoning.is_empty());
    assert!(parsed.final_answer.is_none());
    assert!(parsed.sources.is_empty());
}

#[test]
fn second_sources_span_is_ignored_for_citations() {
    let raw = "<final_answer>a</final_answer>\
               <sources>\n- https://one.example\n</sources>\
               <sources>\n- https://two.example\n</sources>";

    let parsed = parser::parse(raw);

    assert_eq!(parsed.sources.len(), 1);
    assert_eq!(parsed.sources[0].url, "https://one.example");
}

#[test]
fn source_line_without_url_keeps_text_as_url_field() {
    let raw = "<final_answer>a</final_answer><sources>\n- Smith 2024, personal notes\n</sources>";

    let parsed = parser::parse(raw);

    assert_eq!(parsed.sources.len(), 1);
    assert_eq!(parsed.sources[0].url, "Smith 2024, personal notes");
    assert!(parsed.sources[0].title.is_none());
}

#[test]
fn non_bullet_lines_in_sources_are_skipped() {
    let raw = "<final_answer>a</final_answer>\
               <sources>\nSources used:\n- https://example.com/a\n\n</sources>";

    let parsed = parser::parse(raw);

    assert_eq!(parsed.sources.len(), 1);
}

#[test]
fn unclosed_reasoning_tag_degrades_to_raw_answer() {
    let raw = "<thinking>never closed";

    let parsed = parser::parse(raw);

    assert!(parsed.reasoning.is_empty());
    assert_eq!(parsed.final_answer.as_deref(), Some("<thinking>never closed"));
}

#[test]
fn parse_is_stable_under_reparse() {
    // Feeding a parsed answer back through the parser must not change it.
    let raw = "<thinking>x</thinking><final_answer>stable text</final_answer>";
    let first = parser::parse(raw);
    let answer = first.final_answer.clone().unwrap();
    let second = parser::parse(&answer);

    assert_eq!(second.final_answer.as_deref(), Some(answer.as_str()));
}
