//! Markdown rendering of a cleaner documentation tree.
//!
//! Walks the validated tree depth-first, emitting headings for groups,
//! bullet lines for options, and verbatim lines for pre-formatted content.

use crate::document::{DocNode, Document, Entries};

/// Heading level of top-level groups. Levels 1 and 2 are reserved for the
/// titles of the page embedding this output.
const HEADING_START_LEVEL: usize = 3;

/// The kind of node most recently emitted during a render pass.
///
/// A single value is threaded through the whole traversal: spacing before
/// a section depends on the most recent emission anywhere in the walk, not
/// just within the current subtree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LastEmitted {
    Group,
    Option,
    Lines,
}

/// Renders a documentation tree as Markdown text.
///
/// Output is a deterministic function of the document's content and key
/// order. Every emitted line ends with a newline; no trailing separator
/// follows the final entry.
pub fn render(document: &Document) -> String {
    let mut output = String::new();
    render_entries(document.entries(), HEADING_START_LEVEL, None, &mut output);

    output
}

fn render_entries(
    entries: &Entries,
    level: usize,
    mut last: Option<LastEmitted>,
    output: &mut String,
) -> Option<LastEmitted> {
    for (key, node) in entries {
        match node {
            DocNode::Group(children) => {
                // A section opening directly after bullet or verbatim
                // output gets a separating blank line; consecutive
                // headings are already separated by the blank emitted
                // after each heading.
                if last.is_some_and(|kind| kind != LastEmitted::Group) {
                    output.push('\n');
                }
                last = Some(LastEmitted::Group);

                output.push_str(&format!("{} {}\n\n", "#".repeat(level), heading_text(key)));
                last = render_entries(children, level + 1, last, output);
            }
            DocNode::Option(text) => {
                output.push_str(&format!("- `{key}`: {text}\n"));
                last = Some(LastEmitted::Option);
            }
            DocNode::Lines(lines) => {
                for line in lines {
                    output.push_str(line);
                    output.push('\n');
                }
                // An empty list still counts as the latest emission.
                last = Some(LastEmitted::Lines);
            }
        }
    }

    last
}

fn heading_text(key: &str) -> String {
    title_case(&key.replace('_', " "))
}

fn title_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut at_word_start = true;

    for ch in s.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                result.extend(ch.to_uppercase());
            } else {
                result.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            result.push(ch);
            at_word_start = true;
        }
    }

    result
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn option(key: &str, text: &str) -> (String, DocNode) {
        (key.to_string(), DocNode::Option(text.to_string()))
    }

    fn group(key: &str, children: Entries) -> (String, DocNode) {
        (key.to_string(), DocNode::Group(children))
    }

    #[test]
    fn renders_option_as_bullet_line() {
        let entries = vec![option("timeout", "Request timeout in seconds.")];

        let mut output = String::new();
        let last = render_entries(&entries, HEADING_START_LEVEL, None, &mut output);

        assert_eq!(output, "- `timeout`: Request timeout in seconds.\n");
        assert_eq!(last, Some(LastEmitted::Option));
    }

    #[test]
    fn heading_level_follows_nesting_depth() {
        let entries = vec![group(
            "outer",
            vec![group("inner", vec![option("leaf", "Described.")])],
        )];

        let mut output = String::new();
        render_entries(&entries, HEADING_START_LEVEL, None, &mut output);

        assert_eq!(output, "### Outer\n\n#### Inner\n\n- `leaf`: Described.\n");
    }

    #[test]
    fn no_blank_line_before_first_emission() {
        let entries = vec![group("first", vec![])];

        let mut output = String::new();
        render_entries(&entries, HEADING_START_LEVEL, None, &mut output);

        assert!(output.starts_with("### First\n"));
    }

    #[test]
    fn blank_line_separates_section_from_preceding_bullet() {
        let entries = vec![
            group("alpha", vec![option("x", "One.")]),
            group("beta", vec![option("y", "Two.")]),
        ];

        let mut output = String::new();
        render_entries(&entries, HEADING_START_LEVEL, None, &mut output);

        assert_eq!(
            output,
            "### Alpha\n\n- `x`: One.\n\n### Beta\n\n- `y`: Two.\n"
        );
    }

    #[test]
    fn consecutive_headings_share_a_single_blank_line() {
        let entries = vec![
            group("alpha", vec![group("nested", vec![])]),
            group("beta", vec![]),
        ];

        let mut output = String::new();
        render_entries(&entries, HEADING_START_LEVEL, None, &mut output);

        // The blank after "#### Nested" is the only separator before
        // "### Beta": the deep heading is the latest emission when the
        // sibling section opens.
        assert_eq!(output, "### Alpha\n\n#### Nested\n\n### Beta\n\n");
    }

    #[test]
    fn deep_bullet_forces_blank_before_distant_sibling_section() {
        let entries = vec![
            group("alpha", vec![group("nested", vec![option("x", "One.")])]),
            group("beta", vec![]),
        ];

        let mut output = String::new();
        render_entries(&entries, HEADING_START_LEVEL, None, &mut output);

        assert_eq!(
            output,
            "### Alpha\n\n#### Nested\n\n- `x`: One.\n\n### Beta\n\n"
        );
    }

    #[test]
    fn verbatim_lines_follow_bullets_without_separator() {
        let entries = vec![
            option("flag", "Does things."),
            (
                "footnotes".to_string(),
                DocNode::Lines(vec!["[1]: A footnote.".to_string()]),
            ),
        ];

        let mut output = String::new();
        render_entries(&entries, HEADING_START_LEVEL, None, &mut output);

        assert_eq!(output, "- `flag`: Does things.\n[1]: A footnote.\n");
    }

    #[test]
    fn empty_lines_value_still_moves_the_cursor() {
        let entries = vec![
            group("alpha", vec![]),
            ("gap".to_string(), DocNode::Lines(Vec::new())),
            group("beta", vec![]),
        ];

        let mut output = String::new();
        render_entries(&entries, HEADING_START_LEVEL, None, &mut output);

        // The empty list emits nothing but counts as the latest emission,
        // so the second section gets a separating blank line on top of the
        // one following the first heading.
        assert_eq!(output, "### Alpha\n\n\n### Beta\n\n");
    }

    #[test]
    fn underscored_keys_become_title_cased_headings() {
        assert_eq!(heading_text("general_settings"), "General Settings");
        assert_eq!(heading_text("environment_vars"), "Environment Vars");
    }

    #[test]
    fn title_case_matches_word_boundary_rules() {
        assert_eq!(title_case("HTTP vars"), "Http Vars");
        assert_eq!(title_case("a1b"), "A1B");
        assert_eq!(title_case("job context"), "Job Context");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn render_matches_documented_example() {
        let document = Document::from_json(
            r#"{"docs": {"name": "n", "description": "d",
                "general": {"timeout": "Request timeout in seconds."}}}"#,
        )
        .unwrap();

        assert_eq!(
            render(&document),
            "### General\n\n- `timeout`: Request timeout in seconds.\n"
        );
    }

    #[test]
    fn bullet_count_equals_string_leaf_count() {
        let document = Document::from_json(
            r#"{"docs": {"name": "n", "description": "d",
                "a": {"one": "1.", "two": "2."},
                "b": {"c": {"three": "3."}}}}"#,
        )
        .unwrap();

        let output = render(&document);
        let bullets = output.lines().filter(|line| line.starts_with("- `")).count();

        assert_eq!(bullets, 3);
    }
}
