//! Helpers for pulling structure out of model responses.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static HEADING: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#{1,3}\s+(.+)").unwrap());
static NUMBERED_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*\d+\.\s+(.+)").unwrap());

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedSection {
    /// Empty for text before the first heading
    pub heading: String,
    pub content: String,
}

/// Split markdown on `#` to `###` headings. Content is trimmed; a leading
/// untitled section is kept only when the response starts with text.
pub fn parse_markdown_sections(markdown: &str) -> Vec<ParsedSection> {
    let mut sections = Vec::new();
    let mut heading = String::new();
    let mut content: Vec<&str> = Vec::new();

    for line in markdown.split('\n') {
        if let Some(caps) = HEADING.captures(line) {
            if !heading.is_empty() || !content.is_empty() {
                sections.push(ParsedSection {
                    heading: std::mem::take(&mut heading),
                    content: content.join("\n").trim().to_string(),
                });
            }
            heading = caps[1].to_string();
            content.clear();
        } else {
            content.push(line);
        }
    }

    if !heading.is_empty() || !content.is_empty() {
        sections.push(ParsedSection {
            heading,
            content: content.join("\n").trim().to_string(),
        });
    }
    sections
}

/// Items of every `1. foo` style line, trimmed.
pub fn extract_numbered_items(text: &str) -> Vec<String> {
    text.split('\n')
        .filter_map(|line| NUMBERED_ITEM.captures(line))
        .map(|caps| caps[1].trim().to_string())
        .collect()
}

/// Score next to `label`, as in `Severity: 4/5` or `4 - Severity`.
/// Case-insensitive; `None` when neither form appears. Only the first form
/// that matches is read, even when its digits do not fit.
pub fn extract_score(text: &str, label: &str) -> Option<u64> {
    let label = regex::escape(label);
    let patterns = [
        format!(r"(?i){label}[:\s]+(\d+)(?:/\d+)?"),
        format!(r"(?i)(\d+)(?:/\d+)?\s*[-–]?\s*{label}"),
    ];
    let digits = patterns.iter().find_map(|pattern| {
        let re = Regex::new(pattern).ok()?;
        re.captures(text).map(|caps| caps[1].to_string())
    })?;
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_sections_split_on_headings() {
        let text = indoc! {"
            Intro line
            ## Assessment
            Looks complete.

            ### Gaps
            1. Missing appeal data
            2. No remote breakdown
        "};
        let sections = parse_markdown_sections(text);
        assert_eq!(sections.len(), 3);
        assert_eq!(sections[0].heading, "");
        assert_eq!(sections[0].content, "Intro line");
        assert_eq!(sections[1].heading, "Assessment");
        assert_eq!(sections[1].content, "Looks complete.");
        assert_eq!(
            extract_numbered_items(&sections[2].content),
            vec!["Missing appeal data", "No remote breakdown"]
        );
    }

    #[test]
    fn test_heading_only_response() {
        let sections = parse_markdown_sections("# Summary");
        assert_eq!(
            sections,
            vec![ParsedSection {
                heading: "Summary".into(),
                content: String::new()
            }]
        );
    }

    #[test]
    fn test_extract_score_forms() {
        assert_eq!(extract_score("Severity: 4/5 because...", "Severity"), Some(4));
        assert_eq!(extract_score("suggest severity 3", "Severity"), Some(3));
        assert_eq!(extract_score("I'd rate it 5 - Scope", "scope"), Some(5));
        assert_eq!(extract_score("no numbers here", "Severity"), None);
    }

    #[test]
    fn test_extract_score_stops_at_first_form() {
        let text = "Severity: 99999999999999999999999 overall, 4 - Severity";
        assert_eq!(extract_score(text, "Severity"), None);
        assert_eq!(extract_score("Scope: 5000000000", "Scope"), Some(5_000_000_000));
    }
}
