use crate::manual::anchor::heading_anchor;
use crate::manual::numbering::SerialNumbers;
use crate::types::{Article, ArticleContent, Heading};
use regex::Regex;
use std::sync::LazyLock;

static TITLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#[ \t]+(.+?)(?:[ \t]+#+)?[ \t]*$").expect("TITLE_RE should compile")
});
static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(#{2,6})[ \t]+(.+?)(?:[ \t]+#+)?[ \t]*$").expect("HEADING_RE should compile")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawHeading {
    pub level: u8,
    pub text: String,
}

/// Parses one article into its title and numbered headings.
///
/// `numbering` must be fresh for this article. Unavailable content parses as
/// an empty document: no title and no headings.
pub fn parse_article(
    article_id: &str,
    content: &ArticleContent,
    numbering: &mut SerialNumbers,
) -> Article {
    let text = content.as_text();
    let headings = extract_headings(text)
        .into_iter()
        .map(|raw| Heading {
            serial_number: numbering.next(raw.level),
            anchor: heading_anchor(&raw.text),
            level: raw.level,
            text: raw.text,
        })
        .collect();

    Article {
        id: article_id.to_string(),
        title: extract_title(text),
        headings,
    }
}

/// The first `# Title` line that is followed by a blank line.
pub fn extract_title(text: &str) -> Option<String> {
    heading_lines(text).find_map(|line| {
        TITLE_RE
            .captures(line)
            .map(|caps| caps[1].trim().to_string())
    })
}

/// All `##`..`######` headings followed by a blank line, in document order.
pub fn extract_headings(text: &str) -> Vec<RawHeading> {
    heading_lines(text)
        .filter_map(|line| {
            let caps = HEADING_RE.captures(line)?;
            Some(RawHeading {
                level: caps[1].len() as u8,
                text: caps[2].trim().to_string(),
            })
        })
        .collect()
}

/// Candidate heading lines: outside fenced code and followed by a blank line
/// (or the end of the document).
fn heading_lines(text: &str) -> impl Iterator<Item = &str> {
    let lines: Vec<&str> = text.lines().collect();
    let mut fence: Option<&str> = None;
    let mut candidates = Vec::new();

    for (index, line) in lines.iter().enumerate() {
        let trimmed = line.trim_start();
        if let Some(marker) = fence_marker(trimmed) {
            match fence {
                Some(open) if open == marker => fence = None,
                Some(_) => {}
                None => fence = Some(marker),
            }
            continue;
        }
        if fence.is_some() || !line.starts_with('#') {
            continue;
        }
        let next_is_blank = lines
            .get(index + 1)
            .map_or(true, |next| next.trim().is_empty());
        if next_is_blank {
            candidates.push(*line);
        }
    }

    candidates.into_iter()
}

fn fence_marker(line: &str) -> Option<&'static str> {
    if line.starts_with("```") {
        Some("```")
    } else if line.starts_with("~~~") {
        Some("~~~")
    } else {
        None
    }
}
