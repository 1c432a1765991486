//! Night out plan parser
//!
//! The completion API is asked for a `###` title, bold numbered item
//! headings, an optional `### Budget-Friendly Tips:` block and a closing
//! line or two. Models follow that loosely, so parsing is a line classifier
//! driven by a small state machine rather than a Markdown grammar.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::category::Category;
use super::teaser::extract_teaser;

/// Title a plan starts with until the text provides a better one
pub const DEFAULT_TITLE: &str = "Your AI-Crafted Plan";

/// Title used when no candidate was found anywhere in the text
pub const FALLBACK_TITLE: &str = "Your Nightly Quest!";

/// Outro lines this long or longer are never promoted to the title
const MAX_PROMOTED_TITLE_CHARS: usize = 80;

/// A parsed night out plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedPlan {
    /// Display title of the plan
    pub title: String,
    /// Plan steps in document order
    pub items: Vec<PlanItem>,
    /// Tips block, heading line included
    pub tips_text: String,
    /// Free prose not captured as a title, item or tips
    pub outro_text: String,
}

impl Default for ParsedPlan {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            items: Vec::new(),
            tips_text: String::new(),
            outro_text: String::new(),
        }
    }
}

impl ParsedPlan {
    /// Whether nothing structured was recognized
    pub fn is_empty(&self) -> bool {
        self.items.is_empty() && self.tips_text.is_empty() && self.outro_text.is_empty()
    }
}

/// One step of a plan (a venue or activity)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanItem {
    /// Heading text without numbering or emphasis markers
    pub raw_title: String,
    /// First sentences of the body
    pub teaser: String,
    /// Whole body up to the next heading
    pub full_text: String,
    /// Icon hint derived from the title
    pub category: Category,
}

impl PlanItem {
    fn from_parts(raw_title: String, body: &str) -> Self {
        let full_text = body.trim().to_string();
        Self {
            teaser: extract_teaser(&full_text),
            category: Category::classify(&raw_title),
            raw_title,
            full_text,
        }
    }
}

fn title_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)^#{1,3}\s*((?:night out plan|your ai-crafted plan|your nightly quest).*)")
            .expect("title pattern is valid")
    })
}

fn item_heading_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^\s*\*\*(?:[0-9]+\.\s*)?(.+?)\*\*\s*$").expect("item pattern is valid")
    })
}

/// Matches the tips heading at the start of a line
pub(crate) fn tips_heading_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)^###\s*Budget-Friendly Tips:").expect("tips pattern is valid")
    })
}

/// What a single line looks like, independent of parser state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Line<'a> {
    /// `### Night Out Plan...` and friends, with the captured title
    Title(&'a str),
    /// `**1. Something**`, with the captured item title
    ItemHeading(&'a str),
    /// `### Budget-Friendly Tips:`
    TipsHeading,
    /// Anything else
    Text,
}

fn classify(line: &str) -> Line<'_> {
    let captured = |re: &Regex| {
        re.captures(line)
            .and_then(|caps| caps.get(1))
            .map_or("", |m| m.as_str().trim())
    };

    if title_pattern().is_match(line) {
        Line::Title(captured(title_pattern()))
    } else if item_heading_pattern().is_match(line) {
        Line::ItemHeading(captured(item_heading_pattern()))
    } else if tips_heading_pattern().is_match(line) {
        Line::TipsHeading
    } else {
        Line::Text
    }
}

fn starts_with_enjoy(line: &str) -> bool {
    line.trim().to_lowercase().starts_with("enjoy")
}

/// Where the parser is in the document
#[derive(Debug, Clone, PartialEq, Eq)]
enum Section {
    /// Nothing recognized yet; plain lines are dropped
    SearchingForTitle,
    /// Plan started but no item open; non-blank lines go to the outro
    InsideOutro,
    /// Accumulating the body of an item
    InsideItem { title: String, body: String },
    /// Tips heading seen; everything from here on is tips
    InsideTips,
}

impl Section {
    /// Close an open item, discarding it when its body is blank
    fn into_item(self) -> Option<PlanItem> {
        match self {
            Section::InsideItem { title, body } if !body.trim().is_empty() => {
                Some(PlanItem::from_parts(title, &body))
            }
            _ => None,
        }
    }
}

/// Fold state carried from line to line
#[derive(Debug)]
struct Accumulator {
    section: Section,
    title: String,
    items: Vec<PlanItem>,
    tips: String,
    outro: String,
}

impl Default for Accumulator {
    fn default() -> Self {
        Self {
            section: Section::SearchingForTitle,
            title: DEFAULT_TITLE.to_string(),
            items: Vec::new(),
            tips: String::new(),
            outro: String::new(),
        }
    }
}

fn push_line(buffer: &mut String, line: &str) {
    buffer.push_str(line);
    buffer.push('\n');
}

impl Accumulator {
    /// Transition on one line
    fn step(mut self, line: &str) -> Self {
        let section = std::mem::replace(&mut self.section, Section::SearchingForTitle);

        self.section = match (section, classify(line)) {
            (Section::InsideTips, _) => {
                push_line(&mut self.tips, line);
                Section::InsideTips
            }
            (Section::SearchingForTitle, Line::Title(title)) => {
                self.title = title.to_string();
                Section::InsideOutro
            }
            (open, Line::ItemHeading(title)) => {
                self.close(open);
                if title.is_empty() {
                    Section::InsideOutro
                } else {
                    Section::InsideItem {
                        title: title.to_string(),
                        body: String::new(),
                    }
                }
            }
            (open, Line::TipsHeading) => {
                self.close(open);
                push_line(&mut self.tips, line);
                Section::InsideTips
            }
            (Section::InsideItem { title, mut body }, _) => {
                push_line(&mut body, line);
                Section::InsideItem { title, body }
            }
            (Section::InsideOutro, _) => {
                if !line.trim().is_empty() {
                    push_line(&mut self.outro, line);
                }
                Section::InsideOutro
            }
            (Section::SearchingForTitle, _) => {
                if starts_with_enjoy(line) {
                    push_line(&mut self.outro, line);
                    Section::InsideOutro
                } else {
                    Section::SearchingForTitle
                }
            }
        };

        self
    }

    fn close(&mut self, section: Section) {
        if let Some(item) = section.into_item() {
            self.items.push(item);
        }
    }

    fn finish(self) -> ParsedPlan {
        let Accumulator {
            section,
            title,
            mut items,
            tips,
            outro,
        } = self;

        items.extend(section.into_item());

        let mut plan = ParsedPlan {
            title,
            items,
            tips_text: tips.trim().to_string(),
            outro_text: outro.trim().to_string(),
        };
        backfill_title(&mut plan);
        plan
    }
}

/// Promote the first outro line to the title when the text had none
fn backfill_title(plan: &mut ParsedPlan) {
    if plan.title == DEFAULT_TITLE && !plan.items.is_empty() && !plan.outro_text.is_empty() {
        let promoted = {
            let (first, rest) = plan
                .outro_text
                .split_once('\n')
                .unwrap_or((plan.outro_text.as_str(), ""));
            let candidate = first.trim_end();

            (candidate.chars().count() < MAX_PROMOTED_TITLE_CHARS && !starts_with_enjoy(candidate))
                .then(|| (candidate.to_string(), rest.trim().to_string()))
        };

        if let Some((title, outro)) = promoted {
            plan.title = title;
            plan.outro_text = outro;
        }
    }

    if plan.title == DEFAULT_TITLE {
        plan.title = FALLBACK_TITLE.to_string();
    }
}

/// Parse an AI-generated plan into title, items, tips and outro
///
/// Never fails: text that doesn't follow the expected layout just yields
/// fewer recognized sections. Two behaviors are deliberate carry-overs of
/// the heuristic and may surprise:
/// - once the tips heading is seen, every remaining line is tips;
/// - prose before any title, item or "enjoy..." line is dropped.
pub fn parse_plan(markdown: &str) -> ParsedPlan {
    if markdown.is_empty() {
        return ParsedPlan::default();
    }

    let plan = markdown
        .split('\n')
        .fold(Accumulator::default(), Accumulator::step)
        .finish();

    debug!(
        title = %plan.title,
        items = plan.items.len(),
        tips = !plan.tips_text.is_empty(),
        outro = !plan.outro_text.is_empty(),
        "Parsed plan"
    );

    plan
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_PLAN: &str = r#"### Your Nightly Quest: Downtown Delights
**1. Dinner at The Bistro**
Enjoy fresh seafood and live jazz. The patio overlooks the bay. Reservations recommended.
**2. Ghost Tour**
Walk the old streets after dark. Guides share eerie local history.
### Budget-Friendly Tips:
Parking is free after 6 PM downtown."#;

    #[test]
    fn test_parse_title() {
        let plan = parse_plan(SAMPLE_PLAN);
        assert_eq!(plan.title, "Your Nightly Quest: Downtown Delights");
    }

    #[test]
    fn test_parse_items() {
        let plan = parse_plan(SAMPLE_PLAN);
        assert_eq!(plan.items.len(), 2);
        assert_eq!(plan.items[0].raw_title, "Dinner at The Bistro");
        assert_eq!(plan.items[0].category, Category::Dining);
        assert_eq!(plan.items[1].raw_title, "Ghost Tour");
        assert_eq!(plan.items[1].category, Category::Exploration);
    }

    #[test]
    fn test_parse_item_text() {
        let plan = parse_plan(SAMPLE_PLAN);
        assert_eq!(
            plan.items[0].full_text,
            "Enjoy fresh seafood and live jazz. The patio overlooks the bay. Reservations recommended."
        );
        assert_eq!(
            plan.items[0].teaser,
            "Enjoy fresh seafood and live jazz. The patio overlooks the bay."
        );
    }

    #[test]
    fn test_parse_tips_keeps_heading() {
        let plan = parse_plan(SAMPLE_PLAN);
        assert_eq!(
            plan.tips_text,
            "### Budget-Friendly Tips:\nParking is free after 6 PM downtown."
        );
        assert!(plan.outro_text.is_empty());
    }

    #[test]
    fn test_empty_input() {
        let plan = parse_plan("");
        assert_eq!(plan, ParsedPlan::default());
        assert_eq!(plan.title, DEFAULT_TITLE);
    }

    #[test]
    fn test_whitespace_only_input() {
        let plan = parse_plan("  \n\n\t\n");
        assert!(plan.is_empty());
        assert_eq!(plan.title, FALLBACK_TITLE);
    }

    #[test]
    fn test_leading_prose_is_dropped() {
        let plan = parse_plan("Just go have fun tonight, nothing planned!");
        assert!(plan.items.is_empty());
        assert!(plan.outro_text.is_empty());
        assert!(plan.tips_text.is_empty());
    }

    #[test]
    fn test_prose_before_first_item_is_dropped() {
        let plan = parse_plan("Here's a plan.\n**1. Dinner**\nEat well.");
        assert_eq!(plan.items.len(), 1);
        assert!(plan.outro_text.is_empty());
        assert_eq!(plan.title, FALLBACK_TITLE);
    }

    #[test]
    fn test_enjoy_line_seeds_outro() {
        let input = "Enjoy your night exploring the old town!\n**1. Sunset Cruise**\nSail past the fort.";
        let plan = parse_plan(input);
        assert_eq!(plan.outro_text, "Enjoy your night exploring the old town!");
        assert_eq!(plan.title, FALLBACK_TITLE);
        assert_eq!(plan.items.len(), 1);
    }

    #[test]
    fn test_title_only_matches_before_plan_starts() {
        let input = "### Night Out Plan\n**Dinner**\nGood food.\n### Your Nightly Quest Part Two";
        let plan = parse_plan(input);
        assert_eq!(plan.title, "Night Out Plan");
        assert_eq!(
            plan.items[0].full_text,
            "Good food.\n### Your Nightly Quest Part Two"
        );
    }

    #[test]
    fn test_title_heading_levels() {
        assert_eq!(parse_plan("# night out plan for two").title, "night out plan for two");
        assert_eq!(parse_plan("###Your AI-Crafted Plan: Romance").title, "Your AI-Crafted Plan: Romance");
        assert_eq!(parse_plan("#### Night Out Plan").title, FALLBACK_TITLE);
    }

    #[test]
    fn test_intro_after_title_goes_to_outro() {
        let input = "### Night Out Plan\n\nA cozy evening awaits.\n\n**1. Dinner**\nGood food.";
        let plan = parse_plan(input);
        assert_eq!(plan.outro_text, "A cozy evening awaits.");
        assert_eq!(plan.title, "Night Out Plan");
    }

    #[test]
    fn test_unnumbered_and_indented_headings() {
        let input = "### Night Out Plan\n  **Rooftop Bar**  \nGreat views.\n**12.   Late Show**\nLaughs.";
        let plan = parse_plan(input);
        let titles: Vec<_> = plan.items.iter().map(|i| i.raw_title.as_str()).collect();
        assert_eq!(titles, vec!["Rooftop Bar", "Late Show"]);
    }

    #[test]
    fn test_item_with_blank_body_is_discarded() {
        let input = "### Night Out Plan\n**1. Dinner**\n\n**2. Drinks**\nCraft cocktails.";
        let plan = parse_plan(input);
        assert_eq!(plan.items.len(), 1);
        assert_eq!(plan.items[0].raw_title, "Drinks");
    }

    #[test]
    fn test_blank_bold_heading_closes_item() {
        let input = "### Night Out Plan\n**1. Dinner**\nGood food.\n**   **\nSee you there.";
        let plan = parse_plan(input);
        assert_eq!(plan.items.len(), 1);
        assert_eq!(plan.items[0].full_text, "Good food.");
        assert_eq!(plan.outro_text, "See you there.");
    }

    #[test]
    fn test_item_body_keeps_inner_blank_lines() {
        let input = "**1. Dinner**\nFirst paragraph.\n\nSecond paragraph.\n";
        let plan = parse_plan(input);
        assert_eq!(plan.items[0].full_text, "First paragraph.\n\nSecond paragraph.");
    }

    #[test]
    fn test_tips_absorb_everything_after() {
        let input = "### Night Out Plan\n**1. Dinner**\nGood food.\n### budget-friendly tips:\nGo early.\n**2. Drinks**\nCheap beer.\n### Budget-Friendly Tips: again\nEnjoy!";
        let plan = parse_plan(input);
        assert_eq!(plan.items.len(), 1);
        assert!(plan.tips_text.starts_with("### budget-friendly tips:"));
        assert!(plan.tips_text.contains("**2. Drinks**"));
        assert!(plan.tips_text.contains("### Budget-Friendly Tips: again"));
        assert!(plan.tips_text.ends_with("Enjoy!"));
        assert!(plan.outro_text.is_empty());
    }

    #[test]
    fn test_tips_without_items() {
        let plan = parse_plan("### Budget-Friendly Tips:\nBring cash.");
        assert!(plan.items.is_empty());
        assert_eq!(plan.tips_text, "### Budget-Friendly Tips:\nBring cash.");
        assert_eq!(plan.title, FALLBACK_TITLE);
    }

    #[test]
    fn test_backfill_needs_items_and_plain_first_line() {
        // "Enjoy!" starts the plan and the next lines go to outro, but no items
        let input = "Enjoy!\nA Night in the Old City\nHave a blast.\n";
        let plan = parse_plan(input);
        assert_eq!(plan.title, FALLBACK_TITLE);

        let input = "enjoy this\n**1. Dinner**\nFood.";
        let plan = parse_plan(input);
        assert_eq!(plan.outro_text, "enjoy this");
        assert_eq!(plan.title, FALLBACK_TITLE);
    }

    #[test]
    fn test_backfill_from_intro_line() {
        let mut plan = ParsedPlan {
            items: vec![PlanItem::from_parts("Dinner".to_string(), "Food.")],
            outro_text: "A Night in the Old City\nHave a blast.".to_string(),
            ..Default::default()
        };
        backfill_title(&mut plan);
        assert_eq!(plan.title, "A Night in the Old City");
        assert_eq!(plan.outro_text, "Have a blast.");
    }

    #[test]
    fn test_backfill_single_line_outro_is_moved() {
        let mut plan = ParsedPlan {
            items: vec![PlanItem::from_parts("Dinner".to_string(), "Food.")],
            outro_text: "A Night in the Old City".to_string(),
            ..Default::default()
        };
        backfill_title(&mut plan);
        assert_eq!(plan.title, "A Night in the Old City");
        assert!(plan.outro_text.is_empty());
    }

    #[test]
    fn test_backfill_skips_long_line() {
        let long_line = "x".repeat(MAX_PROMOTED_TITLE_CHARS);
        let mut plan = ParsedPlan {
            items: vec![PlanItem::from_parts("Dinner".to_string(), "Food.")],
            outro_text: long_line.clone(),
            ..Default::default()
        };
        backfill_title(&mut plan);
        assert_eq!(plan.title, FALLBACK_TITLE);
        assert_eq!(plan.outro_text, long_line);
    }

    #[test]
    fn test_backfill_requires_items() {
        let mut plan = ParsedPlan {
            outro_text: "Short line".to_string(),
            ..Default::default()
        };
        backfill_title(&mut plan);
        assert_eq!(plan.title, FALLBACK_TITLE);
        assert_eq!(plan.outro_text, "Short line");
    }

    #[test]
    fn test_crlf_line_endings() {
        let input = SAMPLE_PLAN.replace('\n', "\r\n");
        let plan = parse_plan(&input);
        assert_eq!(plan.title, "Your Nightly Quest: Downtown Delights");
        assert_eq!(plan.items.len(), 2);
        assert_eq!(plan.items[1].raw_title, "Ghost Tour");
    }

    #[test]
    fn test_classify_lines() {
        assert_eq!(classify("### Night Out Plan!"), Line::Title("Night Out Plan!"));
        assert_eq!(classify("**3. Drinks**"), Line::ItemHeading("Drinks"));
        assert_eq!(classify("### Budget-Friendly Tips: cheap"), Line::TipsHeading);
        assert_eq!(classify("**Bold** then text"), Line::Text);
        assert_eq!(classify(""), Line::Text);
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(parse_plan(SAMPLE_PLAN), parse_plan(SAMPLE_PLAN));
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(parse_plan(SAMPLE_PLAN)).unwrap();
        assert!(json.get("tipsText").is_some());
        assert!(json.get("outroText").is_some());
        assert_eq!(json["items"][0]["rawTitle"], "Dinner at The Bistro");
        assert_eq!(json["items"][1]["category"], "exploration");
    }
}
