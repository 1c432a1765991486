//! Terminal display of parsed plans
//!
//! The parser never fails, so this layer owns the recovery: when nothing
//! structured was recognized the original text is shown verbatim.

use std::fmt;

use crate::plan::{tips_heading_pattern, ParsedPlan};

/// How a plan will be shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    /// Numbered steps plus tips and outro panels
    Structured,
    /// Nothing recognized; show the generated text as is
    Raw,
    /// No generated text at all
    Empty,
}

/// A parsed plan paired with the text it came from, ready to print
#[derive(Debug, Clone, Copy)]
pub struct PlanDisplay<'a> {
    plan: &'a ParsedPlan,
    raw: &'a str,
    full_text: bool,
}

impl<'a> PlanDisplay<'a> {
    /// Create a display for a plan and the raw text it was parsed from
    pub fn new(plan: &'a ParsedPlan, raw: &'a str) -> Self {
        Self {
            plan,
            raw,
            full_text: false,
        }
    }

    /// Show each item's full text instead of its teaser
    pub fn with_full_text(mut self, full_text: bool) -> Self {
        self.full_text = full_text;
        self
    }

    /// Decide what to show
    pub fn mode(&self) -> DisplayMode {
        if !self.plan.is_empty() {
            DisplayMode::Structured
        } else if !self.raw.trim().is_empty() {
            DisplayMode::Raw
        } else {
            DisplayMode::Empty
        }
    }

    fn write_structured(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, item) in self.plan.items.iter().enumerate() {
            writeln!(f, "{}. {} {}", index + 1, item.category.icon(), item.raw_title)?;
            let body = if self.full_text {
                &item.full_text
            } else {
                &item.teaser
            };
            write_indented(f, body)?;
            writeln!(f)?;
        }

        let tips = strip_tips_heading(&self.plan.tips_text);
        if !tips.is_empty() {
            writeln!(f, "💡 Helpful Hints")?;
            write_indented(f, tips)?;
            writeln!(f)?;
        }

        if !self.plan.outro_text.is_empty() {
            writeln!(f, "🧭 Your Adventure Awaits!")?;
            write_indented(f, &self.plan.outro_text)?;
        }

        Ok(())
    }
}

impl fmt::Display for PlanDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mode = self.mode();
        if mode == DisplayMode::Empty {
            return Ok(());
        }

        writeln!(f, "{}", self.plan.title)?;
        writeln!(f, "{}", "=".repeat(self.plan.title.chars().count()))?;
        writeln!(f)?;

        match mode {
            DisplayMode::Structured => self.write_structured(f),
            DisplayMode::Raw => writeln!(f, "{}", self.raw.trim_end()),
            DisplayMode::Empty => Ok(()),
        }
    }
}

fn write_indented(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
    for line in text.lines() {
        if line.trim().is_empty() {
            writeln!(f)?;
        } else {
            writeln!(f, "   {}", line)?;
        }
    }
    Ok(())
}

/// Remove the `### Budget-Friendly Tips:` heading the parser keeps in tips
pub fn strip_tips_heading(tips: &str) -> &str {
    match tips_heading_pattern().find(tips) {
        Some(m) => tips[m.end()..].trim(),
        None => tips.trim(),
    }
}
