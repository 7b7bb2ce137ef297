//! Instruction Highlighter
//!
//! Tags substrings of a prep instruction (temperatures, durations,
//! quantities, cooking verbs) for display emphasis. The text itself is never
//! altered: concatenating the fragments reproduces the input.
//!
//! Matchers are tried as an ordered list. At each scan position the
//! earliest match wins and ties go to the matcher listed first, so
//! "4 hours" is always a duration and never a bare quantity.

use std::sync::OnceLock;

use regex::Regex;

/// Emphasis class of a fragment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Highlight {
    Plain,
    Temperature,
    Duration,
    Quantity,
    Verb,
}

impl Highlight {
    pub fn as_str(&self) -> &'static str {
        match self {
            Highlight::Plain => "plain",
            Highlight::Temperature => "temperature",
            Highlight::Duration => "duration",
            Highlight::Quantity => "quantity",
            Highlight::Verb => "verb",
        }
    }
}

/// A contiguous slice of the input with its emphasis class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fragment<'a> {
    pub highlight: Highlight,
    pub text: &'a str,
}

impl<'a> Fragment<'a> {
    fn new(highlight: Highlight, text: &'a str) -> Self {
        Self { highlight, text }
    }
}

/// Imperative verbs emphasized when they appear as whole words
pub const COOKING_VERBS: &[&str] = &[
    "Add", "Cook", "Stir", "Combine", "Heat", "Remove", "Bring", "Reduce", "Cover", "Roast",
    "Preheat", "Arrange", "Let", "Divide", "Transfer", "Label", "Wash", "Wipe", "Organize",
    "Check", "Set", "Ensure", "Form", "Fry", "Top", "Toss", "Spread", "Layer", "Roll", "Cut",
    "Warm", "Flip", "Fold", "Whisk", "Toast", "Rinse", "Massage", "Break", "Peel",
];

/// A number: digits with an optional simple or vulgar fraction, or a lone
/// vulgar fraction ("2", "1/2", "1½", "¾")
const NUMBER: &str = r"(?:\d+(?:/\d+)?[½¼¾⅓⅔⅛]?|[½¼¾⅓⅔⅛])";

struct Matcher {
    highlight: Highlight,
    pattern: Regex,
}

fn matchers() -> &'static [Matcher] {
    static MATCHERS: OnceLock<Vec<Matcher>> = OnceLock::new();
    MATCHERS.get_or_init(|| {
        let range = format!(r"{n}(?:\s*[-–]\s*{n})?", n = NUMBER);
        let verbs = COOKING_VERBS.join("|");
        [
            (Highlight::Temperature, r"(?i)\d+\s*(?:°\s*F|degrees\b)".to_string()),
            (
                Highlight::Duration,
                format!(r"(?i){}\s*(?:minutes?|hours?|seconds?)\b", range),
            ),
            (
                Highlight::Quantity,
                format!(r"(?i){}(?:\s*|-)(?:cups?|tbsp|tsp|lbs?|oz|cloves?|inch(?:es)?)\b", range),
            ),
            (Highlight::Verb, format!(r"(?i)\b(?:{})\b", verbs)),
        ]
        .into_iter()
        .map(|(highlight, source)| Matcher {
            highlight,
            pattern: Regex::new(&source).expect("highlight pattern is valid"),
        })
        .collect()
    })
}

/// Split `text` into tagged fragments covering it exactly
pub fn annotate(text: &str) -> Vec<Fragment<'_>> {
    let mut fragments = Vec::new();
    let mut pos = 0;

    while pos < text.len() {
        let mut next: Option<(Highlight, regex::Match)> = None;
        for matcher in matchers() {
            let Some(found) = matcher.pattern.find_at(text, pos) else {
                continue;
            };
            // earliest start wins, ties keep the matcher listed first
            if !found.is_empty() && next.map_or(true, |(_, best)| found.start() < best.start()) {
                next = Some((matcher.highlight, found));
            }
        }

        let Some((highlight, found)) = next else {
            fragments.push(Fragment::new(Highlight::Plain, &text[pos..]));
            break;
        };

        if found.start() > pos {
            fragments.push(Fragment::new(Highlight::Plain, &text[pos..found.start()]));
        }
        fragments.push(Fragment::new(highlight, found.as_str()));
        pos = found.end();
    }

    fragments
}
