//! Raw text cleanup
//!
//! Extracted lecture notes and slide decks carry page furniture (titles,
//! honorifics, institution names, page labels, bullets, dates) that would
//! otherwise dominate phrase counts. The normalizer removes it and reduces
//! the text to word characters, whitespace and light punctuation.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
    // The trailing `\b` only lets a period go when a word character follows,
    // so "Dr. Smith" loses "Dr" and keeps the period.
    static ref HONORIFICS: Regex = Regex::new(
        r"(?i)\b(?:mr\.?|mrs\.?|ms\.?|dr\.?|prof\.?|professor|assistant\s+professor)\b"
    )
    .unwrap();
    static ref BOILERPLATE: Regex = Regex::new(concat!(
        r"(?i)\b(?:university|department|overview|introduction|kjsce|college",
        r"|page|lecture|roll|email|contact)\b"
    ))
    .unwrap();
    static ref BULLETS: Regex = Regex::new(r"[•*]").unwrap();
    static ref DATES: Regex = Regex::new(r"[0-9]{1,2}/[0-9]{1,2}/[0-9]{2,4}").unwrap();
    static ref DISALLOWED: Regex = Regex::new(r"[^A-Za-z0-9_\s.,()/-]").unwrap();
}

/// Text normalizer
#[derive(Debug, Clone, Copy, Default)]
pub struct Normalizer;

impl Normalizer {
    pub fn new() -> Self {
        Self
    }

    /// Clean raw text.
    ///
    /// Rules run in order: collapse whitespace, drop honorifics and titles,
    /// drop institutional boilerplate,
    /// blank out bullets, drop dates, drop disallowed characters. The chain
    /// is repeated until the text stops changing, so the result is a fixed
    /// point: normalizing it again is a no-op.
    pub fn normalize(&self, raw: &str) -> String {
        // A pass that changes the text either shortens it or turns a `*`
        // into a space, so this terminates; real input settles in one or two.
        let mut current = self.clean_once(raw);
        loop {
            let next = self.clean_once(&current);
            if next == current {
                return current;
            }
            current = next;
        }
    }

    fn clean_once(&self, text: &str) -> String {
        let text = WHITESPACE.replace_all(text, " ");
        let text = HONORIFICS.replace_all(&text, "");
        let text = BOILERPLATE.replace_all(&text, "");
        let text = BULLETS.replace_all(&text, " ");
        let text = DATES.replace_all(&text, "");
        let text = DISALLOWED.replace_all(&text, "");
        WHITESPACE.replace_all(&text, " ").trim().to_string()
    }
}

/// Normalize text with the default normalizer
pub fn normalize(raw: &str) -> String {
    Normalizer.normalize(raw)
}
