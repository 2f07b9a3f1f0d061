//! Vendor material name to base material key resolution.
//!
//! Vendor catalogs name materials inconsistently ("PETG-CF", "ePLA-LW",
//! "PA6-GF"), and those names rarely appear verbatim among the base
//! materials. Resolution walks [`RULES`] in order and stops at the first rule
//! whose pattern matches and whose target key is known. Earlier rules always
//! win.

use std::collections::HashSet;

use super::temps::BaseMaterialMap;

/// A set of canonical material keys to resolve against.
pub trait KnownKeys {
    fn contains_key(&self, key: &str) -> bool;
}

impl KnownKeys for BaseMaterialMap {
    fn contains_key(&self, key: &str) -> bool {
        BaseMaterialMap::contains_key(self, key)
    }
}

impl KnownKeys for HashSet<&str> {
    fn contains_key(&self, key: &str) -> bool {
        self.contains(key)
    }
}

/// Which part of the normalized input a rule inspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subject {
    /// The whole trimmed, uppercased input.
    Whole,
    /// The text before the first hyphen. Rules on the head are skipped for
    /// inputs without a hyphen.
    Head,
}

/// A test applied to the subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    Any,
    Equals(&'static str),
    Prefix(&'static str),
    Substring(&'static str),
}

impl Pattern {
    fn matches(self, subject: &str) -> bool {
        match self {
            Pattern::Any => true,
            Pattern::Equals(s) => subject == s,
            Pattern::Prefix(s) => subject.starts_with(s),
            Pattern::Substring(s) => subject.contains(s),
        }
    }
}

/// The key a matching rule proposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// A fixed canonical key.
    Key(&'static str),
    /// The subject itself.
    Subject,
}

/// One resolution heuristic.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub subject: Subject,
    /// The rule matches if any pattern matches.
    pub patterns: &'static [Pattern],
    pub target: Target,
}

impl Rule {
    /// The key this rule resolves `normalized` to, if it matches and the key
    /// is known.
    fn apply(&self, normalized: &str, known: &(impl KnownKeys + ?Sized)) -> Option<String> {
        let subject = match self.subject {
            Subject::Whole => normalized,
            Subject::Head => normalized.split_once('-')?.0,
        };

        if !self.patterns.iter().any(|p| p.matches(subject)) {
            return None;
        }

        let key = match self.target {
            Target::Key(key) => key,
            Target::Subject => subject,
        };
        known.contains_key(key).then(|| key.to_string())
    }
}

const fn rule(
    name: &'static str,
    subject: Subject,
    patterns: &'static [Pattern],
    target: Target,
) -> Rule {
    Rule {
        name,
        subject,
        patterns,
        target,
    }
}

use Pattern::{Any, Equals, Prefix, Substring};
use Subject::{Head, Whole};
use Target::Key;

/// Resolution rules in priority order.
///
/// The "pa-family" rule also claims PPA-prefixed names, so "PPA-GF" resolves
/// to "PA" whenever "PA" is known and only reaches "ppa-family" otherwise.
pub const RULES: &[Rule] = &[
    rule("exact", Whole, &[Any], Target::Subject),
    // Prefix families
    rule("pet-family", Whole, &[Prefix("PET")], Key("PETG")),
    rule("pa-family", Whole, &[Prefix("PA"), Prefix("PPA")], Key("PA")),
    rule("ppa-family", Whole, &[Prefix("PPA")], Key("PPA-CF")),
    // Text before the first hyphen
    rule("hyphen-pet", Head, &[Equals("PET")], Key("PETG")),
    rule("hyphen-pa", Head, &[Prefix("PA")], Key("PA")),
    rule("hyphen-head", Head, &[Any], Target::Subject),
    // Fuzzy fallback for branded names like "ePLA-LW"
    rule("fuzzy-pla", Whole, &[Substring("PLA")], Key("PLA")),
    rule("fuzzy-petg", Whole, &[Substring("PETG"), Prefix("PET")], Key("PETG")),
    rule("fuzzy-pctg", Whole, &[Substring("PCTG")], Key("PCTG")),
    rule("fuzzy-pps", Whole, &[Prefix("PPS")], Key("PPS")),
    rule("fuzzy-pc", Whole, &[Prefix("PC")], Key("PC")),
    rule("fuzzy-abs", Whole, &[Substring("ABS")], Key("ABS")),
    rule("fuzzy-asa", Whole, &[Substring("ASA")], Key("ASA")),
    rule("fuzzy-tpu", Whole, &[Substring("TPU")], Key("TPU")),
    rule("fuzzy-bvoh", Whole, &[Substring("BVOH")], Key("BVOH")),
    rule("fuzzy-pva", Whole, &[Substring("PVA")], Key("PVA")),
];

/// A successful resolution and the rule that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub key: String,
    pub rule: &'static str,
}

/// Resolve a vendor type string, reporting which rule fired.
pub fn resolve(type_value: &str, known: &(impl KnownKeys + ?Sized)) -> Option<Resolution> {
    let normalized = type_value.trim().to_uppercase();
    if normalized.is_empty() {
        return None;
    }

    RULES.iter().find_map(|rule| {
        rule.apply(&normalized, known).map(|key| Resolution {
            key,
            rule: rule.name,
        })
    })
}

/// Map a vendor type string onto a known base material key.
///
/// Returns `None` when nothing matches; that is an ordinary outcome.
pub fn normalize(type_value: &str, known: &(impl KnownKeys + ?Sized)) -> Option<String> {
    resolve(type_value, known).map(|r| r.key)
}
