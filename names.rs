use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

// Compile the delimiter pattern once: any maximal run of characters that are
// not ASCII alphanumerics or underscore.
static NAME_DELIM: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^0-9a-zA-Z_]+").unwrap());

/// Split text into identifier-like names. Leading/trailing delimiters leave
/// empty strings at the boundaries, and those empties count like any other
/// name downstream; empty input yields a single empty string.
pub fn name_list(content: &str) -> Vec<&str> {
    NAME_DELIM.split(content).collect()
}

/// Occurrence counts keyed by name, iterating in first-seen order so the
/// report comes out identical run after run.
pub struct NameCounts {
    index: HashMap<String, usize>,
    entries: Vec<(String, usize)>,
}

impl NameCounts {
    /// Tally names in order. No case-folding, no trimming, no filtering.
    pub fn tally<'a, I>(names: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut counts = NameCounts {
            index: HashMap::new(),
            entries: Vec::new(),
        };
        for name in names {
            match counts.index.get(name).copied() {
                Some(i) => counts.entries[i].1 += 1,
                None => {
                    counts.index.insert(name.to_string(), counts.entries.len());
                    counts.entries.push((name.to_string(), 1));
                }
            }
        }
        counts
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(name, count)| (name.as_str(), *count))
    }

    pub fn get(&self, name: &str) -> Option<usize> {
        self.index.get(name).map(|&i| self.entries[i].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for NameCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
