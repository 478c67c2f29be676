//! Word frequency counting.

use std::{path::Path, sync::LazyLock};

use indexmap::IndexMap;
use regex::Regex;

use crate::{error::ToolError, input::read_text};

static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+").expect("word pattern is valid"));

/// Word to count, in order of first appearance
pub type WordFrequencies = IndexMap<String, usize>;

/// Count lower-cased `\w+` tokens line by line.
pub fn count_words(text: &str) -> WordFrequencies {
    let mut frequencies = WordFrequencies::new();
    for line in text.lines() {
        let line = line.to_lowercase();
        for word in WORD.find_iter(&line) {
            *frequencies.entry(word.as_str().to_string()).or_default() += 1;
        }
    }
    frequencies
}

pub fn count_words_in_file(path: &Path) -> Result<WordFrequencies, ToolError> {
    Ok(count_words(&read_text(path)?))
}

/// `Word Frequencies:` followed by one `word: count` line per word
pub fn render(frequencies: &WordFrequencies) -> String {
    let mut out = String::from("Word Frequencies:\n");
    for (word, count) in frequencies {
        out.push_str(&format!("{word}: {count}\n"));
    }
    out
}
