use std::fs;
use std::path::Path;

use regex::Regex;

/// Ordered key → icon-token mapping pulled out of an icon source file.
/// Insertion order is first-seen order; a repeated key replaces its token
/// list in place.
#[derive(Debug, Clone, Default)]
pub struct IconHints {
    entries: Vec<(String, Vec<String>)>,
}

impl IconHints {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn keys(&self) -> Vec<&str> {
        self.entries.iter().map(|(key, _)| key.as_str()).collect()
    }

    pub fn tokens_for(&self, key: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(entry_key, _)| entry_key == key)
            .map(|(_, tokens)| tokens.as_slice())
    }

    fn insert(&mut self, key: String, tokens: Vec<String>) {
        if let Some(slot) = self
            .entries
            .iter_mut()
            .find(|(entry_key, _)| *entry_key == key)
        {
            slot.1 = tokens;
            return;
        }
        self.entries.push((key, tokens));
    }
}

/// Reads the icon source file and extracts hints. A missing or unreadable
/// file is "no hints available", never an error.
pub fn load_icon_hints(path: Option<&Path>) -> IconHints {
    let Some(path) = path else {
        return IconHints::default();
    };
    match fs::read_to_string(path) {
        Ok(text) => extract_icon_map(&text),
        Err(_) => IconHints::default(),
    }
}

/// Heuristic scan for a map literal named `iconCategories`.
///
/// The top-level block is located by manual brace-depth counting, not a real
/// parser: braces inside string literals, comments, or escapes will confuse
/// it. Within the block, `"key": [ ... ]` entries are matched and their
/// `Icons.<ident>` tokens collected, deduplicated in first-seen order.
/// Anything unparseable degrades to an empty mapping.
pub fn extract_icon_map(text: &str) -> IconHints {
    let Some(block) = map_literal_block(text) else {
        return IconHints::default();
    };

    let Ok(entry_pattern) = Regex::new(r#"(?s)['"]([^'"]+)['"]\s*:\s*\[(.*?)\]"#) else {
        return IconHints::default();
    };
    let Ok(token_pattern) = Regex::new(r"Icons\.[A-Za-z0-9_]+") else {
        return IconHints::default();
    };

    let mut hints = IconHints::default();
    for captures in entry_pattern.captures_iter(block) {
        let (Some(key), Some(list)) = (captures.get(1), captures.get(2)) else {
            continue;
        };

        let mut tokens: Vec<String> = Vec::new();
        for token in token_pattern.find_iter(list.as_str()) {
            let value = token.as_str();
            if !tokens.iter().any(|existing| existing == value) {
                tokens.push(value.to_string());
            }
        }
        hints.insert(key.as_str().trim().to_string(), tokens);
    }

    hints
}

fn map_literal_block(text: &str) -> Option<&str> {
    let Ok(header) = Regex::new(r"iconCategories\s*=\s*\{") else {
        return None;
    };
    let found = header.find(text)?;
    let start = found.end() - 1;

    let mut depth = 0i32;
    for (offset, ch) in text[start..].char_indices() {
        match ch {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..=start + offset]);
                }
            }
            _ => {}
        }
    }
    // ran off the end with unbalanced braces
    None
}
