use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Non-greedy: `"A (B (C)) D"` keeps `") D"` because the match stops at the first `)`.
static PARENTHETICAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\([^)]*\)").expect("parenthetical pattern compiles"));

const SEPARATORS: [char; 4] = [',', ';', '\n', '\t'];

/// Canonical form of a single ingredient name, used as the knowledge-base key.
pub fn normalize_ingredient(text: &str) -> String {
    let lowered = text.trim().to_lowercase();
    let spaced = collapse_whitespace(&lowered).replace('/', " / ");
    collapse_whitespace(&spaced)
}

/// Splits a free-form label into ordered, unique canonical ingredient names.
///
/// Parenthetical asides are dropped before splitting on commas, semicolons,
/// newlines and tabs. Later duplicates of an already seen name are discarded.
pub fn parse_ingredients(raw: &str) -> Vec<String> {
    if raw.trim().is_empty() {
        return Vec::new();
    }

    let without_asides = PARENTHETICAL.replace_all(raw, "");

    let mut seen = HashSet::new();
    let mut ingredients = Vec::new();
    for candidate in without_asides.split(SEPARATORS) {
        let candidate = candidate.trim();
        if candidate.is_empty() {
            continue;
        }

        let name = normalize_ingredient(candidate);
        if !name.is_empty() && seen.insert(name.clone()) {
            ingredients.push(name);
        }
    }

    ingredients
}

fn collapse_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}
