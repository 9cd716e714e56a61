//! Name ordering for summary tables.

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Compare two names the way a person reading a skill list expects.
///
/// Levels, each consulted only on a tie at the one before:
/// 1. base letters, ignoring accents and case
/// 2. accents, unaccented first
/// 3. case, lowercase first
/// 4. code points, so the result is total
///
/// ```
/// use std::cmp::Ordering;
/// use tmplbldr_domain::common::locale_cmp;
///
/// assert_eq!(locale_cmp("anatomy", "Bushido"), Ordering::Less);
/// assert_eq!(locale_cmp("Éclair", "Fencing"), Ordering::Less);
/// assert_eq!(locale_cmp("magery", "Magery"), Ordering::Less);
/// ```
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| accented(a).cmp(&accented(b)))
        .then_with(|| {
            a.nfd()
                .filter(|c| !is_combining_mark(*c))
                .map(char::is_uppercase)
                .cmp(b.nfd().filter(|c| !is_combining_mark(*c)).map(char::is_uppercase))
        })
        .then_with(|| a.cmp(b))
}

fn base_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

/// Per base letter, whether it carries a mark
fn accented(s: &str) -> Vec<bool> {
    let mut marks = Vec::new();
    for c in s.nfd() {
        if is_combining_mark(c) {
            if let Some(last) = marks.last_mut() {
                *last = true;
            }
        } else {
            marks.push(false);
        }
    }
    marks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(names: &[&str]) -> Vec<String> {
        let mut names: Vec<String> = names.iter().map(|s| s.to_string()).collect();
        names.sort_by(|a, b| locale_cmp(a, b));
        names
    }

    #[test]
    fn orders_case_insensitively() {
        assert_eq!(
            sorted(&["tactics", "Anatomy", "Magery", "bushido"]),
            vec!["Anatomy", "bushido", "Magery", "tactics"]
        );
    }

    #[test]
    fn lowercase_precedes_uppercase_on_tie() {
        assert_eq!(sorted(&["Parry", "parry"]), vec!["parry", "Parry"]);
    }

    #[test]
    fn accented_letters_sort_with_their_base_letter() {
        assert_eq!(
            sorted(&["Zoology", "Éclair", "Fencing", "Eagle"]),
            vec!["Eagle", "Éclair", "Fencing", "Zoology"]
        );
        assert_eq!(sorted(&["Österreich", "Zen", "Ox"]), vec!["Österreich", "Ox", "Zen"]);
    }

    #[test]
    fn unaccented_precedes_accented_on_tie() {
        assert_eq!(sorted(&["Éclair", "Eclair"]), vec!["Eclair", "Éclair"]);
        assert_eq!(locale_cmp("resume", "résumé"), Ordering::Less);
    }

    #[test]
    fn precomposed_and_decomposed_forms_tie_before_code_points() {
        let composed = "Caf\u{e9}";
        let decomposed = "Cafe\u{301}";
        assert_eq!(locale_cmp(composed, "Cafes"), Ordering::Less);
        assert_eq!(locale_cmp(decomposed, "Cafes"), Ordering::Less);
        assert_ne!(locale_cmp(composed, decomposed), Ordering::Equal);
    }

    #[test]
    fn prefix_sorts_first() {
        assert_eq!(locale_cmp("Magic", "Magic Resist"), Ordering::Less);
        assert_eq!(locale_cmp("Magic Resist", "Magic"), Ordering::Greater);
    }

    #[test]
    fn identical_names_are_equal() {
        assert_eq!(locale_cmp("Spirit Speak", "Spirit Speak"), Ordering::Equal);
    }
}
