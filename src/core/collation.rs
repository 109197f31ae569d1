//! Locale-aware string ordering for table sorts.
//!
//! Three levels, like a default-locale collator: base letters compared
//! without accents or case, then accents, then case (lowercase first).
//! Code point order breaks any remaining tie. So
//! `"apple" < "Banana" < "banana"` and `"Élan" < "Emu" < "Zebu"`.

use std::cmp::Ordering;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    primary(a, b)
        .then_with(|| accents(a, b))
        .then_with(|| case_order(a, b))
        .then_with(|| a.cmp(b))
}

fn base_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

fn primary(a: &str, b: &str) -> Ordering {
    base_letters(a).cmp(base_letters(b))
}

// Unaccented sorts first: any base letter is below U+0300, where the
// combining marks start.
fn accents(a: &str, b: &str) -> Ordering {
    a.nfd()
        .flat_map(char::to_lowercase)
        .cmp(b.nfd().flat_map(char::to_lowercase))
}

fn case_order(a: &str, b: &str) -> Ordering {
    for (x, y) in a.nfd().zip(b.nfd()) {
        if x == y {
            continue;
        }
        // Same letter, different case: lowercase wins.
        match (x.is_lowercase(), y.is_lowercase()) {
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            _ => {}
        }
    }
    Ordering::Equal
}
