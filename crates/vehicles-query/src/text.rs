//! Case-insensitive text comparisons.
//!
//! Both helpers fold case the same way: each character goes through its
//! Unicode uppercase mapping, independent of any locale. `"MAZDA"`, `"mazda"`
//! and `"Mazda"` compare equal everywhere, and so do the two lowercase forms
//! of sigma.

fn fold(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars().flat_map(char::to_uppercase)
}

/// Whole-value equality ignoring case.
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    if a.is_ascii() && b.is_ascii() {
        return a.eq_ignore_ascii_case(b);
    }
    fold(a).eq(fold(b))
}

/// Substring test ignoring case. An empty needle is contained in everything.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    if haystack.is_ascii() && needle.is_ascii() {
        return haystack
            .to_ascii_lowercase()
            .contains(&needle.to_ascii_lowercase());
    }
    fold(haystack)
        .collect::<String>()
        .contains(&fold(needle).collect::<String>())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eq_folds_ascii_case() {
        assert!(eq_ignore_case("Mazda", "mazda"));
        assert!(eq_ignore_case("MANUAL", "Manual"));
        assert!(!eq_ignore_case("Mazda", "Mazda 3"));
    }

    #[test]
    fn eq_folds_unicode_case() {
        assert!(eq_ignore_case("CITROËN", "citroën"));
        assert!(!eq_ignore_case("citroën", "citroen"));
    }

    #[test]
    fn eq_is_whole_value() {
        assert!(!eq_ignore_case("Red", "Dark Red"));
        assert!(eq_ignore_case("", ""));
    }

    #[test]
    fn contains_folds_case() {
        assert!(contains_ignore_case("Dark Red", "red"));
        assert!(contains_ignore_case("Unleaded", "LEAD"));
        assert!(!contains_ignore_case("Blue", "red"));
    }

    #[test]
    fn final_sigma_folds_like_medial_sigma() {
        assert!(eq_ignore_case("ΟΔΟΣ", "οδος"));
        assert!(eq_ignore_case("ΟΔΟΣ", "οδοσ"));
        assert!(contains_ignore_case("ΟΔΟΣ", "οδος"));
        assert!(contains_ignore_case("ΟΔΟΣ", "οδοσ"));
    }

    #[test]
    fn eq_and_contains_agree_on_whole_values() {
        for (a, b) in [("ΟΔΟΣ", "οδος"), ("CITROËN", "citroën"), ("Straße", "STRASSE"), ("Red", "blue")] {
            assert_eq!(eq_ignore_case(a, b), contains_ignore_case(a, b) && contains_ignore_case(b, a));
        }
    }

    #[test]
    fn empty_needle_always_matches() {
        assert!(contains_ignore_case("", ""));
        assert!(contains_ignore_case("anything", ""));
    }
}
