//! Levenshtein edit distance.

/// Returns the minimum number of single-character insertions, deletions or
/// substitutions needed to turn `a` into `b`.
///
/// Distances are counted in Unicode scalar values, not bytes.
///
/// # Example
///
/// ```
/// use vehicles_query::edit_distance;
///
/// assert_eq!(edit_distance("kitten", "sitting"), 3);
/// assert_eq!(edit_distance("focus", ""), 5);
/// ```
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let width = b.len() + 1;
    let mut table = vec![0usize; (a.len() + 1) * width];
    for i in 0..=a.len() {
        table[i * width] = i;
    }
    for j in 0..=b.len() {
        table[j] = j;
    }

    for i in 1..=a.len() {
        for j in 1..=b.len() {
            let diagonal = table[(i - 1) * width + (j - 1)];
            table[i * width + j] = if a[i - 1] == b[j - 1] {
                diagonal
            } else {
                let deletion = table[(i - 1) * width + j];
                let insertion = table[i * width + (j - 1)];
                1 + deletion.min(insertion).min(diagonal)
            };
        }
    }

    table[a.len() * width + b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_example() {
        assert_eq!(edit_distance("kitten", "sitting"), 3);
        assert_eq!(edit_distance("sitting", "kitten"), 3);
    }

    #[test]
    fn empty_inputs() {
        assert_eq!(edit_distance("", ""), 0);
        assert_eq!(edit_distance("abc", ""), 3);
        assert_eq!(edit_distance("", "abcd"), 4);
    }

    #[test]
    fn identical_strings() {
        assert_eq!(edit_distance("Corolla", "Corolla"), 0);
    }

    #[test]
    fn single_operations() {
        assert_eq!(edit_distance("focus", "focs"), 1);
        assert_eq!(edit_distance("focus", "focuss"), 1);
        assert_eq!(edit_distance("focus", "locus"), 1);
    }

    #[test]
    fn case_sensitive() {
        assert_eq!(edit_distance("Mazda", "mazda"), 1);
    }

    #[test]
    fn counts_characters_not_bytes() {
        assert_eq!(edit_distance("citroën", "citroen"), 1);
    }
}
