// crates/gazetteer-core/src/distance.rs

/// Classical Levenshtein edit distance between two strings, counted in
/// `char`s: the minimum number of single-character insertions, deletions
/// and substitutions needed to turn `a` into `b`.
///
/// Callers are expected to pass already-normalized strings (see
/// [`crate::text::normalize`]); the function itself performs no folding,
/// so `edit_distance("Berlin", "berlin")` is 1, not 0.
///
/// O(|a|·|b|) time. The table is kept as two rows sized by the shorter
/// string, so space is O(min(|a|,|b|)).
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    // Rows run along the shorter string.
    let (outer, inner) = if a.len() >= b.len() { (&a, &b) } else { (&b, &a) };
    if inner.is_empty() {
        return outer.len();
    }

    let mut prev: Vec<usize> = (0..=inner.len()).collect();
    let mut curr: Vec<usize> = vec![0; inner.len() + 1];

    for (i, &oc) in outer.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &ic) in inner.iter().enumerate() {
            let cost = usize::from(oc != ic);
            curr[j + 1] = (prev[j + 1] + 1) // deletion
                .min(curr[j] + 1) // insertion
                .min(prev[j] + cost); // substitution
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[inner.len()]
}
