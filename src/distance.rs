//! String-similarity primitive used by the misspelled-keyword analyzer.

/// Levenshtein edit distance between `a` and `b`.
///
/// Counts the minimum number of insertions, deletions, and substitutions,
/// comparing characters case-insensitively. Classic dynamic programming over
/// the full matrix: O(len(a) * len(b)) time and space.
///
/// ## Examples
/// ```rust
/// use lexlint::distance::edit_distance;
///
/// assert_eq!(edit_distance("defn", "def"), 1);
/// assert_eq!(edit_distance("Print", "print"), 0);
/// assert_eq!(edit_distance("", "abc"), 3);
/// ```
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().map(|c| c.to_ascii_lowercase()).collect();
    let b: Vec<char> = b.chars().map(|c| c.to_ascii_lowercase()).collect();

    let mut matrix = vec![vec![0usize; b.len() + 1]; a.len() + 1];
    for (i, row) in matrix.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=b.len() {
        matrix[0][j] = j;
    }

    for i in 1..=a.len() {
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            let deletion = matrix[i - 1][j] + 1;
            let insertion = matrix[i][j - 1] + 1;
            let substitution = matrix[i - 1][j - 1] + cost;
            matrix[i][j] = deletion.min(insertion).min(substitution);
        }
    }
    matrix[a.len()][b.len()]
}
