use std::collections::BTreeSet;

/// Unordered element pairs formed by every pair of distinct atoms, each pair
/// sorted so `("H", "C")` and `("C", "H")` collapse to `("C", "H")`.
pub fn element_pairs<S: AsRef<str>>(elements: &[S]) -> BTreeSet<(String, String)> {
    let mut pairs = BTreeSet::new();
    for (i, a) in elements.iter().enumerate() {
        for b in &elements[i + 1..] {
            let (a, b) = (a.as_ref(), b.as_ref());
            let pair = if a <= b { (a, b) } else { (b, a) };
            pairs.insert((pair.0.to_string(), pair.1.to_string()));
        }
    }
    pairs
}

/// Whether a chain of labels reads smaller back to front than front to back.
///
/// Palindromic chains never need reversal.
pub fn needs_reversal<S: AsRef<str>>(chain: &[S]) -> bool {
    let n = chain.len();
    for i in 0..n / 2 {
        let (front, back) = (chain[i].as_ref(), chain[n - 1 - i].as_ref());
        if front != back {
            return front > back;
        }
    }
    false
}

/// Orients a chain canonically so equivalent chains share one representation.
pub fn sort_chain<S: AsRef<str> + Clone>(chain: &[S]) -> Vec<S> {
    let mut sorted = chain.to_vec();
    if needs_reversal(chain) {
        sorted.reverse();
    }
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(a: &str, b: &str) -> (String, String) {
        (a.to_string(), b.to_string())
    }

    #[test]
    fn element_pairs_of_methane() {
        let pairs = element_pairs(&["C", "H", "H", "H", "H"]);
        let expected: BTreeSet<_> = [pair("C", "H"), pair("H", "H")].into_iter().collect();
        assert_eq!(pairs, expected);
    }

    #[test]
    fn element_pairs_skip_self_pairs_of_single_atoms() {
        let pairs = element_pairs(&["O", "C"]);
        assert_eq!(pairs.len(), 1);
        assert!(pairs.contains(&pair("C", "O")));
        assert!(element_pairs::<&str>(&[]).is_empty());
    }

    #[test]
    fn needs_reversal_detects_descending_chains() {
        assert!(needs_reversal(&["O", "H", "C"]));
        assert!(needs_reversal(&["O", "H", "H", "C"]));
    }

    #[test]
    fn needs_reversal_keeps_canonical_and_palindromic_chains() {
        assert!(!needs_reversal(&["O", "H", "H", "O"]));
        assert!(!needs_reversal(&["O", "C", "H", "O"]));
        assert!(!needs_reversal(&["C"]));
        assert!(!needs_reversal::<&str>(&[]));
    }

    #[test]
    fn sort_chain_reverses_only_when_needed() {
        assert_eq!(sort_chain(&["O", "H", "C"]), vec!["C", "H", "O"]);
        assert_eq!(sort_chain(&["O", "H", "H", "C"]), vec!["C", "H", "H", "O"]);
        assert_eq!(sort_chain(&["C", "H", "O"]), vec!["C", "H", "O"]);
    }
}
