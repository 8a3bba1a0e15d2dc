// ============================================================
// Layer 4 - Sentence Padder
// ============================================================
// Pads every sentence in a batch to the length of the longest
// one, so the batch can be stacked into a rectangular tensor.
//
// Example with fill = 0:
//   [1, 2, 3]              -> [1, 2, 3, 0, 0, 0]
//   [2, 3, 4, 5, 6, 7]     -> [2, 3, 4, 5, 6, 7]
//   [7, 8]                 -> [7, 8, 0, 0, 0, 0]
//
// The input is borrowed and never modified; every padded row
// is a fresh Vec.

/// Pad each sentence in `sents` with `pad_token` up to the longest length.
///
/// Accepts anything that derefs to a token slice (`Vec<T>`, `&[T]`, ...).
/// An empty collection yields an empty result.
pub fn pad_sents<S, T>(sents: &[S], pad_token: T) -> Vec<Vec<T>>
where
    S: AsRef<[T]>,
    T: Clone,
{
    let longest_len = sents
        .iter()
        .map(|s| s.as_ref().len())
        .max()
        .unwrap_or(0);

    sents
        .iter()
        .map(|s| {
            let mut padded = Vec::with_capacity(longest_len);
            padded.extend_from_slice(s.as_ref());
            padded.resize(longest_len, pad_token.clone());
            padded
        })
        .collect()
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pads_to_longest_sentence() {
        let sents  = vec![vec![1, 2, 3], vec![2, 3, 4, 5, 6, 7], vec![7, 8]];
        let padded = pad_sents(&sents, 0);
        assert_eq!(
            padded,
            vec![
                vec![1, 2, 3, 0, 0, 0],
                vec![2, 3, 4, 5, 6, 7],
                vec![7, 8, 0, 0, 0, 0],
            ]
        );
        // Input untouched
        assert_eq!(sents[2], vec![7, 8]);
    }

    #[test]
    fn test_equal_lengths_are_unchanged() {
        let sents = vec![vec![1, 2], vec![3, 4], vec![5, 6]];
        assert_eq!(pad_sents(&sents, 9), sents);
    }

    #[test]
    fn test_every_row_has_max_length() {
        let sents: Vec<Vec<u32>> = (0..20).map(|n| (0..n).collect()).collect();
        let padded = pad_sents(&sents, u32::MAX);
        assert_eq!(padded.len(), sents.len());
        assert!(padded.iter().all(|row| row.len() == 19));
        // Original tokens keep their order at the front of each row
        for (orig, row) in sents.iter().zip(&padded) {
            assert_eq!(&row[..orig.len()], orig.as_slice());
            assert!(row[orig.len()..].iter().all(|&t| t == u32::MAX));
        }
    }

    #[test]
    fn test_empty_input_gives_empty_output() {
        let sents: Vec<Vec<i64>> = Vec::new();
        assert!(pad_sents(&sents, 0).is_empty());
    }

    #[test]
    fn test_all_empty_sentences_stay_empty() {
        let sents: Vec<Vec<i64>> = vec![vec![], vec![]];
        assert_eq!(pad_sents(&sents, 0), vec![Vec::<i64>::new(), Vec::new()]);
    }

    #[test]
    fn test_pads_string_tokens() {
        let sents  = vec![vec!["a"], vec!["b", "c"]];
        let padded = pad_sents(&sents, "<pad>");
        assert_eq!(padded[0], vec!["a", "<pad>"]);
    }
}
