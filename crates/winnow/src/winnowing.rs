//! Window-minimum selection over k-gram hashes.
//!
//! Standard winnowing via a monotonic deque: ties broken rightmost (an
//! incoming hash equal to the one at the back of the deque evicts it), and
//! the same selected position is never re-emitted across consecutive
//! windows.

use std::collections::VecDeque;

/// Selects the winnowed indices into `kgrams` for window size `w`.
///
/// Returns the indices (into `kgrams`) chosen as each window's minimum,
/// deduplicated across consecutive windows. Empty input yields no
/// selections. `w == 0` is treated as `w == 1` (every position is its own
/// window).
pub fn winnow_select(kgrams: &[u64], w: usize) -> Vec<usize> {
    if kgrams.is_empty() {
        return Vec::new();
    }
    let w = w.max(1);

    if w >= kgrams.len() {
        // Window covers (or exceeds) the whole stream: a single global
        // minimum, rightmost among ties.
        let mut best = 0usize;
        for i in 1..kgrams.len() {
            if kgrams[i] <= kgrams[best] {
                best = i;
            }
        }
        return vec![best];
    }

    let mut deque: VecDeque<usize> = VecDeque::new();
    let mut selected = Vec::new();
    let mut last_selected: Option<usize> = None;

    for r in 0..kgrams.len() {
        while let Some(&back) = deque.back() {
            if kgrams[back] >= kgrams[r] {
                deque.pop_back();
            } else {
                break;
            }
        }
        deque.push_back(r);

        if let Some(&front) = deque.front() {
            if front + w <= r {
                deque.pop_front();
            }
        }

        if r + 1 >= w {
            let min_idx = *deque.front().expect("deque non-empty after push");
            if last_selected != Some(min_idx) {
                selected.push(min_idx);
                last_selected = Some(min_idx);
            }
        }
    }

    selected
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_selects_nothing() {
        assert!(winnow_select(&[], 4).is_empty());
    }

    #[test]
    fn window_larger_than_stream_selects_single_global_min() {
        let kgrams = vec![5, 3, 9, 1, 7];
        let selected = winnow_select(&kgrams, 100);
        assert_eq!(selected, vec![3]);
    }

    #[test]
    fn zero_window_selects_every_index() {
        let kgrams = vec![3, 1, 2];
        let selected = winnow_select(&kgrams, 0);
        assert_eq!(selected, vec![0, 1, 2]);
    }

    #[test]
    fn ties_break_rightmost() {
        // windows of size 2 over [1,1]: both positions tie, rightmost (1) wins.
        let kgrams = vec![1, 1];
        let selected = winnow_select(&kgrams, 2);
        assert_eq!(selected, vec![1]);
    }

    #[test]
    fn duplicate_consecutive_selection_is_not_re_emitted() {
        // [1,2,3]: window=2 -> windows (0,1)->min idx0, (1,2)->min idx1.
        // No duplicate here, but construct a case that does repeat.
        let kgrams = vec![1, 5, 5, 5, 2];
        let selected = winnow_select(&kgrams, 2);
        // window(0,1)=min(1,5)->0 ; window(1,2)=min(5,5)->2(rightmost tie)
        // window(2,3)=min(5,5)->3 ; window(3,4)=min(5,2)->4
        assert_eq!(selected, vec![0, 2, 3, 4]);
        // no immediate duplicate adjacent entries
        for pair in selected.windows(2) {
            assert_ne!(pair[0], pair[1]);
        }
    }

    #[test]
    fn every_window_has_at_least_one_selection_covering_it() {
        let kgrams = vec![9, 4, 4, 8, 1, 1, 7, 6];
        let w = 3;
        let selected = winnow_select(&kgrams, w);
        for start in 0..=(kgrams.len() - w) {
            let end = start + w;
            assert!(
                selected.iter().any(|&i| i >= start && i < end),
                "window [{start},{end}) has no selected fingerprint"
            );
        }
    }

    #[test]
    fn is_deterministic() {
        let kgrams = vec![4, 2, 7, 1, 9, 3];
        assert_eq!(winnow_select(&kgrams, 3), winnow_select(&kgrams, 3));
    }

    #[test]
    fn single_kgram_selects_itself() {
        assert_eq!(winnow_select(&[42], 5), vec![0]);
    }
}
