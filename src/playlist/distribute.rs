//! Even interleaving of several playlists
//!
//! [`distribute`] merges any number of playlists into one while keeping the
//! order within each playlist. At every step the playlist with the most songs
//! left is drained, which spreads songs of long playlists across the whole
//! output. To avoid drawing from the same playlist twice in a row once the
//! lengths have evened out, the next song of the playlist drawn from last is
//! remembered; if the longest playlist starts with exactly that song and a
//! second non-empty playlist exists, the second-longest is drawn from
//! instead.
//!
//! Ties in remaining length are broken by input position, so the result is
//! fully determined by the input.
//!
//! ```
//! use playmix::playlist::distribute;
//!
//! let merged = distribute(vec![
//!     vec!["a1", "a2", "a3", "a4"],
//!     vec!["b1", "b2"],
//! ]);
//! assert_eq!(merged, ["a1", "b1", "a2", "b2", "a3", "a4"]);
//! ```

use std::collections::VecDeque;

/// Songs of one input playlist not yet placed in the output
struct Source<T> {
    index: usize,
    songs: VecDeque<T>,
}

/// Merge `sources` into one evenly interleaved sequence
///
/// Every song appears exactly once and songs from the same source keep their
/// relative order. Empty sources contribute nothing.
pub fn distribute<T: Clone + PartialEq>(sources: Vec<Vec<T>>) -> Vec<T> {
    let total: usize = sources.iter().map(Vec::len).sum();
    let mut remaining: Vec<Source<T>> = sources
        .into_iter()
        .enumerate()
        .filter(|(_, songs)| !songs.is_empty())
        .map(|(index, songs)| Source {
            index,
            songs: songs.into(),
        })
        .collect();

    let mut distributed = Vec::with_capacity(total);
    let mut last_next: Option<T> = None;

    while !remaining.is_empty() {
        // Longest first, input order among equals
        remaining.sort_by(|a, b| {
            b.songs
                .len()
                .cmp(&a.songs.len())
                .then(a.index.cmp(&b.index))
        });

        let repeats = remaining[0].songs.front() == last_next.as_ref();
        let pick = if repeats && remaining.len() > 1 { 1 } else { 0 };

        let source = &mut remaining[pick];
        if let Some(song) = source.songs.pop_front() {
            distributed.push(song);
        }
        last_next = source.songs.front().cloned();

        if source.songs.is_empty() {
            remaining.remove(pick);
        }
    }

    distributed
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_two_unequal_sources() {
        let merged = distribute(vec![vec!["a1", "a2", "a3", "a4"], vec!["b1", "b2"]]);
        assert_eq!(merged, vec!["a1", "b1", "a2", "b2", "a3", "a4"]);
    }

    #[test]
    fn test_three_near_equal_sources() {
        let merged = distribute(vec![vec!["x1", "x2"], vec!["y1", "y2"], vec!["z1"]]);
        assert_eq!(merged, vec!["x1", "y1", "x2", "y2", "z1"]);
    }

    #[test]
    fn test_single_source_unchanged() {
        let source = vec!["one", "two", "three"];
        assert_eq!(distribute(vec![source.clone()]), source);
    }

    #[test]
    fn test_empty_sources_ignored() {
        let merged = distribute(vec![vec![], vec!["a1", "a2"], vec![], vec!["b1"]]);
        assert_eq!(merged, vec!["a1", "b1", "a2"]);
    }

    #[test]
    fn test_no_sources() {
        assert!(distribute::<String>(vec![]).is_empty());
        assert!(distribute::<String>(vec![vec![], vec![]]).is_empty());
    }

    #[test]
    fn test_equal_sources_alternate() {
        let merged = distribute(vec![vec!["a1", "a2", "a3"], vec!["b1", "b2", "b3"]]);
        assert_eq!(merged, vec!["a1", "b1", "a2", "b2", "a3", "b3"]);
    }

    #[test]
    fn test_short_source_not_prioritized() {
        let merged = distribute(vec![vec!["a1", "a2", "a3", "a4", "a5"], vec!["b1"]]);
        assert_eq!(merged, vec!["a1", "b1", "a2", "a3", "a4", "a5"]);
    }

    #[test]
    fn test_deterministic() {
        let input = vec![
            vec!["p1", "p2", "p3"],
            vec!["q1", "q2", "q3"],
            vec!["r1", "r2"],
            vec!["s1"],
        ];
        assert_eq!(distribute(input.clone()), distribute(input));
    }

    fn arb_sources() -> impl Strategy<Value = Vec<Vec<String>>> {
        prop::collection::vec(0usize..12, 1..6).prop_map(|lengths| {
            lengths
                .iter()
                .enumerate()
                .map(|(s, &len)| (0..len).map(|i| format!("s{}-{}", s, i)).collect())
                .collect()
        })
    }

    proptest! {
        #[test]
        fn prop_keeps_every_song(sources in arb_sources()) {
            let total: usize = sources.iter().map(Vec::len).sum();
            let merged = distribute(sources.clone());
            prop_assert_eq!(merged.len(), total);

            let mut expected: Vec<String> = sources.into_iter().flatten().collect();
            let mut actual = merged;
            expected.sort();
            actual.sort();
            prop_assert_eq!(actual, expected);
        }

        #[test]
        fn prop_preserves_source_order(sources in arb_sources()) {
            let merged = distribute(sources.clone());
            for source in &sources {
                let positions: Vec<usize> = source
                    .iter()
                    .map(|song| merged.iter().position(|m| m == song).unwrap())
                    .collect();
                prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
            }
        }
    }
}
