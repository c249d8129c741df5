//! Span grouping: connected components of the span_matches graph, with
//! subsumed groups filtered out (SPEC_FULL.md §4.5).

use hashbrown::{HashMap, HashSet};
use submission::Span;

use crate::types::Group;

/// Groups `span_matches` (treated as edges of an undirected graph over
/// spans) into connected components via iterative depth-first search — an
/// explicit stack, not recursion, so a pathologically large component
/// cannot blow the call stack (SPEC_FULL.md §9). Subsumed groups (per
/// [`Group::is_subsumed_by`]) are dropped from the result.
pub fn group_span_matches(span_matches: &[(Span, Span)]) -> Vec<Group> {
    let mut adjacency: HashMap<Span, Vec<Span>> = HashMap::new();
    // `HashMap::keys()` iterates in an order that depends on the map's
    // (randomly seeded) hasher, not insertion order. Track first-seen order
    // separately so which component becomes "group 0" is a function of
    // `span_matches`' order alone, keeping this deterministic across runs.
    let mut first_seen: Vec<Span> = Vec::new();
    for &(a, b) in span_matches {
        if !adjacency.contains_key(&a) {
            first_seen.push(a);
        }
        adjacency.entry(a).or_default().push(b);
        if !adjacency.contains_key(&b) {
            first_seen.push(b);
        }
        adjacency.entry(b).or_default().push(a);
    }

    let mut visited: HashSet<Span> = HashSet::new();
    let mut groups = Vec::new();

    for start in first_seen {
        if visited.contains(&start) {
            continue;
        }
        let mut component = Vec::new();
        let mut stack = vec![start];
        visited.insert(start);

        while let Some(span) = stack.pop() {
            component.push(span);
            if let Some(neighbors) = adjacency.get(&span) {
                for &neighbor in neighbors {
                    if visited.insert(neighbor) {
                        stack.push(neighbor);
                    }
                }
            }
        }

        groups.push(Group::new(component));
    }

    filter_subsumed_groups(groups)
}

fn filter_subsumed_groups(groups: Vec<Group>) -> Vec<Group> {
    let mut keep = vec![true; groups.len()];
    for i in 0..groups.len() {
        for j in 0..groups.len() {
            if i == j || !keep[i] {
                continue;
            }
            if groups[i].is_subsumed_by(&groups[j]) && groups[i] != groups[j] {
                keep[i] = false;
                break;
            }
        }
    }
    groups
        .into_iter()
        .zip(keep)
        .filter_map(|(g, k)| k.then_some(g))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use submission::FileId;

    fn span(file: u32, s: usize, e: usize) -> Span {
        Span::new(FileId(file), s, e)
    }

    #[test]
    fn edges_form_two_components() {
        let s1 = span(0, 0, 1);
        let s2 = span(1, 0, 1);
        let s3 = span(2, 0, 1);
        let s4 = span(3, 0, 1);
        let s5 = span(4, 0, 1);
        let matches = vec![(s1, s2), (s2, s3), (s4, s5)];
        let groups = group_span_matches(&matches);
        assert_eq!(groups.len(), 2);
        let sizes: Vec<_> = {
            let mut v: Vec<_> = groups.iter().map(Group::len).collect();
            v.sort();
            v
        };
        assert_eq!(sizes, vec![2, 3]);
    }

    #[test]
    fn subsumed_group_is_dropped() {
        // big group spans files 0 and 1 with a wide range; small group is
        // a strict subset of spans contained in the big group's spans.
        let big_a = span(0, 0, 20);
        let big_b = span(1, 0, 20);
        let small_a = span(0, 2, 4);
        let small_b = span(1, 2, 4);
        let matches = vec![(big_a, big_b), (small_a, small_b)];
        let groups = group_span_matches(&matches);
        // two disjoint components (no edge linking big to small), but the
        // small one is fully contained by the big one per-file, so it's
        // filtered.
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].len(), 2);
    }

    #[test]
    fn non_subsumed_disjoint_groups_both_survive() {
        let matches = vec![
            (span(0, 0, 5), span(1, 0, 5)),
            (span(2, 0, 5), span(3, 0, 5)),
        ];
        let groups = group_span_matches(&matches);
        assert_eq!(groups.len(), 2);
    }
}
