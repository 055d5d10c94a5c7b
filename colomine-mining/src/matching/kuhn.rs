//! Kuhn's augmenting-path bipartite matching with an explicit stack.

use colomine_core::types::collections::SmallVec4;

/// Left vertex `i` may pair with any right vertex in `adjacency[i]`.
pub type Adjacency = Vec<SmallVec4<usize>>;

/// DFS frame: a left vertex, the next adjacency entry to try, and the right
/// vertex through which the search reached it (unused for the root).
#[derive(Debug, Clone, Copy)]
struct Frame {
    left: usize,
    cursor: usize,
    via: usize,
}

/// Find a perfect matching of `adjacency.len()` left vertices onto
/// `n_right` right vertices. Returns `result[left] = right`, or `None` when
/// no perfect matching exists.
pub fn perfect_matching(adjacency: &Adjacency, n_right: usize) -> Option<Vec<usize>> {
    let n_left = adjacency.len();
    if n_left != n_right {
        return None;
    }

    let mut match_right: Vec<Option<usize>> = vec![None; n_right];
    let mut visited = vec![false; n_right];
    let mut stack: Vec<Frame> = Vec::with_capacity(n_left);

    for root in 0..n_left {
        visited.iter_mut().for_each(|v| *v = false);
        if !augment(root, adjacency, &mut match_right, &mut visited, &mut stack) {
            return None;
        }
    }

    let mut result = vec![usize::MAX; n_left];
    for (right, left) in match_right.iter().enumerate() {
        if let Some(left) = *left {
            result[left] = right;
        }
    }
    Some(result)
}

/// Search one augmenting path from `root` and flip it on success.
fn augment(
    root: usize,
    adjacency: &Adjacency,
    match_right: &mut [Option<usize>],
    visited: &mut [bool],
    stack: &mut Vec<Frame>,
) -> bool {
    stack.clear();
    stack.push(Frame {
        left: root,
        cursor: 0,
        via: usize::MAX,
    });

    while let Some(frame) = stack.last_mut() {
        let Some(&right) = adjacency[frame.left].get(frame.cursor) else {
            stack.pop();
            continue;
        };
        frame.cursor += 1;
        if visited[right] {
            continue;
        }
        visited[right] = true;

        match match_right[right] {
            None => {
                let top = stack.len() - 1;
                match_right[right] = Some(stack[top].left);
                for k in (1..stack.len()).rev() {
                    match_right[stack[k].via] = Some(stack[k - 1].left);
                }
                return true;
            }
            Some(next_left) => stack.push(Frame {
                left: next_left,
                cursor: 0,
                via: right,
            }),
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn finds_matching_requiring_augmentation() {
        // Greedy 0→0 blocks 1; augmenting path reroutes 0→1.
        let adjacency: Adjacency = vec![smallvec![0, 1], smallvec![0]];
        let m = perfect_matching(&adjacency, 2).unwrap();
        assert_eq!(m, vec![1, 0]);
    }

    #[test]
    fn long_augmenting_chain() {
        // left i connects to right i and i+1; last left only to right 0.
        let n = 64;
        let mut adjacency: Adjacency = (0..n - 1).map(|i| smallvec![i, i + 1]).collect();
        adjacency.push(smallvec![0]);
        let m = perfect_matching(&adjacency, n).unwrap();
        let mut seen = vec![false; n];
        for (left, &right) in m.iter().enumerate() {
            assert!(adjacency[left].contains(&right));
            assert!(!seen[right]);
            seen[right] = true;
        }
    }

    #[test]
    fn reports_missing_matching() {
        let adjacency: Adjacency = vec![smallvec![0], smallvec![0]];
        assert!(perfect_matching(&adjacency, 2).is_none());
        assert!(perfect_matching(&vec![smallvec![0]], 2).is_none());
    }

    #[test]
    fn empty_graph_matches_trivially() {
        assert_eq!(perfect_matching(&Vec::new(), 0), Some(Vec::new()));
    }
}
