//! Connected components under a pairwise relation
//!
//! One traversal serves the overlap pass and both directional partitions of
//! the grouping engine; only the predicate differs.

/// Partition `0..count` into connected components of the graph whose edges
/// are the pairs for which `related` holds.
///
/// Components are ordered by their smallest member and members are sorted
/// ascending. `related` is assumed symmetric.
pub fn connected_components<F>(count: usize, mut related: F) -> Vec<Vec<usize>>
where
    F: FnMut(usize, usize) -> bool,
{
    let mut visited = vec![false; count];
    let mut components = Vec::new();

    for start in 0..count {
        if visited[start] {
            continue;
        }
        visited[start] = true;
        let mut component = vec![start];
        let mut stack = vec![start];
        while let Some(current) = stack.pop() {
            for next in 0..count {
                if !visited[next] && related(current, next) {
                    visited[next] = true;
                    component.push(next);
                    stack.push(next);
                }
            }
        }
        component.sort_unstable();
        components.push(component);
    }

    components
}
