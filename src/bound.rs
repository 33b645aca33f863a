//! Lower bound on the total tour length of a partitioned city set.
//!
//! The bound is derived from a minimum spanning tree over the full city
//! set and serves as the normalization reference for objectives ("how
//! far from optimal is the current assignment"). It is a heuristic
//! estimate: tight enough to be useful, but a configuration may beat it
//! when several tours are in play.
//!
//! # References
//!
//! - Prim (1957), "Shortest Connection Networks and Some Generalizations"

use crate::problem::City;

/// Computes the lower bound for `cities` split into `num_tours` closed
/// tours.
///
/// # Algorithm
///
/// 1. Build the MST over all cities (dense O(n²) Prim) and collect its
///    `n - 1` edge lengths, sorted ascending.
/// 2. Drop the `num_tours - 1` longest edges: the tours are disjoint,
///    so the connections joining them into one tree cost nothing.
/// 3. Count the `num_tours` shortest remaining edges twice: each tour
///    fragment still has to close into a cycle, approximated by
///    retracing a short edge.
///
/// Degenerate inputs (`cities.len() <= num_tours`, including empty and
/// single-city sets) yield 0.
///
/// # Examples
///
/// ```
/// use mtsp_anneal::bound::lower_bound;
/// use mtsp_anneal::problem::City;
///
/// let cities = [City::new(0, 0), City::new(3, 4)];
/// // One MST edge of length 5, doubled to close the cycle.
/// assert_eq!(lower_bound(&cities, 1), 10.0);
/// ```
pub fn lower_bound(cities: &[City], num_tours: usize) -> f64 {
    let mut edges = mst_edge_lengths(cities);
    edges.sort_by(f64::total_cmp);

    let kept = edges.len().saturating_sub(num_tours.saturating_sub(1));
    edges[..kept]
        .iter()
        .enumerate()
        .map(|(i, &length)| if i < num_tours { 2.0 * length } else { length })
        .sum()
}

/// Edge lengths of a minimum spanning tree over `cities`, in discovery
/// order. Empty for fewer than two cities.
fn mst_edge_lengths(cities: &[City]) -> Vec<f64> {
    let n = cities.len();
    if n < 2 {
        return Vec::new();
    }

    // best[j] = shortest distance from the tree to city j
    let mut in_tree = vec![false; n];
    let mut best = vec![f64::INFINITY; n];
    in_tree[0] = true;
    for (j, city) in cities.iter().enumerate().skip(1) {
        best[j] = cities[0].distance(city);
    }

    let mut edges = Vec::with_capacity(n - 1);
    for _ in 1..n {
        let mut next = 0;
        let mut shortest = f64::INFINITY;
        for (j, &d) in best.iter().enumerate() {
            if !in_tree[j] && d < shortest {
                shortest = d;
                next = j;
            }
        }

        in_tree[next] = true;
        edges.push(shortest);

        for (j, d) in best.iter_mut().enumerate() {
            if !in_tree[j] {
                let candidate = cities[next].distance(&cities[j]);
                if candidate < *d {
                    *d = candidate;
                }
            }
        }
    }
    edges
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bound_empty_and_single() {
        assert_eq!(lower_bound(&[], 1), 0.0);
        assert_eq!(lower_bound(&[City::new(4, 2)], 1), 0.0);
    }

    #[test]
    fn test_bound_degenerates_when_tours_cover_cities() {
        let cities = [City::new(0, 0), City::new(1, 0), City::new(0, 1)];
        assert_eq!(lower_bound(&cities, 3), 0.0);
        assert_eq!(lower_bound(&cities, 5), 0.0);
    }

    #[test]
    fn test_bound_two_cities_single_tour() {
        let cities = [City::new(0, 0), City::new(3, 4)];
        // Exactly the there-and-back tour length.
        assert!((lower_bound(&cities, 1) - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_bound_collinear_cities() {
        let cities = [City::new(0, 0), City::new(1, 0), City::new(2, 0)];
        // MST edges [1, 1]; single tour doubles only the shortest.
        assert!((lower_bound(&cities, 1) - 3.0).abs() < 1e-12);
        // Two tours: drop one edge, double the survivor.
        assert!((lower_bound(&cities, 2) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_bound_independent_of_city_order() {
        let cities = [
            City::new(0, 0),
            City::new(5, 1),
            City::new(9, 4),
            City::new(2, 7),
        ];
        let mut reversed = cities;
        reversed.reverse();
        assert!((lower_bound(&cities, 2) - lower_bound(&reversed, 2)).abs() < 1e-9);
    }

    #[test]
    fn test_bound_at_most_single_tour_length() {
        // For one tour the bound is MST + shortest edge, which no closed
        // cycle over the same cities can undercut.
        let cities = [
            City::new(0, 0),
            City::new(8, 1),
            City::new(3, 6),
            City::new(7, 7),
            City::new(1, 3),
        ];
        let cycle = crate::problem::Tour::from_cities(cities.to_vec());
        assert!(lower_bound(&cities, 1) <= cycle.length() + 1e-9);
    }
}
