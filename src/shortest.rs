//! Uniform-cost search over the point graph (strict backend).
//!
//! Nodes are the distinct points of the graph, edges join consecutive points
//! of each way and weigh their Euclidean length. Unlike the enumerator this
//! always returns a minimum-length route and never walks off the ways, at
//! the price of possibly choosing a different route among equal-length ones.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use crate::geometry::{distance, Point, PointKey};
use crate::graph::Graph;
use crate::traits::LegSearch;

/// Dijkstra-style backend for [`crate::router::SearchStrategy::ShortestPath`].
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformCostSearch;

/// Frontier entry; ordered so the heap pops the lowest cost first and, among
/// equal costs, the earliest pushed.
#[derive(Debug, Clone, Copy)]
struct Entry {
    cost: f64,
    seq: usize,
    point: Point,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl LegSearch for UniformCostSearch {
    fn search(&self, graph: &Graph, start: Point, end: Point) -> Option<Vec<Point>> {
        if !graph.contains(start) || !graph.contains(end) {
            return None;
        }

        let mut open = BinaryHeap::new();
        let mut best: HashMap<PointKey, f64> = HashMap::new();
        let mut came_from: HashMap<PointKey, Point> = HashMap::new();
        let mut closed: HashSet<PointKey> = HashSet::new();
        let mut seq = 0;

        open.push(Entry { cost: 0.0, seq, point: start });
        best.insert(start.key(), 0.0);

        while let Some(Entry { cost, point, .. }) = open.pop() {
            let key = point.key();
            if !closed.insert(key) {
                continue;
            }
            if point == end {
                return Some(reconstruct(&came_from, start, end));
            }

            for next in graph.neighbours(point) {
                let next_key = next.key();
                if closed.contains(&next_key) {
                    continue;
                }
                let next_cost = cost + distance(point, next);
                if next_cost < *best.get(&next_key).unwrap_or(&f64::INFINITY) {
                    best.insert(next_key, next_cost);
                    came_from.insert(next_key, point);
                    seq += 1;
                    open.push(Entry { cost: next_cost, seq, point: next });
                }
            }
        }

        None
    }
}

fn reconstruct(came_from: &HashMap<PointKey, Point>, start: Point, end: Point) -> Vec<Point> {
    let mut path = vec![end];
    let mut current = end;
    while current != start {
        match came_from.get(&current.key()) {
            Some(&previous) => {
                path.push(previous);
                current = previous;
            }
            None => break,
        }
    }
    path.reverse();
    path
}
