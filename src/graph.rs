//! The way graph: an immutable collection of ways plus a point index.
//!
//! Connectivity is implicit: ways are joined wherever they share a point with
//! identical coordinates. The index maps every distinct point to its
//! occurrences so that the searches never rescan the ways to find which of
//! them pass through a point.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{check_point, RouteError};
use crate::geometry::{distance, Point, PointKey};
use crate::way::Way;

/// Where a point appears: the way index and the position within that way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Occurrence {
    pub way: usize,
    pub position: usize,
}

/// Map data as supplied by a loader. Keys other than `ways` are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct MapData {
    #[serde(default)]
    ways: Vec<Way>,
}

/// An immutable way graph for one or more routing calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "MapData", into = "MapData")]
pub struct Graph {
    ways: Vec<Way>,
    occurrences: HashMap<PointKey, Vec<Occurrence>>,
}

impl Graph {
    /// Builds the graph and its point index.
    ///
    /// Coordinates are expected to be finite; use [`Graph::try_new`] at a
    /// trust boundary.
    pub fn new(ways: Vec<Way>) -> Self {
        let mut occurrences: HashMap<PointKey, Vec<Occurrence>> = HashMap::new();
        for (way_index, way) in ways.iter().enumerate() {
            for (position, point) in way.points().iter().enumerate() {
                occurrences.entry(point.key()).or_default().push(Occurrence {
                    way: way_index,
                    position,
                });
            }
        }

        Self { ways, occurrences }
    }

    /// Builds the graph after checking that every way is non-empty and every
    /// coordinate is finite.
    pub fn try_new(ways: Vec<Way>) -> Result<Self, RouteError> {
        for (way_index, way) in ways.iter().enumerate() {
            if way.points().is_empty() {
                return Err(RouteError::InvalidInput(format!("way {way_index} has no points")));
            }
            for point in way.points() {
                check_point(*point, || format!("way {way_index}"))?;
            }
        }
        Ok(Self::new(ways))
    }

    pub fn ways(&self) -> &[Way] {
        &self.ways
    }

    pub fn way(&self, index: usize) -> Option<&Way> {
        self.ways.get(index)
    }

    /// Whether the graph holds no points at all.
    pub fn is_empty(&self) -> bool {
        self.occurrences.is_empty()
    }

    pub fn contains(&self, point: Point) -> bool {
        self.occurrences.contains_key(&point.key())
    }

    /// Every occurrence of `point`, in way order then position order.
    pub fn occurrences(&self, point: Point) -> &[Occurrence] {
        self.occurrences
            .get(&point.key())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// The ways passing through `point`, each with the position of its first
    /// occurrence, in way order.
    pub fn ways_through(&self, point: Point) -> impl Iterator<Item = Occurrence> + '_ {
        let occurrences = self.occurrences(point);
        occurrences
            .iter()
            .enumerate()
            .filter(move |(i, occ)| *i == 0 || occurrences[i - 1].way != occ.way)
            .map(|(_, occ)| *occ)
    }

    /// The two walking directions out of `occurrence`: forward along the way,
    /// and backward (the former half reversed so it starts next to the split
    /// point).
    pub fn directions(&self, occurrence: Occurrence) -> (&[Point], Vec<Point>) {
        let points = self.ways[occurrence.way].points();
        let later = &points[occurrence.position + 1..];
        let former_reversed = points[..occurrence.position].iter().rev().copied().collect();
        (later, former_reversed)
    }

    /// The graph point closest to `query`.
    ///
    /// A point present verbatim in the graph is returned as is. Otherwise all
    /// points are scanned, ties going to the first one met (ways in order,
    /// points in order). An empty graph returns `query` unchanged.
    pub fn nearest_point(&self, query: Point) -> Point {
        if self.contains(query) {
            return query;
        }

        let mut best = query;
        let mut best_distance = f64::INFINITY;
        for point in self.ways.iter().flat_map(|way| way.points()) {
            let d = distance(query, *point);
            if d < best_distance {
                best_distance = d;
                best = *point;
            }
        }
        best
    }

    /// Points one segment away from `point` along any way, in way order.
    pub fn neighbours(&self, point: Point) -> Vec<Point> {
        let mut result = Vec::new();
        for occ in self.occurrences(point) {
            let points = self.ways[occ.way].points();
            if occ.position > 0 {
                result.push(points[occ.position - 1]);
            }
            if let Some(next) = points.get(occ.position + 1) {
                result.push(*next);
            }
        }
        result.retain(|p| *p != point);
        result
    }
}

impl From<MapData> for Graph {
    fn from(data: MapData) -> Self {
        Self::new(data.ways)
    }
}

impl From<Graph> for MapData {
    fn from(graph: Graph) -> Self {
        Self { ways: graph.ways }
    }
}

impl FromIterator<Way> for Graph {
    fn from_iter<I: IntoIterator<Item = Way>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
