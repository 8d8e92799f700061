//! A small town map.
//!
//! Two east-west streets joined by two cross streets, a park loop hanging
//! off the north end of one cross street, and an island nothing connects to.
//!
//! ```text
//!   30        +---+
//!             |   |  park loop
//!   20        +---+
//!             |
//!   10  +---+-+---+  north avenue
//!       |   | |
//!    0  +---+-+---+  main street
//!       0  10 20  30        island: (50,50)-(60,50)
//! ```

use way_router::Graph;

/// Map data as the loader receives it. Regions and labels are the renderer's
/// business and are ignored by the graph.
pub const TOWN_JSON: &str = r#"{
    "scale": { "width": 60, "height": 60 },
    "backgroundColor": "darkseagreen",
    "regions": [
        { "name": "Park", "points": [ { "x": 20, "y": 20 }, { "x": 30, "y": 30 } ], "color": "green" }
    ],
    "ways": [
        { "points": [ { "x": 0, "y": 0 }, { "x": 10, "y": 0 }, { "x": 20, "y": 0 }, { "x": 30, "y": 0 } ] },
        { "points": [ { "x": 0, "y": 10 }, { "x": 10, "y": 10 }, { "x": 20, "y": 10 }, { "x": 30, "y": 10 } ] },
        { "points": [ { "x": 10, "y": 0 }, { "x": 10, "y": 10 } ] },
        { "points": [ { "x": 20, "y": 0 }, { "x": 20, "y": 10 }, { "x": 20, "y": 20 } ] },
        { "points": [ { "x": 20, "y": 20 }, { "x": 30, "y": 20 }, { "x": 30, "y": 30 }, { "x": 20, "y": 30 }, { "x": 20, "y": 20 } ] },
        { "points": [ { "x": 50, "y": 50 }, { "x": 60, "y": 50 } ] }
    ],
    "nodes": [
        { "point": { "x": 25, "y": 25 }, "name": "Park" }
    ]
}"#;

/// Index of the park loop way.
pub const PARK_LOOP: usize = 4;

/// Index of the island way.
pub const ISLAND: usize = 5;

pub fn town() -> Graph {
    serde_json::from_str(TOWN_JSON).expect("town fixture parses")
}
