//! Initial node positions on a ring.
//!
//! Physics-based placement is left to external simulation engines. This
//! module only provides the deterministic seed positions such engines start
//! from, plus an evenly spread ring that the reference exporter draws
//! directly.

use std::f32::consts::TAU;

use indexmap::IndexMap;
use log::debug;

use constellation_core::geometry::Point;

use crate::entity::EntityKey;

/// Number of angular buckets the seed angle is quantized to.
const SEED_BUCKETS: u32 = 26;

/// Angle in radians of `label`'s seed position, or `None` for an empty label.
fn seed_angle(label: &str) -> Option<f32> {
    label
        .chars()
        .next()
        .map(|first| (first as u32 % SEED_BUCKETS) as f32 / SEED_BUCKETS as f32 * TAU)
}

/// Seed position of `label` on a ring of `radius` around the origin.
///
/// The angle depends only on the first Unicode scalar value of the label,
/// quantized into 26 buckets. An empty label sits at the origin.
///
/// # Examples
///
/// ```
/// # use constellation::layout::initial_position;
/// # use constellation::geometry::Point;
/// assert_eq!(initial_position("", 100.0), Point::default());
///
/// // 'A' is 65, and 65 % 26 = 13: half a turn.
/// let p = initial_position("Alice", 100.0);
/// assert!((p.x() + 100.0).abs() < 1e-3);
/// ```
pub fn initial_position(label: &str, radius: f32) -> Point {
    seed_angle(label)
        .map(|angle| Point::new(angle.cos() * radius, angle.sin() * radius))
        .unwrap_or_default()
}

/// Spreads `nodes` evenly on a ring of `radius`.
///
/// Nodes are ordered by their seed angle (ties keep input order) and then
/// given equal angular spacing, so neighbors on the seed ring stay
/// neighbors while nodes sharing a seed bucket no longer overlap.
pub fn ring_layout<'a, K, I, F>(nodes: I, radius: f32, label: F) -> IndexMap<K, Point>
where
    K: EntityKey + 'a,
    I: IntoIterator<Item = &'a K>,
    F: Fn(&K) -> String,
{
    let mut seeded: Vec<(f32, &K)> = nodes
        .into_iter()
        .map(|key| (seed_angle(&label(key)).unwrap_or_default(), key))
        .collect();
    seeded.sort_by(|(a, _), (b, _)| a.total_cmp(b));

    let count = seeded.len();
    let positions: IndexMap<K, Point> = seeded
        .into_iter()
        .enumerate()
        .map(|(index, (_, key))| {
            let angle = index as f32 / count as f32 * TAU;
            let position = Point::new(angle.cos() * radius, angle.sin() * radius);
            (key.clone(), position)
        })
        .collect();

    debug!(nodes = positions.len(), radius = radius; "Ring layout computed");
    positions
}
