#![allow(dead_code)]

use std::collections::BTreeSet;

use search_tree_2d::{Quadrants, RegionCode, SearchPredicate};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Axis-aligned bounds, `min_y` at the top.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    pub fn everything() -> Self {
        Self::new(f64::MIN, f64::MIN, f64::MAX, f64::MAX)
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }

    /// Strictly inside, edges excluded.
    pub fn surrounds(&self, x: f64, y: f64) -> bool {
        x > self.min_x && x < self.max_x && y > self.min_y && y < self.max_y
    }

    pub fn intersects(&self, other: &Bounds) -> bool {
        !(other.min_x >= self.max_x
            || other.max_x <= self.min_x
            || other.min_y >= self.max_y
            || other.max_y <= self.min_y)
    }
}

/// A moving thing in the world. Identity includes the position, so moving
/// an entity means removing the old value and adding the new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Entity {
    pub id: u32,
    pub x: i32,
    pub y: i32,
}

impl Entity {
    pub fn new(id: u32, x: i32, y: i32) -> Self {
        Self { id, x, y }
    }

    pub fn moved(&self, dx: i32, dy: i32) -> Self {
        Self::new(self.id, self.x + dx, self.y + dy)
    }
}

/// Bounding box root, midpoint quadrants, closed point membership.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoundsPredicate;

impl SearchPredicate<Entity, Bounds> for BoundsPredicate {
    fn nil_region(&self) -> Bounds {
        Bounds::default()
    }

    fn build_region_from_data(&self, values: &BTreeSet<Entity>) -> Bounds {
        if values.is_empty() {
            return self.nil_region();
        }
        values.iter().fold(
            Bounds::new(f64::MAX, f64::MAX, f64::MIN, f64::MIN),
            |b, e| {
                Bounds::new(
                    b.min_x.min(e.x as f64),
                    b.min_y.min(e.y as f64),
                    b.max_x.max(e.x as f64),
                    b.max_y.max(e.y as f64),
                )
            },
        )
    }

    fn build_quadrants_from_data(&self, parent: &Bounds, _values: &BTreeSet<Entity>) -> Quadrants<Bounds> {
        let cx = (parent.min_x + parent.max_x) / 2.0;
        let cy = (parent.min_y + parent.max_y) / 2.0;
        Quadrants::from_fn(|code| match code {
            RegionCode::UpperLeft => Bounds::new(parent.min_x, parent.min_y, cx, cy),
            RegionCode::UpperRight => Bounds::new(cx, parent.min_y, parent.max_x, cy),
            RegionCode::LowerLeft => Bounds::new(parent.min_x, cy, cx, parent.max_y),
            RegionCode::LowerRight => Bounds::new(cx, cy, parent.max_x, parent.max_y),
        })
    }

    fn satisfies(&self, region: &Bounds, value: &Entity) -> bool {
        region.contains(value.x as f64, value.y as f64)
    }

    fn overlaps(&self, left: &Bounds, right: &Bounds) -> bool {
        left.intersects(right)
    }
}
