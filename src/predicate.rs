use std::collections::BTreeSet;
use std::ops::{Index, IndexMut};

/// Identifies one of the four child slots of a subdivided node.
///
/// The discriminants are bit flags so callers can describe a value that
/// belongs to several quadrants at once.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum RegionCode {
    UpperLeft = 1 << 0,
    UpperRight = 1 << 1,
    LowerLeft = 1 << 2,
    LowerRight = 1 << 3,
}

impl RegionCode {
    /// Every region code, in child slot order.
    pub const ALL: [RegionCode; 4] = [
        RegionCode::UpperLeft,
        RegionCode::UpperRight,
        RegionCode::LowerLeft,
        RegionCode::LowerRight,
    ];

    pub fn bits(self) -> u8 {
        self as u8
    }

    /// Position of this code's child in a node's child slots.
    pub fn slot(self) -> usize {
        match self {
            RegionCode::UpperLeft => 0,
            RegionCode::UpperRight => 1,
            RegionCode::LowerLeft => 2,
            RegionCode::LowerRight => 3,
        }
    }
}

/// The four child regions produced when a node subdivides.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Quadrants<R> {
    pub upper_left: R,
    pub upper_right: R,
    pub lower_left: R,
    pub lower_right: R,
}

impl<R> Quadrants<R> {
    pub fn new(upper_left: R, upper_right: R, lower_left: R, lower_right: R) -> Self {
        Self {
            upper_left,
            upper_right,
            lower_left,
            lower_right,
        }
    }

    /// Builds all four regions from one function of the region code.
    pub fn from_fn<F>(mut f: F) -> Self
    where
        F: FnMut(RegionCode) -> R,
    {
        Self {
            upper_left: f(RegionCode::UpperLeft),
            upper_right: f(RegionCode::UpperRight),
            lower_left: f(RegionCode::LowerLeft),
            lower_right: f(RegionCode::LowerRight),
        }
    }

    /// Iterates the regions in child slot order.
    pub fn iter(&self) -> impl Iterator<Item = (RegionCode, &R)> {
        RegionCode::ALL.into_iter().map(move |code| (code, &self[code]))
    }

    pub fn into_array(self) -> [R; 4] {
        [
            self.upper_left,
            self.upper_right,
            self.lower_left,
            self.lower_right,
        ]
    }
}

impl<R> Index<RegionCode> for Quadrants<R> {
    type Output = R;

    fn index(&self, code: RegionCode) -> &R {
        match code {
            RegionCode::UpperLeft => &self.upper_left,
            RegionCode::UpperRight => &self.upper_right,
            RegionCode::LowerLeft => &self.lower_left,
            RegionCode::LowerRight => &self.lower_right,
        }
    }
}

impl<R> IndexMut<RegionCode> for Quadrants<R> {
    fn index_mut(&mut self, code: RegionCode) -> &mut R {
        match code {
            RegionCode::UpperLeft => &mut self.upper_left,
            RegionCode::UpperRight => &mut self.upper_right,
            RegionCode::LowerLeft => &mut self.lower_left,
            RegionCode::LowerRight => &mut self.lower_right,
        }
    }
}

/// Geometry semantics for a [`SearchTree`](crate::SearchTree).
///
/// `V` is the type of the stored values and `R` the type describing a node's
/// search space. For example `V` could be a sprite with a position and `R` a
/// rectangle. Every method must be deterministic and free of side effects:
/// the tree calls them repeatedly, often against regions computed at an
/// earlier rebalance.
pub trait SearchPredicate<V, R> {
    /// Region given to freshly created nodes and to the root after a clear.
    fn nil_region(&self) -> R;

    /// Root search space for the given set of every value in the tree.
    fn build_region_from_data(&self, values: &BTreeSet<V>) -> R;

    /// Subdivides `parent` into four quadrants given the values it holds.
    ///
    /// The quadrants should together cover `parent`. They may overlap, in
    /// which case a value can be stored under more than one of them.
    fn build_quadrants_from_data(&self, parent: &R, values: &BTreeSet<V>) -> Quadrants<R>;

    /// Whether `value` belongs to `region`.
    fn satisfies(&self, region: &R, value: &V) -> bool;

    /// Whether two regions overlap. Only used by queries.
    fn overlaps(&self, left: &R, right: &R) -> bool;
}
