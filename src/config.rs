use crate::error::ConfigError;

/// Tuning knobs for a [`SearchTree`](crate::SearchTree).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchTreeConfig {
    min_leaf_size: usize,
    node_capacity: usize,
}

impl SearchTreeConfig {
    pub const DEFAULT_MIN_LEAF_SIZE: usize = 3;
    pub const DEFAULT_NODE_CAPACITY: usize = 128;

    /// A node holding at most `min_leaf_size` values after a rebalance is
    /// always kept as a leaf.
    pub fn new(min_leaf_size: usize) -> Result<Self, ConfigError> {
        if min_leaf_size == 0 {
            return Err(ConfigError::ZeroMinLeafSize);
        }
        Ok(Self {
            min_leaf_size,
            node_capacity: Self::DEFAULT_NODE_CAPACITY,
        })
    }

    /// Number of nodes to reserve room for up front.
    pub fn with_node_capacity(self, node_capacity: usize) -> Result<Self, ConfigError> {
        if node_capacity == 0 {
            return Err(ConfigError::ZeroNodeCapacity);
        }
        Ok(Self {
            node_capacity,
            ..self
        })
    }

    pub fn min_leaf_size(&self) -> usize {
        self.min_leaf_size
    }

    pub fn node_capacity(&self) -> usize {
        self.node_capacity
    }
}

impl Default for SearchTreeConfig {
    fn default() -> Self {
        Self {
            min_leaf_size: Self::DEFAULT_MIN_LEAF_SIZE,
            node_capacity: Self::DEFAULT_NODE_CAPACITY,
        }
    }
}
