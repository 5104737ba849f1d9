use std::collections::BTreeSet;

use crate::config::SearchTreeConfig;
use crate::list::List;
use crate::predicate::{Quadrants, SearchPredicate};
use crate::SearchTreeVisitor;

#[derive(Clone, Debug)]
struct Node<V, R> {
    region: R,
    // Leaf storage, or orphans when the node has children.
    values: BTreeSet<V>,
    // Indexed by `RegionCode::slot`.
    children: Option<[usize; 4]>,
}

impl<V, R> Node<V, R> {
    fn new(region: R) -> Self {
        Self {
            region,
            values: BTreeSet::new(),
            children: None,
        }
    }
}

/// Shape summary of a [`SearchTree`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchTreeStats {
    pub nodes: usize,
    pub leaves: usize,
    pub branches: usize,
    /// Values held directly by nodes, counting a value once per node.
    pub stored_values: usize,
    /// Values held by branches because no child region accepted them.
    pub orphans: usize,
    pub max_depth: usize,
}

#[derive(Default)]
struct StatsCollector {
    stats: SearchTreeStats,
    in_branch: bool,
}

impl StatsCollector {
    fn node(&mut self, depth: usize) {
        self.stats.nodes += 1;
        self.stats.max_depth = self.stats.max_depth.max(depth);
    }
}

impl<V, R> SearchTreeVisitor<V, R> for StatsCollector {
    fn value(&mut self, _depth: usize, _value: &V) {
        self.stats.stored_values += 1;
        if self.in_branch {
            self.stats.orphans += 1;
        }
    }

    fn leaf(&mut self, depth: usize, _region: &R) {
        self.node(depth);
        self.stats.leaves += 1;
        self.in_branch = false;
    }

    fn branch(&mut self, depth: usize, _region: &R) {
        self.node(depth);
        self.stats.branches += 1;
        self.in_branch = true;
    }
}

/// A quadrant tree whose geometry is supplied by a [`SearchPredicate`].
///
/// Inserting and removing values never changes the shape of the tree. Call
/// [`rebalance`](Self::rebalance) after values have moved (once per frame, for
/// example) to recompute the regions and decide again which nodes subdivide.
#[derive(Clone, Debug)]
pub struct SearchTree<V, R, P> {
    predicate: P,
    config: SearchTreeConfig,
    root: usize,
    nodes: List<Node<V, R>>,
}

impl<V, R, P> SearchTree<V, R, P>
where
    V: Ord + Clone,
    R: Clone,
    P: SearchPredicate<V, R>,
{
    pub fn new(predicate: P) -> Self {
        Self::with_config(predicate, SearchTreeConfig::default())
    }

    pub fn with_config(predicate: P, config: SearchTreeConfig) -> Self {
        let mut nodes = List::with_capacity(config.node_capacity());
        let root = nodes.insert(Node::new(predicate.nil_region()));
        Self {
            predicate,
            config,
            root,
            nodes,
        }
    }

    pub fn predicate(&self) -> &P {
        &self.predicate
    }

    pub fn config(&self) -> &SearchTreeConfig {
        &self.config
    }

    /// The root's search space as of the last rebalance.
    pub fn region(&self) -> &R {
        &self.nodes.get(self.root).region
    }

    pub fn node_count(&self) -> usize {
        self.nodes.size()
    }

    /// Inserts a value. This may leave the tree unbalanced.
    pub fn add(&mut self, value: V) {
        self.node_insert(self.root, value);
    }

    /// Removes a value from every node holding it.
    pub fn remove(&mut self, value: &V) {
        let mut to_process = vec![self.root];
        while let Some(idx) = to_process.pop() {
            let node = self.nodes.get_mut(idx);
            if let Some(children) = node.children {
                to_process.extend(children);
            }
            node.values.remove(value);
        }
    }

    /// Empties the tree, leaving a single leaf with the nil region.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = self.nodes.insert(Node::new(self.predicate.nil_region()));
        log::debug!("cleared search tree");
    }

    /// Every value held by a node whose region overlaps `region`.
    ///
    /// Children are always searched, even when their own region misses
    /// `region`, since orphans are only bounded by an ancestor's region.
    pub fn nearby_values(&self, region: &R) -> BTreeSet<V> {
        self.query(region, None)
    }

    /// Same as [`nearby_values`](Self::nearby_values) without `omit`.
    pub fn nearby_values_omit(&self, region: &R, omit: &V) -> BTreeSet<V> {
        self.query(region, Some(omit))
    }

    /// Every distinct value in the tree.
    pub fn values(&self) -> BTreeSet<V> {
        self.collect_values(self.root)
    }

    pub fn len(&self) -> usize {
        self.values().len()
    }

    pub fn is_empty(&self) -> bool {
        let mut to_process = vec![self.root];
        while let Some(idx) = to_process.pop() {
            let node = self.nodes.get(idx);
            if !node.values.is_empty() {
                return false;
            }
            if let Some(children) = node.children {
                to_process.extend(children);
            }
        }
        true
    }

    /// Exchanges the contents of two trees without copying any nodes.
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(self, other);
    }

    /// Rebuilds the root region from the current values, then decides again
    /// for every node whether it should be a leaf or subdivide.
    pub fn rebalance(&mut self) {
        let values = self.collect_values(self.root);
        let region = self.predicate.build_region_from_data(&values);
        self.nodes.get_mut(self.root).region = region;

        let mut to_process = vec![self.root];
        while let Some(idx) = to_process.pop() {
            if let Some(children) = self.rebalance_node(idx) {
                to_process.extend(children);
            }
        }

        log::debug!(
            "rebalanced search tree: {} values, {} nodes",
            values.len(),
            self.nodes.size()
        );
    }

    pub fn traverse<T>(&self, visitor: &mut T)
    where
        T: SearchTreeVisitor<V, R>,
    {
        let mut to_process = vec![(self.root, 0usize)];
        while let Some((idx, depth)) = to_process.pop() {
            let node = self.nodes.get(idx);
            match node.children {
                Some(children) => {
                    visitor.branch(depth, &node.region);
                    // Reversed so children pop in slot order.
                    to_process.extend(children.iter().rev().map(|&child| (child, depth + 1)));
                }
                None => visitor.leaf(depth, &node.region),
            }
            for value in &node.values {
                visitor.value(depth, value);
            }
        }
    }

    pub fn stats(&self) -> SearchTreeStats {
        let mut collector = StatsCollector::default();
        self.traverse(&mut collector);
        collector.stats
    }

    fn query(&self, region: &R, omit: Option<&V>) -> BTreeSet<V> {
        let mut out = BTreeSet::new();
        let mut to_process = vec![self.root];
        while let Some(idx) = to_process.pop() {
            let node = self.nodes.get(idx);
            if let Some(children) = node.children {
                to_process.extend(children);
            }
            if self.predicate.overlaps(&node.region, region) {
                out.extend(
                    node.values
                        .iter()
                        .filter(|value| omit != Some(*value))
                        .cloned(),
                );
            }
        }
        out
    }

    fn collect_values(&self, start: usize) -> BTreeSet<V> {
        let mut values = BTreeSet::new();
        let mut to_process = vec![start];
        while let Some(idx) = to_process.pop() {
            let node = self.nodes.get(idx);
            if let Some(children) = node.children {
                to_process.extend(children);
            }
            values.extend(node.values.iter().cloned());
        }
        values
    }

    fn node_insert(&mut self, start: usize, value: V) {
        let mut to_process = vec![start];
        while let Some(idx) = to_process.pop() {
            let children = self.nodes.get(idx).children;
            let Some(children) = children else {
                self.nodes.get_mut(idx).values.insert(value.clone());
                continue;
            };

            let mut routed = false;
            for child in children {
                if self.predicate.satisfies(&self.nodes.get(child).region, &value) {
                    to_process.push(child);
                    routed = true;
                }
            }

            // No child wants it: either the regions are stale or the
            // predicate is inconsistent. Hold it here until a rebalance.
            if !routed {
                self.nodes.get_mut(idx).values.insert(value.clone());
            }
        }
    }

    /// Rebalances a single node and returns its children if it subdivided.
    fn rebalance_node(&mut self, idx: usize) -> Option<[usize; 4]> {
        let mut values = self.collect_values(idx);
        let total = values.len();
        let region = &self.nodes.get(idx).region;
        values.retain(|value| self.predicate.satisfies(region, value));
        if values.len() < total {
            log::trace!(
                "node {idx}: dropped {} values outside its region",
                total - values.len()
            );
        }

        self.nodes.get_mut(idx).values.clear();

        if values.len() <= self.config.min_leaf_size() {
            log::trace!("node {idx}: {} values, keeping a leaf", values.len());
            self.make_leaf(idx, values);
            return None;
        }

        let quads = self
            .predicate
            .build_quadrants_from_data(&self.nodes.get(idx).region, &values);

        if !self.should_subdivide(&values, &quads) {
            log::trace!("node {idx}: quadrants do not separate its values, keeping a leaf");
            self.make_leaf(idx, values);
            return None;
        }

        log::trace!("node {idx}: subdividing {} values", values.len());
        let children = self.reset_children(idx, quads);
        for value in values {
            self.node_insert(idx, value);
        }

        let orphans = self.nodes.get(idx).values.len();
        if orphans > 0 {
            log::trace!("node {idx}: holding {orphans} orphaned values");
        }
        Some(children)
    }

    /// False when every value satisfies all four quadrants, since each child
    /// would then hold a copy of the whole set.
    fn should_subdivide(&self, values: &BTreeSet<V>, quads: &Quadrants<R>) -> bool {
        values.iter().any(|value| {
            quads
                .iter()
                .any(|(_, region)| !self.predicate.satisfies(region, value))
        })
    }

    fn make_leaf(&mut self, idx: usize, values: BTreeSet<V>) {
        self.delete_children(idx);
        self.nodes.get_mut(idx).values = values;
    }

    /// Gives the node four empty leaf children with the given regions,
    /// reusing its existing children when it has them.
    fn reset_children(&mut self, idx: usize, quads: Quadrants<R>) -> [usize; 4] {
        let regions = quads.into_array();
        let existing = self.nodes.get(idx).children;
        match existing {
            Some(children) => {
                for (child, region) in children.into_iter().zip(regions) {
                    self.delete_children(child);
                    let node = self.nodes.get_mut(child);
                    node.values.clear();
                    node.region = region;
                }
                children
            }
            None => {
                let children = regions.map(|region| self.nodes.insert(Node::new(region)));
                self.nodes.get_mut(idx).children = Some(children);
                children
            }
        }
    }

    /// Frees every descendant of a node, making it a leaf.
    fn delete_children(&mut self, idx: usize) {
        let mut to_process: Vec<usize> = self
            .nodes
            .get_mut(idx)
            .children
            .take()
            .into_iter()
            .flatten()
            .collect();
        while let Some(child) = to_process.pop() {
            let node = self.nodes.erase(child);
            if let Some(grandchildren) = node.children {
                to_process.extend(grandchildren);
            }
        }
    }
}

impl<V, R, P> Default for SearchTree<V, R, P>
where
    V: Ord + Clone,
    R: Clone,
    P: SearchPredicate<V, R> + Default,
{
    fn default() -> Self {
        Self::new(P::default())
    }
}
