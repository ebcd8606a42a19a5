//! Vertex -> color mapping.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use wp_core::{Color, VertexKey};

/// A mapping from vertices to colors.
///
/// Iteration follows insertion order, which for an assignment produced by
/// [`crate::color`] is the order vertices were colored in.
#[derive(Debug, Clone)]
pub struct ColorAssignment<V> {
    order: Vec<V>,
    colors: HashMap<V, Color>,
}

impl<V> Default for ColorAssignment<V> {
    fn default() -> Self {
        Self {
            order: Vec::new(),
            colors: HashMap::new(),
        }
    }
}

impl<V: VertexKey> ColorAssignment<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            order: Vec::with_capacity(capacity),
            colors: HashMap::with_capacity(capacity),
        }
    }

    /// Set the color of a vertex, returning the previous color if any.
    pub fn insert(&mut self, vertex: V, color: Color) -> Option<Color> {
        let previous = self.colors.insert(vertex.clone(), color);
        if previous.is_none() {
            self.order.push(vertex);
        }
        previous
    }

    pub fn get(&self, vertex: &V) -> Option<Color> {
        self.colors.get(vertex).copied()
    }

    pub fn contains(&self, vertex: &V) -> bool {
        self.colors.contains_key(vertex)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// (vertex, color) pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&V, Color)> + '_ {
        self.order.iter().map(|v| (v, self.colors[v]))
    }

    /// Number of distinct colors that appear.
    pub fn colors_used(&self) -> usize {
        self.colors.values().collect::<BTreeSet<_>>().len()
    }

    /// Vertices grouped by color, each class in insertion order.
    pub fn color_classes(&self) -> BTreeMap<Color, Vec<&V>> {
        let mut classes: BTreeMap<Color, Vec<&V>> = BTreeMap::new();
        for (v, c) in self.iter() {
            classes.entry(c).or_default().push(v);
        }
        classes
    }
}

impl<V: VertexKey> FromIterator<(V, Color)> for ColorAssignment<V> {
    fn from_iter<I: IntoIterator<Item = (V, Color)>>(iter: I) -> Self {
        let mut assignment = Self::new();
        for (v, c) in iter {
            assignment.insert(v, c);
        }
        assignment
    }
}

impl<V: VertexKey> PartialEq for ColorAssignment<V> {
    /// Equal when both map the same vertices to the same colors, in any order.
    fn eq(&self, other: &Self) -> bool {
        self.colors == other.colors
    }
}

impl<V: VertexKey> Eq for ColorAssignment<V> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_lookup() {
        let mut assignment = ColorAssignment::new();
        assert_eq!(assignment.insert('a', 0), None);
        assert_eq!(assignment.insert('b', 1), None);
        assert_eq!(assignment.insert('a', 2), Some(0));

        assert_eq!(assignment.get(&'a'), Some(2));
        assert_eq!(assignment.get(&'z'), None);
        assert_eq!(assignment.len(), 2);
    }

    #[test]
    fn iteration_keeps_insertion_order() {
        let assignment: ColorAssignment<u32> = [(9, 1), (3, 0), (5, 1)].into_iter().collect();
        let pairs: Vec<(u32, Color)> = assignment.iter().map(|(v, c)| (*v, c)).collect();
        assert_eq!(pairs, vec![(9, 1), (3, 0), (5, 1)]);
    }

    #[test]
    fn colors_used_counts_distinct_values() {
        let assignment: ColorAssignment<u32> =
            [(1, 0), (2, 3), (3, 0), (4, 3)].into_iter().collect();
        assert_eq!(assignment.colors_used(), 2);
        assert_eq!(ColorAssignment::<u32>::new().colors_used(), 0);
    }

    #[test]
    fn color_classes_group_vertices() {
        let assignment: ColorAssignment<u32> =
            [(1, 1), (2, 0), (3, 1), (4, 2)].into_iter().collect();
        let classes = assignment.color_classes();
        assert_eq!(classes.len(), 3);
        assert_eq!(classes[&0], vec![&2]);
        assert_eq!(classes[&1], vec![&1, &3]);
        assert_eq!(classes[&2], vec![&4]);
    }

    #[test]
    fn equality_ignores_order() {
        let a: ColorAssignment<u32> = [(1, 0), (2, 1)].into_iter().collect();
        let b: ColorAssignment<u32> = [(2, 1), (1, 0)].into_iter().collect();
        assert_eq!(a, b);
    }
}
