use core::fmt::Debug;
use core::hash::Hash;

/// A vertex color: a 0-based, non-negative integer.
///
/// Mapping colors to anything visual is left to renderers.
pub type Color = u32;

/// Bound for vertex identifiers.
///
/// Any cloneable, hashable identifier works (integers, strings, ...).
/// `Debug` is used to name the vertex in error messages.
pub trait VertexKey: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> VertexKey for T {}
