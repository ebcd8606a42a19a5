//! wp-color: Welsh–Powell vertex coloring and coloring verification.
//!
//! Two entry points:
//! - [`color`]: greedy coloring in descending-degree order
//! - [`verify`]: checks an assignment is proper and counts colors
//!
//! # Example
//!
//! ```
//! use wp_color::{color, verify};
//! use wp_graph::Graph;
//!
//! let graph = Graph::from_edges([(1, 2), (2, 3), (3, 1)]).unwrap();
//! let assignment = color(&graph);
//! let result = verify(&graph, &assignment).unwrap();
//!
//! assert!(result.is_valid());
//! assert_eq!(result.colors_used(), Some(3));
//! ```

pub mod assignment;
pub mod verify;
pub mod welsh_powell;

pub use assignment::ColorAssignment;
pub use verify::{VerificationResult, verify};
pub use welsh_powell::{color, welsh_powell_order};
