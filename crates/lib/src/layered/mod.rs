//! Layered, shadowing key-value maps.
//!
//! A [`LayeredMap`] stacks plain mappings ([`Layer`]s). Reads resolve to the most
//! recently added layer defining a key, writes touch only that layer (or add a new
//! one for a new key), and deletes purge a key from every layer, dropping layers
//! that end up empty.
//!
//! # Usage
//!
//! ```
//! use layerstack::{Layer, LayeredMap, Value};
//!
//! let defaults = Layer::from([("a".to_string(), Value::from(1))]);
//! let overrides = Layer::from([
//!     ("a".to_string(), Value::from(2)),
//!     ("b".to_string(), Value::from(3)),
//! ]);
//!
//! let mut map = LayeredMap::new([defaults, overrides])?;
//! assert!(map.is_truthy());
//!
//! map.delete("a")?;
//! assert_eq!(map.layers(), [Layer::from([("b".to_string(), Value::from(3))])]);
//! assert!(!map.is_truthy());
//! # Ok::<(), layerstack::Error>(())
//! ```

use std::collections::BTreeMap;

use crate::Value;

pub mod errors;
mod iter;
mod map;
pub mod ops;

pub use errors::LayerError;
pub use iter::{Iter, Keys};
pub use map::LayeredMap;
pub use ops::Operand;

/// A single mapping within a layered map.
pub type Layer = BTreeMap<String, Value>;
