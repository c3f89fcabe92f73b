//! The layered map container.

use std::{collections::HashSet, fmt};

use super::{Iter, Keys, Layer, LayerError};
use crate::{Result, Value, value::write_map};

/// An ordered stack of non-empty key-value layers.
///
/// The visible value of a key comes from the last layer (highest index) that
/// defines it; earlier layers are shadowed. The layer sequence is never empty and
/// no layer is ever empty. Every operation that would break either rule fails
/// without changing the map.
///
/// # Examples
///
/// ```
/// use layerstack::{Layer, LayeredMap, Value};
///
/// let mut base = Layer::new();
/// base.insert("c1".to_string(), Value::from("AAA"));
/// let mut over = Layer::new();
/// over.insert("c1".to_string(), Value::from("BBB"));
///
/// let mut map = LayeredMap::new([base, over])?;
/// assert_eq!(*map.get("c1")?, "BBB");
///
/// map.set("c3", "GGGG");
/// assert_eq!(map.layer_count(), 3);
/// assert_eq!(map.len(), 2);
/// # Ok::<(), layerstack::Error>(())
/// ```
#[derive(Debug, Clone, serde::Serialize)]
#[serde(transparent)]
pub struct LayeredMap {
    layers: Vec<Layer>,
}

/// Checks that `layers` is a non-empty sequence of non-empty layers.
fn validate_layers(layers: &[Layer]) -> std::result::Result<(), LayerError> {
    if layers.is_empty() {
        return Err(LayerError::NoLayers);
    }
    if let Some(index) = layers.iter().position(Layer::is_empty) {
        return Err(LayerError::EmptyLayer { index });
    }
    Ok(())
}

impl LayeredMap {
    /// Creates a layered map from one or more non-empty layers, lowest first.
    pub fn new(layers: impl IntoIterator<Item = Layer>) -> Result<Self> {
        let layers: Vec<Layer> = layers.into_iter().collect();
        validate_layers(&layers)?;
        Ok(Self { layers })
    }

    /// Creates a layered map holding a single layer.
    pub fn from_layer(layer: Layer) -> Result<Self> {
        Self::new([layer])
    }

    /// Creates a layered map from dynamic values, each of which must be a mapping.
    pub fn from_values(values: impl IntoIterator<Item = Value>) -> Result<Self> {
        let mut layers = Vec::new();
        for (index, value) in values.into_iter().enumerate() {
            match value {
                Value::Map(layer) => layers.push(layer),
                other => {
                    return Err(LayerError::NotAMapping {
                        index,
                        actual: other.type_name().to_string(),
                    }
                    .into());
                }
            }
        }
        Self::new(layers)
    }

    /// The layers, lowest first
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Consumes the map, returning its layers
    pub fn into_layers(self) -> Vec<Layer> {
        self.layers
    }

    /// Replaces the whole layer sequence.
    ///
    /// # Errors
    /// Fails with a validation error, leaving the map unchanged, if `layers` is empty
    /// or contains an empty layer.
    pub fn set_layers(&mut self, layers: Vec<Layer>) -> Result<()> {
        validate_layers(&layers)?;
        self.layers = layers;
        Ok(())
    }

    /// Number of layers
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// True iff the map has more than one layer.
    ///
    /// This counts layers, not keys: a single layer with many keys is falsy.
    pub fn is_truthy(&self) -> bool {
        self.layers.len() > 1
    }

    /// Number of distinct keys across all layers
    pub fn len(&self) -> usize {
        self.layers
            .iter()
            .flat_map(|layer| layer.keys())
            .collect::<HashSet<_>>()
            .len()
    }

    /// Always false; the map holds at least one non-empty layer
    pub fn is_empty(&self) -> bool {
        self.layers.iter().all(Layer::is_empty)
    }

    /// Returns true if any layer defines `key`
    pub fn contains_key(&self, key: &str) -> bool {
        self.layers.iter().any(|layer| layer.contains_key(key))
    }

    /// Index of the highest layer defining `key`
    fn top_layer_of(&self, key: &str) -> Option<usize> {
        self.layers.iter().rposition(|layer| layer.contains_key(key))
    }

    /// Returns the visible value of `key`.
    ///
    /// # Errors
    /// Fails with [`LayerError::KeyNotFound`] if no layer defines `key`.
    pub fn get(&self, key: &str) -> Result<&Value> {
        self.layers
            .iter()
            .rev()
            .find_map(|layer| layer.get(key))
            .ok_or_else(|| {
                tracing::trace!(key, "Lookup missed every layer");
                LayerError::KeyNotFound {
                    key: key.to_string(),
                }
                .into()
            })
    }

    /// Writes `value` under `key`, returning the previously visible value.
    ///
    /// A new key gets a fresh single-entry layer on top. An existing key is
    /// overwritten only in the highest layer defining it; shadowed occurrences in
    /// lower layers are left as they are.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        let key = key.into();
        match self.top_layer_of(&key) {
            Some(index) => self.layers[index].insert(key, value.into()),
            None => {
                tracing::debug!(key = %key, layer = self.layers.len(), "Appending layer");
                self.layers.push(Layer::from([(key, value.into())]));
                None
            }
        }
    }

    /// Removes `key` from every layer, returning the value that was visible.
    ///
    /// Layers left empty are dropped, preserving the order of the others.
    ///
    /// # Errors
    /// Fails with [`LayerError::KeyNotFound`] if no layer defines `key`, and with
    /// [`LayerError::NoLayers`] if removing it would leave no layers at all. The map
    /// is unchanged on failure.
    pub fn delete(&mut self, key: &str) -> Result<Value> {
        let visible = self.get(key)?.clone();

        let pruned: Vec<Layer> = self
            .layers
            .iter()
            .filter_map(|layer| {
                let mut layer = layer.clone();
                layer.remove(key);
                (!layer.is_empty()).then_some(layer)
            })
            .collect();
        let dropped = self.layers.len() - pruned.len();

        self.set_layers(pruned)?;
        if dropped > 0 {
            tracing::debug!(key, dropped, "Pruned empty layers");
        }
        Ok(visible)
    }

    /// Splits every value stored under `key` into its positional field values.
    ///
    /// One entry is returned per layer defining `key`, lowest layer first. A key
    /// absent from every layer yields an empty list.
    ///
    /// # Errors
    /// Fails with [`LayerError::NotFieldEnumerable`] if a value under `key` does not
    /// expose an ordered field list.
    pub fn decompose(&self, key: &str) -> Result<Vec<Vec<Value>>> {
        let mut decomposed = Vec::new();
        for (index, layer) in self.layers.iter().enumerate() {
            let Some(value) = layer.get(key) else {
                continue;
            };
            let fields = value.fields().ok_or_else(|| LayerError::NotFieldEnumerable {
                key: key.to_string(),
                index,
                actual: value.type_name().to_string(),
            })?;
            decomposed.push(fields.field_values().to_vec());
        }
        Ok(decomposed)
    }

    /// Iterates the distinct keys.
    ///
    /// Layers are visited from the most recently added down; within a layer keys
    /// are in lexicographic order, and a key already produced by a higher layer is
    /// skipped.
    pub fn keys(&self) -> Keys<'_> {
        Keys::new(self.iter())
    }

    /// Iterates `(key, visible value)` pairs in [`keys`](Self::keys) order.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(&self.layers)
    }

    /// Converts the layer sequence to a JSON array of objects.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub(super) fn layers_mut(&mut self) -> &mut Vec<Layer> {
        &mut self.layers
    }
}

impl fmt::Display for LayeredMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LayeredMap(")?;
        for (i, layer) in self.layers.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write_map(f, layer)?;
        }
        write!(f, ")")
    }
}

impl<'a> IntoIterator for &'a LayeredMap {
    type Item = &'a str;
    type IntoIter = Keys<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys()
    }
}
