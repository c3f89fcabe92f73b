//! Equality and concatenation for layered maps.
//!
//! Both operations accept either another [`LayeredMap`] or a plain [`Layer`]. Dynamic
//! operands arrive as [`Value`]s and are rejected unless they hold a mapping.

use std::ops::{Add, AddAssign};

use super::{Layer, LayerError, LayeredMap};
use crate::{Result, Value};

/// The right-hand side of a concatenation.
#[derive(Debug, Clone)]
pub enum Operand {
    /// All layers of another layered map, in order
    Layered(LayeredMap),
    /// A plain mapping, taken as a single layer
    Layer(Layer),
}

impl Operand {
    fn into_layers(self) -> Vec<Layer> {
        match self {
            Operand::Layered(map) => map.into_layers(),
            Operand::Layer(layer) => vec![layer],
        }
    }
}

impl From<LayeredMap> for Operand {
    fn from(value: LayeredMap) -> Self {
        Operand::Layered(value)
    }
}

impl From<&LayeredMap> for Operand {
    fn from(value: &LayeredMap) -> Self {
        Operand::Layered(value.clone())
    }
}

impl From<Layer> for Operand {
    fn from(value: Layer) -> Self {
        Operand::Layer(value)
    }
}

impl TryFrom<Value> for Operand {
    type Error = crate::Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Map(layer) => Ok(Operand::Layer(layer)),
            other => Err(LayerError::UnsupportedOperand {
                actual: other.type_name().to_string(),
            }
            .into()),
        }
    }
}

impl LayeredMap {
    /// Returns a new map with this map's layers followed by `other`'s.
    ///
    /// Layers are copied; the result shares no state with either operand.
    ///
    /// # Errors
    /// Fails with a validation error if `other` is an empty mapping.
    pub fn concat(&self, other: impl Into<Operand>) -> Result<LayeredMap> {
        let other: Operand = other.into();
        let mut layers = self.layers().to_vec();
        layers.extend(other.into_layers());
        tracing::debug!(layers = layers.len(), "Concatenated layered map");
        LayeredMap::new(layers)
    }

    /// Returns a new map with `other`'s layers followed by this map's.
    ///
    /// This is the reflected form of [`concat`](Self::concat), for a mapping on the
    /// left-hand side.
    pub fn concat_onto(&self, other: impl Into<Operand>) -> Result<LayeredMap> {
        let other: Operand = other.into();
        let mut layers = other.into_layers();
        layers.extend_from_slice(self.layers());
        tracing::debug!(layers = layers.len(), "Concatenated layered map");
        LayeredMap::new(layers)
    }

    /// Appends `other`'s layers to this map in place.
    ///
    /// # Errors
    /// Fails with a validation error if `other` is an empty mapping; the map is
    /// unchanged on failure.
    pub fn extend(&mut self, other: impl Into<Operand>) -> Result<()> {
        let other: Operand = other.into();
        let incoming = other.into_layers();
        if incoming.iter().any(Layer::is_empty) {
            return Err(LayerError::EmptyLayer {
                index: self.layer_count(),
            }
            .into());
        }
        tracing::debug!(appended = incoming.len(), "Extending layered map");
        self.layers_mut().extend(incoming);
        Ok(())
    }

    /// [`concat`](Self::concat) with a dynamic operand.
    ///
    /// # Errors
    /// Fails with [`LayerError::UnsupportedOperand`] unless `other` is a mapping.
    pub fn try_concat_value(&self, other: &Value) -> Result<LayeredMap> {
        self.concat(Operand::try_from(other.clone())?)
    }

    /// [`concat_onto`](Self::concat_onto) with a dynamic operand.
    pub fn try_concat_value_onto(&self, other: &Value) -> Result<LayeredMap> {
        self.concat_onto(Operand::try_from(other.clone())?)
    }

    /// [`extend`](Self::extend) with a dynamic operand.
    pub fn try_extend_value(&mut self, other: &Value) -> Result<()> {
        self.extend(Operand::try_from(other.clone())?)
    }

    /// Compares against a dynamic value.
    ///
    /// Only mappings can be equal to a layered map; any other value is unequal.
    pub fn equals_value(&self, other: &Value) -> bool {
        match other {
            Value::Map(layer) => self == layer,
            _ => false,
        }
    }
}

/// Equal iff both have the same distinct keys and every key resolves to equal values.
impl PartialEq for LayeredMap {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(key, value)| other.get(key).is_ok_and(|theirs| theirs == value))
    }
}

impl PartialEq<Layer> for LayeredMap {
    fn eq(&self, other: &Layer) -> bool {
        self.len() == other.len()
            && other
                .iter()
                .all(|(key, value)| self.get(key).is_ok_and(|ours| ours == value))
    }
}

impl PartialEq<LayeredMap> for Layer {
    fn eq(&self, other: &LayeredMap) -> bool {
        other == self
    }
}

impl Add for LayeredMap {
    type Output = LayeredMap;

    fn add(mut self, rhs: LayeredMap) -> LayeredMap {
        self += rhs;
        self
    }
}

impl Add<&LayeredMap> for &LayeredMap {
    type Output = LayeredMap;

    fn add(self, rhs: &LayeredMap) -> LayeredMap {
        self.clone() + rhs.clone()
    }
}

impl AddAssign for LayeredMap {
    fn add_assign(&mut self, rhs: LayeredMap) {
        // Both sides already hold only non-empty layers.
        self.layers_mut().extend(rhs.into_layers());
    }
}
