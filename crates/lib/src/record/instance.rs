//! Instances of generated record types.

use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::{FieldEnumerable, RecordError, RecordType};
use crate::{Layer, Result, Value, value::Repr};

/// An instance of a [`RecordType`].
///
/// A record always holds exactly one value per declared field. Whether its fields may
/// be reassigned after construction is decided by its type.
///
/// # Examples
///
/// ```
/// use layerstack::{RecordType, Value};
///
/// let point = RecordType::builder("Point", "x y z").default("z", 0).build()?;
/// let mut p = point.construct([Value::from("A"), Value::from(1)])?;
///
/// // Immutable types produce a new instance from replace
/// let moved = p.replace([("x", "B")])?.unwrap();
/// assert_eq!(moved.to_string(), "Point(x='B',y=1,z=0)");
///
/// // ...and reject assignment
/// assert!(p.set_field("x", "B").unwrap_err().is_immutability_error());
/// # Ok::<(), layerstack::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Record {
    ty: RecordType,
    values: Vec<Value>,
}

impl Record {
    /// Initial binding of all fields; `values` is aligned with the type's fields.
    pub(crate) fn from_parts(ty: RecordType, values: Vec<Value>) -> Self {
        debug_assert_eq!(ty.len(), values.len());
        Self { ty, values }
    }

    /// The type this record was constructed from
    pub fn record_type(&self) -> &RecordType {
        &self.ty
    }

    /// Name of this record's type
    pub fn type_name(&self) -> &str {
        self.ty.name()
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false; every record type declares at least one field
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Field values in declared order
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Returns the value of the field at `index` in declared order.
    pub fn get(&self, index: usize) -> Result<&Value> {
        self.values.get(index).ok_or_else(|| {
            RecordError::IndexOutOfRange {
                index,
                len: self.values.len(),
            }
            .into()
        })
    }

    /// Returns the value of the field named `field`.
    pub fn get_field(&self, field: &str) -> Result<&Value> {
        let index = self.index_of(field)?;
        Ok(&self.values[index])
    }

    /// Iterates `(field, value)` pairs in declared order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.ty
            .fields()
            .iter()
            .map(String::as_str)
            .zip(self.values.iter())
    }

    /// Returns every declared field with its current value, in declared order.
    pub fn as_mapping(&self) -> Vec<(String, Value)> {
        self.iter()
            .map(|(field, value)| (field.to_string(), value.clone()))
            .collect()
    }

    /// Converts the fields into a layer keyed by field name.
    pub fn to_layer(&self) -> Layer {
        self.iter()
            .map(|(field, value)| (field.to_string(), value.clone()))
            .collect()
    }

    /// Assigns `value` to the field named `field`.
    ///
    /// # Errors
    /// On an immutable type every assignment fails with
    /// [`RecordError::Immutable`]. On a mutable type, assigning a name that is not a
    /// declared field fails with [`RecordError::InvalidAttribute`].
    pub fn set_field(&mut self, field: &str, value: impl Into<Value>) -> Result<()> {
        if !self.ty.is_mutable() {
            return Err(RecordError::Immutable {
                type_name: self.type_name().to_string(),
            }
            .into());
        }
        let index = self
            .ty
            .field_index(field)
            .ok_or_else(|| RecordError::InvalidAttribute {
                type_name: self.type_name().to_string(),
                field: field.to_string(),
            })?;
        self.values[index] = value.into();
        Ok(())
    }

    /// Returns a copy of this record with selected fields overridden.
    ///
    /// Works on any record regardless of mutability and never changes `self`.
    ///
    /// # Errors
    /// Fails with [`RecordError::InvalidField`] if an override key is not a declared
    /// field.
    pub fn with<I, K, V>(&self, overrides: I) -> Result<Record>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Value>,
    {
        let mut values = self.values.clone();
        for (index, value) in self.resolve(overrides)? {
            values[index] = value;
        }
        Ok(Record::from_parts(self.ty.clone(), values))
    }

    /// Overrides selected fields.
    ///
    /// Every override key must be a declared field; nothing changes otherwise. A
    /// mutable record is updated in place and `None` is returned. An immutable record
    /// is left untouched and a new instance carrying the overrides is returned, as
    /// from [`with`](Self::with).
    pub fn replace<I, K, V>(&mut self, overrides: I) -> Result<Option<Record>>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Value>,
    {
        if !self.ty.is_mutable() {
            return self.with(overrides).map(Some);
        }
        for (index, value) in self.resolve(overrides)? {
            self.values[index] = value;
        }
        Ok(None)
    }

    /// Maps every override key to its field index before anything is applied.
    fn resolve<I, K, V>(&self, overrides: I) -> Result<Vec<(usize, Value)>>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Value>,
    {
        overrides
            .into_iter()
            .map(|(field, value)| Ok((self.index_of(field.as_ref())?, value.into())))
            .collect()
    }

    fn index_of(&self, field: &str) -> Result<usize> {
        self.ty.field_index(field).ok_or_else(|| {
            RecordError::InvalidField {
                type_name: self.type_name().to_string(),
                field: field.to_string(),
            }
            .into()
        })
    }
}

impl FieldEnumerable for Record {
    fn field_names(&self) -> &[String] {
        self.ty.fields()
    }

    fn field_values(&self) -> &[Value] {
        &self.values
    }
}

/// Structural equality: same generated type and equal field values.
impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.ty == other.ty && self.values == other.values
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.type_name())?;
        for (i, (field, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{field}={}", Repr(value))?;
        }
        write!(f, ")")
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (field, value) in self.iter() {
            map.serialize_entry(field, value)?;
        }
        map.end()
    }
}
