//! Record type generation.
//!
//! A [`RecordType`] is a schema: an ordered list of unique field names, optional
//! trailing defaults and a mutability flag. Every behavior of its instances is driven
//! by the schema, so generating a type never synthesizes code.

use std::{fmt, sync::Arc};

use super::{FieldSpec, Record, RecordError, ident};
use crate::{Result, Value};

#[derive(Debug)]
struct Schema {
    name: String,
    fields: Vec<String>,
    /// `defaults[i]` is the default for `fields[i]`, if it has one
    defaults: Vec<Option<Value>>,
    mutable: bool,
}

/// A record type produced by the factory.
///
/// Cloning a `RecordType` is cheap and yields a handle to the same type. Types are
/// compared by identity: two separate factory calls always produce distinct types,
/// even when their names and fields agree.
///
/// # Examples
///
/// ```
/// use layerstack::{RecordType, Value};
///
/// let point = RecordType::builder("Point", "x y z").default("z", 0).build()?;
/// let p = point.construct([Value::from("A"), Value::from(1)])?;
///
/// assert_eq!(p.to_string(), "Point(x='A',y=1,z=0)");
/// assert_eq!(*p.get(2)?, 0);
/// # Ok::<(), layerstack::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct RecordType {
    schema: Arc<Schema>,
}

impl RecordType {
    /// Starts building a record type with the given name and fields.
    pub fn builder(name: impl Into<String>, fields: impl Into<FieldSpec>) -> RecordTypeBuilder {
        RecordTypeBuilder {
            name: name.into(),
            fields: fields.into(),
            mutable: false,
            defaults: Vec::new(),
        }
    }

    /// Name of the generated type
    pub fn name(&self) -> &str {
        &self.schema.name
    }

    /// Declared field names, deduplicated, in first-occurrence order
    pub fn fields(&self) -> &[String] {
        &self.schema.fields
    }

    /// Number of declared fields
    pub fn len(&self) -> usize {
        self.schema.fields.len()
    }

    /// Always false; a record type declares at least one field
    pub fn is_empty(&self) -> bool {
        self.schema.fields.is_empty()
    }

    /// Whether instances accept field assignment after construction
    pub fn is_mutable(&self) -> bool {
        self.schema.mutable
    }

    /// Position of `field` in the declared order
    pub fn field_index(&self, field: &str) -> Option<usize> {
        self.schema.fields.iter().position(|name| name == field)
    }

    /// Default value declared for `field`
    pub fn default_for(&self, field: &str) -> Option<&Value> {
        let index = self.field_index(field)?;
        self.schema.defaults[index].as_ref()
    }

    /// Declared defaults, in field order
    pub fn defaults(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.schema
            .fields
            .iter()
            .zip(&self.schema.defaults)
            .filter_map(|(name, default)| default.as_ref().map(|value| (name.as_str(), value)))
    }

    /// Number of fields that must be supplied at construction
    pub fn required_count(&self) -> usize {
        self.schema.defaults.iter().filter(|d| d.is_none()).count()
    }

    /// Constructs an instance from positional values.
    ///
    /// Trailing fields with defaults may be omitted.
    pub fn construct<I, V>(&self, positional: I) -> Result<Record>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.construct_with(positional, std::iter::empty::<(&str, Value)>())
    }

    /// Constructs an instance from positional values followed by named values.
    ///
    /// Positional values bind to fields in declared order; named values bind to the
    /// field of that name. Fields left unbound take their default.
    pub fn construct_with<I, V, N, K, W>(&self, positional: I, named: N) -> Result<Record>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
        N: IntoIterator<Item = (K, W)>,
        K: AsRef<str>,
        W: Into<Value>,
    {
        let expected = self.len();
        let mut slots: Vec<Option<Value>> =
            positional.into_iter().map(|v| Some(v.into())).collect();
        if slots.len() > expected {
            return Err(RecordError::TooManyArguments {
                type_name: self.name().to_string(),
                expected,
                actual: slots.len(),
            }
            .into());
        }
        slots.resize(expected, None);

        for (field, value) in named {
            let field = field.as_ref();
            let index = self.field_index(field).ok_or_else(|| RecordError::InvalidField {
                type_name: self.name().to_string(),
                field: field.to_string(),
            })?;
            if slots[index].is_some() {
                return Err(RecordError::DuplicateArgument {
                    type_name: self.name().to_string(),
                    field: field.to_string(),
                }
                .into());
            }
            slots[index] = Some(value.into());
        }

        let mut values = Vec::with_capacity(expected);
        for (index, slot) in slots.into_iter().enumerate() {
            let value = match slot.or_else(|| self.schema.defaults[index].clone()) {
                Some(value) => value,
                None => {
                    return Err(RecordError::MissingArgument {
                        type_name: self.name().to_string(),
                        field: self.schema.fields[index].clone(),
                    }
                    .into());
                }
            };
            values.push(value);
        }

        Ok(Record::from_parts(self.clone(), values))
    }

    /// Constructs an instance by assigning `values` to the fields positionally.
    ///
    /// Unlike [`construct`](Self::construct), every field must be supplied.
    pub fn make<I, V>(&self, values: I) -> Result<Record>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let values: Vec<Value> = values.into_iter().map(Into::into).collect();
        if values.len() != self.len() {
            return Err(RecordError::ArityMismatch {
                type_name: self.name().to_string(),
                expected: self.len(),
                actual: values.len(),
            }
            .into());
        }
        Ok(Record::from_parts(self.clone(), values))
    }
}

impl PartialEq for RecordType {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.schema, &other.schema)
    }
}

impl Eq for RecordType {}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name(), self.fields().join(", "))
    }
}

/// Builder for [`RecordType`], validating the whole specification in [`build`](Self::build).
#[derive(Debug, Clone)]
pub struct RecordTypeBuilder {
    name: String,
    fields: FieldSpec,
    mutable: bool,
    defaults: Vec<(String, Value)>,
}

impl RecordTypeBuilder {
    /// Sets whether instances accept field assignment after construction.
    pub fn mutable(mut self, mutable: bool) -> Self {
        self.mutable = mutable;
        self
    }

    /// Declares a default for `field`. A later default for the same field wins.
    pub fn default(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.defaults.push((field.into(), value.into()));
        self
    }

    /// Declares several defaults at once.
    pub fn defaults<I, K, V>(mut self, defaults: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        self.defaults
            .extend(defaults.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Validates the specification and generates the record type.
    ///
    /// # Errors
    /// Fails with a specification error if the type name or any field name is not a
    /// valid non-reserved identifier, if no fields are named, if a default key is not
    /// a declared field, or if a field without a default follows one with a default.
    pub fn build(self) -> Result<RecordType> {
        self.validate().map_err(|err| {
            tracing::debug!(type_name = %self.name, error = %err, "Rejected record type");
            err.into()
        })
    }

    fn validate(&self) -> std::result::Result<RecordType, RecordError> {
        ident::check_name(&self.name).map_err(|reason| RecordError::InvalidTypeName {
            name: self.name.clone(),
            reason,
        })?;

        let names = self.fields.names();
        if names.is_empty() {
            return Err(RecordError::EmptyFieldSpec);
        }
        for name in names {
            ident::check_name(name).map_err(|reason| RecordError::InvalidFieldName {
                name: name.to_string(),
                reason,
            })?;
        }

        for (key, _) in &self.defaults {
            if !ident::is_identifier(key) {
                return Err(RecordError::InvalidDefaultKey {
                    key: key.clone(),
                    reason: "not a valid identifier".to_string(),
                });
            }
        }

        let fields = self.fields.unique_names();
        let mut defaults: Vec<Option<Value>> = vec![None; fields.len()];
        for (key, value) in &self.defaults {
            let index = fields
                .iter()
                .position(|name| name == key)
                .ok_or_else(|| RecordError::UndeclaredDefault { field: key.clone() })?;
            defaults[index] = Some(value.clone());
        }

        let mut first_defaulted: Option<&str> = None;
        for (name, default) in fields.iter().zip(&defaults) {
            match (default, first_defaulted) {
                (Some(_), None) => first_defaulted = Some(name.as_str()),
                (None, Some(after)) => {
                    return Err(RecordError::NonTrailingDefault {
                        field: name.clone(),
                        after: after.to_string(),
                    });
                }
                _ => {}
            }
        }

        tracing::debug!(
            type_name = %self.name,
            fields = ?fields,
            mutable = self.mutable,
            "Generated record type"
        );

        Ok(RecordType {
            schema: Arc::new(Schema {
                name: self.name.clone(),
                fields,
                defaults,
                mutable: self.mutable,
            }),
        })
    }
}

/// Generates a record type in one call.
///
/// `mutable` of `None` means immutable. Equivalent to
/// `RecordType::builder(type_name, fields).mutable(..).defaults(defaults).build()`.
///
/// # Examples
///
/// ```
/// use layerstack::{Value, record};
///
/// let point = record::create("Point", "x y z", None, [("z", 0)])?;
/// assert_eq!(point.fields(), ["x", "y", "z"]);
/// assert!(!point.is_mutable());
///
/// let no_defaults: [(&str, Value); 0] = [];
/// assert!(record::create("class", "x", None, no_defaults).is_err());
/// # Ok::<(), layerstack::Error>(())
/// ```
pub fn create<I, K, V>(
    type_name: &str,
    fields: impl Into<FieldSpec>,
    mutable: Option<bool>,
    defaults: I,
) -> Result<RecordType>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<Value>,
{
    RecordType::builder(type_name, fields)
        .mutable(mutable.unwrap_or(false))
        .defaults(defaults)
        .build()
}
