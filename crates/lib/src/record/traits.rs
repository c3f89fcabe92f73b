//! Capabilities shared by record-like values.

use crate::Value;

/// A value that exposes a stable, ordered view of its fields.
///
/// [`LayeredMap::decompose`](crate::LayeredMap::decompose) relies on this view to
/// split stored values into their positional field values.
///
/// # Examples
///
/// ```
/// use layerstack::{FieldEnumerable, RecordType};
///
/// let pair = RecordType::builder("Pair", "left right").build()?;
/// let record = pair.construct([1, 2])?;
///
/// assert_eq!(record.field_names(), ["left", "right"]);
/// assert_eq!(record.field_count(), 2);
/// # Ok::<(), layerstack::Error>(())
/// ```
pub trait FieldEnumerable {
    /// Declared field names, in declaration order.
    fn field_names(&self) -> &[String];

    /// Current field values, positionally aligned with [`field_names`](Self::field_names).
    fn field_values(&self) -> &[Value];

    /// Number of declared fields.
    fn field_count(&self) -> usize {
        self.field_names().len()
    }
}
