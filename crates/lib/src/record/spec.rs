//! Field specifications accepted by the record type factory.

/// The field names of a record type, as supplied by the caller.
///
/// A specification is either an explicit list of names or a single delimited
/// string. Delimited strings are split on commas when they contain one (each piece
/// trimmed), and on whitespace otherwise.
///
/// ```
/// # use layerstack::record::FieldSpec;
/// assert_eq!(FieldSpec::from("x y z").names(), vec!["x", "y", "z"]);
/// assert_eq!(FieldSpec::from("x, y ,z").names(), vec!["x", "y", "z"]);
/// assert_eq!(FieldSpec::from(vec!["x", "y"]).names(), vec!["x", "y"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldSpec {
    /// Explicit ordered names
    List(Vec<String>),
    /// A comma- or whitespace-delimited string of names
    Delimited(String),
}

impl FieldSpec {
    /// Splits the specification into raw names, in input order.
    ///
    /// Names are not validated or deduplicated here.
    pub fn names(&self) -> Vec<&str> {
        match self {
            FieldSpec::List(names) => names.iter().map(String::as_str).collect(),
            FieldSpec::Delimited(spec) if spec.contains(',') => {
                spec.split(',').map(str::trim).collect()
            }
            FieldSpec::Delimited(spec) => spec.split_whitespace().collect(),
        }
    }

    /// Returns the names with duplicates collapsed to their first occurrence.
    pub(crate) fn unique_names(&self) -> Vec<String> {
        let mut unique: Vec<String> = Vec::new();
        for name in self.names() {
            if !unique.iter().any(|seen| seen == name) {
                unique.push(name.to_string());
            }
        }
        unique
    }
}

impl From<&str> for FieldSpec {
    fn from(value: &str) -> Self {
        FieldSpec::Delimited(value.to_string())
    }
}

impl From<String> for FieldSpec {
    fn from(value: String) -> Self {
        FieldSpec::Delimited(value)
    }
}

impl From<Vec<String>> for FieldSpec {
    fn from(value: Vec<String>) -> Self {
        FieldSpec::List(value)
    }
}

impl From<Vec<&str>> for FieldSpec {
    fn from(value: Vec<&str>) -> Self {
        FieldSpec::List(value.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for FieldSpec {
    fn from(value: &[&str]) -> Self {
        FieldSpec::List(value.iter().map(|s| s.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for FieldSpec {
    fn from(value: [&str; N]) -> Self {
        FieldSpec::List(value.iter().map(|s| s.to_string()).collect())
    }
}
