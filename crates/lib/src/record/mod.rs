//! Record types generated at runtime from a field specification.
//!
//! The factory ([`create`] or [`RecordType::builder`]) validates a type name, a field
//! specification, optional defaults and a mutability flag, and produces a
//! [`RecordType`]. Instances ([`Record`]) behave like lightweight named tuples:
//!
//! - constructed positionally, with trailing defaults filled in
//! - indexed by position, or read by field name
//! - compared structurally within the same type, never equal across types
//! - reconstructed with overrides through [`Record::replace`]
//! - protected from assignment unless the type is mutable
//!
//! # Usage
//!
//! ```
//! use layerstack::{Value, record};
//!
//! let account = record::create("Account", "owner, balance", Some(true), [("balance", 0)])?;
//! let mut acct = account.construct(["ada"])?;
//!
//! acct.set_field("balance", 100)?;
//! assert_eq!(acct.replace([("balance", 250)])?, None);
//! assert_eq!(*acct.get_field("balance")?, 250);
//! assert_eq!(acct.to_string(), "Account(owner='ada',balance=250)");
//! # Ok::<(), layerstack::Error>(())
//! ```

pub mod errors;
pub mod ident;
mod instance;
mod schema;
pub mod spec;
pub mod traits;

pub use errors::RecordError;
pub use instance::Record;
pub use schema::{RecordType, RecordTypeBuilder, create};
pub use spec::FieldSpec;
pub use traits::FieldEnumerable;
