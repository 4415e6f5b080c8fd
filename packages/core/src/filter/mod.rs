//! Query construction: property descriptors, operators, the filter algebra,
//! sorts, and property assignments.
//!
//! Everything in this module is encode-only. Descriptors pair a property
//! name with its kind and expose only the operators and assignment shapes
//! that kind supports, so an ill-typed query is a compile error rather than
//! a backend rejection.
//!
//! # Examples
//!
//! ```
//! use lifedesk_core::filter::{Checkbox, Select};
//!
//! let filter = Checkbox::new("Done")
//!     .unchecked()
//!     .and(Select::new("Priority").equals("High"));
//! ```

mod expr;
mod operator;
mod property;
mod value;

pub use expr::{all, any_of, Filter};
pub use operator::Operator;
pub use property::{
    Checkbox, Date, MultiSelect, Number, Property, PropertyKind, Relation, Select, Status, Text,
    Title, UniqueId,
};
pub use value::{
    Assign, AssignValue, Assigns, DateInput, Direction, NumberInput, RelationIds, Scalar, Sort,
    TextSpans, TextValue,
};
