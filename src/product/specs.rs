use serde::{Deserialize, Serialize};

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// A single specification (label-value pair) of a Product.
///
/// Rendered as one row of the specification table, in document order.
pub struct Specification {
    /// The label of the specification, e.g. `Weight`.
    pub label: String,
    /// The value of the specification, e.g. `1kg`.
    pub value: String,
}
