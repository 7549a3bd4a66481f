use serde::Deserialize;

/// A planned dish: how many units of a named dish the vendor wants to make.
///
/// Names are free text. A blank name or a non-positive quantity makes the
/// selection inert rather than invalid; the aggregation skips it.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct DishSelection {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub quantity: f64,
}

impl DishSelection {
    pub fn new(name: impl Into<String>, quantity: f64) -> Self {
        Self {
            name: name.into(),
            quantity,
        }
    }

    /// Whether this selection can contribute anything: a non-blank name and
    /// a strictly positive quantity. NaN quantities are never valid.
    #[inline]
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty() && self.quantity > 0.0
    }
}
