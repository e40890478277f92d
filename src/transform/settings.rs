use derive_builder::Builder;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Settings for problem transforms.
///
/// Settings can be constructed field by field or via
/// [`TransformSettingsBuilder`](crate::transform::TransformSettingsBuilder):
///
/// ```
/// use coneform::transform::TransformSettingsBuilder;
///
/// let settings = TransformSettingsBuilder::default()
///     .check_sparse_format(false)
///     .build()
///     .unwrap();
/// ```
#[derive(Builder, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TransformSettings {
    /// validate the CSC structure of every constraint block before
    /// stacking.   Disable only when the modeling layer guarantees
    /// well formed blocks.
    #[builder(default = "true")]
    pub check_sparse_format: bool,
}

impl Default for TransformSettings {
    fn default() -> TransformSettings {
        TransformSettingsBuilder::default().build().unwrap()
    }
}
