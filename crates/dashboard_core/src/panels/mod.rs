//! One renderer per [`Section`](crate::Section). Each is a pure function of the dataset.

pub mod composition;
pub mod frequency;
pub mod implications;
pub mod overview;
pub mod statistics;
pub mod summary;

use crate::dataset::Dataset;

/// "3.5x", or "n/a" when the quietest borough has no records.
pub(crate) fn exposure_ratio_label(data: &Dataset) -> String {
    data.exposure_ratio()
        .map_or_else(|| "n/a".to_string(), |ratio| format!("{ratio:.1}x"))
}
