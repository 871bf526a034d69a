pub mod format;
pub mod normalizer;

pub use format::format_summary;
pub use normalizer::{
    clean_whitespace, extract_points, normalized_key, NormalizerOptions, PointBudget,
    EMPTY_INPUT_NOTICE,
};
