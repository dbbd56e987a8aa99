pub mod color;
pub mod compare;
pub mod error;
pub mod matcher;
pub mod metric;
pub mod palette;
pub mod rank;

pub use color::{Lab, Rgb};
pub use compare::{
    compare_all, compare_all_with, compare_one, summarize_pair, ComparisonResult, PairSummary,
};
pub use error::{ChromatchError, Result};
pub use matcher::symmetric_score;
pub use metric::{ciede2000, srgb_euclidean, Metric, SRGB_MAX_DISTANCE};
pub use palette::{OrderedRgbSet, Palette};
pub use rank::{
    aggregate_best, is_obvious_pair, normalize_name, rank, RankedEntry, DEFAULT_TOP,
    NAME_STOPWORDS,
};
