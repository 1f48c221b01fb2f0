//! Color types, distance metric, and dominant color extraction.
//!
//! Everything color-related lives here:
//! - [`Rgb`]: the value type, parsed from hex or `rgb(...)` strings
//! - [`distance()`] / [`distance_str`]: Euclidean RGB distance for matching
//! - [`extract_main_colors`]: dominant colors from a decoded photo

mod distance;
mod extract;
mod rgb;

pub use distance::{MAX_COLOR_DISTANCE, distance, distance_str};
pub use extract::{
    ALPHA_THRESHOLD, DISTINCT_DISTANCE, NEAR_BLACK, NEAR_WHITE, QUANT_STEP, SAMPLE_STRIDE,
    SECONDARY_RATIO, extract_from_bytes, extract_main_colors,
};
pub use rgb::{ColorParseError, Rgb};
