//! RGB distance metric used for matching and sorting.

use crate::color::Rgb;

/// Sentinel distance for colors that fail to parse.
///
/// Slightly above the true maximum RGB distance (sqrt(3 * 255^2), about
/// 441.67), so unparseable colors always sort behind every real match.
pub const MAX_COLOR_DISTANCE: f64 = 442.0;

/// Euclidean distance between two colors in RGB space.
///
/// Ranges from 0.0 (identical) to about 441.67 (black to white).
pub fn distance(a: Rgb, b: Rgb) -> f64 {
    let dr = f64::from(a.r) - f64::from(b.r);
    let dg = f64::from(a.g) - f64::from(b.g);
    let db = f64::from(a.b) - f64::from(b.b);
    (dr * dr + dg * dg + db * db).sqrt()
}

/// Distance between two color strings.
///
/// If either side fails to parse, returns [`MAX_COLOR_DISTANCE`] instead
/// of erroring.
pub fn distance_str(a: &str, b: &str) -> f64 {
    match (a.parse::<Rgb>(), b.parse::<Rgb>()) {
        (Ok(a), Ok(b)) => distance(a, b),
        _ => MAX_COLOR_DISTANCE,
    }
}
