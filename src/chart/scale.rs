/// Linear rescale of `value` from `in_min..in_max` to `out_min..out_max`.
///
/// A collapsed input domain (`in_max == in_min`) maps every value to the
/// midpoint of the output range. A flat series plus a threshold equal to it
/// would otherwise divide by zero and leak NaN into path output; the
/// midpoint keeps the flat line drawable and centered.
#[must_use]
pub fn rescale(value: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    if in_max == in_min {
        return (out_min + out_max) / 2.0;
    }
    out_min + (value - in_min) * (out_max - out_min) / (in_max - in_min)
}

/// Y-domain for a chart: the data extent widened to include `threshold`, so
/// the threshold line is always representable even when every value sits on
/// one side of it.
#[must_use]
pub fn value_domain(values: impl IntoIterator<Item = f64>, threshold: f64) -> (f64, f64) {
    let mut min = threshold;
    let mut max = threshold;
    for value in values {
        min = min.min(value);
        max = max.max(value);
    }
    (min, max)
}
