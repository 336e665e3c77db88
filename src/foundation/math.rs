use std::fmt;

/// Display adapter for numbers embedded in path data and style strings.
///
/// Integral values print without a fractional part and negative zero prints as `0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Num(pub f64);

impl fmt::Display for Num {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.0;
        if v == 0.0 {
            return f.write_str("0");
        }
        if v.is_infinite() {
            return f.write_str(if v > 0.0 { "Infinity" } else { "-Infinity" });
        }
        write!(f, "{v}")
    }
}

/// Round a non-negative extent up to whole pixels, rejecting degenerate values.
pub(crate) fn ceil_px(v: f64) -> Option<u32> {
    if !v.is_finite() || v <= 0.0 {
        return None;
    }
    let px = v.ceil();
    if px > f64::from(u32::MAX) {
        return None;
    }
    Some((px as u32).max(1))
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
