use crate::compose::resolve::ResolvedMask;

/// Horizontal offset per repetition block, in percentage points.
pub const REPETITION_STEP_X: f64 = 10.0;
/// Vertical offset per repetition block, in percentage points.
pub const REPETITION_STEP_Y: f64 = 5.0;

/// Stack `repetitions` diagonally cascaded copies of `masks`.
///
/// Output is repetition-major: `[rep0: m0, m1, ..][rep1: m0, m1, ..]..`, which is also the
/// compositing order. Block `rep` is shifted by `(rep * 10, rep * 5)` percentage points.
/// `repetitions <= 1` returns the input untouched.
pub fn expand(masks: Vec<ResolvedMask>, repetitions: u32) -> Vec<ResolvedMask> {
    if repetitions <= 1 {
        return masks;
    }

    let mut out = Vec::with_capacity(masks.len() * repetitions as usize);
    for rep in 0..repetitions {
        let dx = f64::from(rep) * REPETITION_STEP_X;
        let dy = f64::from(rep) * REPETITION_STEP_Y;
        out.extend(masks.iter().map(|m| {
            let mut copy = m.clone();
            copy.position.x += dx;
            copy.position.y += dy;
            copy.repetition = rep;
            copy
        }));
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/compose/expand.rs"]
mod tests;
