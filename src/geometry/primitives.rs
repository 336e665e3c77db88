use crate::foundation::core::{BezPath, Size};
use crate::foundation::error::{CollageError, CollageResult};
use crate::foundation::math::Num;
use crate::pattern::model::ShapeKind;

/// SVG path data for a primitive mask shape laid out in `(0,0)-(w,h)`.
///
/// Circles use the width as diameter on both axes. Text and unknown kinds produce an
/// empty path; text masks are drawn by [`crate::render_text`] instead.
pub fn path_data(kind: ShapeKind, dimensions: Size, custom_path_data: Option<&str>) -> String {
    let w = dimensions.width;
    let h = dimensions.height;
    match kind {
        ShapeKind::Rectangle => format!(
            "M 0,0 L {w},0 L {w},{h} L 0,{h} Z",
            w = Num(w),
            h = Num(h)
        ),
        ShapeKind::Circle => {
            let r = Num(w / 2.0);
            format!(
                "M {r},0 A {r},{r} 0 1,1 {r},{d} A {r},{r} 0 1,1 {r},0 Z",
                d = Num(w)
            )
        }
        ShapeKind::Triangle => format!(
            "M {},0 L 0,{h} L {w},{h} Z",
            Num(w / 2.0),
            w = Num(w),
            h = Num(h)
        ),
        ShapeKind::Custom => custom_path_data.unwrap_or_default().to_string(),
        ShapeKind::Text | ShapeKind::Unknown => String::new(),
    }
}

/// Parse SVG path data into a Bezier path.
///
/// Empty input parses to an empty path.
pub fn parse_path_data(d: &str) -> CollageResult<BezPath> {
    let d = d.trim();
    if d.is_empty() {
        return Ok(BezPath::new());
    }
    BezPath::from_svg(d).map_err(|e| CollageError::validation(format!("invalid pathData: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/primitives.rs"]
mod tests;
