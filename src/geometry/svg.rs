use std::fmt::Write as _;

use crate::foundation::core::Size;
use crate::foundation::math::Num;

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Open a standalone `<svg>` root whose user space matches `dimensions` in pixels.
pub(crate) fn open_svg(out: &mut String, dimensions: Size) {
    let w = Num(dimensions.width);
    let h = Num(dimensions.height);
    let _ = write!(
        out,
        r#"<svg xmlns="{SVG_NS}" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
    );
}

pub(crate) fn close_svg(out: &mut String) {
    out.push_str("</svg>");
}
