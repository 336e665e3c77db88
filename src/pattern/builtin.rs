use crate::foundation::core::Vec2;
use crate::foundation::math::Num;
use crate::pattern::model::{Pattern, ShapeKind, ShapeMask, TextStyle};

/// Patterns available when an editor session starts, in display order.
pub fn builtin_patterns() -> Vec<Pattern> {
    vec![
        row_of_rectangles(),
        center_circle(),
        squiggly_lines(),
        triangle_grid(),
        text_banner(),
    ]
}

fn row_of_rectangles() -> Pattern {
    let masks = (0..5)
        .map(|i| {
            ShapeMask::new(
                ShapeKind::Rectangle,
                150.0,
                200.0,
                Vec2::new(20.0 + f64::from(i) * 15.0, 50.0),
            )
        })
        .collect();
    Pattern::new("rectangles", "Rectangles", masks)
}

fn center_circle() -> Pattern {
    let masks = vec![ShapeMask::new(
        ShapeKind::Circle,
        400.0,
        400.0,
        Vec2::new(50.0, 50.0),
    )];
    Pattern::new("circles", "Circles", masks)
}

fn squiggly_lines() -> Pattern {
    let masks = (0..3)
        .map(|i| {
            ShapeMask::new(
                ShapeKind::Custom,
                400.0,
                400.0,
                Vec2::new(20.0 + f64::from(i) * 30.0, 50.0),
            )
            .with_path_data(wave_path(f64::from(i)))
        })
        .collect();
    Pattern::new("squiggly-lines", "Squiggly Lines", masks)
}

/// Filled band under a two-segment cubic wave; `i` skews the control points.
fn wave_path(i: f64) -> String {
    let d = i * 20.0;
    format!(
        "M 0,200 C {},{} {},{} 200,200 C {},{} {},{} 400,200 L 400,400 L 0,400 Z",
        Num(50.0 + d),
        Num(150.0 + d),
        Num(100.0 + d),
        Num(250.0 + d),
        Num(300.0 - d),
        Num(150.0 - d),
        Num(350.0 - d),
        Num(250.0 - d),
    )
}

fn triangle_grid() -> Pattern {
    let masks = (0..9u32)
        .map(|i| {
            let row = f64::from(i / 3);
            let col = f64::from(i % 3);
            ShapeMask::new(
                ShapeKind::Triangle,
                150.0,
                150.0,
                Vec2::new(25.0 + col * 25.0, 25.0 + row * 25.0),
            )
            .with_rotation(f64::from(i % 2) * 180.0)
        })
        .collect();
    Pattern::new("triangles", "Triangles", masks)
}

fn text_banner() -> Pattern {
    let style = TextStyle {
        font_size: 120.0,
        ..TextStyle::default()
    };
    let masks = vec![
        ShapeMask::new(ShapeKind::Text, 800.0, 600.0, Vec2::new(20.0, 20.0))
            .with_text("COLLAGE", style),
    ];
    Pattern::new("text", "Text", masks)
}

#[cfg(test)]
#[path = "../../tests/unit/pattern/builtin.rs"]
mod tests;
