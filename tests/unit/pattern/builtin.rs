use super::*;
use crate::foundation::core::Size;
use crate::pattern::model::Transform;

#[test]
fn builtin_ids_are_stable_and_unique() {
    let ids: Vec<String> = builtin_patterns().into_iter().map(|p| p.id).collect();
    assert_eq!(
        ids,
        ["rectangles", "circles", "squiggly-lines", "triangles", "text"]
    );
}

#[test]
fn every_builtin_carries_identity_global_transform() {
    for p in builtin_patterns() {
        assert_eq!(p.global_transform, Some(Transform::IDENTITY), "{}", p.id);
    }
}

#[test]
fn rectangle_row_layout() {
    let p = &builtin_patterns()[0];
    assert_eq!(p.shape_masks.len(), 5);
    let xs: Vec<f64> = p.shape_masks.iter().map(|m| m.position.x).collect();
    assert_eq!(xs, [20.0, 35.0, 50.0, 65.0, 80.0]);
    assert!(
        p.shape_masks
            .iter()
            .all(|m| m.dimensions == Size::new(150.0, 200.0) && m.position.y == 50.0)
    );
}

#[test]
fn squiggly_paths_skew_per_index() {
    let p = &builtin_patterns()[2];
    assert_eq!(
        p.shape_masks[0].path_data.as_deref(),
        Some("M 0,200 C 50,150 100,250 200,200 C 300,150 350,250 400,200 L 400,400 L 0,400 Z")
    );
    assert_eq!(
        p.shape_masks[2].path_data.as_deref(),
        Some("M 0,200 C 90,190 140,290 200,200 C 260,110 310,210 400,200 L 400,400 L 0,400 Z")
    );
}

#[test]
fn triangle_grid_alternates_rotation() {
    let p = &builtin_patterns()[3];
    assert_eq!(p.shape_masks.len(), 9);
    assert_eq!(p.shape_masks[4].position, Vec2::new(50.0, 50.0));
    assert_eq!(p.shape_masks[8].position, Vec2::new(75.0, 75.0));
    let rots: Vec<f64> = p.shape_masks.iter().map(|m| m.rotation).collect();
    assert_eq!(rots, [0.0, 180.0, 0.0, 180.0, 0.0, 180.0, 0.0, 180.0, 0.0]);
}

#[test]
fn text_banner_reads_collage() {
    let p = &builtin_patterns()[4];
    let m = &p.shape_masks[0];
    assert_eq!(m.kind, ShapeKind::Text);
    assert_eq!(m.text_content.as_deref(), Some("COLLAGE"));
    assert_eq!(m.text_style.as_ref().unwrap().font_size, 120.0);
}
