use super::*;
use crate::pattern::model::TextAlign;

fn rect(x: f64) -> ShapeMask {
    ShapeMask::new(ShapeKind::Rectangle, 150.0, 200.0, Vec2::new(x, 50.0))
}

fn row(n: usize) -> Vec<ShapeMask> {
    (0..n).map(|i| rect(20.0 + 15.0 * i as f64)).collect()
}

#[test]
fn outer_transform_precedence() {
    let over = Transform {
        rotation: 1.0,
        ..Transform::IDENTITY
    };
    let global = Transform {
        rotation: 2.0,
        ..Transform::IDENTITY
    };
    assert_eq!(
        resolve_outer_transform(Some(&over), Some(&global)),
        (over, TransformSource::LayerOverride)
    );
    assert_eq!(
        resolve_outer_transform(None, Some(&global)),
        (global, TransformSource::PatternGlobal)
    );
    assert_eq!(
        resolve_outer_transform(None, None),
        (Transform::IDENTITY, TransformSource::Identity)
    );
}

#[test]
fn scale_multiplies_outer_and_inner() {
    let mask = rect(0.0).with_transform(Transform {
        scale: Vec2::new(0.5, 3.0),
        ..Transform::IDENTITY
    });
    let outer = Transform {
        scale: Vec2::new(2.0, 0.25),
        ..Transform::IDENTITY
    };
    let r = resolve_mask(&mask, 0, 1, &outer, &TextOverrides::default());
    assert_eq!(r.dimensions, Size::new(150.0, 150.0));
}

#[test]
fn identity_on_either_side_leaves_the_other_scale() {
    let scaled = Transform {
        scale: Vec2::new(1.5, 0.5),
        ..Transform::IDENTITY
    };
    let as_outer = resolve_mask(&rect(0.0), 0, 1, &scaled, &TextOverrides::default());
    let as_inner = resolve_mask(
        &rect(0.0).with_transform(scaled),
        0,
        1,
        &Transform::IDENTITY,
        &TextOverrides::default(),
    );
    assert_eq!(as_outer.dimensions, as_inner.dimensions);
    assert_eq!(as_outer.dimensions, Size::new(225.0, 100.0));
}

#[test]
fn spacing_is_ignored_for_single_mask_lists() {
    let outer = Transform {
        spacing: 40.0,
        ..Transform::IDENTITY
    };
    let masks = vec![rect(20.0).with_transform(Transform {
        spacing: 3.0,
        ..Transform::IDENTITY
    })];
    let r = resolve_masks(&masks, &outer, &TextOverrides::default());
    assert_eq!(r[0].position, Vec2::new(20.0, 50.0));
}

#[test]
fn spacing_staggers_x_by_index_on_multi_mask_lists() {
    let outer = Transform {
        spacing: 2.0,
        ..Transform::IDENTITY
    };
    let mut masks = row(3);
    masks[2].transform = Some(Transform {
        spacing: 3.0,
        ..Transform::IDENTITY
    });
    let r = resolve_masks(&masks, &outer, &TextOverrides::default());
    assert_eq!(r[0].position.x, 20.0);
    assert_eq!(r[1].position.x, 35.0 + 2.0);
    assert_eq!(r[2].position.x, 50.0 + 2.0 * 2.0 * 3.0);
    assert!(r.iter().all(|m| m.position.y == 50.0));
}

#[test]
fn positions_and_rotations_accumulate_unclamped() {
    let outer = Transform {
        position: Vec2::new(90.0, -70.0),
        rotation: 300.0,
        ..Transform::IDENTITY
    };
    let mask = rect(50.0).with_rotation(180.0).with_transform(Transform {
        position: Vec2::new(1.0, 2.0),
        rotation: 45.0,
        ..Transform::IDENTITY
    });
    let r = resolve_mask(&mask, 0, 1, &outer, &TextOverrides::default());
    assert_eq!(r.position, Vec2::new(141.0, -18.0));
    assert_eq!(r.rotation, 525.0);
}

#[test]
fn text_prefers_layer_override_then_mask_then_empty() {
    let mask_style = TextStyle {
        font_size: 10.0,
        ..TextStyle::default()
    };
    let mask = ShapeMask::new(ShapeKind::Text, 800.0, 600.0, Vec2::new(0.0, 0.0))
        .with_text("MASK", mask_style.clone());

    let r = resolve_mask(&mask, 0, 1, &Transform::IDENTITY, &TextOverrides::default());
    assert_eq!(r.text_content.as_deref(), Some("MASK"));
    assert_eq!(r.text_style.as_ref(), Some(&mask_style));

    let layer_style = TextStyle {
        text_align: TextAlign::Right,
        ..TextStyle::default()
    };
    let overrides = TextOverrides {
        content: Some("LAYER"),
        style: Some(&layer_style),
    };
    let r = resolve_mask(&mask, 0, 1, &Transform::IDENTITY, &overrides);
    assert_eq!(r.text_content.as_deref(), Some("LAYER"));
    assert_eq!(r.text_style.as_ref(), Some(&layer_style));

    let bare = ShapeMask::new(ShapeKind::Text, 10.0, 10.0, Vec2::new(0.0, 0.0));
    let r = resolve_mask(&bare, 0, 1, &Transform::IDENTITY, &TextOverrides::default());
    assert_eq!(r.text_content.as_deref(), Some(""));
    assert!(r.text_style.is_none());
}

#[test]
fn non_text_masks_ignore_text_overrides() {
    let overrides = TextOverrides {
        content: Some("LAYER"),
        style: None,
    };
    let r = resolve_mask(&rect(0.0), 0, 1, &Transform::IDENTITY, &overrides);
    assert!(r.text_content.is_none());
}

#[test]
fn shape_count_selects_prefix_without_fabrication() {
    let masks = row(5);
    assert_eq!(select_masks(&masks, Some(2)).len(), 2);
    assert_eq!(select_masks(&masks, Some(5)).len(), 5);
    assert_eq!(select_masks(&masks, Some(50)).len(), 5);
    assert_eq!(select_masks(&masks, None).len(), 5);
    assert!(select_masks(&masks, Some(0)).is_empty());
}

#[test]
fn layer_override_replaces_global_transform_entirely() {
    let mut pattern = Pattern::new("p", "P", row(5));
    pattern.global_transform = Some(Transform {
        position: Vec2::new(100.0, 100.0),
        repetitions: 9,
        ..Transform::IDENTITY
    });
    let layer = Layer::new("l").with_pattern("p").with_pattern_transform(Transform {
        shape_count: Some(2),
        repetitions: 3,
        ..Transform::IDENTITY
    });

    let resolved = resolve_pattern(&pattern, Some(&layer));
    assert_eq!(resolved.source, TransformSource::LayerOverride);
    assert_eq!(resolved.repetitions, 3);
    assert_eq!(resolved.masks.len(), 2);
    assert_eq!(resolved.masks[1].position, Vec2::new(35.0 + 1.0, 50.0));

    let resolved = resolve_pattern(&pattern, None);
    assert_eq!(resolved.source, TransformSource::PatternGlobal);
    assert_eq!(resolved.repetitions, 9);
    assert_eq!(resolved.masks[0].position, Vec2::new(120.0, 150.0));
}

#[test]
fn source_index_tracks_mask_identity() {
    let r = resolve_masks(&row(3), &Transform::IDENTITY, &TextOverrides::default());
    let idx: Vec<usize> = r.iter().map(|m| m.source_index).collect();
    assert_eq!(idx, [0, 1, 2]);
    assert!(r.iter().all(|m| m.repetition == 0));
}
