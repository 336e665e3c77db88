use super::*;

#[test]
fn canvas_rejects_zero_dimensions() {
    assert!(Canvas::new(0, 10).is_err());
    assert!(Canvas::new(10, 0).is_err());
    let c = Canvas::new(8, 4).unwrap();
    assert_eq!(c.area(), 32);
    assert_eq!(c.size(), Size::new(8.0, 4.0));
}

#[test]
fn kurbo_vectors_serialize_as_xy_objects() {
    let v: Vec2 = serde_json::from_str(r#"{"x":20,"y":50}"#).unwrap();
    assert_eq!(v, Vec2::new(20.0, 50.0));
    let s: Size = serde_json::from_str(r#"{"width":150,"height":200}"#).unwrap();
    assert_eq!(s, Size::new(150.0, 200.0));
}
