use super::*;

#[test]
fn integral_values_print_without_fraction() {
    assert_eq!(Num(150.0).to_string(), "150");
    assert_eq!(Num(-35.0).to_string(), "-35");
    assert_eq!(Num(20.5).to_string(), "20.5");
}

#[test]
fn negative_zero_prints_as_zero() {
    assert_eq!(Num(-0.0).to_string(), "0");
    assert_eq!(Num(0.0).to_string(), "0");
}

#[test]
fn non_finite_values_are_spelled_out() {
    assert_eq!(Num(f64::INFINITY).to_string(), "Infinity");
    assert_eq!(Num(f64::NEG_INFINITY).to_string(), "-Infinity");
    assert_eq!(Num(f64::NAN).to_string(), "NaN");
}

#[test]
fn ceil_px_rejects_degenerate_extents() {
    assert_eq!(ceil_px(0.0), None);
    assert_eq!(ceil_px(-3.0), None);
    assert_eq!(ceil_px(f64::NAN), None);
    assert_eq!(ceil_px(0.2), Some(1));
    assert_eq!(ceil_px(150.0), Some(150));
    assert_eq!(ceil_px(150.01), Some(151));
}
