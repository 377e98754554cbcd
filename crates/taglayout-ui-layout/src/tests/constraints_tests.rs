use super::*;

#[test]
fn exact_specs_produce_tight_constraints() {
    let constraints = Constraints::from_specs(MeasureSpec::exactly(80.0), MeasureSpec::exactly(20.0));
    assert_eq!(constraints.min_width, 80.0);
    assert_eq!(constraints.max_width, 80.0);
    assert_eq!(constraints.min_height, 20.0);
    assert_eq!(constraints.max_height, 20.0);
    assert_eq!(constraints.constrain(10.0, 99.0), Size::new(80.0, 20.0));
}

#[test]
fn at_most_specs_produce_loose_constraints() {
    let constraints = Constraints::from_specs(MeasureSpec::at_most(50.0), MeasureSpec::at_most(30.0));
    assert_eq!(constraints.min_width, 0.0);
    assert_eq!(constraints.max_width, 50.0);
    assert_eq!(constraints.constrain(70.0, 12.0), Size::new(50.0, 12.0));
}

#[test]
fn unspecified_axis_is_unbounded() {
    let constraints = Constraints::from_specs(MeasureSpec::Unspecified, MeasureSpec::at_most(10.0));
    assert_eq!(constraints.max_width, f32::INFINITY);
    assert_eq!(constraints.constrain(1_000.0, 4.0), Size::new(1_000.0, 4.0));
}

#[test]
fn raw_negative_and_nan_specs_clamp_to_zero() {
    let constraints = Constraints::from_specs(MeasureSpec::AtMost(-1.0), MeasureSpec::Exactly(f32::NAN));
    assert_eq!(constraints.max_width, 0.0);
    assert_eq!(constraints.min_height, 0.0);
    assert_eq!(constraints.max_height, 0.0);
    assert_eq!(constraints.constrain(56.0, 36.0), Size::new(0.0, 0.0));

    let constraints = Constraints::from_specs(MeasureSpec::Exactly(-5.0), MeasureSpec::Unspecified);
    assert_eq!(constraints.constrain(56.0, 36.0), Size::new(0.0, 36.0));
}
