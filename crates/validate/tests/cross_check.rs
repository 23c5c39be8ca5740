use bellgrid_core::{DistributionParameters, GridError, NdarrayMath, generate, generate_with};
use bellgrid_validate::{
    AxisStatus, NalgebraMath, Tolerance, compare, cross_check, validate, validate_with,
};

#[test]
fn demo_surface_cross_checks() {
    let result = validate(&DistributionParameters::DEMO).expect("demo parameters are valid");

    assert!(result.success(), "{result}");
    match result.z {
        AxisStatus::Equal => {}
        AxisStatus::Close { max_abs_diff } => assert!(max_abs_diff < 1e-6),
        AxisStatus::Differ { .. } => panic!("z axis differs:\n{result}"),
    }
}

#[test]
fn coordinates_survive_single_precision_exactly() {
    // Quarter steps around a small integer mean are exact in f32.
    let result = cross_check(6.0, 4.0, 0.25).unwrap();

    assert_eq!(result.x, AxisStatus::Equal);
    assert_eq!(result.y, AxisStatus::Equal);
}

#[test]
fn control_grid_is_transposed_before_comparison() {
    let params = DistributionParameters::new(2.0, 1.0, 0.5).unwrap();
    let test = generate(&params).unwrap();
    let control = generate_with(&NalgebraMath, &params).unwrap();

    // Raw control orientation disagrees on the coordinate axes.
    let raw = compare(&test, &control, Tolerance::default());
    assert!(!raw.success());

    let aligned = compare(&test, &control.transposed(), Tolerance::default());
    assert!(aligned.success(), "{aligned}");
}

#[test]
fn zero_tolerance_exposes_single_precision_rounding() {
    let strict = Tolerance::new(0.0, 0.0).unwrap();
    let result = validate_with(&DistributionParameters::DEMO, strict).unwrap();

    assert_eq!(result.x, AxisStatus::Equal);
    assert!(matches!(result.z, AxisStatus::Differ { .. }));
    assert!(!result.success());
}

#[test]
fn same_backend_is_equal() {
    let params = DistributionParameters::new(3.0, -1.0, 0.1).unwrap();
    let a = generate_with(&NdarrayMath, &params).unwrap();
    let b = generate_with(&NdarrayMath, &params).unwrap();

    let result = compare(&a, &b, Tolerance::default());

    assert_eq!(result.x, AxisStatus::Equal);
    assert_eq!(result.y, AxisStatus::Equal);
    assert_eq!(result.z, AxisStatus::Equal);
}

#[test]
fn invalid_parameters_are_rejected() {
    assert!(matches!(
        cross_check(5.0, 0.0, 0.0),
        Err(GridError::InvalidParameter { name: "step", .. })
    ));
    assert!(matches!(
        cross_check(-1.0, 0.0, 0.5),
        Err(GridError::InvalidParameter { name: "domain", .. })
    ));
}
