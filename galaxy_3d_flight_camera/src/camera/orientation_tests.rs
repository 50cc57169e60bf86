use glam::Vec3;
use super::*;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}

fn approx_vec(a: Vec3, b: Vec3) -> bool {
    (a - b).length() < 1e-5
}

// ============================================================================
// wrap_angle
// ============================================================================

#[test]
fn test_wrap_angle_in_range_unchanged() {
    for value in [0.0, 0.5, std::f32::consts::PI, 6.0] {
        assert_eq!(wrap_angle(value), value);
    }
}

#[test]
fn test_wrap_angle_above_one_turn() {
    let value = TWO_PI + 0.25;
    assert!(approx_eq(wrap_angle(value), 0.25));
}

#[test]
fn test_wrap_angle_negative() {
    let value = -0.25;
    let wrapped = wrap_angle(value);
    assert!(approx_eq(wrapped, TWO_PI - 0.25));
    assert!(is_normalized(wrapped));
}

#[test]
fn test_wrap_angle_one_turn_out_of_range() {
    // Just under a full turn out on either side ends up back in range
    let above = wrap_angle(2.0 * TWO_PI - 0.5);
    assert!(approx_eq(above, TWO_PI - 0.5));
    assert!(is_normalized(above));

    let below = wrap_angle(-TWO_PI + 0.5);
    assert!(approx_eq(below, 0.5));
    assert!(is_normalized(below));
}

#[test]
fn test_wrap_angle_multi_turn_not_fully_normalized() {
    // Single-step correction, not a modulo
    let above = wrap_angle(3.0 * TWO_PI);
    assert!(approx_eq(above, 2.0 * TWO_PI));
    assert!(!is_normalized(above));

    let below = wrap_angle(-2.5 * TWO_PI);
    assert!(approx_eq(below, -1.5 * TWO_PI));
    assert!(!is_normalized(below));
}

#[test]
fn test_wrap_angle_exactly_two_pi_is_kept() {
    // Strict `>` comparison: a full turn is not corrected
    assert_eq!(wrap_angle(TWO_PI), TWO_PI);
    assert!(!is_normalized(TWO_PI));
}

// ============================================================================
// Orientation setters
// ============================================================================

#[test]
fn test_orientation_default_is_zero() {
    let orientation = Orientation::default();
    assert_eq!(orientation.pitch(), 0.0);
    assert_eq!(orientation.yaw(), 0.0);
    assert_eq!(orientation.roll(), 0.0);
}

#[test]
fn test_orientation_setters_wrap() {
    let mut orientation = Orientation::default();

    orientation.set_pitch(-1.0);
    orientation.set_yaw(TWO_PI + 1.0);
    orientation.set_roll(2.0);

    assert!(approx_eq(orientation.pitch(), TWO_PI - 1.0));
    assert!(approx_eq(orientation.yaw(), 1.0));
    assert_eq!(orientation.roll(), 2.0);
}

#[test]
fn test_orientation_new_wraps() {
    let orientation = Orientation::new(-0.5, 7.0, 1.0);
    assert!(approx_eq(orientation.pitch(), TWO_PI - 0.5));
    assert!(approx_eq(orientation.yaw(), 7.0 - TWO_PI));
    assert_eq!(orientation.roll(), 1.0);
}

#[test]
fn test_orientation_reset() {
    let mut orientation = Orientation::new(1.0, 2.0, 3.0);
    orientation.reset();
    assert_eq!(orientation, Orientation::default());
}

// ============================================================================
// rotation_matrix
// ============================================================================

#[test]
fn test_rotation_matrix_identity_at_zero() {
    let orientation = Orientation::default();
    assert!(orientation.rotation_matrix().abs_diff_eq(glam::Mat4::IDENTITY, 1e-6));
}

#[test]
fn test_rotation_matrix_yaw_quarter_turn_turns_forward_left() {
    let orientation = Orientation::new(0.0, std::f32::consts::FRAC_PI_2, 0.0);
    let forward = orientation.rotation_matrix().transform_vector3(Vec3::NEG_Z);
    assert!(approx_vec(forward, Vec3::NEG_X));
}

#[test]
fn test_rotation_matrix_pitch_quarter_turn_looks_up() {
    let orientation = Orientation::new(std::f32::consts::FRAC_PI_2, 0.0, 0.0);
    let forward = orientation.rotation_matrix().transform_vector3(Vec3::NEG_Z);
    assert!(approx_vec(forward, Vec3::Y));
}

#[test]
fn test_rotation_matrix_roll_keeps_forward() {
    let orientation = Orientation::new(0.0, 0.0, std::f32::consts::FRAC_PI_2);
    let rotation = orientation.rotation_matrix();
    assert!(approx_vec(rotation.transform_vector3(Vec3::NEG_Z), Vec3::NEG_Z));
    // Up rolls toward -X
    assert!(approx_vec(rotation.transform_vector3(Vec3::Y), Vec3::NEG_X));
}
