use rigid_sim::math::{self, Matrix4, Quaternion, Vector3, Vector4};
use std::f32::consts::PI;
use approx::assert_relative_eq;
use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;

fn random_vector(rng: &mut StdRng) -> Vector3 {
    Vector3::new(
        rng.gen_range(-10.0f32..10.0),
        rng.gen_range(-10.0f32..10.0),
        rng.gen_range(-10.0f32..10.0),
    )
}

fn random_rotation(rng: &mut StdRng) -> Quaternion {
    let axis = random_vector(rng).normalize();
    Quaternion::from_axis_angle(axis, rng.gen_range(-PI..PI)).normalize()
}

#[test]
fn test_vector3_operations() {
    let v1 = Vector3::new(1.0, 2.0, 3.0);
    let v2 = Vector3::new(4.0, 5.0, 6.0);

    // Addition
    let sum = v1 + v2;
    assert_eq!(sum, Vector3::new(5.0, 7.0, 9.0));

    // Subtraction
    let diff = v2 - v1;
    assert_eq!(diff, Vector3::new(3.0, 3.0, 3.0));

    // Scalar multiplication
    assert_eq!(v1 * 2.0, Vector3::new(2.0, 4.0, 6.0));
    assert_eq!(2.0 * v1, Vector3::new(2.0, 4.0, 6.0));

    // Dot product
    assert_eq!(v1.dot(&v2), 32.0);

    // Cross product
    assert_eq!(v1.cross(&v2), Vector3::new(-3.0, 6.0, -3.0));

    // Length and distance
    assert_relative_eq!(v1.length(), 14.0f32.sqrt());
    assert_eq!(v1.length_squared(), 14.0);
    assert_eq!(v1.distance_squared(&v2), 27.0);
    assert_relative_eq!(v1.distance(&v2), 27.0f32.sqrt());
}

#[test]
fn test_vector3_in_place_helpers() {
    let mut v = Vector3::new(1.0, 1.0, 1.0);

    v.add_scaled(Vector3::new(1.0, 2.0, 3.0), 2.0);
    assert_eq!(v, Vector3::new(3.0, 5.0, 7.0));

    v.scale(0.5);
    assert_eq!(v, Vector3::new(1.5, 2.5, 3.5));

    v.clear();
    assert_eq!(v, Vector3::zero());
}

#[test]
fn test_array_and_nalgebra_conversions() {
    let v = Vector3::from([1.0, 2.0, 3.0]);
    let array: [f32; 3] = v.into();
    assert_eq!(array, [1.0, 2.0, 3.0]);

    let na = v.to_nalgebra();
    assert_eq!(Vector3::from_nalgebra(&na), v);

    let v4 = Vector4::from([1.0, 2.0, 3.0, 4.0]);
    assert_eq!(Vector4::from_nalgebra(&v4.to_nalgebra()), v4);
    assert_eq!(v4.xyz(), v);
}

#[test]
fn test_normalize_leaves_zero_vector_alone() {
    // A zero vector must not turn into NaNs
    assert_eq!(Vector3::zero().normalize(), Vector3::zero());
    assert_eq!(Vector4::zero().normalize(), Vector4::zero());
    assert_eq!(Quaternion::new(0.0, 0.0, 0.0, 0.0).normalize(), Quaternion::new(0.0, 0.0, 0.0, 0.0));

    let mut v = Vector3::zero();
    v.normalize_mut();
    assert!(v.is_finite());
}

#[test]
fn test_normalize_gives_unit_length_and_is_idempotent() {
    let mut rng = StdRng::seed_from_u64(11);

    for _ in 0..200 {
        let v = random_vector(&mut rng);
        if v.length() < 1e-3 {
            continue;
        }

        let unit = v.normalize();
        assert_relative_eq!(unit.length(), 1.0, epsilon = 1e-5);
        assert_relative_eq!(unit.normalize(), unit, epsilon = 1e-6);
    }
}

#[test]
fn test_vector4_operations() {
    let a = Vector4::new(1.0, 2.0, 3.0, 4.0);
    let b = Vector4::new(4.0, 3.0, 2.0, 1.0);

    assert_eq!(a.dot(&b), 20.0);
    assert_eq!(a.length_squared(), 30.0);
    assert_eq!(a.distance_squared(&b), 20.0);

    let mut c = a;
    c.add_scaled(b, -1.0);
    assert_eq!(c, Vector4::new(-3.0, -1.0, 1.0, 3.0));

    let unit = Vector4::new(0.0, 3.0, 0.0, 4.0).normalize();
    assert_relative_eq!(unit.y, 0.6, epsilon = 1e-6);
    assert_relative_eq!(unit.w, 0.8, epsilon = 1e-6);
}

#[test]
fn test_cross_and_dot_symmetry() {
    let mut rng = StdRng::seed_from_u64(3);

    for _ in 0..200 {
        let a = random_vector(&mut rng);
        let b = random_vector(&mut rng);

        // Swapping operands negates the cross product exactly
        assert_eq!(a.cross(&b), -b.cross(&a));
        assert_eq!(a.dot(&b), b.dot(&a));

        // The cross product is perpendicular to both inputs
        let cross = a.cross(&b);
        assert_relative_eq!(cross.dot(&a), 0.0, epsilon = 1e-2);
        assert_relative_eq!(cross.dot(&b), 0.0, epsilon = 1e-2);
    }
}

#[test]
fn test_axis_rotations_are_right_handed() {
    let mut x = Vector3::unit_x();
    x.rotate_z(PI / 2.0);
    assert_relative_eq!(x, Vector3::unit_y(), epsilon = 1e-6);

    let mut y = Vector3::unit_y();
    y.rotate_x(PI / 2.0);
    assert_relative_eq!(y, Vector3::unit_z(), epsilon = 1e-6);

    let mut z = Vector3::unit_z();
    z.rotate_y(PI / 2.0);
    assert_relative_eq!(z, Vector3::unit_x(), epsilon = 1e-6);
}

#[test]
fn test_rotation_round_trips() {
    let mut rng = StdRng::seed_from_u64(5);

    for _ in 0..100 {
        let original = random_vector(&mut rng);
        let angle = rng.gen_range(-PI..PI);

        let mut v = original;
        v.rotate_x(angle);
        v.rotate_x(-angle);
        assert_relative_eq!(v, original, epsilon = 1e-4);

        v.rotate_y(angle);
        v.rotate_y(-angle);
        assert_relative_eq!(v, original, epsilon = 1e-4);

        v.rotate_z(angle);
        v.rotate_z(-angle);
        assert_relative_eq!(v, original, epsilon = 1e-4);

        // Rotations preserve length
        v.rotate(angle, angle * 0.5, -angle);
        assert_relative_eq!(v.length(), original.length(), epsilon = 1e-4);
    }
}

#[test]
fn test_euler_rotation_applies_z_then_y_then_x() {
    let (x, y, z) = (0.3, -1.1, 2.0);
    let source = Vector3::new(1.0, 2.0, 3.0);

    let mut expected = source;
    expected.rotate_z(z);
    expected.rotate_y(y);
    expected.rotate_x(x);

    let mut rotated = source;
    rotated.rotate(x, y, z);
    assert_eq!(rotated, expected);

    // The quaternion and the matrix built from the same angles agree
    let q = Quaternion::from_euler(x, y, z);
    assert_relative_eq!(q.rotate_vector(source), expected, epsilon = 1e-5);
    assert_relative_eq!(Matrix4::from_euler(x, y, z).multiply_direction(source), expected, epsilon = 1e-5);
}

#[test]
fn test_portion_in_direction() {
    let original = Vector3::new(1.0, 2.0, 4.0);

    let along_y = original.portion_in_direction(&Vector3::new(0.0, 1.0, 0.0));
    assert_relative_eq!(along_y, Vector3::new(0.0, 2.0, 0.0), epsilon = 1e-5);

    // The magnitude of the direction is irrelevant
    let scaled = original.portion_in_direction(&Vector3::new(0.0, 7.0, 0.0));
    assert_relative_eq!(scaled, along_y, epsilon = 1e-6);

    // Opposite directions give the same projection
    let opposite = original.portion_in_direction(&Vector3::new(0.0, -1.0, 0.0));
    assert_relative_eq!(opposite, along_y, epsilon = 1e-5);

    // A zero direction projects to nothing
    assert_eq!(original.portion_in_direction(&Vector3::zero()), Vector3::zero());

    let rest = original.portion_perpendicular(&Vector3::unit_y());
    assert_relative_eq!(rest, Vector3::new(1.0, 0.0, 4.0), epsilon = 1e-5);
}

#[test]
fn test_quaternion_operations() {
    // 90 degrees about y takes +x to -z
    let q = Quaternion::from_axis_angle(Vector3::unit_y(), PI / 2.0);
    assert_relative_eq!(q.length(), 1.0, epsilon = 1e-6);

    let rotated = q.rotate_vector(Vector3::unit_x());
    assert_relative_eq!(rotated, Vector3::new(0.0, 0.0, -1.0), epsilon = 1e-6);

    // Conjugate negates the vector part
    let conjugate = q.conjugate();
    assert_eq!(conjugate.w, q.w);
    assert_eq!(conjugate.x, -q.x);
    assert_eq!(conjugate.y, -q.y);
    assert_eq!(conjugate.z, -q.z);

    // The axis is not normalised for the caller
    let long_axis = Quaternion::from_axis_angle(Vector3::new(0.0, 2.0, 0.0), PI / 2.0);
    assert_relative_eq!(long_axis.y, 2.0 * q.y, epsilon = 1e-6);
}

#[test]
fn test_hamilton_product() {
    let i = Quaternion::new(1.0, 0.0, 0.0, 0.0);
    let j = Quaternion::new(0.0, 1.0, 0.0, 0.0);
    let k = Quaternion::new(0.0, 0.0, 1.0, 0.0);

    assert_eq!(i * j, k);
    assert_eq!(j * i, Quaternion::new(0.0, 0.0, -1.0, 0.0));
    assert_eq!(i * i, Quaternion::new(0.0, 0.0, 0.0, -1.0));
    assert_eq!(Quaternion::identity() * k, k);
}

#[test]
fn test_quaternion_inverse_of_non_unit_quaternion() {
    let q = Quaternion::new(1.0, 2.0, -1.0, 3.0);
    let product = q * q.inverse();

    assert_relative_eq!(product.x, 0.0, epsilon = 1e-6);
    assert_relative_eq!(product.y, 0.0, epsilon = 1e-6);
    assert_relative_eq!(product.z, 0.0, epsilon = 1e-6);
    assert_relative_eq!(product.w, 1.0, epsilon = 1e-6);

    // For a unit quaternion the inverse is the conjugate
    let unit = q.normalize();
    let inverse = unit.inverse();
    let conjugate = unit.conjugate();
    assert_relative_eq!(inverse.x, conjugate.x, epsilon = 1e-6);
    assert_relative_eq!(inverse.w, conjugate.w, epsilon = 1e-6);
}

/// `q·(1/|q|²)` without negating the vector part
fn scaled_by_inverse_length(q: Quaternion) -> Quaternion {
    (Vector4::from(q) * (1.0 / q.length_squared())).into()
}

#[test]
fn test_scaled_quaternion_is_not_the_inverse() {
    let q = Quaternion::new(1.0, 2.0, -1.0, 3.0);
    let scaled = scaled_by_inverse_length(q);
    let inverse = q.inverse();

    // Same magnitude per component, opposite vector part
    assert_relative_eq!(scaled.w, inverse.w, epsilon = 1e-6);
    assert_relative_eq!(scaled.vector_part(), -inverse.vector_part(), epsilon = 1e-6);

    // Only the true inverse undoes q
    let undone = q * scaled;
    assert!((undone.w - 1.0).abs() > 0.1);

    // A unit quaternion is left unchanged by the scaling, while its inverse is its conjugate
    let unit = q.normalize();
    assert_relative_eq!(Vector4::from(scaled_by_inverse_length(unit)), Vector4::from(unit), epsilon = 1e-6);
    assert_relative_eq!(Vector4::from(unit.inverse()), Vector4::from(unit.conjugate()), epsilon = 1e-6);

    // With no vector part the two readings coincide
    let scalar = Quaternion::new(0.0, 0.0, 0.0, 2.0);
    assert_relative_eq!(Vector4::from(scaled_by_inverse_length(scalar)), Vector4::from(scalar.inverse()), epsilon = 1e-6);
}

#[test]
fn test_fast_and_pure_quaternion_rotation_agree() {
    let mut rng = StdRng::seed_from_u64(17);

    for _ in 0..100 {
        let q = random_rotation(&mut rng);
        let v = random_vector(&mut rng);

        let fast = q.rotate_vector(v);
        assert_relative_eq!(fast, q.rotate_vector_pure(v), epsilon = 1e-4);

        // Undoing the rotation returns the original vector
        assert_relative_eq!(q.inverse().rotate_vector(fast), v, epsilon = 1e-4);
    }
}

#[test]
fn test_matrix_operations() {
    let translation = Matrix4::from_translation(Vector3::new(1.0, 2.0, 3.0));
    assert_eq!(translation.multiply_point(Vector3::zero()), Vector3::new(1.0, 2.0, 3.0));
    assert_eq!(translation.multiply_direction(Vector3::unit_x()), Vector3::unit_x());
    assert_eq!(translation.get_translation(), Vector3::new(1.0, 2.0, 3.0));

    let identity = Matrix4::identity();
    assert_eq!(identity * translation, translation);
    assert_eq!(identity.transpose(), identity);
    assert_eq!(translation.transpose().transpose(), translation);
    assert_eq!(translation.transpose().data[3], [1.0, 2.0, 3.0, 1.0]);

    let scale = Matrix4::from_scale(Vector3::new(2.0, 3.0, 4.0));
    assert_eq!(scale.multiply_point(Vector3::one()), Vector3::new(2.0, 3.0, 4.0));

    // Translation after rotation
    let model = translation * Matrix4::from_rotation_z(PI / 2.0);
    assert_relative_eq!(model.multiply_point(Vector3::unit_x()), Vector3::new(1.0, 3.0, 3.0), epsilon = 1e-6);

    assert_eq!(Matrix4::from_nalgebra(&model.to_nalgebra()), model);
}

#[test]
fn test_matrix_from_quaternion_matches_quaternion_rotation() {
    let mut rng = StdRng::seed_from_u64(23);

    for _ in 0..50 {
        let q = random_rotation(&mut rng);
        let v = random_vector(&mut rng);

        let by_matrix = Matrix4::from_quaternion(&q).multiply_direction(v);
        assert_relative_eq!(by_matrix, q.rotate_vector(v), epsilon = 1e-4);
    }
}

#[test]
fn test_scalar_helpers() {
    assert_eq!(math::clamp(5.0, 0.0, 1.0), 1.0);
    assert_eq!(math::clamp(-5.0, 0.0, 1.0), 0.0);
    assert_eq!(math::clamp(0.5, 0.0, 1.0), 0.5);
    // A reversed range does not panic
    assert_eq!(math::clamp(0.5, 1.0, 0.0), 1.0);

    assert_relative_eq!(math::modulo(7.5, 2.0), 1.5);
    assert_relative_eq!(math::modulo(-7.5, 2.0), -1.5);

    assert!(math::approx_eq(1.0, 1.0 + 1e-7));
    assert!(!math::approx_eq(1.0, 1.001));
    assert!(math::approx_zero(1e-7));

    assert_relative_eq!(math::to_radians(180.0), PI, epsilon = 1e-6);
    assert_relative_eq!(math::to_degrees(PI / 2.0), 90.0, epsilon = 1e-4);
    assert_relative_eq!(math::lerp(2.0, 4.0, 0.25), 2.5);
}
