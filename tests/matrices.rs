//! Integration tests for the square matrix types: products, determinants and inverses.

use approx::assert_relative_eq;
use linmath::{MathError, Matrix2x2, Matrix3x3, Matrix4x4, Vector2, Vector3, Vector4};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn random_matrix4(rng: &mut StdRng) -> Matrix4x4 {
    Matrix4x4::new(std::array::from_fn(|_| rng.gen_range(-5.0..5.0)))
}

// ---------------------------------------------------------------------------
// Construction and layout
// ---------------------------------------------------------------------------

#[test]
fn identity_is_diagonal_ones() {
    assert_eq!(Matrix2x2::identity().m, [1.0, 0.0, 0.0, 1.0]);
    assert_eq!(
        Matrix3x3::IDENTITY.m,
        [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0]
    );
    for row in 0..4 {
        for col in 0..4 {
            let expected = if row == col { 1.0 } else { 0.0 };
            assert_eq!(Matrix4x4::IDENTITY[(row, col)], expected);
        }
    }
}

#[test]
fn default_is_all_zero() {
    assert_eq!(Matrix4x4::default(), Matrix4x4::splat(0.0));
    assert_eq!(Matrix2x2::default().m, [0.0; 4]);
}

#[test]
fn rows_and_columns_are_row_major() {
    let m = Matrix3x3::new([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
    assert_eq!(m.row(1), Vector3::new(4.0, 5.0, 6.0));
    assert_eq!(m.column(1), Vector3::new(2.0, 5.0, 8.0));
    assert_eq!(m[(2, 0)], 7.0);

    let built = Matrix3x3::from_rows(m.row(0), m.row(1), m.row(2));
    assert_eq!(built, m);
}

#[test]
#[should_panic]
fn row_out_of_range_panics() {
    Matrix4x4::IDENTITY.row(4);
}

#[test]
#[should_panic]
fn column_out_of_range_panics() {
    Matrix2x2::IDENTITY.column(2);
}

#[test]
#[should_panic(expected = "out of range for 4x4 matrix")]
fn element_index_checks_each_axis() {
    let _ = Matrix4x4::IDENTITY[(0, 5)];
}

#[test]
#[should_panic(expected = "out of range for 3x3 matrix")]
fn element_index_mut_checks_each_axis() {
    let mut m = Matrix3x3::IDENTITY;
    m[(3, 0)] = 1.0;
}

#[test]
#[should_panic(expected = "out of range for 2x2 matrix")]
fn element_index_2x2_rejects_wrapped_column() {
    let _ = Matrix2x2::IDENTITY[(0, 2)];
}

#[test]
fn nested_arrays_convert_by_rows() {
    let m = Matrix4x4::from([
        [1.0, 2.0, 3.0, 4.0],
        [5.0, 6.0, 7.0, 8.0],
        [9.0, 10.0, 11.0, 12.0],
        [13.0, 14.0, 15.0, 16.0],
    ]);
    assert_eq!(m.row(1), Vector4::new(5.0, 6.0, 7.0, 8.0));
    let rows: [[f32; 4]; 4] = m.into();
    assert_eq!(rows[3], [13.0, 14.0, 15.0, 16.0]);
}

// ---------------------------------------------------------------------------
// Arithmetic
// ---------------------------------------------------------------------------

#[test]
fn elementwise_and_scalar_operators() {
    let a = Matrix2x2::new([1.0, 2.0, 3.0, 4.0]);
    let b = Matrix2x2::splat(1.0);
    assert_eq!((a + b).m, [2.0, 3.0, 4.0, 5.0]);
    assert_eq!((a - b).m, [0.0, 1.0, 2.0, 3.0]);
    assert_eq!((a + 1.0).m, [2.0, 3.0, 4.0, 5.0]);
    assert_eq!((a - 1.0).m, [0.0, 1.0, 2.0, 3.0]);
    assert_eq!((a * 2.0).m, [2.0, 4.0, 6.0, 8.0]);
    assert_eq!((a / 2.0).m, [0.5, 1.0, 1.5, 2.0]);

    let mut c = a;
    c += b;
    c *= 3.0;
    c -= 6.0;
    c /= 3.0;
    assert_eq!(c.m, [0.0, 1.0, 2.0, 3.0]);
}

#[test]
fn product_is_row_by_column() {
    let a = Matrix2x2::new([1.0, 2.0, 3.0, 4.0]);
    let b = Matrix2x2::new([5.0, 6.0, 7.0, 8.0]);
    assert_eq!(a.multiply(&b).m, [19.0, 22.0, 43.0, 50.0]);
    assert_eq!((b * a).m, [23.0, 34.0, 31.0, 46.0]);
}

#[test]
fn identity_is_neutral_for_products() {
    let mut rng = StdRng::seed_from_u64(3);
    let m = random_matrix4(&mut rng);
    assert_eq!(m * Matrix4x4::IDENTITY, m);
    assert_eq!(Matrix4x4::IDENTITY * m, m);
}

#[test]
fn matrix_times_vector() {
    let m = Matrix2x2::new([0.0, -1.0, 1.0, 0.0]);
    assert_eq!(m * Vector2::new(1.0, 0.0), Vector2::new(0.0, 1.0));

    let shear = Matrix3x3::new([1.0, 2.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0]);
    assert_eq!(
        shear.transform_vector(&Vector3::new(1.0, 1.0, 1.0)),
        Vector3::new(3.0, 1.0, 1.0)
    );
}

#[test]
fn transpose_swaps_rows_and_columns() {
    let m = Matrix4x4::new(std::array::from_fn(|i| i as f32));
    let t = m.transpose();
    for i in 0..4 {
        assert_eq!(t.row(i), m.column(i));
    }
    assert_eq!(t.transpose(), m);
}

// ---------------------------------------------------------------------------
// Determinants
// ---------------------------------------------------------------------------

#[test]
fn determinant_of_identity_is_one() {
    assert_eq!(Matrix2x2::IDENTITY.determinant(), 1.0);
    assert_eq!(Matrix3x3::IDENTITY.determinant(), 1.0);
    assert_eq!(Matrix4x4::IDENTITY.determinant(), 1.0);
}

#[test]
fn determinants_of_known_matrices() {
    assert_eq!(Matrix2x2::new([1.0, 2.0, 3.0, 4.0]).determinant(), -2.0);
    assert_eq!(
        Matrix3x3::new([2.0, 0.0, 1.0, 1.0, 3.0, 2.0, 1.0, 1.0, 2.0]).determinant(),
        6.0
    );
    let m = Matrix4x4::new([
        1.0, 0.0, 2.0, -1.0, //
        3.0, 0.0, 0.0, 5.0, //
        2.0, 1.0, 4.0, -3.0, //
        1.0, 0.0, 5.0, 0.0,
    ]);
    assert_eq!(m.determinant(), 30.0);
}

#[test]
fn determinant_of_transpose_matches() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..50 {
        let m = random_matrix4(&mut rng);
        assert_relative_eq!(
            m.determinant(),
            m.transpose().determinant(),
            epsilon = 1e-2,
            max_relative = 1e-4
        );
    }
}

// ---------------------------------------------------------------------------
// Inverses
// ---------------------------------------------------------------------------

#[test]
fn diagonal_inverses() {
    let m3 = Matrix3x3::new([2.0, 0.0, 0.0, 0.0, 4.0, 0.0, 0.0, 0.0, 8.0]);
    assert_eq!(
        m3.try_inverse(),
        Ok(Matrix3x3::new([0.5, 0.0, 0.0, 0.0, 0.25, 0.0, 0.0, 0.0, 0.125]))
    );

    let m4 = Matrix4x4::new([
        2.0, 0.0, 0.0, 0.0, //
        0.0, 3.0, 0.0, 0.0, //
        0.0, 0.0, 4.0, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    ]);
    let expected = Matrix4x4::new([
        0.5,
        0.0,
        0.0,
        0.0,
        0.0,
        1.0 / 3.0,
        0.0,
        0.0,
        0.0,
        0.0,
        0.25,
        0.0,
        0.0,
        0.0,
        0.0,
        1.0,
    ]);
    let mut inverse = Matrix4x4::default();
    assert!(m4.get_inverse(&mut inverse));
    assert_relative_eq!(inverse, expected);
}

#[test]
fn adjoint_of_2x2_swaps_diagonal() {
    let m = Matrix2x2::new([1.0, 2.0, 3.0, 4.0]);
    assert_eq!(m.adjoint().m, [4.0, -2.0, -3.0, 1.0]);
    assert_relative_eq!(
        m.try_inverse().unwrap_or_default(),
        Matrix2x2::new([-2.0, 1.0, 1.5, -0.5])
    );
}

#[test]
fn product_with_inverse_is_identity() {
    let mut rng = StdRng::seed_from_u64(2024);
    let mut checked = 0;
    while checked < 100 {
        let m = random_matrix4(&mut rng);
        if m.determinant().abs() < 10.0 {
            continue;
        }
        let inverse = m.try_inverse().expect("determinant checked above");
        assert_relative_eq!(m * inverse, Matrix4x4::IDENTITY, epsilon = 1e-3);
        assert_relative_eq!(inverse * m, Matrix4x4::IDENTITY, epsilon = 1e-3);
        checked += 1;
    }
}

#[test]
fn singular_inverse_leaves_destination_untouched() {
    init_logger();
    let sentinel = Matrix4x4::splat(7.0);
    let mut out = sentinel;
    assert!(!Matrix4x4::splat(0.0).get_inverse(&mut out));
    assert_eq!(out, sentinel);

    let mut out3 = Matrix3x3::IDENTITY;
    let repeated_rows = Matrix3x3::new([1.0, 2.0, 3.0, 1.0, 2.0, 3.0, 0.0, 0.0, 1.0]);
    assert!(!repeated_rows.get_inverse(&mut out3));
    assert_eq!(out3, Matrix3x3::IDENTITY);
}

#[test]
fn singular_try_inverse_reports_dimension() {
    init_logger();
    let err = Matrix2x2::new([1.0, 2.0, 2.0, 4.0]).try_inverse().unwrap_err();
    assert_eq!(err, MathError::SingularMatrix(2));
    assert!(err.to_string().contains("2x2"));
    assert_eq!(
        Matrix4x4::splat(1.0).try_inverse(),
        Err(MathError::SingularMatrix(4))
    );
}

#[test]
fn invert_in_place() {
    let mut m = Matrix3x3::new([2.0, 0.0, 0.0, 0.0, 4.0, 0.0, 0.0, 0.0, 8.0]);
    assert!(m.invert());
    assert!(m.invert());
    assert_eq!(m, Matrix3x3::new([2.0, 0.0, 0.0, 0.0, 4.0, 0.0, 0.0, 0.0, 8.0]));

    let mut singular = Matrix2x2::splat(3.0);
    assert!(!singular.invert());
    assert_eq!(singular, Matrix2x2::splat(3.0));
}
