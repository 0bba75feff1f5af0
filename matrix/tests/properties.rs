/*
MIT License
Copyright (c) 2021 Germán Molina
Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:
The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.
THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
*/

use matrix::{approx_eq, Float, LinalgError, Matrix, MatrixEvent, SystemState, Vector};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_vector(rng: &mut StdRng, n: usize) -> Vector {
    let data: Vec<Float> = (0..n).map(|_| rng.gen_range(-10.0..10.0)).collect();
    Vector::new(data).unwrap()
}

fn random_matrix(rng: &mut StdRng, nrows: usize, ncols: usize) -> Matrix {
    Matrix::new((0..nrows).map(|_| random_vector(rng, ncols)).collect()).unwrap()
}

fn m(rows: &[&[Float]]) -> Matrix {
    Matrix::new(
        rows.iter()
            .map(|r| Vector::from_slice(r).unwrap())
            .collect(),
    )
    .unwrap()
}

#[test]
fn additive_inverse_round_trip() {
    let mut rng = StdRng::seed_from_u64(1);
    for n in 1..12 {
        let a = random_vector(&mut rng, n);
        let b = random_vector(&mut rng, n);
        let back = a.add(&b).unwrap().add(&b.scale(-1.)).unwrap();
        assert_eq!(back, a);
    }
}

#[test]
fn determinant_of_transpose() {
    let mut rng = StdRng::seed_from_u64(2);
    for n in 1..7 {
        let a = random_matrix(&mut rng, n, n);
        let det = a.determinant().unwrap();
        let det_t = a.transpose().determinant().unwrap();
        // Values grow quickly with n, so compare relative to the size
        assert!(
            (det - det_t).abs() <= 1e-9 * det.abs().max(1.),
            "{} vs {}",
            det,
            det_t
        );
    }
}

#[test]
fn determinant_of_product() {
    let mut rng = StdRng::seed_from_u64(3);
    for n in 1..5 {
        let a = random_matrix(&mut rng, n, n);
        let b = random_matrix(&mut rng, n, n);
        let det_ab = a.dot_matrix(&b).unwrap().determinant().unwrap();
        let expected = a.determinant().unwrap() * b.determinant().unwrap();
        assert!((det_ab - expected).abs() <= 1e-8 * expected.abs().max(1.));
    }
}

#[test]
fn product_shape() {
    let mut rng = StdRng::seed_from_u64(4);
    for _ in 0..20 {
        let (rows, inner, cols) = (
            rng.gen_range(1..6),
            rng.gen_range(1..6),
            rng.gen_range(1..6),
        );
        let a = random_matrix(&mut rng, rows, inner);
        let b = random_matrix(&mut rng, inner, cols);
        assert_eq!(a.dot_matrix(&b).unwrap().size(), (rows, cols));

        if inner != cols {
            assert!(matches!(
                b.dot_matrix(&b),
                Err(LinalgError::MatrixArithmetic(_))
            ));
        }
    }
}

#[test]
fn identity_is_neutral() {
    let mut rng = StdRng::seed_from_u64(5);
    let a = random_matrix(&mut rng, 3, 4);
    assert_eq!(Matrix::identity(3).unwrap().dot_matrix(&a).unwrap(), a);
    assert_eq!(a.dot_matrix(&Matrix::identity(4).unwrap()).unwrap(), a);
}

#[test]
fn double_transpose() {
    let mut rng = StdRng::seed_from_u64(6);
    let a = random_matrix(&mut rng, 2, 5);
    assert_eq!(a.transpose().transpose(), a);
}

#[test]
fn tolerant_equality() {
    let a = Vector::new(vec![0., 0., 1.0010]).unwrap();
    assert_eq!(a, Vector::new(vec![0., 0., 1.0011]).unwrap());
    assert_ne!(a, Vector::new(vec![0., 0., 1.0012]).unwrap());
    assert!(approx_eq(1.0010, 1.0011));
}

#[test]
fn reduced_random_systems_are_consistent() {
    let mut rng = StdRng::seed_from_u64(7);
    for n in 2..6 {
        // Diagonally dominant, so no pivot becomes zero
        let mut a = random_matrix(&mut rng, n, n + 1);
        for i in 0..n {
            a.set(i, i, 100. + i as Float).unwrap();
        }
        let mut events: Vec<MatrixEvent> = Vec::new();
        assert_eq!(a.system_state_with(&mut events).unwrap(), SystemState::Consistent);
        assert!(!events.is_empty());

        for (r, row) in a.iter().enumerate() {
            for c in 0..n {
                let expected = if r == c { 1. } else { 0. };
                assert!(approx_eq(row[c], expected));
            }
        }
    }
}

#[test]
fn documented_examples() {
    let a = m(&[&[-4., -3., 3.], &[0., 2., -2.], &[1., 4., -1.]]);
    assert_eq!(a.determinant().unwrap(), -24.);

    let mut a = m(&[&[1., 0., 2.], &[1., 1., 2.]]);
    a.reduce_to_rref();
    assert_eq!(a, m(&[&[1., 0., 2.], &[0., 1., 0.]]));

    let cases: [(&[Float], SystemState); 3] = [
        (&[0., 0., 0., 10.], SystemState::Inconsistent),
        (&[0., 0., 0., 0.], SystemState::Dependent),
        (&[0., 0., 1., 0.], SystemState::Consistent),
    ];
    for (last, expected) in cases {
        let mut a = m(&[&[1., 0., 0., 2.], &[0., 1., 0., 3.], last]);
        assert_eq!(a.system_state().unwrap(), expected);
    }
}

#[test]
fn construction_errors() {
    let err = Matrix::new(vec![]).unwrap_err();
    assert_eq!(err.to_string(), "You must pass in at least one vector.");

    let err = Matrix::new(vec![
        Vector::new(vec![1.]).unwrap(),
        Vector::new(vec![1., 2.]).unwrap(),
    ])
    .unwrap_err();
    assert_eq!(err.to_string(), "All the vectors must be the same size.");

    let err = Matrix::from_optional_rows(Some(vec![
        None,
        Some(Vector::new(vec![1., 2.]).unwrap()),
    ]))
    .unwrap_err();
    assert_eq!(err.to_string(), "No vector can be null.");

    assert_eq!(
        Matrix::from_optional_rows(None).unwrap_err(),
        LinalgError::NullArgument("rows")
    );
}
