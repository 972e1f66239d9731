extern crate ndarray;
extern crate ndarray_linalg;

use ndarray::*;
use crate::params::*;
use crate::linalg_utils::*;
use ndarray_rand::RandomExt;
use rand_distr::StandardNormal;

///Initialises logging for tests. Safe to call from every test.
#[cfg(test)]
pub fn init_test_logging() {
    let _ = pretty_env_logger::try_init();
}

///Panics unless `one` and `two` agree to within `ZEROING_THRESH`,
///relative to the size of `two`.
pub fn assert_equal_matrices(one : &Array2<f64>, two : &Array2<f64>) {
    assert_equal_matrices_to_within(one, two, ZEROING_THRESH);
}

pub fn assert_equal_matrices_to_within(one : &Array2<f64>, two : &Array2<f64>, within : f64) {
    assert_eq!(one.dim(), two.dim(), "matrix shapes differ");
    let zero = Array2::zeros(two.dim());
    let scale = frob_dist(two.view(), zero.view()).max(1.0);
    let dist = frob_dist(one.view(), two.view());
    if (dist > within * scale) {
        panic!("matrices differ by {} (allowed {}):\n{}\n{}", dist, within * scale, one, two);
    }
}

///Panics unless `mat` is square with `mat^T mat` equal to the identity.
pub fn assert_orthogonal(mat : &Array2<f64>) {
    let n = mat.shape()[0];
    assert_eq!(n, mat.shape()[1], "orthogonal matrices are square");
    let gram = mat.t().dot(mat);
    assert_equal_matrices(&gram, &Array2::eye(n));
}

pub fn random_matrix(t : usize, s : usize) -> Array2<f64> {
    Array::random((t, s), StandardNormal)
}

pub fn random_vector(t : usize) -> Array1<f64> {
    Array::random((t,), StandardNormal)
}

///A random `t x s` matrix of rank (at most) `rank`.
pub fn random_low_rank_matrix(t : usize, s : usize, rank : usize) -> Array2<f64> {
    let left = random_matrix(t, rank);
    let right = random_matrix(rank, s);
    left.dot(&right)
}

///A random square matrix shifted far enough along the diagonal that its
///smallest singular value stays well away from zero.
pub fn random_well_conditioned_matrix(t : usize) -> Array2<f64> {
    let mut result = random_matrix(t, t);
    let shift = 3.0 * (t as f64) + 3.0;
    for i in 0..t {
        result[[i, i]] += shift;
    }
    result
}

pub fn random_diag_matrix(t : usize) -> Array2<f64> {
    let diag = random_vector(t);
    Array2::from_diag(&diag)
}
