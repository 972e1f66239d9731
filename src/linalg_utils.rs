extern crate ndarray;
extern crate ndarray_linalg;

use ndarray::*;
use ndarray_linalg::*;

use std::ops::MulAssign;

///Computes the outer product `ab^T` of vectors `a` and `b`.
pub fn outer(a : ArrayView1<f64>, b : ArrayView1<f64>) -> Array2<f64> {
    let a_column = a.insert_axis(Axis(1));
    let b_row = b.insert_axis(Axis(0));
    a_column.dot(&b_row)
}

///Scales the rows of `a` by the respective scaling factors in `b`. Useful
///for efficiently computing left-multiplication by a diagonal matrix.
pub fn scale_rows(a : ArrayView2<f64>, b : ArrayView1<f64>) -> Array2<f64> {
    let mut result = a.to_owned();
    let n = a.shape()[0];
    for i in 0..n {
        let scale = b[[i,]];
        let mut row = result.row_mut(i);
        row.mul_assign(scale);
    }
    result
}

///Frobenius norm of the difference of two equally-shaped matrices.
pub fn frob_dist(one : ArrayView2<f64>, two : ArrayView2<f64>) -> f64 {
    let diff = &one - &two;
    match (diff.opnorm_fro()) {
        Result::Ok(norm) => norm,
        //opnorm needs a contiguous layout, which `diff` always has
        Result::Err(_) => diff.iter().map(|x| x * x).sum::<f64>().sqrt()
    }
}

///Returns `true` when every entry of the matrix is finite.
pub fn all_finite(mat : ArrayView2<f64>) -> bool {
    mat.iter().all(|x| x.is_finite())
}
