extern crate ndarray;
extern crate ndarray_linalg;

use ndarray::*;

use crate::error::*;
use crate::params::*;
use crate::linalg_utils::*;
use crate::regularization::*;
use crate::svd_routine::*;

pub type DenseMatrix = Array2<f64>;
pub type DenseVector = Array1<f64>;

///Singular value decomposition `A = U diag(s) V^T` of the matrix handed to
///the engine, always expressed in that matrix's own orientation.
#[derive(Clone, Debug)]
pub struct SvdFactors {
    ///`rows x rows` orthogonal matrix.
    pub u : DenseMatrix,
    ///`min(rows, cols)` non-negative singular values, descending.
    pub singular_values : DenseVector,
    ///`cols x cols` orthogonal matrix.
    pub v : DenseMatrix
}

impl SvdFactors {
    ///Recomputes `U diag(s) V^T`, which should match the decomposed input.
    pub fn reconstruct(&self) -> DenseMatrix {
        let rows = self.u.shape()[0];
        let cols = self.v.shape()[0];
        let k = self.singular_values.len();
        if (k == 0) {
            return Array2::zeros((rows, cols));
        }
        let u_k = self.u.slice(s![.., ..k]);
        let v_k = self.v.slice(s![.., ..k]);
        let result_right = scale_rows(v_k.t(), self.singular_values.view());
        u_k.dot(&result_right)
    }
}

///The result of one generalized inversion.
#[derive(Clone, Debug)]
pub struct GeneralizedInverse {
    ///`cols x rows` inverse of a `rows x cols` input.
    pub inverse : DenseMatrix,
    ///Number of singular values the regularizer deemed significant. For a
    ///damped inverse this is an estimate only and does not affect `inverse`.
    pub rank : usize,
    pub factors : Option<SvdFactors>
}

///What to do when the caller's output matrix does not have the inverse's shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResizePolicy {
    ///Replace the output with a correctly-shaped matrix.
    Auto,
    ///Fail with [`MathError::DimensionError`] and leave the output alone.
    Check
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InverseOptions {
    pub want_factors : bool,
    pub resize : ResizePolicy
}

impl Default for InverseOptions {
    fn default() -> InverseOptions {
        InverseOptions {
            want_factors : false,
            resize : ResizePolicy::Auto
        }
    }
}

///Everything but the inverse itself, for calls which write into caller storage.
#[derive(Clone, Debug)]
pub struct InverseSummary {
    pub rank : usize,
    pub factors : Option<SvdFactors>
}

///Computes pseudo-inverses and damped inverses of dense matrices on top of
///an [`SvdRoutine`].
///
///The engine holds no scratch storage, so one engine may serve concurrent
///callers as long as its routine is `Sync`.
#[derive(Clone, Debug, Default)]
pub struct PseudoInverseEngine<S = LapackSvd> {
    routine : S
}

impl PseudoInverseEngine<LapackSvd> {
    pub fn new() -> PseudoInverseEngine<LapackSvd> {
        PseudoInverseEngine {
            routine : LapackSvd
        }
    }
}

impl<S : SvdRoutine> PseudoInverseEngine<S> {
    pub fn with_routine(routine : S) -> PseudoInverseEngine<S> {
        PseudoInverseEngine {
            routine
        }
    }

    pub fn routine(&self) -> &S {
        &self.routine
    }

    ///Moore-Penrose pseudo-inverse, treating singular values no larger than
    ///`threshold` as zero.
    pub fn pseudo_inverse<T>(&self, input : &ArrayBase<T, Ix2>, threshold : f64,
                             want_factors : bool) -> MathResult<GeneralizedInverse>
                             where T : Data<Elem = f64> {
        self.generalized_inverse(input, &HardThreshold::new(threshold), want_factors)
    }

    ///Tikhonov-damped inverse with damping factor `damping` (lambda).
    pub fn damped_inverse<T>(&self, input : &ArrayBase<T, Ix2>, damping : f64,
                             want_factors : bool) -> MathResult<GeneralizedInverse>
                             where T : Data<Elem = f64> {
        self.generalized_inverse(input, &TikhonovDamping::new(damping), want_factors)
    }

    ///Computes `V diag(sigma+) U^T` for the given singular value policy.
    pub fn generalized_inverse<T, R>(&self, input : &ArrayBase<T, Ix2>, regularizer : &R,
                                     want_factors : bool) -> MathResult<GeneralizedInverse>
                                     where T : Data<Elem = f64>, R : Regularizer + ?Sized {
        regularizer.validate()?;
        check_input(input.view())?;

        let (rows, cols) = input.dim();
        //The SVD routine wants a working matrix at least as tall as it is wide
        let to_transpose = rows < cols;
        let working = if (to_transpose) { input.t() } else { input.view() };
        let (nr, nc) = working.dim();
        trace!("Inverting {}x{} matrix (transposed: {})", rows, cols, to_transpose);

        let svd = self.routine.decompose(working)?;
        svd.check_shapes(nr, nc)?;

        let k = svd.sigma.len();
        let mut sigma_plus = Array1::zeros((k,));
        let mut rank = 0;
        for i in 0..k {
            let sigma = svd.sigma[[i,]];
            sigma_plus[[i,]] = regularizer.regularize(sigma);
            if (regularizer.is_significant(sigma)) {
                rank += 1;
            }
        }
        let terms = if (regularizer.truncates()) { rank } else { k };
        debug!("Rank {} of {} singular values, summing {} directions", rank, k, terms);

        let working_inverse = reconstruct_inverse(&svd, sigma_plus.view(), terms);

        let FullSvd { u, sigma, vt } = svd;
        let (inverse, factors) = if (to_transpose) {
            let factors = SvdFactors {
                u : transposed(&vt),
                singular_values : sigma,
                v : u
            };
            (transposed(&working_inverse), factors)
        } else {
            let factors = SvdFactors {
                u,
                singular_values : sigma,
                v : transposed(&vt)
            };
            (working_inverse, factors)
        };

        Ok(GeneralizedInverse {
            inverse,
            rank,
            factors : if (want_factors) { Option::Some(factors) } else { Option::None }
        })
    }

    ///Like [`PseudoInverseEngine::generalized_inverse`], but writes the inverse
    ///into `out`. `out` is only touched once the inversion has succeeded.
    pub fn generalized_inverse_into<T, R>(&self, input : &ArrayBase<T, Ix2>, regularizer : &R,
                                          out : &mut DenseMatrix,
                                          options : &InverseOptions) -> MathResult<InverseSummary>
                                          where T : Data<Elem = f64>, R : Regularizer + ?Sized {
        let (rows, cols) = input.dim();
        let fits = out.dim() == (cols, rows);
        if (!fits && options.resize == ResizePolicy::Check) {
            return Err(MathError::dimension(format!("output is {}x{}, inverse of a {}x{} matrix is {}x{}",
                                                    out.shape()[0], out.shape()[1], rows, cols, cols, rows)));
        }

        let result = self.generalized_inverse(input, regularizer, options.want_factors)?;
        if (fits) {
            out.assign(&result.inverse);
        } else {
            *out = result.inverse;
        }
        Ok(InverseSummary {
            rank : result.rank,
            factors : result.factors
        })
    }
}

///Pseudo-inverse with the default threshold.
pub fn pseudoinverse(in_mat : &DenseMatrix) -> MathResult<DenseMatrix> {
    pseudoinverse_with_threshold(in_mat, DEFAULT_PINV_THRESHOLD)
}

pub fn pseudoinverse_with_threshold(in_mat : &DenseMatrix, threshold : f64) -> MathResult<DenseMatrix> {
    let result = PseudoInverseEngine::new().pseudo_inverse(in_mat, threshold, false)?;
    Ok(result.inverse)
}

pub fn damped_inverse(in_mat : &DenseMatrix, damping : f64) -> MathResult<DenseMatrix> {
    let result = PseudoInverseEngine::new().damped_inverse(in_mat, damping, false)?;
    Ok(result.inverse)
}

fn check_input(input : ArrayView2<f64>) -> MathResult<()> {
    let (rows, cols) = input.dim();
    if (rows == 0 || cols == 0) {
        return Err(MathError::dimension(format!("cannot invert a {}x{} matrix", rows, cols)));
    }
    if (!all_finite(input)) {
        return Err(MathError::dimension("matrix has non-finite entries"));
    }
    Ok(())
}

//Re-constitutes V_k diag(sigma+_k) U_k^T from the leading `terms` directions
//of the working matrix's SVD. The result is `nc x nr`.
fn reconstruct_inverse(svd : &FullSvd, sigma_plus : ArrayView1<f64>, terms : usize) -> DenseMatrix {
    let nr = svd.u.shape()[0];
    let nc = svd.vt.shape()[0];
    if (terms == 0) {
        return Array2::zeros((nc, nr));
    }
    let v_t_k = svd.vt.slice(s![..terms, ..]);
    let u_k = svd.u.slice(s![.., ..terms]);
    let result_right = scale_rows(u_k.t(), sigma_plus.slice(s![..terms]));
    v_t_k.t().dot(&result_right)
}

fn transposed(mat : &DenseMatrix) -> DenseMatrix {
    let mut result = Array2::zeros((mat.shape()[1], mat.shape()[0]));
    result.assign(&mat.t());
    result
}
