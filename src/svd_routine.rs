extern crate ndarray;
extern crate ndarray_linalg;

use ndarray::*;
use ndarray_linalg::*;

use crate::error::*;

///Raw output of a full singular value decomposition `W = U diag(sigma) V^T`
///of an `nr x nc` working matrix.
#[derive(Clone, Debug)]
pub struct FullSvd {
    ///Left singular vectors, `nr x nr`.
    pub u : Array2<f64>,
    ///Singular values, `min(nr, nc)` of them, in descending order.
    pub sigma : Array1<f64>,
    ///Transposed right singular vectors, `nc x nc`.
    pub vt : Array2<f64>
}

impl FullSvd {
    ///Checks that the factors have the shapes a full decomposition of an
    ///`nr x nc` matrix must have.
    pub fn check_shapes(&self, nr : usize, nc : usize) -> MathResult<()> {
        let k = std::cmp::min(nr, nc);
        if (self.u.dim() != (nr, nr) || self.vt.dim() != (nc, nc) || self.sigma.len() != k) {
            return Err(MathError::DecompositionFailure {
                info : None,
                reason : format!("factors of shape U {:?}, sigma {}, V^T {:?} do not decompose a {}x{} matrix",
                                 self.u.dim(), self.sigma.len(), self.vt.dim(), nr, nc)
            });
        }
        Ok(())
    }
}

///A dense SVD primitive in the manner of LAPACK's `xGESVD`: given a working
///matrix with at least as many rows as columns, computes the full `U`, the
///singular values in descending order, and the full `V^T`.
///
///Implementations must not share scratch storage between calls, so that
///independent decompositions may run concurrently.
pub trait SvdRoutine {
    fn decompose(&self, working : ArrayView2<f64>) -> MathResult<FullSvd>;
}

///The default [`SvdRoutine`], which calls LAPACK through `ndarray-linalg`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LapackSvd;

impl SvdRoutine for LapackSvd {
    fn decompose(&self, working : ArrayView2<f64>) -> MathResult<FullSvd> {
        let maybe_svd = working.svd(true, true);
        let (maybe_u, sigma, maybe_v_t) = match (maybe_svd) {
            Result::Ok(svd) => svd,
            Result::Err(e) => {
                error!("Bad matrix for singular value decomposition {}", working);
                return Err(MathError::DecompositionFailure {
                    info : None,
                    reason : format!("{}", e)
                });
            }
        };
        match (maybe_u, maybe_v_t) {
            (Option::Some(u), Option::Some(vt)) => Ok(FullSvd { u, sigma, vt }),
            _ => Err(MathError::DecompositionFailure {
                info : None,
                reason : "LAPACK returned no singular vectors".to_string()
            })
        }
    }
}
