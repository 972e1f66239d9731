//Numerical algorithm constants

///Singular values at or below this magnitude are treated as zero
///by the truncated pseudo-inverse.
pub const DEFAULT_PINV_THRESHOLD : f64 = 1e-6;

///Default damping factor (lambda) for the damped inverse.
pub const DEFAULT_DAMPING : f64 = 1e-6;

//The damped inverse reports a rank estimate using a looser cutoff
//than the damping factor itself. Informational only.
pub const DAMPED_RANK_FRACTION : f64 = 0.1;

//Test tolerances
pub const ZEROING_THRESH : f64 = 1e-8;

pub const DEFAULT_TEST_THRESH : f64 = 1e-6;
