use std::f64::consts::E;

/// Logistic sigmoid: 1 / (1 + e^-x). Output lies in (0, 1).
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + E.powf(-x))
}

/// Sigmoid derivative expressed in output space: s · (1 − s).
///
/// `s` must be a value already produced by `sigmoid`; the derivative of
/// sigmoid at a pre-activation z equals sigmoid(z)·(1−sigmoid(z)), so
/// feeding the post-activation value back in gives the derivative without
/// recomputing the exponential.
pub fn sigmoid_prime(s: f64) -> f64 {
    s * (1.0 - s)
}
