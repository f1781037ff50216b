use crate::math::matrix::Matrix;

pub struct MseLoss;

impl MseLoss {
    /// Scalar MSE over every element: mean((predicted - expected)²)
    pub fn loss(predicted: &Matrix, expected: &Matrix) -> f64 {
        let n = (predicted.rows * predicted.cols) as f64;
        predicted.data.iter().zip(expected.data.iter())
            .flat_map(|(row_p, row_e)| row_p.iter().zip(row_e.iter()))
            .map(|(p, e)| (p - e).powi(2))
            .sum::<f64>() / n
    }
}
