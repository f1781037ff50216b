use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::activation::sigmoid::{sigmoid, sigmoid_prime};
use crate::math::matrix::Matrix;

pub const INPUT_SIZE: usize = 2;
pub const HIDDEN_SIZE: usize = 3;
pub const OUTPUT_SIZE: usize = 1;

/// Two-layer dense regressor: input · W1 → sigmoid → · W2 → sigmoid.
///
/// The weight matrices are the entire persistent state; the activation
/// fields hold the intermediates of the most recent forward pass so the
/// paired backward call can reuse them, and are skipped by serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Regressor {
    pub w1: Matrix,
    pub w2: Matrix,
    /// Hidden pre-activations of the last forward pass (N×3).
    #[serde(skip)]
    pub z: Matrix,
    /// Hidden activations of the last forward pass (N×3).
    #[serde(skip)]
    pub a: Matrix,
    /// Output pre-activations of the last forward pass (N×1).
    #[serde(skip)]
    pub z2: Matrix,
    /// Outputs of the last forward pass (N×1).
    #[serde(skip)]
    pub o: Matrix,
}

impl Regressor {
    /// Fresh model with both weight matrices drawn from N(0, 1).
    ///
    /// Pass `rand::thread_rng()` for a new model or a seeded `StdRng` for a
    /// reproducible one.
    pub fn new<R: Rng>(rng: &mut R) -> Regressor {
        Regressor {
            w1: Matrix::standard_normal(INPUT_SIZE, HIDDEN_SIZE, rng),
            w2: Matrix::standard_normal(HIDDEN_SIZE, OUTPUT_SIZE, rng),
            z: Matrix::default(),
            a: Matrix::default(),
            z2: Matrix::default(),
            o: Matrix::default(),
        }
    }

    /// Forward pass over a batch of N input rows; returns the N×1 outputs
    /// and retains every intermediate for a following `backward` call.
    ///
    /// Inputs must already be normalized. Shapes are not validated; a
    /// malformed batch panics in the matrix product.
    pub fn forward(&mut self, input: &Matrix) -> Matrix {
        self.z = input.clone() * self.w1.clone();
        self.a = self.z.map(sigmoid);
        self.z2 = self.a.clone() * self.w2.clone();
        self.o = self.z2.map(sigmoid);
        self.o.clone()
    }

    /// One manual backpropagation step from the error of `output` against
    /// `targets`; mutates both weight matrices in place.
    ///
    /// `output` must be the value the immediately preceding `forward` call
    /// returned for `input`, so the retained activations line up with it.
    /// The updates are added, not subtracted: with the error taken as
    /// `targets − output`, the added term is exactly the negative gradient
    /// of the squared-error loss, at an implicit learning rate of 1.
    pub fn backward(&mut self, input: &Matrix, targets: &Matrix, output: &Matrix) {
        let o_error = targets.clone() - output.clone();
        // δ = error ⊙ σ'(o); sigmoid_prime takes the post-activation value
        let o_delta = o_error.hadamard(&output.map(sigmoid_prime));
        let hidden_error = o_delta.clone() * self.w2.transpose();
        let hidden_delta = hidden_error.hadamard(&self.a.map(sigmoid_prime));

        self.w1 = self.w1.clone() + input.transpose() * hidden_delta;
        self.w2 = self.w2.clone() + self.a.transpose() * o_delta;
    }

    /// One full-batch training step: forward, then backward on the fresh
    /// predictions.
    pub fn train_step(&mut self, input: &Matrix, targets: &Matrix) {
        let output = self.forward(input);
        self.backward(input, targets, &output);
    }

    /// Runs the forward pass on a single normalized input row and scales
    /// the output back to original units.
    pub fn predict(&mut self, input: &Matrix, output_scale: f64) -> f64 {
        let output = self.forward(input);
        output.data[0][0] * output_scale
    }

    /// Serializes the weight matrices to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }

    /// Deserializes a regressor from a JSON file previously written by
    /// `save_json`. The activation fields start out empty.
    pub fn load_json(path: &str) -> std::io::Result<Regressor> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }
}
