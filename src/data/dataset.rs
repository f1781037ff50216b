use crate::math::matrix::Matrix;

/// Fixed divisor applied to target values; predictions are multiplied by the
/// same constant to report results in original units.
pub const TARGET_SCALE: f64 = 20.0;

/// How a prediction query is scaled before the forward pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryScaling {
    /// Divide every feature by the largest feature in the query itself.
    /// The resulting scale depends on the query, not on the training data;
    /// this is the model's historical behavior and the default.
    OwnMax,
    /// Divide each feature by the training-set maximum for its column, the
    /// same statistics used to scale the training inputs.
    TrainMax,
}

/// The training set, held fully normalized, plus the raw per-column input
/// maxima needed to scale queries in `TrainMax` mode.
pub struct SprintDataset {
    /// Normalized training inputs, each column divided by its own maximum.
    pub inputs: Matrix,
    /// Normalized targets, divided by `TARGET_SCALE`.
    pub targets: Matrix,
    input_maxima: Vec<f64>,
}

impl SprintDataset {
    /// Builds a dataset from raw (unscaled) inputs and targets.
    /// Normalization happens once here; the dataset is immutable afterwards.
    pub fn new(raw_inputs: Matrix, raw_targets: Matrix) -> SprintDataset {
        let input_maxima = column_maxima(&raw_inputs);
        let inputs = scale_columns(&raw_inputs, &input_maxima);
        let targets = raw_targets.map(|y| y / TARGET_SCALE);

        SprintDataset {
            inputs,
            targets,
            input_maxima,
        }
    }

    /// Per-column maxima of the raw training inputs.
    pub fn input_maxima(&self) -> &[f64] {
        &self.input_maxima
    }

    /// Scales a raw prediction query into the model's input space.
    pub fn normalize_query(&self, query: &Matrix, scaling: QueryScaling) -> Matrix {
        match scaling {
            QueryScaling::OwnMax => {
                let max = query.data.iter()
                    .flat_map(|row| row.iter())
                    .fold(f64::NEG_INFINITY, |acc, &x| acc.max(x));
                query.map(|x| x / max)
            }
            QueryScaling::TrainMax => scale_columns(query, &self.input_maxima),
        }
    }
}

/// Maximum of each column.
fn column_maxima(m: &Matrix) -> Vec<f64> {
    let mut maxima = vec![f64::NEG_INFINITY; m.cols];
    for row in &m.data {
        for (j, &x) in row.iter().enumerate() {
            if x > maxima[j] {
                maxima[j] = x;
            }
        }
    }
    maxima
}

/// Divides each column by the corresponding maximum.
fn scale_columns(m: &Matrix, maxima: &[f64]) -> Matrix {
    let data = m.data.iter()
        .map(|row| {
            row.iter().zip(maxima.iter()).map(|(x, max)| x / max).collect()
        })
        .collect();
    Matrix::from_data(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sprint_dataset() -> SprintDataset {
        let raw_inputs = Matrix::from_data(vec![
            vec![22.0, 180.0],
            vec![30.0, 155.0],
            vec![21.0, 205.0],
            vec![27.0, 190.0],
            vec![25.0, 160.0],
        ]);
        let raw_targets = Matrix::from_data(vec![
            vec![16.0],
            vec![12.0],
            vec![9.0],
            vec![14.0],
            vec![15.0],
        ]);
        SprintDataset::new(raw_inputs, raw_targets)
    }

    #[test]
    fn training_inputs_are_scaled_by_column_maxima() {
        let dataset = sprint_dataset();
        assert_eq!(dataset.input_maxima(), &[30.0, 205.0]);
        assert_eq!(dataset.inputs.data[0], vec![22.0 / 30.0, 180.0 / 205.0]);
        assert_eq!(dataset.inputs.data[1], vec![1.0, 155.0 / 205.0]);
        assert_eq!(dataset.inputs.data[2], vec![21.0 / 30.0, 1.0]);
    }

    #[test]
    fn targets_are_scaled_by_the_fixed_constant() {
        let dataset = sprint_dataset();
        let scaled: Vec<f64> = dataset.targets.data.iter().map(|row| row[0]).collect();
        assert_eq!(scaled, vec![0.8, 0.6, 0.45, 0.7, 0.75]);
    }

    #[test]
    fn target_scale_round_trips() {
        assert_eq!(0.5 * TARGET_SCALE, 10.0);
        assert_eq!((9.0 / TARGET_SCALE) * TARGET_SCALE, 9.0);
    }

    #[test]
    fn own_max_scaling_divides_by_the_largest_query_feature() {
        let dataset = sprint_dataset();
        let query = Matrix::from_data(vec![vec![18.0, 165.0]]);
        let scaled = dataset.normalize_query(&query, QueryScaling::OwnMax);
        assert_eq!(scaled.data[0], vec![18.0 / 165.0, 1.0]);
    }

    #[test]
    fn train_max_scaling_uses_training_column_maxima() {
        let dataset = sprint_dataset();
        let query = Matrix::from_data(vec![vec![18.0, 165.0]]);
        let scaled = dataset.normalize_query(&query, QueryScaling::TrainMax);
        assert_eq!(scaled.data[0], vec![18.0 / 30.0, 165.0 / 205.0]);
    }

    #[test]
    fn the_two_scaling_modes_disagree_on_the_same_query() {
        // Own-max scaling ties the scale to the query itself, so the two
        // modes only coincide for a query whose features equal the training
        // maxima.
        let dataset = sprint_dataset();
        let query = Matrix::from_data(vec![vec![18.0, 165.0]]);
        let own = dataset.normalize_query(&query, QueryScaling::OwnMax);
        let train = dataset.normalize_query(&query, QueryScaling::TrainMax);
        assert_ne!(own.data, train.data);
    }
}
