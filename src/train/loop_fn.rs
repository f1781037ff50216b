use crate::loss::mse::MseLoss;
use crate::math::matrix::Matrix;
use crate::model::regressor::Regressor;
use crate::train::train_config::TrainConfig;

/// Trains `model` for `config.iterations` full-batch gradient steps.
///
/// Each iteration evaluates the current model over the whole batch, prints
/// one `#<i> Loss: <mse>` line, then applies a single training step. The
/// loss is reported *before* the step, so the first line shows the loss of
/// the freshly initialized model.
///
/// Returns the per-iteration loss trace.
pub fn train_loop(
    model: &mut Regressor,
    inputs: &Matrix,
    targets: &Matrix,
    config: &TrainConfig,
) -> Vec<f64> {
    let mut losses = Vec::with_capacity(config.iterations);

    for i in 0..config.iterations {
        let output = model.forward(inputs);
        let loss = MseLoss::loss(&output, targets);
        println!("#{i} Loss: {loss}");
        losses.push(loss);

        model.train_step(inputs, targets);
    }

    losses
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::dataset::{QueryScaling, SprintDataset, TARGET_SCALE};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

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

    fn trained_model(seed: u64, iterations: usize) -> (Regressor, Vec<f64>) {
        let dataset = sprint_dataset();
        let mut rng = StdRng::seed_from_u64(seed);
        let mut model = Regressor::new(&mut rng);
        let config = TrainConfig::new(iterations);
        let losses = train_loop(&mut model, &dataset.inputs, &dataset.targets, &config);
        (model, losses)
    }

    #[test]
    fn loop_emits_one_loss_per_iteration() {
        let (_, losses) = trained_model(1, 25);
        assert_eq!(losses.len(), 25);
        assert!(losses.iter().all(|l| l.is_finite() && *l >= 0.0));
    }

    #[test]
    fn loss_falls_over_a_full_run() {
        let (_, losses) = trained_model(42, 1000);
        assert!(
            losses[999] < losses[0],
            "loss rose from {} to {}",
            losses[0],
            losses[999]
        );
    }

    #[test]
    fn training_is_bit_for_bit_reproducible() {
        let (model_a, losses_a) = trained_model(42, 1000);
        let (model_b, losses_b) = trained_model(42, 1000);
        assert_eq!(model_a.w1.data, model_b.w1.data);
        assert_eq!(model_a.w2.data, model_b.w2.data);
        assert_eq!(losses_a, losses_b);
    }

    #[test]
    fn trained_prediction_stays_in_the_output_range() {
        let dataset = sprint_dataset();
        let (mut model, _) = trained_model(42, 1000);

        let query = Matrix::from_data(vec![vec![18.0, 165.0]]);
        let scaled = dataset.normalize_query(&query, QueryScaling::OwnMax);
        let prediction = model.predict(&scaled, TARGET_SCALE);

        // Sigmoid output scaled by the target constant.
        assert!(prediction > 0.0 && prediction <= TARGET_SCALE);

        let (mut model_again, _) = trained_model(42, 1000);
        let repeat = model_again.predict(&scaled, TARGET_SCALE);
        assert_eq!(prediction, repeat);
    }
}
