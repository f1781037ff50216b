use sprintnet::{
    Matrix, QueryScaling, Regressor, SprintDataset, TrainConfig, train_loop, TARGET_SCALE,
};

/// Fixed file name for the trained-weights snapshot.
const SNAPSHOT_PATH: &str = "sprint-model.json";

fn main() -> std::io::Result<()> {
    // (age, weight) -> sprint time, in original units
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
    let dataset = SprintDataset::new(raw_inputs, raw_targets);

    let mut model = Regressor::new(&mut rand::thread_rng());
    let config = TrainConfig::default();
    train_loop(&mut model, &dataset.inputs, &dataset.targets, &config);

    model.save_json(SNAPSHOT_PATH)?;

    let query = Matrix::from_data(vec![vec![18.0, 165.0]]);
    let scaled = dataset.normalize_query(&query, QueryScaling::OwnMax);
    let prediction = model.predict(&scaled, TARGET_SCALE);

    println!("Predicted sprint time from trained weights:");
    println!("Input (scaled): {:?}", scaled.data[0]);
    println!("Output: {prediction}");

    Ok(())
}
