/// Demo driver: scores a handful of tic-tac-toe style encodings and trains on them.
///
/// Usage:
///   cargo run --release -- [num_hidden] [epochs]
///
/// Cells are +1 (X), -1 (O) or 0. The target is a single "X is doing well" score.
use std::env;
use log::{debug, error};
use RBFClassifier::network::NetworkConfig;
use RBFClassifier::solver::RbfSolver;
use RBFClassifier::training::{Trainer, TrainingConfig};
use RBFClassifier::utils::{Feature, PositionScorer};

fn init_logger() {
    use simplelog::*;

    if let Err(e) = TermLogger::init(LevelFilter::Info, Config::default(), TerminalMode::Mixed, ColorChoice::Auto) {
        eprintln!("Logger could not be installed: {e}");
    }
    debug!("Logger successfully initialized");
}

fn positions() -> Vec<(Vec<Feature>, f64)> {
    vec![
        (vec![ 1.0,  1.0,  1.0,  0.0, -1.0,  0.0, -1.0,  0.0,  0.0], 1.0),
        (vec![ 1.0, -1.0,  0.0,  0.0,  1.0, -1.0,  0.0,  0.0,  1.0], 1.0),
        (vec![-1.0, -1.0, -1.0,  1.0,  0.0,  1.0,  0.0,  1.0,  0.0], 0.0),
        (vec![ 0.0,  0.0,  0.0,  0.0,  1.0,  0.0,  0.0,  0.0,  0.0], 0.6),
        (vec![ 1.0, -1.0,  1.0,  1.0, -1.0, -1.0, -1.0,  1.0,  1.0], 0.5),
        (vec![ 0.0,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0], 0.5),
    ]
}

fn main() {
    init_logger();
    let args: Vec<String> = env::args().collect();
    let num_hidden: usize = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(6);
    let epochs: usize = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(50);

    let data = positions();
    let config = NetworkConfig { num_hidden, kernel_width: 1.5, ..NetworkConfig::default() };
    let mut network = config.build();
    // Reuse the sample boards as centers, cycling if more units were requested
    let centers: Vec<Vec<Feature>> = (0..num_hidden).map(|i| data[i % data.len()].0.clone()).collect();
    if let Err(e) = network.initialize_centers(&centers) {
        error!("Could not place centers: {e}");
        return;
    }

    println!("RBF network");
    println!("════════════════════════════════════");
    println!("  Inputs: {}", config.num_inputs);
    println!("  Hidden units: {}", num_hidden);
    println!("  Epochs: {}", epochs);
    println!("════════════════════════════════════\n");

    let training = TrainingConfig { epochs, report_frequency: (epochs / 5).max(1), ..TrainingConfig::default() };
    let mut trainer = Trainer::new(training, RbfSolver::new(network));
    for (board, target) in &data {
        trainer.record(board.clone(), vec![*target]);
    }
    let mse = trainer.train();
    println!("Final mse: {:.6}", mse);

    let mut solver = trainer.into_solver();
    for (board, target) in &data {
        let score = solver.score_position(board);
        println!("{:?} -> {:.3} (target {:.1})", board, score[0], target);
    }
}
