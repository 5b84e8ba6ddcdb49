//! # Bulk Training
//!
//! Collects (position, target) pairs from games into a bounded replay buffer
//! and runs several online passes over it. A single game is just a short
//! buffer trained once; bulk self-play fills the buffer across many games.

use log::info;
use std::collections::VecDeque;
use crate::solver::RbfSolver;
use crate::utils::*;

/// Configuration for training sessions
#[derive(Debug, Clone)]
pub struct TrainingConfig {
    pub epochs: usize,
    pub replay_buffer_size: usize,
    pub report_frequency: usize,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            epochs: 10,
            replay_buffer_size: 1000,
            report_frequency: 5,
        }
    }
}

pub struct Trainer<P: FeatureEncoding> {
    config: TrainingConfig,
    solver: RbfSolver<P>,
    replay_buffer: VecDeque<(P, Vec<Activation>)>,
}

impl<P: FeatureEncoding> Trainer<P> {
    pub fn new(config: TrainingConfig, solver: RbfSolver<P>) -> Self {
        Self {
            config,
            solver,
            replay_buffer: VecDeque::new(),
        }
    }

    /// Remember a position with the outputs it should have produced.
    /// The oldest entry goes once the buffer is full.
    pub fn record(&mut self, position: P, target: Vec<Activation>) {
        self.replay_buffer.push_back((position, target));
        while self.replay_buffer.len() > self.config.replay_buffer_size {
            self.replay_buffer.pop_front();
        }
    }

    pub fn buffered(&self) -> usize {
        self.replay_buffer.len()
    }

    /// Runs the configured epochs and returns the mean squared error of the last one.
    pub fn train(&mut self) -> f64 {
        let experiences: Vec<_> = self.replay_buffer.iter().cloned().collect();
        let mut mse = 0.0;
        for epoch in 0..self.config.epochs {
            mse = self.solver.learn_pass(&experiences);
            if self.config.report_frequency > 0 && (epoch + 1) % self.config.report_frequency == 0 {
                info!("Epoch {}/{}: mse {:.6} over {} positions", epoch + 1, self.config.epochs, mse, experiences.len());
            }
        }
        info!("Training complete after {} epochs", self.config.epochs);
        mse
    }

    pub fn solver(&self) -> &RbfSolver<P> {
        &self.solver
    }

    pub fn solver_mut(&mut self) -> &mut RbfSolver<P> {
        &mut self.solver
    }

    pub fn into_solver(self) -> RbfSolver<P> {
        self.solver
    }
}
