use log::debug;
use std::marker::PhantomData;
use crate::network::{Network, NetworkConfig};
use crate::utils::*;

/// Scores encoded game positions with an RBF network and learns from
/// (position, target) pairs collected by the driver.
#[derive(Debug, Clone)]
pub struct RbfSolver<P: FeatureEncoding> {
    network: Network,
    _phantom: PhantomData<P>,
}

impl<P: FeatureEncoding> RbfSolver<P> {
    pub fn new(network: Network) -> Self {
        Self { network, _phantom: PhantomData }
    }

    pub fn from_config(config: &NetworkConfig) -> Self {
        Self::new(config.build())
    }

    pub fn network(&self) -> &Network { &self.network }
    pub fn network_mut(&mut self) -> &mut Network { &mut self.network }
    pub fn into_network(self) -> Network { self.network }

    /// One online pass over `replay`; returns the mean squared error seen
    /// before each update (0 for an empty buffer).
    pub fn learn_pass(&mut self, replay: &[(P, Vec<Activation>)]) -> f64 {
        if replay.is_empty() { return 0.0; }
        let mut total = 0.0;
        for (position, target) in replay {
            let features = position.encode_features();
            let outcome = self.network.learn(&features, position.active_length(), target);
            total += target.iter().zip(outcome.iter()).map(|(t, o)| (t - o) * (t - o)).sum::<f64>();
        }
        let mse = total / replay.len() as f64;
        debug!("Learned from {} positions, mse {:.6}", replay.len(), mse);
        mse
    }
}

impl<P: FeatureEncoding> PositionScorer<P> for RbfSolver<P> {
    fn score_position(&mut self, position: &P) -> Vec<Activation> {
        let features = position.encode_features();
        self.network.evaluate(&features, position.active_length())
    }

    fn learn_from(&mut self, replay: ReplayBuffer<P>) {
        self.learn_pass(&replay);
    }
}
