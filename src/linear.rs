//! # Output Layer
//!
//! Trainable linear combiners over the hidden activations. Each unit keeps a
//! copy of the activations it last saw, since the delta rule needs the input
//! that produced an output. Copying means the caller is free to reuse its
//! buffer between evaluation and training.

use rand::Rng;
use crate::utils::{Activation, Weight, INIT_WEIGHT_SPREAD, WEIGHT_FLOOR};

#[derive(Debug, Clone)]
pub struct LinearUnit {
    weights: Vec<Weight>,
    last_input: Option<Vec<Activation>>,
}

impl LinearUnit {
    /// Independent uniform weights in `[-0.5, 0.5)`
    pub fn new<R: Rng>(num_inputs: usize, rng: &mut R) -> Self {
        let weights = (0..num_inputs)
            .map(|_| rng.random_range(-INIT_WEIGHT_SPREAD..INIT_WEIGHT_SPREAD))
            .collect();
        Self::from_weights(weights)
    }

    pub fn from_weights(weights: Vec<Weight>) -> Self {
        Self { weights, last_input: None }
    }

    pub fn weights(&self) -> &[Weight] {
        &self.weights
    }

    /// `None` until the unit has been evaluated once
    pub fn last_input(&self) -> Option<&[Activation]> {
        self.last_input.as_deref()
    }

    pub fn evaluate(&mut self, hidden: &[Activation]) -> Activation {
        assert_eq!(
            hidden.len(), self.weights.len(),
            "output unit has {} weights but got {} hidden activations", self.weights.len(), hidden.len()
        );
        self.last_input = Some(hidden.to_vec());
        self.weights.iter().zip(hidden).map(|(w, h)| w * h).sum()
    }

    /// Delta rule against the cached input, then the floor clamp: anything
    /// under `WEIGHT_FLOOR` (negatives included) becomes exactly 0.
    pub fn apply_error(&mut self, error: Activation, learning_rate: f64) {
        let last_input = self.last_input.as_ref()
            .expect("output unit trained before it was ever evaluated");
        for (w, x) in self.weights.iter_mut().zip(last_input) {
            let new_weight = *w + learning_rate * error * x;
            *w = if new_weight < WEIGHT_FLOOR { 0.0 } else { new_weight };
        }
    }
}
