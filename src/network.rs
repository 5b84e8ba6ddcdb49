//! # RBF Network
//!
//! Two layers: fixed Gaussian units followed by trainable linear units.
//! - **Forward**: input -> hidden activations -> one output per channel
//! - **Training**: delta rule on the output weights only. Centers and width
//!   are set once from outside and never learned.

use rand::Rng;
use crate::kernel::{KernelUnit, KernelWidth};
use crate::linear::LinearUnit;
use crate::utils::*;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NetworkError {
    #[error("Center initializer produced {got} centers for {expected} hidden units.")]
    CenterCount { expected: usize, got: usize },
    #[error("No hidden unit at index {0}.")]
    NoSuchHiddenUnit(usize),
}

/// Supplies the prototypes of the hidden layer (k-means over game data, a
/// precomputed table, ...). Asked once for all centers.
pub trait CenterInitializer {
    fn centers(&self, num_hidden: usize) -> Vec<Vec<Feature>>;
}

impl CenterInitializer for [Vec<Feature>] {
    fn centers(&self, _num_hidden: usize) -> Vec<Vec<Feature>> { self.to_vec() }
}

impl CenterInitializer for Vec<Vec<Feature>> {
    fn centers(&self, num_hidden: usize) -> Vec<Vec<Feature>> { self.as_slice().centers(num_hidden) }
}

/// Configuration for building a network
#[derive(Debug, Clone)]
pub struct NetworkConfig {
    pub num_inputs: usize,
    pub num_hidden: usize,
    pub num_outputs: usize,
    pub learning_rate: f64,
    pub kernel_width: f64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            num_inputs: 9,
            num_hidden: 16,
            num_outputs: 1,
            learning_rate: DEFAULT_LEARNING_RATE,
            kernel_width: DEFAULT_KERNEL_WIDTH,
        }
    }
}

impl NetworkConfig {
    pub fn build(&self) -> Network {
        self.build_with_rng(&mut rand::rng())
    }

    pub fn build_with_rng<R: Rng>(&self, rng: &mut R) -> Network {
        Network::with_rng(self.num_inputs, self.num_hidden, self.num_outputs, self.learning_rate, self.kernel_width, rng)
    }
}

#[derive(Debug, Clone)]
pub struct Network {
    num_inputs: usize,
    hidden_units: Vec<KernelUnit>,
    output_units: Vec<LinearUnit>,
    learning_rate: f64,
    kernel_width: KernelWidth,
}

impl Network {
    /// Hidden units start without centers; output weights are random.
    pub fn new(num_inputs: usize, num_hidden: usize, num_outputs: usize, learning_rate: f64, kernel_width: f64) -> Self {
        Self::with_rng(num_inputs, num_hidden, num_outputs, learning_rate, kernel_width, &mut rand::rng())
    }

    pub fn with_rng<R: Rng>(num_inputs: usize, num_hidden: usize, num_outputs: usize, learning_rate: f64, kernel_width: f64, rng: &mut R) -> Self {
        let kernel_width = KernelWidth::new(kernel_width);
        let hidden_units = (0..num_hidden).map(|_| KernelUnit::new(kernel_width)).collect();
        let output_units = (0..num_outputs).map(|_| LinearUnit::new(num_hidden, rng)).collect();
        Self::assemble(num_inputs, hidden_units, output_units, learning_rate, kernel_width)
    }

    /// Network from prebuilt layers. Every hidden unit must share one width and
    /// every output unit needs one weight per hidden unit.
    pub fn from_parts(num_inputs: usize, hidden_units: Vec<KernelUnit>, output_units: Vec<LinearUnit>, learning_rate: f64) -> Self {
        let kernel_width = hidden_units.first()
            .map(|unit| unit.width())
            .unwrap_or_else(|| KernelWidth::new(DEFAULT_KERNEL_WIDTH));
        assert!(
            hidden_units.iter().all(|unit| unit.width() == kernel_width),
            "hidden units of one network must share a kernel width"
        );
        Self::assemble(num_inputs, hidden_units, output_units, learning_rate, kernel_width)
    }

    fn assemble(num_inputs: usize, hidden_units: Vec<KernelUnit>, output_units: Vec<LinearUnit>, learning_rate: f64, kernel_width: KernelWidth) -> Self {
        assert!(learning_rate.is_finite() && learning_rate > 0.0, "learning rate must be positive, got {}", learning_rate);
        assert!(
            output_units.iter().all(|unit| unit.weights().len() == hidden_units.len()),
            "every output unit needs {} weights", hidden_units.len()
        );
        Self { num_inputs, hidden_units, output_units, learning_rate, kernel_width }
    }

    // ---------- Accessors ----------
    pub fn num_inputs(&self) -> usize { self.num_inputs }
    pub fn learning_rate(&self) -> f64 { self.learning_rate }
    pub fn kernel_width(&self) -> KernelWidth { self.kernel_width }
    pub fn hidden_units(&self) -> &[KernelUnit] { &self.hidden_units }
    pub fn hidden_units_mut(&mut self) -> &mut [KernelUnit] { &mut self.hidden_units }
    pub fn output_units(&self) -> &[LinearUnit] { &self.output_units }

    pub fn set_center(&mut self, index: usize, values: &[Feature]) -> Result<(), NetworkError> {
        let unit = self.hidden_units.get_mut(index).ok_or(NetworkError::NoSuchHiddenUnit(index))?;
        unit.set_center(values);
        Ok(())
    }

    /// Sets every hidden unit's center from the collaborator, in order.
    /// Nothing is changed if the count is wrong.
    pub fn initialize_centers<I: CenterInitializer + ?Sized>(&mut self, init: &I) -> Result<(), NetworkError> {
        let centers = init.centers(self.hidden_units.len());
        if centers.len() != self.hidden_units.len() {
            return Err(NetworkError::CenterCount { expected: self.hidden_units.len(), got: centers.len() });
        }
        for (unit, center) in self.hidden_units.iter_mut().zip(centers.iter()) {
            unit.set_center(center);
        }
        Ok(())
    }

    // ---------- Forward pass ----------
    pub fn hidden_activations(&self, input: &[Feature], active_length: usize) -> Vec<Activation> {
        self.hidden_units.iter().map(|unit| unit.evaluate(input, active_length)).collect()
    }

    /// One value per output unit. Each output unit remembers the hidden
    /// activations for the next `train`.
    pub fn evaluate(&mut self, input: &[Feature], active_length: usize) -> Vec<Activation> {
        let hidden = self.hidden_activations(input, active_length);
        self.output_units.iter_mut().map(|unit| unit.evaluate(&hidden)).collect()
    }

    // ---------- Training ----------
    /// `expected` is the target, `outcome` what the network produced for it.
    /// Only output weights move; results under `WEIGHT_FLOOR` snap to 0.
    pub fn train(&mut self, expected: &[Activation], outcome: &[Activation]) {
        let n = self.output_units.len();
        assert!(
            expected.len() == n && outcome.len() == n,
            "train needs {} expected and outcome values, got {} and {}", n, expected.len(), outcome.len()
        );
        let learning_rate = self.learning_rate;
        for (unit, (e, o)) in self.output_units.iter_mut().zip(expected.iter().zip(outcome)) {
            unit.apply_error(e - o, learning_rate);
        }
    }

    /// Evaluate then train against what came out. Returns the output from
    /// before the update.
    pub fn learn(&mut self, input: &[Feature], active_length: usize, expected: &[Activation]) -> Vec<Activation> {
        let outcome = self.evaluate(input, active_length);
        self.train(expected, &outcome);
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn close(a: f64, b: f64) -> bool { (a - b).abs() < 1e-9 }

    /// 1 input, centers at 0 and 10, width 1, one output with weights [0.5, 0.5]
    fn two_bump_network(learning_rate: f64) -> Network {
        let width = KernelWidth::new(1.0);
        let hidden = [0.0, 10.0].iter().map(|c| {
            let mut unit = KernelUnit::new(width);
            unit.set_center(&[*c]);
            unit
        }).collect();
        let outputs = vec![LinearUnit::from_weights(vec![0.5, 0.5])];
        Network::from_parts(1, hidden, outputs, learning_rate)
    }

    #[test]
    fn construction_shapes() {
        let mut rng = StdRng::seed_from_u64(1);
        let net = Network::with_rng(4, 6, 3, 0.05, 2.0, &mut rng);
        assert_eq!(net.num_inputs(), 4);
        assert_eq!(net.hidden_units().len(), 6);
        assert_eq!(net.output_units().len(), 3);
        assert!(net.hidden_units().iter().all(|u| u.center().is_none()));
        assert!(net.hidden_units().iter().all(|u| u.width() == KernelWidth::new(2.0)));
        for unit in net.output_units() {
            assert_eq!(unit.weights().len(), 6);
            assert!(unit.weights().iter().all(|w| (-0.5..0.5).contains(w)));
        }
        assert_eq!(net.learning_rate(), 0.05);
    }

    #[test]
    fn config_defaults_build() {
        let config = NetworkConfig::default();
        let net = config.build_with_rng(&mut StdRng::seed_from_u64(3));
        assert_eq!(net.hidden_units().len(), config.num_hidden);
        assert_eq!(net.output_units().len(), config.num_outputs);
        assert_eq!(net.kernel_width().value(), DEFAULT_KERNEL_WIDTH);
    }

    #[test]
    fn widths_are_per_network() {
        let narrow = Network::new(1, 2, 1, 0.1, 0.5);
        let wide = Network::new(1, 2, 1, 0.1, 4.0);
        assert_eq!(narrow.kernel_width().value(), 0.5);
        assert!(narrow.hidden_units().iter().all(|u| u.width().value() == 0.5));
        assert!(wide.hidden_units().iter().all(|u| u.width().value() == 4.0));
    }

    #[test]
    fn two_bump_scenario() {
        let mut net = two_bump_network(0.1);
        let hidden = net.hidden_activations(&[0.0], 1);
        assert!(close(hidden[0], 1.0));
        assert!(hidden[1] < 1e-20);

        let out = net.evaluate(&[0.0], 1);
        assert_eq!(out.len(), 1);
        assert!(close(out[0], 0.5));

        net.train(&[1.0], &[0.5]);
        let weights = net.output_units()[0].weights();
        assert!(close(weights[0], 0.55));
        assert!(close(weights[1], 0.5));
    }

    #[test]
    fn evaluation_is_deterministic() {
        let mut net = two_bump_network(0.1);
        let a = net.evaluate(&[3.0], 1);
        let b = net.evaluate(&[3.0], 1);
        assert_eq!(a, b);
    }

    #[test]
    fn training_leaves_hidden_layer_alone() {
        let mut net = two_bump_network(0.3);
        let before: Vec<_> = net.hidden_units().iter().map(|u| u.center().map(|c| c.to_vec())).collect();
        let width = net.kernel_width();
        for x in &[0.0, 2.5, 9.0, 10.0] {
            net.learn(&[*x], 1, &[1.0]);
        }
        let after: Vec<_> = net.hidden_units().iter().map(|u| u.center().map(|c| c.to_vec())).collect();
        assert_eq!(before, after);
        assert_eq!(net.kernel_width(), width);
        assert!(net.hidden_units().iter().all(|u| u.width() == width));
    }

    #[test]
    fn overshoot_clamps_weights_to_zero() {
        let mut net = two_bump_network(1.0);
        net.evaluate(&[0.0], 1);
        net.train(&[-10.0], &[0.5]);
        assert_eq!(net.output_units()[0].weights()[0], 0.0);
    }

    #[test]
    fn learn_returns_pre_update_output() {
        let mut net = two_bump_network(0.1);
        let out = net.learn(&[0.0], 1, &[1.0]);
        assert!(close(out[0], 0.5));
        let again = net.evaluate(&[0.0], 1);
        assert!(again[0] > out[0]);
    }

    #[test]
    fn learning_moves_toward_target() {
        let mut net = two_bump_network(0.5);
        let target = 0.9;
        let first = net.evaluate(&[10.0], 1)[0];
        for _ in 0..50 {
            net.learn(&[10.0], 1, &[target]);
        }
        let last = net.evaluate(&[10.0], 1)[0];
        assert!((target - last).abs() < (target - first).abs());
    }

    #[test]
    fn unset_centers_do_not_activate() {
        let mut net = Network::new(2, 3, 2, 0.1, 1.0);
        assert_eq!(net.hidden_activations(&[0.0, 0.0], 2), vec![0.0; 3]);
        assert_eq!(net.evaluate(&[0.0, 0.0], 2), vec![0.0; 2]);
    }

    #[test]
    fn initialize_centers_from_list() {
        let mut net = Network::new(2, 2, 1, 0.1, 1.0);
        let centers = vec![vec![0.0, 1.0], vec![1.0, 0.0]];
        net.initialize_centers(&centers).unwrap();
        assert_eq!(net.hidden_units()[1].center(), Some(&[1.0, 0.0][..]));
        let hidden = net.hidden_activations(&[0.0, 1.0], 2);
        assert!(close(hidden[0], 1.0));
    }

    #[test]
    fn initialize_centers_wrong_count() {
        let mut net = Network::new(2, 3, 1, 0.1, 1.0);
        let centers = vec![vec![0.0, 1.0]];
        assert_eq!(
            net.initialize_centers(&centers),
            Err(NetworkError::CenterCount { expected: 3, got: 1 })
        );
        assert!(net.hidden_units().iter().all(|u| u.center().is_none()));
    }

    #[test]
    fn set_center_by_index() {
        let mut net = Network::new(1, 2, 1, 0.1, 1.0);
        net.set_center(1, &[4.0]).unwrap();
        assert_eq!(net.hidden_units()[1].center(), Some(&[4.0][..]));
        assert_eq!(net.set_center(2, &[4.0]), Err(NetworkError::NoSuchHiddenUnit(2)));
        net.hidden_units_mut()[0].set_center(&[1.0]);
        assert_eq!(net.hidden_units()[0].center(), Some(&[1.0][..]));
    }

    #[test]
    #[should_panic]
    fn train_before_evaluate_panics() {
        let mut net = two_bump_network(0.1);
        net.train(&[1.0], &[0.0]);
    }

    #[test]
    #[should_panic]
    fn train_with_wrong_length_panics() {
        let mut net = two_bump_network(0.1);
        net.evaluate(&[0.0], 1);
        net.train(&[1.0, 1.0], &[0.0, 0.0]);
    }

    #[test]
    #[should_panic]
    fn mismatched_layers_rejected() {
        let hidden = vec![KernelUnit::new(KernelWidth::new(1.0))];
        Network::from_parts(1, hidden, vec![LinearUnit::from_weights(vec![0.1, 0.2])], 0.1);
    }

    #[test]
    #[should_panic]
    fn non_positive_width_rejected() {
        Network::new(1, 1, 1, 0.1, 0.0);
    }

    #[test]
    #[should_panic]
    fn non_positive_learning_rate_rejected() {
        Network::new(1, 1, 1, 0.0, 1.0);
    }
}
