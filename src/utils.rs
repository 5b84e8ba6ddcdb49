use std::fmt::Debug;

// ---------- Tune-ables ---------- //
pub const WEIGHT_FLOOR: Weight = 1e-9;  // Updated weights below this snap to exactly 0
pub const INIT_WEIGHT_SPREAD: Weight = 0.5;  // Fresh output weights live in [-spread, spread)
pub const DEFAULT_LEARNING_RATE: f64 = 0.1;
pub const DEFAULT_KERNEL_WIDTH: f64 = 1.0;

// ---------- Basic types (renamed for pretty) ---------- //
pub type Feature = f64;  // One coordinate of an encoded board position
pub type Activation = f64;  // Output of a hidden or output unit
pub type Weight = f64;
pub type ReplayBuffer<P> = Vec<(P, Vec<Activation>)>;  // Positions paired with the outputs we wanted

// ---------- Traits the game must provide ----------
/// Anything the driver wants scored has to become a fixed-layout feature vector.
/// Positions of smaller games may share a buffer layout with bigger ones, so only
/// the first `active_length` features take part in the distance.
pub trait FeatureEncoding: Clone + Debug {
    fn encode_features(&self) -> Vec<Feature>;
    fn active_length(&self) -> usize {
        self.encode_features().len()
    }
}

impl FeatureEncoding for Vec<Feature> {
    fn encode_features(&self) -> Vec<Feature> { self.clone() }
    fn active_length(&self) -> usize { self.len() }
}

pub trait PositionScorer<P: FeatureEncoding> {
    /// One activation per output channel
    fn score_position(&mut self, position: &P) -> Vec<Activation>;
    fn learn_from(&mut self, replay: ReplayBuffer<P>);
}
