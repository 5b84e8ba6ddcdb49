//! # Hidden Layer
//!
//! Gaussian radial basis units. Each unit measures how close an encoded
//! position is to a fixed prototype (its center):
//!
//! `exp(-d² / (2 C²))` where `d` is the Euclidean distance and `C` the width.
//!
//! Centers are chosen outside this crate (k-means or otherwise) and are never
//! touched by training.

use log::warn;
use crate::distance::{euclidean_distance, DistanceError};
use crate::utils::{Activation, Feature};

/// Spread of every Gaussian in one network.
/// A network owns its width and hands a copy to each of its units, so two
/// networks with different widths never see each other's value.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct KernelWidth(f64);

impl KernelWidth {
    pub fn new(width: f64) -> Self {
        assert!(width.is_finite() && width > 0.0, "kernel width must be positive, got {}", width);
        Self(width)
    }
    #[inline] pub fn value(self) -> f64 { self.0 }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum KernelError {
    #[error("Center was never set.")]
    UnsetCenter,
    #[error(transparent)]
    Distance(#[from] DistanceError),
}

#[derive(Debug, Clone)]
pub struct KernelUnit {
    center: Option<Vec<Feature>>,
    width: KernelWidth,
}

impl KernelUnit {
    pub fn new(width: KernelWidth) -> Self {
        Self { center: None, width }
    }

    /// Copies `values` into the unit; the caller keeps ownership of its buffer.
    pub fn set_center(&mut self, values: &[Feature]) {
        if let Some(old) = &self.center {
            warn!("Replacing kernel center {:?} with {:?}", old, values);
        }
        self.center = Some(values.to_vec());
    }

    pub fn center(&self) -> Option<&[Feature]> {
        self.center.as_deref()
    }

    pub fn width(&self) -> KernelWidth {
        self.width
    }

    pub fn try_evaluate(&self, input: &[Feature], active_length: usize) -> Result<Activation, KernelError> {
        let center = self.center.as_ref().ok_or(KernelError::UnsetCenter)?;
        let d = euclidean_distance(input, center, active_length)?;
        let c = self.width.value();
        Ok((-(d * d) / (2.0 * c * c)).exp())
    }

    /// Activation in `[0, 1]`. A unit that cannot evaluate (no center, short
    /// vectors, non-finite values) logs the problem and does not activate.
    pub fn evaluate(&self, input: &[Feature], active_length: usize) -> Activation {
        match self.try_evaluate(input, active_length) {
            Ok(activation) => activation,
            Err(e) => {
                warn!("Kernel unit failed ({}): input {:?}, center {:?}", e, input, self.center);
                0.0
            }
        }
    }
}
