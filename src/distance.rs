//! Distance between an encoded position and a prototype.

/// Reasons a distance could not be produced
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DistanceError {
    #[error("Prefix of {requested} features requested but a vector only has {len}.")]
    PrefixTooLong { requested: usize, len: usize },
    #[error("Non-finite value at feature {index}.")]
    NonFinite { index: usize },
    #[error("Distance overflowed to a non-finite value.")]
    Overflow,
}

/// Standard Euclidean norm over the first `n` paired elements of `a` and `b`.
pub fn euclidean_distance(a: &[f64], b: &[f64], n: usize) -> Result<f64, DistanceError> {
    let shortest = a.len().min(b.len());
    if n > shortest {
        return Err(DistanceError::PrefixTooLong { requested: n, len: shortest });
    }
    let mut sum = 0.0;
    for (index, (x, y)) in a[..n].iter().zip(b[..n].iter()).enumerate() {
        if !x.is_finite() || !y.is_finite() {
            return Err(DistanceError::NonFinite { index });
        }
        sum += (x - y) * (x - y);
    }
    if !sum.is_finite() {
        return Err(DistanceError::Overflow);
    }
    Ok(sum.sqrt())
}
