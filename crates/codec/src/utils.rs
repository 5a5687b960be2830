use crate::error::CodecError;

/// Derive the positional weights for a list of radices.
///
/// The first locus is the most significant: `weight[last] = 1` and
/// `weight[i] = weight[i + 1] * radix[i + 1]`. Returns the weights together
/// with the total number of combinations (`Π radix`).
pub fn compute_weights(radices: &[usize]) -> Result<(Vec<usize>, usize), CodecError> {
    if let Some(locus) = radices.iter().position(|&r| r == 0) {
        return Err(CodecError::EmptyLocus(locus));
    }

    let mut weights = vec![1usize; radices.len()];
    let mut running = 1usize;
    for (i, &radix) in radices.iter().enumerate().rev() {
        weights[i] = running;
        running = running.checked_mul(radix).ok_or(CodecError::Overflow(i))?;
    }

    Ok((weights, running))
}

/// Check an externally supplied weight vector against the radices it claims
/// to describe.
pub fn check_weights(radices: &[usize], weights: &[usize]) -> Result<usize, CodecError> {
    if weights.len() != radices.len() {
        return Err(CodecError::DimensionMismatch {
            expected: radices.len(),
            found: weights.len(),
        });
    }

    let (expected, total) = compute_weights(radices)?;
    for (locus, (&e, &w)) in expected.iter().zip(weights).enumerate() {
        if e != w {
            return Err(CodecError::WeightMismatch {
                locus,
                expected: e,
                found: w,
            });
        }
    }

    Ok(total)
}
