//! Shared secure-random primitives. OAuth verifier and state generation both
//! draw from here so the range-reduction logic lives in exactly one place.

use rand::rngs::OsRng;
use rand::RngCore;

#[derive(Debug, thiserror::Error)]
pub enum RandomError {
    #[error("invalid range: max ({max}) is less than min ({min})")]
    InvalidRange { min: u64, max: u64 },
    #[error("secure random source unavailable: {0}")]
    Source(#[from] rand::Error),
}

/// Draw `n` bytes from the operating system CSPRNG.
pub fn secure_random_bytes(n: usize) -> Result<Vec<u8>, RandomError> {
    let mut buf = vec![0u8; n];
    OsRng.try_fill_bytes(&mut buf)?;
    Ok(buf)
}

/// Draw a random integer in the inclusive range `[min, max]` from the OS
/// CSPRNG: enough bytes to cover the range size are combined big-endian and
/// reduced modulo the range.
///
/// The modulo reduction carries a small bias whenever the range size does not
/// evenly divide 256^n. That bias is accepted here; these values pick things
/// like verifier lengths, not keys, and callers must not assume perfect
/// uniformity.
pub fn secure_random_int(min: u64, max: u64) -> Result<u64, RandomError> {
    if max < min {
        return Err(RandomError::InvalidRange { min, max });
    }
    let range = (max - min) as u128 + 1;
    let bits = 128 - range.leading_zeros();
    let n_bytes = ((bits + 7) / 8).max(1) as usize;

    let bytes = secure_random_bytes(n_bytes)?;
    let mut acc: u128 = 0;
    for b in bytes {
        acc = (acc << 8) | b as u128;
    }
    Ok(min + (acc % range) as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degenerate_range_returns_min() {
        for _ in 0..50 {
            assert_eq!(secure_random_int(5, 5).unwrap(), 5);
        }
    }

    #[test]
    fn inverted_range_is_rejected() {
        match secure_random_int(10, 1) {
            Err(RandomError::InvalidRange { min, max }) => {
                assert_eq!((min, max), (10, 1));
            }
            other => panic!("expected InvalidRange, got {:?}", other),
        }
    }

    #[test]
    fn full_u64_range_does_not_overflow() {
        // range size 2^64 exceeds u64; the u128 accumulator must cope
        secure_random_int(0, u64::MAX).unwrap();
    }
}
