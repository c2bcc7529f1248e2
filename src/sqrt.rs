//! Truncating integer square root.
//!
//! The root is taken in `f64` and truncated toward zero. Every `i32` is
//! exactly representable in `f64` and `sqrt` is correctly rounded, so the
//! truncated value is the exact floor root across the whole input range.

use crate::config::NegativeInputPolicy;
use crate::error::BridgeError;

/// Largest value `int_sqrt` can return (`int_sqrt(i32::MAX)`)
pub const MAX_ROOT: i32 = 46_340;

/// Integer square root of `x`, truncated toward zero
///
/// Negative inputs have no real root. `policy` decides whether they are
/// rejected or mapped to `0`.
pub fn int_sqrt(x: i32, policy: NegativeInputPolicy) -> Result<i32, BridgeError> {
    if x < 0 {
        return match policy {
            NegativeInputPolicy::Reject => Err(BridgeError::negative_sqrt(x)),
            // NaN saturates to 0 under `as`
            NegativeInputPolicy::Zero => Ok((x as f64).sqrt() as i32),
        };
    }

    Ok((x as f64).sqrt().trunc() as i32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn root(x: i32) -> i32 {
        int_sqrt(x, NegativeInputPolicy::Reject).unwrap()
    }

    #[test]
    fn test_perfect_squares() {
        assert_eq!(root(0), 0);
        assert_eq!(root(1), 1);
        assert_eq!(root(4), 2);
        assert_eq!(root(16), 4);
        assert_eq!(root(25), 5);
        assert_eq!(root(36), 6);
    }

    #[test]
    fn test_truncates_instead_of_rounding() {
        assert_eq!(root(2), 1);
        assert_eq!(root(3), 1);
        assert_eq!(root(8), 2);
        assert_eq!(root(24), 4);
        assert_eq!(root(35), 5);
    }

    #[test]
    fn test_neighbours_of_squares() {
        for n in [2, 17, 100, 1000, 46_339] {
            let square = n * n;
            assert_eq!(root(square - 1), n - 1);
            assert_eq!(root(square), n);
            assert_eq!(root(square + 1), n);
        }
    }

    #[test]
    fn test_upper_bound() {
        assert_eq!(root(i32::MAX), MAX_ROOT);
        assert_eq!(root(MAX_ROOT * MAX_ROOT), MAX_ROOT);
    }

    #[test]
    fn test_negative_rejected() {
        let err = int_sqrt(-4, NegativeInputPolicy::Reject).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidArgument);
        assert!(int_sqrt(i32::MIN, NegativeInputPolicy::Reject).is_err());
    }

    #[test]
    fn test_negative_zero_policy() {
        assert_eq!(int_sqrt(-1, NegativeInputPolicy::Zero).unwrap(), 0);
        assert_eq!(int_sqrt(i32::MIN, NegativeInputPolicy::Zero).unwrap(), 0);
    }

    #[test]
    fn test_idempotent() {
        let first = root(12_345);
        for _ in 0..10 {
            assert_eq!(root(12_345), first);
        }
    }
}
