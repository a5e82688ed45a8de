//! Validation Helpers for the Price Attestor
//!
//! The `check!` macro for early-return validation, plus the 256-bit decimal
//! codec shared by field elements and signature components. The upstream
//! feed serializes every large integer as a decimal string, so parsing has
//! to handle the full 256-bit range without a bigint dependency.

use crate::{constants::field, String, Vec};

// ============ Validation Macro ============

/// Check a condition and return an error if it fails.
///
/// # Examples
///
/// ```rust,ignore
/// use attestor_common::{check, AttestError};
///
/// check!(registry_key == genesis_key, AttestError::IdentityMismatch {
///     expected: genesis_key,
///     actual: registry_key,
/// });
/// ```
#[macro_export]
macro_rules! check {
    ($condition:expr, $error:expr) => {
        if !($condition) {
            return Err($error);
        }
    };
}

// ============ 256-bit Decimal Codec ============

/// Parses a decimal integer string into 32 little-endian bytes.
///
/// Accepts the full 256-bit range (no field-domain check; signature
/// components legitimately exceed the modulus). Returns `None` on an empty
/// string, a non-digit character, or overflow past 2^256.
pub fn parse_decimal_256(s: &str) -> Option<[u8; 32]> {
    if s.is_empty() || s.len() > field::MAX_DECIMAL_DIGITS {
        return None;
    }

    // Accumulate limbs = limbs * 10 + digit
    let mut limbs = [0u64; 4];
    for ch in s.bytes() {
        let digit = ch.wrapping_sub(b'0');
        if digit > 9 {
            return None;
        }
        let mut carry = digit as u128;
        for limb in &mut limbs {
            let acc = (*limb as u128) * 10 + carry;
            *limb = acc as u64;
            carry = acc >> 64;
        }
        if carry != 0 {
            return None;
        }
    }

    let mut out = [0u8; 32];
    for (i, limb) in limbs.iter().enumerate() {
        out[i * 8..(i + 1) * 8].copy_from_slice(&limb.to_le_bytes());
    }
    Some(out)
}

/// Renders 32 little-endian bytes as a decimal integer string.
pub fn decimal_256(bytes: &[u8; 32]) -> String {
    let mut limbs = [0u64; 4];
    for (i, limb) in limbs.iter_mut().enumerate() {
        let mut chunk = [0u8; 8];
        chunk.copy_from_slice(&bytes[i * 8..(i + 1) * 8]);
        *limb = u64::from_le_bytes(chunk);
    }

    let mut digits: Vec<u8> = Vec::new();
    loop {
        // Divide the whole number by 10, collecting the remainder
        let mut remainder = 0u64;
        let mut nonzero = false;
        for limb in limbs.iter_mut().rev() {
            let acc = ((remainder as u128) << 64) | *limb as u128;
            *limb = (acc / 10) as u64;
            remainder = (acc % 10) as u64;
            nonzero |= *limb != 0;
        }
        digits.push(b'0' + remainder as u8);
        if !nonzero {
            break;
        }
    }

    digits.reverse();
    // Digits are ASCII by construction
    String::from_utf8(digits).unwrap_or_default()
}

/// Returns true if the little-endian bytes encode a canonical field element,
/// i.e. a value strictly below the base-field modulus.
pub fn is_canonical_field_bytes(bytes: &[u8; 32]) -> bool {
    // Compare from the most significant byte down
    for i in (0..32).rev() {
        if bytes[i] != field::MODULUS_LE[i] {
            return bytes[i] < field::MODULUS_LE[i];
        }
    }
    false // equal to the modulus is not canonical
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_small_decimal() {
        let bytes = parse_decimal_256("4200").unwrap();
        assert_eq!(bytes[0], 0x68);
        assert_eq!(bytes[1], 0x10);
        assert_eq!(&bytes[2..], &[0u8; 30]);
    }

    #[test]
    fn test_parse_zero_and_leading_zeros() {
        assert_eq!(parse_decimal_256("0").unwrap(), [0u8; 32]);
        assert_eq!(
            parse_decimal_256("000042").unwrap(),
            parse_decimal_256("42").unwrap()
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_decimal_256("").is_none());
        assert!(parse_decimal_256("12a4").is_none());
        assert!(parse_decimal_256("-5").is_none());
        assert!(parse_decimal_256(" 42").is_none());
    }

    #[test]
    fn test_parse_full_256_bit_range() {
        // 2^256 - 1 fits
        let max = "115792089237316195423570985008687907853269984665640564039457584007913129639935";
        assert_eq!(parse_decimal_256(max).unwrap(), [0xffu8; 32]);

        // 2^256 overflows
        let over = "115792089237316195423570985008687907853269984665640564039457584007913129639936";
        assert!(parse_decimal_256(over).is_none());
    }

    #[test]
    fn test_decimal_roundtrip() {
        for s in [
            "0",
            "1",
            "4200",
            "1000000",
            "26545513748775911233424851469484096799413741017006352456100547880447752952428",
        ] {
            let bytes = parse_decimal_256(s).unwrap();
            assert_eq!(decimal_256(&bytes), s);
        }
    }

    #[test]
    fn test_canonical_bounds() {
        assert!(is_canonical_field_bytes(&[0u8; 32]));

        // modulus - 1 is canonical
        let mut below = field::MODULUS_LE;
        below[0] -= 1;
        assert!(is_canonical_field_bytes(&below));

        // the modulus itself and anything above are not
        assert!(!is_canonical_field_bytes(&field::MODULUS_LE));
        assert!(!is_canonical_field_bytes(&[0xffu8; 32]));
    }
}
