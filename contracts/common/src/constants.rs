//! Protocol Constants
//!
//! All fixed values for the price-attestor contracts. The cryptographic
//! constants are those of Ed25519; the signed message domain is the curve's
//! base field.

/// Field domain of signed values
pub mod field {
    /// The Ed25519 base-field modulus `2^255 - 19`, little-endian.
    ///
    /// A canonical field element is strictly less than this value. Price and
    /// timestamp must both be canonical; signature components are exempt
    /// (an encoded curve point uses the top bit for the sign of x).
    pub const MODULUS_LE: [u8; 32] = [
        0xed, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x7f,
    ];

    /// Bit width of a canonical field element
    pub const BITS: u32 = 255;

    /// Serialized width of a field element in bytes
    pub const ELEMENT_LEN: usize = 32;

    /// Upper bound on decimal digits of a 256-bit integer (`2^256 < 10^78`)
    pub const MAX_DECIMAL_DIGITS: usize = 78;
}

/// Signature scheme parameters (Ed25519)
pub mod signature {
    /// Compressed public key length in bytes
    pub const PUBLIC_KEY_LEN: usize = 32;

    /// Detached signature length in bytes (`R || s`)
    pub const SIGNATURE_LEN: usize = 64;

    /// Signed message length: price and timestamp field elements, in order
    pub const MESSAGE_LEN: usize = 64;
}

/// Genesis state
pub mod genesis {
    /// Committed value immediately after initialization
    pub const INITIAL_VALUE: u64 = 0;
}
