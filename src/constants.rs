// src/constants.rs

/// The symbols random identifiers are drawn from: lowercase alphanumerics only,
/// so every generated string is valid inside a DNS-1035 label.
pub const ID_ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// The number of bits used to represent one alphabet index (2^6 = 64 >= 36).
pub const ID_INDEX_BITS: u32 = 6;

/// All 1-bits, as many as `ID_INDEX_BITS`.
pub const ID_INDEX_MASK: u64 = (1 << ID_INDEX_BITS) - 1;

/// The number of alphabet indices that fit in one 63-bit random draw.
pub const ID_INDICES_PER_DRAW: u32 = 63 / ID_INDEX_BITS;

/// The JSON indentation used when pretty-formatting values.
pub const PRETTY_INDENT: &str = "  ";
