//! Deterministic rolling hash for stable thumbnail selection

/// Compute a 32-bit rolling hash over the UTF-16 code units of the input.
///
/// Each step multiplies by 31 and adds the next code unit with explicit
/// wraparound, so the same URL always maps to the same value regardless
/// of platform integer width.
pub fn rolling_hash(input: &str) -> i32 {
    let mut hash: i32 = 0;
    for unit in input.encode_utf16() {
        hash = hash.wrapping_mul(31).wrapping_add(unit as i32);
    }
    hash
}

/// Map a hash value into a bucket index of the given size
pub fn hash_bucket(hash: i32, bucket: u32) -> u32 {
    hash.unsigned_abs() % bucket
}
