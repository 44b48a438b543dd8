use rand::Rng;

/// Generate a random hex hash of the specified length
///
/// Generates random bytes and hex-encodes them directly, returning the first
/// `length` hex characters. This is used for generating unique group and card
/// ids.
pub fn generate_hash(length: usize) -> String {
    // Each byte produces 2 hex characters, so we need ceil(length / 2) bytes
    let num_bytes = length.div_ceil(2);
    let mut buf = vec![0u8; num_bytes];
    rand::rng().fill(&mut buf[..]);
    let hex: String = buf.iter().map(|b| format!("{b:02x}")).collect();
    hex[..length].to_string()
}

/// Generate an entity id from a kind prefix (e.g. `g_` -> `g_7f3a2c`).
///
/// The prefix is the entity's runtime type tag; it must be one of the
/// prefixes in [`crate::types`].
pub fn make_id(prefix: &str) -> String {
    format!("{}{}", prefix, generate_hash(6))
}
