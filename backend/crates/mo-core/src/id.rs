use rand::Rng;

/// Number of symbols in every generated identifier
pub const ID_LENGTH: usize = 32;

/// URL-safe alphabet, 64 symbols so every draw carries 6 bits of entropy
pub const ID_ALPHABET: &[u8; 64] =
    b"_-0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Generate an unpredictable fixed-length identifier.
///
/// Used both for identity ids and for revocation version stamps. Draws from
/// the thread-local CSPRNG.
pub fn generate_id() -> String {
    let mut rng = rand::rng();

    (0..ID_LENGTH)
        .map(|_| ID_ALPHABET[rng.random_range(0..ID_ALPHABET.len())] as char)
        .collect()
}
