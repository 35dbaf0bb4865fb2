use rand::{Rng, RngCore};

/// Generate a session token: 32 random bytes, hex-encoded to 64 lower-case
/// characters. `rand::rng()` is a CSPRNG, which the token depends on as the
/// sole bearer credential.
pub fn generate_session_token() -> String {
    let mut bytes = [0u8; 32];
    rand::rng().fill_bytes(&mut bytes);
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

/// Generate a 6-digit verification code, uniform over [100000, 999999].
pub fn generate_verification_code() -> String {
    format!("{:06}", rand::rng().random_range(100_000..=999_999))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn session_token_is_64_lowercase_hex_chars() {
        let token = generate_session_token();
        assert_eq!(token.len(), 64);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn session_tokens_do_not_collide() {
        let tokens: HashSet<String> = (0..10_000).map(|_| generate_session_token()).collect();
        assert_eq!(tokens.len(), 10_000);
    }

    #[test]
    fn verification_code_is_6_digits_in_range() {
        for _ in 0..1_000 {
            let code = generate_verification_code();
            assert_eq!(code.len(), 6);
            let value: u32 = code.parse().unwrap();
            assert!((100_000..=999_999).contains(&value));
        }
    }
}
