//! Random placeholders handed out in place of real identifiers and credentials.
//!
//! Nothing generated here is stored or checked again; callers may only rely
//! on the prefix and alphabet.

use rand::Rng;
use uuid::Uuid;

use crate::models::TokenPair;

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

pub const USER_ID_LEN: usize = 9;
pub const TOKEN_LEN: usize = 20;

/// Lowercase base36 string of `len` characters
pub fn random_base36(len: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect()
}

pub fn user_id() -> String {
    format!("user_{}", random_base36(USER_ID_LEN))
}

pub fn access_token() -> String {
    format!("access_{}", random_base36(TOKEN_LEN))
}

pub fn refresh_token() -> String {
    format!("refresh_{}", random_base36(TOKEN_LEN))
}

pub fn token_pair() -> TokenPair {
    TokenPair {
        access_token: access_token(),
        refresh_token: refresh_token(),
    }
}

/// Six-digit code without a leading zero
pub fn otp_code() -> String {
    rand::thread_rng().gen_range(100_000..=999_999u32).to_string()
}

pub fn match_id() -> String {
    format!("match_{}", Uuid::new_v4().simple())
}

pub fn message_id() -> String {
    format!("msg_{}", Uuid::new_v4().simple())
}

/// Fair coin used for swipe outcomes
pub fn coin_flip() -> bool {
    rand::thread_rng().gen_bool(0.5)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_base36(s: &str) -> bool {
        s.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase())
    }

    #[test]
    fn test_user_id_shape() {
        let id = user_id();
        let suffix = id.strip_prefix("user_").unwrap();
        assert_eq!(suffix.len(), USER_ID_LEN);
        assert!(is_base36(suffix));
    }

    #[test]
    fn test_token_pair_shape() {
        let pair = token_pair();
        let access = pair.access_token.strip_prefix("access_").unwrap();
        let refresh = pair.refresh_token.strip_prefix("refresh_").unwrap();
        assert_eq!(access.len(), TOKEN_LEN);
        assert_eq!(refresh.len(), TOKEN_LEN);
        assert!(is_base36(access) && is_base36(refresh));
    }

    #[test]
    fn test_otp_code_range() {
        for _ in 0..200 {
            let code = otp_code();
            assert_eq!(code.len(), 6);
            let n: u32 = code.parse().unwrap();
            assert!((100_000..=999_999).contains(&n));
        }
    }

    #[test]
    fn test_prefixed_uuids() {
        assert!(match_id().starts_with("match_"));
        let id = message_id();
        assert_eq!(id.len(), "msg_".len() + 32);
    }

    #[test]
    fn test_coin_flip_lands_both_ways() {
        let flips: Vec<bool> = (0..200).map(|_| coin_flip()).collect();
        assert!(flips.iter().any(|&f| f));
        assert!(flips.iter().any(|&f| !f));
    }
}
