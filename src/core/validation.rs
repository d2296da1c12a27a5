use once_cell::sync::Lazy;
use regex::Regex;

/// E.164-ish: optional `+`, no leading zero, 2 to 15 ASCII digits
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[1-9][0-9]{1,14}$").expect("phone pattern compiles"));

static OTP_CODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{6}$").expect("otp pattern compiles"));

/// Longest message body `/api/messages/send` accepts, in characters
pub const MAX_MESSAGE_CHARS: usize = 1000;

#[inline]
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
}

/// Any six ASCII digits count as a correct code
#[inline]
pub fn is_valid_otp_code(code: &str) -> bool {
    OTP_CODE_RE.is_match(code)
}

#[inline]
pub fn is_valid_message_text(text: &str) -> bool {
    text.chars().count() <= MAX_MESSAGE_CHARS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_formats() {
        assert!(is_valid_phone("+84912345678"));
        assert!(is_valid_phone("14155550123"));
        assert!(is_valid_phone("+12"));

        assert!(!is_valid_phone("+0912345678"));
        assert!(!is_valid_phone("+1"));
        assert!(!is_valid_phone("+1234567890123456"));
        assert!(!is_valid_phone("555-0123"));
        assert!(!is_valid_phone(""));
        assert!(!is_valid_phone("+1٢٣"));
    }

    #[test]
    fn test_otp_codes() {
        assert!(is_valid_otp_code("000000"));
        assert!(is_valid_otp_code("123456"));

        assert!(!is_valid_otp_code("12345"));
        assert!(!is_valid_otp_code("1234567"));
        assert!(!is_valid_otp_code("12a456"));
        assert!(!is_valid_otp_code(" 123456"));
        // Arabic-Indic and fullwidth digits are not ASCII
        assert!(!is_valid_otp_code("١٢٣٤٥٦"));
        assert!(!is_valid_otp_code("１２３４５６"));
    }

    #[test]
    fn test_message_length_counts_chars() {
        assert!(is_valid_message_text(""));
        assert!(is_valid_message_text(&"a".repeat(MAX_MESSAGE_CHARS)));
        assert!(!is_valid_message_text(&"a".repeat(MAX_MESSAGE_CHARS + 1)));
        // Multi-byte characters count once each
        assert!(is_valid_message_text(&"é".repeat(MAX_MESSAGE_CHARS)));
    }
}
