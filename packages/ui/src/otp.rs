//! One-time-code input: digits only, capped at six.

use dioxus::prelude::*;

pub const OTP_LEN: usize = 6;

/// Strip non-digits and cap at [`OTP_LEN`].
pub fn sanitize_otp(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit())
        .take(OTP_LEN)
        .collect()
}

/// A sanitized code is submittable only at full length.
pub fn is_complete_otp(code: &str) -> bool {
    code.len() == OTP_LEN && code.chars().all(|c| c.is_ascii_digit())
}

/// Controlled six-digit code input.
#[component]
pub fn OtpInput(value: String, oninput: EventHandler<String>) -> Element {
    rsx! {
        input {
            class: "otp-input",
            r#type: "text",
            inputmode: "numeric",
            autocomplete: "one-time-code",
            maxlength: "6",
            placeholder: "000000",
            value: "{value}",
            oninput: move |evt: FormEvent| oninput.call(sanitize_otp(&evt.value())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_strips_non_digits() {
        assert_eq!(sanitize_otp("12a3-4 5"), "12345");
        assert_eq!(sanitize_otp("abc"), "");
    }

    #[test]
    fn test_sanitize_caps_at_six() {
        assert_eq!(sanitize_otp("1234567890"), "123456");
    }

    #[test]
    fn test_incomplete_code_not_submittable() {
        assert!(!is_complete_otp(""));
        assert!(!is_complete_otp("12345"));
        assert!(is_complete_otp("123456"));
    }
}
