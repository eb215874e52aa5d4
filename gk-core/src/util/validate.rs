pub fn is_valid_email(email: &str) -> bool {
    fast_chemail::is_valid_email(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_email() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("foo"));
        assert!(!is_valid_email("foo@"));
        assert!(is_valid_email("foo@bar.tld"));
    }
}
