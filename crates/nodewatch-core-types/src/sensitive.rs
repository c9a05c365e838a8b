//! Sensitive data marker for automatic redaction
//!
//! Bearer tokens handed to the API proxy source travel through configuration
//! and `Debug` output of the source; wrapping them keeps them out of logs.

use std::fmt;

/// Wrapper for sensitive data that redacts itself in Debug and Display
///
/// # Example
///
/// ```
/// use nodewatch_core_types::Sensitive;
///
/// let token = Sensitive::new("sha256~abcdef");
/// assert_eq!(format!("{:?}", token), "***REDACTED***");
/// assert_eq!(format!("{}", token), "***REDACTED***");
///
/// assert_eq!(token.expose(), &"sha256~abcdef");
/// ```
pub struct Sensitive<T>(T);

impl<T> Sensitive<T> {
    /// Wrap a sensitive value
    pub fn new(value: T) -> Self {
        Self(value)
    }

    /// Expose the underlying sensitive value
    ///
    /// Only call this at the point the secret is actually handed to the
    /// transport (e.g. building an `Authorization` header).
    pub fn expose(&self) -> &T {
        &self.0
    }

    /// Consume the wrapper and return the inner value
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> fmt::Debug for Sensitive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "***REDACTED***")
    }
}

impl<T> fmt::Display for Sensitive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "***REDACTED***")
    }
}

impl<T: Clone> Clone for Sensitive<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sensitive_debug_redaction() {
        let token = Sensitive::new("sha256~secret-token");
        let debug_str = format!("{:?}", token);
        assert_eq!(debug_str, "***REDACTED***");
        assert!(!debug_str.contains("secret-token"));
    }

    #[test]
    fn test_sensitive_display_redaction() {
        let token = Sensitive::new("bearer-12345");
        assert_eq!(format!("{}", token), "***REDACTED***");
    }

    #[test]
    fn test_sensitive_into_inner() {
        let token = Sensitive::new(String::from("abc"));
        assert_eq!(token.into_inner(), "abc");
    }

    #[test]
    fn test_sensitive_inside_config_struct() {
        #[derive(Debug)]
        #[allow(dead_code)]
        struct ProxyConfig {
            base_url: String,
            token: Option<Sensitive<String>>,
        }

        let config = ProxyConfig {
            base_url: "http://127.0.0.1:8001".to_string(),
            token: Some(Sensitive::new("hunter2".to_string())),
        };

        let debug_str = format!("{:?}", config);
        assert!(debug_str.contains("127.0.0.1:8001"));
        assert!(debug_str.contains("***REDACTED***"));
        assert!(!debug_str.contains("hunter2"));
    }
}
