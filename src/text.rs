//! Small string utilities

/// Returns true if `s` reads the same forward and backward, character by
/// character. The empty string is a palindrome.
///
/// Comparison is exact: case, whitespace and punctuation all count.
pub fn is_palindrome(s: &str) -> bool {
    s.chars().eq(s.chars().rev())
}

/// Characters of `s` in reverse order
pub fn reverse(s: &str) -> String {
    s.chars().rev().collect()
}

/// Palindrome check as a method on anything string-like
///
/// ```rust
/// use percent_template::Palindrome;
///
/// assert!("racecar".is_palindrome());
/// assert!(!String::from("hello, world!").is_palindrome());
/// ```
pub trait Palindrome {
    fn is_palindrome(&self) -> bool;
}

impl<T: AsRef<str> + ?Sized> Palindrome for T {
    fn is_palindrome(&self) -> bool {
        crate::text::is_palindrome(self.as_ref())
    }
}
