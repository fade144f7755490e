//! Source line tracking for error messages.

/// A value with the 1-indexed source line it was read from.
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned<T> {
    pub value: T,
    /// Line number (1-indexed, physical)
    pub line: usize,
}

impl<T> Spanned<T> {
    pub fn new(value: T, line: usize) -> Self {
        Self { value, line }
    }
}

impl<T: Default> Default for Spanned<T> {
    fn default() -> Self {
        Self {
            value: T::default(),
            line: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_line() {
        let spanned: Spanned<String> = Spanned::default();
        assert_eq!(spanned, Spanned::new(String::new(), 0));
    }
}
