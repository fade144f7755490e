//! Typed values coerced from raw tokens.
//!
//! Coercion is total: a token that matches none of the typed forms is kept
//! as text, since the builder knows each field's expected type by name.

use std::fmt;

/// A coerced field value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Quoted or unrecognised token: `"half1"`, `Point`
    Text(String),
    /// Comma separated list of integral numbers: `[0, 0]`
    IntegerList(Vec<i64>),
    /// Whitespace separated list: `[ 0.000000 -130.000000 0.000000 ]`
    FloatList(Vec<f64>),
    /// Any token containing a decimal point: `20.000000`
    Float(f64),
    /// Plain digits: `2`
    Integer(i64),
    /// `TRUE` / `FALSE`
    Boolean(bool),
}

impl Value {
    /// Numeric value of a float or integer.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Integer value; integral floats are accepted too.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            Value::Float(f) if f.fract() == 0.0 => Some(*f as i64),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Elements of either list form as floats.
    pub fn as_numbers(&self) -> Option<Vec<f64>> {
        match self {
            Value::FloatList(values) => Some(values.clone()),
            Value::IntegerList(values) => Some(values.iter().map(|&v| v as f64).collect()),
            _ => None,
        }
    }

    /// Elements of either list form as integers, if all are integral.
    pub fn as_integers(&self) -> Option<Vec<i64>> {
        match self {
            Value::IntegerList(values) => Some(values.clone()),
            Value::FloatList(values) => values
                .iter()
                .map(|v| (v.fract() == 0.0).then_some(*v as i64))
                .collect(),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => write!(f, "{}", s),
            Value::IntegerList(values) => write!(f, "{:?}", values),
            Value::FloatList(values) => write!(f, "{:?}", values),
            Value::Float(v) => write!(f, "{}", v),
            Value::Integer(v) => write!(f, "{}", v),
            Value::Boolean(true) => write!(f, "TRUE"),
            Value::Boolean(false) => write!(f, "FALSE"),
        }
    }
}

/// Convert a raw token into a typed value. First matching rule wins.
pub fn coerce(token: &str) -> Value {
    let token = token.trim();

    if token.starts_with('"') && token.ends_with('"') {
        return Value::Text(token.trim_matches('"').to_string());
    }

    if token.starts_with('[') && token.ends_with(']') {
        return coerce_list(token).unwrap_or_else(|| Value::Text(token.to_string()));
    }

    if token.contains('.') {
        return token
            .trim_matches('"')
            .parse::<f64>()
            .map(Value::Float)
            .unwrap_or_else(|_| Value::Text(token.to_string()));
    }

    match token {
        "TRUE" => return Value::Boolean(true),
        "FALSE" => return Value::Boolean(false),
        _ => {}
    }

    if !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()) {
        if let Ok(i) = token.parse::<i64>() {
            return Value::Integer(i);
        }
    }

    Value::Text(token.to_string())
}

/// Bracketed list. Comma separated lists narrow to integers when every
/// element is integral; whitespace separated lists are always floats.
fn coerce_list(token: &str) -> Option<Value> {
    let inner = token.trim_matches(|c| c == '[' || c == ']');

    if inner.contains(',') {
        let numbers = inner
            .replace(',', " ")
            .split_whitespace()
            .map(|t| t.parse::<f64>().ok())
            .collect::<Option<Vec<f64>>>()?;

        if numbers.iter().all(|n| n.fract() == 0.0) {
            return Some(Value::IntegerList(
                numbers.into_iter().map(|n| n as i64).collect(),
            ));
        }
        return Some(Value::FloatList(numbers));
    }

    inner
        .split_whitespace()
        .map(|t| t.parse::<f64>().ok())
        .collect::<Option<Vec<f64>>>()
        .map(Value::FloatList)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_quoted_text() {
        assert_eq!(coerce("\"cloud out small\""), Value::Text("cloud out small".into()));
        assert_eq!(coerce("\"\""), Value::Text(String::new()));
        assert_eq!(coerce("\"1.5\""), Value::Text("1.5".into()));
    }

    #[test]
    fn test_float_list() {
        assert_eq!(
            coerce("[ 0.000000 -130.000000 0.000000 ]"),
            Value::FloatList(vec![0.0, -130.0, 0.0])
        );
        assert_eq!(coerce("[]"), Value::FloatList(vec![]));
    }

    #[test]
    fn test_comma_list_narrows_to_integers() {
        assert_eq!(coerce("[0, 0]"), Value::IntegerList(vec![0, 0]));
        assert_eq!(coerce("[ 64,64 ]"), Value::IntegerList(vec![64, 64]));
        assert_eq!(coerce("[1.5, 2]"), Value::FloatList(vec![1.5, 2.0]));
    }

    #[test]
    fn test_unparseable_list_is_text() {
        assert_eq!(coerce("[a b]"), Value::Text("[a b]".into()));
    }

    #[test]
    fn test_numbers() {
        assert_eq!(coerce("20.000000"), Value::Float(20.0));
        assert_eq!(coerce("-0.500000"), Value::Float(-0.5));
        assert_eq!(coerce("12"), Value::Integer(12));
        assert_eq!(coerce("007"), Value::Integer(7));
    }

    #[test]
    fn test_booleans_are_case_sensitive() {
        assert_eq!(coerce("TRUE"), Value::Boolean(true));
        assert_eq!(coerce("FALSE"), Value::Boolean(false));
        assert_eq!(coerce("True"), Value::Text("True".into()));
    }

    #[test]
    fn test_fallback_is_text() {
        assert_eq!(coerce("Point"), Value::Text("Point".into()));
        assert_eq!(coerce("ff00ffff"), Value::Text("ff00ffff".into()));
        assert_eq!(coerce("-5"), Value::Text("-5".into()));
        assert_eq!(coerce("tex.dds"), Value::Text("tex.dds".into()));
        assert_eq!(coerce(""), Value::Text(String::new()));
    }

    #[test]
    fn test_accessors() {
        assert_eq!(Value::Integer(3).as_f64(), Some(3.0));
        assert_eq!(Value::Float(4.0).as_i64(), Some(4));
        assert_eq!(Value::Float(4.5).as_i64(), None);
        assert_eq!(Value::FloatList(vec![1.0, 2.0]).as_integers(), Some(vec![1, 2]));
        assert_eq!(Value::IntegerList(vec![1, 2]).as_numbers(), Some(vec![1.0, 2.0]));
        assert_eq!(Value::Text("x".into()).as_bool(), None);
    }
}
