//! Typed field access over staged records.
//!
//! The staging model keeps every field as a [`Value`]; the builder knows the
//! expected type of each field by name. [`Fields`] turns a missing or
//! mistyped field into a located error instead of a silent default.

use crate::error::{FxError, Result};
use crate::parser::{Spanned, StagedRecord, Value};
use crate::types::{Range, Vec3};

/// Borrowed view of a staged record with typed getters.
pub struct Fields<'a> {
    record: &'a StagedRecord,
}

impl<'a> Fields<'a> {
    pub fn new(record: &'a StagedRecord) -> Self {
        Self { record }
    }

    pub fn record(&self) -> &'a StagedRecord {
        self.record
    }

    fn required(&self, key: &str) -> Result<&'a Spanned<Value>> {
        self.record.get(key).ok_or_else(|| FxError::MissingField {
            record: self.record.label(),
            field: key.to_string(),
            line: self.record.kind.line,
        })
    }

    fn invalid(key: &str, expected: &str, line: usize) -> FxError {
        FxError::InvalidValue {
            field: key.to_string(),
            expected: expected.to_string(),
            line,
        }
    }

    pub fn f64(&self, key: &str) -> Result<f64> {
        let field = self.required(key)?;
        field
            .value
            .as_f64()
            .ok_or_else(|| Self::invalid(key, "a number", field.line))
    }

    pub fn opt_f64(&self, key: &str) -> Result<Option<f64>> {
        if self.record.contains(key) {
            self.f64(key).map(Some)
        } else {
            Ok(None)
        }
    }

    pub fn i64(&self, key: &str) -> Result<i64> {
        let field = self.required(key)?;
        field
            .value
            .as_i64()
            .ok_or_else(|| Self::invalid(key, "an integer", field.line))
    }

    pub fn opt_i64(&self, key: &str) -> Result<Option<i64>> {
        if self.record.contains(key) {
            self.i64(key).map(Some)
        } else {
            Ok(None)
        }
    }

    pub fn bool(&self, key: &str) -> Result<bool> {
        let field = self.required(key)?;
        field
            .value
            .as_bool()
            .ok_or_else(|| Self::invalid(key, "TRUE or FALSE", field.line))
    }

    /// A text field. Numbers are rendered back to text, so an unquoted
    /// name like `12` is still accepted.
    pub fn text(&self, key: &str) -> Result<String> {
        let field = self.required(key)?;
        match &field.value {
            Value::Text(s) => Ok(s.clone()),
            Value::Integer(i) => Ok(i.to_string()),
            Value::Float(f) => Ok(f.to_string()),
            _ => Err(Self::invalid(key, "text", field.line)),
        }
    }

    pub fn opt_text(&self, key: &str) -> Result<Option<String>> {
        if self.record.contains(key) {
            self.text(key).map(Some)
        } else {
            Ok(None)
        }
    }

    /// A hex colour such as `ffff8000`. All-digit colours were coerced to
    /// integers and are padded back to eight digits.
    pub fn color(&self, key: &str) -> Result<String> {
        let field = self.required(key)?;
        match &field.value {
            Value::Text(s) => Ok(s.clone()),
            Value::Integer(i) => Ok(format!("{:08}", i)),
            _ => Err(Self::invalid(key, "a colour", field.line)),
        }
    }

    pub fn vec3(&self, key: &str) -> Result<Vec3> {
        let field = self.required(key)?;
        match field.value.as_numbers().as_deref() {
            Some(&[x, y, z]) => Ok(Vec3::new(x, y, z)),
            _ => Err(Self::invalid(key, "a 3-vector", field.line)),
        }
    }

    pub fn opt_vec3(&self, key: &str) -> Result<Option<Vec3>> {
        if self.record.contains(key) {
            self.vec3(key).map(Some)
        } else {
            Ok(None)
        }
    }

    pub fn integers(&self, key: &str) -> Result<Vec<i64>> {
        let field = self.required(key)?;
        field
            .value
            .as_integers()
            .ok_or_else(|| Self::invalid(key, "a list of integers", field.line))
    }

    /// Line a field was read from, or the record's own line when absent.
    pub fn line_of(&self, key: &str) -> usize {
        self.record
            .get(key)
            .map(|field| field.line)
            .unwrap_or(self.record.kind.line)
    }

    /// A numeric enumeration code decoded with `decode`.
    pub fn code<T>(
        &self,
        key: &str,
        what: &'static str,
        decode: impl FnOnce(i64) -> Option<T>,
    ) -> Result<T> {
        let code = self.i64(key)?;
        decode(code).ok_or_else(|| FxError::UnknownKind {
            what,
            value: code.to_string(),
            line: self.line_of(key),
        })
    }

    /// A scalar field as a degenerate range.
    pub fn splat(&self, key: &str) -> Result<Range> {
        self.f64(key).map(Range::splat)
    }

    pub fn opt_splat(&self, key: &str) -> Result<Option<Range>> {
        self.opt_f64(key).map(|v| v.map(Range::splat))
    }

    /// Two scalar fields as one range.
    pub fn range(&self, min_key: &str, max_key: &str) -> Result<Range> {
        Ok(Range::new(self.f64(min_key)?, self.f64(max_key)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::coerce;

    fn record(fields: &[(&str, &str)]) -> StagedRecord {
        let mut record = StagedRecord::new("Point", 7);
        for (index, (key, raw)) in fields.iter().enumerate() {
            record.insert(*key, coerce(raw), 8 + index);
        }
        record
    }

    #[test]
    fn test_missing_field_reports_record() {
        let staged = record(&[("Name", "\"half1\"")]);
        let fields = Fields::new(&staged);

        match fields.f64("EmitRate") {
            Err(FxError::MissingField {
                record,
                field,
                line,
            }) => {
                assert_eq!(record, "Point \"half1\"");
                assert_eq!(field, "EmitRate");
                assert_eq!(line, 7);
            }
            other => panic!("expected missing field, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_value_reports_line() {
        let staged = record(&[("EmitRate", "fast")]);
        match Fields::new(&staged).f64("EmitRate") {
            Err(FxError::InvalidValue { line, .. }) => assert_eq!(line, 8),
            other => panic!("expected invalid value, got {:?}", other),
        }
    }

    #[test]
    fn test_numbers_accept_integers() {
        let staged = record(&[("EmitRate", "20"), ("StartTime", "0.500000")]);
        let fields = Fields::new(&staged);

        assert_eq!(fields.splat("EmitRate").unwrap(), Range::splat(20.0));
        assert_eq!(fields.f64("StartTime").unwrap(), 0.5);
        assert_eq!(fields.opt_f64("AngleVariance").unwrap(), None);
    }

    #[test]
    fn test_color_padding() {
        let staged = record(&[("StartColor", "ff804020"), ("EndColor", "00000000")]);
        let fields = Fields::new(&staged);

        assert_eq!(fields.color("StartColor").unwrap(), "ff804020");
        assert_eq!(fields.color("EndColor").unwrap(), "00000000");
    }

    #[test]
    fn test_unknown_code() {
        let staged = record(&[("ParticleFacing", "7")]);
        let result = Fields::new(&staged).code("ParticleFacing", "facing type", |c| {
            (c < 3).then_some(c)
        });

        match result {
            Err(FxError::UnknownKind { what, value, line }) => {
                assert_eq!(what, "facing type");
                assert_eq!(value, "7");
                assert_eq!(line, 8);
            }
            other => panic!("expected unknown kind, got {:?}", other),
        }
    }

    #[test]
    fn test_vec3() {
        let staged = record(&[
            ("Position", "[ 0.000000 -130.000000 0.000000 ]"),
            ("Point", "[ 1.0 2.0 ]"),
        ]);
        let fields = Fields::new(&staged);

        assert_eq!(fields.vec3("Position").unwrap(), Vec3::new(0.0, -130.0, 0.0));
        assert!(matches!(
            fields.vec3("Point"),
            Err(FxError::InvalidValue { .. })
        ));
        assert_eq!(fields.opt_vec3("Direction").unwrap(), None);
    }
}
