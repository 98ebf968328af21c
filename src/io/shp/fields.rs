use crate::io::error::Error;
use shapefile::dbase::{FieldValue, Record};

/// Typed access to one feature's attribute row.
///
/// Every accessor fails with an error naming the column and the feature index
/// instead of surfacing a bare lookup failure.
pub struct Attributes<'a> {
    feature: usize,
    record: &'a Record,
}

impl<'a> Attributes<'a> {
    pub fn new(feature: usize, record: &'a Record) -> Self {
        Self { feature, record }
    }

    #[inline]
    pub fn feature(&self) -> usize {
        self.feature
    }

    fn value(&self, field: &str) -> Result<&'a FieldValue, Error> {
        self.record.get(field).ok_or_else(|| Error::MissingField {
            feature: self.feature,
            field: field.to_string(),
        })
    }

    fn missing_value(&self, field: &str) -> Error {
        Error::MissingValue {
            feature: self.feature,
            field: field.to_string(),
        }
    }

    fn wrong_type(&self, field: &str, expected: &'static str, found: &FieldValue) -> Error {
        Error::FieldType {
            feature: self.feature,
            field: field.to_string(),
            expected,
            found: format!("{:?}", found),
        }
    }

    /// Text column. Numeric identifiers are accepted and rendered without a
    /// fractional part when integral, so `src_id = 1` reads as `"1"`.
    pub fn string(&self, field: &str) -> Result<String, Error> {
        match self.value(field)? {
            FieldValue::Character(Some(s)) => Ok(s.trim().to_string()),
            FieldValue::Memo(s) => Ok(s.trim().to_string()),
            FieldValue::Character(None) => Err(self.missing_value(field)),
            other => match numeric(other) {
                Some(Some(v)) => Ok(format_number(v)),
                Some(None) => Err(self.missing_value(field)),
                None => Err(self.wrong_type(field, "text", other)),
            },
        }
    }

    pub fn float(&self, field: &str) -> Result<f64, Error> {
        let value = self.value(field)?;
        match numeric(value) {
            Some(Some(v)) => Ok(v),
            Some(None) => Err(self.missing_value(field)),
            None => match value {
                FieldValue::Character(Some(s)) => s
                    .trim()
                    .parse::<f64>()
                    .map_err(|_| self.wrong_type(field, "a number", value)),
                FieldValue::Character(None) => Err(self.missing_value(field)),
                _ => Err(self.wrong_type(field, "a number", value)),
            },
        }
    }

    /// Non-negative integral column such as `num_npd`.
    pub fn count(&self, field: &str) -> Result<usize, Error> {
        let value = self.value(field)?;
        if let FieldValue::Integer(i) = value {
            return usize::try_from(*i)
                .map_err(|_| self.wrong_type(field, "a non-negative integer", value));
        }

        let v = self.float(field)?;
        if v < 0.0 || v.fract() != 0.0 || !v.is_finite() {
            return Err(self.wrong_type(field, "a non-negative integer", value));
        }
        Ok(v as usize)
    }

    /// Column name with a 1-based suffix, e.g. `strike_1`.
    pub fn indexed(prefix: &str, idx: usize) -> String {
        format!("{}_{}", prefix, idx)
    }
}

/// `Some(Some(v))` for a filled numeric cell, `Some(None)` for a null one,
/// `None` when the cell is not numeric at all.
fn numeric(value: &FieldValue) -> Option<Option<f64>> {
    match value {
        FieldValue::Numeric(v) => Some(*v),
        FieldValue::Float(v) => Some(v.map(f64::from)),
        FieldValue::Double(v) => Some(Some(*v)),
        FieldValue::Integer(v) => Some(Some(f64::from(*v))),
        FieldValue::Currency(v) => Some(Some(*v)),
        _ => None,
    }
}

fn format_number(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        v.to_string()
    }
}
