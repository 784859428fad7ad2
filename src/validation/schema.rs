//! Declarative field schemas for untyped candidate payloads.
//!
//! A [`Schema`] enumerates, per field, the expected primitive kind and its
//! refinements. [`Schema::validate`] checks a raw `serde_json::Value` against
//! the declaration and either returns the record normalized to its declared
//! types or a [`Violations`] list covering every violated constraint. Pure
//! functions throughout; surfacing the failure is the caller's business.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Canonical date format for payload fields (ISO 8601 calendar date).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Field name used for violations about the payload as a whole.
const PAYLOAD_FIELD: &str = "payload";

/// Machine-readable code naming the violated constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstraintCode {
    /// Required field missing (or null).
    Required,
    /// Wrong primitive type.
    Type,
    /// Fractional number where an integer is required.
    Integer,
    /// Integer must be > 0.
    Positive,
    /// Number must be >= 0.
    NonNegative,
    /// Exact string length missed.
    Length,
    /// Minimum string length missed.
    MinLength,
    /// String is not a valid calendar date.
    Date,
}

impl ConstraintCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConstraintCode::Required => "required",
            ConstraintCode::Type => "type",
            ConstraintCode::Integer => "integer",
            ConstraintCode::Positive => "positive",
            ConstraintCode::NonNegative => "non_negative",
            ConstraintCode::Length => "length",
            ConstraintCode::MinLength => "min_length",
            ConstraintCode::Date => "date",
        }
    }
}

impl fmt::Display for ConstraintCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single violated field constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub field: String,
    pub code: ConstraintCode,
}

impl Violation {
    pub fn new(field: &str, code: ConstraintCode) -> Self {
        Violation {
            field: field.to_string(),
            code,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.code)
    }
}

/// Non-empty list of violations produced by a failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Violations(Vec<Violation>);

impl Violations {
    pub(crate) fn empty() -> Self {
        Violations(Vec::new())
    }

    pub(crate) fn single(violation: Violation) -> Self {
        Violations(vec![violation])
    }

    pub(crate) fn push(&mut self, violation: Violation) {
        self.0.push(violation);
    }

    pub(crate) fn extend(&mut self, other: Violations) {
        self.0.extend(other.0);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Violation> {
        self.0.iter()
    }

    /// True if the list contains a violation of `code` for `field`.
    pub fn contains(&self, field: &str, code: ConstraintCode) -> bool {
        self.0.iter().any(|v| v.field == field && v.code == code)
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for violation in &self.0 {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{}", violation)?;
            first = false;
        }
        Ok(())
    }
}

/// Expected primitive kind of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Integer,
    Number,
    Text,
    Date,
}

/// Declared shape of a single field: a primitive kind plus refinements.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    kind: FieldKind,
    positive: bool,
    non_negative: bool,
    exact_len: Option<usize>,
    min_len: Option<usize>,
}

impl FieldSpec {
    fn of(kind: FieldKind) -> Self {
        FieldSpec {
            kind,
            positive: false,
            non_negative: false,
            exact_len: None,
            min_len: None,
        }
    }

    pub fn integer() -> Self {
        Self::of(FieldKind::Integer)
    }

    pub fn number() -> Self {
        Self::of(FieldKind::Number)
    }

    pub fn text() -> Self {
        Self::of(FieldKind::Text)
    }

    /// A text field that must parse as a `%Y-%m-%d` calendar date.
    pub fn date() -> Self {
        Self::of(FieldKind::Date)
    }

    /// Integer refinement: value must be > 0.
    pub fn positive(mut self) -> Self {
        self.positive = true;
        self
    }

    /// Number refinement: value must be >= 0.
    pub fn non_negative(mut self) -> Self {
        self.non_negative = true;
        self
    }

    /// Text refinement: exact length in characters.
    pub fn length(mut self, len: usize) -> Self {
        self.exact_len = Some(len);
        self
    }

    /// Text refinement: minimum length in characters.
    pub fn min_length(mut self, len: usize) -> Self {
        self.min_len = Some(len);
        self
    }

    /// Check one value, returning it normalized to the declared type or the
    /// violated constraint codes.
    fn check(&self, value: &Value) -> Result<Value, Vec<ConstraintCode>> {
        match self.kind {
            FieldKind::Integer => self.check_integer(value).map(Value::from),
            FieldKind::Number => self.check_number(value),
            FieldKind::Text => self.check_text(value),
            FieldKind::Date => check_date(value),
        }
    }

    /// Integer check shared with [`positive_id`]. Integral floats such as
    /// `5.0` pass and normalize to `5`, matching how an untyped JSON boundary
    /// treats numbers.
    fn check_integer(&self, value: &Value) -> Result<i64, Vec<ConstraintCode>> {
        let number = match value {
            Value::Number(number) => number,
            _ => return Err(vec![ConstraintCode::Type]),
        };
        let integral = if let Some(n) = number.as_i64() {
            n
        } else if let Some(float) = number.as_f64() {
            if float.fract() == 0.0 && float >= i64::MIN as f64 && float <= i64::MAX as f64 {
                float as i64
            } else {
                return Err(vec![ConstraintCode::Integer]);
            }
        } else {
            // u64 beyond i64::MAX
            return Err(vec![ConstraintCode::Integer]);
        };
        if self.positive && integral <= 0 {
            return Err(vec![ConstraintCode::Positive]);
        }
        Ok(integral)
    }

    fn check_number(&self, value: &Value) -> Result<Value, Vec<ConstraintCode>> {
        let number = match value.as_f64() {
            Some(number) => number,
            None => return Err(vec![ConstraintCode::Type]),
        };
        if self.non_negative && number < 0.0 {
            return Err(vec![ConstraintCode::NonNegative]);
        }
        Ok(value.clone())
    }

    fn check_text(&self, value: &Value) -> Result<Value, Vec<ConstraintCode>> {
        let text = match value.as_str() {
            Some(text) => text,
            None => return Err(vec![ConstraintCode::Type]),
        };
        let mut codes = Vec::new();
        let chars = text.chars().count();
        if let Some(exact) = self.exact_len {
            if chars != exact {
                codes.push(ConstraintCode::Length);
            }
        }
        if let Some(min) = self.min_len {
            if chars < min {
                codes.push(ConstraintCode::MinLength);
            }
        }
        if codes.is_empty() {
            Ok(value.clone())
        } else {
            Err(codes)
        }
    }
}

fn check_date(value: &Value) -> Result<Value, Vec<ConstraintCode>> {
    let text = match value.as_str() {
        Some(text) => text,
        None => return Err(vec![ConstraintCode::Type]),
    };
    match NaiveDate::parse_from_str(text, DATE_FORMAT) {
        Ok(date) => Ok(Value::String(date.format(DATE_FORMAT).to_string())),
        Err(_) => Err(vec![ConstraintCode::Date]),
    }
}

/// Declarative shape of an entity payload: an ordered list of field specs.
#[derive(Debug, Clone)]
pub struct Schema {
    fields: Vec<(&'static str, FieldSpec)>,
}

impl Schema {
    pub fn new() -> Self {
        Schema { fields: Vec::new() }
    }

    /// Declare a required field.
    pub fn field(mut self, name: &'static str, spec: FieldSpec) -> Self {
        self.fields.push((name, spec));
        self
    }

    /// Validate a raw payload against this schema.
    ///
    /// On success returns the declared fields normalized to their declared
    /// types; undeclared input fields are stripped. On failure returns every
    /// violated constraint, not just the first.
    pub fn validate(&self, input: &Value) -> Result<Map<String, Value>, Violations> {
        let object = match input.as_object() {
            Some(object) => object,
            None => {
                return Err(Violations::single(Violation::new(
                    PAYLOAD_FIELD,
                    ConstraintCode::Type,
                )))
            }
        };

        let mut normalized = Map::new();
        let mut violations = Violations::empty();
        for (name, spec) in &self.fields {
            match object.get(*name) {
                None | Some(Value::Null) => {
                    violations.push(Violation::new(name, ConstraintCode::Required));
                }
                Some(value) => match spec.check(value) {
                    Ok(value) => {
                        normalized.insert((*name).to_string(), value);
                    }
                    Err(codes) => {
                        for code in codes {
                            violations.push(Violation::new(name, code));
                        }
                    }
                },
            }
        }

        if violations.is_empty() {
            Ok(normalized)
        } else {
            Err(violations)
        }
    }

    /// Validate and deserialize the normalized record into a typed draft.
    pub fn validate_into<T>(&self, input: &Value) -> Result<T, Violations>
    where
        T: for<'de> Deserialize<'de>,
    {
        let normalized = self.validate(input)?;
        serde_json::from_value(Value::Object(normalized)).map_err(|_| {
            Violations::single(Violation::new(PAYLOAD_FIELD, ConstraintCode::Type))
        })
    }
}

impl Default for Schema {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate a standalone identifier argument as a positive integer.
///
/// Used by operations that take raw id values instead of a payload record, so
/// zero, negative, and fractional ids are rejected before any repository call.
pub fn positive_id(field: &'static str, value: &Value) -> Result<i64, Violations> {
    FieldSpec::integer().positive().check_integer(value).map_err(|codes| {
        let mut violations = Violations::empty();
        for code in codes {
            violations.push(Violation::new(field, code));
        }
        violations
    })
}
