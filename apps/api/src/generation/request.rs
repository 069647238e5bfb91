//! Request body for job description generation and its validation.

use serde_json::{Map, Value};

use crate::errors::AppError;

/// Raw request body. Values are kept as loose JSON so that validation, not
/// deserialization, decides what counts as missing.
#[derive(Debug)]
pub struct JobDescriptionRequest {
    pub location: Option<Value>,
    pub position: Option<Value>,
    pub engagement_type: Option<Value>,
    pub hours: Option<Value>,
    pub time_zone: Option<Value>,
    pub pay_rate: Option<Value>,
    pub responsibilities: Option<Value>,
    pub requirements: Option<Value>,
    pub benefits: Option<Value>,
    pub company_overview: Option<Value>,
}

/// A request whose ten fields are all present and truthy.
#[derive(Debug, Clone, PartialEq)]
pub struct JobPosting {
    pub location: String,
    pub position: String,
    pub engagement_type: String,
    pub hours: String,
    pub time_zone: String,
    pub pay_rate: String,
    pub responsibilities: String,
    pub requirements: String,
    pub benefits: String,
    pub company_overview: String,
}

impl JobDescriptionRequest {
    /// Builds the request from a parsed body. Only a JSON object is accepted.
    pub fn from_json(body: Value) -> Result<Self, AppError> {
        match body {
            Value::Object(map) => Ok(Self::from_object(map)),
            other => Err(AppError::Unexpected(format!(
                "Request body must be a JSON object, got {}",
                json_kind(&other)
            ))),
        }
    }

    /// Picks the ten known keys out of an object; other keys are ignored.
    pub fn from_object(mut map: Map<String, Value>) -> Self {
        Self {
            location: map.remove("location"),
            position: map.remove("position"),
            engagement_type: map.remove("engagementType"),
            hours: map.remove("hours"),
            time_zone: map.remove("timeZone"),
            pay_rate: map.remove("payRate"),
            responsibilities: map.remove("responsibilities"),
            requirements: map.remove("requirements"),
            benefits: map.remove("benefits"),
            company_overview: map.remove("companyOverview"),
        }
    }

    /// Fails with `AppError::MissingFields` if any field is absent or falsy.
    pub fn validate(self) -> Result<JobPosting, AppError> {
        Ok(JobPosting {
            location: required(self.location)?,
            position: required(self.position)?,
            engagement_type: required(self.engagement_type)?,
            hours: required(self.hours)?,
            time_zone: required(self.time_zone)?,
            pay_rate: required(self.pay_rate)?,
            responsibilities: required(self.responsibilities)?,
            requirements: required(self.requirements)?,
            benefits: required(self.benefits)?,
            company_overview: required(self.company_overview)?,
        })
    }
}

fn required(value: Option<Value>) -> Result<String, AppError> {
    match value {
        Some(v) if is_truthy(&v) => Ok(into_text(v)),
        _ => Err(AppError::MissingFields),
    }
}

/// null, false, zero, and empty strings/arrays/objects are falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Strings are used as-is. Other values get the same text a Python
/// f-string would produce (`True`, `['a', 'b']`, `{'k': None}`).
fn into_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => {
            let mut out = String::new();
            write_repr(&other, &mut out);
            out
        }
    }
}

fn write_repr(value: &Value, out: &mut String) {
    match value {
        Value::Null => out.push_str("None"),
        Value::Bool(true) => out.push_str("True"),
        Value::Bool(false) => out.push_str("False"),
        Value::Number(n) => out.push_str(&n.to_string()),
        Value::String(s) => write_str_repr(s, out),
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_repr(item, out);
            }
            out.push(']');
        }
        Value::Object(map) => {
            out.push('{');
            for (i, (key, item)) in map.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_str_repr(key, out);
                out.push_str(": ");
                write_repr(item, out);
            }
            out.push('}');
        }
    }
}

/// Single quotes unless the text holds a single quote and no double quote.
fn write_str_repr(s: &str, out: &mut String) {
    let quote = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };
    out.push(quote);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out.push(quote);
}
