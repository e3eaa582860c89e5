//! Client-side validation of endpoint parameters.
//!
//! Endpoints check required fields and enum-constrained fields before any I/O.
//! Every violation is collected; nothing short-circuits, so a single
//! [`ValidationErrors`] names all offending fields at once.

use std::fmt;

use chrono::{DateTime, Utc};

/// What is wrong with a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// A required field was left empty or zero.
    Missing,
    /// A value outside the field's declared set.
    NotAllowed {
        value: String,
        allowed: &'static [&'static str],
    },
}

/// One field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Wire name of the field, e.g. `enrollment[type]`.
    pub field: String,
    pub violation: Violation,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.violation {
            Violation::Missing => write!(f, "{} is required", self.field),
            Violation::NotAllowed { value, allowed } => write!(
                f,
                "{} must be one of [{}], got '{}'",
                self.field,
                allowed.join(", "),
                value
            ),
        }
    }
}

/// All validation failures for one request. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    /// Field names in the order they were checked.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|e| e.field.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Values that can be "unset" without being wrapped in an `Option`.
///
/// A required field is blank when it holds the zero value of its type:
/// an empty string, a zero id, an empty list.
pub trait Blank {
    fn is_blank(&self) -> bool;
}

impl Blank for str {
    fn is_blank(&self) -> bool {
        self.trim().is_empty()
    }
}

impl Blank for String {
    fn is_blank(&self) -> bool {
        self.as_str().is_blank()
    }
}

impl Blank for i64 {
    fn is_blank(&self) -> bool {
        *self == 0
    }
}

impl Blank for f64 {
    fn is_blank(&self) -> bool {
        *self == 0.0
    }
}

impl Blank for DateTime<Utc> {
    fn is_blank(&self) -> bool {
        false
    }
}

impl<T> Blank for Vec<T> {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl<T: Blank> Blank for Option<T> {
    fn is_blank(&self) -> bool {
        self.as_ref().map_or(true, Blank::is_blank)
    }
}

/// Fields whose values are drawn from a fixed set of strings.
///
/// Yields every value present on the field; unset fields yield nothing.
pub trait EnumValues {
    fn enum_values(&self) -> Vec<&str>;
}

impl EnumValues for String {
    fn enum_values(&self) -> Vec<&str> {
        if self.is_blank() {
            Vec::new()
        } else {
            vec![self.as_str()]
        }
    }
}

impl EnumValues for Option<String> {
    fn enum_values(&self) -> Vec<&str> {
        self.as_ref().map(|v| v.enum_values()).unwrap_or_default()
    }
}

impl EnumValues for Vec<String> {
    fn enum_values(&self) -> Vec<&str> {
        self.iter().map(String::as_str).collect()
    }
}

/// Collects field errors for one request.
///
/// ```
/// use canvas_api::validation::Validator;
///
/// let result = Validator::new()
///     .required("enrollment[user_id]", &String::new())
///     .one_of("enrollment[type]", &"Nobody".to_string(), &["StudentEnrollment"])
///     .finish();
/// assert_eq!(result.unwrap_err().len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<FieldError>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flags `field` as missing when `value` is blank.
    pub fn required<V: Blank + ?Sized>(mut self, field: &str, value: &V) -> Self {
        if value.is_blank() {
            self.errors.push(FieldError {
                field: field.to_string(),
                violation: Violation::Missing,
            });
        }
        self
    }

    /// Flags each value of `field` that is not in `allowed`.
    pub fn one_of<V: EnumValues + ?Sized>(
        mut self,
        field: &str,
        value: &V,
        allowed: &'static [&'static str],
    ) -> Self {
        for v in value.enum_values() {
            if !allowed.contains(&v) {
                self.errors.push(FieldError {
                    field: field.to_string(),
                    violation: Violation::NotAllowed {
                        value: v.to_string(),
                        allowed,
                    },
                });
            }
        }
        self
    }

    pub fn finish(self) -> Result<(), ValidationErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(self.errors))
        }
    }
}
