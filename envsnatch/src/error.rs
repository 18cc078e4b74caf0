use std::{error::Error as StdError, fmt};

/// Why a field could not be bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reason {
    /// The source key was absent and the field isn't optional.
    Required,
}

impl Reason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Required => "required",
        }
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single field that failed to bind.
///
/// `field` is the source key from the field's tag, not the struct field name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingError {
    field: String,
    reason: Reason,
}

impl BindingError {
    pub(crate) fn required(field: &str) -> Self {
        Self {
            field: field.to_owned(),
            reason: Reason::Required,
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn reason(&self) -> Reason {
        self.reason
    }
}

impl fmt::Display for BindingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' is {}", self.field, self.reason)
    }
}

impl StdError for BindingError {}

/// Every field that failed during one call to [`Binder::bind`].
///
/// Binding doesn't stop at the first missing variable, so this carries the
/// whole list in field declaration order.
///
/// # Display Format
///
/// ```text
/// failed to bind, 2 errors:
///   1. 'DATABASE_URL' is required
///   2. 'PORT' is required
/// ```
///
/// [`Binder::bind`]: crate::Binder::bind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindErrors(Vec<BindingError>);

impl BindErrors {
    pub(crate) fn new(errors: Vec<BindingError>) -> Self {
        Self(errors)
    }

    pub fn errors(&self) -> &[BindingError] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BindingError> {
        self.0.iter()
    }

    pub fn into_inner(self) -> Vec<BindingError> {
        self.0
    }
}

impl IntoIterator for BindErrors {
    type Item = BindingError;
    type IntoIter = std::vec::IntoIter<BindingError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a BindErrors {
    type Item = &'a BindingError;
    type IntoIter = std::slice::Iter<'a, BindingError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for BindErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.len() {
            1 => writeln!(f, "failed to bind, 1 error:")?,
            n => writeln!(f, "failed to bind, {n} errors:")?,
        }

        for (i, error) in self.0.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl StdError for BindErrors {}
