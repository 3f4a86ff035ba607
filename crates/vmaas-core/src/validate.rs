use crate::error::Error;

/// Argument checks run before any request is built.
pub trait Validate {
    fn validate(&self) -> Result<(), Error>;
}

/// Borrow a required option, or fail naming the field.
pub fn required<'a, T>(value: Option<&'a T>, field: &str) -> Result<&'a T, Error> {
    value.ok_or_else(|| Error::validation(format!("{field} is a required field")))
}
