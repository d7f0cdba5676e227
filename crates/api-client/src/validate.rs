//! Request precondition checks
//!
//! Every mutating request implements [`Validate`]. A validator inspects only
//! its own fields, in declaration order, and reports the first violation.
//! Absent requests (`None`) always yield [`ValidationError::NilRequest`].
//!
//! # Example
//!
//! ```rust
//! use crowdin_api_client::model::branches::BranchesAddRequest;
//! use crowdin_api_client::Validate;
//!
//! let req = BranchesAddRequest::default();
//! assert_eq!(req.validate().unwrap_err().to_string(), "name is required");
//!
//! let missing: Option<&BranchesAddRequest> = None;
//! assert_eq!(missing.validate().unwrap_err().to_string(), "request cannot be nil");
//! ```

use crate::error::ValidationError;

/// Capability of checking a request before it is sent.
pub trait Validate {
    /// Return the first unmet precondition, if any
    fn validate(&self) -> Result<(), ValidationError>;
}

impl<T: Validate> Validate for Option<T> {
    fn validate(&self) -> Result<(), ValidationError> {
        match self {
            Some(inner) => inner.validate(),
            None => Err(ValidationError::NilRequest),
        }
    }
}

impl<T: Validate + ?Sized> Validate for &T {
    fn validate(&self) -> Result<(), ValidationError> {
        (**self).validate()
    }
}

impl<T: Validate + ?Sized> Validate for Box<T> {
    fn validate(&self) -> Result<(), ValidationError> {
        (**self).validate()
    }
}

/// Validate a nested payload that must be present.
///
/// Returns `"<field> is required"` when absent, otherwise the payload's own
/// result.
pub(crate) fn nested<T: Validate>(field: &str, value: Option<&T>) -> Result<(), ValidationError> {
    match value {
        Some(inner) => inner.validate(),
        None => Err(ValidationError::required(field)),
    }
}

/// Validate a nested payload only when it is present.
pub(crate) fn optional<T: Validate>(value: Option<&T>) -> Result<(), ValidationError> {
    value.map_or(Ok(()), Validate::validate)
}

/// Check that `value` is one of `allowed`, reporting `invalid <what>: "<value>"`.
pub(crate) fn one_of(what: &str, value: &str, allowed: &[&str]) -> Result<(), ValidationError> {
    if allowed.contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::invalid(what, value))
    }
}

/// Like [`one_of`] but skips absent or empty values.
pub(crate) fn one_of_opt(
    what: &str,
    value: Option<&str>,
    allowed: &[&str],
) -> Result<(), ValidationError> {
    match value {
        Some(v) if !v.is_empty() => one_of(what, v, allowed),
        _ => Ok(()),
    }
}

/// Check an optional numeric field against an inclusive range.
pub(crate) fn in_range<T>(field: &str, value: Option<T>, min: i64, max: i64) -> Result<(), ValidationError>
where
    T: Into<i64> + Copy,
{
    match value.map(Into::into) {
        Some(v) if v < min || v > max => Err(ValidationError::out_of_range(field, min, max)),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Named(&'static str);

    impl Validate for Named {
        fn validate(&self) -> Result<(), ValidationError> {
            if self.0.is_empty() {
                return Err(ValidationError::required("name"));
            }
            Ok(())
        }
    }

    #[test]
    fn test_option_none_is_nil_request() {
        let req: Option<Named> = None;
        assert_eq!(req.validate(), Err(ValidationError::NilRequest));

        let req: Option<&Named> = None;
        assert_eq!(req.validate(), Err(ValidationError::NilRequest));
    }

    #[test]
    fn test_option_some_delegates() {
        assert!(Some(Named("x")).validate().is_ok());
        assert_eq!(
            Some(&Named("")).validate(),
            Err(ValidationError::required("name"))
        );
        assert!(Box::new(Named("x")).validate().is_ok());
    }

    #[test]
    fn test_nested_requires_presence() {
        assert_eq!(
            nested::<Named>("config", None),
            Err(ValidationError::required("config"))
        );
        assert!(nested("config", Some(&Named("x"))).is_ok());
        assert!(optional::<Named>(None).is_ok());
    }

    #[test]
    fn test_one_of() {
        assert!(one_of("op", "add", &["add", "remove"]).is_ok());
        assert_eq!(
            one_of("op", "move", &["add", "remove"]).unwrap_err().to_string(),
            "invalid op: \"move\""
        );
        assert!(one_of_opt("op", None, &["add"]).is_ok());
        assert!(one_of_opt("op", Some(""), &["add"]).is_ok());
    }

    #[test]
    fn test_in_range() {
        assert!(in_range("escapeQuotes", Some(3u8), 0, 3).is_ok());
        assert!(in_range::<u8>("escapeQuotes", None, 0, 3).is_ok());
        assert_eq!(
            in_range("escapeQuotes", Some(4u8), 0, 3).unwrap_err().to_string(),
            "escapeQuotes must be between 0 and 3"
        );
        assert!(in_range("lengthTransformation", Some(-51i32), -50, 100).is_err());
    }
}
