use crate::types::IntrinsicFunction;
use thiserror::Error;

/// Errors raised while converting, recognizing or generating CloudFormation values.
#[derive(Debug, Error)]
pub enum Error {
    /// The primitive has no `Value` counterpart (e.g. `null`).
    #[error("cannot handle type `{0}`")]
    UnsupportedType(String),

    /// An intrinsic function call is a single-key object.
    #[error("map must contain one key, found {0}")]
    KeyCount(usize),

    /// The single key is not one of the intrinsic function names.
    #[error("map didn't contain intrinsic function key, found `{0}`")]
    UnknownFunction(String),

    /// A recognized intrinsic function whose arguments have the wrong shape.
    #[error("cannot parse {function} arguments: {reason}")]
    MalformedIntrinsic {
        function: IntrinsicFunction,
        reason: String,
    },

    /// The resource specification names a type the generator cannot map.
    #[error("unsupported property type `{kind}` for `{property}`")]
    UnsupportedPropertyType { property: String, kind: String },

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// True when the failure only means "this object is not an intrinsic call",
    /// in which case callers keep the object as an opaque map.
    pub fn is_not_intrinsic(&self) -> bool {
        matches!(self, Error::KeyCount(_) | Error::UnknownFunction(_))
    }

    pub(crate) fn malformed(function: IntrinsicFunction, reason: impl Into<String>) -> Self {
        Error::MalformedIntrinsic {
            function,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_not_intrinsic_classification() {
        assert!(Error::KeyCount(2).is_not_intrinsic());
        assert!(Error::UnknownFunction("Foo".to_owned()).is_not_intrinsic());
        assert!(!Error::UnsupportedType("null".to_owned()).is_not_intrinsic());
        assert!(!Error::malformed(IntrinsicFunction::Join, "expected a list").is_not_intrinsic());
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            Error::UnsupportedType("null".to_owned()).to_string(),
            "cannot handle type `null`"
        );
        assert_eq!(
            Error::malformed(IntrinsicFunction::Join, "expected 2 elements, found 1").to_string(),
            "cannot parse Fn::Join arguments: expected 2 elements, found 1"
        );
    }
}
