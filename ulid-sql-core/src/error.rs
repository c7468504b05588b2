/// Failures raised while scanning a [`crate::Value`] into a ULID.
///
/// They travel inside [`crate::Error`]; use `downcast_ref::<UlidError>()` to
/// tell the two kinds apart.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UlidError {
    /// Text or bytes that do not decode as a ULID.
    #[error("Malformed ulid `{input}`: {reason}")]
    Malformed {
        /// Printable form of the rejected input.
        input: String,
        /// Decoder message.
        reason: String,
    },
    /// The value variant is not one that can hold a ULID.
    #[error("Cannot scan a ulid from a value of type {found}")]
    UnsupportedType {
        /// Name of the rejected `Value` variant.
        found: &'static str,
    },
}
