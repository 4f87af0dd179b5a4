/// Errors raised while building a custom [`AliasRegistry`](crate::AliasRegistry).
///
/// Parsing itself never fails; this only guards registry construction.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("alias entry #{index} has an empty canonical name")]
    EmptyCanonical { index: usize },
    #[error("alias entry '{canonical}' has no key that survives normalization")]
    NoUsableKeys { canonical: String },
}
