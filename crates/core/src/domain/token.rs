// Token Domain Model

/// Internal job identifier (opaque to this crate, meaningful to callers)
pub type JobId = String;

/// Externally visible token standing in for a job identifier.
///
/// Random tokens are UUID v4 strings; preset tokens are whatever the caller
/// supplied. Either way the value is opaque and never mutated once created.
pub type Token = String;

/// Namespace tag partitioning the token key space
pub type Kind = String;

/// Namespace used when the caller does not supply one
pub const DEFAULT_KIND: &str = "default";

/// Resolve an optional caller-supplied kind to the effective namespace
pub fn kind_or_default(kind: Option<&str>) -> &str {
    kind.unwrap_or(DEFAULT_KIND)
}
