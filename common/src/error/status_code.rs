/// Coarse classification of an error, independent of the concrete error type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusCode {
    /// Unknown error.
    Unknown,
    /// Invalid arguments supplied by the caller.
    InvalidArguments,
}
