/// Errors raised synchronously by configuration operations.
///
/// Skipped evaluations are not errors; see [`crate::FillOutcome`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    /// A fill was requested while no content adapter is attached.
    #[error("no content adapter attached")]
    NoAdapter,
    /// The assigned list adapter cannot fill; the previous adapter is kept.
    #[error("list adapter does not expose the fill capability")]
    MissingFillCapability,
    /// Fill quantities are always positive.
    #[error("fill quantity must be positive")]
    ZeroQuantity,
}

pub type Result<T, E = ConfigurationError> = core::result::Result<T, E>;
