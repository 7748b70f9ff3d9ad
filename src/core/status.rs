//! Status codes for integrators

/// How an integration run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    /// The right boundary was reached.
    #[default]
    Success,
    /// The step budget `nmax` ran out before the right boundary; the
    /// trajectory holds every point accepted up to that moment.
    NeedLargerNmax,
}
