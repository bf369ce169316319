use thiserror::Error;

/// Errors reported by the engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A value outside the accepted range reached the engine: above 9
    /// for a stored cell, or outside 1..=9 for a placement probe. This
    /// is a caller contract violation; the engine never coerces such a
    /// value into a valid-looking state.
    #[error("{value} is not a valid cell value")]
    ValueOutOfRange { value: u8 },

    /// A defensive attempt ceiling was exceeded during generation.
    ///
    /// With correct diagonal seeding the backtracking search always
    /// completes, so hitting this indicates a logic defect. The failed
    /// call leaves no state behind and may be retried with a fresh
    /// random source.
    #[error("puzzle generation gave up after {attempts} attempts")]
    GenerationFailed { attempts: u32 },
}
