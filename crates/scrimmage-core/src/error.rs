use thiserror::Error;

/// Reasons a single play cannot be analyzed.
///
/// All of these are local to one play; a batch skips the play and moves on.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlayError {
    #[error("found {found} player detections, need at least {required} to place the line of scrimmage")]
    InsufficientPlayers { found: usize, required: usize },

    #[error("field scale is degenerate ({pixels_per_yard} pixels per yard)")]
    DegenerateScale { pixels_per_yard: f64 },

    #[error("line of scrimmage is undefined")]
    UndefinedLineOfScrimmage,
}
