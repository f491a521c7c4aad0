use thiserror::Error;

/// Domain error taxonomy for the Rankedle game core.
///
/// State-machine errors (`Forbidden`, `NoActivePuzzle`) propagate to the
/// caller for translation into a user-facing rejection. Pipeline errors
/// (`Download`, `Extraction`, `Transcode`, `NoCandidateMap`) are caught at
/// the top of puzzle generation, logged and swallowed.
#[derive(Error, Debug)]
pub enum RankedleError {
    /// No puzzle has been assigned for today.
    #[error("no puzzle is assigned for today")]
    NoActivePuzzle,

    /// Every candidate map has already been used by a previous puzzle.
    #[error("no unplayed candidate map remains")]
    NoCandidateMap,

    /// Archive download returned a non-success status. No retry is attempted.
    #[error("song download failed (url: {url}, status: {status})")]
    Download {
        /// The download URL that failed
        url: String,
        /// The HTTP status code received
        status: u16,
    },

    /// The downloaded archive contains no matching audio entry.
    #[error("audio extraction failed: {0}")]
    Extraction(String),

    /// An external audio tool invocation failed.
    #[error("audio transcode failed: {0}")]
    Transcode(String),

    /// Banned player, terminal attempt, or hint requested outside its
    /// window. Deliberately opaque: the message never reveals which.
    #[error("action impossible")]
    Forbidden,

    /// Unknown puzzle or map reference during result assembly.
    #[error("{0} not found")]
    NotFound(String),
}
