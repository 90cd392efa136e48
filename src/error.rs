//! Error types for reclip.

/// Result type alias for reclip operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for reclip.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to read the input directory.
    #[error("failed to read input directory '{path}'")]
    InputDirRead {
        /// Path to the input directory.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// No subclip files found in the input directory.
    #[error("no .wav subclips found in '{path}'")]
    NoSubclipsFound {
        /// Path to the input directory.
        path: std::path::PathBuf,
    },

    /// Subclip base-name does not follow the `<id><sep><seq>` convention.
    #[error("invalid subclip name '{name}': {reason}")]
    InvalidSubclipName {
        /// The offending base-name.
        name: String,
        /// Description of the parse failure.
        reason: String,
    },

    /// Failed to open audio file.
    #[error("failed to open audio file '{path}'")]
    AudioOpen {
        /// Path to the audio file.
        path: std::path::PathBuf,
        /// Underlying error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Failed to decode audio.
    #[error("failed to decode audio from '{path}'")]
    AudioDecode {
        /// Path to the audio file.
        path: std::path::PathBuf,
        /// Underlying error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// No audio tracks found.
    #[error("no audio tracks found in '{path}'")]
    NoAudioTracks {
        /// Path to the audio file.
        path: std::path::PathBuf,
    },

    /// Decoder produced a sample format this crate does not handle.
    #[error("unsupported sample format '{format}' in '{path}'")]
    UnsupportedSampleFormat {
        /// Path to the audio file.
        path: std::path::PathBuf,
        /// Name of the unsupported format.
        format: String,
    },

    /// Subclip sample rate differs from the expected rate.
    #[error("'{path}' has sample rate {found} Hz, expected {expected} Hz")]
    SampleRateMismatch {
        /// Path to the offending subclip.
        path: std::path::PathBuf,
        /// Sample rate found in the file.
        found: u32,
        /// Expected sample rate.
        expected: u32,
    },

    /// Subclip channel count differs from the rest of its group.
    #[error("'{path}' has {found} channel(s), expected {expected} to match its group")]
    ChannelMismatch {
        /// Path to the offending subclip.
        path: std::path::PathBuf,
        /// Channel count found in the file.
        found: usize,
        /// Channel count established by the group.
        expected: usize,
    },

    /// Failed to create output directory.
    #[error("failed to create output directory '{path}'")]
    OutputDirCreateFailed {
        /// Path to the output directory.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write WAV file.
    #[error("failed to write WAV file '{path}'")]
    WavWriteFailed {
        /// Path to the WAV file.
        path: std::path::PathBuf,
        /// Underlying error.
        #[source]
        source: hound::Error,
    },
}
