use thiserror::Error;

/// errors raised by the graph layer, the heuristics and the reporting helpers
#[derive(Error, Debug)]
pub enum ColorError {
    /// every color of the palette is rejected for some vertex
    /// (or more color classes are opened than the palette holds)
    #[error("no coloring found (palette of {palette_size} colors exhausted)")]
    PaletteExhausted {
        /// number of colors supplied by the caller
        palette_size: usize,
    },

    /// an edge from a vertex to itself was requested
    #[error("self-loop rejected on vertex {0}")]
    SelfLoop(String),

    /// the vertex is not part of the graph
    #[error("unknown vertex {0}")]
    UnknownVertex(String),

    /// the palette lists the same color twice (position of the repeated entry)
    #[error("palette color at position {0} is repeated")]
    DuplicateColor(usize),

    /// a command line argument cannot be parsed
    #[error("unable to parse --{name} ({value})")]
    InvalidArgument {
        /// argument name
        name: String,
        /// raw value given
        value: String,
    },

    /// the heuristic name does not match any known heuristic
    #[error("unknown heuristic '{0}' (expected greedy, welsh-powell, dsatur or rlf)")]
    UnknownHeuristic(String),

    /// I/O errors (statistics export)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// serialization errors (statistics export)
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ColorError {
    /// palette exhaustion for a palette of the given size
    pub fn exhausted(palette_size: usize) -> Self {
        ColorError::PaletteExhausted { palette_size }
    }

    /// `true` if the error is a palette exhaustion
    pub fn is_exhausted(&self) -> bool {
        matches!(self, ColorError::PaletteExhausted { .. })
    }
}

/// Result type used across the crate
pub type Result<T> = std::result::Result<T, ColorError>;
