use thiserror::Error;

/// Top-level error type for the offset engine.
#[derive(Debug, Error)]
pub enum OffsetError {
    #[error(transparent)]
    Diagram(#[from] DiagramError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors raised while assembling a Voronoi diagram.
#[derive(Debug, Error)]
pub enum DiagramError {
    #[error("cell {cell} references source line {source_index}, but only {line_count} lines were given")]
    SourceOutOfRange {
        cell: usize,
        source_index: usize,
        line_count: usize,
    },

    #[error("invalid {kind} reference {index}")]
    InvalidReference { kind: &'static str, index: usize },

    #[error("half-edge {edge} has more than one successor in cell {cell}")]
    AmbiguousLink { edge: usize, cell: usize },

    #[error("half-edge {edge} has no successor in cell {cell}")]
    MissingLink { edge: usize, cell: usize },

    #[error("boundary of cell {cell} does not form a single closed cycle")]
    OpenCell { cell: usize },

    #[error("cell {cell} has no edges")]
    EmptyCell { cell: usize },
}

/// Errors related to offset and classification operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience type alias for results using [`OffsetError`].
pub type Result<T> = std::result::Result<T, OffsetError>;
