use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    /// An intermediate or final size computation exceeded `usize::MAX`
    /// (or the planner's configured limit).
    #[error("arithmetic overflow while computing layout size")]
    Overflow,
    #[error("alignment {0} is not a non-zero power of two")]
    BadAlignment(usize),
    #[error("chunk count must be non-zero")]
    ZeroCount,
    #[error("chunk element size must be non-zero")]
    ZeroSize,
    #[error("base offset {0} is negative")]
    NegativeOffset(isize),
    #[error("a plan must contain at least one chunk")]
    EmptyPlan,
}

pub type LayoutResult<T> = Result<T, LayoutError>;
