use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum IntervalError {
    #[error("interval upper endpoint value must be >= lower endpoint value")]
    Inverted,
}
