use forage_agent::AgentError;
use forage_grid::GridError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("colony configuration error: {0}")]
    Config(String),

    #[error("grid error: {0}")]
    Grid(#[from] GridError),

    #[error("agent error: {0}")]
    Agent(#[from] AgentError),
}

impl From<forage_core::CoreError> for SimError {
    fn from(err: forage_core::CoreError) -> Self {
        match err {
            forage_core::CoreError::Config(msg) => SimError::Config(msg),
        }
    }
}

pub type SimResult<T> = Result<T, SimError>;
