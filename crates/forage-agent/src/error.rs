use forage_grid::GridError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("grid error during step: {0}")]
    Grid(#[from] GridError),
}

pub type AgentResult<T> = Result<T, AgentError>;
