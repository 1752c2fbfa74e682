//! Tipos de erro para kata-structures

use thiserror::Error;

/// Resultado customizado para operações de estruturas
pub type StructureResult<T> = Result<T, StructureError>;

/// Erros que podem ocorrer em pilhas e formas
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StructureError {
    #[error("{0} on empty stack")]
    EmptyStack(&'static str),

    #[error("radius must be a non-negative number, was {0}")]
    NegativeRadius(f64),
}
