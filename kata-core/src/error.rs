//! Tipos de erro para kata-core

use thiserror::Error;

/// Resultado customizado para operações do kata-core
pub type KataResult<T> = Result<T, KataError>;

/// Erros que podem ocorrer nos exercícios
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KataError {
    /// Argumento fora do domínio (tipicamente negativo)
    #[error("{name} {reason}, was {value}")]
    OutOfRange {
        name: &'static str,
        value: i64,
        reason: &'static str,
    },

    /// Resultado não cabe na representação de largura fixa
    #[error("Overflow; {value} is too large, must be < {limit}")]
    Overflow { value: i64, limit: i64 },

    /// Índices inválidos para um recorte
    #[error("Improper indexes {start}..{end} for length {len}")]
    InvalidRange { start: usize, end: usize, len: usize },

    /// Lock da tabela envenenado por pânico em outra thread
    #[error("Factorial table lock poisoned")]
    LockPoisoned,
}

impl KataError {
    /// Atalho para argumentos negativos
    pub fn negative(name: &'static str, value: i64) -> Self {
        Self::OutOfRange {
            name,
            value,
            reason: "must be non-negative",
        }
    }
}
