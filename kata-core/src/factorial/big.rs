//! Cache de fatoriais em precisão arbitrária
//!
//! A tabela é append-only: cada índice está ausente ou completamente
//! calculado. O crescimento acontece inteiro dentro de um único mutex, então
//! chamadores concorrentes nunca estendem a tabela ao mesmo tempo.

use crate::{KataError, KataResult};
use num_bigint::BigUint;
use num_traits::One;
use once_cell::sync::Lazy;
use std::sync::{Mutex, PoisonError};
use tracing::debug;

/// Instância compartilhada pelo processo inteiro
static GLOBAL_CACHE: Lazy<BigFactorialCache> = Lazy::new(BigFactorialCache::new);

/// Estado protegido pelo mutex
#[derive(Debug)]
struct BigTable {
    /// entries[i] = i!
    entries: Vec<BigUint>,
    /// Quantas chamadas precisaram estender a tabela
    extensions: u64,
}

impl BigTable {
    fn new() -> Self {
        Self {
            entries: vec![BigUint::one()],
            extensions: 0,
        }
    }

    fn compute_and_cache(&mut self, up_to: usize) {
        let len = self.entries.len();
        if len > up_to {
            return;
        }

        debug!(from = len, to = up_to, "extending big factorial table");
        self.entries.reserve(up_to + 1 - len);
        for size in len..=up_to {
            let next = &self.entries[size - 1] * BigUint::from(size);
            self.entries.push(next);
        }
        self.extensions += 1;
    }
}

/// Fatoriais memoizados sem limite de magnitude
///
/// `Send + Sync`: pode ser compartilhado entre threads por referência ou
/// `Arc`. Use [`BigFactorialCache::global`] para a instância do processo ou
/// [`BigFactorialCache::new`] para uma tabela isolada.
#[derive(Debug)]
pub struct BigFactorialCache {
    inner: Mutex<BigTable>,
}

impl BigFactorialCache {
    /// Cria cache com apenas 0! = 1
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(BigTable::new()),
        }
    }

    /// Cache global, inicializado no primeiro acesso e vivo até o fim do processo
    pub fn global() -> &'static BigFactorialCache {
        &GLOBAL_CACHE
    }

    /// Retorna x!, estendendo a tabela se necessário
    ///
    /// Falha com [`KataError::OutOfRange`] para x negativo.
    pub fn factorial(&self, x: i64) -> KataResult<BigUint> {
        if x < 0 {
            return Err(KataError::negative("x", x));
        }
        let index = usize::try_from(x).map_err(|_| KataError::Overflow {
            value: x,
            limit: i64::try_from(usize::MAX).unwrap_or(i64::MAX),
        })?;

        let mut table = self.inner.lock().map_err(|_| KataError::LockPoisoned)?;
        table.compute_and_cache(index);
        Ok(table.entries[index].clone())
    }

    /// Número de entradas já calculadas (0! incluído)
    ///
    /// Lê mesmo com o lock envenenado: a tabela só cresce por `push` de
    /// valores completos.
    pub fn cached_len(&self) -> usize {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entries
            .len()
    }

    /// Quantas chamadas estenderam a tabela desde a criação
    pub fn extension_count(&self) -> u64 {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extensions
    }
}

impl Default for BigFactorialCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FACTORIAL_50: &str =
        "30414093201713378043612608166064768844377641568960512000000000000";

    #[test]
    fn test_small_values() {
        let cache = BigFactorialCache::new();
        assert_eq!(cache.factorial(0).unwrap(), BigUint::from(1u32));
        assert_eq!(cache.factorial(1).unwrap(), BigUint::from(1u32));
        assert_eq!(cache.factorial(10).unwrap(), BigUint::from(3_628_800u32));
    }

    #[test]
    fn test_factorial_50() {
        let cache = BigFactorialCache::new();
        assert_eq!(cache.factorial(50).unwrap().to_string(), FACTORIAL_50);
        assert_eq!(cache.cached_len(), 51);
    }

    #[test]
    fn test_negative_is_out_of_range() {
        let cache = BigFactorialCache::new();
        let err = cache.factorial(-3).unwrap_err();
        assert!(matches!(err, KataError::OutOfRange { value: -3, .. }));
    }

    #[test]
    fn test_repeated_call_extends_once() {
        let cache = BigFactorialCache::new();
        assert_eq!(cache.extension_count(), 0);

        let first = cache.factorial(30).unwrap();
        assert_eq!(cache.extension_count(), 1);

        let second = cache.factorial(30).unwrap();
        assert_eq!(cache.extension_count(), 1);
        assert_eq!(first, second);

        // Índice menor também é hit
        cache.factorial(12).unwrap();
        assert_eq!(cache.extension_count(), 1);
        assert_eq!(cache.cached_len(), 31);
    }

    #[test]
    fn test_zero_never_extends() {
        let cache = BigFactorialCache::new();
        cache.factorial(0).unwrap();
        assert_eq!(cache.extension_count(), 0);
    }

    #[test]
    fn test_counters_survive_poisoned_lock() {
        let cache = BigFactorialCache::new();
        cache.factorial(8).unwrap();

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = cache.inner.lock().unwrap();
            panic!("panic while holding the table lock");
        }));
        assert!(result.is_err());

        assert_eq!(cache.cached_len(), 9);
        assert_eq!(cache.extension_count(), 1);
        assert_eq!(cache.factorial(3).unwrap_err(), KataError::LockPoisoned);
    }

    #[test]
    fn test_global_is_shared() {
        let a = BigFactorialCache::global();
        let b = BigFactorialCache::global();
        assert!(std::ptr::eq(a, b));
        assert_eq!(a.factorial(5).unwrap(), BigUint::from(120u32));
    }
}
