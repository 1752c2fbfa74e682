//! Crivo de Eratóstenes

use crate::functional::last_idx;
use crate::{KataError, KataResult};
use tracing::trace;

/// Maior primo ≤ `max`
///
/// Aloca uma tabela booleana de `max + 1` entradas por chamada. Só é preciso
/// riscar múltiplos de i até √max: um composto sem fator ≤ √max não existe.
pub fn largest_prime_up_to(max: i64) -> KataResult<i64> {
    if max < 2 {
        return Err(KataError::OutOfRange {
            name: "max",
            value: max,
            reason: "must be >= 2",
        });
    }
    let is_prime = sieve(usize::try_from(max).map_err(|_| table_overflow(max))?)?;

    // max >= 2 mantém o índice 2 marcado como primo
    let largest = last_idx(&is_prime, |p| *p).expect("index 2 is prime for max >= 2");
    Ok(largest as i64)
}

/// A tabela tem max + 1 bytes e um `Vec` não passa de `isize::MAX` bytes
fn table_overflow(max: i64) -> KataError {
    KataError::Overflow {
        value: max,
        limit: i64::try_from(isize::MAX).unwrap_or(i64::MAX),
    }
}

/// Tabela de primalidade para 0..=max
///
/// Falha com [`KataError::Overflow`] quando a tabela não pode ser alocada.
pub fn sieve(max: usize) -> KataResult<Vec<bool>> {
    let overflow = || table_overflow(i64::try_from(max).unwrap_or(i64::MAX));
    let len = max.checked_add(1).ok_or_else(overflow)?;
    let mut is_prime = Vec::new();
    is_prime.try_reserve_exact(len).map_err(|_| overflow())?;

    // Primo até prova em contrário
    is_prime.resize(len, true);
    is_prime[0] = false;
    if max >= 1 {
        is_prime[1] = false;
    }

    let check_up_to = max.isqrt();
    trace!(max, check_up_to, "sieving");

    for i in 2..=check_up_to {
        if is_prime[i] {
            for j in (i * 2..=max).step_by(i) {
                is_prime[j] = false;
            }
        }
    }

    Ok(is_prime)
}
