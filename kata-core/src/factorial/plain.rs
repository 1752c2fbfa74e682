//! Fatoriais sem memoização

use super::bounded::BOUNDED_TABLE_LEN;
use crate::{KataError, KataResult};

fn overflow(n: i64) -> KataError {
    KataError::Overflow {
        value: n,
        limit: BOUNDED_TABLE_LEN as i64,
    }
}

/// n! iterativo, espaço auxiliar O(1)
pub fn factorial(n: i64) -> KataResult<i64> {
    if n < 0 {
        return Err(KataError::negative("n", n));
    }

    let mut fact: i64 = 1;
    let mut k = n;

    // Nunca multiplica por 1; 0! = 1
    while k >= 2 {
        fact = fact.checked_mul(k).ok_or_else(|| overflow(n))?;
        k -= 1;
    }

    Ok(fact)
}

/// n! recursivo, profundidade n
pub fn factorial_rec(n: i64) -> KataResult<i64> {
    if n < 0 {
        return Err(KataError::negative("n", n));
    }
    // 21! já não cabe em i64; evita descer a pilha à toa
    if n >= BOUNDED_TABLE_LEN as i64 {
        return Err(overflow(n));
    }

    if n <= 1 {
        return Ok(1);
    }
    factorial_rec(n - 1)?
        .checked_mul(n)
        .ok_or_else(|| overflow(n))
}
