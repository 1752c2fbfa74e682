//! Sequências: Fibonacci, "tribonacci" e contagem

use crate::{KataError, KataResult};

fn sequence_overflow(n: usize, idx: usize) -> KataError {
    KataError::Overflow {
        value: n as i64,
        limit: idx as i64 + 1,
    }
}

/// Os primeiros `n` termos de Fibonacci: 1, 1, 2, 3, 5, ...
///
/// Falha com [`KataError::Overflow`] quando um termo não cabe em `u64`
/// (a partir de n = 94).
pub fn fibonacci(n: usize) -> KataResult<Vec<u64>> {
    let mut fib = Vec::with_capacity(n);
    let (mut n1, mut n2) = (1u64, 1u64);

    if n >= 1 {
        fib.push(n1);
    }
    if n >= 2 {
        fib.push(n2);
    }

    for idx in 2..n {
        let next = n1.checked_add(n2).ok_or_else(|| sequence_overflow(n, idx))?;
        n1 = n2;
        n2 = next;
        fib.push(next);
    }

    Ok(fib)
}

/// Como Fibonacci, mas cada termo é a soma dos três anteriores: 1, 1, 2, 4, 7, ...
pub fn tribonacci(n: usize) -> KataResult<Vec<u64>> {
    let mut out: Vec<u64> = [1, 1, 2].into_iter().take(n).collect();
    out.reserve(n.saturating_sub(out.len()));

    for idx in 3..n {
        let next = out[idx - 1]
            .checked_add(out[idx - 2])
            .and_then(|s| s.checked_add(out[idx - 3]))
            .ok_or_else(|| sequence_overflow(n, idx))?;
        out.push(next);
    }

    Ok(out)
}

/// Conta de `start` até `end` (exclusivo) de 1 em 1, depois de `end` até
/// `start` de 2 em 2
pub fn count_sequence(start: i64, end: i64) -> Vec<i64> {
    let up = start..end;
    let down = (start..=end).rev().step_by(2);
    up.chain(down).collect()
}
