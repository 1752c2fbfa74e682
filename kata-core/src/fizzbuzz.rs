//! FizzBuzz com 5 e 7

use crate::{KataError, KataResult};

/// Maior `n` aceito pela variante por tabela
pub const FIZZ_BUZZ_TABLE_MAX: usize = 35;

/// Múltiplos de 5 viram "fizz", de 7 "buzz", de ambos "fizbuzz"
pub fn fizz_buzz(n: usize) -> Vec<String> {
    (1..=n)
        .map(|i| match (i % 5 == 0, i % 7 == 0) {
            (true, true) => "fizbuzz".to_string(),
            (true, false) => "fizz".to_string(),
            (false, true) => "buzz".to_string(),
            (false, false) => i.to_string(),
        })
        .collect()
}

/// Mesma saída de [`fizz_buzz`], classificando pelo resto de i / 35
pub fn fizz_buzz_table(n: usize) -> KataResult<Vec<String>> {
    if n > FIZZ_BUZZ_TABLE_MAX {
        return Err(KataError::OutOfRange {
            name: "n",
            value: n as i64,
            reason: "must be between 0 and 35",
        });
    }

    Ok((1..=n)
        .map(|i| match i % 35 {
            0 => "fizbuzz".to_string(),
            5 | 10 | 15 | 20 | 25 | 30 => "fizz".to_string(),
            7 | 14 | 21 | 28 => "buzz".to_string(),
            _ => i.to_string(),
        })
        .collect())
}
