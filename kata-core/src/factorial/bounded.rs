//! Cache de fatoriais em tabela fixa de `i64`

use crate::{KataError, KataResult};
use tracing::debug;

/// Tamanho da tabela: 0! até 20!, o maior fatorial que cabe em `i64`
pub const BOUNDED_TABLE_LEN: usize = 21;

/// Fatoriais memoizados em largura fixa
///
/// A tabela cresce preguiçosamente até o maior índice já pedido e nunca
/// encolhe. Entradas preenchidas nunca são recalculadas.
#[derive(Debug, Clone)]
pub struct BoundedFactorialCache {
    table: [i64; BOUNDED_TABLE_LEN],
    /// Maior índice já preenchido
    last: usize,
}

impl BoundedFactorialCache {
    /// Cria cache com apenas 0! = 1
    pub fn new() -> Self {
        let mut table = [0; BOUNDED_TABLE_LEN];
        table[0] = 1;
        Self { table, last: 0 }
    }

    /// Retorna x!, estendendo a tabela se necessário
    ///
    /// Falha com [`KataError::OutOfRange`] para x negativo e com
    /// [`KataError::Overflow`] para x ≥ 21.
    pub fn factorial(&mut self, x: i64) -> KataResult<i64> {
        if x < 0 {
            return Err(KataError::negative("x", x));
        }
        if x >= BOUNDED_TABLE_LEN as i64 {
            return Err(KataError::Overflow {
                value: x,
                limit: BOUNDED_TABLE_LEN as i64,
            });
        }

        let x = x as usize;
        self.compute_and_cache(x);
        Ok(self.table[x])
    }

    fn compute_and_cache(&mut self, x: usize) {
        if self.last >= x {
            return;
        }

        debug!(from = self.last, to = x, "extending bounded factorial table");
        while self.last < x {
            // Se 18! já estava guardado, agora guarda 19!
            self.table[self.last + 1] = self.table[self.last] * (self.last as i64 + 1);
            self.last += 1;
        }
    }

    /// Maior índice já preenchido
    pub fn last(&self) -> usize {
        self.last
    }

    /// Entradas já calculadas, de 0! até last!
    pub fn cached(&self) -> &[i64] {
        &self.table[..=self.last]
    }
}

impl Default for BoundedFactorialCache {
    fn default() -> Self {
        Self::new()
    }
}
