//! Família de fatoriais
//!
//! Três implementações independentes que devem concordar bit a bit no
//! domínio comum (0 ≤ n ≤ 20):
//!
//! - [`BoundedFactorialCache`]: tabela fixa de `i64`, 0! até 20!
//! - [`BigFactorialCache`]: tabela ilimitada de `BigUint`, protegida por mutex
//! - [`factorial`] / [`factorial_rec`]: sem memoização

pub mod big;
pub mod bounded;
pub mod plain;

pub use big::BigFactorialCache;
pub use bounded::{BoundedFactorialCache, BOUNDED_TABLE_LEN};
pub use plain::{factorial, factorial_rec};
