//! # 🧮 kata-core — Fatoriais Memoizados e Crivo
//!
//! Exercícios pequenos e independentes. O núcleo com contratos reais é a
//! família de fatoriais memoizados e o crivo de Eratóstenes; o resto
//! (sequências, FizzBuzz, texto, ordenação) são funções soltas.
//!
//! ## Computational Complexity
//!
//! **Fatoriais memoizados — O(1) amortizado por entrada nova:**
//! - Hit no cache: O(1) (`BigFactorialCache` clona o valor)
//! - Miss: O(x − last) multiplicações, cada entrada calculada uma única vez
//!
//! **Crivo — O(N log log N):**
//! - Tabela booleana de N+1 entradas, descartada ao final da chamada
//!
//! ## Arquitetura
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │  factorial                                      │
//! │  ┌───────────────────┐  ┌────────────────────┐  │
//! │  │ BoundedFactorial  │  │ BigFactorialCache  │  │
//! │  │ [i64; 21]         │  │ Mutex<Vec<BigUint>>│  │
//! │  └───────────────────┘  └────────────────────┘  │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │ factorial / factorial_rec (sem cache)     │  │
//! │  └───────────────────────────────────────────┘  │
//! ├─────────────────────────────────────────────────┤
//! │  sieve ──▶ functional::last_idx                 │
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! ## Exemplo
//!
//! ```
//! use kata_core::{BigFactorialCache, BoundedFactorialCache, largest_prime_up_to};
//!
//! let mut bounded = BoundedFactorialCache::new();
//! assert_eq!(bounded.factorial(20).unwrap(), 2_432_902_008_176_640_000);
//!
//! let big = BigFactorialCache::new();
//! assert_eq!(big.factorial(25).unwrap().to_string(), "15511210043330985984000000");
//!
//! assert_eq!(largest_prime_up_to(348).unwrap(), 347);
//! ```

pub mod config;
pub mod error;
pub mod factorial;
pub mod fizzbuzz;
pub mod functional;
pub mod sequences;
pub mod sieve;
pub mod sorting;
pub mod text;

pub use config::KataConfig;
pub use error::{KataError, KataResult};
pub use factorial::{
    BigFactorialCache, BoundedFactorialCache, BOUNDED_TABLE_LEN,
    factorial, factorial_rec,
};
pub use fizzbuzz::{fizz_buzz, fizz_buzz_table};
pub use sequences::{count_sequence, fibonacci, tribonacci};
pub use sieve::largest_prime_up_to;
pub use sorting::{count_below, enclosing, sort_in_place, sorted, Enclosing};
pub use text::{reverse_all, reverse_line, rot13, rot13_str, substring};
