//! Environment configuration loading from .env files
//!
//! Loads configuration values from .env or environment variables.
//! Used by the `kata` binary for prompts, limits and log filtering.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

// Automatically load .env when config module is accessed
static DOTENV_INIT: Lazy<()> = Lazy::new(|| {
    let _ = dotenv::dotenv();
});

/// Ensure environment is loaded
#[inline]
fn ensure_loaded() {
    let _ = &*DOTENV_INIT;
}

fn var_or<T: FromStr>(key: &str, default: T) -> T {
    ensure_loaded();
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Configuração dos adaptadores de linha de comando
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KataConfig {
    /// Texto após o nome do prompt interativo
    pub prompt_suffix: String,
    /// Comando que encerra os loops interativos
    pub quit_word: String,
    /// Maior `max` aceito pelo crivo na CLI
    pub sieve_limit: i64,
    /// Quantidade de números aleatórios do exercício de vizinhos
    pub enclosing_size: usize,
    /// Filtro de log (sintaxe do `EnvFilter`)
    pub log_filter: String,
}

impl Default for KataConfig {
    fn default() -> Self {
        Self {
            prompt_suffix: "> ".to_string(),
            quit_word: "quit".to_string(),
            sieve_limit: 100_000_000,
            enclosing_size: 100,
            log_filter: "warn".to_string(),
        }
    }
}

impl KataConfig {
    /// Lê `KATA_*` do ambiente (e de `.env`), caindo nos defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            prompt_suffix: var_or("KATA_PROMPT_SUFFIX", defaults.prompt_suffix),
            quit_word: var_or("KATA_QUIT_WORD", defaults.quit_word),
            sieve_limit: var_or("KATA_SIEVE_LIMIT", defaults.sieve_limit),
            enclosing_size: var_or("KATA_ENCLOSING_SIZE", defaults.enclosing_size),
            log_filter: var_or("KATA_LOG", defaults.log_filter),
        }
    }

    /// Prompt completo para um loop nomeado, ex. `<FactorialQuoter> `
    pub fn prompt(&self, name: &str) -> String {
        if name.is_empty() {
            self.prompt_suffix.clone()
        } else {
            format!("<{}{}", name, self.prompt_suffix)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = KataConfig::default();
        assert_eq!(config.quit_word, "quit");
        assert_eq!(config.sieve_limit, 100_000_000);
        assert_eq!(config.prompt("FactorialQuoter"), "<FactorialQuoter> ");
        assert_eq!(config.prompt(""), "> ");
    }

    #[test]
    fn test_unparseable_value_falls_back() {
        assert_eq!(var_or("KATA_TEST_SURELY_UNSET_VAR", 7usize), 7);
    }

    #[test]
    fn test_serde_roundtrip() {
        let config = KataConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: KataConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
