//! Exercícios de texto: reversão, ROT13 e substring

use crate::{KataError, KataResult};

/// Inverte a ordem da lista e cada string dentro dela
pub fn reverse_all<S: AsRef<str>>(xs: &[S]) -> Vec<String> {
    xs.iter().rev().map(|x| reverse_line(x.as_ref())).collect()
}

/// Inverte uma string por caracteres
pub fn reverse_line(line: &str) -> String {
    line.chars().rev().collect()
}

/// Cifra de substituição ROT13; rot13(rot13(c)) == c
pub fn rot13(c: char) -> char {
    let rotate = |base: u8| (((c as u8 - base + 13) % 26) + base) as char;
    match c {
        'A'..='Z' => rotate(b'A'),
        'a'..='z' => rotate(b'a'),
        _ => c,
    }
}

/// Aplica [`rot13`] a cada caractere
pub fn rot13_str(line: &str) -> String {
    line.chars().map(rot13).collect()
}

/// Recorte por índices de caractere, `start` inclusivo e `end` exclusivo
pub fn substring(s: &str, start: usize, end: usize) -> KataResult<&str> {
    let len = s.chars().count();
    if start > end || end > len {
        return Err(KataError::InvalidRange { start, end, len });
    }

    let byte_offset = |idx: usize| {
        s.char_indices()
            .nth(idx)
            .map(|(offset, _)| offset)
            .unwrap_or(s.len())
    };
    Ok(&s[byte_offset(start)..byte_offset(end)])
}
