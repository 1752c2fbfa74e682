//! Helpers no estilo de linguagens funcionais

/// Índice do primeiro item que satisfaz o predicado
pub fn first_idx<T, P>(xs: &[T], mut predicate: P) -> Option<usize>
where
    P: FnMut(&T) -> bool,
{
    xs.iter().position(|x| predicate(x))
}

/// Índice do último item que satisfaz o predicado
pub fn last_idx<T, P>(xs: &[T], mut predicate: P) -> Option<usize>
where
    P: FnMut(&T) -> bool,
{
    xs.iter().rposition(|x| predicate(x))
}

/// Fold da esquerda para a direita
pub fn fold_left<A, B, F>(xs: &[A], zero: B, f: F) -> B
where
    F: FnMut(B, &A) -> B,
{
    xs.iter().fold(zero, f)
}
