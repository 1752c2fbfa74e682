//! Ordenação in-place e busca de vizinhos

/// Selection sort in-place; O(n²), só para vetores pequenos
pub fn sort_in_place(nums: &mut [f64]) {
    for i in 0..nums.len() {
        // Menor elemento restante
        let mut min = i;
        for j in i..nums.len() {
            if nums[j] < nums[min] {
                min = j;
            }
        }
        nums.swap(i, min);
    }
}

/// Cópia ordenada de `nums`
pub fn sorted(nums: &[f64]) -> Vec<f64> {
    let mut out = nums.to_vec();
    sort_in_place(&mut out);
    out
}

/// Quantos elementos de `sorted` são estritamente menores que `target`
///
/// Busca binária de limite inferior: o intervalo [left, right) sempre
/// contém a fronteira.
pub fn count_below(target: f64, sorted: &[f64]) -> usize {
    let (mut left, mut right) = (0, sorted.len());

    while left < right {
        let middle = left + (right - left) / 2;
        if sorted[middle] < target {
            left = middle + 1;
        } else {
            right = middle;
        }
    }

    left
}

/// Posição de um alvo em relação a um vetor ordenado
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Enclosing {
    /// Menor ou igual a todos os elementos
    Below,
    /// Maior que todos os elementos
    Above,
    /// `lo < target <= hi`, vizinhos consecutivos
    Between(f64, f64),
}

/// Classifica `target` contra `sorted`
pub fn enclosing(target: f64, sorted: &[f64]) -> Enclosing {
    match count_below(target, sorted) {
        0 => Enclosing::Below,
        k if k == sorted.len() => Enclosing::Above,
        k => Enclosing::Between(sorted[k - 1], sorted[k]),
    }
}
