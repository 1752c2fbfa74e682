//! Pilha encadeada sobre arena
//!
//! Os nós vivem num `Vec`; o elo "próximo" é um índice opcional. Slots
//! liberados por `pop` vão para uma free list e são reaproveitados.

use crate::error::{StructureError, StructureResult};

/// Índice de nó na arena
pub type NodeId = usize;

#[derive(Debug, Clone)]
enum Slot<T> {
    Occupied { value: T, next: Option<NodeId> },
    Free { next_free: Option<NodeId> },
}

/// Pilha LIFO com elos explícitos
#[derive(Debug, Clone)]
pub struct LinkedStack<T> {
    slots: Vec<Slot<T>>,
    top: Option<NodeId>,
    free: Option<NodeId>,
    len: usize,
}

impl<T> LinkedStack<T> {
    /// Cria pilha vazia
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            top: None,
            free: None,
            len: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.top.is_none()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Slots alocados, ocupados ou livres
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Empilha no topo
    pub fn push(&mut self, value: T) -> NodeId {
        let node = Slot::Occupied {
            value,
            next: self.top,
        };

        let id = match self.free {
            Some(id) => {
                if let Slot::Free { next_free } = self.slots[id] {
                    self.free = next_free;
                }
                self.slots[id] = node;
                id
            }
            None => {
                self.slots.push(node);
                self.slots.len() - 1
            }
        };

        self.top = Some(id);
        self.len += 1;
        id
    }

    /// Remove e retorna o topo
    pub fn pop(&mut self) -> StructureResult<T> {
        let id = self.top.ok_or(StructureError::EmptyStack("pop"))?;
        let freed = Slot::Free {
            next_free: self.free,
        };

        match std::mem::replace(&mut self.slots[id], freed) {
            Slot::Occupied { value, next } => {
                self.top = next;
                self.free = Some(id);
                self.len -= 1;
                Ok(value)
            }
            // top sempre aponta para slot ocupado
            Slot::Free { .. } => unreachable!("stack top points at a free slot"),
        }
    }

    /// Topo sem remover
    pub fn peek(&self) -> StructureResult<&T> {
        let id = self.top.ok_or(StructureError::EmptyStack("peek"))?;
        match &self.slots[id] {
            Slot::Occupied { value, .. } => Ok(value),
            Slot::Free { .. } => unreachable!("stack top points at a free slot"),
        }
    }

    /// Itera do topo para a base
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            slots: &self.slots,
            current: self.top,
        }
    }
}

impl<T> Default for LinkedStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterador que segue os elos a partir do topo
pub struct Iter<'a, T> {
    slots: &'a [Slot<T>],
    current: Option<NodeId>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        match &self.slots[id] {
            Slot::Occupied { value, next } => {
                self.current = *next;
                Some(value)
            }
            Slot::Free { .. } => None,
        }
    }
}

impl<'a, T> IntoIterator for &'a LinkedStack<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> FromIterator<T> for LinkedStack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Self::new();
        for value in iter {
            stack.push(value);
        }
        stack
    }
}
