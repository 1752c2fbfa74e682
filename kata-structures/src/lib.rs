//! # 🧱 kata-structures — Pilha Encadeada e Formas
//!
//! - [`LinkedStack`]: pilha LIFO cujos nós vivem numa arena (`Vec`) e se
//!   ligam por índice, sem ponteiros intrusivos
//! - [`Shape`]: área e perímetro para [`Circle`], [`Rectangle`] e
//!   [`PlaneCircle`]
//!
//! ## Exemplo
//!
//! ```
//! use kata_structures::{LinkedStack, Circle, Shape};
//!
//! let mut stack = LinkedStack::new();
//! stack.push(1);
//! stack.push(2);
//! assert_eq!(stack.pop().unwrap(), 2);
//!
//! let circle = Circle::new(1.0).unwrap();
//! assert!((circle.area() - std::f64::consts::PI).abs() < 1e-12);
//! ```

pub mod error;
pub mod shapes;
pub mod stack;

pub use error::{StructureError, StructureResult};
pub use shapes::{
    Circle, PlaneCircle, Point, Rectangle, Shape, TrigTable,
    TRIG_POINTS, radians_to_degrees,
};
pub use stack::{Iter, LinkedStack, NodeId};
