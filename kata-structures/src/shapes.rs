//! Hierarquia de formas
//!
//! O trait [`Shape`] é o ponto comum; [`PlaneCircle`] compõe um [`Circle`]
//! com um centro em vez de herdar dele.

use crate::error::{StructureError, StructureResult};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;

/// Forma com área e perímetro
pub trait Shape {
    fn area(&self) -> f64;
    fn circumference(&self) -> f64;

    fn name(&self) -> &'static str;
}

/// Converte radianos para graus
pub fn radians_to_degrees(rads: f64) -> f64 {
    rads * 180.0 / PI
}

/// Ponto no plano
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point{{x={}, y={}}}", self.x, self.y)
    }
}

fn check_radius(radius: f64) -> StructureResult<f64> {
    if radius.is_nan() || radius < 0.0 {
        return Err(StructureError::NegativeRadius(radius));
    }
    Ok(radius)
}

/// Círculo de raio não negativo
///
/// A desserialização passa pela mesma validação de [`Circle::new`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCircle")]
pub struct Circle {
    radius: f64,
}

/// Forma serializada de [`Circle`], ainda não validada
#[derive(Deserialize)]
struct RawCircle {
    radius: f64,
}

impl TryFrom<RawCircle> for Circle {
    type Error = StructureError;

    fn try_from(raw: RawCircle) -> StructureResult<Self> {
        Circle::new(raw.radius)
    }
}

impl Circle {
    pub fn new(radius: f64) -> StructureResult<Self> {
        Ok(Self {
            radius: check_radius(radius)?,
        })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Altera o raio; valor negativo é rejeitado e o raio antigo fica
    pub fn set_radius(&mut self, radius: f64) -> StructureResult<()> {
        self.radius = check_radius(radius)?;
        Ok(())
    }
}

impl Shape for Circle {
    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    fn circumference(&self) -> f64 {
        2.0 * PI * self.radius
    }

    fn name(&self) -> &'static str {
        "Circle"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub width: f64,
    pub height: f64,
}

impl Rectangle {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Shape for Rectangle {
    fn area(&self) -> f64 {
        self.width * self.height
    }

    fn circumference(&self) -> f64 {
        2.0 * (self.width + self.height)
    }

    fn name(&self) -> &'static str {
        "Rectangle"
    }
}

/// Círculo posicionado no plano
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlaneCircle {
    circle: Circle,
    centre: Point,
}

impl PlaneCircle {
    pub fn new(radius: f64, cx: f64, cy: f64) -> StructureResult<Self> {
        Ok(Self {
            circle: Circle::new(radius)?,
            centre: Point::new(cx, cy),
        })
    }

    pub fn centre(&self) -> Point {
        self.centre
    }

    pub fn radius(&self) -> f64 {
        self.circle.radius()
    }

    /// Estritamente dentro: a borda não conta
    pub fn is_inside(&self, x: f64, y: f64) -> bool {
        self.centre.distance_to(&Point::new(x, y)) < self.circle.radius()
    }
}

impl Shape for PlaneCircle {
    fn area(&self) -> f64 {
        self.circle.area()
    }

    fn circumference(&self) -> f64 {
        self.circle.circumference()
    }

    fn name(&self) -> &'static str {
        "PlaneCircle"
    }
}

/// Pontos pré-calculados no primeiro quadrante
pub const TRIG_POINTS: usize = 500;

/// Senos e cossenos de [0, π/2] em [`TRIG_POINTS`] amostras
///
/// Trigonometria é cara; desenhar o contorno de um círculo reutiliza esta
/// tabela.
#[derive(Debug, Clone)]
pub struct TrigTable {
    sines: Vec<f64>,
    cosines: Vec<f64>,
}

impl TrigTable {
    pub fn new() -> Self {
        let delta = (PI / 2.0) / (TRIG_POINTS - 1) as f64;
        let (sines, cosines) = (0..TRIG_POINTS)
            .map(|i| (i as f64 * delta).sin_cos())
            .unzip();
        Self { sines, cosines }
    }

    pub fn sines(&self) -> &[f64] {
        &self.sines
    }

    pub fn cosines(&self) -> &[f64] {
        &self.cosines
    }

    /// Contorno do primeiro quadrante de um círculo
    pub fn quarter_outline(&self, circle: &PlaneCircle) -> Vec<Point> {
        let c = circle.centre();
        let r = circle.radius();
        self.cosines
            .iter()
            .zip(&self.sines)
            .map(|(cos, sin)| Point::new(c.x + r * cos, c.y + r * sin))
            .collect()
    }
}

impl Default for TrigTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_circle_area_and_circumference() {
        let c = Circle::new(2.0).unwrap();
        assert!((c.area() - 4.0 * PI).abs() < EPS);
        assert!((c.circumference() - 4.0 * PI).abs() < EPS);
    }

    #[test]
    fn test_negative_radius_rejected() {
        assert_eq!(Circle::new(-1.0).unwrap_err(), StructureError::NegativeRadius(-1.0));

        let mut c = Circle::new(2.0).unwrap();
        assert!(c.set_radius(-4.0).is_err());
        assert_eq!(c.radius(), 2.0);
        c.set_radius(4.0).unwrap();
        assert_eq!(c.radius(), 4.0);
    }

    #[test]
    fn test_nan_radius_rejected() {
        assert!(matches!(
            Circle::new(f64::NAN),
            Err(StructureError::NegativeRadius(r)) if r.is_nan()
        ));

        let mut c = Circle::new(1.5).unwrap();
        assert!(c.set_radius(f64::NAN).is_err());
        assert_eq!(c.radius(), 1.5);
        assert!(PlaneCircle::new(f64::NAN, 0.0, 0.0).is_err());
    }

    #[test]
    fn test_deserialize_validates_radius() {
        let c: Circle = serde_json::from_str(r#"{"radius": 2.5}"#).unwrap();
        assert_eq!(c.radius(), 2.5);

        let err = serde_json::from_str::<Circle>(r#"{"radius": -5.0}"#).unwrap_err();
        assert!(err.to_string().contains("radius must be a non-negative number"));

        let nested = r#"{"circle": {"radius": -1.0}, "centre": {"x": 0.0, "y": 0.0}}"#;
        assert!(serde_json::from_str::<PlaneCircle>(nested).is_err());
    }

    #[test]
    fn test_rectangle() {
        let r = Rectangle::new(3.0, 4.0);
        assert_eq!(r.area(), 12.0);
        assert_eq!(r.circumference(), 14.0);
    }

    #[test]
    fn test_plane_circle_inside() {
        let pc = PlaneCircle::new(1.0, 5.0, 5.0).unwrap();
        assert!(pc.is_inside(5.5, 5.5));
        assert!(!pc.is_inside(6.0, 5.0));
        assert!(!pc.is_inside(0.0, 0.0));
        assert!((pc.area() - PI).abs() < EPS);
    }

    #[test]
    fn test_radians_to_degrees() {
        assert!((radians_to_degrees(PI) - 180.0).abs() < EPS);
        assert!((radians_to_degrees(PI / 2.0) - 90.0).abs() < EPS);
    }

    #[test]
    fn test_point_display() {
        assert_eq!(Point::new(1.5, -2.0).to_string(), "Point{x=1.5, y=-2}");
    }

    #[test]
    fn test_trig_table_endpoints() {
        let table = TrigTable::new();
        assert_eq!(table.sines().len(), TRIG_POINTS);
        assert!(table.sines()[0].abs() < EPS);
        assert!((table.sines()[TRIG_POINTS - 1] - 1.0).abs() < EPS);
        assert!((table.cosines()[0] - 1.0).abs() < EPS);
        assert!(table.cosines()[TRIG_POINTS - 1].abs() < EPS);
    }

    #[test]
    fn test_quarter_outline_lies_on_circle() {
        let table = TrigTable::new();
        let pc = PlaneCircle::new(3.0, 1.0, -1.0).unwrap();
        for p in table.quarter_outline(&pc) {
            assert!((p.distance_to(&pc.centre()) - 3.0).abs() < 1e-9);
        }
    }
}
