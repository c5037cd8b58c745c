//! Host-space coordinates for placing cells and markers on a drawing surface.

use std::ops::{Add, Mul, Sub};

/// A point or displacement in the host's 2D coordinate space.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vector {
    /// Horizontal component.
    pub x: f64,
    /// Vertical component, growing downward.
    pub y: f64,
}

impl Vector {
    /// Construct a vector from its components.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Add for Vector {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vector {
    type Output = Self;

    fn mul(self, lambda: f64) -> Self::Output {
        Self::new(self.x * lambda, self.y * lambda)
    }
}

#[cfg(test)]
mod tests {
    use super::Vector;

    #[test]
    fn sub_is_add_of_negation() {
        let a = Vector::new(3.0, -2.0);
        let b = Vector::new(0.5, 4.0);
        assert_eq!(a - b, a + b * -1.0);
    }
}
