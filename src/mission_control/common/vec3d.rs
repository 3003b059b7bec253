use num_traits::{Num, NumAssignOps, NumCast, real::Real};
use std::ops::{Add, Div, Mul, Sub};

/// A 3D vector generic over any numeric type.
///
/// Represents a point or direction in simulation-world coordinates and
/// provides the usual vector operations (norm, distance, dot product,
/// component-wise arithmetic).
///
/// # Type Parameters
/// * `T` - The functionality for the vector depends on traits implemented by `T`.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Vec3D<T> {
    /// The x-component of the vector.
    x: T,
    /// The y-component of the vector.
    y: T,
    /// The z-component (vertical axis, positive up).
    z: T,
}

impl<T> Vec3D<T>
where
    T: Real + NumCast + NumAssignOps,
{
    /// Computes the magnitude (Euclidean norm) of the vector.
    pub fn abs(&self) -> T { (self.x.powi(2) + self.y.powi(2) + self.z.powi(2)).sqrt() }

    /// Creates a vector pointing from the current vector (`self`) to another vector (`other`).
    pub fn to(&self, other: &Vec3D<T>) -> Vec3D<T> {
        Vec3D::new(other.x - self.x, other.y - self.y, other.z - self.z)
    }

    /// Normalizes the vector to have a magnitude of 1.
    /// If the magnitude is zero, the original vector is returned unmodified.
    pub fn normalize(self) -> Self {
        let magnitude = self.abs();
        if magnitude.is_zero() {
            self
        } else {
            Self::new(self.x / magnitude, self.y / magnitude, self.z / magnitude)
        }
    }

    /// Computes the Euclidean distance between the current vector and another vector.
    pub fn euclid_distance(&self, other: &Self) -> T {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2) + (self.z - other.z).powi(2))
            .sqrt()
    }
}

impl<T: Copy> Vec3D<T> {
    /// Creates a new vector with the given x, y and z components.
    pub const fn new(x: T, y: T, z: T) -> Self { Self { x, y, z } }

    /// Returns the x-component of the vector.
    pub const fn x(&self) -> T { self.x }

    /// Returns the y-component of the vector.
    pub const fn y(&self) -> T { self.y }

    /// Returns the z-component of the vector.
    pub const fn z(&self) -> T { self.z }
}

impl<T: Num + NumCast + Copy> Vec3D<T> {
    /// Computes the dot product of the current vector with another vector.
    pub fn dot(self, other: Vec3D<T>) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Creates a zero vector (x = 0, y = 0, z = 0).
    pub fn zero() -> Self { Self::new(T::zero(), T::zero(), T::zero()) }

    pub fn cast<D: NumCast>(self) -> Vec3D<D> {
        Vec3D {
            x: D::from(self.x).unwrap(),
            y: D::from(self.y).unwrap(),
            z: D::from(self.z).unwrap(),
        }
    }
}

impl<T, TAdd> Add<Vec3D<TAdd>> for Vec3D<T>
where
    T: Num + NumCast,
    TAdd: Num + NumCast,
{
    type Output = Vec3D<T>;

    fn add(self, rhs: Vec3D<TAdd>) -> Self::Output {
        Self::Output {
            x: self.x + T::from(rhs.x).unwrap(),
            y: self.y + T::from(rhs.y).unwrap(),
            z: self.z + T::from(rhs.z).unwrap(),
        }
    }
}

impl<T, TSub> Sub<Vec3D<TSub>> for Vec3D<T>
where
    T: Num + NumCast,
    TSub: Num + NumCast,
{
    type Output = Vec3D<T>;

    fn sub(self, rhs: Vec3D<TSub>) -> Self::Output {
        Self::Output {
            x: self.x - T::from(rhs.x).unwrap(),
            y: self.y - T::from(rhs.y).unwrap(),
            z: self.z - T::from(rhs.z).unwrap(),
        }
    }
}

impl<T, TMul> Mul<TMul> for Vec3D<T>
where
    T: Num + NumCast,
    TMul: Num + NumCast + Copy,
{
    type Output = Vec3D<T>;

    fn mul(self, rhs: TMul) -> Self::Output {
        Self::Output {
            x: self.x * T::from(rhs).unwrap(),
            y: self.y * T::from(rhs).unwrap(),
            z: self.z * T::from(rhs).unwrap(),
        }
    }
}

impl<T, TDiv> Div<TDiv> for Vec3D<T>
where
    T: Num + NumCast,
    TDiv: Num + NumCast + Copy,
{
    type Output = Vec3D<T>;

    fn div(self, rhs: TDiv) -> Self::Output {
        Self::Output {
            x: self.x / T::from(rhs).unwrap(),
            y: self.y / T::from(rhs).unwrap(),
            z: self.z / T::from(rhs).unwrap(),
        }
    }
}

impl<T: Num + NumCast> From<(T, T, T)> for Vec3D<T> {
    fn from(tuple: (T, T, T)) -> Self {
        Vec3D { x: tuple.0, y: tuple.1, z: tuple.2 }
    }
}

#[cfg(test)]
mod tests {
    use super::Vec3D;

    #[test]
    fn test_norm_and_distance() {
        let a: Vec3D<f64> = Vec3D::new(1.0, 2.0, 2.0);
        assert!((a.abs() - 3.0).abs() < 1e-12);
        let b = Vec3D::new(1.0, 2.0, 5.0);
        assert!((a.euclid_distance(&b) - 3.0).abs() < 1e-12);
        assert_eq!(a.to(&b), Vec3D::new(0.0, 0.0, 3.0));
    }

    #[test]
    fn test_normalize_zero_is_identity() {
        let z: Vec3D<f64> = Vec3D::zero();
        assert_eq!(z.normalize(), z);
        let v: Vec3D<f64> = Vec3D::new(0.0, 3.0, 4.0).normalize();
        assert!((v.abs() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_component_arithmetic() {
        let a: Vec3D<f64> = Vec3D::new(1.0, -2.0, 0.5);
        let b: Vec3D<f64> = Vec3D::new(2.0, 2.0, 1.5);
        assert_eq!(a + b, Vec3D::new(3.0, 0.0, 2.0));
        assert_eq!(b - a, Vec3D::new(1.0, 4.0, 1.0));
        assert_eq!(a * 2.0, Vec3D::new(2.0, -4.0, 1.0));
        assert!((a.dot(b) - (2.0 - 4.0 + 0.75)).abs() < 1e-12);
    }
}
