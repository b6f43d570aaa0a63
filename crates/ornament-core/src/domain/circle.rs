//! Circle - 半径を検証する値オブジェクト
//!
//! # 学習ポイント
//! - setter を `Result` を返すメソッドで表す（例外ではなく値で失敗を返す）
//! - コンストラクタも同じ検証を通す（不変条件: radius >= 0）
//! - 面積・体積は保持せず、毎回 radius から計算する

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fixed approximation of π used by every derived quantity.
#[allow(clippy::approx_constant)]
pub const PI_APPROX: f64 = 3.1415926535;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CircleError {
    #[error("radius must be non-negative, got {0}")]
    NegativeRadius(f64),
}

/// A circle with a radius that is never negative (and never NaN).
///
/// # 使用例
/// ```ignore
/// let mut c = Circle::new(5.0)?;
/// assert_eq!(c.area(), Circle::pi() * 25.0);
/// assert!(c.set_radius(-1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCircle")]
pub struct Circle {
    radius: f64,
}

#[derive(Deserialize)]
struct RawCircle {
    radius: f64,
}

impl TryFrom<RawCircle> for Circle {
    type Error = CircleError;

    fn try_from(raw: RawCircle) -> Result<Self, Self::Error> {
        Circle::new(raw.radius)
    }
}

impl Circle {
    pub fn new(radius: f64) -> Result<Self, CircleError> {
        validate(radius)?;
        Ok(Self { radius })
    }

    /// Circle with radius 1.
    pub fn unit_circle() -> Self {
        Self { radius: 1.0 }
    }

    pub fn pi() -> f64 {
        PI_APPROX
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Replace the radius. On error the stored radius is left untouched.
    pub fn set_radius(&mut self, radius: f64) -> Result<(), CircleError> {
        validate(radius)?;
        self.radius = radius;
        Ok(())
    }

    pub fn area(&self) -> f64 {
        Self::pi() * self.radius.powi(2)
    }

    /// Volume of a cylinder with this circle as its base.
    ///
    /// `height` is not checked; a negative height gives a negative volume.
    pub fn cylinder_volume(&self, height: f64) -> f64 {
        self.area() * height
    }
}

fn validate(radius: f64) -> Result<(), CircleError> {
    // NaN fails this comparison too
    if radius >= 0.0 {
        Ok(())
    } else {
        Err(CircleError::NegativeRadius(radius))
    }
}
