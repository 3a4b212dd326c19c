//! Affine transform helpers.

use std::f64::consts::FRAC_PI_2;

use crate::foundation::core::{Affine, Point, Size};

#[inline]
/// Map a fractional point in a view's bounds through the view's transform.
pub fn project_unit_point(unit: Point, bounds_size: Size, transform: Affine) -> Point {
    transform * Point::new(bounds_size.width * unit.x, bounds_size.height * unit.y)
}

#[inline]
/// Mirror across the x axis (`scale(1, -1)`).
pub fn flip_vertical() -> Affine {
    Affine::FLIP_Y
}

#[inline]
/// Quarter turn, clockwise on a y-down screen when `clockwise` is set.
pub fn quarter_turn(clockwise: bool) -> Affine {
    Affine::rotate(if clockwise { FRAC_PI_2 } else { -FRAC_PI_2 })
}

#[cfg(test)]
#[path = "../../tests/unit/transform/affine.rs"]
mod tests;
