/// Affine helpers: anchor projection and arrow orientation transforms.
pub mod affine;
/// Scalar interpolation helpers.
pub mod linear;
