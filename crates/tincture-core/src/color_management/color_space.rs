//! 3x3 matrix transforms and the fixed matrices used by the conversions.
//!
//! Coefficients are written row-major, as published. `ColorMatrix` stores them
//! in a `glam::DMat3` (column-major) and multiplies column vectors.

use glam::{DMat3, DVec3};

/// A 3x3 color matrix for linear color space conversions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorMatrix(pub DMat3);

impl ColorMatrix {
    /// Build a matrix from row-major coefficients.
    pub const fn from_rows(rows: [[f64; 3]; 3]) -> Self {
        let [r0, r1, r2] = rows;
        Self(DMat3::from_cols(
            DVec3::new(r0[0], r1[0], r2[0]),
            DVec3::new(r0[1], r1[1], r2[1]),
            DVec3::new(r0[2], r1[2], r2[2]),
        ))
    }

    /// Apply this matrix to an RGB (or LMS) triplet.
    pub fn apply(&self, v: [f64; 3]) -> [f64; 3] {
        self.0.mul_vec3(DVec3::from_array(v)).to_array()
    }
}

/// Linear sRGB → LMS cone response (Oklab M1).
pub const LINEAR_SRGB_TO_LMS: ColorMatrix = ColorMatrix::from_rows([
    [0.4122214708, 0.5363325363, 0.0514459929],
    [0.2119034982, 0.6806995451, 0.1073969566],
    [0.0883024619, 0.2817188376, 0.6299787005],
]);

/// Cube-rooted LMS → Oklab (Oklab M2).
pub const LMS_TO_OKLAB: ColorMatrix = ColorMatrix::from_rows([
    [0.2104542553, 0.7936177850, -0.0040720468],
    [1.9779984951, -2.4285922050, 0.4505937099],
    [0.0259040371, 0.7827717662, -0.8086757660],
]);

/// Oklab → cube-rooted LMS (inverse of M2).
pub const OKLAB_TO_LMS: ColorMatrix = ColorMatrix::from_rows([
    [1.0, 0.3963377774, 0.2158037573],
    [1.0, -0.1055613458, -0.0638541728],
    [1.0, -0.0894841775, -1.2914855480],
]);

/// LMS → linear sRGB (inverse of M1).
pub const LMS_TO_LINEAR_SRGB: ColorMatrix = ColorMatrix::from_rows([
    [4.0767416621, -3.3077115913, 0.2309699292],
    [-1.2684380046, 2.6097574011, -0.3413193965],
    [-0.0041960863, -0.7034186147, 1.7076147010],
]);

/// Linear Display-P3 → linear sRGB (both D65).
pub const LINEAR_P3_TO_LINEAR_SRGB: ColorMatrix = ColorMatrix::from_rows([
    [1.2249401761, -0.2247460786, 0.0],
    [-0.0420569548, 1.0419018569, 0.0],
    [-0.0196378544, -0.0786361379, 1.0979486377],
]);

/// Linear sRGB → linear Display-P3 (both D65).
pub const LINEAR_SRGB_TO_LINEAR_P3: ColorMatrix = ColorMatrix::from_rows([
    [0.8224621186, 0.1775378814, 0.0],
    [0.0331941748, 0.9668058252, 0.0],
    [0.0170827216, 0.0723974418, 0.9108000000],
]);
