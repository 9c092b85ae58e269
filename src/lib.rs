//! Colormaps for scientific plots.
//!
//! - [`Colormapper`]s turn a data value into a color: [`Uniform`],
//!   [`Jet`], [`Grayscale`] and the perceptual [`Diverging`] map
//!   (see [`blue_red`]).
//! - [`ScaledColormapper`]s additionally carry the data range they
//!   normalize against.
//! - [`ColoredScatter`] binds a colormap to the z range of a set of
//!   points.
//!
//! Colors are converted between sRGB, CIE XYZ, CIE L*a*b* and MSH by
//! [`RgbFloat`], [`XyzFloat`], [`LabFloat`] and [`MshFloat`].  Any
//! pixel type of the [`rgb`] crate can be produced through the
//! [`RGBColor`] trait.

use rgb::{RGBA, RGB8, RGB16, RGBA8, RGBA16};

mod colormap;
mod data;
mod diverging;
mod error;
mod scatter;
mod space;

pub use colormap::{bounded_normalize, Colormapper, Grayscale, Jet, Range,
                   ScaledColormapper, Uniform};
pub use data::{copy_xyzs, sort_by_x, GridMat, VecXY, VecXYZ, XYer, XYZer,
               XY, XYZ};
pub use diverging::{adjust_hue, angle_diff, blue_red, Diverging};
pub use error::{Error, Result};
pub use scatter::ColoredScatter;
pub use space::{LabFloat, MshFloat, RgbFloat, XyzFloat};

/// Specifies the conversions a color encoding must provide to be
/// produced by a [`Colormapper`].
pub trait RGBColor: Sized {
    /// Return the red, green, blue and alpha components of the color
    /// (in \[0, 1\]).
    fn to_rgb_float(&self) -> RgbFloat;

    /// Create a color from its RGBA components (in \[0, 1\]).
    fn from_rgb_float(c: RgbFloat) -> Self;

    /// Create a color from its MSH representation.  Encodings able to
    /// hold MSH directly should not go through RGB (which clips).
    #[inline]
    fn from_msh(c: MshFloat) -> Self { Self::from_rgb_float(c.to_rgb()) }

    /// The color in the CIE XYZ space.
    #[inline]
    fn to_xyz(&self) -> XyzFloat { self.to_rgb_float().to_xyz() }

    /// The color in the CIE L*a*b* space.
    #[inline]
    fn to_lab(&self) -> LabFloat { self.to_rgb_float().to_lab() }

    /// The color in the MSH space.
    ///
    /// # Example
    ///
    /// ```
    /// use rgb::RGB8;
    /// use plot_colormap::RGBColor;
    /// let msh = RGB8::new(59, 76, 192).to_msh();
    /// assert!(msh.s > 0.05);
    /// ```
    #[inline]
    fn to_msh(&self) -> MshFloat { self.to_rgb_float().to_msh() }
}

impl RGBColor for RGBA<f64> {
    #[inline]
    fn to_rgb_float(&self) -> RgbFloat {
        RgbFloat { r: self.r, g: self.g, b: self.b, alpha: self.a }
    }

    #[inline]
    fn from_rgb_float(c: RgbFloat) -> Self {
        RGBA { r: c.r, g: c.g, b: c.b, a: c.alpha }
    }
}

impl RGBColor for RGB8 {
    #[inline]
    fn to_rgb_float(&self) -> RgbFloat {
        const MAX: f64 = u8::MAX as f64;
        RgbFloat { r: self.r as f64 / MAX, g: self.g as f64 / MAX,
                   b: self.b as f64 / MAX, alpha: 1. }
    }

    #[inline]
    fn from_rgb_float(c: RgbFloat) -> Self { c.to_rgba8().rgb() }
}

impl RGBColor for RGB16 {
    #[inline]
    fn to_rgb_float(&self) -> RgbFloat {
        const MAX: f64 = u16::MAX as f64;
        RgbFloat { r: self.r as f64 / MAX, g: self.g as f64 / MAX,
                   b: self.b as f64 / MAX, alpha: 1. }
    }

    #[inline]
    fn from_rgb_float(c: RgbFloat) -> Self { c.to_rgba16().rgb() }
}

impl RGBColor for RGBA8 {
    #[inline]
    fn to_rgb_float(&self) -> RgbFloat {
        const MAX: f64 = u8::MAX as f64;
        RgbFloat { r: self.r as f64 / MAX, g: self.g as f64 / MAX,
                   b: self.b as f64 / MAX, alpha: self.a as f64 / MAX }
    }

    #[inline]
    fn from_rgb_float(c: RgbFloat) -> Self { c.to_rgba8() }
}

impl RGBColor for RGBA16 {
    #[inline]
    fn to_rgb_float(&self) -> RgbFloat { RgbFloat::from_rgba16(*self) }

    #[inline]
    fn from_rgb_float(c: RgbFloat) -> Self { c.to_rgba16() }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_types_round_trip() {
        let c8 = RGBA8::new(226, 34, 115, 112);
        assert_eq!(RGBA8::from_rgb_float(c8.to_rgb_float()), c8);
        assert_eq!(RGB8::from_rgb_float(c8.to_rgb_float()), c8.rgb());
        let c16 = RGBA16::new(1, 30_000, 65_535, 0);
        assert_eq!(RGBA16::from_rgb_float(c16.to_rgb_float()), c16);
        assert_eq!(RGB16::from_rgb_float(c16.to_rgb_float()), c16.rgb());
        let cf = RGBA::new(0.25, 0.5, 0.75, 1.);
        assert_eq!(RGBA::<f64>::from_rgb_float(cf.to_rgb_float()), cf);
    }

    #[test]
    fn opaque_without_alpha() {
        assert_eq!(RGB8::new(1, 2, 3).to_rgb_float().alpha, 1.);
        assert_eq!(RGB16::new(1, 2, 3).to_rgb_float().alpha, 1.);
    }

    #[test]
    fn bit_depths_agree() {
        let c8 = RGBA8::new(59, 76, 192, 255);
        let c16 = RGBA16::new(59 * 257, 76 * 257, 192 * 257, 65_535);
        assert_eq!(c8.to_rgb_float(), c16.to_rgb_float());
    }

    #[test]
    fn msh_is_kept_as_is() {
        let m = MshFloat::new(88., 0.3, 1.2, 0.5);
        assert_eq!(MshFloat::from_msh(m), m);
    }
}
