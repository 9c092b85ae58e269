//! Float color representations and the conversions between them.
//!
//! The chain is RGB ↔ XYZ ↔ Lab ↔ MSH.  RGB is gamma encoded sRGB,
//! XYZ uses the D65 illuminant with a 2° observer, and MSH
//! (magnitude, saturation, hue) is a polar form of Lab used to
//! interpolate diverging colormaps.  See Kenneth Moreland, “Diverging
//! Color Maps for Scientific Visualization” (2009).
//!
//! All conversions are pure and carry the alpha component unchanged.

use rgb::{RGBA16, RGBA8};
use crate::RGBColor;

/// D65 reference white.
const REF_X: f64 = 0.95047;
const REF_Y: f64 = 1.000;
const REF_Z: f64 = 1.08883;

/// Below this (normalized) value, Lab uses its linear segment.
const LAB_EPS: f64 = 0.008856;
const LAB_KAPPA: f64 = 7.787;
const LAB_OFFSET: f64 = 16. / 116.;

const RGB_TO_XYZ: [[f64; 3]; 3] = [
    [0.4124, 0.3576, 0.1805],
    [0.2126, 0.7152, 0.0722],
    [0.0193, 0.1192, 0.9505]];

const XYZ_TO_RGB: [[f64; 3]; 3] = [
    [3.24063, -1.53721, -0.498629],
    [-0.968931, 1.87576, 0.0415175],
    [0.0557101, -0.204021, 1.0570]];

#[inline]
fn mul(m: &[[f64; 3]; 3], v: [f64; 3]) -> [f64; 3] {
    [m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2],
     m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2],
     m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2]]
}

/// sRGB (IEC 61966-2-1) decoding to linear light.
#[inline]
fn srgb_to_linear(c: f64) -> f64 {
    if c > 0.04045 { ((c + 0.055) / 1.055).powf(2.4) } else { c / 12.92 }
}

/// sRGB encoding of a linear light value.
#[inline]
fn linear_to_srgb(c: f64) -> f64 {
    if c > 0.0031308 { 1.055 * c.powf(1. / 2.4) - 0.055 } else { 12.92 * c }
}

#[inline]
fn lab_f(t: f64) -> f64 {
    if t > LAB_EPS { t.powf(1. / 3.) } else { LAB_KAPPA * t + LAB_OFFSET }
}

#[inline]
fn lab_f_inv(v: f64) -> f64 {
    let v3 = v.powi(3);
    if v3 > LAB_EPS { v3 } else { (v - LAB_OFFSET) / LAB_KAPPA }
}

#[inline]
fn quantize(c: f64, max: f64) -> f64 { (c.clamp(0., 1.) * max).round() }

/// A color in gamma encoded sRGB with components in \[0, 1\].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RgbFloat {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub alpha: f64,
}

impl RgbFloat {
    pub const fn new(r: f64, g: f64, b: f64, alpha: f64) -> Self {
        Self { r, g, b, alpha }
    }

    /// Ratios of the 16-bit channels to their maximum.
    pub fn from_rgba16(c: RGBA16) -> Self {
        const MAX: f64 = u16::MAX as f64;
        Self { r: c.r as f64 / MAX, g: c.g as f64 / MAX,
               b: c.b as f64 / MAX, alpha: c.a as f64 / MAX }
    }

    /// Quantize to 16-bit channels, clamping to \[0, 1\] first.
    pub fn to_rgba16(&self) -> RGBA16 {
        const MAX: f64 = u16::MAX as f64;
        RGBA16 { r: quantize(self.r, MAX) as u16, g: quantize(self.g, MAX) as u16,
                 b: quantize(self.b, MAX) as u16,
                 a: quantize(self.alpha, MAX) as u16 }
    }

    /// Quantize to 8-bit channels, clamping to \[0, 1\] first.
    pub fn to_rgba8(&self) -> RGBA8 {
        const MAX: f64 = u8::MAX as f64;
        RGBA8 { r: quantize(self.r, MAX) as u8, g: quantize(self.g, MAX) as u8,
                b: quantize(self.b, MAX) as u8,
                a: quantize(self.alpha, MAX) as u8 }
    }

    pub fn to_xyz(&self) -> XyzFloat {
        let lin = [srgb_to_linear(self.r), srgb_to_linear(self.g),
                   srgb_to_linear(self.b)];
        let [x, y, z] = mul(&RGB_TO_XYZ, lin);
        XyzFloat { x, y, z, alpha: self.alpha }
    }

    pub fn to_lab(&self) -> LabFloat { self.to_xyz().to_lab() }

    pub fn to_msh(&self) -> MshFloat { self.to_lab().to_msh() }
}

/// A color in the CIE XYZ space (D65, 2° observer).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct XyzFloat {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub alpha: f64,
}

impl XyzFloat {
    pub const fn new(x: f64, y: f64, z: f64, alpha: f64) -> Self {
        Self { x, y, z, alpha }
    }

    /// Convert to sRGB.
    ///
    /// Colors outside the gamut are clipped: if a channel exceeds 1,
    /// all three are divided by the largest (keeping the hue), then
    /// negative channels are set to 0.  This is not the perceptually
    /// closest color, but it is the policy the rest of the crate
    /// relies upon.
    pub fn to_rgb(&self) -> RgbFloat {
        let [r, g, b] = mul(&XYZ_TO_RGB, [self.x, self.y, self.z]);
        let (mut r, mut g, mut b) =
            (linear_to_srgb(r), linear_to_srgb(g), linear_to_srgb(b));
        let max = r.max(g).max(b);
        if max > 1. {
            r /= max;
            g /= max;
            b /= max;
        }
        RgbFloat { r: r.max(0.), g: g.max(0.), b: b.max(0.), alpha: self.alpha }
    }

    pub fn to_lab(&self) -> LabFloat {
        let fx = lab_f(self.x / REF_X);
        let fy = lab_f(self.y / REF_Y);
        let fz = lab_f(self.z / REF_Z);
        LabFloat { l: 116. * fy - 16.,
                   a: 500. * (fx - fy),
                   b: 200. * (fy - fz),
                   alpha: self.alpha }
    }
}

/// A color in the CIE L*a*b* space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LabFloat {
    /// The lightness, nominally in \[0, 100\].
    pub l: f64,
    pub a: f64,
    pub b: f64,
    pub alpha: f64,
}

impl LabFloat {
    pub const fn new(l: f64, a: f64, b: f64, alpha: f64) -> Self {
        Self { l, a, b, alpha }
    }

    pub fn to_xyz(&self) -> XyzFloat {
        let fy = (self.l + 16.) / 116.;
        let fx = self.a / 500. + fy;
        let fz = fy - self.b / 200.;
        XyzFloat { x: REF_X * lab_f_inv(fx),
                   y: REF_Y * lab_f_inv(fy),
                   z: REF_Z * lab_f_inv(fz),
                   alpha: self.alpha }
    }

    pub fn to_rgb(&self) -> RgbFloat { self.to_xyz().to_rgb() }

    /// Polar form of the color.  The saturation is only defined when
    /// the magnitude exceeds 0.001, and the hue when the saturation
    /// does; otherwise they are set to 0.
    pub fn to_msh(&self) -> MshFloat {
        let m = (self.l * self.l + self.a * self.a + self.b * self.b).sqrt();
        let s = if m > 0.001 { (self.l / m).acos() } else { 0. };
        let h = if s > 0.001 { self.b.atan2(self.a) } else { 0. };
        MshFloat { m, s, h, alpha: self.alpha }
    }
}

/// A color in the Magnitude-Saturation-Hue space, the polar form of
/// Lab where the saturation is measured from the lightness axis.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MshFloat {
    /// Euclidean norm of (L, a, b).
    pub m: f64,
    /// Angle from the L axis, in radians (\[0, π\]).
    pub s: f64,
    /// Angle in the (a, b) plane, in radians.
    pub h: f64,
    pub alpha: f64,
}

impl MshFloat {
    pub const fn new(m: f64, s: f64, h: f64, alpha: f64) -> Self {
        Self { m, s, h, alpha }
    }

    pub fn to_lab(&self) -> LabFloat {
        let (sin_s, cos_s) = self.s.sin_cos();
        LabFloat { l: self.m * cos_s,
                   a: self.m * sin_s * self.h.cos(),
                   b: self.m * sin_s * self.h.sin(),
                   alpha: self.alpha }
    }

    pub fn to_rgb(&self) -> RgbFloat { self.to_lab().to_xyz().to_rgb() }
}

impl RGBColor for RgbFloat {
    #[inline]
    fn to_rgb_float(&self) -> RgbFloat { *self }

    #[inline]
    fn from_rgb_float(c: RgbFloat) -> Self { c }
}

impl RGBColor for XyzFloat {
    #[inline]
    fn to_rgb_float(&self) -> RgbFloat { self.to_rgb() }

    #[inline]
    fn from_rgb_float(c: RgbFloat) -> Self { c.to_xyz() }
}

impl RGBColor for LabFloat {
    #[inline]
    fn to_rgb_float(&self) -> RgbFloat { self.to_rgb() }

    #[inline]
    fn from_rgb_float(c: RgbFloat) -> Self { c.to_lab() }
}

impl RGBColor for MshFloat {
    #[inline]
    fn to_rgb_float(&self) -> RgbFloat { self.to_rgb() }

    #[inline]
    fn from_rgb_float(c: RgbFloat) -> Self { c.to_msh() }

    #[inline]
    fn from_msh(c: MshFloat) -> Self { c }
}
