//! Diverging colormaps interpolated in the MSH space.
//!
//! Adapted from Kenneth Moreland, “Diverging Color Maps for Scientific
//! Visualization” (2009): the two endpoint colors are blended through
//! a white (or light gray) middle color so that the lightness peaks at
//! the midpoint and the hue never drifts through unrelated colors.

use std::f64::consts::PI;
use lazy_static::lazy_static;
use rgb::RGBA8;
use tracing::{debug, trace};
use crate::colormap::{Colormapper, Scale, ScaledColormapper};
use crate::{MshFloat, RGBColor};

/// Saturation under which a color is considered neutral.
const UNSATURATED: f64 = 0.05;
/// Lower bound for the magnitude of the white middle color.
const MID_MAGNITUDE: f64 = 88.;

lazy_static! {
    /// Endpoints of [`blue_red`] (cool to warm).
    static ref BLUE_RED: (MshFloat, MshFloat) =
        (RGBA8::new(59, 76, 192, 255).to_msh(),
         RGBA8::new(180, 4, 38, 255).to_msh());
}

/// The diverging colormap from blue (low values) to red (high
/// values), scaled to \[0, 1\].
///
/// ```
/// use rgb::RGB8;
/// use plot_colormap::{blue_red, Colormapper};
/// let d = blue_red();
/// let c: RGB8 = d.colormap(0.);
/// assert_eq!(c, RGB8::new(59, 76, 192));
/// ```
pub fn blue_red() -> Diverging {
    let (low, high) = *BLUE_RED;
    Diverging::from_msh(low, high)
}

/// The hue to give to an unsaturated color of magnitude `unsat_m`
/// that is interpolated with the saturated color `msh`.
///
/// The hue is spun away from that of `msh` so that the perceptual
/// change along the interpolation is close to constant.
pub fn adjust_hue(msh: &MshFloat, unsat_m: f64) -> f64 {
    if msh.m >= unsat_m - 0.1 {
        // The best we can do is hold hue constant.
        return msh.h;
    }
    let denom = msh.m * msh.s.sin();
    if denom == 0. {
        return msh.h;
    }
    let hue_spin = msh.s * (unsat_m * unsat_m - msh.m * msh.m).sqrt() / denom;
    // Spin hue away from 0 except in purple hues.
    if msh.h > -PI / 3. { msh.h + hue_spin } else { msh.h - hue_spin }
}

/// Smallest angle between two orientations (in radians).
pub fn angle_diff(a: f64, b: f64) -> f64 {
    let (sa, ca) = a.sin_cos();
    let (sb, cb) = b.sin_cos();
    (ca * cb + sa * sb).clamp(-1., 1.).acos()
}

/// Value at which the interpolation pivots, either derived from the
/// scale or set explicitly.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Midpoint {
    value: f64,
    overridden: bool,
}

/// Diverging colormap between a low and a high color.
///
/// Values below the midpoint are interpolated from the low color to
/// the middle one, values above from the middle one to the high color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Diverging {
    low: MshFloat,
    high: MshFloat,
    scale: Scale,
    midpoint: Midpoint,
}

#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 { (1. - t) * a + t * b }

/// `num / den`, or 0 on a degenerate half of the scale.
#[inline]
fn fraction(num: f64, den: f64) -> f64 { if den == 0. { 0. } else { num / den } }

impl Diverging {
    /// Diverging colormap from `low` to `high`, scaled to \[0, 1\].
    pub fn new<C: RGBColor>(low: &C, high: &C) -> Self {
        Self::from_msh(low.to_msh(), high.to_msh())
    }

    /// Same as [`Diverging::new`] with the endpoints given in MSH.
    pub fn from_msh(low: MshFloat, high: MshFloat) -> Self {
        let scale = Scale::default();
        Diverging { low, high, scale,
                    midpoint: Midpoint { value: (scale.min + scale.max) / 2.,
                                         overridden: false } }
    }

    /// Replace the endpoint colors.
    pub fn set_colors<C: RGBColor>(&mut self, low: &C, high: &C) {
        self.low = low.to_msh();
        self.high = high.to_msh();
    }

    /// The color of the low end.
    pub fn low(&self) -> MshFloat { self.low }

    /// The color of the high end.
    pub fn high(&self) -> MshFloat { self.high }

    pub fn midpoint(&self) -> f64 { self.midpoint.value }

    /// Whether the midpoint was set with [`Diverging::set_midpoint`].
    pub fn is_midpoint_set(&self) -> bool { self.midpoint.overridden }

    /// Pivot the interpolation at `mid` instead of the middle of the
    /// scale.  The value is kept by later calls to `set_scale`.
    pub fn set_midpoint(&mut self, mid: f64) {
        self.midpoint = Midpoint { value: mid, overridden: true };
    }

    /// Go back to pivoting at the middle of the scale.
    pub fn reset_midpoint(&mut self) {
        self.midpoint = Midpoint { value: (self.scale.max + self.scale.min) / 2.,
                                   overridden: false };
    }

    /// The color of `v` in the MSH space.
    ///
    /// Unlike [`Jet`](crate::Jet) and [`Grayscale`](crate::Grayscale),
    /// values outside the scale are not clamped: the interpolation is
    /// extrapolated beyond the endpoint colors.
    pub fn msh(&self, v: f64) -> MshFloat {
        let mid = self.midpoint.value;
        let mut low = self.low;
        let mut high = self.high;
        if low.s > UNSATURATED && high.s > UNSATURATED {
            // Go through white on the way to the far endpoint.
            let m_mid = low.m.max(high.m).max(MID_MAGNITUDE);
            let white = MshFloat { m: m_mid, s: 0., h: 0., ..low };
            if v < mid {
                high = MshFloat { alpha: high.alpha, ..white };
            } else {
                low = MshFloat { alpha: low.alpha, ..white };
            }
        }

        if low.s < UNSATURATED && high.s > UNSATURATED {
            low.h = adjust_hue(&high, low.m);
        } else if high.s < UNSATURATED && low.s > UNSATURATED {
            high.h = adjust_hue(&low, high.m);
        }

        let t = if v < mid {
            fraction(v - self.scale.min, mid - self.scale.min)
        } else {
            fraction(v - mid, self.scale.max - mid)
        };
        MshFloat { m: lerp(low.m, high.m, t),
                   s: lerp(low.s, high.s, t),
                   h: lerp(low.h, high.h, t),
                   alpha: lerp(low.alpha, high.alpha, t) }
    }
}

impl<Color: RGBColor> Colormapper<Color> for Diverging {
    fn colormap(&self, v: f64) -> Color { Color::from_msh(self.msh(v)) }

    fn as_scaled_mut(&mut self) -> Option<&mut dyn ScaledColormapper<Color>> {
        Some(self)
    }
}

impl<Color: RGBColor> ScaledColormapper<Color> for Diverging {
    /// Set the scale.  Unless it was set explicitly, the midpoint
    /// moves to the middle of the new scale.
    fn set_scale(&mut self, min: f64, max: f64) {
        self.scale = Scale { min, max };
        if self.midpoint.overridden {
            debug!(min, max, midpoint = self.midpoint.value,
                   "keeping explicit diverging midpoint");
        } else {
            self.midpoint.value = (max + min) / 2.;
        }
        trace!(min, max, midpoint = self.midpoint.value, "diverging scale set");
    }

    fn scale(&self) -> (f64, f64) { (self.scale.min, self.scale.max) }
}
