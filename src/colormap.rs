//! Value to color mappings.

use std::marker::PhantomData;
use rgb::RGBA8;
use crate::RGBColor;

/// Maps a data value to a color.
pub trait Colormapper<Color> {
    /// Returns the color corresponding to the value `v`.
    fn colormap(&self, v: f64) -> Color;

    /// Returns the mapper as a [`ScaledColormapper`] if it normalizes
    /// its input against a data range, `None` otherwise.
    fn as_scaled_mut(&mut self) -> Option<&mut dyn ScaledColormapper<Color>> {
        None
    }

    /// Return an iterator yielding uniform sampling of `n` values
    /// between `a` and `b` (with the bounds `a` and `b` included in
    /// the list of points) together with their colors.  It is not
    /// required that `a <= b`.
    fn range(&self, a: f64, b: f64, n: usize) -> Range<'_, Self, Color>
    where Self: Sized {
        Range::new(self, a, b, n)
    }
}

/// A [`Colormapper`] that maps values of the range \[`min`, `max`\].
pub trait ScaledColormapper<Color>: Colormapper<Color> {
    /// Set the range of data values covered by the colormap.
    fn set_scale(&mut self, min: f64, max: f64);

    /// Returns `(min, max)`.
    fn scale(&self) -> (f64, f64);

    /// Set the lower bound, keeping the upper one.
    fn set_min(&mut self, min: f64) {
        let (_, max) = self.scale();
        self.set_scale(min, max)
    }

    /// Set the upper bound, keeping the lower one.
    fn set_max(&mut self, max: f64) {
        let (min, _) = self.scale();
        self.set_scale(min, max)
    }
}

/// Transform `val` to a position in \[0, 1\] relative to
/// \[`min`, `max`\], clamping values outside the range.  A degenerate
/// range (`min == max`) maps `min` to 0.
///
/// ```
/// use plot_colormap::bounded_normalize;
/// assert_eq!(bounded_normalize(3., 2., 6.), 0.25);
/// assert_eq!(bounded_normalize(7., 2., 6.), 1.);
/// ```
pub fn bounded_normalize(val: f64, min: f64, max: f64) -> f64 {
    let norm = (val - min) / (max - min);
    if norm.is_nan() || norm < 0. { 0. }
    else if norm > 1. { 1. }
    else { norm }
}

/// Data range shared by the scaled colormaps.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Scale {
    pub(crate) min: f64,
    pub(crate) max: f64,
}

impl Default for Scale {
    fn default() -> Self { Scale { min: 0., max: 1. } }
}

impl Scale {
    #[inline]
    fn normalize(&self, v: f64) -> f64 { bounded_normalize(v, self.min, self.max) }
}

/// Returns the same color regardless of the value.
#[derive(Clone, Debug, PartialEq)]
pub struct Uniform<Color> {
    pub value: Color,
}

impl<Color> Uniform<Color> {
    pub fn new(value: Color) -> Self { Uniform { value } }
}

impl<Color: Clone> Colormapper<Color> for Uniform<Color> {
    fn colormap(&self, _: f64) -> Color { self.value.clone() }
}

#[inline]
fn to_u8(c: f64) -> u8 { (255. * c.clamp(0., 1.)) as u8 }

/// The classic “jet” colormap: dark blue, blue, cyan, yellow, red,
/// dark red.
///
/// Each channel is a trapezoid over `t = 4v` where `v` ∈ \[0, 1\] is
/// the normalized value.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Jet {
    scale: Scale,
}

impl Jet {
    pub fn new(min: f64, max: f64) -> Self { Jet { scale: Scale { min, max } } }

    /// The opaque color of the normalized value `v`.
    fn rgba(v: f64) -> RGBA8 {
        let t = 4. * v;
        let r = (t - 1.5).min(-t + 4.5);
        let g = (t - 0.5).min(-t + 3.5);
        let b = (t + 0.5).min(-t + 2.5);
        RGBA8 { r: to_u8(r), g: to_u8(g), b: to_u8(b), a: 255 }
    }
}

impl<Color: RGBColor> Colormapper<Color> for Jet {
    fn colormap(&self, z: f64) -> Color {
        let c = Jet::rgba(self.scale.normalize(z));
        Color::from_rgb_float(c.to_rgb_float())
    }

    fn as_scaled_mut(&mut self) -> Option<&mut dyn ScaledColormapper<Color>> {
        Some(self)
    }
}

impl<Color: RGBColor> ScaledColormapper<Color> for Jet {
    fn set_scale(&mut self, min: f64, max: f64) { self.scale = Scale { min, max } }

    fn scale(&self) -> (f64, f64) { (self.scale.min, self.scale.max) }
}

/// Linearly maps values between light gray (low values) and black
/// (high values).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Grayscale {
    scale: Scale,
    /// Map low values to black and high values to light gray instead.
    pub inverted: bool,
}

impl Grayscale {
    pub fn new(min: f64, max: f64) -> Self {
        Grayscale { scale: Scale { min, max }, inverted: false }
    }

    /// Same as [`Grayscale::new`] but from black to light gray.
    pub fn inverted(min: f64, max: f64) -> Self {
        Grayscale { scale: Scale { min, max }, inverted: true }
    }
}

impl<Color: RGBColor> Colormapper<Color> for Grayscale {
    fn colormap(&self, z: f64) -> Color {
        let v = self.scale.normalize(z);
        let v = if self.inverted { v } else { 1. - v };
        let x = (v * 255. * 0.9) as u8;
        let c = RGBA8 { r: x, g: x, b: x, a: 255 };
        Color::from_rgb_float(c.to_rgb_float())
    }

    fn as_scaled_mut(&mut self) -> Option<&mut dyn ScaledColormapper<Color>> {
        Some(self)
    }
}

impl<Color: RGBColor> ScaledColormapper<Color> for Grayscale {
    fn set_scale(&mut self, min: f64, max: f64) { self.scale = Scale { min, max } }

    fn scale(&self) -> (f64, f64) { (self.scale.min, self.scale.max) }
}

/// An iterator yielding `f64` in a given range together with colors.
///
/// Created by [`Colormapper::range`] or [`Range::new`] (which also
/// accepts trait objects).
pub struct Range<'a, M: ?Sized, Color> {
    map: &'a M,
    color: PhantomData<Color>,
    a: f64, // finite or NaN
    b: f64, // finite or NaN
    flast: f64, // `last` as a floating-point number
    last: usize,
    i: usize, // first position to be consumed (i ≤ j)
    j: usize, // last position to be consumed
}

impl<'a, M, Color> Range<'a, M, Color>
where M: Colormapper<Color> + ?Sized {
    /// Sample `n` values between `a` and `b`, bounds included.
    pub fn new(map: &'a M, mut a: f64, mut b: f64, n: usize) -> Self {
        if a == f64::INFINITY { a = f64::MAX; }
        else if a == f64::NEG_INFINITY { a = f64::MIN };
        if b == f64::NEG_INFINITY { b = f64::MIN; }
        else if b == f64::INFINITY { b = f64::MAX };
        // `a` or `b` NaN will give an iterator yielding NaN.
        if n == 0 {
            Range { map, color: PhantomData,
                    a, b, flast: 0., last: 0,
                    i: 1, j: 0 } // Empty iterator
        } else {
            Range { map, color: PhantomData,
                    a, b, flast: (n - 1) as f64,
                    last: n - 1, i: 0, j: n - 1 }
        }
    }

    /// Return the value and color of the position `k` (assuming it is
    /// in the range `0 ..= self.last`).
    fn sample(&self, k: usize) -> (f64, Color) {
        let x = if k == 0 {
            self.a
        } else if k == self.last {
            self.b
        } else {
            let alpha = (self.last - k) as f64;
            let beta = k as f64;
            let mut x = (alpha * self.a + beta * self.b) / self.flast;
            if x.is_infinite() {
                let t = beta / self.flast;
                x = (1. - t) * self.a + t * self.b;
            }
            x
        };
        (x, self.map.colormap(x))
    }
}

impl<'a, M, Color> Iterator for Range<'a, M, Color>
where M: Colormapper<Color> + ?Sized {
    type Item = (f64, Color);

    fn next(&mut self) -> Option<Self::Item> {
        if self.i <= self.j {
            let item = self.sample(self.i);
            self.i += 1;
            Some(item)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl<'a, M, Color> ExactSizeIterator for Range<'a, M, Color>
where M: Colormapper<Color> + ?Sized {
    fn len(&self) -> usize {
        if self.i <= self.j { self.j - self.i + 1 } else { 0 }
    }
}

impl<'a, M, Color> DoubleEndedIterator for Range<'a, M, Color>
where M: Colormapper<Color> + ?Sized {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.i <= self.j {
            let item = self.sample(self.j);
            if self.j == 0 {
                self.i = 1
            } else {
                self.j -= 1;
            }
            Some(item)
        } else {
            None
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rgb::RGB8;

    #[test]
    fn normalize_clamps() {
        assert_eq!(bounded_normalize(-1., 0., 1.), 0.);
        assert_eq!(bounded_normalize(2., 0., 1.), 1.);
        assert_eq!(bounded_normalize(1., 2., 2.), 0.);
        assert_eq!(bounded_normalize(2., 2., 2.), 0.);
        assert_eq!(bounded_normalize(3., 2., 2.), 1.);
    }

    #[test]
    fn normalize_is_linear_inside() {
        for i in 0 ..= 10 {
            let v = 2. + 0.8 * i as f64;
            assert_abs_diff_eq!(bounded_normalize(v, 2., 10.), 0.1 * i as f64,
                                epsilon = 1e-12);
        }
    }

    #[test]
    fn uniform_ignores_value() {
        let u = Uniform::new(RGB8::new(1, 2, 3));
        assert_eq!(u.colormap(-1e9), RGB8::new(1, 2, 3));
        assert_eq!(u.colormap(f64::NAN), RGB8::new(1, 2, 3));
        let mut u = u;
        assert!(Colormapper::<RGB8>::as_scaled_mut(&mut u).is_none());
    }

    #[test]
    fn jet_channels() {
        let jet = Jet::new(0., 1.);
        let c = |v: f64| -> RGBA8 { jet.colormap(v) };
        assert_eq!(c(0.), RGBA8::new(0, 0, 127, 255));
        assert_eq!(c(0.25), RGBA8::new(0, 127, 255, 255));
        assert_eq!(c(0.5), RGBA8::new(127, 255, 127, 255));
        assert_eq!(c(0.75), RGBA8::new(255, 127, 0, 255));
        assert_eq!(c(1.), RGBA8::new(127, 0, 0, 255));
    }

    #[test]
    fn jet_is_scaled() {
        let mut jet = Jet::default();
        ScaledColormapper::<RGBA8>::set_scale(&mut jet, 2., 10.);
        let c = |v: f64| -> RGBA8 { jet.colormap(v) };
        assert_eq!(c(2.), RGBA8::new(0, 0, 127, 255));
        assert_eq!(c(-5.), RGBA8::new(0, 0, 127, 255));
        assert_eq!(c(6.), RGBA8::new(127, 255, 127, 255));
        assert_eq!(c(10.), RGBA8::new(127, 0, 0, 255));
        assert_eq!(c(50.), RGBA8::new(127, 0, 0, 255));
    }

    #[test]
    fn set_min_max_keep_other_bound() {
        let mut g = Grayscale::new(0., 1.);
        let s: &mut dyn ScaledColormapper<RGB8> = &mut g;
        s.set_min(-3.);
        assert_eq!(s.scale(), (-3., 1.));
        s.set_max(7.);
        assert_eq!(s.scale(), (-3., 7.));
    }

    #[test]
    fn grayscale() {
        let mut g = Grayscale::new(0., 1.);
        let c = |g: &Grayscale, v: f64| -> RGB8 { g.colormap(v) };
        assert_eq!(c(&g, 0.), RGB8::new(229, 229, 229));
        assert_eq!(c(&g, 0.5), RGB8::new(114, 114, 114));
        assert_eq!(c(&g, 1.), RGB8::new(0, 0, 0));
        g.inverted = true;
        assert_eq!(c(&g, 0.), RGB8::new(0, 0, 0));
        assert_eq!(c(&g, 1.), RGB8::new(229, 229, 229));
        let inv = Grayscale::inverted(2., 4.);
        assert!(inv.inverted);
        assert_eq!(c(&inv, 2.), RGB8::new(0, 0, 0));
        assert_eq!(c(&inv, 4.), RGB8::new(229, 229, 229));
    }

    #[test]
    fn range_samples_values() {
        let jet = Jet::new(0., 1.);
        for (i, (x, c)) in Colormapper::<RGBA8>::range(&jet, 0., 1., 11)
            .enumerate() {
            assert!((x - 0.1 * i as f64).abs() <= 1e-15,
                    "{} ≉ {}", x, 0.1 * i as f64);
            assert_eq!(Colormapper::<RGBA8>::colormap(&jet, x), c);
        }
    }

    #[test]
    fn range_ends() {
        let g = Grayscale::new(0., 10.);
        let mut r = Colormapper::<RGB8>::range(&g, 10., 0., 3);
        assert_eq!(r.len(), 3);
        assert_eq!(r.next_back().map(|(x, _)| x), Some(0.));
        assert_eq!(r.next().map(|(x, _)| x), Some(10.));
        assert_eq!(r.len(), 1);
        assert_eq!(r.next().map(|(x, _)| x), Some(5.));
        assert!(r.next().is_none());
        assert_eq!(r.len(), 0);
        assert_eq!(Colormapper::<RGB8>::range(&g, 0., 1., 0).count(), 0);
    }

    #[test]
    fn range_infinite_bounds() {
        let g = Grayscale::new(0., 1.);
        let xs: Vec<f64> = Colormapper::<RGB8>::range(&g, f64::NEG_INFINITY,
                                                      f64::INFINITY, 3)
            .map(|(x, _)| x).collect();
        assert_eq!(xs, vec![f64::MIN, 0., f64::MAX]);
    }
}
