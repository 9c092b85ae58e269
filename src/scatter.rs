//! Scatter plot whose point colors encode a third coordinate.

use tracing::{debug, trace};
use crate::colormap::{Colormapper, Range};
use crate::data::{copy_xyzs, XYZer, XYZ};
use crate::{blue_red, Error, RGBColor, Result};

/// Points `(x, y, z)` drawn at `(x, y)` with a color given by a
/// colormap applied to `z`.
///
/// The scale of the colormap (when it has one, see
/// [`Colormapper::as_scaled_mut`]) follows the bounds [`Self::min`] and
/// [`Self::max`], initially the range of the `z` values.  `Style` is
/// the glyph style, opaque to this crate and passed along to the host
/// renderer.
pub struct ColoredScatter<Color, Style = ()> {
    data: Vec<XYZ>,
    pub style: Style,
    mapper: Box<dyn Colormapper<Color>>,
    min_z: f64,
    max_z: f64,
}

impl<Color: RGBColor> ColoredScatter<Color> {
    /// Scatter plot of (a copy of) `points` with the default style and
    /// the [`blue_red`] colormap.
    ///
    /// ```
    /// use rgb::RGB8;
    /// use plot_colormap::{ColoredScatter, XYZ};
    /// let pts = [XYZ { x: 0., y: 0., z: 2. }, XYZ { x: 1., y: 1., z: 10. }];
    /// let s = ColoredScatter::<RGB8>::new(&pts[..])?;
    /// assert_eq!((s.min(), s.max()), (2., 10.));
    /// assert_eq!(s.colormap(2.), RGB8::new(59, 76, 192));
    /// # Ok::<(), plot_colormap::Error>(())
    /// ```
    pub fn new<D: XYZer + ?Sized>(points: &D) -> Result<Self> {
        Self::with_style(points, ())
    }
}

impl<Color: RGBColor, Style> ColoredScatter<Color, Style> {
    /// Same as [`ColoredScatter::new`] with the glyph style `style`.
    /// Fails if there are no points or if `points` is inconsistent.
    pub fn with_style<D>(points: &D, style: Style) -> Result<Self>
    where D: XYZer + ?Sized {
        let data = copy_xyzs(points)?;
        if data.is_empty() {
            return Err(Error::EmptyInput);
        }
        let (min_z, max_z) = data.iter().fold(
            (f64::INFINITY, f64::NEG_INFINITY),
            |(lo, hi), p| (lo.min(p.z), hi.max(p.z)));
        let mut s = ColoredScatter { data, style,
                                     mapper: Box::new(blue_red()),
                                     min_z, max_z };
        s.propagate_scale();
        Ok(s)
    }
}

impl<Color, Style> ColoredScatter<Color, Style> {
    /// Lower bound of the colormap scale.
    pub fn min(&self) -> f64 { self.min_z }

    /// Upper bound of the colormap scale.
    pub fn max(&self) -> f64 { self.max_z }

    pub fn data(&self) -> &[XYZ] { &self.data }

    /// Returns `(xmin, xmax, ymin, ymax)` over the points.
    pub fn data_range(&self) -> (f64, f64, f64, f64) {
        self.data.iter().fold(
            (f64::INFINITY, f64::NEG_INFINITY, f64::INFINITY, f64::NEG_INFINITY),
            |(x0, x1, y0, y1), p| (x0.min(p.x), x1.max(p.x),
                                   y0.min(p.y), y1.max(p.y)))
    }

    /// Push the current bounds to the colormap, if it is scaled.
    fn propagate_scale(&mut self) {
        let (min, max) = (self.min_z, self.max_z);
        match self.mapper.as_scaled_mut() {
            Some(s) => {
                trace!(min, max, "propagating scale to colormap");
                s.set_scale(min, max);
            }
            None => debug!(min, max, "colormap has no scale, not propagated"),
        }
    }

    pub fn set_min(&mut self, min: f64) {
        self.min_z = min;
        self.propagate_scale();
    }

    pub fn set_max(&mut self, max: f64) {
        self.max_z = max;
        self.propagate_scale();
    }

    pub fn set_scale(&mut self, min: f64, max: f64) {
        self.min_z = min;
        self.max_z = max;
        self.propagate_scale();
    }

    /// Use `mapper` to color the points.  It is scaled to the current
    /// bounds.
    pub fn set_colormap<M>(&mut self, mapper: M)
    where M: Colormapper<Color> + 'static {
        self.mapper = Box::new(mapper);
        self.propagate_scale();
    }

    pub fn colormapper(&self) -> &dyn Colormapper<Color> { &*self.mapper }

    /// Mutable access to the colormap.  A scale changed through it is
    /// overwritten by the next [`Self::glyphs`].
    pub fn colormapper_mut(&mut self) -> &mut dyn Colormapper<Color> {
        &mut *self.mapper
    }

    /// The color of the value `z`.
    pub fn colormap(&self, z: f64) -> Color { self.mapper.colormap(z) }

    /// The position and color of each point, for the host renderer to
    /// draw with [`Self::style`].
    pub fn glyphs(&mut self) -> Vec<(f64, f64, Color)> {
        self.propagate_scale();
        trace!(points = self.data.len(), "rendering glyphs");
        self.data.iter().map(|p| (p.x, p.y, self.mapper.colormap(p.z)))
            .collect()
    }

    /// `n` values evenly spaced over the scale, with their colors, to
    /// draw a color bar.
    pub fn colorbar(&self, n: usize) -> Range<'_, dyn Colormapper<Color>, Color> {
        Range::new(&*self.mapper, self.min_z, self.max_z, n)
    }
}
