//! Point sequences handed to the scatter plot.

use ndarray::{Array2, ArrayView2};
use crate::{Error, Result};

/// A point in the plane.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct XY {
    pub x: f64,
    pub y: f64,
}

/// A point in the plane with an associated value `z`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct XYZ {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// A sequence of `(x, y)` points.
///
/// Implementations may hold several parallel sequences, so [`len`]
/// must be checked before accessing points: on an inconsistent
/// sequence it fails while `xy` may return a point or panic.
///
/// [`len`]: XYer::len
pub trait XYer {
    /// Number of points.  Fails when the underlying sequences are
    /// inconsistent.
    fn len(&self) -> Result<usize>;

    /// The point at index `i` (assumed to be `< self.len()`).
    fn xy(&self, i: usize) -> (f64, f64);
}

/// A sequence of `(x, y, z)` points.
///
/// As for [`XYer`], check [`len`] before accessing points.
///
/// [`len`]: XYZer::len
pub trait XYZer {
    /// Number of points.  Fails when the underlying sequences are
    /// inconsistent.
    fn len(&self) -> Result<usize>;

    /// The point at index `i` (assumed to be `< self.len()`).
    fn xyz(&self, i: usize) -> (f64, f64, f64);
}

impl XYer for [XY] {
    fn len(&self) -> Result<usize> { Ok(<[XY]>::len(self)) }

    fn xy(&self, i: usize) -> (f64, f64) { (self[i].x, self[i].y) }
}

impl XYZer for [XYZ] {
    fn len(&self) -> Result<usize> { Ok(<[XYZ]>::len(self)) }

    fn xyz(&self, i: usize) -> (f64, f64, f64) {
        let p = self[i];
        (p.x, p.y, p.z)
    }
}

/// Check that a parallel sequence has the expected length.
fn same_len(axis: &'static str, expected: usize, found: usize) -> Result<()> {
    if expected == found { Ok(()) }
    else { Err(Error::LengthMismatch { axis, expected, found }) }
}

/// Points given as parallel `x` and `y` sequences.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VecXY {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl XYer for VecXY {
    fn len(&self) -> Result<usize> {
        same_len("y", self.x.len(), self.y.len())?;
        Ok(self.x.len())
    }

    fn xy(&self, i: usize) -> (f64, f64) {
        debug_assert_eq!(self.x.len(), self.y.len(), "inconsistent VecXY");
        (self.x[i], self.y[i])
    }
}

/// Points given as parallel `x`, `y` and `z` sequences.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VecXYZ {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<f64>,
}

impl XYZer for VecXYZ {
    fn len(&self) -> Result<usize> {
        same_len("y", self.x.len(), self.y.len())?;
        same_len("z", self.x.len(), self.z.len())?;
        Ok(self.x.len())
    }

    fn xyz(&self, i: usize) -> (f64, f64, f64) {
        debug_assert!(XYZer::len(self).is_ok(), "inconsistent VecXYZ");
        (self.x[i], self.y[i], self.z[i])
    }
}

/// Copy the points of `data`, so later changes to it are not seen.
pub fn copy_xyzs<D: XYZer + ?Sized>(data: &D) -> Result<Vec<XYZ>> {
    let n = data.len()?;
    Ok((0 .. n).map(|i| { let (x, y, z) = data.xyz(i);
                          XYZ { x, y, z } })
       .collect())
}

/// Sort points by increasing `x`.
pub fn sort_by_x(points: &mut [XY]) {
    points.sort_by(|a, b| a.x.total_cmp(&b.x));
}

/// Values `z` sampled on a rectangular grid.
///
/// Columns correspond to `x` coordinates and rows to `y` ones; `z` is
/// a matrix indexed by `(c, r)`.
#[derive(Clone, Debug, PartialEq)]
pub struct GridMat {
    x: Vec<f64>,
    y: Vec<f64>,
    z: Array2<f64>,
}

impl GridMat {
    /// Grid whose values `z` are given in row-major order of `(c, r)`.
    /// Fails if `z` does not have `x.len() * y.len()` values.
    pub fn new(x: Vec<f64>, y: Vec<f64>, z: Vec<f64>) -> Result<Self> {
        let (expected, found) = (x.len() * y.len(), z.len());
        let z = Array2::from_shape_vec((x.len(), y.len()), z)
            .map_err(|_| Error::LengthMismatch { axis: "z", expected, found })?;
        Ok(GridMat { x, y, z })
    }

    /// Grid from an existing matrix of shape `(x.len(), y.len())`.
    pub fn from_array(x: Vec<f64>, y: Vec<f64>, z: Array2<f64>) -> Result<Self> {
        let (cols, rows) = z.dim();
        same_len("z columns", x.len(), cols)?;
        same_len("z rows", y.len(), rows)?;
        Ok(GridMat { x, y, z })
    }

    /// Returns `(columns, rows)`.
    pub fn dims(&self) -> (usize, usize) { (self.x.len(), self.y.len()) }

    pub fn x(&self, c: usize) -> f64 { self.x[c] }

    pub fn y(&self, r: usize) -> f64 { self.y[r] }

    pub fn z(&self, c: usize, r: usize) -> f64 { self.z[[c, r]] }

    /// The whole matrix of values.
    pub fn zs(&self) -> ArrayView2<'_, f64> { self.z.view() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec_xyz() {
        let v = VecXYZ { x: vec![1., 2.], y: vec![3., 4.], z: vec![5., 6.] };
        assert_eq!(XYZer::len(&v), Ok(2));
        assert_eq!(v.xyz(1), (2., 4., 6.));
        assert_eq!(copy_xyzs(&v), Ok(vec![XYZ { x: 1., y: 3., z: 5. },
                                          XYZ { x: 2., y: 4., z: 6. }]));
    }

    #[test]
    fn length_mismatch() {
        let v = VecXY { x: vec![1., 2., 3.], y: vec![1., 2.] };
        assert_eq!(XYer::len(&v),
                   Err(Error::LengthMismatch { axis: "y", expected: 3, found: 2 }));
        let v = VecXYZ { x: vec![1.], y: vec![1.], z: vec![] };
        assert_eq!(XYZer::len(&v),
                   Err(Error::LengthMismatch { axis: "z", expected: 1, found: 0 }));
        assert!(copy_xyzs(&v).is_err());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "inconsistent VecXYZ")]
    fn inconsistent_access_panics() {
        // Index 0 exists in every sequence but `z` is too long.
        let v = VecXYZ { x: vec![1.], y: vec![2.], z: vec![3., 4.] };
        v.xyz(0);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "inconsistent VecXY")]
    fn inconsistent_xy_access_panics() {
        let v = VecXY { x: vec![1., 2.], y: vec![2.] };
        v.xy(0);
    }

    #[test]
    fn slices() {
        let pts = [XYZ { x: 0., y: 1., z: 2. }];
        assert_eq!(XYZer::len(&pts[..]), Ok(1));
        assert_eq!(pts[..].xyz(0), (0., 1., 2.));
        let pts = vec![XY { x: 7., y: 8. }];
        assert_eq!(XYer::len(pts.as_slice()), Ok(1));
        assert_eq!(pts.as_slice().xy(0), (7., 8.));
    }

    #[test]
    fn sorting() {
        let mut pts = vec![XY { x: 3., y: 0. }, XY { x: -1., y: 1. },
                           XY { x: 2., y: 2. }];
        sort_by_x(&mut pts);
        let xs: Vec<f64> = pts.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![-1., 2., 3.]);
    }

    #[test]
    fn grid() {
        let g = GridMat::new(vec![0., 1., 2.], vec![10., 20.],
                             vec![1., 2., 3., 4., 5., 6.]).unwrap();
        assert_eq!(g.dims(), (3, 2));
        assert_eq!((g.x(2), g.y(1)), (2., 20.));
        assert_eq!(g.z(0, 1), 2.);
        assert_eq!(g.z(2, 0), 5.);
        assert_eq!(g.zs().row(1).to_vec(), vec![3., 4.]);
        assert_eq!(GridMat::new(vec![0.], vec![0.], vec![]),
                   Err(Error::LengthMismatch { axis: "z", expected: 1, found: 0 }));
        assert_eq!(GridMat::new(vec![0., 1.], vec![0., 1.], vec![1., 2., 3.]),
                   Err(Error::LengthMismatch { axis: "z", expected: 4, found: 3 }));
    }

    #[test]
    fn grid_from_array() {
        let z = Array2::from_shape_fn((3, 2), |(c, r)| (10 * c + r) as f64);
        let g = GridMat::from_array(vec![0., 1., 2.], vec![5., 6.], z.clone())
            .unwrap();
        assert_eq!(g.dims(), (3, 2));
        assert_eq!(g.z(2, 1), 21.);
        assert_eq!(g.zs(), z.view());
        assert_eq!(GridMat::from_array(vec![0., 1.], vec![5., 6.], z.clone()),
                   Err(Error::LengthMismatch { axis: "z columns",
                                               expected: 2, found: 3 }));
        assert_eq!(GridMat::from_array(vec![0., 1., 2.], vec![5.], z),
                   Err(Error::LengthMismatch { axis: "z rows",
                                               expected: 1, found: 2 }));
    }
}
