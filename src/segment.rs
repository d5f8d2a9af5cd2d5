//! Derived pieces of a curve: its straight segments and its arc length samples.

use nalgebra::{Point2, Vector2};

use crate::error::{Error, Result};

/// Straight line approximating the curve between two parameter values.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveSegment {
    /// Curve point at the segment's starting parameter
    pub start: Point2<f64>,

    /// Curve point at [`CurveSegment::u`]
    pub end: Point2<f64>,

    /// Parameter value of the segment's end point
    pub u: f64,
}

impl CurveSegment {
    /// Euclidean distance between the segment's end points
    pub fn length(&self) -> f64 {
        nalgebra::distance(&self.start, &self.end)
    }
}

/// A point on the curve chosen by arc length spacing.
///
/// Its vectors are evaluated at the parameter of the segment it was placed on
/// and already scaled to their display lengths.
/// A vector is `None` if it couldn't be normalized at this point.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    /// Position of this sample among the curve's samples
    pub index: usize,

    /// Point on the curve
    pub position: Point2<f64>,

    /// Parameter value the sample was evaluated at
    pub u: f64,

    pub(crate) tangent: Option<Vector2<f64>>,
    pub(crate) curvature: Option<Vector2<f64>>,

    /// Whether the tangent vector should be shown
    pub tangent_active: bool,

    /// Whether the curvature vector should be shown
    pub curvature_active: bool,
}

impl Sample {
    /// The tangent vector scaled to the configured display length.
    ///
    /// # Errors
    /// [`Error::Degenerate`] if the curve's velocity vanishes at this sample.
    pub fn tangent(&self) -> Result<Vector2<f64>> {
        self.tangent.ok_or(Error::Degenerate)
    }

    /// The curvature vector scaled to the configured display length.
    ///
    /// # Errors
    /// [`Error::Degenerate`] if the curve's velocity vanishes at this sample.
    pub fn curvature(&self) -> Result<Vector2<f64>> {
        self.curvature.ok_or(Error::Degenerate)
    }

    /// Flips whether the tangent is shown.
    pub fn toggle_tangent(&mut self) {
        self.tangent_active = !self.tangent_active;
    }

    /// Flips whether the curvature vector is shown.
    pub fn toggle_curvature(&mut self) {
        self.curvature_active = !self.curvature_active;
    }

    /// Line along the tangent with the sample point in its middle.
    pub fn tangent_line(&self) -> Result<[Point2<f64>; 2]> {
        let tangent = self.tangent()?;
        Ok([self.position + tangent, self.position - tangent])
    }

    /// Line from the curvature vector's tip back to the sample point.
    pub fn curvature_line(&self) -> Result<[Point2<f64>; 2]> {
        let curvature = self.curvature()?;
        Ok([self.position + curvature, self.position])
    }
}
