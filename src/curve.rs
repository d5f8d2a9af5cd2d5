//! The editable bezier curve and the blend operation evaluating it.

use nalgebra::{Point2, RealField, Vector2};
use num::ToPrimitive;
use smallvec::SmallVec;

use crate::combinatorics::Coefficient;
use crate::config::CurveConfig;
use crate::error::{Error, Result};
use crate::geometry::{curvature_direction, rescale};
use crate::segment::{CurveSegment, Sample};

/// Blends `points` into a single vector weighting the `i`-th point with `coefficient(n, i)`,
/// where `n` is the degree i.e. `points.len() - 1`.
///
/// An empty slice blends into the zero vector.
pub fn blend_with<T, F>(points: &[Point2<T>], coefficient: F) -> Vector2<T>
where
    T: RealField,
    F: Fn(i32, i32) -> T,
{
    debug_assert!(
        points.len() <= i32::MAX as usize,
        "too many control points to index with i32"
    );
    let n = points.len() as i32 - 1;
    points
        .iter()
        .enumerate()
        .fold(Vector2::zeros(), |acc, (i, point)| {
            acc + &point.coords * coefficient(n, i as i32)
        })
}

/// Blends `points` using one of the bernstein coefficient functions evaluated at `u`.
///
/// - [`Coefficient::Basis`] yields the curve's point at `u` (as position vector)
/// - [`Coefficient::FirstDerivative`] yields its velocity
/// - [`Coefficient::SecondDerivative`] yields its acceleration
pub fn blend<T: RealField>(points: &[Point2<T>], coefficient: Coefficient, u: T) -> Vector2<T> {
    blend_with(points, |n, i| coefficient.evaluate(n, i, u.clone()))
}

/// A bezier curve defined by an ordered list of control points
/// together with its piecewise linear approximation and arc length samples.
///
/// Every mutation recomputes all derived data before it returns,
/// so the segments, the arc length and the samples always describe the current control points.
///
/// A curve with fewer than two control points is valid but empty:
/// it has no segments, no samples and an arc length of zero.
#[derive(Debug, Clone)]
pub struct CurveModel {
    config: CurveConfig,
    control_points: SmallVec<[Point2<f64>; 4]>,
    segments: Vec<CurveSegment>,
    arc_length: f64,
    sample_count: usize,
    samples: Vec<Sample>,
}

impl Default for CurveModel {
    fn default() -> Self {
        Self::from_valid_config(CurveConfig::default())
    }
}

impl CurveModel {
    /// Creates an empty curve using the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty curve using `config`.
    ///
    /// # Errors
    /// [`Error::InvalidConfig`] if `config` fails [`CurveConfig::validate`].
    pub fn with_config(config: CurveConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: CurveConfig) -> Self {
        CurveModel {
            config,
            control_points: SmallVec::new(),
            segments: Vec::new(),
            arc_length: 0.0,
            sample_count: 0,
            samples: Vec::new(),
        }
    }

    /// The configuration this curve was created with
    pub fn config(&self) -> &CurveConfig {
        &self.config
    }

    /// The control points in curve order
    pub fn control_points(&self) -> &[Point2<f64>] {
        &self.control_points
    }

    /// Get the curves degree
    ///
    /// For example a cubic curve has degree 3 and 4 control points.
    /// Returns `None` for a curve without control points.
    pub fn degree(&self) -> Option<usize> {
        self.control_points.len().checked_sub(1)
    }

    /// The straight segments approximating the curve
    pub fn segments(&self) -> &[CurveSegment] {
        &self.segments
    }

    /// Total length of [`CurveModel::segments`]
    pub fn arc_length(&self) -> f64 {
        self.arc_length
    }

    /// The number of samples the last resampling asked for
    ///
    /// This is the count given to [`CurveModel::set_sample_count`] until the next edit,
    /// which asks for as many samples as the curve held before it.
    /// The curve might hold fewer samples than this.
    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    /// The samples spaced evenly along the curve
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Replaces all control points.
    pub fn set_control_points<I>(&mut self, points: I)
    where
        I: IntoIterator<Item = Point2<f64>>,
    {
        self.control_points = points.into_iter().collect();
        self.recompute();
    }

    /// Appends a control point to the end of the curve.
    pub fn add_control_point(&mut self, point: Point2<f64>) {
        self.control_points.push(point);
        self.recompute();
    }

    /// Removes the control point at `index` and returns it.
    ///
    /// # Errors
    /// [`Error::OutOfRange`] if there is no control point at `index`.
    pub fn remove_control_point_at(&mut self, index: usize) -> Result<Point2<f64>> {
        self.check_control_point(index)?;
        let point = self.control_points.remove(index);
        self.recompute();
        Ok(point)
    }

    /// Moves the control point at `index` to `position`.
    ///
    /// # Errors
    /// [`Error::OutOfRange`] if there is no control point at `index`.
    pub fn move_control_point(&mut self, index: usize, position: Point2<f64>) -> Result<()> {
        self.check_control_point(index)?;
        self.control_points[index] = position;
        self.recompute();
        Ok(())
    }

    /// Removes all control points.
    pub fn clear_control_points(&mut self) {
        self.control_points.clear();
        self.recompute();
    }

    fn check_control_point(&self, index: usize) -> Result<()> {
        let len = self.control_points.len();
        if index < len {
            Ok(())
        } else {
            Err(Error::OutOfRange { index, len })
        }
    }

    /// Sets how many samples should be placed along the curve and places them.
    ///
    /// Following edits keep the number of samples which were actually placed.
    /// Counts which aren't representable as `usize` (i.e. negative ones) are clamped to zero.
    pub fn set_sample_count<N: ToPrimitive>(&mut self, count: N) {
        self.sample_count = count.to_usize().unwrap_or_else(|| {
            log::warn!("Invalid sample count requested, using 0 instead");
            0
        });
        self.resample();
    }

    /// Recomputes segments, arc length and samples from the control points (in this order).
    ///
    /// The sample count is re-derived from the samples the curve held before.
    pub fn recompute(&mut self) {
        self.sample_count = self.samples.len();
        self.discretize();
        self.measure();
        self.resample();
        log::debug!(
            "Recomputed curve: {} control points, {} segments, length {:.3}, {} samples",
            self.control_points.len(),
            self.segments.len(),
            self.arc_length,
            self.samples.len()
        );
    }

    fn discretize(&mut self) {
        self.segments.clear();
        if self.control_points.len() < 2 {
            return;
        }

        let count = self.config.segment_count;
        self.segments.reserve(count);
        let mut start = self.evaluate(0.0);
        for i in 1..=count {
            let u = i as f64 / count as f64;
            let end = self.evaluate(u);
            self.segments.push(CurveSegment { start, end, u });
            start = end;
        }
    }

    fn measure(&mut self) {
        self.arc_length = self.segments.iter().map(CurveSegment::length).sum();
    }

    /// Walks the segments greedily and places a sample on the first segment end
    /// reaching the next multiple of `arc_length / (sample_count + 1)`.
    ///
    /// Overshoot carries over to the following sample.
    fn resample(&mut self) {
        self.samples.clear();
        let count = self.sample_count;
        if count == 0 || self.arc_length.is_nan() || self.arc_length <= 0.0 {
            return;
        }

        let spacing = self.arc_length / (count as f64 + 1.0);
        let mut moved = 0.0;
        // no more samples than segment ends
        let mut samples = Vec::with_capacity(count.min(self.segments.len()));
        for segment in self.segments.iter() {
            moved += segment.length();
            if moved >= spacing {
                samples.push(self.sample_on(samples.len(), segment));
                moved -= spacing;
                if samples.len() == count {
                    break;
                }
            }
        }
        self.samples = samples;
    }

    fn sample_on(&self, index: usize, segment: &CurveSegment) -> Sample {
        let tangent = self.display_tangent_at(segment.u);
        let curvature = self.curvature_vector_at(segment.u);
        if tangent.is_err() || curvature.is_err() {
            log::warn!(
                "Sample {} at u = {} has no direction, its vectors are unavailable",
                index,
                segment.u
            );
        }
        log::trace!("Sample {} at {:?}", index, segment.end);

        Sample {
            index,
            position: segment.end,
            u: segment.u,
            tangent: tangent.ok(),
            curvature: curvature.ok(),
            tangent_active: false,
            curvature_active: false,
        }
    }

    /// Get the point on the curve at position `u`.
    ///
    /// Values outside of `[0, 1]` extrapolate the curve's polynomial.
    pub fn evaluate(&self, u: f64) -> Point2<f64> {
        Point2::from(blend(self.control_points.as_slice(), Coefficient::Basis, u))
    }

    /// Computes the curve's tangent vector at `u`
    ///
    /// *The resulting vector is not normalized!*
    pub fn tangent_at(&self, u: f64) -> Vector2<f64> {
        blend(self.control_points.as_slice(), Coefficient::FirstDerivative, u)
    }

    /// Computes the curve's second derivative at `u`
    pub fn second_derivative_at(&self, u: f64) -> Vector2<f64> {
        blend(self.control_points.as_slice(), Coefficient::SecondDerivative, u)
    }

    /// Computes the tangent vector at `u` scaled to the configured display length.
    ///
    /// # Errors
    /// [`Error::Degenerate`] if the tangent vanishes at `u`.
    pub fn display_tangent_at(&self, u: f64) -> Result<Vector2<f64>> {
        rescale(&self.tangent_at(u), self.config.tangent_display_length)
    }

    /// Computes the curvature vector at `u`.
    ///
    /// It is perpendicular to the tangent, points to the side the curve bends towards
    /// and is scaled to the configured display length.
    ///
    /// # Errors
    /// [`Error::Degenerate`] if the tangent vanishes at `u`.
    pub fn curvature_vector_at(&self, u: f64) -> Result<Vector2<f64>> {
        let tangent = self.tangent_at(u);
        let acceleration = self.second_derivative_at(u);
        let normal = curvature_direction(&tangent, &acceleration);
        rescale(&normal, self.config.curvature_display_length)
    }

    /// Shows or hides the tangents of all samples.
    pub fn set_all_tangents_active(&mut self, active: bool) {
        self.samples
            .iter_mut()
            .for_each(|sample| sample.tangent_active = active);
    }

    /// Shows or hides the curvature vectors of all samples.
    pub fn set_all_curvatures_active(&mut self, active: bool) {
        self.samples
            .iter_mut()
            .for_each(|sample| sample.curvature_active = active);
    }

    /// Flips whether the tangent of the sample at `index` is shown.
    ///
    /// # Errors
    /// [`Error::OutOfRange`] if there is no sample at `index`.
    pub fn toggle_tangent(&mut self, index: usize) -> Result<()> {
        self.sample_mut(index)?.toggle_tangent();
        Ok(())
    }

    /// Flips whether the curvature vector of the sample at `index` is shown.
    ///
    /// # Errors
    /// [`Error::OutOfRange`] if there is no sample at `index`.
    pub fn toggle_curvature(&mut self, index: usize) -> Result<()> {
        self.sample_mut(index)?.toggle_curvature();
        Ok(())
    }

    fn sample_mut(&mut self, index: usize) -> Result<&mut Sample> {
        let len = self.samples.len();
        self.samples
            .get_mut(index)
            .ok_or(Error::OutOfRange { index, len })
    }
}
