use bezdraw::CurveModel;
use nalgebra::Point2;
use once_cell::sync::Lazy;

/// Control points generated randomly
/// ```python
/// from random import random
/// for i in range(10):
///     print(f"Point2::new({(random()-0.5)*i}, {(random()-0.5)*i})")
/// ```
pub static POINTS: [[f64; 2]; 10] = [
    [ 0.0,      0.0    ],
    [-0.29734,  0.44984],
    [-0.52560,  0.42885],
    [ 1.42777, -0.02652],
    [ 1.98032, -0.67824],
    [ 0.44863, -0.91328],
    [-2.51139, -0.79100],
    [-3.10479, -0.59318],
    [-1.16022, -2.95591],
    [-1.07946,  0.78888],
];

fn curve(indices: &[usize]) -> CurveModel {
    let mut curve = CurveModel::new();
    curve.set_control_points(
        indices
            .iter()
            .map(|&i| Point2::new(POINTS[i][0], POINTS[i][1])),
    );
    curve.set_sample_count(20);
    curve
}

pub static CURVES: Lazy<Vec<CurveModel>> = Lazy::new(|| vec![
    curve(&[0, 1]),
    curve(&[2, 3, 4]),
    curve(&[4, 5, 6, 7]),
    curve(&[1, 5, 3, 7, 9]),
    curve(&[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]),
]);
