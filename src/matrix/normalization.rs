use log::debug;
use ndarray::{Array2, ArrayViewMut1, Axis};

use super::types::{NormalizedMatrix, RatingMatrix};

/// Min-max scales every item column into [0,1]
///
/// Unknown cells count as 0 when the column range is measured and stay 0 in
/// the output. Columns with no spread map to 0.
pub fn normalize(matrix: &RatingMatrix) -> NormalizedMatrix {
    let observed = matrix.cells.mapv(|c| c.is_some());
    let mut values = matrix.cells.mapv(|c| c.unwrap_or(0.0));

    min_max_scale(&mut values);
    values.zip_mut_with(&observed, |v, &known| {
        if !known {
            *v = 0.0;
        }
    });

    NormalizedMatrix {
        axes: matrix.axes.clone(),
        values,
        observed,
    }
}

/// Rescale a dense matrix column by column
pub fn min_max_scale(values: &mut Array2<f64>) {
    for (col, column) in values.axis_iter_mut(Axis(1)).enumerate() {
        scale_column(column, col);
    }
}

fn scale_column(mut column: ArrayViewMut1<'_, f64>, index: usize) {
    let (min, max) = column_range(column.iter().copied());
    let range = max - min;

    if range > 0.0 {
        column.mapv_inplace(|v| (v - min) / range);
    } else {
        debug!("Column {} has no spread, mapping to 0", index);
        column.fill(0.0);
    }
}

fn column_range(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    })
}
