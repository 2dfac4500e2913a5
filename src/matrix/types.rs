use ndarray::{Array2, ArrayView1};

/// Display label of the synthetic row holding the live selection
pub const ACTIVE_USER_LABEL: &str = "__active_user__";

/// Row and column labels shared by every matrix of one request
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixAxes {
    pub users: Vec<String>,
    pub items: Vec<String>,
    pub active_row: Option<usize>,
}

impl MatrixAxes {
    pub fn shape(&self) -> (usize, usize) {
        (self.users.len(), self.items.len())
    }

    pub fn item_index(&self, item_id: &str) -> Option<usize> {
        self.items.iter().position(|i| i == item_id)
    }
}

/// User x item ratings, `None` where a user never rated the item
#[derive(Debug, Clone)]
pub struct RatingMatrix {
    pub axes: MatrixAxes,
    pub cells: Array2<Option<f64>>,
}

impl RatingMatrix {
    pub fn shape(&self) -> (usize, usize) {
        self.axes.shape()
    }

    pub fn active_row(&self) -> Option<usize> {
        self.axes.active_row
    }

    pub fn known_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }
}

/// Column-scaled ratings in [0,1] plus the mask of originally known cells
#[derive(Debug, Clone)]
pub struct NormalizedMatrix {
    pub axes: MatrixAxes,
    pub values: Array2<f64>,
    pub observed: Array2<bool>,
}

impl NormalizedMatrix {
    pub fn shape(&self) -> (usize, usize) {
        self.values.dim()
    }

    pub fn column(&self, index: usize) -> ArrayView1<'_, f64> {
        self.values.column(index)
    }
}
