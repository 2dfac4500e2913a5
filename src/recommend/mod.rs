pub mod diversity;
pub mod ranking;
pub mod types;

pub use diversity::diversify;
pub use ranking::recommend;
pub use types::{Recommendation, UnpopularRecommendation};
