mod analysis;
pub use analysis::{Analysis, Predictions, Summary};
