mod logistic_model;
mod model_loader;

pub use logistic_model::LogisticModel;
pub use model_loader::{ModelLoadError, load_classifiers, load_model};
