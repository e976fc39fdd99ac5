mod encoder;
mod table;

pub use encoder::{Answers, FeatureVector, NUM_FEATURES, collect, feature_order};
pub use table::{
    CATEGORICAL_FEATURES, CategoricalFeature, NUMERIC_FEATURES, NumericFeature, mappings,
};
