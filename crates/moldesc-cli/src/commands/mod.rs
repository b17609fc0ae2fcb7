pub mod featurize;
pub mod lookup;
