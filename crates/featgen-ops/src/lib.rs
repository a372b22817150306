pub mod ops_features;
pub mod ops_lookup;
