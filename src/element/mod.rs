pub mod bounds;
pub mod classifier;
pub mod element_model;
pub mod normalize;
pub mod priority;
