pub mod landmark_extractor;
pub mod volume_estimator;
pub mod growth_adjuster;
pub mod size_mapper;
