pub mod coordinate;
pub mod pose;
