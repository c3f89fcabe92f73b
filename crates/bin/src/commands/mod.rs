pub mod layers;
pub mod records;
