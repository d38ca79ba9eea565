pub mod funding;
pub mod translate;
