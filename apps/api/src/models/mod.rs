pub mod career;
pub mod quiz;
pub mod resource;
