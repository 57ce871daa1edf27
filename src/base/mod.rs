pub mod address;
pub mod stake;
