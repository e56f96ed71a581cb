pub mod describe;
pub mod resolve;
