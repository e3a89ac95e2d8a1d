pub mod mr;
pub mod mrapps;
