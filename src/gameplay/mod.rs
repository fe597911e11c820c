pub mod frame;
pub mod spawn;
