pub mod aim;
pub mod camera;
pub mod circles;
