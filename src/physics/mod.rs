pub mod collision;
pub mod step;

pub use collision::{resolve_all, resolve_against_later, resolve_collision};
pub use step::{advance_ball, StepEvents};
