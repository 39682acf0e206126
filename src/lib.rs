pub mod connectivity;
pub mod geometry;
pub mod math;
pub mod output;
pub mod problem;
pub mod route;
pub mod router;
pub mod stepper;
pub mod walker;
