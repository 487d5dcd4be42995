pub mod config;
pub mod estimator;
pub mod experience;
pub mod explain;
pub mod linear;
pub mod policy;
pub mod reservoir;
pub mod session;
pub mod trainer;
