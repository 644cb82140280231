pub mod controller;
pub mod raycast;
