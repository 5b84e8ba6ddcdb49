#![allow(non_snake_case)]
#![allow(clippy::type_complexity)]

//! Radial basis function network for scoring encoded game positions.
//! Fixed Gaussian hidden layer, linear output layer trained online with the
//! delta rule.

pub mod utils;
pub mod distance;
pub mod kernel;
pub mod linear;
pub mod network;
pub mod solver;
pub mod training;
