//! parkmap - Campus map session client for buildings, parking lots and nearby-parking occupancy

pub mod api;
pub mod chart;
pub mod config;
pub mod domain;
pub mod export;
pub mod geometry;
pub mod input;
pub mod layers;
pub mod map;
