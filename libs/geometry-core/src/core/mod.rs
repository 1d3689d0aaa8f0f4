//! Core value types shared by the geometry crates.
//!
//! Currently holds the double precision [`vector3::Vector3`].

pub mod vector3;
