//! Shared support for blender integration tests

#![allow(dead_code)]

pub mod fixtures;
pub mod helpers;
