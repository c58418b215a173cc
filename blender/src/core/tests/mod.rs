//! Tests for the core blender components

mod request_builder;
