//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the crate:
//! - Math types shared by layout and rendering
//! - RGBA colors for vertex tinting
//! - Logging utilities

pub mod color;
pub mod logging;
pub mod math;
