// Copyright 2025 the Corral Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! 2D convex hulls and minimum enclosing circles.
//!
//! The corral library computes two things about a finite set of points in
//! the plane: the convex hull (the smallest convex polygon containing all
//! the points) and the minimum enclosing circle (the smallest circle
//! containing all the points). The two are designed to be used as a
//! pipeline, with the hull feeding the circle computation, but each works
//! on any point slice.
//!
//! # Examples
//!
//! Hull of a square with an interior point, then the circle around it:
//! ```
//! use corral::{convex_hull, min_enclosing_circle_seeded, Point};
//!
//! let points = [
//!     Point::new(0.0, 0.0),
//!     Point::new(0.0, 1.0),
//!     Point::new(1.0, 1.0),
//!     Point::new(1.0, 0.0),
//!     Point::new(0.5, 0.5),
//! ];
//! let hull = convex_hull(&points).unwrap();
//! assert_eq!(hull.len(), 4);
//!
//! let circle = min_enclosing_circle_seeded(&hull, 0).unwrap();
//! assert!((circle.radius - 0.5_f64.sqrt()).abs() < 1e-12);
//! ```
//!
//! # Features
//!
//! - `serde`: Implement `serde::Deserialize` and `serde::Serialize` on the
//!   vocabulary types.

#![forbid(unsafe_code)]
#![deny(missing_docs, clippy::trivially_copy_pass_by_ref)]
#![warn(clippy::doc_markdown, rustdoc::broken_intra_doc_links)]
#![warn(clippy::semicolon_if_nothing_returned)]
#![warn(unused_qualifications)]
#![allow(clippy::many_single_char_names)]

mod circle;
mod enclosing;
mod error;
mod hull;
mod orientation;
mod point;
mod vec2;

pub use crate::circle::*;
pub use crate::enclosing::*;
pub use crate::error::*;
pub use crate::hull::*;
pub use crate::orientation::*;
pub use crate::point::*;
pub use crate::vec2::*;
