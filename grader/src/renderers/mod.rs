//! # Renderers
//!
//! This module provides the built-in renderers for turning a [`crate::report::RenderPayload`]
//! into a human-readable report. All renderers adhere to the
//! [`crate::traits::renderer::Renderer`] trait, which makes the output surface a
//! swappable strategy on the [`crate::RenderJob`].
//!
//! The available renderers are:
//! - [`text`]: plain-text list report for terminals and CI logs.
//! - [`html`]: HTML list report with escaped content, for embedding in a results page.

pub mod html;
pub mod text;
