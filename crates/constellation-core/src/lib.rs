//! Constellation Core Types and Definitions
//!
//! This crate provides the foundational types shared by the Constellation
//! graph composition engine. It includes:
//!
//! - **Identifiers**: Efficient string-interned identifiers ([`identifier::Id`])
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Draw**: Visual definitions for nodes, links and annotations ([`draw`] module)

pub mod color;
pub mod draw;
pub mod geometry;
pub mod identifier;
