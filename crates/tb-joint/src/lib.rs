//! Tab Joint Kernel
//!
//! This crate provides:
//! - 2D drawing primitives (open polylines and circles) emitted for cutting
//! - An edge basis for along-edge and across-edge arithmetic
//! - Tab division math with kerf and clearance correction
//! - The edge generator that traces one jointed panel edge

pub mod basis;
pub mod edge;
pub mod primitive;

// Re-exports for convenience
pub use basis::EdgeBasis;
pub use edge::{
    Crossing, EdgeOutput, EdgeRequest, JointSettings, KerfCorrected, TabDivision, generate_edge,
};
pub use primitive::{Circle, Path, Primitive};
