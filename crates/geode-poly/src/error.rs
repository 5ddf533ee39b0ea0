//! Mesh construction error types.

use std::collections::TryReserveError;

/// Errors raised while building a geodesic mesh.
///
/// Construction has exactly one failure family: the requested mesh could
/// not obtain the storage it needs. Any error aborts the whole build and
/// drops every buffer allocated so far; no partial mesh is ever returned.
#[derive(Debug, thiserror::Error)]
pub enum MeshError {
    /// Buffer sizes for the requested subdivision depth overflow size
    /// arithmetic or the `u32` index width.
    #[error("requested mesh exceeds addressable buffer capacity")]
    CapacityOverflow,

    /// The allocator refused a buffer reservation.
    #[error("failed to allocate mesh buffers: {0}")]
    Allocation(#[from] TryReserveError),
}
