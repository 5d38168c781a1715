#![warn(missing_docs)]
//! Core domain models and ports for a copper-plate spot market clearing
//! system: price-sensitive demand blocks and cost-ordered generation units,
//! optionally coupled through one energy storage unit across the horizon.

/// Core domain models for the market clearing system.
///
/// The models in this module are primarily data structures with minimal
/// business logic, following the principles of the hexagonal architecture to
/// separate domain entities from their processing implementations.
pub mod models;

/// Interface traits for the market clearing system.
///
/// This module contains the "ports" in the hexagonal architecture pattern:
/// the contract for the catalog data provider and for the LP solving
/// capability. These traits define the boundary between the domain logic and
/// external collaborators without specifying implementation details, so a
/// conforming backend may be substituted without touching the model builder
/// or the result extractor.
pub mod ports;
