//! Zone system for participant cards.
//!
//! ## Key Types
//!
//! - `Zone`: hand, face-up or face-down
//! - `Participant`: one seat's three zones and the zone-priority rule

pub mod participant;
pub mod zone;

pub use participant::Participant;
pub use zone::Zone;
