//! Pure scheduling core.
//!
//! Free-slot search is a stateless pipeline over immutable interval values:
//!
//! ```text
//! date range ──► windows ─────────────────────┐
//!                                             ▼
//! hearings ──► occupied ──► buffer ──► merge ──► subtract ──► slice ──► slots
//! ```
//!
//! Every function here is synchronous, allocation-fresh, and free of I/O; the
//! single repository read happens in the service layer. Conflict detection
//! shares the same interval primitives through [`conflicts`].

pub mod conflicts;
pub mod intervals;
pub mod slots;
pub mod windows;

pub use conflicts::{find_conflicts, overlaps, ConflictQuery};
pub use intervals::{expand_buffers, merge_intervals, subtract_occupied};
pub use slots::{round_up_to_grid, slice_slots};
pub use windows::build_work_windows;
