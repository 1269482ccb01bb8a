// Career advising: performance banding, skill-fit radar, career weighting, roadmap.
// Everything here is pure computation over a `StudentRecord`; handlers own the IO.

pub mod careers;
pub mod catalog;
pub mod handlers;
pub mod insights;
pub mod performance;
pub mod skill_fit;
