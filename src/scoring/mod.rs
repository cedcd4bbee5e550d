// ============================================================
// Layer 5 — Scoring
// ============================================================
// Turns grade selections into the advisory CGPA band.
// Pure arithmetic on exact decimals: no I/O, no state.

/// Weighted average and its half-point lower bound
pub mod scorer;
