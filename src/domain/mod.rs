// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust types that describe the problem:
//   a loaded registration document, the courses found in it,
//   the grade scale, and the score computed from a set of grades.
//
// Rules for this layer:
//   - NO lopdf types allowed here
//   - NO file I/O
//   - Only structs, enums, traits and the domain error type
//
// Reference: Rust Book §5 (Structs), §6 (Enums), §10 (Traits)

// A loaded document, one text entry per page
pub mod document;

// One extracted course row (code, name, credit)
pub mod course;

// The letter-grade scale and a grade chosen for one course
pub mod grade;

// The computed average and its advisory lower bound
pub mod score;

// Errors the user is told about (no courses, zero credits, bad grade)
pub mod error;

// Core abstractions (traits) that other layers implement
pub mod traits;
