// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// This layer orchestrates the other layers to accomplish one goal
// per use case.
//
// Rules for this layer:
//   - No regex or PDF code here
//   - No printing or prompting here (that's Layer 1)
//   - Only workflow coordination
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// PDF in, course rows out
pub mod extract_use_case;

// Course rows + expected grades in, CGPA band out
pub mod predict_use_case;
