//! Scoring of generated completions against reference replies
//!
//! Two notions of correctness, one per response kind:
//!
//! - **Tool invocations** are scored by the longest contiguous token run
//!   shared with the reference, normalized by the reference length. A
//!   function call is only right if its pieces appear in order.
//! - **Conversational replies** are scored by multiset token overlap,
//!   which tolerates reordering in free-form text.
//!
//! A reference containing the `<tool_call>` marker selects the first
//! branch; everything else takes the second. Classification happens on the
//! raw text, before tokenization.
//!
//! # Example
//!
//! ```
//! use afinar::eval::longest_common_run;
//!
//! assert_eq!(longest_common_run(&[1, 2, 3, 4], &[0, 2, 3, 9]), 2);
//! ```

mod scorer;
mod sequence;


pub use scorer::{evaluate, EvalExample, EvalReport, ResponseKind};
pub use sequence::{bag_overlap_ratio, longest_common_run};
