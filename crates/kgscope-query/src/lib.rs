//! kgscope-query — Query-step model and machine-question compilation.

pub mod step;
pub mod compile;

pub use compile::{compile_steps, MachineQuestion, QueryEdge, QueryNode, QuestionDraft};
pub use step::QueryStep;
