//! kgscope-answers — Ranked answers, selection state, and feedback.

pub mod answer;
pub mod selection;
pub mod feedback;
pub mod interactive;

pub use answer::Answer;
pub use feedback::{Feedback, FeedbackLog};
pub use interactive::{InteractiveSelection, NodeChoice};
pub use selection::{AnswerSelectionIndex, SelectionListener};
