//! Current-answer selection shared by the list, graph, and feedback views.

use crate::answer::Answer;

/// Collaborators interested in the current selection. The graph and
/// feedback views take the answer itself; list views additionally honor
/// the scroll request to keep the active row visible.
pub trait SelectionListener {
    fn answer_selected(&mut self, answer: &Answer);

    fn scroll_to(&mut self, index: usize) {
        let _ = index;
    }
}

/// Tracks which ranked answer is currently displayed.
///
/// An ordinal selection does not follow answer identity across a list
/// refresh; callers that need that re-resolve with [`select_by_id`]
/// after calling [`set_answers`].
///
/// [`select_by_id`]: AnswerSelectionIndex::select_by_id
/// [`set_answers`]: AnswerSelectionIndex::set_answers
#[derive(Default)]
pub struct AnswerSelectionIndex {
    answers: Vec<Answer>,
    selected: usize,
    listeners: Vec<Box<dyn SelectionListener>>,
}

impl AnswerSelectionIndex {
    pub fn new(answers: Vec<Answer>) -> Self {
        Self {
            answers,
            selected: 0,
            listeners: Vec::new(),
        }
    }

    pub fn register(&mut self, listener: Box<dyn SelectionListener>) {
        self.listeners.push(listener);
    }

    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected(&self) -> Option<&Answer> {
        self.answers.get(self.selected)
    }

    /// Select by ordinal and notify collaborators. Callers guarantee
    /// `index < len()`.
    pub fn select(&mut self, index: usize) -> &Answer {
        self.selected = index;
        let answer = &self.answers[index];
        for listener in &mut self.listeners {
            listener.answer_selected(answer);
            listener.scroll_to(index);
        }
        answer
    }

    /// Select the answer whose identifier equals `id`. Unknown ids leave
    /// the selection untouched — a documented no-op, since upstream
    /// identifiers may reference a different result set. Reselecting the
    /// already-current id is idempotent.
    pub fn select_by_id(&mut self, id: i64) -> Option<&Answer> {
        let index = self.answers.iter().position(|answer| answer.id == id)?;
        Some(self.select(index))
    }

    /// Replace the answer list. The ordinal selection resets; identity
    /// tracking across refresh is the caller's explicit re-resolution.
    pub fn set_answers(&mut self, answers: Vec<Answer>) {
        self.answers = answers;
        self.selected = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn answer(id: i64, confidence: f64) -> Answer {
        Answer {
            id,
            confidence,
            text: format!("answer {id}"),
            result_graph: None,
        }
    }

    #[derive(Default)]
    struct Recorder {
        selected_ids: Vec<i64>,
        scrolls: Vec<usize>,
    }

    struct RecordingListener(Rc<RefCell<Recorder>>);

    impl SelectionListener for RecordingListener {
        fn answer_selected(&mut self, answer: &Answer) {
            self.0.borrow_mut().selected_ids.push(answer.id);
        }

        fn scroll_to(&mut self, index: usize) {
            self.0.borrow_mut().scrolls.push(index);
        }
    }

    fn three_answers() -> Vec<Answer> {
        vec![answer(10, 0.9), answer(20, 0.8), answer(30, 0.7)]
    }

    #[test]
    fn test_select_notifies_and_scrolls() {
        let recorder = Rc::new(RefCell::new(Recorder::default()));
        let mut index = AnswerSelectionIndex::new(three_answers());
        index.register(Box::new(RecordingListener(recorder.clone())));

        index.select(1);
        assert_eq!(index.selected().unwrap().id, 20);
        assert_eq!(recorder.borrow().selected_ids, vec![20]);
        assert_eq!(recorder.borrow().scrolls, vec![1]);
    }

    #[test]
    fn test_select_by_id_resolves_ordinal() {
        let mut index = AnswerSelectionIndex::new(three_answers());
        let selected = index.select_by_id(30).unwrap();
        assert_eq!(selected.id, 30);
        assert_eq!(index.selected_index(), 2);
    }

    #[test]
    fn test_unknown_id_is_a_no_op() {
        let mut index = AnswerSelectionIndex::new(three_answers());
        index.select(2);
        assert!(index.select_by_id(999).is_none());
        assert_eq!(index.selected_index(), 2);
    }

    #[test]
    fn test_reselecting_current_id_is_idempotent() {
        let mut index = AnswerSelectionIndex::new(three_answers());
        index.select_by_id(20);
        index.select_by_id(20);
        assert_eq!(index.selected_index(), 1);
    }

    #[test]
    fn test_refresh_resets_ordinal() {
        let mut index = AnswerSelectionIndex::new(three_answers());
        index.select(2);
        index.set_answers(vec![answer(30, 0.7), answer(40, 0.6)]);
        assert_eq!(index.selected_index(), 0);
        // Identity tracking is explicit re-resolution
        index.select_by_id(30);
        assert_eq!(index.selected_index(), 0);
        index.select_by_id(40);
        assert_eq!(index.selected_index(), 1);
    }
}
