//! User dialog capability for confirmation- and input-gated operations.
//!
//! # Responsibility
//! - Abstract blocking confirm/input dialogs so core mutations stay testable
//!   without any real UI.
//!
//! # Invariants
//! - A declined confirm or a cancelled/empty input turns the gated operation
//!   into a no-op; the prompt layer never raises errors into the store.

use std::cell::RefCell;
use std::collections::VecDeque;

/// Blocking dialog capability.
///
/// UI hosts implement this over their native dialogs; headless callers use
/// [`ScriptedPrompt`].
pub trait UserPrompt {
    /// Asks a yes/no question. `false` aborts the gated operation.
    fn confirm(&self, message: &str) -> bool;

    /// Asks for one line of text, optionally pre-filled with
    /// `default_value`. `None` means the user cancelled.
    fn prompt_text(&self, message: &str, default_value: Option<&str>) -> Option<String>;
}

/// Queue-driven prompt for tests, demos and headless embedding.
///
/// Replies are consumed in push order. An exhausted queue declines confirms
/// and cancels text prompts, so every gated operation degrades to a no-op.
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    confirms: RefCell<VecDeque<bool>>,
    texts: RefCell<VecDeque<Option<String>>>,
}

impl ScriptedPrompt {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues one confirm reply.
    pub fn push_confirm(&self, reply: bool) {
        self.confirms.borrow_mut().push_back(reply);
    }

    /// Queues one text reply.
    pub fn push_text(&self, reply: impl Into<String>) {
        self.texts.borrow_mut().push_back(Some(reply.into()));
    }

    /// Queues one cancelled text prompt.
    pub fn push_cancel(&self) {
        self.texts.borrow_mut().push_back(None);
    }
}

impl UserPrompt for ScriptedPrompt {
    fn confirm(&self, _message: &str) -> bool {
        self.confirms.borrow_mut().pop_front().unwrap_or(false)
    }

    fn prompt_text(&self, _message: &str, _default_value: Option<&str>) -> Option<String> {
        self.texts.borrow_mut().pop_front().unwrap_or(None)
    }
}

#[cfg(test)]
mod tests {
    use super::{ScriptedPrompt, UserPrompt};

    #[test]
    fn replies_are_consumed_in_push_order() {
        let prompt = ScriptedPrompt::new();
        prompt.push_confirm(true);
        prompt.push_confirm(false);
        prompt.push_text("first");
        prompt.push_cancel();

        assert!(prompt.confirm("sure?"));
        assert!(!prompt.confirm("sure?"));
        assert_eq!(prompt.prompt_text("text:", None).as_deref(), Some("first"));
        assert_eq!(prompt.prompt_text("text:", None), None);
    }

    #[test]
    fn exhausted_queue_declines_and_cancels() {
        let prompt = ScriptedPrompt::new();

        assert!(!prompt.confirm("sure?"));
        assert_eq!(prompt.prompt_text("text:", Some("default")), None);
    }
}
