/*
[INPUT]:  Prompt text for a destructive action
[OUTPUT]: Synchronous yes/no decision
[POS]:    Confirmation gate - precedes every delete call
[UPDATE]: When adding confirmation sources
*/

pub const DELETE_TASK_PROMPT: &str = "Delete this task?";
pub const DELETE_COMMENT_PROMPT: &str = "Delete this comment?";

/// Blocking yes/no gate consulted before a delete is sent
///
/// The front-end implements it with a terminal prompt; tests inject the
/// answer directly with a `bool`.
pub trait ConfirmGate {
    fn confirm(&self, prompt: &str) -> bool;
}

impl ConfirmGate for bool {
    fn confirm(&self, _prompt: &str) -> bool {
        *self
    }
}

impl<F> ConfirmGate for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_bool_gate() {
        assert!(true.confirm(DELETE_TASK_PROMPT));
        assert!(!false.confirm(DELETE_TASK_PROMPT));
    }

    #[test]
    fn test_closure_gate_sees_prompt() {
        let seen = RefCell::new(Vec::new());
        let gate = |prompt: &str| {
            seen.borrow_mut().push(prompt.to_string());
            false
        };

        assert!(!gate.confirm(DELETE_COMMENT_PROMPT));
        assert_eq!(seen.into_inner(), vec![DELETE_COMMENT_PROMPT.to_string()]);
    }
}
