/// Keyboard input the rendering collaborator forwards to the editor.
///
/// Delete and Backspace both remove the current selection; Escape dismisses
/// it. Other keys are not part of the core's contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Delete,
    Backspace,
    Escape,
}
