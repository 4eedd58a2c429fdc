use std::collections::HashMap;

use crate::ast::declarations::Identifier;

/// One scope's worth of declarations.
pub type Frame = HashMap<String, Identifier>;

/// A stack of scope frames.
///
/// The frame currently being filled is kept apart from the stack of
/// enclosing frames; `new_scope` pushes it down and opens a fresh one,
/// `pop_scope` hands it back and restores the one beneath.
#[derive(Debug, Default)]
pub struct SymbolTable {
    scope_stack: Vec<Frame>,
    current_scope: Option<Frame>,
}

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable {
            scope_stack: vec![],
            current_scope: None,
        }
    }

    pub fn new_scope(&mut self) {
        self.new_scope_from(HashMap::new());
    }

    /// Opens `frame` as the current frame, e.g. to reopen a frame that was
    /// popped earlier.
    pub fn new_scope_from(&mut self, frame: Frame) {
        if let Some(current) = self.current_scope.take() {
            self.scope_stack.push(current);
        }
        self.current_scope = Some(frame);
    }

    /// Closes the current frame and returns it. The enclosing frame, if
    /// any, becomes current again.
    pub fn pop_scope(&mut self) -> Option<Frame> {
        let scope = self.current_scope.take();
        self.current_scope = self.scope_stack.pop();
        scope
    }

    /// Declares `identifier` in the current frame. Returns false if the name
    /// is already taken in that frame or no frame is open; names in
    /// enclosing frames may be shadowed freely.
    pub fn declare(&mut self, identifier: Identifier) -> bool {
        let Some(current) = self.current_scope.as_mut() else {
            return false;
        };

        if current.contains_key(identifier.name()) {
            false
        } else {
            current.insert(identifier.name().to_string(), identifier);
            true
        }
    }

    /// Finds `name` in the nearest scope that declares it.
    pub fn lookup(&self, name: &str) -> Option<&Identifier> {
        let current = self.current_scope.as_ref()?;
        if let Some(identifier) = current.get(name) {
            return Some(identifier);
        }

        self.scope_stack
            .iter()
            .rev()
            .find_map(|frame| frame.get(name))
    }

    /// Number of open frames, the current one included.
    pub fn depth(&self) -> usize {
        self.scope_stack.len() + usize::from(self.current_scope.is_some())
    }
}
