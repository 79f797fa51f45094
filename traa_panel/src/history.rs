use crate::edit::{Edit, Field};

/// Messages emitted by the panel. Changes must be forwarded to the effect,
/// Events are informational.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// A bound input changed value.
    Change {
        edit: Edit,
        /// True when this is the final value of an interaction (slider
        /// released, checkbox clicked, preset applied).
        last: bool,
    },
    /// An informational event
    Event(Event),
}

impl From<Event> for Message {
    fn from(e: Event) -> Self {
        Message::Event(e)
    }
}

impl Message {
    pub fn edit(&self) -> Option<Edit> {
        match self {
            Message::Change { edit, .. } => Some(*edit),
            Message::Event(_) => None,
        }
    }
}

/// Informational events that don't touch the effect
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// All inputs were restored to their defaults
    Reset,
    /// A preset was applied
    PresetImported,
    /// The "Temporal Resolve" folder was opened or closed
    FolderToggled { expanded: bool },
    /// An edit was undone
    Undo,
    /// An undone edit was reapplied
    Redo,
}

/// One undoable edit: the value before and after.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mutation {
    pub old: Edit,
    pub new: Edit,
}

impl Mutation {
    pub fn field(&self) -> Field {
        self.new.field()
    }

    pub fn is_noop(&self) -> bool {
        self.old == self.new
    }

    /// Returns the inverse mutation for undo
    pub fn inverse(&self) -> Mutation {
        Mutation {
            old: self.new,
            new: self.old,
        }
    }
}

/// Simple undo/redo history with mutation coalescing
#[derive(Debug)]
pub struct History {
    undo_stack: Vec<Mutation>,
    redo_stack: Vec<Mutation>,
    max_size: usize,
    // The top of the undo stack may still absorb edits to the same field
    open: bool,
}

impl Default for History {
    fn default() -> Self {
        Self::new(crate::consts::HISTORY_DEPTH)
    }
}

impl History {
    pub fn new(max_size: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_size,
            open: false,
        }
    }

    /// Record a mutation. `last` closes the entry so the next edit starts
    /// a new undo step.
    pub fn push(&mut self, mutation: Mutation, last: bool) {
        // Coalesce continuous value changes on same field
        if !self.try_coalesce(&mutation) {
            self.undo_stack.push(mutation);
            self.trim();
        }

        self.redo_stack.clear();
        self.open = true;
        if last {
            self.seal();
        }
    }

    /// End the current interaction. An entry whose edits cancelled out,
    /// like a drag released where it started, is dropped.
    pub fn seal(&mut self) {
        if self.open && self.undo_stack.last().is_some_and(Mutation::is_noop) {
            self.undo_stack.pop();
        }
        self.open = false;
    }

    /// Try to coalesce with the last mutation (for continuous slider drags).
    /// Returns true if coalesced, false otherwise.
    fn try_coalesce(&mut self, mutation: &Mutation) -> bool {
        if !self.open {
            return false;
        }

        let Some(last) = self.undo_stack.last_mut() else {
            return false;
        };

        if last.field() != mutation.field() {
            return false;
        }

        last.new = mutation.new;
        true
    }

    fn trim(&mut self) {
        while self.undo_stack.len() > self.max_size {
            self.undo_stack.remove(0);
        }
    }

    /// Undo the last mutation, returns the inverse mutation to apply
    pub fn undo(&mut self) -> Option<Mutation> {
        let mutation = self.undo_stack.pop()?;
        let inverse = mutation.inverse();
        self.redo_stack.push(mutation);
        self.open = false;
        Some(inverse)
    }

    /// Redo the last undone mutation
    pub fn redo(&mut self) -> Option<Mutation> {
        let mutation = self.redo_stack.pop()?;
        self.undo_stack.push(mutation);
        self.open = false;
        Some(mutation)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

}
