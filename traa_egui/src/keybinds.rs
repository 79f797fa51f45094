use egui::{Key, KeyboardShortcut, Modifiers};

use crate::app::TraaDemoApp;

const REDO: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND.plus(Modifiers::SHIFT), Key::Z);
const UNDO: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Z);

impl TraaDemoApp {
    pub fn handle_keypress(&mut self, ctx: &egui::Context) {
        // Redo first: undo would also match with shift held
        if ctx.input_mut(|i| i.consume_shortcut(&REDO)) {
            self.panel.redo();
        } else if ctx.input_mut(|i| i.consume_shortcut(&UNDO)) {
            self.panel.undo();
        }

        if ctx.input(|i| i.key_pressed(Key::F1)) {
            self.view_state.show_panel = !self.view_state.show_panel;
        }
    }
}
