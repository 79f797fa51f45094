use std::cell::RefCell;
use std::rc::Rc;

use crate::consts::{FOLDER_TITLE, PANEL_WIDTH};
use crate::edit::{Edit, Field};
use crate::error::Result;
use crate::history::{Event, History, Message, Mutation};
use crate::preset::Preset;
use crate::settings::{self, DEFAULT_TRAA_SETTINGS, PartialTraaSettings, TraaSettings};
use crate::traits::TemporalResolve;
use crate::{SlotDef, Value};

/// The single change listener of a panel.
pub type OnChange = Box<dyn FnMut(Message)>;

#[derive(Default)]
pub struct PanelDescriptor {
    /// Overrides merged over [`DEFAULT_TRAA_SETTINGS`].
    pub settings: Option<PartialTraaSettings>,
    pub on_change: Option<OnChange>,
}

/// Presentation of the panel container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelStyle {
    pub width: f32,
    pub selectable_text: bool,
}

impl Default for PanelStyle {
    fn default() -> Self {
        Self {
            width: PANEL_WIDTH,
            selectable_text: false,
        }
    }
}

/// A named collapsible grouping of inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct Folder {
    pub title: &'static str,
    pub expanded: bool,
}

/// Toolkit-neutral state of the tuning panel: the bound input values, the
/// folder they live in and the listener that forwards every change.
pub struct ParameterPanel {
    inputs: TraaSettings,
    folder: Folder,
    style: PanelStyle,
    history: History,
    on_change: Option<OnChange>,
}

impl ParameterPanel {
    pub fn new(descriptor: PanelDescriptor) -> Result<Self> {
        let mut inputs = settings::merge(descriptor.settings.as_ref());
        inputs.validate()?;

        // Overrides land on the same step grid the widgets produce
        for field in Field::ALL {
            inputs.apply(inputs.edit_for(field).constrained());
        }

        log::debug!("creating parameter panel with {:?}", inputs);

        Ok(Self {
            inputs,
            folder: Folder {
                title: FOLDER_TITLE,
                expanded: false,
            },
            style: PanelStyle::default(),
            history: History::default(),
            on_change: descriptor.on_change,
        })
    }

    /// Create a panel whose listener writes every change onto `target`.
    pub fn bound_to<T: TemporalResolve + 'static>(
        target: Rc<RefCell<T>>,
        settings: Option<PartialTraaSettings>,
    ) -> Result<Self> {
        Self::new(PanelDescriptor {
            settings,
            on_change: Some(Box::new(move |msg: Message| {
                if let Some(edit) = msg.edit() {
                    target.borrow_mut().apply(edit);
                }
            })),
        })
    }

    /// Current values of the bound inputs.
    pub fn settings(&self) -> &TraaSettings {
        &self.inputs
    }

    pub fn value(&self, field: Field) -> Value {
        self.inputs.get(field)
    }

    pub fn slot(&self, field: Field) -> &'static SlotDef {
        field.slot()
    }

    pub fn folder(&self) -> &Folder {
        &self.folder
    }

    pub fn style(&self) -> &PanelStyle {
        &self.style
    }

    pub fn set_expanded(&mut self, expanded: bool) {
        if self.folder.expanded == expanded {
            return;
        }
        self.folder.expanded = expanded;
        self.dispatch(Event::FolderToggled { expanded }.into());
    }

    /// Apply a widget edit. The value is constrained to the field's range
    /// and step first; the listener only hears about actual changes.
    ///
    /// Returns the edit as stored.
    pub fn edit(&mut self, edit: Edit, last: bool) -> Edit {
        let edit = edit.constrained();
        let old = self.inputs.edit_for(edit.field());

        if !self.inputs.apply(edit) {
            if last {
                self.history.seal();
            }
            return edit;
        }

        log::debug!("{} = {}", edit.field(), edit.value());
        self.history.push(Mutation { old, new: edit }, last);
        self.dispatch(Message::Change { edit, last });
        edit
    }

    /// String keyed edit, for callers that only know the input by name.
    pub fn set_by_key(&mut self, key: &str, value: Value) -> Result<Edit> {
        let field = Field::from_key(key)
            .inspect_err(|e| log::warn!("rejected edit: {e}"))?;
        let edit = Edit::from_value(field, value)
            .inspect_err(|e| log::warn!("rejected edit: {e}"))?;
        Ok(self.edit(edit, true))
    }

    /// Restore every input to its default value.
    pub fn reset(&mut self) {
        log::info!("resetting {} to defaults", self.folder.title);
        for field in Field::ALL {
            self.edit(DEFAULT_TRAA_SETTINGS.edit_for(field), true);
        }
        self.dispatch(Event::Reset.into());
    }

    /// Restore one input to the default its slot declares.
    pub fn reset_field(&mut self, field: Field) -> Result<Edit> {
        let edit = Edit::from_value(field, field.slot().default_value())?;
        Ok(self.edit(edit, true))
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn undo(&mut self) -> bool {
        let Some(mutation) = self.history.undo() else {
            return false;
        };
        self.replay(mutation.new);
        self.dispatch(Event::Undo.into());
        true
    }

    pub fn redo(&mut self) -> bool {
        let Some(mutation) = self.history.redo() else {
            return false;
        };
        self.replay(mutation.new);
        self.dispatch(Event::Redo.into());
        true
    }

    pub fn export_preset(&self) -> Result<String> {
        Preset::new(&self.inputs).to_json()
    }

    /// Apply a preset exported by [`ParameterPanel::export_preset`]. The
    /// whole preset is validated before any input changes.
    pub fn import_preset(&mut self, json: &str) -> Result<()> {
        let preset = Preset::from_json(json)?;
        self.apply_preset(&preset)
    }

    pub fn apply_preset(&mut self, preset: &Preset) -> Result<()> {
        let next = self.inputs.merge(&preset.settings);
        next.validate()?;

        log::info!("applying preset {}", preset.version);
        for field in Field::ALL {
            self.edit(next.edit_for(field), true);
        }
        self.dispatch(Event::PresetImported.into());
        Ok(())
    }

    // History entries hold already constrained values
    fn replay(&mut self, edit: Edit) {
        if self.inputs.apply(edit) {
            self.dispatch(Message::Change { edit, last: true });
        }
    }

    fn dispatch(&mut self, msg: Message) {
        if let Some(on_change) = self.on_change.as_mut() {
            on_change(msg);
        }
    }
}
