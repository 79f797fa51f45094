#![allow(dead_code)]

use std::sync::mpsc::{self, Receiver, Sender};

use traa_panel::history::Message;
use traa_panel::{
    DEFAULT_TRAA_SETTINGS, OnChange, PanelDescriptor, ParameterPanel, PartialTraaSettings,
    TemporalResolve,
};

pub struct TestMessages {
    rx: Receiver<Message>,
}

impl TestMessages {
    pub fn new() -> (Self, Sender<Message>) {
        let (tx, rx) = mpsc::channel();
        (Self { rx }, tx)
    }

    pub fn drain(&self) -> Vec<Message> {
        self.rx.try_iter().collect()
    }

    pub fn clear(&self) {
        while self.rx.try_recv().is_ok() {}
    }
}

pub fn forward(tx: Sender<Message>) -> Option<OnChange> {
    Some(Box::new(move |msg| {
        tx.send(msg).unwrap();
    }))
}

/// Panel whose messages land in the returned collector.
pub fn panel(settings: Option<PartialTraaSettings>) -> (ParameterPanel, TestMessages) {
    let (messages, tx) = TestMessages::new();
    let panel = ParameterPanel::new(PanelDescriptor {
        settings,
        on_change: forward(tx),
    })
    .unwrap();
    (panel, messages)
}

/// Stand-in effect that records every setter call.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordingEffect {
    pub blend: f32,
    pub quality_scale: f32,
    pub dilation: bool,
    pub writes: Vec<&'static str>,
}

impl Default for RecordingEffect {
    fn default() -> Self {
        Self {
            blend: DEFAULT_TRAA_SETTINGS.blend,
            quality_scale: DEFAULT_TRAA_SETTINGS.quality_scale,
            dilation: DEFAULT_TRAA_SETTINGS.dilation,
            writes: Vec::new(),
        }
    }
}

impl TemporalResolve for RecordingEffect {
    fn set_blend(&mut self, blend: f32) {
        self.blend = blend;
        self.writes.push("blend");
    }

    fn set_quality_scale(&mut self, quality_scale: f32) {
        self.quality_scale = quality_scale;
        self.writes.push("qualityScale");
    }

    fn set_dilation(&mut self, dilation: bool) {
        self.dilation = dilation;
        self.writes.push("dilation");
    }
}
