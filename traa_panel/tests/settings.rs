mod common;

use traa_panel::error::Error;
use traa_panel::{
    DEFAULT_TRAA_SETTINGS, Field, PanelDescriptor, ParameterPanel, PartialTraaSettings, Value,
};

#[test]
fn defaults_without_overrides() {
    let (panel, messages) = common::panel(None);

    assert_eq!(*panel.settings(), DEFAULT_TRAA_SETTINGS);
    assert_eq!(panel.value(Field::Blend), Value::F32(DEFAULT_TRAA_SETTINGS.blend));
    assert_eq!(
        panel.value(Field::QualityScale),
        Value::F32(DEFAULT_TRAA_SETTINGS.quality_scale)
    );
    assert_eq!(panel.value(Field::Dilation), Value::Bool(DEFAULT_TRAA_SETTINGS.dilation));

    // Construction alone never writes to the effect
    assert!(messages.drain().is_empty());
}

#[test]
fn blend_override_keeps_other_defaults() {
    let (panel, _messages) = common::panel(Some(PartialTraaSettings::default().blend(0.5)));

    let settings = panel.settings();
    assert_eq!(settings.blend, 0.5);
    assert_eq!(settings.quality_scale, DEFAULT_TRAA_SETTINGS.quality_scale);
    assert_eq!(settings.dilation, DEFAULT_TRAA_SETTINGS.dilation);
}

#[test]
fn every_subset_of_overrides_merges() {
    let supplied = PartialTraaSettings {
        blend: Some(0.125),
        quality_scale: Some(0.5),
        dilation: Some(false),
    };

    for mask in 0..8u8 {
        let overrides = PartialTraaSettings {
            blend: supplied.blend.filter(|_| mask & 1 != 0),
            quality_scale: supplied.quality_scale.filter(|_| mask & 2 != 0),
            dilation: supplied.dilation.filter(|_| mask & 4 != 0),
        };

        let (panel, _messages) = common::panel(Some(overrides));
        let s = panel.settings();

        let want_blend = if mask & 1 != 0 { 0.125 } else { DEFAULT_TRAA_SETTINGS.blend };
        let want_quality = if mask & 2 != 0 { 0.5 } else { DEFAULT_TRAA_SETTINGS.quality_scale };
        let want_dilation = if mask & 4 != 0 { false } else { DEFAULT_TRAA_SETTINGS.dilation };

        assert_eq!(s.blend, want_blend, "mask {mask:03b}");
        assert_eq!(s.quality_scale, want_quality, "mask {mask:03b}");
        assert_eq!(s.dilation, want_dilation, "mask {mask:03b}");
    }
}

#[test]
fn out_of_range_overrides_are_rejected() {
    let result = ParameterPanel::new(PanelDescriptor {
        settings: Some(PartialTraaSettings::default().blend(1.5)),
        on_change: None,
    });

    assert!(matches!(
        result,
        Err(Error::OutOfRange {
            field: Field::Blend,
            ..
        })
    ));
}

#[test]
fn non_finite_overrides_are_rejected() {
    let result = ParameterPanel::new(PanelDescriptor {
        settings: Some(PartialTraaSettings::default().quality_scale(f32::NAN)),
        on_change: None,
    });

    assert!(matches!(result, Err(Error::NonFinite(Field::QualityScale))));
}

#[test]
fn panel_without_listener_still_edits() {
    let mut panel = ParameterPanel::new(PanelDescriptor::default()).unwrap();
    panel.edit(traa_panel::Edit::Blend(0.5), true);
    assert_eq!(panel.settings().blend, 0.5);
}

#[test]
fn off_grid_overrides_snap_at_construction() {
    let (panel, messages) = common::panel(Some(PartialTraaSettings::default().quality_scale(0.3).blend(0.12345)));

    assert_eq!(panel.value(Field::QualityScale), Value::F32(0.25));
    assert_eq!(panel.value(Field::Blend), Value::F32(0.123));
    assert!(messages.drain().is_empty());

    let json = panel.export_preset().unwrap();
    let (mut imported, _messages) = common::panel(None);
    imported.import_preset(&json).unwrap();

    assert_eq!(imported.settings(), panel.settings());
}
