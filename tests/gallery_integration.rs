// SPDX-License-Identifier: MPL-2.0
//! End-to-end tests covering the import pipeline, the gallery's mode rules,
//! and configuration round trips.

use iced::widget::image::Handle;
use iced::Size;
use iced_vitrine::catalog::accept::{self, ACCEPTED_EXTENSIONS};
use iced_vitrine::catalog::{import, Catalog, MediaRecord};
use iced_vitrine::config::{
    self, Config, DEFAULT_THUMBNAIL_SIZE, MAX_THUMBNAIL_SIZE, MIN_THUMBNAIL_SIZE,
};
use iced_vitrine::error::MediaError;
use iced_vitrine::i18n::fluent::I18n;
use iced_vitrine::ui::gallery::{
    Collaborators, Dimensions, Effect, FeaturedSlot, Message, MoveDirection, Props, RenderPlan,
    State,
};
use std::path::{Path, PathBuf};
use tempfile::tempdir;

/// Writes a small valid image; the encoder is picked from the extension.
fn write_image(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    image_rs::RgbImage::from_pixel(4, 4, image_rs::Rgb([180, 40, 40]))
        .save(&path)
        .expect("Failed to write fixture image");
    path
}

/// Builds a record without running the decode pipeline, for tests that only
/// exercise ordering and identity.
fn record(name: &str) -> MediaRecord {
    MediaRecord::new(PathBuf::from(name), Handle::from_rgba(1, 1, vec![0; 4]))
}

#[test]
fn test_import_pipeline_preserves_drop_order() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let drop = vec![
        write_image(dir.path(), "01-front.png"),
        write_image(dir.path(), "02-side.jpg"),
        write_image(dir.path(), "03-detail.jpeg"),
    ];

    let mut catalog = Catalog::new();
    for path in &drop {
        let media = import::import_file(path).expect("Fixture image should decode");
        catalog.push(media.into_record());
    }

    assert_eq!(catalog.len(), 3);
    let names: Vec<&str> = catalog
        .records()
        .iter()
        .map(MediaRecord::file_name)
        .collect();
    assert_eq!(names, ["01-front.png", "02-side.jpg", "03-detail.jpeg"]);

    // The first record is the storefront featured default.
    let first = catalog.first().expect("Catalog should not be empty");
    assert_eq!(first.source(), drop[0].as_path());

    // Priorities mirror list positions after every insertion.
    let priorities: Vec<u32> = catalog
        .records()
        .iter()
        .map(MediaRecord::priority)
        .collect();
    assert_eq!(priorities, [0, 1, 2]);
}

#[test]
fn test_import_rejects_files_outside_the_accept_list() {
    let dir = tempdir().expect("Failed to create temporary directory");

    // Wrong extension fails before any disk access.
    let clip = dir.path().join("clip.gif");
    let (path, error) = import::import_file(&clip).unwrap_err();
    assert_eq!(path, clip);
    assert!(matches!(error, MediaError::UnsupportedType(_)));
    assert_eq!(error.i18n_key(), "error-import-unsupported-type");

    // Accepted extension over bytes that are not an image.
    let fake = dir.path().join("fake.png");
    std::fs::write(&fake, b"not an image").expect("Failed to write fixture");
    let (_, error) = import::import_file(&fake).unwrap_err();
    assert!(matches!(error, MediaError::DecodeFailed(_)));

    // Accepted extension with no file behind it.
    let missing = dir.path().join("missing.png");
    let (_, error) = import::import_file(&missing).unwrap_err();
    assert!(matches!(error, MediaError::Unreadable(_)));
}

#[test]
fn test_accept_filter_partitions_a_mixed_drop() {
    let paths: Vec<PathBuf> = [
        "front.png",
        "side.JPG",
        "notes.txt",
        "detail.jpeg",
        "clip.gif",
        "archive",
    ]
    .iter()
    .map(PathBuf::from)
    .collect();

    let (accepted, rejected) = accept::partition_uploads(paths);

    // Matching is case-insensitive and both halves keep their drop order.
    let accepted: Vec<_> = accepted.iter().filter_map(|p| p.to_str()).collect();
    let rejected: Vec<_> = rejected.iter().filter_map(|p| p.to_str()).collect();
    assert_eq!(accepted, ["front.png", "side.JPG", "detail.jpeg"]);
    assert_eq!(rejected, ["notes.txt", "clip.gif", "archive"]);

    assert_eq!(ACCEPTED_EXTENSIONS, ["jpg", "jpeg", "png"]);
}

#[test]
fn test_display_and_editable_render_plans() {
    let records = [record("front.png"), record("side.png")];
    let authorize = || false;
    let collaborators = Collaborators::standard(None, &authorize);

    // Display mode with media: a plain featured view, no editing chrome.
    let plan = RenderPlan::of(&Props::new(&records, collaborators));
    assert!(!plan.drop_surface);
    assert_eq!(plan.featured, FeaturedSlot::Media(records[0].id()));
    assert!(!plan.admin_frame);
    assert!(!plan.strip_placeholder);
    assert_eq!(plan.strip_items, vec![records[0].id(), records[1].id()]);

    // Display mode without media shows the empty state.
    let empty: [MediaRecord; 0] = [];
    let plan = RenderPlan::of(&Props::new(&empty, collaborators));
    assert_eq!(plan.featured, FeaturedSlot::EmptyState);
    assert!(plan.strip_items.is_empty());
    assert!(!plan.strip_placeholder);

    // Editable mode adds the drop surface and a strip placeholder.
    let plan = RenderPlan::of(&Props::new(&records, collaborators).editable(true));
    assert!(plan.drop_surface);
    assert!(plan.strip_placeholder);

    // With no media the placeholder also claims the featured slot, and the
    // strip still offers its own add control.
    let plan = RenderPlan::of(&Props::new(&empty, collaborators).editable(true));
    assert_eq!(plan.featured, FeaturedSlot::AddPlaceholder);
    assert!(plan.strip_placeholder);
}

#[test]
fn test_admin_frame_requires_both_mode_and_privilege() {
    let records = [record("front.png")];

    let granted = || true;
    let collaborators = Collaborators::standard(None, &granted);
    let plan = RenderPlan::of(&Props::new(&records, collaborators).editable(true));
    assert!(plan.admin_frame);

    // Privilege without editable mode draws nothing extra.
    let plan = RenderPlan::of(&Props::new(&records, collaborators));
    assert!(!plan.admin_frame);

    let denied = || false;
    let collaborators = Collaborators::standard(None, &denied);
    let plan = RenderPlan::of(&Props::new(&records, collaborators).editable(true));
    assert!(!plan.admin_frame);
}

#[test]
fn test_featured_pin_overrides_list_order() {
    let records = [record("front.png"), record("side.png")];
    let authorize = || false;
    let collaborators = Collaborators::standard(None, &authorize);

    let pinned = Props::new(&records, collaborators).featured(Some(&records[1]));
    assert_eq!(
        pinned.effective_featured().map(MediaRecord::id),
        Some(records[1].id())
    );

    // The strip mirrors list order regardless of the pin.
    let plan = RenderPlan::of(&pinned);
    assert_eq!(plan.featured, FeaturedSlot::Media(records[1].id()));
    assert_eq!(plan.strip_items, vec![records[0].id(), records[1].id()]);

    // Without a pin the first list element takes the slot.
    let unpinned = Props::new(&records, collaborators);
    assert_eq!(
        unpinned.effective_featured().map(MediaRecord::id),
        Some(records[0].id())
    );
}

#[test]
fn test_hover_zoom_requires_an_explicit_pin() {
    let records = [record("front.png")];
    let authorize = || false;
    let collaborators = Collaborators::standard(None, &authorize);

    // The first-element fallback never zooms, even with the flag on.
    let fallback = Props::new(&records, collaborators).allow_featured_media_hover(true);
    assert!(fallback.effective_featured().is_some());
    assert!(!fallback.hover_zoom_enabled());

    let pinned = Props::new(&records, collaborators)
        .featured(Some(&records[0]))
        .allow_featured_media_hover(true);
    assert!(pinned.hover_zoom_enabled());
    assert!(RenderPlan::of(&pinned).hover_zoom);

    // A pin without the flag stays inert.
    let flag_off = Props::new(&records, collaborators).featured(Some(&records[0]));
    assert!(!flag_off.hover_zoom_enabled());
}

#[test]
fn test_gallery_effects_drive_a_catalog() {
    let mut catalog = Catalog::new();
    catalog.push(record("front.png"));
    catalog.push(record("side.png"));
    let first = catalog.records()[0].id();

    let mut state = State::new();
    let authorize = || true;
    let snapshot = catalog.records().to_vec();
    let props = Props::new(&snapshot, Collaborators::standard(None, &authorize)).editable(true);

    // A strip move button yields a reorder request the embedder applies.
    let (effect, _task) = state.handle_message(Message::MoveLaterPressed(first), &props);
    assert_eq!(effect, Effect::MoveMedia(first, MoveDirection::Later));
    match effect {
        Effect::MoveMedia(id, MoveDirection::Later) => assert!(catalog.move_toward_back(id)),
        other => panic!("Unexpected effect: {other:?}"),
    }
    assert_eq!(catalog.records()[1].id(), first);

    // Moving past the back edge is a silent no-op.
    assert!(!catalog.move_toward_back(first));
    assert_eq!(catalog.records()[1].id(), first);

    // Removal flows the same way.
    let (effect, _task) = state.handle_message(Message::RemovePressed(first), &props);
    assert_eq!(effect, Effect::RemoveMedia(first));
    assert!(catalog.remove(first).is_some());
    assert_eq!(catalog.len(), 1);
    assert!(catalog.get(first).is_none());
}

#[test]
fn test_feature_messages_round_trip() {
    let records = [record("front.png"), record("side.png")];
    let authorize = || false;
    let props = Props::new(&records, Collaborators::standard(None, &authorize)).editable(true);
    let mut state = State::new();

    let id = records[1].id();
    let (effect, _task) = state.handle_message(Message::FeaturePressed(id), &props);
    assert_eq!(effect, Effect::FeatureMedia(Some(id)));

    let (effect, _task) = state.handle_message(Message::UnfeaturePressed, &props);
    assert_eq!(effect, Effect::FeatureMedia(None));
}

#[test]
fn test_zero_file_drops_and_unmounted_pickers_stay_silent() {
    let records: [MediaRecord; 0] = [];
    let authorize = || false;
    let props = Props::new(&records, Collaborators::standard(None, &authorize)).editable(true);
    let mut state = State::new();

    let (effect, _task) = state.handle_message(Message::FilesDropped(Vec::new()), &props);
    assert_eq!(effect, Effect::None);

    // A cancelled picker reports nothing either.
    let (effect, _task) = state.handle_message(Message::PickerResolved(None), &props);
    assert_eq!(effect, Effect::None);

    // Without a mounted drop target the add button has nowhere to send files.
    let (effect, _task) = state.handle_message(Message::AddMediaPressed, &props);
    assert_eq!(effect, Effect::None);
}

#[test]
fn test_dropped_files_arrive_pre_filtered() {
    let records: [MediaRecord; 0] = [];
    let authorize = || false;
    let props = Props::new(&records, Collaborators::standard(None, &authorize)).editable(true);
    let mut state = State::new();

    let paths = vec![PathBuf::from("a.png"), PathBuf::from("b.txt")];
    let (effect, _task) = state.handle_message(Message::FilesDropped(paths), &props);
    assert_eq!(
        effect,
        Effect::Dropped {
            accepted: vec![PathBuf::from("a.png")],
            rejected: vec![PathBuf::from("b.txt")],
        }
    );
}

#[test]
fn test_featured_dimensions_start_at_the_sentinel() {
    let mut state = State::new();
    assert_eq!(state.dimensions(), Dimensions::UNMEASURED);
    assert!(!state.dimensions().is_measured());

    let records: [MediaRecord; 0] = [];
    let authorize = || false;
    let props = Props::new(&records, Collaborators::standard(None, &authorize));
    let (effect, _task) =
        state.handle_message(Message::FeaturedResized(Size::new(320.0, 240.0)), &props);
    assert_eq!(effect, Effect::None);
    assert!(state.dimensions().is_measured());
    assert_eq!(state.dimensions().width, 320.0);
    assert_eq!(state.dimensions().height, 240.0);
}

#[test]
fn test_config_round_trip_preserves_sections() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut config = Config::default();
    config.general.language = Some("fr".to_string());
    config.gallery.thumbnail_size = Some(128);
    config.gallery.allow_featured_hover = Some(true);
    config.access.admin = Some(true);

    config::save_to_path(&config, &path).expect("Failed to write config file");
    let loaded = config::load_from_path(&path).expect("Failed to load config from path");

    assert_eq!(loaded, config);
    assert_eq!(loaded.thumbnail_size(), 128);
    assert!(loaded.allow_featured_hover());
    assert!(loaded.admin_access());
}

#[test]
fn test_config_clamps_thumbnail_size() {
    let mut config = Config::default();
    assert_eq!(config.thumbnail_size(), DEFAULT_THUMBNAIL_SIZE);

    config.gallery.thumbnail_size = Some(9999);
    assert_eq!(config.thumbnail_size(), MAX_THUMBNAIL_SIZE);

    config.gallery.thumbnail_size = Some(1);
    assert_eq!(config.thumbnail_size(), MIN_THUMBNAIL_SIZE);
}

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut config = Config::default();
    config.general.language = Some("en-US".to_string());
    config::save_to_path(&config, &path).expect("Failed to write config file");

    let loaded = config::load_from_path(&path).expect("Failed to load config from path");
    let i18n_en = I18n::new(None, None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    config.general.language = Some("fr".to_string());
    config::save_to_path(&config, &path).expect("Failed to write config file");

    let loaded = config::load_from_path(&path).expect("Failed to load config from path");
    let i18n_fr = I18n::new(None, None, &loaded);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
}

#[test]
fn test_translations_resolve_in_both_locales() {
    let mut config = Config::default();

    config.general.language = Some("en-US".to_string());
    let en = I18n::new(None, None, &config);
    assert_eq!(en.tr("toolbar-mode-display"), "Storefront preview");

    config.general.language = Some("fr".to_string());
    let fr = I18n::new(None, None, &config);
    assert_eq!(fr.tr("toolbar-mode-display"), "Aperçu boutique");

    // Missing keys degrade to a visible marker instead of panicking.
    assert_eq!(en.tr("no-such-key"), "MISSING: no-such-key");
}
