use std::cell::RefCell;
use std::rc::Rc;

use spritefield_core::{
    Config, Easing, ImageAtlas, ImageCompletion, ImageData, SpriteId, SpriteStore, StoreError,
    TextureSlot,
};

fn approx(a: f32, b: f32, eps: f32) {
    assert!((a - b).abs() <= eps, "left={a} right={b} eps={eps}");
}

fn mk_store(capacity: u32) -> SpriteStore {
    SpriteStore::new(
        Config {
            capacity,
            sprite_width: 2.0,
            sprite_height: 3.0,
            easing: Easing::Linear,
            ..Default::default()
        },
        0.0,
    )
}

/// Atlas fake recording every request and completing synchronously.
struct RecordingAtlas {
    calls: Rc<RefCell<Vec<(u32, u32, u32)>>>,
}

impl ImageAtlas for RecordingAtlas {
    fn rasterize(&mut self, id: SpriteId, image: &ImageData, done: Option<ImageCompletion>) {
        self.calls
            .borrow_mut()
            .push((id.0, image.width, image.height));
        if let Some(done) = done {
            done(id);
        }
    }
}

/// it should start every sprite on the placeholder slot
#[test]
fn sprites_start_on_placeholder() {
    let mut store = mk_store(4);
    let id = store.activate().unwrap();
    assert_eq!(store.texture_slot(id), TextureSlot::Placeholder);
    assert_eq!(store.base_texture_slot(id), TextureSlot::Placeholder);
}

/// it should flip slots and stamp the crossfade window on switch
#[test]
fn switch_flips_and_stamps_window() {
    let mut store = mk_store(4);
    let id = store.activate().unwrap();

    store.switch_textures(id, 1000.0, 1400.0);

    assert_eq!(store.texture_slot(id), TextureSlot::Custom);
    assert_eq!(store.base_texture_slot(id), TextureSlot::Placeholder);
    assert!((store.base_texture_timestamp_ms(id) - 1000.0).abs() < 1e-3);
    assert!((store.texture_timestamp_ms(id) - 1400.0).abs() < 1e-3);
}

/// it should return to the original slot after two switches, swapping the base
#[test]
fn switch_round_trip() {
    let mut store = mk_store(4);
    let id = store.activate().unwrap();

    store.switch_textures(id, 1000.0, 1400.0);
    store.switch_textures(id, 2000.0, 2400.0);

    assert_eq!(store.texture_slot(id), TextureSlot::Placeholder);
    assert_eq!(store.base_texture_slot(id), TextureSlot::Custom);
    assert!((store.base_texture_timestamp_ms(id) - 2000.0).abs() < 1e-3);
    assert!((store.texture_timestamp_ms(id) - 2400.0).abs() < 1e-3);
}

/// it should restart the window from the current pair when switching mid-fade
#[test]
fn switch_mid_fade_restarts_window() {
    let mut store = mk_store(4);
    let id = store.activate().unwrap();

    store.switch_textures(id, 1000.0, 1400.0);
    // Fade is half done; a new switch flips back and restarts, no queueing.
    store.switch_textures(id, 1200.0, 1600.0);

    assert_eq!(store.texture_slot(id), TextureSlot::Placeholder);
    assert_eq!(store.base_texture_slot(id), TextureSlot::Custom);
    assert!((store.base_texture_timestamp_ms(id) - 1200.0).abs() < 1e-3);
    assert!((store.texture_timestamp_ms(id) - 1600.0).abs() < 1e-3);
}

/// it should blend the crossfade with the shared easing
#[test]
fn texture_blend_over_window() {
    let mut store = mk_store(4);
    let id = store.activate().unwrap();
    store.switch_textures(id, 1000.0, 1400.0);

    approx(store.texture_blend(id, 900.0), 0.0, 0.0);
    approx(store.texture_blend(id, 1000.0), 0.0, 0.0);
    approx(store.texture_blend(id, 1200.0), 0.5, 1e-6);
    approx(store.texture_blend(id, 1400.0), 1.0, 0.0);
    approx(store.texture_blend(id, 2000.0), 1.0, 0.0);
}

/// it should keep the crossfade pair decoupled from the attribute pair
#[test]
fn texture_pair_independent_of_attribute_pair() {
    let mut store = mk_store(4);
    let id = store.activate().unwrap();
    let mut sprite = store.handle(id);
    sprite.set_base_timestamp_ms(111.0);
    sprite.set_timestamp_ms(222.0);

    store.switch_textures(id, 1000.0, 1400.0);
    assert!((store.base_timestamp_ms(id) - 111.0).abs() < 1e-3);
    assert!((store.timestamp_ms(id) - 222.0).abs() < 1e-3);

    // Rebase folds position/color/opacity; the crossfade window stays put.
    store.rebase(id, 200.0);
    assert!((store.base_texture_timestamp_ms(id) - 1000.0).abs() < 1e-3);
    assert!((store.texture_timestamp_ms(id) - 1400.0).abs() < 1e-3);
    assert_eq!(store.texture_slot(id), TextureSlot::Custom);
}

/// it should contain a point iff it lies within the sprite's current span
#[test]
fn point_query_containment() {
    let mut store = mk_store(5);
    let a = store.activate().unwrap();
    let b = store.activate().unwrap();
    store.set_position(a, 10.0, 10.0, 0.0);
    store.set_position(b, 11.0, 11.0, 0.0);

    // a spans [10,12]x[10,13] (w=2, h=3); b spans [11,13]x[11,14].
    let hits = store.sprites_at(10.5, 12.0);
    assert_eq!(hits, vec![a]);

    let both = store.sprites_at(11.5, 12.5);
    assert!(both.contains(&a) && both.contains(&b));

    // Edges are inclusive.
    assert!(store.sprites_at(10.0, 10.0).contains(&a));
    assert!(store.sprites_at(12.0, 13.0).contains(&a));

    // Just outside.
    assert!(!store.sprites_at(12.1, 10.0).contains(&a));
    assert!(store.sprites_at(30.0, 30.0).is_empty());
}

/// it should use the current (not interpolated) position mid-transition
#[test]
fn point_query_ignores_interpolation() {
    let mut store = mk_store(5);
    let id = store.activate().unwrap();
    let mut sprite = store.handle(id);
    sprite.set_base_position(0.0, 0.0, 0.0);
    sprite.set_base_timestamp_ms(1000.0);
    sprite.set_position(100.0, 100.0, 0.0);
    sprite.set_timestamp_ms(2000.0);

    // Halfway through the animation the sprite renders near (50,50), but
    // the query sees the current target span.
    assert!(store.sprites_at(101.0, 101.0).contains(&id));
    assert!(!store.sprites_at(51.0, 51.0).contains(&id));
}

/// it should scan every slot, so unmoved slots match at the origin quad
#[test]
fn point_query_scans_full_capacity() {
    let mut store = mk_store(5);
    let a = store.activate().unwrap();
    let b = store.activate().unwrap();
    store.set_position(a, 10.0, 10.0, 0.0);
    store.set_position(b, 20.0, 20.0, 0.0);

    // Slots 2..4 were never written and still sit at [0,2]x[0,3].
    let hits = store.sprites_at(0.5, 0.5);
    assert_eq!(hits, vec![SpriteId(2), SpriteId(3), SpriteId(4)]);
}

/// it should forward image requests to the installed atlas and fire completion once
#[test]
fn image_requests_forward_and_complete() {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let mut store = mk_store(4);
    store.install_atlas(Box::new(RecordingAtlas {
        calls: Rc::clone(&calls),
    }));

    let id = store.activate().unwrap();
    let completions = Rc::new(RefCell::new(Vec::new()));
    let seen = Rc::clone(&completions);
    store
        .set_image_data(
            id,
            &ImageData::solid(4, 4, [255, 0, 0, 255]),
            Some(Box::new(move |done_id| seen.borrow_mut().push(done_id))),
        )
        .unwrap();

    assert_eq!(calls.borrow().as_slice(), &[(id.0, 4, 4)]);
    assert_eq!(completions.borrow().as_slice(), &[id]);
    assert_eq!(store.image_request_count(id), 1);

    // A newer request supersedes the old one; both complete, latest wins.
    store
        .set_image_data(id, &ImageData::solid(8, 8, [0, 255, 0, 255]), None)
        .unwrap();
    assert_eq!(calls.borrow().len(), 2);
    assert_eq!(store.image_request_count(id), 2);
}

/// it should error when no atlas collaborator is installed
#[test]
fn image_request_without_atlas_errors() {
    let mut store = mk_store(4);
    let id = store.activate().unwrap();
    let err = store
        .set_image_data(id, &ImageData::solid(2, 2, [0, 0, 0, 255]), None)
        .unwrap_err();
    assert!(matches!(err, StoreError::AtlasNotInstalled));
    assert_eq!(store.image_request_count(id), 0);
}
