// Host-side checks on the tuning constants and the stock config.

use liquid_core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn damping_factors_decay_toward_rest() {
    assert!(DAMPING_VY > 0.0 && DAMPING_VY < 1.0);
    assert!(DAMPING_VX > 0.0 && DAMPING_VX < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn rest_band_sits_inside_pool_band() {
    // particles come to rest below the band's top edge and above the bottom edge
    assert!(REST_OFFSET < POOL_BAND_HEIGHT);
    assert!(REST_BAND_JITTER <= REST_OFFSET);
    // recycled particles must not be recycled again on arrival
    assert!(RESPAWN_Y >= -RECYCLE_MARGIN);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn settle_speed_below_slowest_spawn() {
    assert!(SETTLE_SPEED < SPAWN_VELOCITY_Y.min);
    assert!(SWAY_AMPLITUDE <= SETTLE_SPEED);
}

#[test]
fn palette_entries_are_distinct() {
    assert_ne!(PALETTE[0], PALETTE[1]);
    assert_ne!(PALETTE[1], PALETTE[2]);
    assert_ne!(PALETTE[0], PALETTE[2]);
    assert_eq!(POOL_ACCENT, Rgb::new(99, 102, 241));
}

#[test]
fn viewport_breakpoint_selects_particle_count() {
    assert_eq!(particle_count_for_viewport(375.0), 30);
    assert_eq!(particle_count_for_viewport(767.0), 30);
    assert_eq!(particle_count_for_viewport(768.0), 150);
    assert_eq!(FieldConfig::for_viewport(1440.0).particle_count, 150);
    assert_eq!(FieldConfig::for_viewport(320.0).particle_count, 30);
}

#[test]
fn validation_rejects_bad_tunables() {
    let base = FieldConfig::default();
    assert_eq!(
        base.clone().with_particle_count(0).validate(),
        Err(ConfigError::NoParticles)
    );

    let inverted = FieldConfig {
        spawn_velocity_y: Span::new(3.0, 1.0),
        ..base.clone()
    };
    assert!(matches!(
        inverted.validate(),
        Err(ConfigError::BadSpan { name: "spawn_velocity_y", .. })
    ));

    let opaque = FieldConfig {
        spawn_alpha: Span::new(0.5, 1.5),
        ..base.clone()
    };
    assert!(matches!(opaque.validate(), Err(ConfigError::AlphaOutOfRange { .. })));

    let runaway = FieldConfig {
        damping_vy: 1.2,
        ..base.clone()
    };
    assert!(matches!(
        runaway.validate(),
        Err(ConfigError::BadDamping { name: "damping_vy", .. })
    ));

    let flat = FieldConfig {
        spawn_radius: Span::new(0.0, 2.0),
        ..base
    };
    assert_eq!(flat.validate(), Err(ConfigError::NonPositiveRadius(0.0)));
}
