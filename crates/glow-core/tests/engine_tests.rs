use glow_core::{GlowEngine, TargetPosition, VisualState};

#[test]
fn inert_before_start() {
    let mut engine = GlowEngine::new();
    engine.pointer_moved(100.0, 100.0, 1920.0, 1080.0);
    let vs = engine.tick(5000.0);
    assert_eq!(vs, VisualState::default());
    assert_eq!(engine.target(), TargetPosition::default());
    assert!(!engine.is_running());
}

#[test]
fn running_engine_follows_pointer_and_ticks() {
    let mut engine = GlowEngine::new();
    engine.start();
    assert!(engine.is_running());

    engine.pointer_moved(1920.0, 540.0, 1920.0, 1080.0);
    assert_eq!(engine.target(), TargetPosition { x: 95.0, y: 50.0 });

    let before = engine.visual();
    let after = engine.tick(16.0);
    assert_ne!(before, after);
    assert!(after.x > before.x, "x should ease toward the target");
}

#[test]
fn pointer_sample_alone_does_not_publish() {
    let mut engine = GlowEngine::new();
    engine.start();
    let before = engine.visual();
    engine.pointer_moved(1920.0, 1080.0, 1920.0, 1080.0);
    // Only a tick publishes a new frame.
    assert_eq!(engine.visual(), before);
}

#[test]
fn zero_viewport_sample_is_skipped() {
    let mut engine = GlowEngine::new();
    engine.start();
    engine.pointer_moved(500.0, 500.0, 0.0, 0.0);
    assert_eq!(engine.target(), TargetPosition::default());
    let vs = engine.tick(16.0);
    assert!(vs.x.is_finite() && vs.y.is_finite());
}

#[test]
fn stop_freezes_all_state() {
    let mut engine = GlowEngine::new();
    engine.start();
    engine.pointer_moved(300.0, 300.0, 1920.0, 1080.0);
    engine.tick(16.0);
    engine.stop();

    let target = engine.target();
    let visual = engine.visual();
    engine.pointer_moved(1700.0, 900.0, 1920.0, 1080.0);
    assert_eq!(engine.tick(9_999.0), visual);
    assert_eq!(engine.target(), target);
    assert_eq!(engine.visual(), visual);
}

#[test]
fn stop_is_idempotent_and_terminal() {
    let mut engine = GlowEngine::new();
    engine.start();
    engine.stop();
    engine.stop();
    // A stopped engine cannot be restarted; remounting means a new instance.
    engine.start();
    assert!(!engine.is_running());
    let visual = engine.visual();
    assert_eq!(engine.tick(123.0), visual);
}
