use super::*;
use crate::{animation::ease::Easing, foundation::core::Rgb};

#[test]
fn fade_in_then_out_matches_reference_chain() {
    let mut s = Sprite::new("a.png");
    s.fade_in(100, Easing::Linear).fade_out(100, Easing::Linear);
    assert_eq!(
        s.chain_lines(),
        [
            "Sprite,0,0,\"a.png\",320,240",
            "_F,0,0,100,0,1",
            "_F,0,100,200,1,0",
        ]
    );
}

#[test]
fn loop_move_matches_reference_chain() {
    let mut s = Sprite::new("a.png");
    s.start_loop(3)
        .move_to(50, 10.0, 10.0, Easing::Linear)
        .end_loop();
    assert_eq!(
        s.chain_lines()[1..],
        ["_L,0,3", "__M,0,0,50,320,240,10,10"]
    );
    assert_eq!(s.ms(), 150);
}

#[test]
fn header_is_fixed_at_construction() {
    let mut s = Sprite::builder("sb/star.png")
        .start_ms(1200)
        .origin(Origin::BottomCentre)
        .layer(Layer::Foreground)
        .position(100.0, 50.0)
        .build();
    let header = s.chain()[0].clone();
    assert_eq!(header.to_string(), "Sprite,3,7,\"sb/star.png\",100,50");

    s.set_position(0.0, 0.0)
        .set_layer(Layer::Overlay)
        .move_to(100, 10.0, 10.0, Easing::Linear)
        .color(100, Rgb::new(0, 0, 0), Easing::Linear);
    assert_eq!(s.chain()[0], header);
    assert_eq!(s.layer(), Layer::Overlay);
    assert_eq!(s.chain_lines()[1], "_M,0,1200,1300,0,0,10,10");
}

#[test]
fn builder_defaults() {
    let s = Sprite::new("x.png");
    assert_eq!(s.image(), "x.png");
    assert_eq!(s.origin(), Origin::Centre);
    assert_eq!(s.layer(), Layer::Background);
    assert_eq!(s.ms(), 0);
    assert_eq!((s.pose().x, s.pose().y), (320.0, 240.0));
}

#[test]
fn apply_effect_inserts_marker_and_copy() {
    let mut fx = Effect::new();
    fx.fade_in(100, Easing::Linear).fade_out(100, Easing::Linear);

    let mut s = Sprite::new("a.png");
    s.sleep(300).apply_effect(&fx, 10).fade_out(500, Easing::Linear);

    let lines = s.chain_lines();
    assert_eq!(lines[1], "_L,300,10");
    assert_eq!(&s.chain()[2..4], fx.chain());
    assert_eq!(lines[4], "_F,0,2300,2800,0,0");
    assert_eq!(s.ms(), 2800);
}

#[test]
fn one_effect_can_be_applied_repeatedly() {
    let mut fx = Effect::new();
    fx.resize(40, 1.5, Easing::Linear);

    let mut s = Sprite::new("a.png");
    s.apply_effect(&fx, 1).apply_effect(&fx, 3);

    assert_eq!(
        s.chain_lines()[1..],
        ["_L,0,1", "__S,0,0,40,1,1.5", "_L,40,3", "__S,0,0,40,1,1.5"]
    );
    assert_eq!(s.ms(), 40 + 3 * 40);
    assert_eq!(fx.total_duration(), 40);
}
