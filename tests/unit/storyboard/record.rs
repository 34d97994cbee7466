use super::*;
use crate::foundation::core::ParameterFlag;

#[test]
fn header_line_quotes_the_image() {
    let rec = CommandRecord::Header {
        layer: Layer::Foreground,
        origin: Origin::TopLeft,
        image: "sb/bg.png".to_string(),
        x: 320.0,
        y: 240.5,
    };
    assert_eq!(rec.to_string(), "Sprite,3,1,\"sb/bg.png\",320,240.5");
}

#[test]
fn command_line_lists_params_after_times() {
    let rec = CommandRecord::Command {
        prefix: Prefix::Top,
        opcode: Opcode::Move,
        easing: Easing::OutQuad,
        start_ms: 1000,
        end_ms: 1500,
        params: vec![
            Param::from(320.0),
            Param::from(240.0),
            Param::from(100.0),
            Param::from(-50.0),
        ],
    };
    assert_eq!(rec.to_string(), "_M,4,1000,1500,320,240,100,-50");
}

#[test]
fn loop_prefix_is_doubled() {
    let rec = CommandRecord::Command {
        prefix: Prefix::Loop,
        opcode: Opcode::Parameter,
        easing: Easing::Linear,
        start_ms: 0,
        end_ms: 0,
        params: vec![Param::from(ParameterFlag::FlipHorizontal)],
    };
    assert_eq!(rec.to_string(), "__P,0,0,0,H");
}

#[test]
fn loop_marker_line() {
    let rec = CommandRecord::LoopMarker {
        start_ms: 250,
        repeat_count: 4,
    };
    assert_eq!(rec.to_string(), "_L,250,4");
}
