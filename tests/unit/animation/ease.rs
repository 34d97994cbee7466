use super::*;

#[test]
fn codes_follow_declaration_order() {
    for (i, e) in Easing::ALL.iter().enumerate() {
        assert_eq!(usize::from(e.code()), i);
    }
    assert_eq!(Easing::default(), Easing::Linear);
    assert_eq!(Easing::InOutBounce.code(), 34);
}

#[test]
fn try_from_rejects_unknown_codes() {
    assert_eq!(Easing::try_from(4).unwrap(), Easing::OutQuad);
    assert!(Easing::try_from(35).is_err());
}

#[test]
fn serde_uses_numeric_codes() {
    let e: Easing = serde_json::from_str("7").unwrap();
    assert_eq!(e, Easing::OutCubic);
    assert_eq!(serde_json::to_string(&Easing::Out).unwrap(), "1");
    assert!(serde_json::from_str::<Easing>("99").is_err());
}
