use super::*;
use rstest::rstest;

#[rstest]
#[case("x", Some("X"))]
#[case("A", Some("A"))]
#[case("7", Some("Alpha7"))]
#[case("left shift", Some("LeftShift"))]
#[case("Left Shift", Some("LeftShift"))]
#[case("UP", Some("UpArrow"))]
#[case("page down", Some("PageDown"))]
#[case("[3]", Some("Keypad3"))]
#[case("mouse 2", Some("Mouse2"))]
#[case("f12", Some("F12"))]
#[case("joystick button 5", Some("JoystickButton5"))]
#[case("-", Some("Minus"))]
#[case("\\", Some("Backslash"))]
#[case("hyperspace", None)]
#[case("", None)]
fn test_key_name_translation(#[case] name: &str, #[case] expected: Option<&str>) {
    let table = KeyNameTable::default();
    assert_eq!(table.translate(name).as_deref(), expected, "key name {:?}", name);
}

#[test]
fn test_key_table_covers_common_aliases() {
    assert!(KeyNameTable::default().len() > 60);
}

#[test]
fn test_custom_key_alias() {
    let mut table = KeyNameTable::empty();
    assert_eq!(table.translate("jump"), None);
    table.insert("Jump", "Space");
    assert_eq!(table.translate("JUMP").as_deref(), Some("Space"));
    // letters never need the table
    assert_eq!(table.translate("q").as_deref(), Some("Q"));
}

#[test]
fn test_builtin_tables_are_valid() {
    let config = ConverterConfig::default();
    for kb in &config.surfaces {
        kb.validate().unwrap();
    }
    for kb in &config.types {
        kb.validate().unwrap();
    }
}

#[test]
fn test_input_table_lookups() {
    let config = ConverterConfig::default();
    let input = config
        .surfaces
        .iter()
        .find(|kb| kb.surface == Surface::Input)
        .unwrap();

    assert_eq!(
        input.method("GetKey").map(|d| d.literal),
        Some(LiteralKind::KeyCode)
    );
    assert_eq!(
        input.method("GetAxis").and_then(|d| d.rig),
        Some(RigElement::Axis)
    );
    assert!(input.is_property_ignored("deviceOrientation"));
    assert!(input.is_property_supported("mousePosition"));
    assert!(input.is_legacy_property("ctrl"));
    assert!(input.method("GetJoystickNames").is_none());
    assert!(input.is_method_ignored("GetJoystickNames"));
}

#[rstest]
#[case(&[], "ControlFreak2.X")]
#[case(&["Input"], "")]
#[case(&["In put"], "ControlFreak2.X")]
#[case(&["Input"], "ControlFreak2..X")]
fn test_invalid_knowledge_base(#[case] classes: &[&str], #[case] converted: &str) {
    let kb = ApiKnowledgeBase::new(Surface::Input, converted).with_classes(classes);
    assert!(matches!(
        kb.validate(),
        Err(ConvertError::InvalidKnowledgeBase {
            surface: Surface::Input,
            ..
        })
    ));
}

#[test]
fn test_qualified_identifier() {
    assert!(is_qualified_identifier("UnityEngine.Input"));
    assert!(is_qualified_identifier("_private"));
    assert!(!is_qualified_identifier("1Input"));
    assert!(!is_qualified_identifier("Input."));
}

#[cfg(feature = "serde")]
#[test]
fn test_config_json_roundtrip() {
    let config = ConverterConfig::default();
    let json = config.to_json().unwrap();
    let back = ConverterConfig::from_json(&json).unwrap();
    assert_eq!(back, config);
}
