//! Built-in tables for Unity's legacy input API.

use super::{
    ApiKnowledgeBase, LiteralKind, MethodDescriptor, RigElement, Surface, TypeKnowledgeBase,
};

pub(super) fn input() -> ApiKnowledgeBase {
    let axis = MethodDescriptor::new(LiteralKind::String).with_rig(RigElement::Axis);
    let button = MethodDescriptor::new(LiteralKind::String).with_rig(RigElement::Button);
    let key = MethodDescriptor::new(LiteralKind::KeyCode).with_rig(RigElement::Key);
    let mouse = MethodDescriptor::new(LiteralKind::Int).with_rig(RigElement::MouseButton);
    let any = MethodDescriptor::new(LiteralKind::None);

    ApiKnowledgeBase::new(Surface::Input, "ControlFreak2.CF2Input")
        .with_classes(&["UnityEngine.Input", "Input", "CFInput"])
        .with_method("GetAxis", axis)
        .with_method("GetAxisRaw", axis)
        .with_method("GetButton", button)
        .with_method("GetButtonDown", button)
        .with_method("GetButtonUp", button)
        .with_method("GetKey", key)
        .with_method("GetKeyDown", key)
        .with_method("GetKeyUp", key)
        .with_method("GetMouseButton", mouse)
        .with_method("GetMouseButtonDown", mouse)
        .with_method("GetMouseButtonUp", mouse)
        .with_method("GetTouch", any)
        .with_method("ResetInputAxes", any)
        .with_ignored_methods(&[
            "GetAccelerationEvent",
            "GetJoystickNames",
            "IsJoystickPreconfigured",
            "GetPenEvent",
            "GetLastPenContactEvent",
            "ResetPenEvents",
            "ClearLastPenContactEvent",
        ])
        .with_supported_properties(&[
            "mousePosition",
            "mouseScrollDelta",
            "anyKey",
            "anyKeyDown",
            "inputString",
            "touchCount",
            "touches",
            "multiTouchEnabled",
            "simulateMouseWithTouches",
        ])
        .with_ignored_properties(&[
            "deviceOrientation",
            "acceleration",
            "accelerationEventCount",
            "accelerationEvents",
            "gyro",
            "compass",
            "location",
            "compensateSensors",
            "imeCompositionMode",
            "imeIsSelected",
            "compositionString",
            "compositionCursorPos",
            "backButtonLeavesApp",
            "touchSupported",
            "touchPressureSupported",
            "stylusTouchSupported",
            "mousePresent",
            "isGyroAvailable",
            "penEventCount",
            "eatKeyPressOnTextFieldFocus",
        ])
        .with_legacy_properties(&["ctrl"])
}

pub(super) fn screen() -> ApiKnowledgeBase {
    ApiKnowledgeBase::new(Surface::Screen, "ControlFreak2.CFScreen")
        .with_classes(&["UnityEngine.Screen", "Screen"])
        .without_methods()
        .with_supported_properties(&["lockCursor", "showCursor", "dpi"])
        .with_ignored_properties(&[
            "width",
            "height",
            "currentResolution",
            "resolutions",
            "fullScreen",
            "fullScreenMode",
            "sleepTimeout",
            "orientation",
            "autorotateToPortrait",
            "autorotateToPortraitUpsideDown",
            "autorotateToLandscapeLeft",
            "autorotateToLandscapeRight",
            "safeArea",
            "cutouts",
            "brightness",
            "mainWindowDisplayInfo",
            "mainWindowPosition",
        ])
}

pub(super) fn cursor() -> ApiKnowledgeBase {
    ApiKnowledgeBase::new(Surface::Cursor, "ControlFreak2.CFCursor")
        .with_classes(&["UnityEngine.Cursor", "Cursor"])
        .with_ignored_methods(&["SetCursor"])
        .with_supported_properties(&["lockState", "visible"])
}

pub(super) fn touch() -> TypeKnowledgeBase {
    TypeKnowledgeBase {
        surface: Surface::Touch,
        namespaces: vec!["UnityEngine".into()],
        type_name: "Touch".into(),
        converted_type: "ControlFreak2.InputRig.Touch".into(),
    }
}
