use crate::agent::tests::test_helpers::{
    ANDROID_UA, DESKTOP_UA, GARBAGE_UA, GOOGLEBOT_UA, IOS6_UA, IPAD_UA, IPHONE_UA, WECHAT_UA,
    classifier,
};
use crate::agent::{BrowserType, ClassificationResult, DeviceType, Flag, OsType, UserAgentClassifier};
use crate::conf::AgentkitConfig;
use crate::conf::types::ClassifierConfig;
use pretty_assertions::assert_eq;

#[test]
fn iphone_is_mobile_iphone_on_ios() {
    // Arrange
    let c = classifier();

    // Act / Assert
    assert_eq!(c.browser_type(IPHONE_UA), BrowserType::IPhone);
    assert_eq!(c.device_type(IPHONE_UA), DeviceType::Mobile);
    assert_eq!(c.os_type(IPHONE_UA), OsType::Ios);
    assert!(c.is_mobile(IPHONE_UA));
}

#[test]
fn modern_iphone_is_retina() {
    let c = classifier();

    assert_eq!(c.is_legacy_os(IPHONE_UA), Flag::No);
    assert_eq!(c.is_retina(IPHONE_UA), Flag::Yes);
}

#[test]
fn ipad_is_ipad() {
    let c = classifier();

    assert_eq!(c.browser_type(IPAD_UA), BrowserType::IPad);
    assert_eq!(c.os_type(IPAD_UA), OsType::Ios);
    assert_eq!(c.device_type(IPAD_UA), DeviceType::Mobile);
}

#[test]
fn android_is_android_and_never_retina() {
    let c = classifier();

    assert_eq!(c.browser_type(ANDROID_UA), BrowserType::Android);
    assert_eq!(c.os_type(ANDROID_UA), OsType::Android);
    assert_eq!(c.device_type(ANDROID_UA), DeviceType::Mobile);
    assert_eq!(c.is_retina(ANDROID_UA), Flag::No);
    assert_eq!(c.is_legacy_os(ANDROID_UA), Flag::No);
}

#[test]
fn desktop_is_desktop_with_unknown_handset() {
    let c = classifier();

    assert_eq!(c.device_type(DESKTOP_UA), DeviceType::Desktop);
    assert_eq!(c.browser_type(DESKTOP_UA), BrowserType::Unknown);
    assert_eq!(c.os_type(DESKTOP_UA), OsType::Unknown);
    assert!(!c.is_mobile(DESKTOP_UA));
}

#[test]
fn unmatched_agent_is_unknown_everywhere() {
    // Arrange
    let c = classifier();

    // Act
    let result = c.classify(GARBAGE_UA);

    // Assert
    assert_eq!(result, ClassificationResult::unknown());
    assert!(!c.is_mobile(GARBAGE_UA));
    assert_eq!(c.is_opened_in_app(GARBAGE_UA, "MicroMessenger"), Flag::No);
}

#[test]
fn retina_implies_ios_and_not_legacy() {
    let c = classifier();

    for ua in [IPHONE_UA, IPAD_UA, ANDROID_UA, DESKTOP_UA, WECHAT_UA, GARBAGE_UA] {
        let result = c.classify(ua);
        let expected = result.os_type == OsType::Ios && result.is_legacy_os == Flag::No;
        assert_eq!(result.is_retina.is_yes(), expected, "agent: {ua}");
    }
}

#[test]
fn classify_agrees_with_single_lookups() {
    let c = classifier();

    for ua in [IPHONE_UA, IPAD_UA, ANDROID_UA, DESKTOP_UA, GARBAGE_UA] {
        let result = c.classify(ua);
        assert_eq!(result.device_type, c.device_type(ua), "agent: {ua}");
        assert_eq!(result.browser_type, c.browser_type(ua), "agent: {ua}");
        assert_eq!(result.os_type, c.os_type(ua), "agent: {ua}");
        assert_eq!(result.is_legacy_os, c.is_legacy_os(ua), "agent: {ua}");
        assert_eq!(result.is_retina, c.is_retina(ua), "agent: {ua}");
    }
}

#[test]
fn oversized_agent_is_not_parsed() {
    // Arrange
    let mut cfg = AgentkitConfig::default();
    cfg.user_agent.max_length = 16;
    let c = UserAgentClassifier::from_config(&cfg).unwrap();

    // Act
    let result = c.classify(IPHONE_UA);

    // Assert
    assert_eq!(result, ClassificationResult::unknown());
    assert_eq!(c.is_opened_in_app(WECHAT_UA, "MicroMessenger"), Flag::No);
}

#[test]
fn in_app_detects_signature() {
    let c = classifier();

    assert_eq!(c.is_opened_in_app(WECHAT_UA, "MicroMessenger"), Flag::Yes);
    assert_eq!(c.is_opened_in_app(IPHONE_UA, "MicroMessenger"), Flag::No);
    assert_eq!(c.is_opened_in_app(WECHAT_UA, ""), Flag::No);
}

//-----------------------------------------------------------------------------
// App installed
//-----------------------------------------------------------------------------
#[test]
fn app_installed_only_when_param_is_one() {
    let c = classifier();

    assert_eq!(c.is_app_installed(Some("isappinstalled=1")), Flag::Yes);
    assert_eq!(c.is_app_installed(Some("from=groupmessage&isappinstalled=1")), Flag::Yes);
    assert_eq!(c.is_app_installed(Some("isappinstalled=0")), Flag::No);
    assert_eq!(c.is_app_installed(Some("isappinstalled=")), Flag::No);
    assert_eq!(c.is_app_installed(Some("isappinstalled=yes")), Flag::No);
    assert_eq!(c.is_app_installed(Some("other=1")), Flag::No);
    assert_eq!(c.is_app_installed(None), Flag::No);
}

#[test]
fn app_installed_param_name_is_configurable() {
    // Arrange
    let c = classifier().with_settings(ClassifierConfig {
        app_installed_param: "installed".to_string(),
        ..ClassifierConfig::default()
    });

    // Act / Assert
    assert_eq!(c.is_app_installed(Some("installed=1")), Flag::Yes);
    assert_eq!(c.is_app_installed(Some("isappinstalled=1")), Flag::No);
}

//-----------------------------------------------------------------------------
// Real agents through the engine
//-----------------------------------------------------------------------------
#[test]
fn ios_six_iphone_is_legacy_and_not_retina() {
    // Arrange
    let c = classifier();

    // Act
    let result = c.classify(IOS6_UA);

    // Assert
    assert_eq!(c.inspect(IOS6_UA).os_major(), Some(6));
    assert_eq!(result.browser_type, BrowserType::IPhone);
    assert_eq!(result.os_type, OsType::Ios);
    assert_eq!(result.is_legacy_os, Flag::Yes);
    assert_eq!(result.is_retina, Flag::No);
    assert_eq!(c.is_legacy_os(IOS6_UA), Flag::Yes);
    assert_eq!(c.is_retina(IOS6_UA), Flag::No);
}

#[test]
fn crawler_is_recognized_non_mobile() {
    // Arrange
    let c = classifier();

    // Act
    let info = c.inspect(GOOGLEBOT_UA);

    // Assert
    assert!(info.is_bot);
    assert_eq!(c.device_type(GOOGLEBOT_UA), DeviceType::Desktop);
    assert_eq!(c.browser_type(GOOGLEBOT_UA), BrowserType::Unknown);
}
