//! Typed access against the types fixture

use crate::fixture;
use inifile::{ConversionError, IniConfig, IniError, IniOptions};

fn types_config() -> IniConfig {
    IniConfig::from_path(fixture("types.ini")).expect("Failed to load types.ini")
}

fn expect_bool(config: &IniConfig, section: &str, property: &str, expected: bool) {
    match config.get_bool(section, property) {
        Ok(value) => assert_eq!(value, expected, "[{}].{}", section, property),
        Err(e) => panic!("Unexpected error for [{}].{}: {}", section, property, e),
    }
}

#[test]
fn test_section_view() {
    let config = types_config();

    let section = config.section("uint").unwrap();
    assert_eq!(section.get("positive").unwrap(), "4");
    assert_eq!(section.get_u64("positive").unwrap(), 4);

    assert!(config.section("xxx").is_err());
}

#[test]
fn test_float_handling() {
    let config = types_config();

    assert_eq!(config.get_f64("float", "positive").unwrap(), 4.0);
    assert_eq!(config.get_f64("float", "negative").unwrap(), -2.3333);
    assert!(config.get_f64("float", "string").is_err());
}

#[test]
fn test_uint_handling() {
    let config = types_config();

    assert_eq!(config.get_u64("uint", "positive").unwrap(), 4);
    assert!(config.get_u64("uint", "negative").is_err());
    assert!(config.get_u64("uint", "float").is_err());
    assert!(config.get_u64("uint", "string").is_err());
}

#[test]
fn test_int_handling() {
    let config = types_config();

    assert_eq!(config.get_i64("int", "positive").unwrap(), 4);
    assert_eq!(config.get_i64("int", "negative").unwrap(), -1);
    assert!(config.get_i64("int", "float").is_err());
    assert!(config.get_i64("int", "string").is_err());
}

#[test]
fn test_conversion_error_details() {
    let config = types_config();

    match config.get_u64("uint", "negative") {
        Err(IniError::Conversion(ConversionError::Number {
            section,
            property,
            value,
            target,
        })) => {
            assert_eq!(section, "uint");
            assert_eq!(property, "negative");
            assert_eq!(value, "-1");
            assert_eq!(target, "a uint64");
        }
        other => panic!("Expected a conversion error, got {:?}", other),
    }
}

#[test]
fn test_boolean_handling() {
    let config = types_config();

    expect_bool(&config, "Boolean", "value1", true);
    expect_bool(&config, "Boolean", "value2", true);
    expect_bool(&config, "Boolean", "value3", true);
    expect_bool(&config, "Boolean", "value4", false);
    expect_bool(&config, "Boolean", "value5", false);
    expect_bool(&config, "Boolean", "value6", false);
    expect_bool(&config, "Boolean", "value7", false);

    let strict = IniOptions {
        use_go_bool_rules: false,
        strict_bool_true: "True".to_string(),
        strict_bool_false: "False".to_string(),
        ..IniOptions::default()
    };
    let config = IniConfig::from_path_with_options(fixture("types.ini"), strict.clone()).unwrap();

    expect_bool(&config, "Boolean", "value1", true);
    expect_bool(&config, "Boolean", "value4", false);
    assert!(config.get_bool("Boolean", "value2").is_err());
    assert!(config.get_bool("Boolean", "value3").is_err());
    assert!(config.get_bool("Boolean", "value7").is_err());

    let case_insensitive = IniOptions {
        strict_bool_case_sensitive: false,
        ..strict
    };
    let config =
        IniConfig::from_path_with_options(fixture("types.ini"), case_insensitive).unwrap();

    expect_bool(&config, "Boolean", "value1", true);
    expect_bool(&config, "Boolean", "value3", true);
    expect_bool(&config, "Boolean", "value4", false);
    expect_bool(&config, "Boolean", "value7", false);
    assert!(config.get_bool("Boolean", "value2").is_err());
    assert!(config.get_bool("Boolean", "value5").is_err());
    assert!(config.get_bool("Boolean", "value6").is_err());
}

#[test]
fn test_or_zero_on_missing_and_invalid() {
    let config = types_config();

    assert_eq!(config.get_or_zero("nope", "nope"), "");
    assert_eq!(config.get_f64_or_zero("float", "string"), 0.0);
    assert_eq!(config.get_i64_or_zero("int", "float"), 0);
    assert_eq!(config.get_u64_or_zero("uint", "negative"), 0);
    assert!(!config.get_bool_or_zero("float", "string"));
    assert_eq!(config.get_i64_or_zero("int", "negative"), -1);
}

#[test]
fn test_add_after_parse() {
    let mut config = types_config();

    config.add("uint", "negative", "7");
    assert_eq!(config.get_u64("uint", "negative").unwrap(), 7);

    config.add("runtime", "threads", "8");
    assert!(config.section_exists("runtime"));
    assert_eq!(config.section("runtime").unwrap().get_u64("threads").unwrap(), 8);

    let mut section = config.section_mut("runtime").unwrap();
    section.add("enabled", "t");
    assert!(config.get_bool("runtime", "enabled").unwrap());
}
