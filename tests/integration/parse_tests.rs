//! Parsing behaviour driven by the fixture files

use crate::fixture;
use inifile::{IniConfig, IniError, IniOptions, SyntaxError, GLOBAL_SECTION};
use std::fs::File;
use std::io::BufReader;

#[test]
fn test_entry_points_agree() {
    let path = fixture("simple.ini");

    let from_path = IniConfig::from_path(&path).expect("Failed to load simple.ini");
    let with_options = IniConfig::from_path_with_options(&path, IniOptions::default())
        .expect("Failed to load simple.ini with options");

    let file = File::open(&path).expect("Failed to open simple.ini");
    let from_reader = IniConfig::from_reader(BufReader::new(file)).expect("Failed to read simple.ini");

    let file = File::open(&path).expect("Failed to open simple.ini");
    let from_reader_with_options =
        IniConfig::from_reader_with_options(BufReader::new(file), IniOptions::default())
            .expect("Failed to read simple.ini with options");

    let text = std::fs::read_to_string(&path).unwrap();
    let from_str: IniConfig = text.parse().unwrap();

    for config in [
        &from_path,
        &with_options,
        &from_reader,
        &from_reader_with_options,
        &from_str,
    ] {
        assert!(config.section_exists("Section1"));
        assert_eq!(config.store(), from_path.store());
    }
}

#[test]
fn test_missing_file() {
    let result = IniConfig::from_path(fixture("does-not-exist.ini"));
    assert!(matches!(result, Err(IniError::Io(_))));
}

#[test]
fn test_simple_parse() {
    let config = IniConfig::from_path(fixture("simple.ini")).unwrap();

    assert!(config.section_exists("Section1"));
    assert!(!config.section_exists("Section2"));
    assert!(config.property_exists("Section1", "name1"));
    assert!(!config.property_exists("Section2", "name1"));
    assert_eq!(config.get("Section1", "name1").unwrap(), "value1");
    assert_eq!(config.get("Section1", "name2").unwrap(), "value2");
}

#[test]
fn test_alternate_comments() {
    let path = fixture("alternate-comments.ini");

    let err = IniConfig::from_path(&path).unwrap_err();
    assert!(matches!(
        err,
        IniError::Syntax(SyntaxError::UnparseableLine(1))
    ));

    let options = IniOptions {
        comment_start: "#".to_string(),
        ..IniOptions::default()
    };
    let config = IniConfig::from_path_with_options(&path, options).unwrap();
    assert_eq!(config.get("mysqld", "datadir").unwrap(), "/var/lib/mysql");
}

#[test]
fn test_blank_lines() {
    let options = IniOptions {
        tolerate_blank_lines: false,
        ..IniOptions::default()
    };

    let err = IniConfig::from_path_with_options(fixture("simple.ini"), options).unwrap_err();
    match err {
        IniError::Syntax(syntax) => {
            assert_eq!(syntax, SyntaxError::BlankLine(4));
            assert_eq!(syntax.line(), 4);
        }
        other => panic!("Expected a syntax error, got {:?}", other),
    }
}

#[test]
fn test_unparseable_lines() {
    let path = fixture("unparseable-lines.ini");

    let err = IniConfig::from_path(&path).unwrap_err();
    assert_eq!(err.to_string(), "Syntax error: Unparseable line at line 3");

    let options = IniOptions {
        ignore_unparseable: true,
        ..IniOptions::default()
    };
    let config = IniConfig::from_path_with_options(&path, options).unwrap();
    assert_eq!(config.get("section", "prop").unwrap(), "value");
    assert_eq!(config.get("section", "other").unwrap(), "value");
}

#[test]
fn test_global_properties() {
    let path = fixture("global-section.ini");

    let options = IniOptions {
        allow_global_section: false,
        ..IniOptions::default()
    };
    let err = IniConfig::from_path_with_options(&path, options).unwrap_err();
    assert!(matches!(
        err,
        IniError::Syntax(SyntaxError::GlobalProperty(1))
    ));

    let config = IniConfig::from_path(&path).unwrap();
    assert!(config.section_exists(GLOBAL_SECTION));
    assert!(config.property_exists(GLOBAL_SECTION, "globalProp"));
    assert_eq!(config.get(GLOBAL_SECTION, "globalProp").unwrap(), "A");
    assert!(!config.property_exists(GLOBAL_SECTION, "prop"));
    assert_eq!(config.get("section", "prop").unwrap(), "B");
}

#[test]
fn test_quoted_values() {
    let path = fixture("quoted-values.ini");

    let options = IniOptions {
        strip_enclosing_quotes: true,
        ..IniOptions::default()
    };
    let config = IniConfig::from_path_with_options(&path, options).unwrap();
    assert_eq!(config.get("section", "singleQuoted").unwrap(), "quoted");
    assert_eq!(config.get("section", "doubleQuoted").unwrap(), "quoted");
    assert_eq!(config.get("section", "mismatched").unwrap(), "'quoted\"");
    assert_eq!(config.get("section", "nested").unwrap(), "'quoted'");
    assert_eq!(config.get("section", "short").unwrap(), "\"");

    let config = IniConfig::from_path(&path).unwrap();
    assert_eq!(config.get("section", "doubleQuoted").unwrap(), "\"quoted\"");
    assert_eq!(config.get("section", "singleQuoted").unwrap(), "'quoted'");
}

#[test]
fn test_inline_and_escaped_comments() {
    let options = IniOptions {
        allow_inline_comments: true,
        comment_start: "#".to_string(),
        ..IniOptions::default()
    };
    let config =
        IniConfig::from_path_with_options(fixture("inline-comments.ini"), options).unwrap();

    assert!(config.section_exists("uris"));
    assert!(config.section_exists("#tags"));
    assert_eq!(
        config.get("uris", "profile").unwrap(),
        "http://example.com/profile#myprofile"
    );
    assert_eq!(config.get("#tags", "latest#tag").unwrap(), "#trending");
}

#[test]
fn test_inline_comments_disabled_by_default() {
    let options = IniOptions {
        comment_start: "#".to_string(),
        ..IniOptions::default()
    };
    let config =
        IniConfig::from_path_with_options(fixture("inline-comments.ini"), options).unwrap();

    assert!(config.section_exists("uris"));
    assert_eq!(
        config.get("uris", "profile").unwrap(),
        "http://example.com/profile\\#myprofile # profile page"
    );
    assert!(config.section_exists("\\#tags"));
    assert!(!config.section_exists("#tags"));
}

#[test]
fn test_unset_properties() {
    let path = fixture("unset.ini");

    let config = IniConfig::from_path(&path).unwrap();
    assert!(!config.property_exists("section", "unset"));
    assert!(config.property_exists("section", "set"));

    let options = IniOptions {
        discard_properties_with_no_value: false,
        ..IniOptions::default()
    };
    let config = IniConfig::from_path_with_options(&path, options).unwrap();
    assert!(config.property_exists("section", "unset"));
    assert_eq!(config.get("section", "unset").unwrap(), "");
    assert!(config.store().get("section", "unset").unwrap().is_set());
}

#[test]
fn test_whitespace_stripping() {
    let path = fixture("whitespace-aligned.ini");

    let config = IniConfig::from_path(&path).unwrap();
    assert_eq!(config.get("section", "propA").unwrap(), "Value1");
    assert_eq!(config.get("section", "propB").unwrap(), "Value2");

    let options = IniOptions {
        trim_properties: false,
        ..IniOptions::default()
    };
    let config = IniConfig::from_path_with_options(&path, options).unwrap();
    assert!(!config.property_exists("section", "propA"));
    assert_eq!(config.get("section", "propB   ").unwrap(), "   Value2");
    assert_eq!(config.get("section", "propC").unwrap(), "Value3");
}

#[test]
fn test_case_sensitivity() {
    let path = fixture("case-sensitivity.ini");

    let config = IniConfig::from_path(&path).unwrap();
    assert!(config.section_exists("ABC"));
    assert!(config.section_exists("aBc"));
    assert!(!config.section_exists("abc"));
    assert_eq!(config.get("ABC", "value1").unwrap(), "123");
    assert_eq!(config.get("aBc", "value1").unwrap(), "890");

    let options = IniOptions {
        case_sensitive: false,
        ..IniOptions::default()
    };
    let config = IniConfig::from_path_with_options(&path, options).unwrap();
    for name in ["ABC", "aBc", "abc"] {
        assert!(config.section_exists(name), "{}", name);
        assert_eq!(config.get(name, "VALUE1").unwrap(), "890");
    }
}

#[test]
fn test_colon_parse() {
    let path = fixture("colons.ini");

    let options = IniOptions {
        use_colon_assignment: true,
        ..IniOptions::default()
    };
    let config = IniConfig::from_path_with_options(&path, options).unwrap();
    assert_eq!(config.get("Section1", "name1").unwrap(), "value1");
    assert_eq!(config.get("Section1", "name2").unwrap(), "value2");
    assert_eq!(
        config.get("Section1", "url").unwrap(),
        "http://localhost:8080/path"
    );

    let err = IniConfig::from_path(&path).unwrap_err();
    assert!(matches!(
        err,
        IniError::Syntax(SyntaxError::UnparseableLine(2))
    ));

    let options = IniOptions {
        use_colon_assignment: true,
        ..IniOptions::default()
    };
    let err = IniConfig::parse_str_with_options("[s]\nname1=value1\n", options).unwrap_err();
    assert!(matches!(
        err,
        IniError::Syntax(SyntaxError::UnparseableLine(2))
    ));
}

#[test]
fn test_parse_is_idempotent() {
    for name in ["simple.ini", "types.ini", "global-section.ini", "case-sensitivity.ini"] {
        let first = IniConfig::from_path(fixture(name)).unwrap();
        let second = IniConfig::from_path(fixture(name)).unwrap();
        assert_eq!(first.store(), second.store(), "{}", name);
    }
}
