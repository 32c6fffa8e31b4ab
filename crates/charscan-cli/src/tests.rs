use std::{ffi::OsString, fs, path::PathBuf};

use charscan::{Charset, ScanOptions, TruncationPolicy, UnmappedLeadPolicy};
use rstest::rstest;

use super::*;

fn args(list: &[&str]) -> Vec<OsString> {
    list.iter().map(OsString::from).collect()
}

fn scan(list: &[&str], default_charset: Option<&str>) -> Config {
    match Config::from_args(args(list), default_charset) {
        Ok(Command::Scan(config)) => config,
        other => panic!("expected a scan command, got {other:?}"),
    }
}

fn output(config: &Config) -> String {
    let mut out = Vec::new();
    run(config, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn defaults_to_utf8_with_default_policies() {
    let config = scan(&["file.txt"], None);
    assert_eq!(
        config,
        Config {
            charset: Charset::Utf8,
            options: ScanOptions::default(),
            escaped: false,
            literal: false,
            inputs: args(&["file.txt"]),
        }
    );
}

#[rstest]
#[case::flag(&["--charset", "sjis", "x"], None)]
#[case::equals(&["--charset=Shift_JIS", "x"], None)]
#[case::env(&["x"], Some("cp932"))]
#[case::flag_overrides_env(&["--charset", "shift-jis", "x"], Some("big5"))]
fn charset_comes_from_flag_or_env(#[case] list: &[&str], #[case] env: Option<&str>) {
    assert_eq!(scan(list, env).charset, Charset::ShiftJis);
}

#[test]
fn policy_flags_set_options() {
    let config = scan(&["--truncate", "--strict-lead", "--escaped", "--literal", "x"], None);
    assert_eq!(config.options.truncation, TruncationPolicy::Truncate);
    assert_eq!(config.options.unmapped_lead, UnmappedLeadPolicy::Error);
    assert!(config.escaped);
    assert!(config.literal);
}

#[test]
fn double_dash_ends_options() {
    let config = scan(&["--literal", "--", "--truncate", "-"], None);
    assert_eq!(config.inputs, args(&["--truncate", "-"]));
    assert_eq!(config.options.truncation, TruncationPolicy::Error);
}

#[rstest]
#[case::no_inputs(&[])]
#[case::unknown_flag(&["--bogus", "x"])]
#[case::missing_label(&["x", "--charset"])]
fn usage_errors(#[case] list: &[&str]) {
    assert!(matches!(
        Config::from_args(args(list), None),
        Err(CliError::Usage(_))
    ));
}

#[test]
fn unknown_charset_is_reported() {
    let err = Config::from_args(args(&["--charset", "ebcdic", "x"]), None).unwrap_err();
    assert!(matches!(err, CliError::Charset(_)));
    assert_eq!(err.to_string(), "unknown charset `ebcdic`");
}

#[test]
fn help_flag_skips_input_checks() {
    assert_eq!(
        Config::from_args(args(&["-h"]), None).unwrap(),
        Command::Help
    );
    assert_eq!(
        Config::from_args(args(&["x", "--help"]), None).unwrap(),
        Command::Help
    );
}

#[test]
fn literal_inputs_print_like_the_diagnostic_format() {
    let config = scan(&["--literal", "--charset", "ascii", "foo"], None);
    insta::assert_snapshot!(output(&config), @r"
    char length: 1
    char: <102>
    char length: 1
    char: <111>
    char length: 1
    char: <111>
    ----------------------------
    ");
}

#[test]
fn multiple_inputs_get_headers() {
    let config = scan(&["--literal", "a", "é"], None);
    insta::assert_snapshot!(output(&config), @r"
    ==> a <==
    char length: 1
    char: <97>
    ----------------------------
    ==> é <==
    char length: 2
    char: <195,169>
    ----------------------------
    ");
}

#[test]
fn files_are_read_as_raw_bytes() {
    let path: PathBuf = std::env::temp_dir().join(format!("charscan-cli-{}.txt", std::process::id()));
    fs::write(&path, b"\x82\xa0\x82").unwrap();
    let config = scan(&["--charset", "sjis", "--truncate", path.to_str().unwrap()], None);
    let out = output(&config);
    fs::remove_file(&path).unwrap();
    insta::assert_snapshot!(out, @r"
    char length: 2
    char: <130,160>
    char length: 1
    char: <130>
    ----------------------------
    ");
}

#[test]
fn missing_file_is_a_read_error() {
    let config = scan(&["/nonexistent/charscan/input"], None);
    let err = run(&config, &mut Vec::new()).unwrap_err();
    assert!(matches!(err, CliError::Read { .. }));
    assert!(err.to_string().starts_with("cannot read `/nonexistent/charscan/input`"));
}

#[test]
fn escaped_mode_reports_errors_inline() {
    let config = scan(
        &["--literal", "--escaped", "--charset", "ascii", "--strict-lead", "a\u{e9}b"],
        None,
    );
    insta::assert_snapshot!(output(&config), @r#"
    char length: 1
    char: "a"
    error: invalid lead unit 0xc3 at 1
    error: invalid lead unit 0xa9 at 2
    char length: 1
    char: "b"
    ----------------------------
    "#);
}

#[test]
fn escaped_mode_reports_truncated_tail() {
    let config = Config {
        charset: Charset::ShiftJis,
        options: ScanOptions::default(),
        escaped: true,
        literal: true,
        inputs: Vec::new(),
    };
    insta::assert_snapshot!(render(&config, b"a\x82").unwrap(), @r#"
    char length: 1
    char: "a"
    error: truncated sequence at 1: lead unit declares 2 units, 1 available
    ----------------------------
    "#);
}

#[cfg(unix)]
mod raw_os_args {
    use std::os::unix::ffi::OsStringExt;

    use super::*;

    #[test]
    fn literal_input_need_not_be_utf8() {
        let list = vec![
            OsString::from("--literal"),
            OsString::from("--charset"),
            OsString::from("sjis"),
            OsString::from_vec(b"a\x82\xa0".to_vec()),
        ];
        let Ok(Command::Scan(config)) = Config::from_args(list, None) else {
            panic!("expected a scan command");
        };
        insta::assert_snapshot!(output(&config), @r"
        char length: 1
        char: <97>
        char length: 2
        char: <130,160>
        ----------------------------
        ");
    }

    #[test]
    fn file_names_need_not_be_utf8() {
        let mut name = b"charscan-cli-\x82\xa0-".to_vec();
        name.extend_from_slice(std::process::id().to_string().as_bytes());
        let path = std::env::temp_dir().join(OsString::from_vec(name));
        fs::write(&path, b"\x82\xa0").unwrap();

        let list = vec![OsString::from("--charset=sjis"), path.clone().into_os_string()];
        let Ok(Command::Scan(config)) = Config::from_args(list, None) else {
            panic!("expected a scan command");
        };
        let out = output(&config);
        fs::remove_file(&path).unwrap();
        insta::assert_snapshot!(out, @r"
        char length: 2
        char: <130,160>
        ----------------------------
        ");
    }

    #[test]
    fn non_utf8_charset_label_is_a_usage_error() {
        let list = vec![
            OsString::from("--charset"),
            OsString::from_vec(b"sj\xffis".to_vec()),
            OsString::from("x"),
        ];
        assert!(matches!(
            Config::from_args(list, None),
            Err(CliError::Usage(_))
        ));
    }

    #[test]
    fn non_utf8_dash_argument_is_an_unknown_option() {
        let list = vec![OsString::from_vec(b"-\xff".to_vec())];
        assert!(matches!(
            Config::from_args(list, None),
            Err(CliError::Usage(_))
        ));
    }
}
