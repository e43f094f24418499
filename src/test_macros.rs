//! Test generators for command parsing and result rendering.
//!
//! Command test modules declare their cases in one line each; the macros
//! expand them into `#[rstest]` functions. Callers bring `Args`, `Parser`
//! and `rstest` into scope.

/// Parse `conn_guard <args>` and check fields of the parsed command, or check
/// that the arguments are rejected.
///
/// ```ignore
/// cli_test!(test_defaults: ["probe"] => Probe { depth: 2 });
/// cli_test!(test_depth_zero_rejected: ["probe", "--depth", "0"] => rejected);
/// ```
#[macro_export]
macro_rules! cli_test {
    ($name:ident: [$($arg:literal),+] => rejected) => {
        #[rstest]
        fn $name() {
            let parsed = Args::try_parse_from(["conn_guard", $($arg),+]);
            assert!(parsed.is_err(), "arguments should be rejected: {:?}", [$($arg),+]);
        }
    };
    ($name:ident: [$($arg:literal),+] => $variant:ident { $($field:ident: $expected:expr),+ $(,)? }) => {
        #[rstest]
        fn $name() {
            let args = Args::try_parse_from(["conn_guard", $($arg),+])
                .unwrap_or_else(|e| panic!("arguments should parse: {}", e));
            let $crate::commands::Command::$variant(cmd) = args.command else {
                panic!(concat!("parsed into a command other than ", stringify!($variant)));
            };
            $(
                assert_eq!(cmd.$field, $expected, concat!("field `", stringify!($field), "`"));
            )+
        }
    };
}

/// Render a fixture in one output format and check the result.
///
/// ```ignore
/// output_test!(table test_to_table_empty(empty_result: ProbeResult) == EMPTY_TABLE);
/// output_test!(json test_format_json(single_result: ProbeResult) { "depth" => 1 });
/// output_test!(toon test_format_toon(single_result: ProbeResult) contains ["depth: 1"]);
/// ```
#[macro_export]
macro_rules! output_test {
    (table $name:ident($fixture:ident: $ty:ty) == $expected:expr) => {
        #[rstest]
        fn $name($fixture: $ty) {
            use $crate::output::Outputable;
            assert_eq!($fixture.to_table(), $expected);
        }
    };
    (json $name:ident($fixture:ident: $ty:ty) { $($key:literal => $expected:expr),+ $(,)? }) => {
        #[rstest]
        fn $name($fixture: $ty) {
            use $crate::output::{OutputFormat, Outputable};
            let rendered = $fixture.format(OutputFormat::Json);
            let value: serde_json::Value =
                serde_json::from_str(&rendered).expect("rendered JSON should parse");
            $(
                assert_eq!(value[$key], $expected, concat!("JSON key `", $key, "`"));
            )+
        }
    };
    (toon $name:ident($fixture:ident: $ty:ty) contains [$($needle:literal),+ $(,)?]) => {
        #[rstest]
        fn $name($fixture: $ty) {
            use $crate::output::{OutputFormat, Outputable};
            let rendered = $fixture.format(OutputFormat::Toon);
            $(
                assert!(rendered.contains($needle), "toon output lacks {:?}:\n{}", $needle, rendered);
            )+
        }
    };
}
