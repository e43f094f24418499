//! CLI parsing tests for probe command.

#[cfg(test)]
mod tests {
    use crate::cli::Args;
    use clap::Parser;
    use rstest::rstest;

    crate::cli_test!(test_defaults: ["probe"] => Probe { depth: 2 });
    crate::cli_test!(test_with_depth: ["probe", "--depth", "5"] => Probe { depth: 5 });
    crate::cli_test!(test_with_short_depth: ["probe", "-d", "32"] => Probe { depth: 32 });
    crate::cli_test!(test_depth_zero_rejected: ["probe", "--depth", "0"] => rejected);
    crate::cli_test!(test_depth_too_large_rejected: ["probe", "--depth", "33"] => rejected);
}
