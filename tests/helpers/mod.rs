pub mod mock_sns;

use sns_notify::cli::Cli;

pub const TEST_TOPIC_ARN: &str = "arn:aws:sns:us-east-1:123456789012:test";

/// Parses a command line the way the binary would, prefixing the program name.
pub fn parse_cli(args: &[&str]) -> Cli {
    use clap::Parser;
    Cli::try_parse_from(std::iter::once("sns-notify").chain(args.iter().copied()))
        .expect("test arguments should parse")
}
