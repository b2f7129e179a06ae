use clap::Parser;

use crate::args::Cli;

#[test]
fn binary_file_is_required() {
    assert!(Cli::try_parse_from(["gobinsize"]).is_err());
}

#[test]
fn defaults_match_the_documented_flags() {
    let cli = Cli::try_parse_from(["gobinsize", "-f", "./app"]).expect("parse");
    assert_eq!(cli.binary_file, std::path::PathBuf::from("./app"));
    assert_eq!(cli.top_n, 100);
    assert_eq!(cli.grep, "");
    assert_eq!(cli.sort, "size");
    assert!(!cli.asc);
    assert_eq!(cli.max_width, None);
    assert_eq!(cli.timeout_secs, 60);
    assert!(!cli.verbose);
}

#[test]
fn long_flags_parse() {
    let cli = Cli::try_parse_from([
        "gobinsize",
        "--binary-file",
        "./app",
        "--top-n",
        "30",
        "--grep",
        "http",
        "--sort",
        "addr",
        "--asc",
        "--max-width",
        "80",
        "--timeout-secs",
        "5",
        "--verbose",
    ])
    .expect("parse");
    assert_eq!(cli.top_n, 30);
    assert_eq!(cli.grep, "http");
    assert_eq!(cli.sort, "addr");
    assert!(cli.asc);
    assert_eq!(cli.max_width, Some(80));
    assert_eq!(cli.timeout_secs, 5);
    assert!(cli.verbose);
}

#[test]
fn short_flags_parse() {
    let cli = Cli::try_parse_from([
        "gobinsize", "-f", "./app", "-n", "10", "-g", "grpc", "-s", "sym", "-a", "-w", "120", "-v",
    ])
    .expect("parse");
    assert_eq!(cli.top_n, 10);
    assert_eq!(cli.grep, "grpc");
    assert_eq!(cli.sort, "sym");
    assert!(cli.asc);
    assert_eq!(cli.max_width, Some(120));
    assert!(cli.verbose);
}
