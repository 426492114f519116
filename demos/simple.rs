// Copyright (c) 2026 The cliq Authors.
//
// SPDX-License-Identifier: Apache-2.0
//

/// A simple example showing flags, counted options and deferred values.
///
/// Try:
///
/// ```bash
/// $ cargo run --example simple -- --output=report.txt -vv --dry-run
/// $ cargo run --example simple -- --output report.txt
/// $ cargo run --example simple -- --help
/// ```
use cliq::{Opt, Parser, Result, Settings};

fn main() -> Result<()> {
    let mut parser = Parser::with_settings(
        Settings::new()
            .usage("simple [OPTIONS]")
            .desc("Demonstrates the common option shapes.")
            .version("0.1.0"),
    );

    parser.handle(
        ("-o", "--output"),
        Opt::value().help("write results to this file"),
    )?;
    parser.handle(
        ("-v", "--verbose"),
        Opt::count().help("increase verbosity (repeatable)"),
    )?;
    parser.handle("--dry-run", Opt::flag().help("do not write anything"))?;

    let args = parser.parse()?;

    println!("INFO: output  = {:?}", args.string("output"));
    println!("INFO: verbose = {}", args.count("verbose"));
    println!("INFO: dry-run = {}", args.flag("dry-run"));

    Ok(())
}
