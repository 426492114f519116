// Copyright (c) 2026 The cliq Authors.
//
// SPDX-License-Identifier: Apache-2.0
//

/// An example showing positional arguments, including a trailing
/// variadic one.
///
/// Try:
///
/// Keyword arguments go first: once the trailing variadic positional
/// starts collecting, a keyword token ends the collection instead of
/// being dispatched.
///
/// ```bash
/// $ cargo run --example file-copy -- a.txt b.txt
/// $ cargo run --example file-copy -- --archive -v a.txt b.txt c.txt d.txt
/// ```
use cliq::{Arity, Opt, Parser, Result, Settings};

fn main() -> Result<()> {
    let mut parser = Parser::with_settings(
        Settings::new()
            .usage("file-copy [OPTIONS] SRC DEST [EXTRA..]")
            .desc("Copies SRC to DEST, pretending very hard.")
            .version("0.1.0"),
    );

    parser.handle("src", Opt::value().help("file to copy from"))?;
    parser.handle("dest", Opt::value().help("file to copy to"))?;
    parser.handle(
        "extra",
        Opt::values(Arity::ZeroOrMore).help("extra files to tag along"),
    )?;

    parser.handle(
        ("-v", "--verbose"),
        Opt::count().help("increase chatter (repeatable)"),
    )?;
    parser.handle(
        "--archive",
        Opt::constant("archive").dest("mode").help("use archive mode"),
    )?;

    let args = parser.parse()?;

    println!("INFO: src     = {:?}", args.string("src"));
    println!("INFO: dest    = {:?}", args.string("dest"));
    println!("INFO: extra   = {:?}", args.list("extra"));
    println!("INFO: verbose = {}", args.count("verbose"));
    println!("INFO: mode    = {:?}", args.get("mode"));

    Ok(())
}
