// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Proteus CLI entrypoint.
//!
//! Runs the interactive diagram viewer on a map file, or on the built-in demo
//! map when no file is given.

use std::error::Error;
use std::path::Path;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [<map.json>] [--narrow]\n  {program} [--map <map.json>] [--narrow]\n  {program} --demo [--narrow]\n\nIf map.json/--map is omitted, the built-in demo map is used.\n--demo explicitly selects the demo map and cannot be combined with a map file.\n--narrow forces the stacked layout with a bottom-sheet drawer."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    demo: bool,
    narrow: bool,
    map_path: Option<String>,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--demo" => {
                if options.demo {
                    return Err(());
                }
                options.demo = true;
            }
            "--narrow" => {
                if options.narrow {
                    return Err(());
                }
                options.narrow = true;
            }
            "--map" => {
                if options.map_path.is_some() {
                    return Err(());
                }
                let path = args.next().ok_or(())?;
                options.map_path = Some(path);
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.map_path.is_some() {
                    return Err(());
                }
                options.map_path = Some(arg);
            }
        }
    }

    if options.demo && options.map_path.is_some() {
        return Err(());
    }

    Ok(options)
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "proteus".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        let graph = match &options.map_path {
            Some(path) => proteus::store::load_map(Path::new(path))?,
            None => proteus::tui::demo_map()?,
        };

        proteus::tui::run_with_map(graph, options.narrow)
    })();

    if let Err(err) = result {
        eprintln!("proteus: {err}");
        std::process::exit(1);
    }
}
