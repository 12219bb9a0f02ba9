// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! `hookseal`: sign and verify webhook payloads from the command line.
//!
//! Exit status is 0 for success (or a valid signature), 1 for a signature
//! that does not verify, and 2 for any hard error such as unreadable input or
//! a malformed key.

mod commands;
mod logging;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::error;

use crate::commands::{InspectArgs, SignArgs, VerifyArgs};
use crate::logging::{init_tracing, LogFormat};

#[derive(Parser, Debug)]
#[command(name = "hookseal", version, about, long_about = None)]
struct Cli {
	/// Log level for hookseal crates
	#[arg(long, global = true, default_value = "warn")]
	log_level: String,

	/// Log output format
	#[arg(long, global = true, value_enum, default_value_t = LogFormat::Compact)]
	log_format: LogFormat,

	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Sign a payload and print the signature
	Sign(SignArgs),
	/// Verify a payload against a signature
	Verify(VerifyArgs),
	/// Show which scheme a key selects
	Inspect(InspectArgs),
}

fn run(command: Command) -> anyhow::Result<ExitCode> {
	match command {
		Command::Sign(args) => {
			println!("{}", commands::sign(args)?);
			Ok(ExitCode::SUCCESS)
		}
		Command::Verify(args) => {
			if commands::verify(args)? {
				println!("valid");
				Ok(ExitCode::SUCCESS)
			} else {
				println!("invalid");
				Ok(ExitCode::from(1))
			}
		}
		Command::Inspect(args) => {
			println!("{}", commands::inspect(args)?);
			Ok(ExitCode::SUCCESS)
		}
	}
}

fn main() -> ExitCode {
	let cli = Cli::parse();
	init_tracing(&cli.log_level, cli.log_format);

	match run(cli.command) {
		Ok(code) => code,
		Err(e) => {
			error!(error = %e, "command failed");
			eprintln!("error: {e:#}");
			ExitCode::from(2)
		}
	}
}
