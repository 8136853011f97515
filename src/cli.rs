// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

use crate::selection::{MonthSelection, YEAR_WINDOW};

fn json_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .conflicts_with("jsonl")
            .help("Print pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print JSON Lines"),
    )
}

fn kind_arg() -> Arg {
    Arg::new("kind")
        .long("kind")
        .value_parser(["income", "expense"])
}

pub fn build_cli() -> Command {
    // same window the selector lists under `months`
    let current = MonthSelection::current().year as i64;
    let years = (current - YEAR_WINDOW as i64)..=(current + YEAR_WINDOW as i64);
    Command::new("kasbook")
        .version(clap::crate_version!())
        .about("Monthly income/expense reports for a small shop ledger")
        .arg(
            Arg::new("data")
                .long("data")
                .global(true)
                .help("CSV file with id,date,description,kind,amount,category"),
        )
        .subcommand(json_args(
            Command::new("report")
                .about("Monthly summary and transactions")
                .arg(
                    Arg::new("year")
                        .long("year")
                        .value_parser(value_parser!(i32).range(years)),
                )
                .arg(
                    Arg::new("month")
                        .long("month")
                        .help("1-12")
                        .value_parser(value_parser!(u32).range(1..=12)),
                ),
        ))
        .subcommand(
            Command::new("tx")
                .about("Ledger transactions")
                .subcommand(json_args(
                    Command::new("list")
                        .arg(Arg::new("month").long("month").help("YYYY-MM"))
                        .arg(kind_arg())
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        ),
                ))
                .subcommand(
                    Command::new("new")
                        .about("Validate and acknowledge a new transaction")
                        .arg(Arg::new("date").long("date").help("YYYY-MM-DD"))
                        .arg(kind_arg())
                        .arg(Arg::new("description").long("description"))
                        .arg(
                            Arg::new("amount")
                                .long("amount")
                                .allow_negative_numbers(true)
                                .value_parser(value_parser!(i64)),
                        )
                        .arg(Arg::new("category").long("category"))
                        .arg(
                            Arg::new("account")
                                .long("account")
                                .default_value(crate::validation::DEFAULT_ACCOUNT),
                        ),
                )
                .subcommand(
                    Command::new("export")
                        .arg(
                            Arg::new("format")
                                .long("format")
                                .required(true)
                                .value_parser(["csv", "json"]),
                        )
                        .arg(Arg::new("out").long("out").required(true)),
                ),
        )
        .subcommand(
            Command::new("category")
                .about("Categories offered per kind")
                .subcommand(Command::new("list").arg(kind_arg())),
        )
        .subcommand(Command::new("months").about("Month and year choices"))
        .subcommand(Command::new("doctor").about("Check loaded records for data issues"))
}
