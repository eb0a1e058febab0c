// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

fn json_flag() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print JSON instead of a table")
}

pub fn build_cli() -> Command {
    Command::new("yuanbook")
        .about("Personal income/expense tracker with AI-assisted entry")
        .version(clap::crate_version!())
        .subcommand(Command::new("init").about("Create the data store and show where it lives"))
        .subcommand(
            Command::new("add")
                .about("Record one transaction manually")
                .arg(Arg::new("amount").long("amount").required(true))
                .arg(
                    Arg::new("category")
                        .long("category")
                        .default_value("food")
                        .help("Category id (see `category list`)"),
                )
                .arg(
                    Arg::new("type")
                        .long("type")
                        .help("expense|income; defaults to the category's type"),
                )
                .arg(Arg::new("note").long("note"))
                .arg(Arg::new("date").long("date").help("YYYY-MM-DD, defaults to now")),
        )
        .subcommand(
            Command::new("ai")
                .about("Extract transactions from text, a receipt photo and/or a voice memo")
                .arg(Arg::new("text").long("text").short('t'))
                .arg(
                    Arg::new("image")
                        .long("image")
                        .short('i')
                        .help("Receipt photo (jpg, png, webp, gif, heic)"),
                )
                .arg(
                    Arg::new("audio")
                        .long("audio")
                        .short('a')
                        .help("Recorded voice memo"),
                ),
        )
        .subcommand(
            Command::new("tx")
                .about("Transaction history")
                .subcommand(
                    Command::new("list")
                        .arg(
                            Arg::new("search")
                                .long("search")
                                .short('s')
                                .help("Match note or category name"),
                        )
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        )
                        .arg(json_flag()),
                )
                .subcommand(
                    Command::new("rm")
                        .about("Delete a transaction by id")
                        .arg(Arg::new("id").required(true)),
                ),
        )
        .subcommand(
            Command::new("category")
                .about("Category registry")
                .subcommand(Command::new("list").arg(json_flag())),
        )
        .subcommand(
            Command::new("budget")
                .about("Monthly total budget")
                .subcommand(Command::new("list").arg(json_flag()))
                .subcommand(
                    Command::new("set")
                        .about("Set the monthly total budget")
                        .arg(Arg::new("amount").required(true)),
                )
                .subcommand(
                    Command::new("status")
                        .about("Spending this month against the total budget")
                        .arg(json_flag()),
                ),
        )
        .subcommand(
            Command::new("report")
                .about("Summaries and statistics")
                .subcommand(Command::new("dashboard").arg(json_flag()))
                .subcommand(Command::new("by-category").arg(json_flag()))
                .subcommand(
                    Command::new("trend")
                        .arg(
                            Arg::new("days")
                                .long("days")
                                .default_value("7")
                                .value_parser(value_parser!(u32).range(1..=366))
                                .help("Days to show, 1-366"),
                        )
                        .arg(json_flag()),
                ),
        )
        .subcommand(
            Command::new("export").subcommand(
                Command::new("transactions")
                    .arg(
                        Arg::new("format")
                            .long("format")
                            .default_value("csv")
                            .help("csv|json"),
                    )
                    .arg(Arg::new("out").long("out").required(true)),
            ),
        )
        .subcommand(Command::new("doctor").about("Report questionable records"))
}
