// Copyright (c) 2025 Nestegg Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print output as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print output as JSON lines"),
    )
}

pub fn build_cli() -> Command {
    Command::new("nestegg")
        .about("Local-first income/expense tracking, net-worth history, and projections")
        .subcommand(Command::new("init").about("Initialize the local database"))
        .subcommand(
            Command::new("tx")
                .about("Record and inspect income/expense transactions")
                .subcommand(
                    Command::new("add")
                        .about("Record a transaction (year/month default to the last-used period)")
                        .arg(
                            Arg::new("year")
                                .long("year")
                                .value_parser(value_parser!(i32)),
                        )
                        .arg(Arg::new("month").long("month").help("Month name, e.g. January"))
                        .arg(
                            Arg::new("kind")
                                .long("kind")
                                .required(true)
                                .help("income|expense"),
                        )
                        .arg(Arg::new("amount").long("amount").required(true)),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .about("Show aggregated periods (or raw records with --raw)")
                        .arg(
                            Arg::new("raw")
                                .long("raw")
                                .action(ArgAction::SetTrue)
                                .help("List individual transactions instead of periods"),
                        ),
                ))
                .subcommand(
                    Command::new("delete")
                        .about("Delete a single transaction by id")
                        .arg(Arg::new("id").long("id").required(true)),
                )
                .subcommand(
                    Command::new("delete-month")
                        .about("Delete every transaction in one (year, month) bucket")
                        .arg(
                            Arg::new("year")
                                .long("year")
                                .required(true)
                                .value_parser(value_parser!(i32)),
                        )
                        .arg(Arg::new("month").long("month").required(true)),
                )
                .subcommand(Command::new("clear").about("Delete all transactions")),
        )
        .subcommand(
            Command::new("balance")
                .about("Current balance snapshot")
                .subcommand(
                    Command::new("set")
                        .about("Overwrite the balance, stamped with the current period")
                        .arg(Arg::new("amount").long("amount").required(true)),
                )
                .subcommand(json_flags(Command::new("show").about("Show the stored balance"))),
        )
        .subcommand(json_flags(
            Command::new("dashboard")
                .about("Monthly averages, savings rate, and horizon projections")
                .arg(
                    Arg::new("roi")
                        .long("roi")
                        .default_value("10")
                        .help("Expected yearly return, percent"),
                )
                .arg(
                    Arg::new("yearly")
                        .long("yearly")
                        .action(ArgAction::SetTrue)
                        .help("Also print the 30-year year-by-year series"),
                ),
        ))
        .subcommand(
            Command::new("networth")
                .about("Net-worth entries (one per day, merged per category)")
                .subcommand(
                    Command::new("add")
                        .about("Save today's entry; merges into an existing same-day entry")
                        .arg(
                            Arg::new("assets")
                                .long("assets")
                                .help("Breakdown, e.g. 'Cash=5000,Stocks=1200,Other:Art=300'"),
                        )
                        .arg(Arg::new("liabilities").long("liabilities").help(
                            "Breakdown, e.g. 'Mortgages=200000,Other:Family loan=5000'",
                        ))
                        .arg(
                            Arg::new("total-assets")
                                .long("total-assets")
                                .help("Single 'Total' asset line instead of a breakdown"),
                        )
                        .arg(
                            Arg::new("total-liabilities")
                                .long("total-liabilities")
                                .help("Single 'Total' liability line instead of a breakdown"),
                        )
                        .arg(Arg::new("notes").long("notes")),
                )
                .subcommand(json_flags(
                    Command::new("list").about("List entries, most recent first"),
                ))
                .subcommand(
                    Command::new("delete")
                        .about("Delete an entry by id")
                        .arg(Arg::new("id").long("id").required(true)),
                ),
        )
        .subcommand(
            Command::new("plan")
                .about("Planning budget: needs/wants recurring and one-time costs")
                .subcommand(
                    Command::new("add")
                        .arg(Arg::new("group").long("group").required(true).help("needs|wants"))
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(
                            Arg::new("frequency")
                                .long("frequency")
                                .help("monthly|quarterly|yearly; omit for a one-time cost"),
                        ),
                )
                .subcommand(
                    Command::new("edit")
                        .arg(Arg::new("group").long("group").required(true))
                        .arg(Arg::new("id").long("id").required(true))
                        .arg(Arg::new("name").long("name"))
                        .arg(Arg::new("amount").long("amount"))
                        .arg(Arg::new("frequency").long("frequency")),
                )
                .subcommand(
                    Command::new("remove")
                        .arg(Arg::new("group").long("group").required(true))
                        .arg(Arg::new("id").long("id").required(true)),
                )
                .subcommand(json_flags(
                    Command::new("show").about("Items and monthly-equivalent totals per group"),
                )),
        )
        .subcommand(
            Command::new("tools")
                .about("Stand-alone calculators")
                .subcommand(json_flags(
                    Command::new("bbd")
                        .about("Buy-borrow-die yearly schedule")
                        .arg(Arg::new("asset-value").long("asset-value").required(true))
                        .arg(
                            Arg::new("annual-return")
                                .long("annual-return")
                                .required(true)
                                .help("Expected annual return, percent"),
                        )
                        .arg(
                            Arg::new("interest-rate")
                                .long("interest-rate")
                                .required(true)
                                .help("Loan interest rate, percent"),
                        )
                        .arg(
                            Arg::new("ltv-limit")
                                .long("ltv-limit")
                                .required(true)
                                .help("Loan-to-value ceiling, percent; rows above it are flagged"),
                        )
                        .arg(
                            Arg::new("borrow-rate")
                                .long("borrow-rate")
                                .help("Borrow this percent of assets each year"),
                        )
                        .arg(
                            Arg::new("monthly-income")
                                .long("monthly-income")
                                .help("Borrow a fixed monthly income instead"),
                        )
                        .arg(
                            Arg::new("inflation")
                                .long("inflation")
                                .help("Inflation percent (income mode only)"),
                        )
                        .arg(
                            Arg::new("years")
                                .long("years")
                                .default_value("50")
                                .value_parser(value_parser!(u32)),
                        ),
                ))
                .subcommand(json_flags(
                    Command::new("growth")
                        .about("Compound growth table for a starting balance")
                        .arg(Arg::new("balance").long("balance").required(true))
                        .arg(
                            Arg::new("roi")
                                .long("roi")
                                .required(true)
                                .help("Annual return, percent"),
                        )
                        .arg(
                            Arg::new("annual-savings")
                                .long("annual-savings")
                                .default_value("0"),
                        )
                        .arg(
                            Arg::new("years")
                                .long("years")
                                .default_value("30")
                                .value_parser(value_parser!(u32)),
                        ),
                )),
        )
        .subcommand(
            Command::new("export")
                .about("Export raw transactions")
                .arg(
                    Arg::new("format")
                        .long("format")
                        .default_value("csv")
                        .help("csv|json"),
                )
                .arg(Arg::new("out").long("out").required(true)),
        )
        .subcommand(
            Command::new("import")
                .about("Import transactions from CSV (year,month,kind,amount)")
                .arg(Arg::new("file").long("file").required(true)),
        )
}
