//! loan-engine CLI
//!
//! Run loan and savings calculations from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Monthly payment of a loan
//! loan-engine loan --principal 10000 --rate 5 --years 5
//!
//! # Savings with daily compounding, as JSON
//! loan-engine savings --initial 1000 --monthly 100 --rate 0.01 --years 10 --mode daily --format json
//!
//! # Time left on a loan
//! loan-engine payoff --balance 10000 --rate 6.5 --payment 195.66
//!
//! # Payment schedule in yearly chunks
//! loan-engine schedule --balance 10000 --rate 6.5 --payment 195.66 --months 12
//! ```

use loan_engine::core::money::Money;
use loan_engine::core::rate::CompoundingMode;
use loan_engine::core::terms::{LoanTerms, PayoffQuery, SavingsTerms, ScheduleQuery};
use loan_engine::loan::amortization::amortize_loan;
use loan_engine::loan::payoff::solve_payoff_period;
use loan_engine::loan::schedule::build_schedule;
use loan_engine::savings::growth::project_savings;
use serde::Serialize;
use std::collections::HashMap;
use std::process;
use std::str::FromStr;

/// Chunk length used by `schedule` when `--months` is omitted.
const DEFAULT_SCHEDULE_MONTHS: u32 = 12;

/// Upper bound on chunks when `--chunks` is omitted.
const MAX_SCHEDULE_CHUNKS: usize = 1_200;

fn print_usage() {
    eprintln!(
        r#"loan-engine — loan amortization and savings growth calculator

USAGE:
    loan-engine <COMMAND> [OPTIONS]

COMMANDS:
    loan        Fixed monthly payment and lifetime totals of a loan
    savings     Future value of a deposit plus monthly contributions
    payoff      Years and months left until a balance is paid off
    schedule    Project a payment schedule in chunks of months
    help        Show this message

OPTIONS (loan):
    --principal <AMOUNT>  Amount borrowed
    --rate <PERCENT>      Annual interest rate
    --years <N>           Term in years

OPTIONS (savings):
    --initial <AMOUNT>    Opening deposit (default: 0)
    --monthly <AMOUNT>    Monthly contribution (default: 0)
    --rate <PERCENT>      Rate, in the unit of --mode
    --years <N>           Term in years
    --mode <MODE>         yearly (annual rate, default), monthly (monthly rate)
                          or daily (daily rate)

OPTIONS (payoff):
    --balance <AMOUNT>    Remaining principal
    --rate <PERCENT>      Annual interest rate
    --payment <AMOUNT>    Fixed monthly payment

OPTIONS (schedule):
    --balance <AMOUNT>    Remaining principal
    --rate <PERCENT>      Annual interest rate
    --payment <AMOUNT>    Fixed monthly payment
    --months <N>          Months per chunk (default: 12)
    --paid <AMOUNT>       Total already paid (default: 0)
    --interest <AMOUNT>   Interest already paid (default: 0)
    --chunks <N>          Chunks to project (default: until paid off)

OPTIONS (all):
    --format <FORMAT>     Output format: text (default) or json

Set RUST_LOG=debug to trace calculations.

EXAMPLES:
    loan-engine loan --principal 10000 --rate 5 --years 5
    loan-engine savings --initial 1000 --monthly 100 --rate 5 --years 10
    loan-engine savings --initial 1000 --monthly 100 --rate 0.3 --years 10 --mode monthly
    loan-engine payoff --balance 10000 --rate 6.5 --payment 195.66
    loan-engine schedule --balance 10000 --rate 6.5 --payment 195.66 --months 12 --format json"#
    );
}

/// Parsed `--flag value` pairs for one command.
struct Options {
    values: HashMap<String, String>,
}

impl Options {
    fn parse(args: &[String], allowed: &[&str]) -> Self {
        let mut values = HashMap::new();
        let mut i = 0;
        while i < args.len() {
            let flag = args[i].as_str();
            if flag != "--format" && !allowed.contains(&flag) {
                eprintln!("Unknown option: {}", flag);
                process::exit(1);
            }
            i += 1;
            let value = args.get(i).cloned().unwrap_or_else(|| {
                eprintln!("{} requires a value", flag);
                process::exit(1);
            });
            values.insert(flag.to_string(), value);
            i += 1;
        }
        Self { values }
    }

    fn optional<T: FromStr>(&self, flag: &str) -> Option<T> {
        self.values.get(flag).map(|raw| {
            raw.parse().unwrap_or_else(|_| {
                eprintln!("Invalid value '{}' for {}", raw, flag);
                process::exit(1);
            })
        })
    }

    fn required<T: FromStr>(&self, flag: &str) -> T {
        self.optional(flag).unwrap_or_else(|| {
            eprintln!("Error: {} is required", flag);
            process::exit(1);
        })
    }

    fn json(&self) -> bool {
        match self.values.get("--format").map(String::as_str) {
            None | Some("text") => false,
            Some("json") => true,
            Some(other) => {
                eprintln!("--format requires 'text' or 'json', got '{}'", other);
                process::exit(1);
            }
        }
    }
}

fn exit_with<E: std::fmt::Display>(err: E) -> ! {
    eprintln!("Error: {}", err);
    process::exit(1);
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => exit_with(e),
    }
}

fn cmd_loan(args: &[String]) {
    let opts = Options::parse(args, &["--principal", "--rate", "--years"]);
    let terms = LoanTerms::new(
        opts.required("--principal"),
        opts.required("--rate"),
        opts.required("--years"),
    );

    let result = amortize_loan(&terms).unwrap_or_else(|e| exit_with(e));

    if opts.json() {
        print_json(&result);
    } else {
        println!("{}", result);
    }
}

fn cmd_savings(args: &[String]) {
    let opts = Options::parse(
        args,
        &["--initial", "--monthly", "--rate", "--years", "--mode"],
    );
    let mode = opts
        .optional::<String>("--mode")
        .map(CompoundingMode::from)
        .unwrap_or_default();
    let terms = SavingsTerms::new(
        opts.optional("--initial").unwrap_or(0.0),
        opts.optional("--monthly").unwrap_or(0.0),
        opts.required("--rate"),
        opts.required("--years"),
    )
    .with_compounding(mode);

    let result = project_savings(&terms).unwrap_or_else(|e| exit_with(e));

    if opts.json() {
        print_json(&result);
    } else {
        println!("{}", result);
    }
}

fn cmd_payoff(args: &[String]) {
    let opts = Options::parse(args, &["--balance", "--rate", "--payment"]);
    let query = PayoffQuery::new(
        opts.required("--balance"),
        opts.required("--rate"),
        opts.required("--payment"),
    );

    let result = solve_payoff_period(&query).unwrap_or_else(|e| exit_with(e));

    if opts.json() {
        print_json(&result);
    } else {
        println!("{}", result);
    }
}

fn cmd_schedule(args: &[String]) {
    let opts = Options::parse(
        args,
        &[
            "--balance",
            "--rate",
            "--payment",
            "--months",
            "--paid",
            "--interest",
            "--chunks",
        ],
    );
    let query = ScheduleQuery::new(
        opts.required("--balance"),
        opts.required("--rate"),
        opts.required("--payment"),
        opts.optional("--paid").unwrap_or(0.0),
        opts.optional("--interest").unwrap_or(0.0),
        opts.optional("--months").unwrap_or(DEFAULT_SCHEDULE_MONTHS),
    );
    let max_chunks = opts.optional("--chunks").unwrap_or(MAX_SCHEDULE_CHUNKS);

    let chunks = build_schedule(&query, max_chunks).unwrap_or_else(|e| exit_with(e));

    if opts.json() {
        print_json(&chunks);
        return;
    }

    println!(
        "{:>5} {:>8} {:>14} {:>14} {:>14}",
        "Chunk", "Months", "Total Paid", "Interest", "Remaining"
    );
    println!("{}", "-".repeat(59));
    let mut months_elapsed = 0;
    for (i, chunk) in chunks.iter().enumerate() {
        months_elapsed += chunk.months_projected;
        println!(
            "{:>5} {:>8} {:>14} {:>14} {:>14}",
            i + 1,
            months_elapsed,
            Money(chunk.total_paid).to_string(),
            Money(chunk.total_interest).to_string(),
            Money(chunk.remaining_principal).to_string(),
        );
    }
    if let Some(last) = chunks.last() {
        if last.is_paid_off() {
            println!("\nPaid off after {} months.", months_elapsed);
        } else {
            println!(
                "\n{} still outstanding after {} months.",
                Money(last.remaining_principal),
                months_elapsed
            );
        }
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let command = args[1].as_str();
    let rest = &args[2..];

    match command {
        "loan" => cmd_loan(rest),
        "savings" => cmd_savings(rest),
        "payoff" => cmd_payoff(rest),
        "schedule" => cmd_schedule(rest),
        "help" | "--help" | "-h" => print_usage(),
        _ => {
            eprintln!("Unknown command: {}", command);
            print_usage();
            process::exit(1);
        }
    }
}
