//! Resumable payment schedule example.
//!
//! Builds a loan's payment schedule one year at a time, threading each
//! chunk's totals into the next query the way a web session would carry
//! them between requests.

use loan_engine::core::money::Money;
use loan_engine::core::terms::{PayoffQuery, ScheduleQuery};
use loan_engine::loan::payoff::solve_payoff_period;
use loan_engine::loan::schedule::project_scheduled_payments;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    println!("╔══════════════════════════════════════════╗");
    println!("║  loan-engine: Chunked Schedule Example   ║");
    println!("╚══════════════════════════════════════════╝\n");

    let (principal, rate, payment) = (10_000.0, 6.5, 195.66);
    println!(
        "Loan: {} at {}% paying {}/month\n",
        Money(principal),
        rate,
        Money(payment)
    );

    // The caller owns the state: only the query is carried forward.
    let mut query = ScheduleQuery::starting(principal, rate, payment, 12);
    let mut year = 0;

    loop {
        year += 1;
        let result = project_scheduled_payments(&query)?;
        let left = solve_payoff_period(&PayoffQuery::new(result.remaining_principal, rate, payment))?;

        println!("━━━ Year {} ━━━", year);
        print!("{}", result);
        println!("Time Left:           {}\n", left);

        if result.is_paid_off() {
            break;
        }
        query = query.following(&result);
    }

    Ok(())
}
