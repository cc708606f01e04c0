//! Loan and savings calculator example.
//!
//! Prices a loan, checks how long a balance takes to pay off, and compares
//! savings growth under the three compounding modes.

use loan_engine::core::money::Money;
use loan_engine::core::rate::CompoundingMode;
use loan_engine::core::terms::{LoanTerms, PayoffQuery, SavingsTerms};
use loan_engine::loan::amortization::amortize_loan;
use loan_engine::loan::payoff::solve_payoff_period;
use loan_engine::savings::growth::project_savings;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    println!("╔══════════════════════════════════════════╗");
    println!("║  loan-engine: Loan & Savings Example     ║");
    println!("╚══════════════════════════════════════════╝\n");

    // --- Scenario 1: Car loan ---
    println!("━━━ Scenario 1: $10,000 over 5 years at 5% ━━━\n");

    let loan = amortize_loan(&LoanTerms::new(10_000.0, 5.0, 5))?;
    println!("{}", loan);

    // --- Scenario 2: Interest-free loan ---
    println!("━━━ Scenario 2: $12,000 over 4 years at 0% ━━━\n");

    let loan = amortize_loan(&LoanTerms::new(12_000.0, 0.0, 4))?;
    println!("{}", loan);

    // --- Scenario 3: Time left on a balance ---
    println!("━━━ Scenario 3: Payoff Period ━━━\n");

    for balance in [10_000.0, 5_000.0, 0.0] {
        let left = solve_payoff_period(&PayoffQuery::new(balance, 6.5, 195.66))?;
        println!("  {:>12} at 6.5% paying $195.66: {}", Money(balance).to_string(), left);
    }

    match solve_payoff_period(&PayoffQuery::new(10_000.0, 6.5, 50.0)) {
        Ok(left) => println!("  unexpected: {}", left),
        Err(e) => println!("  $50.00/month is rejected: {}", e),
    }
    println!();

    // --- Scenario 4: Savings growth ---
    println!("━━━ Scenario 4: Savings, $1,000 + $100/month for 10 years ━━━\n");

    for (mode, rate) in [
        (CompoundingMode::Yearly, 5.0),
        (CompoundingMode::Monthly, 0.3),
        (CompoundingMode::Daily, 0.01),
    ] {
        let terms = SavingsTerms::new(1_000.0, 100.0, rate, 10).with_compounding(mode);
        let result = project_savings(&terms)?;
        println!(
            "  {:<8} rate {:>5}%  →  {:>12}  (interest {})",
            mode.as_str(),
            rate,
            Money(result.future_value).to_string(),
            Money(result.interest_earned)
        );
    }

    Ok(())
}
