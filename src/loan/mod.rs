pub mod amortization;
pub mod payoff;
pub mod schedule;
