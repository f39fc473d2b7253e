//! Simulated payment confirmation gate

use log::info;
use std::io::{self, BufRead, Write};

/// Yes/no gate in front of letter generation.
///
/// No money moves anywhere; real payment processing is out of scope. A
/// declined gate is a normal outcome, not an error.
pub trait PaymentGate {
    fn confirm(&mut self) -> bool;
}

/// Asks the user on stdin, mirroring the simulated checkout dialog.
pub struct InteractiveGate {
    price_usd: u32,
}

impl InteractiveGate {
    pub fn new(price_usd: u32) -> Self {
        Self { price_usd }
    }
}

impl PaymentGate for InteractiveGate {
    fn confirm(&mut self) -> bool {
        print!(
            "Proceed with payment of USD {}? (Simulation) [y/N] ",
            self.price_usd
        );
        let _ = io::stdout().flush();

        let mut answer = String::new();
        if io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }

        let confirmed = matches!(answer.trim().to_lowercase().as_str(), "y" | "yes");
        info!(
            "Simulated payment {}",
            if confirmed { "confirmed" } else { "declined" }
        );
        confirmed
    }
}

/// Fixed-answer gate for `--yes` runs and tests.
pub struct AutoGate {
    answer: bool,
}

impl AutoGate {
    pub fn approving() -> Self {
        Self { answer: true }
    }

    pub fn declining() -> Self {
        Self { answer: false }
    }
}

impl PaymentGate for AutoGate {
    fn confirm(&mut self) -> bool {
        self.answer
    }
}
