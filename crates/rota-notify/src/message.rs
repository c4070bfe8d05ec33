use rota_engine::PaymentRecorded;

/// Compose the thanks-and-next-turn announcement for a recorded payment.
pub fn payment_message(outcome: &PaymentRecorded) -> String {
    format!(
        "☕ Thanks to **{}** and **{}** for paying {:.2}! 🎉\n\n**Next turn:** {}",
        outcome.payers[0],
        outcome.payers[1],
        outcome.amount,
        join_names(&outcome.next_to_pay),
    )
}

/// Compose a standalone next-turn reminder.
pub fn turn_message(next_to_pay: &[String]) -> String {
    format!("🔔 **Next turn:** {}", join_names(next_to_pay))
}

fn join_names(names: &[String]) -> String {
    match names {
        [] => "N/A".to_string(),
        [one] => one.clone(),
        [first, second, ..] => format!("{first} and {second}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome() -> PaymentRecorded {
        PaymentRecorded {
            payers: ["Vasu and Naman".into(), "Tapish and Shashank".into()],
            amount: 150.0,
            next_to_pay: vec!["Ashwin and Rohit".into(), "Sarthak and Devansh".into()],
            ranking: vec![],
            persisted: true,
        }
    }

    #[test]
    fn payment_message_names_payers_amount_and_next() {
        let text = payment_message(&outcome());
        assert!(text.contains("Vasu and Naman"));
        assert!(text.contains("Tapish and Shashank"));
        assert!(text.contains("150.00"));
        assert!(text.contains("Ashwin and Rohit and Sarthak and Devansh"));
    }

    #[test]
    fn turn_message_handles_short_rankings() {
        assert!(turn_message(&[]).contains("N/A"));
        assert!(turn_message(&["A".into()]).ends_with("A"));
        assert!(turn_message(&["A".into(), "B".into()]).contains("A and B"));
    }
}
