use super::*;

#[test]
fn idle_label_shows_amount_in_rupees() {
    assert_eq!(button_label(PaymentState::Idle, 499), "Upgrade for ₹499");
}

#[test]
fn processing_label_hides_amount() {
    assert_eq!(button_label(PaymentState::Processing, 499), "Processing...");
}

#[test]
fn default_state_is_idle() {
    assert_eq!(PaymentState::default(), PaymentState::Idle);
}
