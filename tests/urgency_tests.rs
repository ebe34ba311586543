use invoice_cashflow_core::urgency::{classify, due_date_message, UrgencyLevel};

#[test]
fn negative_days_are_overdue() {
    for d in [-1i64, -30, -365, -1_000_000, i64::MIN] {
        assert_eq!(classify(d).level, Some(UrgencyLevel::Overdue), "days = {}", d);
    }
}

#[test]
fn tier_boundaries() {
    assert_eq!(classify(0).level, Some(UrgencyLevel::Critical));
    assert_eq!(classify(7).level, Some(UrgencyLevel::Critical));
    assert_eq!(classify(8).level, Some(UrgencyLevel::High));
    assert_eq!(classify(14).level, Some(UrgencyLevel::High));
    assert_eq!(classify(15).level, Some(UrgencyLevel::Medium));
    assert_eq!(classify(30).level, Some(UrgencyLevel::Medium));
    assert_eq!(classify(31).level, Some(UrgencyLevel::Low));
    assert_eq!(classify(i64::MAX).level, Some(UrgencyLevel::Low));
}

#[test]
fn partition_is_total_with_exactly_one_tier_per_input() {
    for d in -10_000i64..=10_000 {
        let expected = if d < 0 {
            UrgencyLevel::Overdue
        } else if d <= 7 {
            UrgencyLevel::Critical
        } else if d <= 14 {
            UrgencyLevel::High
        } else if d <= 30 {
            UrgencyLevel::Medium
        } else {
            UrgencyLevel::Low
        };
        // classify never fails and always lands on exactly the tier whose
        // condition holds for d
        assert_eq!(classify(d).level, Some(expected), "days = {}", d);
    }
}

#[test]
fn classified_values_carry_display_metadata() {
    let u = classify(-3);
    assert_eq!(u.display_name, "Overdue");
    assert!(u.color_code.starts_with('#') && u.color_code.len() == 7);
    assert!(!u.is_manual);
}

#[test]
fn due_date_messages_match_fixed_table() {
    assert_eq!(due_date_message(Some(UrgencyLevel::Overdue)), "Past due date");
    assert_eq!(due_date_message(Some(UrgencyLevel::Critical)), "Due within a week");
    assert_eq!(due_date_message(Some(UrgencyLevel::High)), "Due in 1-2 weeks");
    assert_eq!(due_date_message(Some(UrgencyLevel::Medium)), "Due in 2-4 weeks");
    assert_eq!(
        due_date_message(Some(UrgencyLevel::Low)),
        "Due in more than a month (30+)"
    );
    assert_eq!(due_date_message(None), "Unknown due date");
}
