use serde::Serialize;

/// Urgency tier for an invoice due date, ordered by descending severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum UrgencyLevel {
    Overdue,
    Critical,
    High,
    Medium,
    Low,
}

/// Display metadata attached to a tier. The table below is the only source
/// of these values; it is never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelStyle {
    pub display_name: &'static str,
    pub color_code: &'static str,
}

// Severity order matters: a lookup miss falls back to the first entry.
const LEVEL_STYLES: &[(UrgencyLevel, LevelStyle)] = &[
    (UrgencyLevel::Overdue, LevelStyle { display_name: "Overdue", color_code: "#DC3545" }),
    (UrgencyLevel::Critical, LevelStyle { display_name: "Critical", color_code: "#FD7E14" }),
    (UrgencyLevel::High, LevelStyle { display_name: "High", color_code: "#FFC107" }),
    (UrgencyLevel::Medium, LevelStyle { display_name: "Medium", color_code: "#0D6EFD" }),
    (UrgencyLevel::Low, LevelStyle { display_name: "Low", color_code: "#28A745" }),
];

fn style(level: UrgencyLevel) -> &'static LevelStyle {
    LEVEL_STYLES
        .iter()
        .find(|(l, _)| *l == level)
        .map(|(_, s)| s)
        // The table covers every variant; if it ever did not, surface the
        // most severe style rather than failing a display-only path.
        .unwrap_or(&LEVEL_STYLES[0].1)
}

/// Urgency of a single invoice: the computed tier (if any) plus its display
/// metadata. `is_manual` marks a user override as opposed to a computed
/// classification; it is an independent axis from which tier is active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Urgency {
    pub level: Option<UrgencyLevel>,
    pub display_name: &'static str,
    pub color_code: &'static str,
    pub is_manual: bool,
}

impl Urgency {
    pub fn computed(level: UrgencyLevel) -> Self {
        let s = style(level);
        Urgency {
            level: Some(level),
            display_name: s.display_name,
            color_code: s.color_code,
            is_manual: false,
        }
    }

    pub fn manual(level: UrgencyLevel) -> Self {
        Urgency { is_manual: true, ..Urgency::computed(level) }
    }

    /// Placeholder urgency for invoices without a due date.
    pub fn not_available() -> Self {
        Urgency {
            level: None,
            display_name: "Not Available",
            color_code: "#D3D3D3",
            is_manual: false,
        }
    }
}

/// Classify a signed day-offset (due date minus today, so negative means the
/// invoice is overdue) into an urgency tier.
///
/// Total over all `i64`: the tier conditions partition the integer line with
/// no gaps or overlaps, so this never fails.
pub fn classify(days: i64) -> Urgency {
    let level = if days < 0 {
        UrgencyLevel::Overdue
    } else if days <= 7 {
        UrgencyLevel::Critical
    } else if days <= 14 {
        UrgencyLevel::High
    } else if days <= 30 {
        UrgencyLevel::Medium
    } else {
        UrgencyLevel::Low
    };
    Urgency::computed(level)
}

/// Human sentence describing a tier, for the invoice list UI. Total: unknown
/// or absent levels map to a fixed fallback string.
pub fn due_date_message(level: Option<UrgencyLevel>) -> &'static str {
    match level {
        Some(UrgencyLevel::Overdue) => "Past due date",
        Some(UrgencyLevel::Critical) => "Due within a week",
        Some(UrgencyLevel::High) => "Due in 1-2 weeks",
        Some(UrgencyLevel::Medium) => "Due in 2-4 weeks",
        Some(UrgencyLevel::Low) => "Due in more than a month (30+)",
        None => "Unknown due date",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_flag_is_independent_of_tier() {
        let computed = classify(3);
        let manual = Urgency::manual(UrgencyLevel::Critical);
        assert_eq!(computed.level, manual.level);
        assert_eq!(computed.display_name, manual.display_name);
        assert!(!computed.is_manual);
        assert!(manual.is_manual);
    }

    #[test]
    fn not_available_has_fixed_placeholder_metadata() {
        let u = Urgency::not_available();
        assert_eq!(u.level, None);
        assert_eq!(u.display_name, "Not Available");
        assert_eq!(u.color_code, "#D3D3D3");
        assert!(!u.is_manual);
    }
}
