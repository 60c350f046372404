//! Plain-text values for the HUD. Layout lives in `systems`.

use std::time::Duration;

use crate::gameplay::proximity::StatusLine;
use crate::gameplay::{GameEvent, Outcome};

/// Remaining time as shown to the player: whole seconds, rounded up.
pub fn whole_seconds(remaining: Duration) -> u64 {
    remaining.as_secs() + u64::from(remaining.subsec_nanos() > 0)
}

pub fn collection_line(collected: u32, total: u32, remaining: Duration) -> String {
    format!(
        "Pumpkins: {}/{}  |  Time: {}s",
        collected,
        total,
        whole_seconds(remaining)
    )
}

pub fn delivery_line(delivered: u32, remaining: Duration) -> String {
    format!(
        "Time: {}s  |  Delivered: {}",
        whole_seconds(remaining),
        delivered
    )
}

pub fn status_text(status: StatusLine) -> String {
    format!("Status: {}", status.text())
}

/// Short-lived message for an event, if it deserves one.
pub fn notification_for(event: &GameEvent) -> Option<String> {
    match event {
        GameEvent::PickedUp => Some("Package picked up!".to_string()),
        GameEvent::TooFar => Some("Too far from the package".to_string()),
        GameEvent::Dropped { .. } => Some("Package dropped on the ground".to_string()),
        GameEvent::Delivered { count } => Some(format!("Package delivered! Total: {}", count)),
        GameEvent::Collected { .. } | GameEvent::Ended(_) => None,
    }
}

pub fn headline(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Victory { .. } => "Excellent! You gathered every magic pumpkin.".to_string(),
        Outcome::TimeExpired { collected, total } => {
            format!("Time's up. You gathered {}/{}.", collected, total)
        }
        Outcome::Delivery(_) => "Time's up!".to_string(),
    }
}

/// Label/value pairs for the end-of-session screen.
pub fn summary_rows(outcome: &Outcome) -> Vec<(&'static str, String)> {
    match outcome {
        Outcome::Victory { collected } => vec![("Pumpkins gathered", collected.to_string())],
        Outcome::TimeExpired { collected, total } => {
            vec![("Pumpkins gathered", format!("{}/{}", collected, total))]
        }
        Outcome::Delivery(summary) => vec![
            ("Packages delivered", summary.delivered.to_string()),
            ("Time used", summary.time_used_label()),
            ("Average per delivery", summary.average_label()),
        ],
    }
}

/// Closing line under the summary rows, if any.
pub fn closing_message(outcome: &Outcome) -> Option<&'static str> {
    match outcome {
        Outcome::Delivery(summary) => Some(summary.tier.message()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gameplay::session::DeliverySummary;

    #[test]
    fn seconds_round_up() {
        assert_eq!(whole_seconds(Duration::ZERO), 0);
        assert_eq!(whole_seconds(Duration::from_millis(1)), 1);
        assert_eq!(whole_seconds(Duration::from_secs(30)), 30);
        assert_eq!(whole_seconds(Duration::from_millis(29_001)), 30);
    }

    #[test]
    fn hud_lines() {
        assert_eq!(
            collection_line(1, 12, Duration::from_millis(89_500)),
            "Pumpkins: 1/12  |  Time: 90s"
        );
        assert_eq!(delivery_line(2, Duration::from_secs(7)), "Time: 7s  |  Delivered: 2");
        assert_eq!(status_text(StatusLine::FindPackage), "Status: Find the package");
    }

    #[test]
    fn empty_delivery_summary_shows_dashes() {
        let outcome = Outcome::Delivery(DeliverySummary::new(0, Duration::from_secs(30), Duration::ZERO));
        let rows = summary_rows(&outcome);
        assert_eq!(rows[2], ("Average per delivery", "--".to_string()));
        assert_eq!(rows[1], ("Time used", "30.0s".to_string()));
        assert_eq!(closing_message(&outcome), Some("Don't give up! Try again."));
    }

    #[test]
    fn three_deliveries_get_the_excellent_tier() {
        let outcome = Outcome::Delivery(DeliverySummary::new(3, Duration::from_secs(30), Duration::ZERO));
        assert_eq!(closing_message(&outcome), Some("Excellent work!"));
        assert_eq!(summary_rows(&outcome)[2].1, "10.00s");
    }

    #[test]
    fn collection_headlines() {
        assert_eq!(
            headline(&Outcome::TimeExpired { collected: 4, total: 12 }),
            "Time's up. You gathered 4/12."
        );
        assert_eq!(closing_message(&Outcome::Victory { collected: 12 }), None);
    }

    #[test]
    fn quiet_events_have_no_notification() {
        assert_eq!(notification_for(&GameEvent::Collected { id: 0, count: 1, total: 12 }), None);
        assert_eq!(
            notification_for(&GameEvent::Delivered { count: 2 }).as_deref(),
            Some("Package delivered! Total: 2")
        );
    }
}
