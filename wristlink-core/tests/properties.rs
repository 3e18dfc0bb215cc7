//! Property tests for arbitration and body wrapping

use proptest::prelude::*;

use wristlink_core::config::{ArbiterConfig, MAX_ACTIVE_NOTIFICATIONS, MAX_KNOWN_NOTIFICATIONS};
use wristlink_core::display::{body_lines, wrap_text_to_pixels};
use wristlink_core::notification::{find, score, ActiveSet, Notification, NotificationArbiter};
use wristlink_core::traits::TextMetrics;

const APPS: &[&str] = &[
    "com.apple.MobileSMS",
    "com.flexibits.fantastical2.iphone",
    "com.fastmail.FastMail",
    "com.google.Gmail",
    "com.example.game",
];

struct Mono;

impl TextMetrics for Mono {
    fn text_width(&self, text: &str) -> u32 {
        text.chars().count() as u32 * 6
    }

    fn line_width(&self) -> u32 {
        240
    }
}

fn notification(id: u32) -> impl Strategy<Value = Notification> {
    (
        0..APPS.len(),
        prop_oneof![Just("Favourite Contact"), Just("Someone"), Just("Alerts")],
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(move |(app, title, important, silent, removed)| {
            Notification::new(id, APPS[app], title, "body")
                .with_important(important)
                .with_silent(silent)
                .with_removed(removed)
        })
}

/// Active set with unique ids drawn from `0..id_space`
fn active_set(id_space: u32) -> impl Strategy<Value = ActiveSet> {
    proptest::collection::btree_set(0..id_space, 0..=MAX_ACTIVE_NOTIFICATIONS)
        .prop_flat_map(|ids| {
            ids.into_iter()
                .map(notification)
                .collect::<std::vec::Vec<_>>()
        })
        .prop_map(|items| items.into_iter().collect())
}

fn message() -> impl Strategy<Value = String> {
    proptest::collection::vec(("[a-z]{1,50}", prop_oneof![3 => Just(' '), 1 => Just('\n')]), 0..40)
        .prop_map(|words| {
            words
                .into_iter()
                .map(|(w, sep)| format!("{w}{sep}"))
                .collect()
        })
}

fn visible(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

proptest! {
    #[test]
    fn prop_current_is_live_and_never_removed(
        ticks in proptest::collection::vec(active_set(24), 1..12)
    ) {
        let config = ArbiterConfig::default();
        let mut arbiter = NotificationArbiter::new();

        for active in &ticks {
            arbiter.tick_connected(&config, active);
            if let Some(pick) = arbiter.current() {
                let n = find(active, pick.id);
                prop_assert!(n.is_some());
                prop_assert!(!n.unwrap().removed);
            }
        }
    }

    #[test]
    fn prop_known_set_stays_bounded(
        ticks in proptest::collection::vec(active_set(1_000), 1..20)
    ) {
        let config = ArbiterConfig::default();
        let mut arbiter = NotificationArbiter::new();

        for active in &ticks {
            arbiter.tick_connected(&config, active);
            prop_assert!(arbiter.known().len() <= MAX_KNOWN_NOTIFICATIONS);
            // Nothing still active is ever forgotten
            for n in active.iter() {
                prop_assert!(arbiter.known().contains(n.id));
            }
        }
    }

    #[test]
    fn prop_fresh_pick_is_last_highest_score(active in active_set(64)) {
        let config = ArbiterConfig::default();
        let mut arbiter = NotificationArbiter::new();
        let outcome = arbiter.tick_connected(&config, &active);

        let live: std::vec::Vec<&Notification> = active.iter().filter(|n| !n.removed).collect();
        let expected = live
            .iter()
            .map(|n| (score(&config, n), n.id))
            .reduce(|best, next| if next.0 >= best.0 { next } else { best });

        prop_assert_eq!(arbiter.current().map(|p| (p.priority, p.id)), expected);
        prop_assert_eq!(
            outcome.haptic_pulses as usize,
            live.iter().filter(|n| !n.silent).count()
        );
    }

    #[test]
    fn prop_disconnect_forgets_everything(active in active_set(64)) {
        let config = ArbiterConfig::default();
        let mut arbiter = NotificationArbiter::new();
        arbiter.tick_connected(&config, &active);

        let outcome = arbiter.tick_disconnected();
        prop_assert!(outcome.disconnected_notice);
        prop_assert!(arbiter.current().is_none());
        prop_assert!(arbiter.known().is_empty());
        prop_assert!(!arbiter.tick_disconnected().disconnected_notice);
    }

    #[test]
    fn prop_wrapped_rows_fit_and_keep_order(text in message(), max_lines in 0usize..=4) {
        let lines = wrap_text_to_pixels(&text, &Mono, max_lines);

        prop_assert!(lines.len() <= max_lines);
        for line in &lines {
            prop_assert!(Mono.text_width(line) <= Mono.line_width());
        }

        let shown: String = lines.iter().map(|l| visible(l)).collect();
        prop_assert!(visible(&text).starts_with(&shown));
    }

    #[test]
    fn prop_app_id_fills_spare_row(text in message(), app in 0..APPS.len()) {
        let wrapped = wrap_text_to_pixels(&text, &Mono, 4);
        let lines = body_lines(&text, APPS[app], &Mono);

        prop_assert!(lines.len() <= 4);
        if wrapped.len() < 4 {
            prop_assert_eq!(lines.len(), wrapped.len() + 1);
            prop_assert_eq!(lines.last().map(|l| l.as_str()), Some(APPS[app]));
        } else {
            prop_assert_eq!(lines, wrapped);
        }
    }
}
