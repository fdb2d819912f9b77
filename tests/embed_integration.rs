// SPDX-License-Identifier: MPL-2.0
//! Buy-button loader scenarios shared by every page placement.

use showreel::domain::embed::{AttemptId, EmbedState, EmbedWidget, Placement, PlacementView};
use showreel::domain::error::EmbedLoadError;
use showreel::ui::embed::{Effect, Message, Settings, State};
use std::time::Duration;

const URL: &str = "https://js.stripe.com/v3/buy-button.js";
const TIMEOUT: Duration = Duration::from_secs(10);

fn loader() -> State {
    State::new(Settings {
        script_url: URL.to_string(),
        timeout: TIMEOUT,
        widget: EmbedWidget::new("buy_btn_test", "pk_test"),
        fallback_contact: "sales@shop.test".to_string(),
    })
}

/// Mounts every placement and returns the attempts that were dispatched.
fn mount_all(state: &mut State) -> Vec<AttemptId> {
    Placement::ALL
        .into_iter()
        .chain([Placement::Hero])
        .filter_map(|placement| match state.handle(Message::EnsureLoaded(placement)) {
            Effect::Dispatch { attempt, .. } => Some(attempt),
            _ => None,
        })
        .collect()
}

#[test]
fn all_placements_share_one_dispatch() {
    let mut state = loader();
    let attempts = mount_all(&mut state);
    assert_eq!(attempts.len(), 1);
    assert_eq!(state.dispatch_count(), 1);
    assert!(state.is_loading());

    state.handle(Message::AttemptFinished {
        attempt: attempts[0],
        result: Ok(()),
    });
    assert_eq!(state.embed_state(), &EmbedState::Loaded);
    assert!(matches!(state.placement_view(), PlacementView::Widget(_)));

    assert!(mount_all(&mut state).is_empty());
}

#[test]
fn late_success_after_timeout_stays_failed() {
    let mut state = loader();
    let attempt = mount_all(&mut state)[0];

    state.handle(Message::AttemptTimedOut { attempt });
    assert_eq!(
        state.embed_state(),
        &EmbedState::Failed {
            error: EmbedLoadError::TimedOut(TIMEOUT)
        }
    );

    state.handle(Message::AttemptFinished {
        attempt,
        result: Ok(()),
    });
    assert!(state.embed_state().is_failed());
    match state.placement_view() {
        PlacementView::Failed {
            fallback_contact, ..
        } => assert_eq!(fallback_contact, "sales@shop.test"),
        other => panic!("expected failure view, got {other:?}"),
    }
}

#[test]
fn retry_dispatches_a_fresh_attempt_and_drops_the_old_artifact() {
    let mut state = loader();
    let first = mount_all(&mut state)[0];
    state.handle(Message::AttemptFinished {
        attempt: first,
        result: Err(EmbedLoadError::Status(503)),
    });

    let Effect::Dispatch {
        attempt: second,
        remove_previous,
        url,
        ..
    } = state.handle(Message::Retry)
    else {
        panic!("retry from failure should dispatch");
    };
    assert!(remove_previous);
    assert_eq!(url, URL);
    assert_ne!(first, second);
    assert_eq!(state.dispatch_count(), 2);

    // Retry while loading is a no-op.
    assert_eq!(state.handle(Message::Retry), Effect::None);

    // The first attempt's timer firing late changes nothing.
    state.handle(Message::AttemptTimedOut { attempt: first });
    assert!(state.is_loading());

    state.handle(Message::AttemptFinished {
        attempt: second,
        result: Ok(()),
    });
    assert!(state.embed_state().is_loaded());
}

#[test]
fn purchase_needs_a_live_widget() {
    let mut state = loader();
    assert_eq!(state.handle(Message::Purchase(Placement::Pricing)), Effect::None);

    let attempt = mount_all(&mut state)[0];
    state.handle(Message::AttemptFinished {
        attempt,
        result: Ok(()),
    });

    match state.handle(Message::Purchase(Placement::Pricing)) {
        Effect::CheckoutRequested { placement, widget } => {
            assert_eq!(placement, Placement::Pricing);
            assert_eq!(widget.buy_button_id(), "buy_btn_test");
        }
        other => panic!("expected checkout, got {other:?}"),
    }
}

#[test]
fn teardown_resets_for_a_fresh_page() {
    let mut state = loader();
    let attempt = mount_all(&mut state)[0];
    state.handle(Message::AttemptFinished {
        attempt,
        result: Ok(()),
    });

    assert_eq!(
        state.handle(Message::Teardown),
        Effect::RemoveArtifact {
            url: URL.to_string()
        }
    );
    assert_eq!(state.embed_state(), &EmbedState::Idle);

    let again = mount_all(&mut state);
    assert_eq!(again.len(), 1);
    assert_ne!(again[0], attempt);
}
