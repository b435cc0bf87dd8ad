//! Timer-driven staged transitions.
//!
//! Each staged element of the page (preloader, page gate, success banner) is a
//! small state machine whose only automatic transition is "after N ms in this
//! stage, advance". Components arm a single `Timeout` for the current stage's
//! dwell through [`use_timed_stage`]; tests fold time through [`state_after`].

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::Timings;

pub trait TimedStage: Copy + Eq + 'static {
    /// How long the stage lasts before advancing on its own. `None` for stages
    /// that only leave on an external event.
    fn dwell_ms(&self, timings: &Timings) -> Option<u32>;

    fn advance(self) -> Self;
}

/// Stage reached `elapsed_ms` after entering `initial`, with no external events.
pub fn state_after<S: TimedStage>(initial: S, elapsed_ms: u32, timings: &Timings) -> S {
    let mut stage = initial;
    let mut remaining = elapsed_ms;
    while let Some(dwell) = stage.dwell_ms(timings) {
        if remaining < dwell {
            break;
        }
        remaining -= dwell;
        let next = stage.advance();
        if next == stage {
            break;
        }
        stage = next;
    }
    stage
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PreloaderStage {
    Monogram,
    FullName,
}

impl TimedStage for PreloaderStage {
    fn dwell_ms(&self, timings: &Timings) -> Option<u32> {
        match self {
            PreloaderStage::Monogram => Some(timings.preloader_stage_ms),
            PreloaderStage::FullName => None,
        }
    }

    fn advance(self) -> Self {
        PreloaderStage::FullName
    }
}

/// Whether the host page still covers itself with the preloader.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageGate {
    Loading,
    Ready,
}

impl TimedStage for PageGate {
    fn dwell_ms(&self, timings: &Timings) -> Option<u32> {
        match self {
            PageGate::Loading => Some(timings.page_ready_ms),
            PageGate::Ready => None,
        }
    }

    fn advance(self) -> Self {
        PageGate::Ready
    }
}

/// Success banner shown after a contact submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum BannerStage {
    #[default]
    Hidden,
    Shown,
}

impl TimedStage for BannerStage {
    fn dwell_ms(&self, timings: &Timings) -> Option<u32> {
        match self {
            BannerStage::Shown => Some(timings.banner_ms),
            BannerStage::Hidden => None,
        }
    }

    fn advance(self) -> Self {
        BannerStage::Hidden
    }
}

/// Arms a timeout for `stage`'s dwell and emits `on_elapsed` with the next
/// stage when it fires. Re-arms whenever `stage` changes; the pending timeout
/// is dropped (cancelled) on stage change and on unmount.
#[hook]
pub fn use_stage_timer<S: TimedStage>(stage: S, timings: Timings, on_elapsed: Callback<S>) {
    use_effect_with_deps(
        move |(stage, timings)| {
            let timeout = stage.dwell_ms(timings).map(|dwell| {
                let next = stage.advance();
                Timeout::new(dwell, move || on_elapsed.emit(next))
            });
            move || drop(timeout)
        },
        (stage, timings),
    );
}

/// Self-driving variant of [`use_stage_timer`] for stages that only move on
/// their own clock.
#[hook]
pub fn use_timed_stage<S: TimedStage>(initial: S, timings: Timings) -> S {
    let stage = use_state(|| initial);
    let on_elapsed = {
        let stage = stage.clone();
        Callback::from(move |next: S| stage.set(next))
    };
    use_stage_timer(*stage, timings, on_elapsed);
    *stage
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preloader_switches_exactly_at_dwell() {
        let timings = Timings::default();
        assert_eq!(state_after(PreloaderStage::Monogram, 0, &timings), PreloaderStage::Monogram);
        assert_eq!(state_after(PreloaderStage::Monogram, 1499, &timings), PreloaderStage::Monogram);
        assert_eq!(state_after(PreloaderStage::Monogram, 1500, &timings), PreloaderStage::FullName);
    }

    #[test]
    fn test_preloader_full_name_is_terminal() {
        let timings = Timings::default();
        assert_eq!(state_after(PreloaderStage::FullName, 60_000, &timings), PreloaderStage::FullName);
        assert_eq!(PreloaderStage::FullName.dwell_ms(&timings), None);
    }

    #[test]
    fn test_preloader_transitions_once() {
        let timings = Timings::default();
        let mut stage = PreloaderStage::Monogram;
        let mut transitions = 0;
        for ms in 0..=10_000 {
            let next = state_after(PreloaderStage::Monogram, ms, &timings);
            if next != stage {
                transitions += 1;
                stage = next;
            }
        }
        assert_eq!(transitions, 1);
    }

    #[test]
    fn test_page_gate_opens_after_configured_delay() {
        let timings = Timings { page_ready_ms: 2500, ..Timings::default() };
        assert_eq!(state_after(PageGate::Loading, 2499, &timings), PageGate::Loading);
        assert_eq!(state_after(PageGate::Loading, 2500, &timings), PageGate::Ready);
    }

    #[test]
    fn test_banner_hides_after_exactly_banner_ms() {
        let timings = Timings::default();
        assert_eq!(state_after(BannerStage::Shown, 4999, &timings), BannerStage::Shown);
        assert_eq!(state_after(BannerStage::Shown, 5000, &timings), BannerStage::Hidden);
    }

    #[test]
    fn test_hidden_banner_never_shows_by_itself() {
        assert_eq!(state_after(BannerStage::Hidden, 100_000, &Timings::default()), BannerStage::Hidden);
    }
}
