//! Breakpoint hook
//!
//! Reports whether the window is at least a given breakpoint wide,
//! re-evaluated on every `resize`.

use leptos::*;

/// Named minimum viewport width, in CSS pixels
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Breakpoint {
    Sm,
    Md,
    Lg,
    Xl,
    Xxl,
}

impl Breakpoint {
    pub fn min_width(self) -> u32 {
        match self {
            Breakpoint::Sm => 640,
            Breakpoint::Md => 768,
            Breakpoint::Lg => 1024,
            Breakpoint::Xl => 1280,
            Breakpoint::Xxl => 1536,
        }
    }

    /// Parse a breakpoint name as sent by the server
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "sm" => Some(Breakpoint::Sm),
            "md" => Some(Breakpoint::Md),
            "lg" => Some(Breakpoint::Lg),
            "xl" => Some(Breakpoint::Xl),
            "2xl" => Some(Breakpoint::Xxl),
            _ => None,
        }
    }

    pub fn is_reached_by(self, width: u32) -> bool {
        width >= self.min_width()
    }
}

/// Whether the window is at or above `breakpoint`; tracks both the
/// window width and the breakpoint signal
pub fn use_breakpoint(breakpoint: Signal<Breakpoint>) -> Signal<bool> {
    let width = use_window_width();
    Signal::derive(move || breakpoint.get().is_reached_by(width.get()))
}

/// Current window inner width, updated on resize
fn use_window_width() -> Signal<u32> {
    let width = create_rw_signal(window_width());

    let handle = window_event_listener(ev::resize, move |_| {
        width.set(window_width());
    });
    on_cleanup(move || handle.remove());

    width.into()
}

fn window_width() -> u32 {
    web_sys::window()
        .and_then(|window| window.inner_width().ok())
        .and_then(|width| width.as_f64())
        .map(|width| width.max(0.0) as u32)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(Breakpoint::from_name("sm"), Some(Breakpoint::Sm));
        assert_eq!(Breakpoint::from_name("2xl"), Some(Breakpoint::Xxl));
        assert_eq!(Breakpoint::from_name("huge"), None);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        assert!(Breakpoint::Sm.is_reached_by(640));
        assert!(!Breakpoint::Sm.is_reached_by(639));
        assert!(!Breakpoint::Lg.is_reached_by(800));
    }
}
