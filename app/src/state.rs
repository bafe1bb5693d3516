//! Interaction state shared by the header: the scroll flag, the mobile menu
//! state machine, and the viewport class.

use leptos::prelude::*;

use crate::content::NavLink;

/// Vertical offset, in CSS pixels, past which the header switches to its
/// opaque treatment.
pub const SCROLL_THRESHOLD: f64 = 50.0;

/// Widths below this are the mobile class (Tailwind's `md` breakpoint).
pub const MOBILE_BREAKPOINT: f64 = 768.0;

/// Whether the page has scrolled past [`SCROLL_THRESHOLD`]. The boundary
/// itself still counts as "at the top".
pub fn is_scrolled(offset: f64) -> bool {
    offset > SCROLL_THRESHOLD
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewportClass {
    Mobile,
    #[default]
    Desktop,
}

impl ViewportClass {
    pub fn from_width(width: f64) -> Self {
        if width < MOBILE_BREAKPOINT {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }
}

/// Visibility of the mobile navigation overlay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }

    #[must_use]
    pub const fn open(self) -> Self {
        Self::Open
    }

    #[must_use]
    pub const fn close(self) -> Self {
        Self::Closed
    }

    /// Picking any entry dismisses the overlay; the browser handles the jump.
    #[must_use]
    pub const fn select(self, _link: &NavLink) -> Self {
        self.close()
    }
}

/// Reactive owner of the [`MenuState`]. Copyable so event handlers can hold
/// it; every mutation goes through one of the named transitions.
#[derive(Clone, Copy, Debug)]
pub struct MenuToggle {
    state: RwSignal<MenuState>,
}

impl Default for MenuToggle {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuToggle {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(MenuState::default()),
        }
    }

    pub fn state(&self) -> MenuState {
        self.state.get()
    }

    pub fn is_open(&self) -> bool {
        self.state.get().is_open()
    }

    pub fn toggle(&self) {
        self.transition("toggle", MenuState::toggle);
    }

    pub fn close(&self) {
        self.transition("close", MenuState::close);
    }

    /// The overlay is mobile-only, so entering the desktop class closes it.
    pub fn on_viewport(&self, class: ViewportClass) {
        if class == ViewportClass::Desktop {
            self.transition("desktop viewport", MenuState::close);
        }
    }

    pub fn select(&self, link: &NavLink) {
        let target = link.href();
        self.transition(target, |state| state.select(link));
    }

    fn transition(&self, cause: &str, next: impl FnOnce(MenuState) -> MenuState) {
        let current = self.state.get_untracked();
        let updated = next(current);
        if updated != current {
            tracing::debug!(?current, ?updated, cause, "menu transition");
            self.state.set(updated);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::NAV_LINKS;

    #[test]
    fn threshold_is_exclusive() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(49.9));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.5));
        assert!(is_scrolled(2_000.0));
    }

    #[test]
    fn scrolled_flag_matches_offset_comparison() {
        for offset in (0..200).map(f64::from) {
            assert_eq!(is_scrolled(offset), offset > 50.0, "offset {offset}");
        }
    }

    #[test]
    fn viewport_class_splits_at_breakpoint() {
        assert_eq!(ViewportClass::from_width(0.0), ViewportClass::Mobile);
        assert_eq!(ViewportClass::from_width(767.0), ViewportClass::Mobile);
        assert_eq!(ViewportClass::from_width(768.0), ViewportClass::Desktop);
        assert_eq!(ViewportClass::from_width(1440.0), ViewportClass::Desktop);
    }

    #[test]
    fn menu_starts_closed() {
        assert_eq!(MenuState::default(), MenuState::Closed);
        assert!(!MenuState::default().is_open());
    }

    #[test]
    fn double_toggle_round_trips() {
        let start = MenuState::Closed;
        assert_eq!(start.toggle(), MenuState::Open);
        assert_eq!(start.toggle().toggle(), start);
        assert_eq!(start.open().close(), MenuState::Closed);
    }

    #[test]
    fn selecting_any_link_closes() {
        for link in &NAV_LINKS {
            assert_eq!(MenuState::Open.select(link), MenuState::Closed);
            assert_eq!(MenuState::Closed.select(link), MenuState::Closed);
        }
    }

    #[test]
    fn toggle_container_applies_transitions() {
        let owner = Owner::new();
        owner.with(|| {
            let menu = MenuToggle::new();
            assert!(!menu.is_open());

            menu.toggle();
            assert_eq!(menu.state(), MenuState::Open);

            menu.select(&NAV_LINKS[1]);
            assert_eq!(menu.state(), MenuState::Closed);

            menu.toggle();
            menu.toggle();
            assert_eq!(menu.state(), MenuState::Closed);

            menu.toggle();
            menu.close();
            assert!(!menu.is_open());
        });
    }

    #[test]
    fn desktop_viewport_closes_open_menu() {
        let owner = Owner::new();
        owner.with(|| {
            let menu = MenuToggle::new();
            menu.toggle();

            menu.on_viewport(ViewportClass::Mobile);
            assert_eq!(menu.state(), MenuState::Open);

            menu.on_viewport(ViewportClass::Desktop);
            assert_eq!(menu.state(), MenuState::Closed);

            menu.on_viewport(ViewportClass::Desktop);
            assert_eq!(menu.state(), MenuState::Closed);
        });
    }
}
