//! Pure derivation of the header's visual configuration.
//!
//! Nothing here touches the DOM; the header component feeds signals in and
//! applies the resulting classes.

use crate::{
    content::NavLink,
    state::{MenuState, ViewportClass},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Backdrop {
    Transparent,
    /// Opaque white, blurred, with a soft shadow.
    Frosted,
}

/// Foreground color of the logo, links and menu icon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    /// Light text over the hero image.
    Light,
    /// Dark text over the frosted backdrop.
    Dark,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavVariant {
    Inline,
    Overlay,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleIcon {
    Menu,
    Close,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeaderAppearance {
    pub backdrop: Backdrop,
    pub tone: Tone,
    pub nav: NavVariant,
    pub overlay_visible: bool,
    pub toggle_icon: ToggleIcon,
}

impl HeaderAppearance {
    pub fn derive(scrolled: bool, menu: MenuState, viewport: ViewportClass) -> Self {
        let (backdrop, tone) = if scrolled {
            (Backdrop::Frosted, Tone::Dark)
        } else {
            (Backdrop::Transparent, Tone::Light)
        };
        let nav = match viewport {
            ViewportClass::Desktop => NavVariant::Inline,
            ViewportClass::Mobile => NavVariant::Overlay,
        };
        Self {
            backdrop,
            tone,
            nav,
            overlay_visible: nav == NavVariant::Overlay && menu.is_open(),
            toggle_icon: if menu.is_open() {
                ToggleIcon::Close
            } else {
                ToggleIcon::Menu
            },
        }
    }

    pub const fn header_class(&self) -> &'static str {
        match self.backdrop {
            Backdrop::Frosted => {
                "fixed top-0 left-0 right-0 z-50 transition-all duration-500 bg-white/95 backdrop-blur-md shadow-sm py-4"
            }
            Backdrop::Transparent => {
                "fixed top-0 left-0 right-0 z-50 transition-all duration-500 bg-transparent py-6"
            }
        }
    }

    pub const fn logo_class(&self) -> &'static str {
        match self.tone {
            Tone::Dark => "text-2xl font-serif tracking-widest font-bold text-[#2C2C2C]",
            Tone::Light => "text-2xl font-serif tracking-widest font-bold text-white",
        }
    }

    pub const fn toggle_class(&self) -> &'static str {
        match self.tone {
            Tone::Dark => "md:hidden text-[#2C2C2C]",
            Tone::Light => "md:hidden text-white",
        }
    }
}

/// How a single navigation entry is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkStyle {
    CallToAction,
    Plain(Tone),
}

impl LinkStyle {
    pub const fn of(link: &NavLink, tone: Tone) -> Self {
        if link.emphasized {
            Self::CallToAction
        } else {
            Self::Plain(tone)
        }
    }

    pub const fn class(self, variant: NavVariant) -> &'static str {
        match (variant, self) {
            (NavVariant::Inline, Self::CallToAction) => {
                "text-sm tracking-widest uppercase transition-colors duration-300 bg-[#C5A065] text-white px-6 py-2 hover:bg-[#B08D55]"
            }
            (NavVariant::Inline, Self::Plain(Tone::Dark)) => {
                "text-sm tracking-widest uppercase transition-colors duration-300 text-[#2C2C2C] hover:text-[#C5A065]"
            }
            (NavVariant::Inline, Self::Plain(Tone::Light)) => {
                "text-sm tracking-widest uppercase transition-colors duration-300 text-white hover:text-[#C5A065]"
            }
            // The overlay sits on white regardless of scroll position.
            (NavVariant::Overlay, Self::CallToAction) => {
                "text-sm tracking-widest uppercase text-[#C5A065] font-bold"
            }
            (NavVariant::Overlay, Self::Plain(_)) => "text-sm tracking-widest uppercase text-[#2C2C2C]",
        }
    }
}
