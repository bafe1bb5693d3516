//! Fixed page header: logo, navigation, and the mobile menu overlay.
//!
//! The header owns the interaction state of the page. It subscribes to the
//! viewport through [`crate::viewport`], keeps the [`MenuToggle`], and hands
//! all three inputs to [`HeaderAppearance::derive`] to decide what to draw.

use icondata::{LuMenu, LuX};
use leptos::prelude::*;

use crate::{
    appearance::{HeaderAppearance, LinkStyle, NavVariant, Tone, ToggleIcon},
    components::icons,
    content::NAV_LINKS,
    state::MenuToggle,
    viewport::{Viewport, use_scrolled_with, use_viewport_class_with},
};

/// Renders the header against `source`; the page passes the browser window.
pub fn with_viewport<V>(source: V) -> impl IntoView
where
    V: Viewport + 'static,
{
    let scrolled = use_scrolled_with(&source);
    let viewport = use_viewport_class_with(source);
    let menu = MenuToggle::new();

    Effect::new(move |_| menu.on_viewport(viewport.get()));

    let appearance =
        Memo::new(move |_| HeaderAppearance::derive(scrolled.get(), menu.state(), viewport.get()));

    view! {
        <header class=move || appearance.get().header_class()>
            <div class="container mx-auto px-6 flex justify-between items-center">
                <a href="#" class=move || appearance.get().logo_class()>
                    "ONE PARK "
                    <span class="text-[#C5A065]">"PEAK"</span>
                </a>

                <nav class="hidden md:flex items-center space-x-8">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.href()
                                    class=move || {
                                        LinkStyle::of(link, appearance.get().tone).class(NavVariant::Inline)
                                    }
                                >
                                    {link.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>

                <button
                    type="button"
                    aria-label="Toggle navigation"
                    aria-expanded=move || menu.is_open().to_string()
                    class=move || appearance.get().toggle_class()
                    on:click=move |_| menu.toggle()
                >
                    {move || match appearance.get().toggle_icon {
                        ToggleIcon::Menu => icons::component(LuMenu, "size-6"),
                        ToggleIcon::Close => icons::component(LuX, "size-6"),
                    }}
                </button>
            </div>

            <Show when=move || appearance.get().overlay_visible>
                <div class="absolute top-full left-0 w-full bg-white shadow-lg py-4 flex flex-col items-center space-y-4 md:hidden border-t border-gray-100">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.href()
                                    class=LinkStyle::of(link, Tone::Dark).class(NavVariant::Overlay)
                                    on:click=move |_| menu.select(link)
                                >
                                    {link.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </header>
    }
}
