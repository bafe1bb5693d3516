use leptos::{
    html::{a, div, footer, p},
    prelude::*,
};

use crate::content::{DISCLAIMER, FOOTER_LINKS};

pub fn component() -> impl IntoView {
    footer()
        .class("bg-[#1a1a1a] text-gray-500 py-12 text-xs border-t border-gray-800")
        .child(
            div().class("container mx-auto px-6 text-center").child((
                div()
                    .class("flex justify-center space-x-8 mb-8 tracking-widest uppercase text-gray-400")
                    .child(
                        FOOTER_LINKS
                            .into_iter()
                            .map(|label| a().href("#").class("hover:text-white").child(label))
                            .collect_view(),
                    ),
                p().class("leading-relaxed opacity-60 max-w-4xl mx-auto")
                    .child(DISCLAIMER),
                p().class("mt-8 font-serif text-[#C5A065]")
                    .child("\u{a9} 2024 ONE PARK PEAK. All Rights Reserved."),
            )),
        )
}
