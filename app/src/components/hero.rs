use leptos::{
    html::{div, h1, img, p, section, span},
    prelude::*,
};

use crate::content::Image;

/// Full-height banner over the hero photograph.
pub fn component() -> impl IntoView {
    section()
        .class("relative h-screen flex items-center justify-center overflow-hidden")
        .child((
            div().class("absolute inset-0 z-0").child((
                img()
                    .src(Image::Hero.src())
                    .alt(Image::Hero.alt())
                    .class("w-full h-full object-cover brightness-75 scale-105 animate-slow-zoom"),
                div().class("absolute inset-0 bg-gradient-to-b from-black/30 via-transparent to-black/60"),
            )),
            div().class("relative z-10 text-center text-white px-4 max-w-4xl mx-auto mt-10").child((
                p().class("text-sm md:text-base tracking-[0.3em] uppercase mb-4 text-[#C5A065] animate-fade-in-up")
                    .child("The Pinnacle of Luxury"),
                h1().class("text-5xl md:text-7xl lg:text-8xl font-serif font-medium mb-6 tracking-wide animate-fade-in-up delay-100")
                    .child("柏景峯"),
                p().class("text-lg md:text-xl font-light tracking-widest opacity-90 animate-fade-in-up delay-200 border-t border-b border-white/30 py-4 inline-block")
                    .child("ONE PARK PEAK"),
            )),
            div().class("absolute bottom-10 left-1/2 transform -translate-x-1/2 animate-bounce text-white/70")
                .child(span().class("text-xs tracking-widest").child("SCROLL")),
        ))
}
