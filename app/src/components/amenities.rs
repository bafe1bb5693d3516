//! Amenities gallery: a two-column grid mixing photographs and copy tiles.

use leptos::prelude::*;

use crate::content::{AMENITY_TILES, Section, TILE_ORDER_CLASSES, Tile};

fn tile(tile: Tile, order: &'static str) -> AnyView {
    match tile {
        Tile::Picture { image, caption } => view! {
            <div class=format!("relative group overflow-hidden h-[400px] {order}")>
                <img
                    src=image.src()
                    alt=image.alt()
                    class="w-full h-full object-cover transition-transform duration-700 group-hover:scale-110"
                />
                <div class="absolute inset-0 bg-black/20 group-hover:bg-black/40 transition-colors duration-500 flex items-center justify-center">
                    <h3 class="text-white text-2xl font-serif tracking-widest border border-white/50 px-8 py-3 backdrop-blur-sm">
                        {caption}
                    </h3>
                </div>
            </div>
        }
        .into_any(),
        Tile::Text { heading, lines, action, dark } => {
            let (surface, body, rule) = if dark {
                ("bg-[#2C2C2C] text-white", "text-gray-400", "border-white")
            } else {
                ("bg-white", "text-gray-600", "border-[#2C2C2C]")
            };
            view! {
                <div class=format!(
                    "{surface} p-12 flex flex-col justify-center items-center text-center h-[400px] {order}",
                )>
                    <h3 class="text-2xl font-serif mb-4 text-[#C5A065]">{heading}</h3>
                    <p class=format!("{body} leading-relaxed text-sm mb-6")>
                        {lines[0]}
                        <br />
                        {lines[1]}
                    </p>
                    <button
                        type="button"
                        class=format!(
                            "text-xs tracking-widest border-b {rule} pb-1 hover:text-[#C5A065] hover:border-[#C5A065] transition-colors uppercase",
                        )
                    >
                        {action}
                    </button>
                </div>
            }
            .into_any()
        }
    }
}

pub fn component() -> impl IntoView {
    view! {
        <section id=Section::Amenities.id() class="py-20 bg-[#F4F4F4]">
            <div class="container mx-auto px-6">
                <div class="grid grid-cols-1 md:grid-cols-2 gap-0 shadow-2xl">
                    {AMENITY_TILES
                        .into_iter()
                        .zip(TILE_ORDER_CLASSES)
                        .map(|(entry, order)| tile(entry, order))
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
