use leptos::prelude::*;

use crate::content::Section;

pub fn component() -> impl IntoView {
    view! {
        <section id=Section::Concept.id() class="py-24 px-6 md:px-12 bg-white">
            <div class="max-w-3xl mx-auto text-center">
                <h2 class="text-3xl md:text-4xl font-serif text-[#2C2C2C] mb-8">"城中綠洲 · 頂峰之作"</h2>
                <div class="w-16 h-0.5 bg-[#C5A065] mx-auto mb-10"></div>
                <p class="text-gray-600 leading-loose text-justify md:text-center font-light mb-6">
                    "柏景峯傲據城市核心，盡覽繁華景致與翠綠山巒。由國際頂尖建築團隊精心打造，融合現代美學與自然元素，締造無與倫比的尊貴生活體驗。每一處細節，皆為追求卓越品味的您而設。"
                </p>
                <p class="text-gray-500 text-sm italic font-serif">
                    "\"Where Urban Sophistication Meets Natural Serenity\""
                </p>
            </div>
        </section>
    }
}
