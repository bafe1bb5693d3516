use icondata::LuDownload;
use leptos::prelude::*;

use crate::{
    components::icons,
    content::{DOCUMENTS, Section},
};

/// Sales document cards, one per entry of [`DOCUMENTS`].
pub fn component() -> impl IntoView {
    view! {
        <section id=Section::Downloads.id() class="py-24 px-6 bg-white">
            <div class="max-w-5xl mx-auto">
                <h2 class="text-3xl text-center font-serif mb-16">"銷售文件"</h2>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                    {DOCUMENTS
                        .into_iter()
                        .map(|document| {
                            view! {
                                <div class="border border-gray-200 p-8 text-center hover:shadow-xl transition-shadow duration-300 bg-[#FDFDFD] group cursor-pointer">
                                    <div class="w-12 h-12 bg-[#F4F4F4] rounded-full flex items-center justify-center mx-auto mb-6 text-[#C5A065] group-hover:bg-[#C5A065] group-hover:text-white transition-colors">
                                        {icons::component(LuDownload, "size-5")}
                                    </div>
                                    <h3 class="text-lg font-medium mb-1">{document.title}</h3>
                                    <p class="text-xs text-gray-400 uppercase tracking-wide mb-6">
                                        {document.subtitle}
                                    </p>
                                    <span class="text-xs border border-gray-300 px-4 py-2 text-gray-500 group-hover:bg-[#2C2C2C] group-hover:text-white group-hover:border-[#2C2C2C] transition-all">
                                        "點擊下載"
                                    </span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
