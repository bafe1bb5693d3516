//! Reservation section with the registration form.
//!
//! Field values live in a local `RwSignal<Registration>`. Submitting goes
//! through [`suppress_submit`], which cancels the browser's navigation; there
//! is no backend to send the registration to.

use icondata::{LuArrowRight, LuPhone};
use leptos::prelude::*;

use crate::{
    components::icons,
    content::{HOTLINE, Section},
    registration::{Field, Registration, suppress_submit},
};

fn input(field: Field, registration: RwSignal<Registration>) -> impl IntoView {
    view! {
        <div>
            <label for=field.id() class="block text-xs uppercase tracking-widest text-gray-500 mb-2">
                {field.label()}
            </label>
            <input
                id=field.id()
                name=field.id()
                type=field.input_type()
                autocomplete=field.autocomplete()
                placeholder=field.placeholder()
                prop:value=move || registration.with(|form| form.get(field).to_owned())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    registration.update(|form| form.set(field, value));
                }
                class="w-full border-b border-gray-300 py-2 focus:outline-none focus:border-[#C5A065] transition-colors bg-transparent"
            />
        </div>
    }
}

pub fn component() -> impl IntoView {
    let registration = RwSignal::new(Registration::default());

    view! {
        <section id=Section::Contact.id() class="py-24 bg-[#2C2C2C] text-white relative">
            <div class="container mx-auto px-6 flex flex-col md:flex-row items-center gap-12">
                <div class="w-full md:w-1/2 pl-0 md:pl-12">
                    <p class="text-[#C5A065] tracking-widest uppercase mb-4 text-sm">"Make a Reservation"</p>
                    <h2 class="text-4xl md:text-5xl font-serif mb-6 leading-tight">
                        "預約參觀"
                        <br />
                        "示範單位"
                    </h2>
                    <p class="text-gray-400 font-light mb-8 leading-relaxed max-w-md">
                        "登記預約成功後，我們的銷售顧問將會盡快與閣下聯絡，安排專屬參觀時間。"
                    </p>
                    <div class="flex items-center space-x-4 text-[#C5A065]">
                        {icons::component(LuPhone, "size-5")}
                        <span class="text-xl tracking-widest font-serif">{HOTLINE}</span>
                    </div>
                </div>

                <div class="w-full md:w-1/2 bg-white text-[#2C2C2C] p-8 md:p-12 shadow-2xl max-w-md">
                    <form
                        class="space-y-6"
                        on:submit=move |ev| registration.with_untracked(|form| suppress_submit(&ev, form))
                    >
                        {Field::ALL.into_iter().map(|field| input(field, registration)).collect_view()}
                        <button
                            type="submit"
                            class="w-full bg-[#C5A065] text-white py-4 uppercase tracking-[0.2em] text-sm hover:bg-[#B08D55] transition-colors flex items-center justify-center gap-2 group mt-4"
                        >
                            "立即登記"
                            {icons::component(
                                LuArrowRight,
                                "size-4 group-hover:translate-x-1 transition-transform",
                            )}
                        </button>
                    </form>
                </div>
            </div>
        </section>
    }
}
