use leptos::prelude::*;

use crate::contact::{ContactForm, FormField, MockDelivery};
use crate::content::Section;
use crate::motion::SECTION_ENTRANCE;

use super::reveal::Reveal;

const INPUT_CLASS: &str = "w-full p-3 bg-gray-700 text-gray-100 rounded-lg border-2 border-gray-600 focus:border-indigo-500 outline-none transition-colors duration-300";
const LABEL_CLASS: &str = "block text-gray-300 font-medium mb-2";

#[component]
pub fn ContactSection() -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());
    let value_of = move |field: FormField| move || form.with(|f| f.field(field).to_string());

    view! {
        <section id=Section::Contact.anchor_id() class="container mx-auto px-6 py-20">
            <Reveal timing=SECTION_ENTRANCE>
                <h2 class="text-3xl md:text-5xl font-bold text-center text-white mb-12">
                    "Contact Me"
                </h2>
                <div class="max-w-xl mx-auto bg-gray-800 p-8 md:p-12 rounded-2xl shadow-2xl">
                    <form
                        class="space-y-6"
                        on:submit=move |ev| {
                            ev.prevent_default();
                            form.update(|f| f.submit(&MockDelivery));
                        }
                    >
                        <div>
                            <label for="name" class=LABEL_CLASS>
                                "Name"
                            </label>
                            <input
                                type="text"
                                id="name"
                                name=FormField::Name.input_name()
                                required=true
                                class=INPUT_CLASS
                                prop:value=value_of(FormField::Name)
                                on:input=move |ev| {
                                    form.update(|f| f.set_field(FormField::Name, event_target_value(&ev)))
                                }
                            />
                        </div>
                        <div>
                            <label for="email" class=LABEL_CLASS>
                                "Email"
                            </label>
                            <input
                                type="email"
                                id="email"
                                name=FormField::Email.input_name()
                                required=true
                                class=INPUT_CLASS
                                prop:value=value_of(FormField::Email)
                                on:input=move |ev| {
                                    form.update(|f| f.set_field(FormField::Email, event_target_value(&ev)))
                                }
                            />
                        </div>
                        <div>
                            <label for="message" class=LABEL_CLASS>
                                "Message"
                            </label>
                            <textarea
                                id="message"
                                name=FormField::Message.input_name()
                                required=true
                                rows="5"
                                class=INPUT_CLASS
                                prop:value=value_of(FormField::Message)
                                on:input=move |ev| {
                                    form.update(|f| f.set_field(FormField::Message, event_target_value(&ev)))
                                }
                            ></textarea>
                        </div>
                        <button
                            type="submit"
                            class="w-full bg-indigo-600 hover:bg-indigo-700 text-white font-bold py-3 px-6 rounded-lg shadow-xl transition-transform duration-300 hover:scale-105 active:scale-95"
                        >
                            "Send Message"
                        </button>
                        {move || {
                            form.with(|f| f.status().map(str::to_string))
                                .map(|status| {
                                    view! { <p class="mt-4 text-center text-green-400">{status}</p> }
                                })
                        }}
                    </form>
                </div>
            </Reveal>
        </section>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use leptos::tachys::view::RenderHtml;

    use super::*;

    #[test]
    fn test_renders_required_fields_without_status() {
        let html = Owner::new().with(|| view! { <ContactSection /> }.to_html());

        for field in ["name", "email", "message"] {
            assert!(html.contains(&format!("id=\"{field}\"")), "missing {field} input");
        }
        assert_eq!(html.matches("required").count(), 3);
        assert!(html.contains("Send Message"));
        assert!(!html.contains("text-green-400"));
    }
}
