use dioxus::prelude::*;

use crate::vm::{KnowledgeModalVm, QuizModalVm};

#[component]
pub fn QuizModal(
    vm: QuizModalVm,
    on_select: Callback<String>,
    on_close: Callback<()>,
    on_backdrop: Callback<()>,
) -> Element {
    let locked = vm.locked;

    rsx! {
        div {
            id: "question-modal",
            class: "modal-overlay",
            onclick: move |_| on_backdrop.call(()),
            div {
                class: "modal",
                onclick: move |evt| evt.stop_propagation(),
                button {
                    id: "close-button",
                    class: "modal-close",
                    r#type: "button",
                    onclick: move |_| on_close.call(()),
                    "×"
                }
                h2 { id: "province-name", class: "modal-title", "{vm.region}" }
                p { id: "question-text", class: "modal-body", "{vm.question}" }
                div { id: "options-container", class: "options",
                    for (index, option) in vm.options.iter().enumerate() {
                        OptionButton {
                            key: "{index}",
                            label: option.clone(),
                            disabled: locked,
                            on_select,
                        }
                    }
                }
                if let Some(feedback) = vm.feedback.as_ref() {
                    p {
                        id: "feedback-text",
                        class: "feedback",
                        style: "color: {feedback.color};",
                        "{feedback.text}"
                    }
                }
            }
        }
    }
}

#[component]
fn OptionButton(label: String, disabled: bool, on_select: Callback<String>) -> Element {
    let value = label.clone();
    rsx! {
        button {
            class: "btn option-button",
            r#type: "button",
            disabled: disabled,
            onclick: move |_| on_select.call(value.clone()),
            "{label}"
        }
    }
}

#[component]
pub fn KnowledgeModal(
    vm: KnowledgeModalVm,
    on_close: Callback<()>,
    on_backdrop: Callback<()>,
) -> Element {
    rsx! {
        div {
            id: "knowledge-modal",
            class: "modal-overlay",
            onclick: move |_| on_backdrop.call(()),
            div {
                class: "modal knowledge",
                onclick: move |evt| evt.stop_propagation(),
                button {
                    id: "knowledge-close-button",
                    class: "modal-close",
                    r#type: "button",
                    onclick: move |_| on_close.call(()),
                    "×"
                }
                h2 { id: "knowledge-title", class: "modal-title", "{vm.title}" }
                img {
                    id: "knowledge-image",
                    class: "knowledge-image",
                    src: "{vm.image}",
                    alt: "{vm.title}",
                }
                p { id: "knowledge-text", class: "modal-body", "{vm.body}" }
            }
        }
    }
}
