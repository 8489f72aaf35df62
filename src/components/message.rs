use leptos::prelude::*;
use log::debug;

use crate::components::code_block::CodeBlock;
use crate::markdown::{self, Segment};
use crate::message::{ColorMode, Message, MessageIntent, Role, resolve_edit};

/// A single conversation turn: role label, content, hover action tray.
///
/// The view never mutates the message. Every requested change goes out
/// through `on_change` as a `MessageIntent`; the parent owns the list.
/// User content is rendered verbatim, never parsed as markup.
#[component]
pub fn ChatMessage(
    message: Message,
    #[prop(into)] color_mode: Signal<ColorMode>,
    #[prop(into)] streaming: Signal<bool>,
    #[prop(into)] on_change: Callback<MessageIntent>,
) -> impl IntoView {
    let is_editing = RwSignal::new(false);
    let draft = RwSignal::new(String::new());

    let role = message.role;
    let content = message.content;

    let begin_edit = {
        let content = content.clone();
        move |_| {
            // Re-entering edit mode while already editing is a no-op.
            if !is_editing.get() {
                draft.set(content.clone());
                is_editing.set(true);
            }
        }
    };

    let submit_edit = {
        let original = content.clone();
        move |_| {
            let text = resolve_edit(&draft.get(), &original);
            is_editing.set(false);
            debug!("edit submitted ({} chars)", text.len());
            on_change.run(MessageIntent::Edit(text));
        }
    };

    let bubble_class = match role {
        Role::User => "message message-user",
        Role::Assistant => "message message-assistant",
    };

    let content_for_view = content.clone();
    let body = move || {
        if is_editing.get() {
            let submit = submit_edit.clone();
            view! {
                <div class="message-edit">
                    <textarea
                        class="edit-input"
                        data-testid="edit-input"
                        prop:value=move || draft.get()
                        on:input:target=move |ev| draft.set(ev.target().value())
                    ></textarea>
                    <button class="edit-submit" data-testid="edit-submit" on:click=submit>
                        "Submit"
                    </button>
                </div>
            }
            .into_any()
        } else {
            match role {
                Role::Assistant => {
                    let segments = markdown::split_segments(&content_for_view);
                    view! {
                        <div class="message-content">
                            {segments
                                .into_iter()
                                .map(|segment| match segment {
                                    Segment::Html(html) => {
                                        view! {
                                            <div class="message-markdown" inner_html=html></div>
                                        }
                                        .into_any()
                                    }
                                    Segment::Code { language, code } => {
                                        view! {
                                            <CodeBlock
                                                language=language
                                                value=code
                                                color_mode=color_mode
                                            />
                                        }
                                        .into_any()
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    }
                    .into_any()
                }
                Role::User => {
                    let text = content_for_view.clone();
                    view! { <div class="message-content message-plain">{text}</div> }.into_any()
                }
            }
        }
    };

    // Tray exists only in display mode and never while a response is
    // streaming. Hover reveal is pure CSS.
    let tray = move || {
        (!streaming.get() && !is_editing.get()).then(|| {
            let edit = begin_edit.clone();
            view! {
                <div class="message-actions">
                    <button
                        class="action-button"
                        title="Edit"
                        data-testid="edit-button"
                        on:click=edit
                    >
                        "✎"
                    </button>
                    <button
                        class="action-button"
                        title="Delete"
                        data-testid="delete-button"
                        on:click=move |_| on_change.run(MessageIntent::Delete)
                    >
                        "🗑"
                    </button>
                    <button
                        class="action-button"
                        title="Regenerate"
                        data-testid="regenerate-button"
                        on:click=move |_| on_change.run(MessageIntent::Regenerate)
                    >
                        "↻"
                    </button>
                </div>
            }
        })
    };

    view! {
        <div class=move || format!("{} {}", bubble_class, color_mode.get().css_class())>
            <div class="message-role">{role.label()}</div>
            <div class="message-body">{body} {tray}</div>
        </div>
    }
}
