use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use log::debug;

use crate::components::message::ChatMessage;
use crate::message::{ColorMode, Message, MessageIntent, Role};

const REGENERATED: &str = "Regenerated answer. Ask again for more detail.";

/// Demo harness standing in for the conversation controller: owns the
/// message list, the streaming flag, and the color mode, and applies the
/// intents the message views emit.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let messages = RwSignal::new(seed_conversation());
    let streaming = RwSignal::new(false);
    let color_mode = RwSignal::new(ColorMode::Dark);

    let apply_intent = move |index: usize, intent: MessageIntent| {
        messages.update(|msgs| {
            if index >= msgs.len() {
                return;
            }
            match intent {
                MessageIntent::Delete => {
                    debug!("delete message {index}");
                    msgs.remove(index);
                }
                MessageIntent::Edit(text) => {
                    debug!("edit message {index} ({} chars)", text.len());
                    msgs[index].content = text;
                }
                MessageIntent::Regenerate => {
                    // Only assistant turns can be regenerated.
                    if msgs[index].role == Role::Assistant {
                        debug!("regenerate message {index}");
                        msgs[index].content = REGENERATED.to_string();
                    }
                }
            }
        });
    };

    let toggle_mode = move |_| {
        color_mode.update(|m| *m = m.toggled());
        debug!("color mode -> {:?}", color_mode.get_untracked());
    };

    let toggle_streaming = move |_| streaming.update(|s| *s = !*s);

    view! {
        <style>{STYLES}</style>
        <Title text="plume"/>
        <main class=move || format!("app {}", color_mode.get().css_class())>
            <header class="app-header">
                <h1>"plume"</h1>
                <div class="header-controls">
                    <button
                        class="header-toggle"
                        data-testid="streaming-toggle"
                        on:click=toggle_streaming
                    >
                        {move || {
                            if streaming.get() { "Stop streaming" } else { "Simulate streaming" }
                        }}
                    </button>
                    <button class="header-toggle" data-testid="mode-toggle" on:click=toggle_mode>
                        {move || {
                            match color_mode.get() {
                                ColorMode::Light => "Dark mode",
                                ColorMode::Dark => "Light mode",
                            }
                        }}
                    </button>
                </div>
            </header>
            <div class="message-list">
                {move || {
                    messages
                        .get()
                        .into_iter()
                        .enumerate()
                        .map(|(index, msg)| {
                            let on_change = Callback::new(move |intent| {
                                apply_intent(index, intent)
                            });
                            view! {
                                <ChatMessage
                                    message=msg
                                    color_mode=color_mode
                                    streaming=streaming
                                    on_change=on_change
                                />
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
        </main>
    }
}

fn seed_conversation() -> Vec<Message> {
    vec![
        Message::user("Show me a minimal Rust program.\nAnd a table, please."),
        Message::assistant(
            "Sure. A minimal `main`:\n\n\
             ```rust\nfn main() {\n    println!(\"hello\");\n}\n```\n\n\
             | Crate | Purpose |\n| ----- | ------- |\n\
             | leptos | components |\n| pulldown-cmark | markdown |\n",
        ),
    ]
}

const STYLES: &str = r#"
    * {
        margin: 0;
        padding: 0;
        box-sizing: border-box;
    }

    body {
        background: #1a1a2e;
        color: #e0e0e0;
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
        height: 100vh;
        overflow: hidden;
    }

    .app {
        display: flex;
        flex-direction: column;
        height: 100vh;
        max-width: 900px;
        margin: 0 auto;
    }

    .app.light {
        background: #fafafa;
        color: #222;
    }

    .app-header {
        display: flex;
        align-items: center;
        justify-content: space-between;
        padding: 12px 16px;
        border-bottom: 1px solid #2a2a4a;
    }

    .app.light .app-header {
        border-bottom-color: #ddd;
    }

    .app-header h1 {
        font-size: 1.1rem;
        font-weight: 600;
        color: #8888cc;
    }

    .header-controls {
        display: flex;
        gap: 8px;
    }

    .header-toggle {
        background: #222240;
        color: #aaaadd;
        border: 1px solid #3a3a5a;
        border-radius: 6px;
        padding: 4px 10px;
        font-size: 0.85rem;
        cursor: pointer;
    }

    .app.light .header-toggle {
        background: #eee;
        color: #446;
        border-color: #ccc;
    }

    .message-list {
        flex: 1;
        overflow-y: auto;
        padding: 16px;
        display: flex;
        flex-direction: column;
        gap: 12px;
    }

    .message {
        display: flex;
        gap: 10px;
        padding: 10px 14px;
        border-radius: 12px;
        line-height: 1.5;
        word-wrap: break-word;
        position: relative;
    }

    .message-user {
        background: #2a4a8a;
        color: #e0e8ff;
    }

    .message-assistant {
        background: #2a2a3e;
        color: #d0d0e0;
    }

    .message-user.light {
        background: #dce8ff;
        color: #223;
    }

    .message-assistant.light {
        background: #efefef;
        color: #222;
    }

    .message-role {
        font-weight: 700;
        min-width: 40px;
    }

    .message-body {
        flex: 1;
        min-width: 0;
    }

    .message-plain {
        white-space: pre-wrap;
    }

    .message-markdown p {
        margin: 0.4em 0;
    }

    .message-markdown p:first-child {
        margin-top: 0;
    }

    .message-markdown p:last-child {
        margin-bottom: 0;
    }

    .message-markdown pre {
        background: #111122;
        padding: 10px;
        border-radius: 6px;
        overflow-x: auto;
        margin: 0.5em 0;
    }

    .message-markdown code {
        font-family: "JetBrains Mono", "Fira Code", monospace;
        font-size: 0.9em;
        background: #111122;
        padding: 2px 5px;
        border-radius: 3px;
    }

    .message-markdown pre code {
        background: none;
        padding: 0;
    }

    .light .message-markdown pre,
    .light .message-markdown code {
        background: #e4e4e4;
        color: #222;
    }

    .message-markdown table {
        border-collapse: collapse;
        margin: 0.5em 0;
    }

    .message-markdown th,
    .message-markdown td {
        border: 1px solid #5a5a8a;
        padding: 4px 10px;
        word-break: break-word;
    }

    .message-markdown th {
        background: #3a3a5a;
        color: #e0e0f0;
    }

    .light .message-markdown th,
    .light .message-markdown td {
        border-color: #999;
    }

    .light .message-markdown th {
        background: #ddd;
        color: #222;
    }

    .code-block {
        margin: 0.5em 0;
        border-radius: 6px;
        overflow: hidden;
        background: #111122;
    }

    .light .code-block {
        background: #f4f4f4;
        border: 1px solid #ddd;
    }

    .code-block-header {
        display: flex;
        align-items: center;
        justify-content: space-between;
        padding: 4px 10px;
        font-size: 0.8rem;
        background: #1c1c30;
        color: #8888cc;
    }

    .light .code-block-header {
        background: #e8e8e8;
        color: #557;
    }

    .code-block-lang {
        font-family: "JetBrains Mono", "Fira Code", monospace;
    }

    .code-block-copy {
        background: none;
        border: none;
        color: inherit;
        font-size: 0.8rem;
        cursor: pointer;
    }

    .code-block-copy:hover {
        text-decoration: underline;
    }

    .code-block-body {
        overflow-x: auto;
    }

    .code-block-body pre {
        margin: 0;
        padding: 10px;
        font-family: "JetBrains Mono", "Fira Code", monospace;
        font-size: 0.9em;
    }

    .message-actions {
        position: absolute;
        bottom: 6px;
        right: 8px;
        display: flex;
        gap: 6px;
        padding: 4px 6px;
        border-radius: 6px;
        background: #222240;
        opacity: 0;
        transition: opacity 0.3s;
    }

    .light .message-actions {
        background: #e4e4e4;
    }

    .message:hover .message-actions {
        opacity: 1;
    }

    .action-button {
        background: none;
        border: none;
        color: inherit;
        font-size: 0.95rem;
        cursor: pointer;
    }

    .action-button:hover {
        color: #8888cc;
    }

    .message-edit {
        display: flex;
        flex-direction: column;
        gap: 8px;
    }

    .edit-input {
        width: 100%;
        min-height: 96px;
        background: #222240;
        color: #e0e0e0;
        border: 1px solid #3a3a5a;
        border-radius: 8px;
        padding: 10px 12px;
        font-family: inherit;
        font-size: 0.95rem;
        resize: vertical;
        outline: none;
    }

    .edit-input:focus {
        border-color: #5a5a8a;
    }

    .light .edit-input {
        background: #fff;
        color: #222;
        border-color: #ccc;
    }

    .edit-submit {
        align-self: flex-end;
        background: #3a5aaa;
        color: #e0e8ff;
        border: none;
        border-radius: 8px;
        padding: 8px 20px;
        font-size: 0.9rem;
        cursor: pointer;
    }

    .edit-submit:hover {
        background: #4a6abb;
    }
"#;
