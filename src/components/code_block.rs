use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

use crate::highlight;
use crate::message::ColorMode;

const COPY_RESET_MS: u32 = 2_000;

/// Presentational view of one fenced code block: language header, copy
/// button, highlighted body. No callbacks; the only local state is the
/// transient "copied" flag.
#[component]
pub fn CodeBlock(
    language: Option<String>,
    value: String,
    #[prop(into)] color_mode: Signal<ColorMode>,
) -> impl IntoView {
    let copied = RwSignal::new(false);

    let label = language.clone().unwrap_or_else(|| "code".to_string());

    let clip_value = value.clone();
    let on_copy = move |_| {
        let Some(window) = web_sys::window() else {
            return;
        };
        let _ = window.navigator().clipboard().write_text(&clip_value);
        copied.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            TimeoutFuture::new(COPY_RESET_MS).await;
            copied.set(false);
        });
    };

    let body = move || {
        let mode = color_mode.get();
        let highlighted = language
            .as_deref()
            .and_then(|lang| highlight::highlight_html(&value, lang, mode));
        match highlighted {
            Some(html) => view! { <div class="code-block-body" inner_html=html></div> }.into_any(),
            None => {
                let plain = value.clone();
                view! {
                    <pre class="code-block-body">
                        <code>{plain}</code>
                    </pre>
                }
                .into_any()
            }
        }
    };

    view! {
        <div class="code-block">
            <div class="code-block-header">
                <span class="code-block-lang">{label}</span>
                <button class="code-block-copy" data-testid="copy-code-button" on:click=on_copy>
                    {move || if copied.get() { "Copied!" } else { "Copy" }}
                </button>
            </div>
            {body}
        </div>
    }
}
