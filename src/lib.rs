pub mod app;
pub mod components;
pub mod highlight;
pub mod markdown;
pub mod message;

pub use app::App;
pub use components::code_block::CodeBlock;
pub use components::message::ChatMessage;
pub use message::{ColorMode, Message, MessageIntent, Role};

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(App);
}
