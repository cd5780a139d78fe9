use crate::i18n::t;
use yew::prelude::*;

const COPIED_FEEDBACK_MS: i32 = 2_000;

#[derive(Properties, PartialEq, Clone)]
pub struct CodeBlockProps {
    pub command: AttrValue,
}

/// Shell command with a copy-to-clipboard button.
#[function_component(CodeBlock)]
pub fn code_block(props: &CodeBlockProps) -> Html {
    let copied = use_state(|| false);

    let on_copy = {
        let copied = copied.clone();
        let command = props.command.clone();
        Callback::from(move |_| {
            let copied = copied.clone();
            let command = command.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(err) = crate::dom::copy_to_clipboard(&command).await {
                    log::warn!("clipboard write failed: {}", crate::dom::js_error_message(&err));
                    return;
                }
                copied.set(true);
                let _ = crate::dom::sleep_ms(COPIED_FEEDBACK_MS).await;
                copied.set(false);
            });
        })
    };

    html! {
        <div class="code-block">
            <pre><code>{ props.command.clone() }</code></pre>
            <button type="button" class="copy-btn" onclick={on_copy} aria-live="polite">
                { if *copied { t("code.copied") } else { t("code.copy") } }
            </button>
        </div>
    }
}
