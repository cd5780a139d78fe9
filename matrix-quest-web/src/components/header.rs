use crate::i18n::{locales, t};
use yew::html::TargetCast;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub snow_enabled: bool,
    pub on_toggle_snow: Callback<()>,
    pub on_lang_change: Callback<String>,
    pub current_lang: String,
}

#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    let on_change = {
        let cb = p.on_lang_change.clone();
        Callback::from(move |e: Event| {
            if let Some(sel) = e.target_dyn_into::<web_sys::HtmlSelectElement>() {
                cb.emit(sel.value());
            }
        })
    };
    let toggle_snow = {
        let cb = p.on_toggle_snow.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let snow_label = if p.snow_enabled { t("snow.on") } else { t("snow.off") };
    html! {
        <header role="banner">
            <a href="#main" class="sr-only">{ t("ui.skip_to_content") }</a>
            <div class="header-content">
                <span class="app-title">{ t("app.title") }</span>
                <nav aria-label={t("nav.language")} class="header-right">
                    <label for="lang-select" class="sr-only">{ t("nav.language") }</label>
                    <select id="lang-select" onchange={on_change} aria-label={t("nav.language")}>
                        { for locales().iter().map(|meta| html! {
                            <option value={meta.code} selected={meta.code == p.current_lang}>{ meta.name }</option>
                        }) }
                    </select>
                    <button
                        type="button"
                        class="snow-toggle"
                        aria-pressed={p.snow_enabled.to_string()}
                        aria-label={t("snow.label")}
                        onclick={toggle_snow}
                    >
                        { snow_label }
                    </button>
                </nav>
            </div>
        </header>
    }
}
