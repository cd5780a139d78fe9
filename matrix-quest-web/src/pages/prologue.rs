use crate::i18n::{t, tr};
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct ProloguePageProps {
    pub player_name: AttrValue,
    pub server_ip: AttrValue,
    pub on_continue: Callback<()>,
}

#[function_component(ProloguePage)]
pub fn prologue_page(props: &ProloguePageProps) -> Html {
    let on_continue = {
        let cb = props.on_continue.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let mut args = BTreeMap::new();
    args.insert("name", props.player_name.as_str());
    args.insert("ip", props.server_ip.as_str());

    html! {
        <section class="panel prologue" aria-labelledby="prologue-title" data-testid="prologue">
            <h1 id="prologue-title">{ t("prologue.title") }</h1>
            <p class="greeting">{ tr("prologue.greeting", Some(&args)) }</p>
            <p>{ t("prologue.body") }</p>
            <p class="muted">{ tr("prologue.server", Some(&args)) }</p>
            <button type="button" class="retro-btn-primary" onclick={on_continue} data-testid="prologue-continue">
                { t("prologue.continue") }
            </button>
        </section>
    }
}
