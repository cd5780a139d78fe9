use crate::i18n::t;
use yew::prelude::*;

/// Shown for URLs that match no route.
#[derive(Properties, PartialEq)]
pub struct Props {
    pub on_go_home: Callback<()>,
}

#[function_component(NotFound)]
pub fn not_found(props: &Props) -> Html {
    let go_home = {
        let cb = props.on_go_home.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <section class="panel not-found" aria-live="assertive" data-testid="not-found">
            <h1>{ "404 · " }{ t("not_found.title") }</h1>
            <p>{ t("not_found.message") }</p>
            <button type="button" class="retro-btn-primary" onclick={go_home}>
                { t("not_found.back") }
            </button>
        </section>
    }
}
