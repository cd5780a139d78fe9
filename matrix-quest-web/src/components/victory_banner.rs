use crate::i18n::{t, tr};
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct VictoryBannerProps {
    pub rank: AttrValue,
    pub on_next: Callback<()>,
}

/// Shown above the quest list once the whole chapter is done.
#[function_component(VictoryBanner)]
pub fn victory_banner(props: &VictoryBannerProps) -> Html {
    let on_next = {
        let cb = props.on_next.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let mut args = BTreeMap::new();
    args.insert("rank", props.rank.as_str());
    html! {
        <section class="victory" aria-live="polite" data-testid="victory">
            <h2>{ "🏆 " }{ t("victory.title") }</h2>
            <p class="rank">{ tr("victory.rank", Some(&args)) }</p>
            <button type="button" class="retro-btn-primary" onclick={on_next}>
                { t("victory.next") }
            </button>
        </section>
    }
}
