use crate::i18n::{fmt_date_iso, t, tr};
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct FinalePageProps {
    pub player_name: AttrValue,
    #[prop_or_default]
    pub started_at: Option<String>,
    pub achievements: usize,
    /// Every rank earned, in chapter order.
    pub ranks: Vec<String>,
    pub on_back: Callback<()>,
}

#[function_component(FinalePage)]
pub fn finale_page(props: &FinalePageProps) -> Html {
    let on_back = {
        let cb = props.on_back.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let count = props.achievements.to_string();
    let date = props.started_at.as_deref().map(fmt_date_iso);
    let mut args = BTreeMap::new();
    args.insert("name", props.player_name.as_str());
    args.insert("count", count.as_str());
    if let Some(date) = date.as_deref() {
        args.insert("date", date);
    }

    html! {
        <section class="panel finale" aria-labelledby="finale-title" data-testid="finale">
            <h1 id="finale-title">{ "🐇 " }{ t("finale.title") }</h1>
            <p>{ tr("finale.body", Some(&args)) }</p>
            if date.is_some() {
                <p class="muted">{ tr("finale.started", Some(&args)) }</p>
            }
            <p class="achievements">{ tr("finale.achievements", Some(&args)) }</p>
            <ol class="ranks">
                { for props.ranks.iter().map(|rank| html! { <li>{ rank.clone() }</li> }) }
            </ol>
            <button type="button" class="retro-btn-primary" onclick={on_back} data-testid="finale-back">
                { t("finale.back") }
            </button>
        </section>
    }
}
