use crate::i18n::fmt_pct;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ProgressBarProps {
    /// 0-100.
    pub value: f64,
    pub label: AttrValue,
}

#[function_component(ProgressBar)]
pub fn progress_bar(props: &ProgressBarProps) -> Html {
    let pct = fmt_pct(props.value);
    let width = format!("width:{pct}%");
    html! {
        <div
            class="progress"
            role="progressbar"
            aria-label={props.label.clone()}
            aria-valuemin="0"
            aria-valuemax="100"
            aria-valuenow={pct}
        >
            <div class="progress-fill" style={width}></div>
        </div>
    }
}
