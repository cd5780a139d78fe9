use crate::i18n::t;
use matrix_quest_game::Registration;
use yew::html::TargetCast;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct WelcomePageProps {
    /// Prefilled from the stored record.
    pub initial: Registration,
    pub on_start: Callback<Registration>,
}

fn input_setter<F>(form: &UseStateHandle<Registration>, apply: F) -> Callback<InputEvent>
where
    F: Fn(&mut Registration, String) + 'static,
{
    let form = form.clone();
    Callback::from(move |e: InputEvent| {
        if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
            let mut next = (*form).clone();
            apply(&mut next, input.value());
            form.set(next);
        }
    })
}

#[function_component(WelcomePage)]
pub fn welcome_page(props: &WelcomePageProps) -> Html {
    let form = {
        let initial = props.initial.clone();
        use_state(move || initial)
    };

    let on_name = input_setter(&form, |reg, value| reg.player_name = value);
    let on_ip = input_setter(&form, |reg, value| reg.server_ip = value);
    let on_password = input_setter(&form, |reg, value| reg.server_password = value);

    let ready = form.is_complete();
    let on_submit = {
        let form = form.clone();
        let cb = props.on_start.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if form.is_complete() {
                cb.emit((*form).clone());
            }
        })
    };

    html! {
        <section class="panel welcome" aria-labelledby="welcome-title" data-testid="welcome">
            <h1 id="welcome-title">{ t("welcome.title") }</h1>
            <p class="muted">{ t("welcome.subtitle") }</p>
            <form onsubmit={on_submit}>
                <label for="player-name">{ t("welcome.name_label") }</label>
                <input id="player-name" type="text" autocomplete="nickname"
                    placeholder={t("welcome.name_placeholder")}
                    value={form.player_name.clone()} oninput={on_name} />
                <label for="server-ip">{ t("welcome.ip_label") }</label>
                <input id="server-ip" type="text" inputmode="decimal"
                    placeholder={t("welcome.ip_placeholder")}
                    value={form.server_ip.clone()} oninput={on_ip} />
                <label for="server-password">{ t("welcome.password_label") }</label>
                <input id="server-password" type="password" autocomplete="off"
                    value={form.server_password.clone()} oninput={on_password} />
                <p class="muted small">{ t("welcome.password_note") }</p>
                if !ready {
                    <p class="hint" id="welcome-hint">{ t("welcome.fill_all") }</p>
                }
                <button type="submit" class="retro-btn-primary" disabled={!ready} data-testid="welcome-start">
                    { t("welcome.start") }
                </button>
            </form>
        </section>
    }
}
