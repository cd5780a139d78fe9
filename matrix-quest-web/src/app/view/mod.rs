mod handlers;
mod phases;

pub use handlers::AppHandlers;

use crate::app::state::AppState;
use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::Navigator;

pub fn render_app(state: &AppState, route: Option<&Route>, navigator: Option<Navigator>) -> Html {
    let handlers = AppHandlers::new(state, navigator);
    let main_view = phases::render_main_view(state, &handlers, route);

    html! {
        <>
            <crate::components::header::Header
                snow_enabled={*state.snow_enabled}
                on_toggle_snow={handlers.toggle_snow.clone()}
                on_lang_change={handlers.lang_change.clone()}
                current_lang={(*state.current_language).clone()}
            />
            <main id="main" role="main">
                <style>{ crate::a11y::visible_focus_css() }</style>
                <div id={crate::a11y::STATUS_REGION_ID} class="sr-only" role="status" aria-live="polite"></div>
                { main_view }
            </main>
        </>
    }
}
