use crate::components::code_block::CodeBlock;
use crate::i18n::t;
use matrix_quest_game::Step;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct QuestStepProps {
    pub quest_id: AttrValue,
    pub step: Step,
    pub checked: bool,
    pub on_toggle: Callback<(String, String)>,
}

#[function_component(QuestStep)]
pub fn quest_step(props: &QuestStepProps) -> Html {
    let on_change = {
        let cb = props.on_toggle.clone();
        let quest_id = props.quest_id.to_string();
        let step_id = props.step.id.clone();
        Callback::from(move |_: Event| cb.emit((quest_id.clone(), step_id.clone())))
    };
    let input_id = format!("{}_{}", props.quest_id, props.step.id);

    html! {
        <li class={classes!("quest-step", props.checked.then_some("done"))}>
            <input type="checkbox" id={input_id.clone()} checked={props.checked} onchange={on_change} />
            <label for={input_id}>{ props.step.text.clone() }</label>
            if let Some(command) = props.step.command.clone() {
                <div class="step-command">
                    <span class="sr-only">{ t("quests.command") }</span>
                    <CodeBlock command={command} />
                </div>
            }
            if let Some(hint) = props.step.hint.clone() {
                <p class="step-hint"><strong>{ t("quests.hint") }{ ": " }</strong>{ hint }</p>
            }
        </li>
    }
}
