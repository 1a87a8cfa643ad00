use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FaqItemProps {
    pub index: usize,
    pub question: &'static str,
    pub answer: &'static str,
    pub expanded: bool,
    pub on_toggle: Callback<usize>,
}

#[function_component(FaqItem)]
pub fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        let index = props.index;
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(index);
        })
    };

    html! {
        <div class={classes!("faq-item", props.expanded.then(|| "open"))}>
            <button class="faq-question" onclick={toggle}>
                <h4>{props.question}</h4>
                <span class={classes!("chevron", props.expanded.then(|| "rotated"))}>{"▾"}</span>
            </button>
            <div class="faq-answer">
                <p>{props.answer}</p>
            </div>
        </div>
    }
}
