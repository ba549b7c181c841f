use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub open: bool,
    pub title: AttrValue,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub footer: Option<Html>,
}

#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    if !props.open {
        return html! {};
    }
    let close = props.on_close.reform(|_: MouseEvent| ());

    html! {
        <div class="modal active">
            <div class="modal-overlay" onclick={close.clone()}></div>
            <div class="modal-content" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                <div class="modal-header">
                    <h2>{ &props.title }</h2>
                    <button class="btn-close" onclick={close}>{"✕"}</button>
                </div>
                <div class="modal-body">
                    { props.children.clone() }
                </div>
                if let Some(footer) = &props.footer {
                    <div class="modal-footer">{ footer.clone() }</div>
                }
            </div>
        </div>
    }
}
