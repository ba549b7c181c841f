use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub on_page: Callback<usize>,
}

#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    if props.total_pages <= 1 {
        return html! {
            <div class="pagination">
                <span class="pagination-info">{ format!("{} result(s)", props.total_items) }</span>
            </div>
        };
    }

    let page = props.current_page.clamp(1, props.total_pages);
    let prev = props.on_page.reform(move |_: MouseEvent| page - 1);
    let next = props.on_page.reform(move |_: MouseEvent| page + 1);

    html! {
        <div class="pagination">
            <button class="btn" disabled={page == 1} onclick={prev}>{"‹"}</button>
            <span class="pagination-info">
                { format!("Page {} of {} · {} result(s)", page, props.total_pages, props.total_items) }
            </span>
            <button class="btn" disabled={page == props.total_pages} onclick={next}>{"›"}</button>
        </div>
    }
}
