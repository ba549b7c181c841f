use yew::prelude::*;

use crate::components::pagination::Pagination;
use crate::components::search_bar::{FilterSelect, SearchBar};
use crate::context::{use_api_client, use_config, use_toast};
use crate::error::AppError;
use crate::hooks::{use_fetch, use_search_and_filter};
use crate::models::{Notification, Toast};
use crate::services::NotificationApi;
use crate::state::SearchFilterState;
use crate::utils::constants::MAIN_FILTER;
use crate::viewmodels::outcome;

const SEARCH_FIELDS: [&str; 2] = ["title", "message"];

/// Notifications searchable by text; the main filter is `read` / `unread`.
pub fn notification_search(rows: Vec<Notification>) -> SearchFilterState<Notification> {
    SearchFilterState::new(rows, &SEARCH_FIELDS)
        .register_filter(MAIN_FILTER, |n: &Notification, state| n.read_state() == state)
}

pub fn unread_count(rows: &[Notification]) -> usize {
    rows.iter().filter(|n| !n.read).count()
}

pub async fn mark_read<A: NotificationApi + ?Sized>(
    api: &A,
    id: &str,
    notify: &dyn Fn(Toast),
) -> Result<Notification, AppError> {
    let result = api.mark_notification_read(id).await;
    if let Some(toast) = outcome::notification_marked_read(&result) {
        notify(toast);
    }
    result.map_err(AppError::from)
}

#[function_component(NotificationsScreen)]
pub fn notifications_screen() -> Html {
    let client = use_api_client();
    let notify = use_toast();
    let items_per_page = use_config().items_per_page;
    let notifications = use_fetch(client.clone(), |client| async move { client.list_notifications().await });
    let rows = notifications.state.rows();
    let search = use_search_and_filter(rows.clone(), move |rows| {
        notification_search(rows).with_items_per_page(items_per_page)
    });

    let on_mark_read = {
        let refetch = notifications.refetch.clone();
        Callback::from(move |id: String| {
            let client = client.clone();
            let notify = notify.clone();
            let refetch = refetch.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if mark_read(&client, &id, &|t| notify.emit(t)).await.is_ok() {
                    refetch.emit(());
                }
            });
        })
    };

    let read_options = vec![
        ("unread".to_string(), "Unread".to_string()),
        ("read".to_string(), "Read".to_string()),
    ];
    let page_rows: Vec<Notification> = search.state.paginated_data().into_iter().cloned().collect();

    html! {
        <section class="page notifications-page">
            <header class="page-header">
                <h1>{"Notifications"}</h1>
                <span class="badge">{ format!("{} unread", unread_count(&rows)) }</span>
            </header>

            <div class="toolbar">
                <SearchBar on_search={search.set_search_term.clone()} placeholder="Search notifications" />
                <FilterSelect
                    value={search.state.main_filter().to_string()}
                    options={read_options}
                    on_change={search.set_main_filter.clone()}
                />
            </div>

            if notifications.is_loading() {
                <p class="loading">{"Loading notifications..."}</p>
            } else if let Some(error) = notifications.state.error() {
                <p class="error">{ format!("Could not load notifications: {}", error) }</p>
            } else if page_rows.is_empty() {
                <p class="empty">{"No notifications."}</p>
            } else {
                <ul class="notification-list">
                    { for page_rows.into_iter().map(|n| {
                        let mark = {
                            let id = n.id.clone();
                            on_mark_read.reform(move |_: MouseEvent| id.clone())
                        };
                        html! {
                            <li key={n.id.clone()} class={classes!("notification", (!n.read).then_some("unread"))}>
                                <strong>{ &n.title }</strong>
                                if let Some(at) = n.created_at {
                                    <span class="muted">{ at.format("%Y-%m-%d %H:%M").to_string() }</span>
                                }
                                <p>{ &n.message }</p>
                                if !n.read {
                                    <button class="btn btn-sm" onclick={mark}>{"Mark as read"}</button>
                                }
                            </li>
                        }
                    }) }
                </ul>
            }

            <Pagination
                current_page={search.state.current_page()}
                total_pages={search.state.total_pages()}
                total_items={search.state.total_items()}
                on_page={search.set_current_page.clone()}
            />
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::SearchAction;
    use crate::viewmodels::test_support::{notification, FakeApi, ToastLog};
    use futures::executor::block_on;

    #[test]
    fn read_filter_splits_the_list() {
        let rows = vec![
            notification("n1", "Shift reminder", false),
            notification("n2", "New volunteer signed up", true),
            notification("n3", "Shift cancelled", false),
        ];
        assert_eq!(unread_count(&rows), 2);
        let mut state = notification_search(rows);

        state.apply(SearchAction::SetMainFilter("unread".into()));
        state.apply(SearchAction::SetSearchTerm("shift".into()));

        let ids: Vec<&str> = state.filtered_data().iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["n1", "n3"]);
    }

    #[test]
    fn mark_read_is_silent_on_success_and_toasts_on_failure() {
        let api = FakeApi::new();
        api.notifications.borrow_mut().push(notification("n1", "Shift reminder", false));
        let toasts = ToastLog::default();

        let read = block_on(mark_read(&api, "n1", &|t| toasts.push(t))).unwrap();
        assert!(read.read);
        assert!(toasts.is_empty());

        api.fail_next(FakeApi::server_error());
        assert!(block_on(mark_read(&api, "n1", &|t| toasts.push(t))).is_err());
        assert_eq!(toasts.0.borrow()[0].description, "Failed to mark notification as read. Please try again.");
    }
}
