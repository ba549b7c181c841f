// ============================================================================
// APP - Session gate, providers and the section tabs
// ============================================================================

use std::rc::Rc;

use yew::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::{
    ActivitiesScreen, HoursScreen, LoginScreen, NotificationsScreen, ProjectsScreen, ResourcesScreen, VolunteersScreen,
};
use crate::config::AppConfig;
use crate::context::{AuthContext, ToastProvider};
use crate::error::AppError;
use crate::hooks::{use_auth, use_confirm_dialog};
use crate::state::ConfirmRequest;
use crate::stores::{LocalStorageSessionStore, SessionStore};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Section {
    #[default]
    Volunteers,
    Activities,
    Projects,
    Hours,
    Resources,
    Notifications,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Self::Volunteers,
        Self::Activities,
        Self::Projects,
        Self::Hours,
        Self::Resources,
        Self::Notifications,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Volunteers => "Volunteers",
            Self::Activities => "Activities",
            Self::Projects => "Projects",
            Self::Hours => "Hours",
            Self::Resources => "Resources",
            Self::Notifications => "Notifications",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    #[prop_or_else(AppConfig::from_env)]
    pub config: AppConfig,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let store: Rc<dyn SessionStore> = use_memo((), |_| LocalStorageSessionStore);
    let auth = use_auth(store);

    html! {
        <ContextProvider<AppConfig> context={props.config.clone()}>
            <ToastProvider>
                if auth.state.is_logged_in() {
                    <ContextProvider<AuthContext> context={AuthContext { auth: (*auth.state).clone(), logout: auth.logout.clone() }}>
                        <Shell />
                    </ContextProvider<AuthContext>>
                } else {
                    <LoginScreen
                        on_login={auth.login.clone()}
                        logging_in={auth.state.logging_in}
                        error={auth.state.error.clone()}
                    />
                }
            </ToastProvider>
        </ContextProvider<AppConfig>>
    }
}

#[function_component(Shell)]
fn shell() -> Html {
    let Some(context) = use_context::<AuthContext>() else {
        return html! {};
    };
    let section = use_state(Section::default);
    let confirm = use_confirm_dialog();

    let ask_logout = {
        let show = confirm.show_dialog.clone();
        let logout = context.logout.clone();
        Callback::from(move |_: MouseEvent| {
            let logout = logout.clone();
            let request = ConfirmRequest::new("Sign out", "You will need to sign in again to continue.", move || {
                let logout = logout.clone();
                async move {
                    logout.emit(());
                    Ok::<(), AppError>(())
                }
            })
            .confirm_text("Sign out");
            show.emit(request);
        })
    };

    let user_name = context.auth.user().map(|u| u.name.clone()).unwrap_or_default();

    html! {
        <div class="app-shell">
            <header class="app-header">
                <h1>{"Volunteer Admin"}</h1>
                <nav class="tabs">
                    { for Section::ALL.iter().map(|&s| {
                        let onclick = {
                            let section = section.clone();
                            Callback::from(move |_: MouseEvent| section.set(s))
                        };
                        html! {
                            <button class={classes!("tab", (*section == s).then_some("active"))} {onclick}>
                                { s.label() }
                            </button>
                        }
                    }) }
                </nav>
                <div class="header-actions">
                    <span class="user-name">{ user_name }</span>
                    <button class="btn btn-sm" onclick={ask_logout}>{"Sign out"}</button>
                </div>
            </header>

            <main class="app-main">
                { match *section {
                    Section::Volunteers => html! { <VolunteersScreen /> },
                    Section::Activities => html! { <ActivitiesScreen /> },
                    Section::Projects => html! { <ProjectsScreen /> },
                    Section::Hours => html! { <HoursScreen /> },
                    Section::Resources => html! { <ResourcesScreen /> },
                    Section::Notifications => html! { <NotificationsScreen /> },
                } }
            </main>

            <ConfirmDialog
                state={(*confirm.state).clone()}
                on_confirm={confirm.handle_confirm.clone()}
                on_cancel={confirm.hide_dialog.clone()}
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_section_has_a_distinct_label() {
        let mut labels: Vec<&str> = Section::ALL.iter().map(|s| s.label()).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), Section::ALL.len());
        assert_eq!(Section::default(), Section::ALL[0]);
    }
}
