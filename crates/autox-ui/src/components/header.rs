//! Top bar, brand, navigation and session controls.
//!
//! # Design
//! - Stateless: every interaction is emitted to the app shell.
//! - Desktop nav and the mobile drawer render the same entries.

use crate::core::config::SiteConfig;
use crate::core::session::View;
use crate::features::auth::view::ProfileMenu;
use autox_models::{User, UserUpdate};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct HeaderProps {
    pub config: SiteConfig,
    pub user: Option<User>,
    pub current: View,
    pub menu_open: bool,
    pub on_navigate: Callback<View>,
    pub on_auth: Callback<()>,
    pub on_logout: Callback<()>,
    pub on_update_profile: Callback<UserUpdate>,
    pub on_toggle_menu: Callback<()>,
}

#[function_component(Header)]
pub(crate) fn header(props: &HeaderProps) -> Html {
    let nav_item = |view: View, mobile: bool| {
        let on_navigate = props.on_navigate.clone();
        let active = props.current == view;
        let class = if mobile {
            classes!("btn", "btn-ghost", "justify-start", "w-full", active.then_some("btn-active"))
        } else {
            classes!("btn", "btn-ghost", "btn-sm", active.then_some("text-warning"))
        };
        html! {
            <li>
                <button class={class} onclick={Callback::from(move |_| on_navigate.emit(view))}>
                    {view.label()}
                </button>
            </li>
        }
    };
    let on_home = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_| on_navigate.emit(View::Home))
    };
    let on_auth = props.on_auth.reform(|_: MouseEvent| ());
    let on_toggle = props.on_toggle_menu.reform(|_: MouseEvent| ());

    html! {
        <>
            <div class="bg-neutral text-neutral-content text-sm py-2">
                <div class="max-w-7xl mx-auto px-4 flex justify-between items-center">
                    <span>{format!("24/7 Support: {}", props.config.support_phone)}</span>
                    <span class="hidden md:block">{"Delivery to all 25 districts"}</span>
                </div>
            </div>
            <header class="navbar bg-base-100 shadow-lg sticky top-0 z-40">
                <div class="max-w-7xl mx-auto w-full px-4 flex items-center justify-between">
                    <button class="flex items-center gap-3" onclick={on_home}>
                        <span class="bg-warning rounded-xl p-3 font-black text-warning-content">{"AX"}</span>
                        <span class="text-left">
                            <span class="block text-2xl font-bold">{props.config.brand.clone()}</span>
                            <span class="block text-xs text-base-content/60">{"Construction Solutions"}</span>
                        </span>
                    </button>
                    <ul class="hidden lg:flex menu menu-horizontal gap-2">
                        {for View::NAV.into_iter().map(|view| nav_item(view, false))}
                    </ul>
                    <div class="flex items-center gap-3">
                        {match &props.user {
                            Some(user) => html! {
                                <ProfileMenu
                                    user={user.clone()}
                                    on_logout={props.on_logout.clone()}
                                    on_update={props.on_update_profile.clone()}
                                />
                            },
                            None => html! {
                                <button class="btn btn-warning" onclick={on_auth}>{"Sign In"}</button>
                            },
                        }}
                        <button class="btn btn-ghost lg:hidden" aria-label="Toggle menu" onclick={on_toggle}>
                            {if props.menu_open { "✕" } else { "☰" }}
                        </button>
                    </div>
                </div>
            </header>
            {if props.menu_open {
                html! {
                    <ul class="lg:hidden menu bg-base-100 shadow-lg p-4 w-full">
                        {for View::NAV.into_iter().map(|view| nav_item(view, true))}
                    </ul>
                }
            } else {
                html! {}
            }}
        </>
    }
}
