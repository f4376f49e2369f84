use crate::core::config::SiteConfig;
use crate::core::session::View;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct FooterProps {
    pub config: SiteConfig,
    pub on_navigate: Callback<View>,
}

#[function_component(Footer)]
pub(crate) fn footer(props: &FooterProps) -> Html {
    let config = &props.config;
    html! {
        <footer class="footer bg-neutral text-neutral-content p-10">
            <aside>
                <p class="text-2xl font-bold">{config.brand.clone()}</p>
                <p class="max-w-xs">{config.tagline.clone()}</p>
            </aside>
            <nav>
                <h6 class="footer-title">{"Explore"}</h6>
                {for View::NAV.into_iter().map(|view| {
                    let on_navigate = props.on_navigate.clone();
                    html! {
                        <button class="link link-hover" onclick={Callback::from(move |_| on_navigate.emit(view))}>
                            {view.label()}
                        </button>
                    }
                })}
            </nav>
            <nav>
                <h6 class="footer-title">{"Contact"}</h6>
                <span>{config.support_phone.clone()}</span>
                <span>{config.support_email.clone()}</span>
                <span>{config.office_address.clone()}</span>
            </nav>
        </footer>
    }
}
