use crate::components::modal::Modal;
use crate::features::auth::state::{AuthForm, AuthMode, ProfileForm};
use autox_models::{User, UserUpdate};
use yew::prelude::*;

fn input_value(e: &InputEvent) -> Option<String> {
    e.target_dyn_into::<web_sys::HtmlInputElement>()
        .map(|input| input.value())
}

#[derive(Properties, PartialEq)]
pub(crate) struct AuthModalProps {
    pub on_close: Callback<()>,
    pub on_login: Callback<User>,
}

#[function_component(AuthModal)]
pub(crate) fn auth_modal(props: &AuthModalProps) -> Html {
    let form = use_state(AuthForm::default);
    let error = use_state(|| None::<String>);

    let bind = |apply: fn(&mut AuthForm, String)| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(value) = input_value(&e) {
                let mut next = (*form).clone();
                apply(&mut next, value);
                form.set(next);
            }
        })
    };
    let on_name = bind(|f, v| f.name = v);
    let on_email = bind(|f, v| f.email = v);
    let on_phone = bind(|f, v| f.phone = v);
    let on_password = bind(|f, v| f.password = v);

    let on_toggle = {
        let form = form.clone();
        let error = error.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*form).clone();
            next.toggle_mode();
            form.set(next);
            error.set(None);
        })
    };
    let on_submit = {
        let form = form.clone();
        let error = error.clone();
        let on_login = props.on_login.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match form.to_user() {
                Ok(user) => on_login.emit(user),
                Err(err) => error.set(Some(err.to_string())),
            }
        })
    };

    let mode = form.mode;
    let subtitle = match mode {
        AuthMode::SignIn => "Sign in to request materials and vehicles",
        AuthMode::SignUp => "Join thousands of builders across Sri Lanka",
    };
    let toggle_hint = match mode {
        AuthMode::SignIn => "Don't have an account? Sign up",
        AuthMode::SignUp => "Already have an account? Sign in",
    };

    html! {
        <Modal
            title={mode.title()}
            subtitle={Some(AttrValue::from(subtitle))}
            class="max-w-md"
            on_close={props.on_close.clone()}
        >
            <form class="space-y-4" onsubmit={on_submit}>
                {if mode == AuthMode::SignUp {
                    html! {
                        <>
                            <input class="input input-bordered w-full" placeholder="Full name"
                                value={form.name.clone()} oninput={on_name} />
                            <input class="input input-bordered w-full" type="tel" placeholder="Phone (optional)"
                                value={form.phone.clone()} oninput={on_phone} />
                        </>
                    }
                } else {
                    html! {}
                }}
                <input class="input input-bordered w-full" type="email" placeholder="Email address"
                    value={form.email.clone()} oninput={on_email} />
                <input class="input input-bordered w-full" type="password" placeholder="Password"
                    value={form.password.clone()} oninput={on_password} />
                {(*error).clone().map(|message| html! {
                    <div class="alert alert-error text-sm" role="alert">{message}</div>
                }).unwrap_or_default()}
                <button type="submit" class="btn btn-warning w-full">{mode.submit_label()}</button>
            </form>
            <button type="button" class="btn btn-link w-full mt-2" onclick={on_toggle}>{toggle_hint}</button>
        </Modal>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct ProfileMenuProps {
    pub user: User,
    pub on_logout: Callback<()>,
    pub on_update: Callback<UserUpdate>,
}

/// Avatar dropdown with an inline profile editor.
#[function_component(ProfileMenu)]
pub(crate) fn profile_menu(props: &ProfileMenuProps) -> Html {
    let open = use_state(|| false);
    let editing = use_state(|| None::<ProfileForm>);

    let on_toggle = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(!*open))
    };
    let on_edit = {
        let editing = editing.clone();
        let user = props.user.clone();
        Callback::from(move |_: MouseEvent| editing.set(Some(ProfileForm::from_user(&user))))
    };
    let on_logout = {
        let open = open.clone();
        let on_logout = props.on_logout.clone();
        Callback::from(move |_: MouseEvent| {
            open.set(false);
            on_logout.emit(());
        })
    };
    let bind = |apply: fn(&mut ProfileForm, String)| {
        let editing = editing.clone();
        Callback::from(move |e: InputEvent| {
            if let (Some(value), Some(current)) = (input_value(&e), (*editing).clone()) {
                let mut next = current;
                apply(&mut next, value);
                editing.set(Some(next));
            }
        })
    };
    let on_save = {
        let editing = editing.clone();
        let open = open.clone();
        let user = props.user.clone();
        let on_update = props.on_update.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let Some(form) = (*editing).clone() {
                on_update.emit(form.to_update(&user));
            }
            editing.set(None);
            open.set(false);
        })
    };
    let on_cancel = {
        let editing = editing.clone();
        Callback::from(move |_: MouseEvent| editing.set(None))
    };

    let initial = props
        .user
        .name
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_default();

    html! {
        <div class="relative">
            <button class="btn btn-ghost gap-2" onclick={on_toggle}>
                <span class="avatar placeholder">
                    <span class="bg-warning text-warning-content rounded-full w-8">{initial}</span>
                </span>
                <span class="hidden md:inline">{props.user.name.clone()}</span>
            </button>
            {if *open {
                html! {
                    <div class="absolute right-0 mt-2 w-72 card bg-base-100 shadow-xl z-50">
                        <div class="card-body p-4 space-y-2">
                            <div>
                                <p class="font-semibold">{props.user.name.clone()}</p>
                                <p class="text-sm text-base-content/60">{props.user.email.clone()}</p>
                            </div>
                            {match (*editing).clone() {
                                Some(form) => html! {
                                    <form class="space-y-2" onsubmit={on_save}>
                                        <input class="input input-bordered input-sm w-full" placeholder="Name"
                                            value={form.name} oninput={bind(|f, v| f.name = v)} />
                                        <input class="input input-bordered input-sm w-full" placeholder="Phone"
                                            value={form.phone} oninput={bind(|f, v| f.phone = v)} />
                                        <div class="flex gap-2">
                                            <button type="button" class="btn btn-sm flex-1" onclick={on_cancel}>{"Cancel"}</button>
                                            <button type="submit" class="btn btn-sm btn-warning flex-1">{"Save"}</button>
                                        </div>
                                    </form>
                                },
                                None => html! {
                                    <button class="btn btn-sm btn-ghost justify-start" onclick={on_edit}>{"Update Profile"}</button>
                                },
                            }}
                            <button class="btn btn-sm btn-ghost justify-start text-error" onclick={on_logout}>{"Logout"}</button>
                        </div>
                    </div>
                }
            } else {
                html! {}
            }}
        </div>
    }
}
