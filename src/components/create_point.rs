//! Collection Point Registration Page
//!
//! One stateful view: loads reference data (items, states, cities),
//! acquires the device position, tracks the form in a single state
//! container and POSTs the composed payload on submit.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use wasm_bindgen::JsCast;

use crate::api::{LocalidadesApi, PointsApi};
use crate::components::MapView;
use crate::geo;
use crate::state::{CreatePointState, Field, SubmitStatus};

fn input_value(ev: &web_sys::Event) -> String {
    ev.target()
        .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
        .map(|input| input.value())
        .unwrap_or_default()
}

fn select_value(ev: &web_sys::Event) -> String {
    ev.target()
        .and_then(|target| target.dyn_into::<web_sys::HtmlSelectElement>().ok())
        .map(|select| select.value())
        .unwrap_or_default()
}

#[component]
pub fn CreatePoint() -> impl IntoView {
    let state = RwSignal::new(CreatePointState::new());

    // Initial loads; independent, completion order does not matter
    Effect::new(move |_| {
        geo::acquire_position(move |latitude, longitude| {
            state.update(|s| s.set_position(latitude, longitude));
        });

        spawn_local(async move {
            match PointsApi::new().list_items().await {
                Ok(items) => state.update(|s| s.set_items(items)),
                Err(err) => {
                    log::error!("loading items failed: {err}");
                    state.update(|s| s.set_error(format!("Could not load collection items: {err}")));
                }
            }
        });

        spawn_local(async move {
            match LocalidadesApi::new().list_ufs().await {
                Ok(ufs) => state.update(|s| s.set_ufs(ufs)),
                Err(err) => {
                    log::error!("loading states failed: {err}");
                    state.update(|s| s.set_error(format!("Could not load states: {err}")));
                }
            }
        });
    });

    let on_select_uf = move |ev: web_sys::Event| {
        let value = select_value(&ev);
        let uf = (!value.is_empty()).then_some(value);
        let fetch = state.try_update(|s| s.select_uf(uf)).flatten();
        if let Some(fetch) = fetch {
            spawn_local(async move {
                match LocalidadesApi::new().list_cities(&fetch.uf).await {
                    Ok(cities) => state.update(|s| {
                        if !s.apply_cities(fetch.seq, cities) {
                            log::debug!("dropping superseded city list for {}", fetch.uf);
                        }
                    }),
                    Err(err) => {
                        log::error!("loading cities for {} failed: {err}", fetch.uf);
                        state.update(|s| s.set_error(format!("Could not load cities: {err}")));
                    }
                }
            });
        }
    };

    let on_select_city = move |ev: web_sys::Event| {
        let value = select_value(&ev);
        state.update(|s| s.select_city((!value.is_empty()).then_some(value)));
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(payload) = state.try_update(|s| s.begin_submit()).flatten() else {
            return;
        };
        spawn_local(async move {
            match PointsApi::new().create_point(&payload).await {
                Ok(()) => state.update(|s| s.submit_succeeded()),
                Err(err) => {
                    log::error!("registering point failed: {err}");
                    state.update(|s| s.submit_failed(format!("Could not register the point: {err}")));
                }
            }
        });
    };

    let text_field = move |field: Field| {
        move |ev: web_sys::Event| state.update(|s| s.set_field(field, input_value(&ev)))
    };

    let position = Signal::derive(move || state.with(|s| s.position));

    view! {
        <div id="page-create-point">
            <header>
                <A href="/">"Back to home"</A>
            </header>

            <form on:submit=on_submit>
                <h1>"Registration of collection point"</h1>

                {move || state.with(|s| s.error.clone()).map(|message| view! {
                    <p class="form-error">{message}</p>
                })}

                <fieldset>
                    <legend><h2>"Data"</h2></legend>

                    <div class="field">
                        <label for="name">"Entity Name"</label>
                        <input type="text" id="name" on:input=text_field(Field::Name)/>
                    </div>

                    <div class="field-group">
                        <div class="field">
                            <label for="email">"Email"</label>
                            <input type="email" id="email" on:input=text_field(Field::Email)/>
                        </div>
                        <div class="field">
                            <label for="whatsapp">"Whatsapp"</label>
                            <input type="text" id="whatsapp" on:input=text_field(Field::Whatsapp)/>
                        </div>
                    </div>
                </fieldset>

                <fieldset>
                    <legend>
                        <h2>"Address"</h2>
                        <span>"Select the address on the map"</span>
                    </legend>

                    <MapView position=position/>

                    <div class="field-group">
                        <div class="field">
                            <label for="uf">"State"</label>
                            <select
                                id="uf"
                                on:change=on_select_uf
                                prop:value=move || state.with(|s| s.selected_uf.clone().unwrap_or_default())
                            >
                                <option value="">"Select a State"</option>
                                {move || state.with(|s| s.ufs.clone()).into_iter().map(|uf| view! {
                                    <option value=uf.clone()>{uf.clone()}</option>
                                }).collect_view()}
                            </select>
                        </div>
                        <div class="field">
                            <label for="city">"City"</label>
                            <select
                                id="city"
                                on:change=on_select_city
                                prop:value=move || state.with(|s| s.selected_city.clone().unwrap_or_default())
                            >
                                <option value="">"Select a City"</option>
                                {move || state.with(|s| s.cities.clone()).into_iter().map(|city| view! {
                                    <option value=city.clone()>{city.clone()}</option>
                                }).collect_view()}
                            </select>
                        </div>
                    </div>
                </fieldset>

                <fieldset>
                    <legend>
                        <h2>"Collection items"</h2>
                        <span>"Select one or more items below"</span>
                    </legend>

                    <ul class="items-grid">
                        <For
                            each=move || state.with(|s| s.items.clone())
                            key=|item| item.id
                            children=move |item| {
                                let id = item.id;
                                let selected = Memo::new(move |_| state.with(|s| s.is_item_selected(id)));
                                view! {
                                    <li
                                        class=move || if selected.get() { "selected" } else { "" }
                                        on:click=move |_| state.update(|s| s.toggle_item(id))
                                    >
                                        <img src=item.image_url.clone() alt=item.title.clone()/>
                                        <span>{item.title.clone()}</span>
                                    </li>
                                }
                            }
                        />
                    </ul>
                </fieldset>

                <button type="submit" disabled=move || !state.with(|s| s.can_submit())>
                    {move || if state.with(|s| s.submit == SubmitStatus::Submitting) {
                        "Registering..."
                    } else {
                        "Register collection point"
                    }}
                </button>
            </form>

            {move || state.with(|s| s.submit == SubmitStatus::Succeeded).then(|| view! {
                <div class="acknowledgment">
                    <h2>"Collection point registered!"</h2>
                    <A href="/">"Back to home"</A>
                </div>
            })}
        </div>
    }
}
