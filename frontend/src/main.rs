mod components;
mod services;
mod state;

use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use components::charts::{DistributionChart, PerPersonChart};
use services::api::ApiClient;
use services::debounce::Debouncer;
use shared::{
    format_currency, validate_bill_amount, validate_split_count, validate_tip_percentage,
    CalculateRequest, CalculationResult, CalculatorConfig,
};
use state::CalculatorState;

#[function_component(App)]
fn app() -> Html {
    let config = CalculatorConfig::default();
    let debounce_ms = config.debounce_delay_ms;

    // Controller-owned state. The RefCell is read at event time so handlers
    // always see the current values, not a snapshot from an earlier render.
    let controller = use_mut_ref(CalculatorState::default);
    let debouncer = use_mut_ref(Debouncer::new);
    // Monotonic sequence for outgoing requests; a response is applied only
    // if its number is still the latest issued.
    let request_seq = use_mut_ref(|| 0u64);

    // Inputs are uncontrolled; values are read through these refs when a
    // recalculation fires, so the last-entered text always wins.
    let bill_input_ref = use_node_ref();
    let custom_tip_ref = use_node_ref();
    let split_input_ref = use_node_ref();

    // Rendered state
    let tip_view = use_state(|| controller.borrow().tip);
    let result = use_state(|| Option::<CalculationResult>::None);
    let bill_error = use_state(|| Option::<String>::None);
    let tip_error = use_state(|| Option::<String>::None);
    let split_error = use_state(|| Option::<String>::None);

    let recalculate = {
        let controller = controller.clone();
        let request_seq = request_seq.clone();
        let bill_input_ref = bill_input_ref.clone();
        let split_input_ref = split_input_ref.clone();
        let result = result.clone();
        let bill_error = bill_error.clone();
        let tip_error = tip_error.clone();
        let split_error = split_error.clone();

        Callback::from(move |_: ()| {
            // Clear prior errors
            bill_error.set(None);
            tip_error.set(None);
            split_error.set(None);

            let bill_raw = bill_input_ref
                .cast::<HtmlInputElement>()
                .map(|input| input.value())
                .unwrap_or_default();
            let split_raw = split_input_ref
                .cast::<HtmlInputElement>()
                .map(|input| input.value())
                .unwrap_or_default();

            // An empty or unparsable bill counts as zero; an empty split
            // field falls back to one person. "0" still parses and must
            // fail validation below.
            let bill_amount = bill_raw.trim().parse::<f64>().unwrap_or(0.0);
            let split_raw_count = split_raw.trim().parse::<i64>().unwrap_or(1);

            let bill_amount = match validate_bill_amount(bill_amount) {
                Ok(amount) => amount,
                Err(e) => {
                    bill_error.set(Some(e.to_string()));
                    return;
                }
            };
            let split_count = match validate_split_count(split_raw_count) {
                Ok(count) => count,
                Err(e) => {
                    split_error.set(Some(e.to_string()));
                    return;
                }
            };

            let tip_percentage = {
                let mut state = controller.borrow_mut();
                state.bill_amount = bill_amount;
                state.split_count = split_count;
                state.tip_percentage()
            };

            *request_seq.borrow_mut() += 1;
            let seq = *request_seq.borrow();

            let request = CalculateRequest {
                bill_amount,
                tip_percentage,
                split_count,
            };

            let request_seq = request_seq.clone();
            let result = result.clone();
            let bill_error = bill_error.clone();
            spawn_local(async move {
                let outcome = ApiClient::new().calculate(&request).await;

                // A newer request was issued while this one was in flight;
                // its response (or error) must not touch the display.
                if *request_seq.borrow() != seq {
                    return;
                }

                match outcome {
                    Ok(response) => {
                        if response.success {
                            if let Some(data) = response.data {
                                result.set(Some(data));
                            }
                        } else {
                            let message = response
                                .error
                                .unwrap_or_else(|| "Calculation failed".to_string());
                            bill_error.set(Some(message));
                        }
                    }
                    Err(e) => {
                        gloo::console::error!("Calculation request failed:", e);
                        bill_error.set(Some("Failed to calculate. Please try again.".to_string()));
                    }
                }
            });
        })
    };

    let on_bill_input = {
        let debouncer = debouncer.clone();
        let recalculate = recalculate.clone();
        Callback::from(move |_: InputEvent| {
            let recalculate = recalculate.clone();
            debouncer
                .borrow_mut()
                .schedule(debounce_ms, move || recalculate.emit(()));
        })
    };

    let on_split_input = {
        let debouncer = debouncer.clone();
        let recalculate = recalculate.clone();
        Callback::from(move |_: InputEvent| {
            let recalculate = recalculate.clone();
            debouncer
                .borrow_mut()
                .schedule(debounce_ms, move || recalculate.emit(()));
        })
    };

    let on_custom_tip_input = {
        let controller = controller.clone();
        let tip_view = tip_view.clone();
        let tip_error = tip_error.clone();
        let debouncer = debouncer.clone();
        let recalculate = recalculate.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let raw = input.value();

            // Partial input ("-", "1e") is ignored until it parses
            let Ok(value) = raw.trim().parse::<f64>() else {
                return;
            };

            match validate_tip_percentage(value) {
                Err(e) => {
                    // Out-of-range input must not disturb state or results
                    tip_error.set(Some(e.to_string()));
                }
                Ok(value) => {
                    tip_error.set(None);
                    controller.borrow_mut().set_custom_tip(value);
                    tip_view.set(controller.borrow().tip);
                    let recalculate = recalculate.clone();
                    debouncer
                        .borrow_mut()
                        .schedule(debounce_ms, move || recalculate.emit(()));
                }
            }
        })
    };

    let make_preset_callback = {
        let controller = controller.clone();
        let tip_view = tip_view.clone();
        let tip_error = tip_error.clone();
        let custom_tip_ref = custom_tip_ref.clone();
        let debouncer = debouncer.clone();
        let recalculate = recalculate.clone();
        move |preset: f64| {
            let controller = controller.clone();
            let tip_view = tip_view.clone();
            let tip_error = tip_error.clone();
            let custom_tip_ref = custom_tip_ref.clone();
            let debouncer = debouncer.clone();
            let recalculate = recalculate.clone();
            Callback::from(move |_: MouseEvent| {
                debouncer.borrow_mut().cancel();
                if let Some(input) = custom_tip_ref.cast::<HtmlInputElement>() {
                    input.set_value("");
                }
                tip_error.set(None);
                controller.borrow_mut().select_preset(preset);
                tip_view.set(controller.borrow().tip);
                // Presets recalculate immediately, without debouncing
                recalculate.emit(());
            })
        }
    };

    let on_reset = {
        let controller = controller.clone();
        let tip_view = tip_view.clone();
        let debouncer = debouncer.clone();
        let bill_input_ref = bill_input_ref.clone();
        let custom_tip_ref = custom_tip_ref.clone();
        let split_input_ref = split_input_ref.clone();
        let result = result.clone();
        let bill_error = bill_error.clone();
        let tip_error = tip_error.clone();
        let split_error = split_error.clone();
        Callback::from(move |_: MouseEvent| {
            debouncer.borrow_mut().cancel();

            if let Some(input) = bill_input_ref.cast::<HtmlInputElement>() {
                input.set_value("");
            }
            if let Some(input) = custom_tip_ref.cast::<HtmlInputElement>() {
                input.set_value("");
            }
            if let Some(input) = split_input_ref.cast::<HtmlInputElement>() {
                input.set_value("1");
            }

            controller.borrow_mut().reset();
            tip_view.set(controller.borrow().tip);

            result.set(None);
            bill_error.set(None);
            tip_error.set(None);
            split_error.set(None);

            if let Some(input) = bill_input_ref.cast::<HtmlInputElement>() {
                let _ = input.focus();
            }
        })
    };

    // Seed the split field and focus the bill input on page load
    {
        let bill_input_ref = bill_input_ref.clone();
        let split_input_ref = split_input_ref.clone();
        use_effect_with((), move |_| {
            if let Some(input) = split_input_ref.cast::<HtmlInputElement>() {
                input.set_value("1");
            }
            if let Some(input) = bill_input_ref.cast::<HtmlInputElement>() {
                let _ = input.focus();
            }
            || ()
        });
    }

    let (tip_display, total_display, per_person_display) = match result.as_ref() {
        Some(r) => (
            format_currency(r.tip_amount),
            format_currency(r.total_amount),
            format_currency(r.per_person_amount),
        ),
        None => (
            format_currency(0.0),
            format_currency(0.0),
            format_currency(0.0),
        ),
    };

    html! {
        <div class="container">
            <header class="header">
                <h1>{"Tip Splitter"}</h1>
                <p class="tagline">{"Split the bill, tip included"}</p>
            </header>

            <main class="main">
                <section class="calculator-section">
                    <div class="form-group">
                        <label for="bill-amount">{"Bill Amount"}</label>
                        <input
                            ref={bill_input_ref.clone()}
                            type="number"
                            id="bill-amount"
                            placeholder="0.00"
                            step="0.01"
                            oninput={on_bill_input}
                        />
                        <span class="error-message">
                            {(*bill_error).clone().unwrap_or_default()}
                        </span>
                    </div>

                    <div class="form-group">
                        <label>{"Tip Percentage"}</label>
                        <div class="tip-presets">
                            {for config.tip_presets.iter().map(|preset| {
                                let preset = *preset;
                                let active = tip_view.is_preset(preset);
                                html! {
                                    <button
                                        class={classes!("tip-btn", active.then_some("active"))}
                                        onclick={make_preset_callback(preset)}
                                    >
                                        {format!("{}%", preset)}
                                    </button>
                                }
                            })}
                        </div>
                        <input
                            ref={custom_tip_ref.clone()}
                            type="number"
                            id="custom-tip"
                            placeholder="Custom %"
                            step="0.5"
                            oninput={on_custom_tip_input}
                        />
                        <span class="error-message">
                            {(*tip_error).clone().unwrap_or_default()}
                        </span>
                    </div>

                    <div class="form-group">
                        <label for="split-count">{"Split Between"}</label>
                        <input
                            ref={split_input_ref.clone()}
                            type="number"
                            id="split-count"
                            step="1"
                            oninput={on_split_input}
                        />
                        <span class="error-message">
                            {(*split_error).clone().unwrap_or_default()}
                        </span>
                    </div>

                    <button class="btn reset-btn" onclick={on_reset}>{"Reset"}</button>
                </section>

                <section class="results-section">
                    <div class="result-card">
                        <span class="result-label">{"Tip"}</span>
                        <span class="result-value" id="tip-amount">{tip_display}</span>
                    </div>
                    <div class="result-card">
                        <span class="result-label">{"Total"}</span>
                        <span class="result-value" id="total-amount">{total_display}</span>
                    </div>
                    <div class="result-card">
                        <span class="result-label">{"Per Person"}</span>
                        <span class="result-value" id="per-person-amount">{per_person_display}</span>
                    </div>
                </section>

                <section class="charts-section">
                    <DistributionChart result={(*result).clone()} />
                    <PerPersonChart result={(*result).clone()} />
                </section>
            </main>
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
