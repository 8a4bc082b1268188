use crate::shared::icons::icon;
use contracts::domain::a004_dispatch::DispatchForm;
use leptos::prelude::*;

pub const CHANNELS: [&str; 5] = ["Amazon", "Flipkart", "Website", "1MG", "Retail"];

/// "New dispatch" dialog. Date and status are assigned at submit.
#[component]
pub fn DispatchDetails(
    on_submit: Callback<DispatchForm>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let form = RwSignal::new(DispatchForm::default());
    let error = RwSignal::new(None::<String>);

    let save = move |_| {
        let current = form.get();
        if let Err(message) = current.validate() {
            error.set(Some(message));
            return;
        }
        error.set(None);
        on_submit.run(current);
    };

    view! {
        <div class="details-container dispatch-details">
            <div class="details-header">
                <h3>{"Create Dispatch"}</h3>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                <div class="form-group">
                    <label for="product">{"Product *"}</label>
                    <input
                        type="text"
                        id="product"
                        prop:value=move || form.get().product
                        on:input=move |ev| form.update(|f| f.product = event_target_value(&ev))
                        placeholder="Product name"
                    />
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="quantity">{"Quantity *"}</label>
                        <input
                            type="number"
                            id="quantity"
                            min="1"
                            prop:value=move || form.get().quantity
                            on:input=move |ev| form.update(|f| f.quantity = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="channel">{"Channel *"}</label>
                        <select
                            id="channel"
                            prop:value=move || form.get().channel
                            on:change=move |ev| form.update(|f| f.channel = event_target_value(&ev))
                        >
                            <option value="">{"Select channel"}</option>
                            {CHANNELS.iter().copied().map(|c| view! { <option value=c>{c}</option> }).collect_view()}
                        </select>
                    </div>
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="revenue">{"Revenue (₹)"}</label>
                        <input
                            type="number"
                            id="revenue"
                            min="0"
                            prop:value=move || form.get().revenue
                            on:input=move |ev| form.update(|f| f.revenue = event_target_value(&ev))
                            placeholder="Defaults to ₹500 per unit"
                        />
                    </div>
                    <div class="form-group">
                        <label for="order_no">{"Order No"}</label>
                        <input
                            type="text"
                            id="order_no"
                            prop:value=move || form.get().order_no
                            on:input=move |ev| form.update(|f| f.order_no = event_target_value(&ev))
                            placeholder="Auto-generated when blank"
                        />
                    </div>
                </div>
            </div>

            <div class="details-actions">
                <button class="btn btn-primary" on:click=save>
                    {icon("save")}
                    {"Create Dispatch"}
                </button>
                <button class="btn btn-secondary" on:click=move |_| on_cancel.run(())>
                    {icon("x")}
                    {"Cancel"}
                </button>
            </div>
        </div>
    }
}
