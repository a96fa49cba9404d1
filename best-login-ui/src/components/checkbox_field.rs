use leptos::*;

#[component]
pub fn CheckboxField(
    id: &'static str,
    name: &'static str,
    label: &'static str,
    #[prop(into)] disabled: Signal<bool>,
    input_ref: NodeRef<html::Input>,
) -> impl IntoView {
    view! {
        <div class="checkbox-container">
            <input
                class="checkbox"
                type="checkbox"
                id=id
                name=name
                disabled=move || disabled.get()
                node_ref=input_ref
            />
            <label class="checkbox-label" for=id>{label}</label>
        </div>
    }
}
