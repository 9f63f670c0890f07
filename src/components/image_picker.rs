//! Image Picker
//!
//! File input that hands the chosen image back as a data URL.

use leptos::prelude::*;
use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{File, FileReader, HtmlInputElement};

fn read_as_data_url(file: &File, on_load: Callback<String>) -> Result<(), JsValue> {
    let reader = FileReader::new()?;
    let result_reader = reader.clone();
    let onload = Closure::<dyn FnMut()>::new(move || {
        match result_reader.result().ok().and_then(|result| result.as_string()) {
            Some(url) => on_load.run(url),
            None => warn!("[IMAGE] FileReader finished without a data URL"),
        }
    });
    reader.set_onload(Some(onload.as_ref().unchecked_ref()));
    onload.forget();
    reader.read_as_data_url(file)
}

#[component]
pub fn ImagePicker(
    /// Image currently shown: the picked one, else the saved one
    #[prop(into)]
    preview: Signal<Option<String>>,
    #[prop(into)] on_pick: Callback<String>,
) -> impl IntoView {
    let on_change = move |ev: web_sys::Event| {
        let Some(input) = ev.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        if let Err(e) = read_as_data_url(&file, on_pick) {
            warn!("[IMAGE] Could not read {}: {e:?}", file.name());
        }
    };

    view! {
        <div class="image-picker">
            {move || preview.get().map(|src| view! { <img class="image-preview" src=src alt="Recipe image"/> })}
            <label class="image-picker-label">
                "Photo"
                <input type="file" accept="image/*" on:change=on_change/>
            </label>
        </div>
    }
}
