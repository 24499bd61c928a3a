//! The control panel: one labeled range input per parameter definition.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use app_core::{ParamId, ParameterStore};

use crate::value::{format_attr, parse_slider_value};

/// Build the slider rows under `root` and wire each one to write through to
/// the shared store on every input event.
pub fn mount(
    document: &web::Document,
    root: &web::Element,
    store: &Rc<RefCell<ParameterStore>>,
) -> anyhow::Result<()> {
    for id in ParamId::ALL {
        let row = build_row(document, id, store)?;
        root.append_child(&row)
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    }
    Ok(())
}

fn build_row(
    document: &web::Document,
    id: ParamId,
    store: &Rc<RefCell<ParameterStore>>,
) -> anyhow::Result<web::Element> {
    let def = id.def();
    let err = |e: wasm_bindgen::JsValue| anyhow::anyhow!(format!("{:?}", e));

    let row = document.create_element("div").map_err(err)?;
    row.set_class_name("param-row");

    let label = document.create_element("label").map_err(err)?;
    label.set_text_content(Some(def.name));

    let input: web::HtmlInputElement = document
        .create_element("input")
        .map_err(err)?
        .dyn_into()
        .map_err(|_| anyhow::anyhow!("created element is not an input"))?;
    input.set_type("range");
    input.set_min(&format_attr(def.min));
    input.set_max(&format_attr(def.max));
    input.set_step(&format_attr(def.step));
    input.set_value(&format_attr(def.default));

    let readout = document.create_element("span").map_err(err)?;
    readout.set_class_name("param-value");
    readout.set_text_content(Some(&format_attr(def.default)));

    row.append_child(&label).map_err(err)?;
    row.append_child(&input).map_err(err)?;
    row.append_child(&readout).map_err(err)?;

    // Write-through: mirror the raw value in the readout, parse it into the
    // shared store. The widget itself is the only range clamp.
    {
        let store = store.clone();
        let input_r = input.clone();
        let readout_r = readout.clone();
        let closure = Closure::wrap(Box::new(move || {
            let raw = input_r.value();
            readout_r.set_text_content(Some(&raw));
            store.borrow_mut().set(id, parse_slider_value(&raw));
        }) as Box<dyn FnMut()>);
        input
            .add_event_listener_with_callback("input", closure.as_ref().unchecked_ref())
            .map_err(err)?;
        closure.forget();
    }

    Ok(row)
}
