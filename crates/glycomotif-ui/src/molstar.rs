//! JS interop with the global Molstar viewer bundle.
//!
//! `index.html` loads the stock `molstar.js` bundle, so `molstar.Viewer`
//! and `molstar.PluginExtensions.mvs` exist as globals. This module binds
//! the three calls the app needs and wraps them in [`MolstarBackend`], the
//! [`ViewerBackend`] implementation handed to the session controller.
//!
//! All futures here are single-threaded (`JsFuture` is not `Send`), which
//! matches the session module's event-loop model.

use glycomotif::options::ViewerLayoutOptions;
use glycomotif::session::{
    LoadOptions, LocalBoxFuture, SlotKey, ViewerBackend,
};
use glycomotif::viewspec::ViewSpec;
use glycomotif::GlycomotifError;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

#[wasm_bindgen]
extern "C" {
    /// `molstar.Viewer.create(target, options) -> Promise<Viewer>`
    #[wasm_bindgen(
        js_namespace = ["molstar", "Viewer"],
        js_name = create,
        catch
    )]
    fn viewer_create(
        target: &web_sys::Element,
        options: &JsValue,
    ) -> Result<js_sys::Promise, JsValue>;

    /// `molstar.PluginExtensions.mvs.MVSData.fromMVSJ(text) -> MVSData`
    #[wasm_bindgen(
        js_namespace = ["molstar", "PluginExtensions", "mvs", "MVSData"],
        js_name = fromMVSJ,
        catch
    )]
    fn mvs_from_mvsj(mvsj: &str) -> Result<JsValue, JsValue>;

    /// `molstar.PluginExtensions.mvs.loadMVS(plugin, data, options) -> Promise`
    #[wasm_bindgen(
        js_namespace = ["molstar", "PluginExtensions", "mvs"],
        js_name = loadMVS,
        catch
    )]
    fn load_mvs(
        plugin: &JsValue,
        data: &JsValue,
        options: &JsValue,
    ) -> Result<js_sys::Promise, JsValue>;
}

/// Render a JS exception into a crate error with context.
fn js_err(context: &str, e: &JsValue) -> GlycomotifError {
    let detail = e
        .as_string()
        .or_else(|| {
            js_sys::Reflect::get(e, &JsValue::from_str("message"))
                .ok()
                .and_then(|m| m.as_string())
        })
        .unwrap_or_else(|| "unknown JS error".to_owned());
    GlycomotifError::Viewer(format!("{context}: {detail}"))
}

fn set_prop(obj: &js_sys::Object, key: &str, value: &JsValue) {
    let _ = js_sys::Reflect::set(obj, &JsValue::from_str(key), value);
}

fn layout_object(layout: &ViewerLayoutOptions) -> js_sys::Object {
    let obj = js_sys::Object::new();
    set_prop(
        &obj,
        "layoutIsExpanded",
        &JsValue::from_bool(layout.layout_expanded),
    );
    set_prop(
        &obj,
        "layoutShowControls",
        &JsValue::from_bool(layout.show_controls),
    );
    obj
}

fn load_object(options: &LoadOptions) -> js_sys::Object {
    let obj = js_sys::Object::new();
    match &options.source_url {
        Some(url) => set_prop(&obj, "sourceUrl", &JsValue::from_str(url)),
        None => set_prop(&obj, "sourceUrl", &JsValue::UNDEFINED),
    }
    set_prop(
        &obj,
        "sanityChecks",
        &JsValue::from_bool(options.sanity_checks),
    );
    set_prop(
        &obj,
        "replaceExisting",
        &JsValue::from_bool(options.replace_existing),
    );
    obj
}

fn placeholder(element_id: &str) -> Result<web_sys::Element, GlycomotifError> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(element_id))
        .ok_or_else(|| {
            GlycomotifError::Viewer(format!(
                "placeholder region {element_id} not in document"
            ))
        })
}

/// [`ViewerBackend`] over the global Molstar bundle.
///
/// The instance handle is the viewer's `plugin` context; the backend never
/// looks inside it.
#[derive(Debug, Default, Clone, Copy)]
pub struct MolstarBackend;

impl ViewerBackend for MolstarBackend {
    type Instance = JsValue;

    fn create_viewer(
        &self,
        key: &SlotKey,
        layout: &ViewerLayoutOptions,
    ) -> LocalBoxFuture<Result<JsValue, GlycomotifError>> {
        let element_id = key.element_id();
        let options = layout_object(layout);
        Box::pin(async move {
            let target = placeholder(&element_id)?;
            let promise = viewer_create(&target, &options)
                .map_err(|e| js_err("Viewer.create threw", &e))?;
            let viewer = JsFuture::from(promise)
                .await
                .map_err(|e| js_err("Viewer.create rejected", &e))?;
            js_sys::Reflect::get(&viewer, &JsValue::from_str("plugin"))
                .map_err(|e| js_err("viewer has no plugin context", &e))
        })
    }

    fn load_spec(
        &self,
        instance: &JsValue,
        spec: ViewSpec,
        options: &LoadOptions,
    ) -> LocalBoxFuture<Result<(), GlycomotifError>> {
        let plugin = instance.clone();
        let load_options = load_object(options);
        Box::pin(async move {
            let mvsj = spec.to_mvsj().map_err(|e| {
                GlycomotifError::Viewer(format!(
                    "specification serialization failed: {e}"
                ))
            })?;
            let data = mvs_from_mvsj(&mvsj)
                .map_err(|e| js_err("MVSData.fromMVSJ rejected", &e))?;
            let promise = load_mvs(&plugin, &data, &load_options)
                .map_err(|e| js_err("loadMVS threw", &e))?;
            let _ = JsFuture::from(promise)
                .await
                .map_err(|e| js_err("loadMVS rejected", &e))?;
            Ok(())
        })
    }
}
