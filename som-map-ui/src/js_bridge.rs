//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The map functions live in `assets/js/species-map.js` and are loaded at
//! runtime on top of Leaflet and Leaflet.markercluster. They are evaluated as
//! globals (no ES modules) and exposed via `window.*`.

use wasm_bindgen::JsValue;

static SPECIES_MAP_JS: &str = include_str!("../assets/js/species-map.js");

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('SOM JS call failed:', e); }}",
        code
    );
    if let Err(e) = js_sys::eval(&wrapped) {
        log::warn!("[SOM] js: eval failed: {}", describe(&e));
    }
}

/// Initialize map scripts with a wait-for-Leaflet polling loop.
///
/// The script is evaluated at global scope once both `L` and
/// `L.markerClusterGroup` exist, then its entry points are promoted to `window.*`.
pub fn init_map_scripts() {
    let store_js = format!(
        "if (!window.__somMapReady) {{ window.__somMapScripts = {}; }}",
        serde_json::to_string(SPECIES_MAP_JS).unwrap_or_default()
    );
    call_js(&store_js);

    let init_js = r#"
        (function() {
            if (window.__somMapReady || window.__somMapPolling) return;
            window.__somMapPolling = true;
            var waitForLeaflet = setInterval(function() {
                if (typeof L !== 'undefined' && typeof L.markerClusterGroup !== 'undefined') {
                    clearInterval(waitForLeaflet);
                    (0, eval)(window.__somMapScripts);
                    delete window.__somMapScripts;
                    if (typeof renderSpeciesMap !== 'undefined') window.renderSpeciesMap = renderSpeciesMap;
                    window.__somMapReady = true;
                    console.log('SOM map initialized');
                }
            }, 100);
        })();
    "#;
    call_js(init_js);
}

/// Draw a map view into `container_id`.
///
/// `view_json` is a serialized `MapView`; being valid JSON it is spliced in
/// as an object literal. Polls until the scripts and the container exist.
pub fn render_species_map(container_id: &str, view_json: &str) {
    call_js(&format!(
        r#"
        (function() {{
            var view = {view_json};
            var poll = setInterval(function() {{
                if (window.__somMapReady &&
                    typeof window.renderSpeciesMap !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.renderSpeciesMap('{container_id}', view);
                    }} catch(e) {{ console.error('[SOM] renderSpeciesMap error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}
