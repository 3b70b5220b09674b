use crate::core::Viewport;
use anyhow::Context;
use wasm_bindgen::JsValue;
use web_sys as web;

const WRAPPER_CLASS: &str = "content-wrapper";
const WRAPPED_MARKER: &str = "content-wrapper-added";

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn body() -> anyhow::Result<web::HtmlElement> {
    window_document()
        .context("no document")?
        .body()
        .context("document has no <body>")
}

/// Current inner size of the browser window in CSS pixels.
pub fn viewport() -> Viewport {
    let Some(w) = web::window() else {
        return Viewport::default();
    };
    let dim = |v: Result<JsValue, JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
    };
    Viewport::new(dim(w.inner_width()), dim(w.inner_height()))
}

/// Move everything already in `<body>` except `keep` into a
/// `div.content-wrapper` appended to the body. Runs at most once per page;
/// the body is tagged with a marker class afterwards.
pub fn wrap_page_content(document: &web::Document, keep: &web::Node) -> anyhow::Result<()> {
    let body = document.body().context("document has no <body>")?;
    if body.class_list().contains(WRAPPED_MARKER) {
        return Ok(());
    }
    let wrapper = document
        .create_element("div")
        .map_err(|e| anyhow::anyhow!("create wrapper: {:?}", e))?;
    wrapper.set_class_name(WRAPPER_CLASS);

    let children = body.child_nodes();
    let existing: Vec<web::Node> = (0..children.length())
        .filter_map(|i| children.item(i))
        .filter(|n| !n.is_same_node(Some(keep)))
        .collect();
    for child in &existing {
        _ = wrapper.append_child(child);
    }
    _ = body.append_child(&wrapper);
    _ = body.class_list().add_1(WRAPPED_MARKER);
    log::info!("[dom] wrapped {} body nodes", existing.len());
    Ok(())
}

/// Insert `el` as the first child of `<body>`.
pub fn prepend_to_body(el: &web::Element) -> anyhow::Result<()> {
    let body = body()?;
    let first = body.first_child();
    body.insert_before(el, first.as_ref())
        .map_err(|e| anyhow::anyhow!("insert canvas: {:?}", e))?;
    Ok(())
}
