use wasm_bindgen::prelude::*;
use variantkit::{Props, StyleConfig, StyleFn, Tv, TvOptions};

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

fn js_error(prefix: &str, err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&format!("{}: {}", prefix, err))
}

fn parse_props(props_json: Option<String>) -> Result<Props, JsValue> {
    match props_json.as_deref() {
        None | Some("") => Ok(Props::new()),
        Some(source) => Props::from_json(source).map_err(|e| js_error("Invalid props", e)),
    }
}

fn parse_options(options_json: Option<String>) -> Result<TvOptions, JsValue> {
    match options_json.as_deref() {
        None | Some("") => Ok(TvOptions::default()),
        Some(source) => serde_json::from_str(source).map_err(|e| js_error("Invalid options", e)),
    }
}

/// A style function built from a JSON config
#[wasm_bindgen]
pub struct StyleHandle {
    style: StyleFn,
}

#[wasm_bindgen]
impl StyleHandle {
    /// Resolve the root class string
    pub fn call(&self, props_json: Option<String>) -> Result<String, JsValue> {
        Ok(self.style.call(&parse_props(props_json)?))
    }

    /// Resolve one slot; call-level props apply to this slot only
    pub fn slot(
        &self,
        name: &str,
        props_json: Option<String>,
        call_json: Option<String>,
    ) -> Result<String, JsValue> {
        let props = parse_props(props_json)?;
        let slots = self.style.slots(&props);
        let class = match call_json {
            Some(call) => slots.slot(name, &parse_props(Some(call))?),
            None => slots.get(name),
        };
        class.ok_or_else(|| JsValue::from_str(&format!("Unknown slot: {}", name)))
    }

    /// Resolve to JSON: a class string, or an object of slot -> class string
    pub fn resolve(&self, props_json: Option<String>) -> Result<String, JsValue> {
        let resolved = self.style.resolve(&parse_props(props_json)?);
        serde_json::to_string(&resolved).map_err(|e| js_error("Serialization error", e))
    }

    #[wasm_bindgen(getter, js_name = variantKeys)]
    pub fn variant_keys(&self) -> Vec<String> {
        self.style.variant_keys().to_vec()
    }

    #[wasm_bindgen(getter, js_name = slotKeys)]
    pub fn slot_keys(&self) -> Vec<String> {
        self.style.slot_keys().into_iter().map(str::to_string).collect()
    }

    #[wasm_bindgen(getter, js_name = hasSlots)]
    pub fn has_slots(&self) -> bool {
        self.style.has_slots()
    }

    /// Default variant values as a JSON object
    #[wasm_bindgen(getter, js_name = defaultVariants)]
    pub fn default_variants(&self) -> String {
        let defaults: serde_json::Map<String, serde_json::Value> = self
            .style
            .default_variants()
            .iter()
            .map(|(k, v)| (k.to_string(), serde_json::Value::String(v.to_string())))
            .collect();
        serde_json::Value::Object(defaults).to_string()
    }
}

/// Build a style function from a JSON config and optional JSON options
#[wasm_bindgen(js_name = createStyle)]
pub fn create_style(config_json: &str, options_json: Option<String>) -> Result<StyleHandle, JsValue> {
    let options = parse_options(options_json)?;
    let config = StyleConfig::from_json(config_json).map_err(|e| js_error("Invalid config", e))?;
    let style = Tv::new(options)
        .tv(config)
        .map_err(|e| js_error("Config error", e))?;

    Ok(StyleHandle { style })
}

/// Join classes and collapse conflicts under optional JSON options
#[wasm_bindgen]
pub fn cn(classes: Vec<String>, options_json: Option<String>) -> Result<String, JsValue> {
    Ok(Tv::new(parse_options(options_json)?).cn(classes))
}

/// Join classes without conflict resolution
#[wasm_bindgen]
pub fn cx(classes: Vec<String>) -> String {
    variantkit::cx(classes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_call() {
        let handle = create_style(
            r#"{ "base": "inline-flex p-2", "variants": { "size": { "lg": "h-12" } } }"#,
            None,
        )
        .unwrap();

        assert_eq!(handle.call(Some(r#"{ "size": "lg", "class": "p-4" }"#.into())).unwrap(), "inline-flex h-12 p-4");
        assert_eq!(handle.variant_keys(), vec!["size"]);
        assert!(!handle.has_slots());
    }

    #[test]
    fn test_slots_and_resolve_json() {
        let handle = create_style(
            r#"{ "slots": { "base": "rounded", "title": "font-bold" },
                 "variants": { "tone": { "danger": { "title": "text-red-500" } } },
                 "defaultVariants": { "tone": "danger" } }"#,
            Some(r#"{ "twMerge": false }"#.into()),
        )
        .unwrap();

        assert_eq!(handle.slot("title", None, None).unwrap(), "font-bold text-red-500");
        assert_eq!(
            handle.slot("title", None, Some(r#"{ "class": "italic" }"#.into())).unwrap(),
            "font-bold text-red-500 italic"
        );
        assert_eq!(
            handle.resolve(None).unwrap(),
            r#"{"base":"rounded","title":"font-bold text-red-500"}"#
        );
        assert_eq!(handle.slot_keys(), vec!["base", "title"]);
        assert_eq!(handle.default_variants(), r#"{"tone":"danger"}"#);
    }

    #[test]
    fn test_cn_and_cx() {
        let classes = vec!["p-2".to_string(), "p-4".to_string()];
        assert_eq!(cn(classes.clone(), None).unwrap(), "p-4");
        assert_eq!(cx(classes), "p-2 p-4");
    }

    #[test]
    fn test_cn_follows_merge_options() {
        let prefixed = vec!["tw-p-2".to_string(), "p-3".to_string(), "tw-p-4".to_string()];
        let options = r#"{ "twMergeConfig": { "prefix": "tw-" } }"#;
        assert_eq!(cn(prefixed, Some(options.into())).unwrap(), "p-3 tw-p-4");

        let conflicting = vec!["p-2".to_string(), "p-4".to_string(), "p-2".to_string()];
        assert_eq!(cn(conflicting, Some(r#"{ "twMerge": false }"#.into())).unwrap(), "p-4 p-2");
    }
}
