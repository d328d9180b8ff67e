use contracts::shared::validation::PatternMatcher;
use js_sys::{Array, Reflect, RegExp};
use wasm_bindgen::{JsCast, JsValue};

/// `validationPattern` checked with the browser RegExp engine.
///
/// The pattern must match the whole value, as the HTML `pattern` attribute
/// does. A pattern the engine rejects is logged and not enforced.
pub struct JsPatternMatcher;

fn compile(pattern: &str) -> Result<RegExp, JsValue> {
    let anchored = format!("^(?:{})$", pattern);
    let ctor = RegExp::new("", "").constructor();
    let args = Array::of2(&JsValue::from_str(&anchored), &JsValue::from_str("u"));
    Reflect::construct(&ctor, &args)?.dyn_into::<RegExp>()
}

impl PatternMatcher for JsPatternMatcher {
    fn is_match(&self, pattern: &str, value: &str) -> bool {
        match compile(pattern) {
            Ok(re) => re.test(value),
            Err(err) => {
                log::warn!("invalid validation pattern {}: {:?}", pattern, err);
                true
            }
        }
    }
}
