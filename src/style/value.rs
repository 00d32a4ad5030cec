//! Style values and style objects.

use std::collections::btree_map::{self, BTreeMap};

use serde::{Deserialize, Serialize};

/// A single style property value.
///
/// Serializes as plain JSON: numbers, strings, booleans and nested objects
/// (such as `shadowOffset`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    Bool(bool),
    Number(f64),
    Text(String),
    Nested(StyleObject),
}

impl StyleValue {
    /// Returns the text if this is a [`StyleValue::Text`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            StyleValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the number if this is a [`StyleValue::Number`].
    pub fn as_number(&self) -> Option<f64> {
        match self {
            StyleValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// True if this is text exactly equal to `literal`.
    pub fn is_text(&self, literal: &str) -> bool {
        self.as_str() == Some(literal)
    }

    /// Short name of the variant, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            StyleValue::Bool(_) => "boolean",
            StyleValue::Number(_) => "number",
            StyleValue::Text(_) => "text",
            StyleValue::Nested(_) => "object",
        }
    }
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        StyleValue::Number(value)
    }
}

impl From<i32> for StyleValue {
    fn from(value: i32) -> Self {
        StyleValue::Number(value as f64)
    }
}

impl From<bool> for StyleValue {
    fn from(value: bool) -> Self {
        StyleValue::Bool(value)
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        StyleValue::Text(value.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        StyleValue::Text(value)
    }
}

impl From<&String> for StyleValue {
    fn from(value: &String) -> Self {
        StyleValue::Text(value.clone())
    }
}

impl From<StyleObject> for StyleValue {
    fn from(value: StyleObject) -> Self {
        StyleValue::Nested(value)
    }
}

/// A map of style property names to values.
///
/// Keys use the camelCase property names of the native renderer
/// (`paddingHorizontal`, `fontWeight`, ...). Iteration order is sorted by key.
///
/// # Example
///
/// ```rust
/// use aterciopelada_style::{StyleObject, StyleValue};
///
/// let style = StyleObject::new()
///     .set("padding", "1rem")
///     .set("color", "#2a241f");
///
/// assert_eq!(style.get("color"), Some(&StyleValue::from("#2a241f")));
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleObject {
    properties: BTreeMap<String, StyleValue>,
}

impl StyleObject {
    /// Creates an empty style object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a property, returning the updated object for chaining.
    pub fn set<V: Into<StyleValue>>(mut self, name: &str, value: V) -> Self {
        self.properties.insert(name.to_string(), value.into());
        self
    }

    /// Inserts a property, returning the previous value.
    pub fn insert<V: Into<StyleValue>>(&mut self, name: &str, value: V) -> Option<StyleValue> {
        self.properties.insert(name.to_string(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&StyleValue> {
        self.properties.get(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<StyleValue> {
        self.properties.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, StyleValue> {
        self.properties.iter()
    }

    /// Layers `other` over this object. Properties in `other` win.
    pub fn merged(&self, other: &StyleObject) -> StyleObject {
        let mut properties = self.properties.clone();
        properties.extend(other.iter().map(|(k, v)| (k.clone(), v.clone())));
        StyleObject { properties }
    }
}

impl<K: Into<String>, V: Into<StyleValue>> FromIterator<(K, V)> for StyleObject {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        StyleObject {
            properties: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a StyleObject {
    type Item = (&'a String, &'a StyleValue);
    type IntoIter = btree_map::Iter<'a, String, StyleValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.properties.iter()
    }
}

impl IntoIterator for StyleObject {
    type Item = (String, StyleValue);
    type IntoIter = btree_map::IntoIter<String, StyleValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.properties.into_iter()
    }
}

/// Builds a [`StyleObject`] from `name => value` pairs.
///
/// ```rust
/// use aterciopelada_style::style_object;
///
/// let card = style_object! {
///     "borderRadius" => 12,
///     "padding" => "1rem",
///     "backgroundColor" => "#ffffff",
/// };
/// assert_eq!(card.len(), 3);
/// ```
#[macro_export]
macro_rules! style_object {
    () => {
        $crate::StyleObject::new()
    };
    ($($name:expr => $value:expr),+ $(,)?) => {
        $crate::StyleObject::new()$(.set($name, $value))+
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let style = StyleObject::new().set("padding", 4).set("color", "red");
        assert_eq!(style.get("padding"), Some(&StyleValue::Number(4.0)));
        assert_eq!(style.get("color").and_then(StyleValue::as_str), Some("red"));
        assert_eq!(style.len(), 2);
    }

    #[test]
    fn test_merged_later_wins() {
        let base = style_object! { "padding" => 4, "color" => "red" };
        let variant = style_object! { "color" => "blue", "flex" => 1 };
        let merged = base.merged(&variant);

        assert_eq!(merged.get("padding"), Some(&StyleValue::Number(4.0)));
        assert_eq!(merged.get("color"), Some(&StyleValue::from("blue")));
        assert_eq!(merged.get("flex"), Some(&StyleValue::Number(1.0)));
        // Inputs are untouched
        assert_eq!(base.get("color"), Some(&StyleValue::from("red")));
    }

    #[test]
    fn test_from_iterator() {
        let style: StyleObject = vec![("width", "50%"), ("height", "10px")]
            .into_iter()
            .collect();
        assert!(style.contains("width"));
        assert!(style.contains("height"));
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(StyleValue::from(true).kind(), "boolean");
        assert_eq!(StyleValue::from(1.5).kind(), "number");
        assert_eq!(StyleValue::from("x").kind(), "text");
        assert_eq!(StyleValue::from(StyleObject::new()).kind(), "object");
    }

    #[test]
    fn test_json_shape() {
        let style = style_object! {
            "shadowOffset" => style_object! { "width" => 0, "height" => 2 },
            "shadowOpacity" => 0.1,
            "overflow" => "hidden",
            "visible" => true,
        };
        let json = serde_json::to_value(&style).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "shadowOffset": { "width": 0.0, "height": 2.0 },
                "shadowOpacity": 0.1,
                "overflow": "hidden",
                "visible": true,
            })
        );

        let back: StyleObject = serde_json::from_value(json).unwrap();
        assert_eq!(back, style);
    }
}
