use serde::{Deserialize, Serialize};

/// Lookup strategies supported by the generated page objects. The wire
/// tokens (`id`, `css`, `xpath`, ...) match the locator annotation members
/// of the target automation library, so an unknown token is rejected
/// during deserialization rather than mapped to a default.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum LocatorType {
    Id,
    Name,
    ClassName,
    Css,
    TagName,
    LinkText,
    PartialLinkText,
    Xpath,
}

impl LocatorType {
    /// The annotation member this locator type binds to in generated code.
    pub fn member(&self) -> &'static str {
        match self {
            LocatorType::Id => "id",
            LocatorType::Name => "name",
            LocatorType::ClassName => "className",
            LocatorType::Css => "css",
            LocatorType::TagName => "tagName",
            LocatorType::LinkText => "linkText",
            LocatorType::PartialLinkText => "partialLinkText",
            LocatorType::Xpath => "xpath",
        }
    }
}

/// A named, locatable unit of a UI page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    /// Field name in the generated class; unique within a template
    pub name: String,

    /// Which lookup strategy resolves this element
    pub locator_type: LocatorType,

    /// The lookup expression (id value, CSS selector, XPath, ...)
    pub locator: String,
}

/// Canonical in-memory form of one template file. Deserialized from YAML
/// or JSON (one schema, two serializations) and consumed by exactly one
/// class builder.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PageObjectTemplate {
    /// Name of the generated class; unique per generation run
    pub class_name: String,

    /// Package the template declares for its class, appended to the
    /// generator's configured base package
    pub packages: String,

    /// Elements in declaration order; field and accessor order in the
    /// generated class follows this order
    pub elements: Vec<Element>,
}
