use crate::builder::class_model::ClassDescriptor;
use crate::template::template_model::Element;

/// Stateful assembly contract for one generated class. One builder
/// instance serves exactly one template; concrete implementations exist
/// per supported (flavour, strategy) pair and are selected through
/// `factory::select`.
///
/// Calls chain through `&mut dyn ClassBuilder` returns:
///
/// ```ignore
/// builder.add_fields(&template.elements).add_constructor().add_getters();
/// let descriptor = builder.build();
/// ```
pub trait ClassBuilder: std::fmt::Debug {
    /// Append one field derived from `element`: field name is the element
    /// name, and the field carries a locator annotation built from the
    /// element's locator type and expression.
    fn add_field(&mut self, element: &Element) -> &mut dyn ClassBuilder;

    /// Append one field per element, preserving order.
    fn add_fields(&mut self, elements: &[Element]) -> &mut dyn ClassBuilder;

    /// Append the single constructor, whose body performs the flavour's
    /// element-binding initialization. Callers invoke this at most once
    /// per build.
    fn add_constructor(&mut self) -> &mut dyn ClassBuilder;

    /// Append one accessor per field held *at the time of this call*,
    /// named `get` + capitalized field name and returning the field.
    ///
    /// Precondition: call this after all `add_field`/`add_fields` calls.
    /// Fields added afterwards will not receive accessors.
    fn add_getters(&mut self) -> &mut dyn ClassBuilder;

    /// Snapshot the accumulated fields and methods into an immutable
    /// descriptor. Builder state is not invalidated: calling `build`
    /// twice yields descriptors with identical content.
    fn build(&self) -> ClassDescriptor;
}
