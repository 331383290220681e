use std::path::PathBuf;

/// A locator-lookup annotation attached to a generated field, e.g.
/// `@FindBy(css = ".btn-login")`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatorAnnotation {
    /// Simple name of the annotation type
    pub annotation_type: String,

    /// Annotation member the locator binds to (`id`, `css`, `xpath`, ...)
    pub member: String,

    /// The lookup expression
    pub value: String,
}

/// One field of the generated class: a locatable element plus the
/// annotation that tells the target library how to find it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: String,

    /// The flavour's locatable element type, e.g. `WebElement`
    pub field_type: String,

    pub annotation: LocatorAnnotation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodKind {
    Constructor,
    Accessor,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub name: String,
    pub param_type: String,
}

/// One method of the generated class. Constructors carry no return type;
/// accessors return their field's type. Bodies are opaque statement text
/// supplied by the flavour builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDescriptor {
    pub name: String,
    pub kind: MethodKind,
    pub return_type: Option<String>,
    pub parameters: Vec<Parameter>,
    pub body: String,
}

/// Abstract, emitter-independent representation of one generated class.
/// Produced as an immutable value snapshot by a builder's `build` step;
/// field and method order is insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDescriptor {
    pub class_name: String,

    /// Fully qualified types the rendered source must import
    pub imports: Vec<String>,

    pub fields: Vec<FieldDescriptor>,
    pub methods: Vec<MethodDescriptor>,
}

/// Rendered source artifact: file content plus its path relative to the
/// output root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub relative_path: PathBuf,
    pub contents: String,
}
