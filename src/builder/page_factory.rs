use crate::builder::class_builder::ClassBuilder;
use crate::builder::class_model::{
    ClassDescriptor, FieldDescriptor, LocatorAnnotation, MethodDescriptor, MethodKind, Parameter,
};
use crate::template::template_model::Element;

const ELEMENT_TYPE: &str = "WebElement";
const DRIVER_TYPE: &str = "WebDriver";
const LOCATOR_ANNOTATION: &str = "FindBy";

const IMPORTS: [&str; 4] = [
    "org.openqa.selenium.WebDriver",
    "org.openqa.selenium.WebElement",
    "org.openqa.selenium.support.FindBy",
    "org.openqa.selenium.support.PageFactory",
];

/// Builder for the Selenium flavour with the PageFactory strategy:
/// `WebElement` fields annotated with `@FindBy`, and a constructor that
/// wires the fields to their locators through
/// `PageFactory.initElements(driver, this)`.
#[derive(Debug)]
pub struct PageFactoryBuilder {
    class_name: String,
    fields: Vec<FieldDescriptor>,
    methods: Vec<MethodDescriptor>,
}

impl PageFactoryBuilder {
    pub fn new(class_name: &str) -> Self {
        Self {
            class_name: class_name.to_string(),
            fields: Vec::new(),
            methods: Vec::new(),
        }
    }
}

impl ClassBuilder for PageFactoryBuilder {
    fn add_field(&mut self, element: &Element) -> &mut dyn ClassBuilder {
        self.fields.push(FieldDescriptor {
            name: element.name.clone(),
            field_type: ELEMENT_TYPE.to_string(),
            annotation: LocatorAnnotation {
                annotation_type: LOCATOR_ANNOTATION.to_string(),
                member: element.locator_type.member().to_string(),
                value: element.locator.clone(),
            },
        });
        self
    }

    fn add_fields(&mut self, elements: &[Element]) -> &mut dyn ClassBuilder {
        for element in elements {
            self.add_field(element);
        }
        self
    }

    fn add_constructor(&mut self) -> &mut dyn ClassBuilder {
        self.methods.push(MethodDescriptor {
            name: self.class_name.clone(),
            kind: MethodKind::Constructor,
            return_type: None,
            parameters: vec![Parameter {
                name: "driver".to_string(),
                param_type: DRIVER_TYPE.to_string(),
            }],
            body: "PageFactory.initElements(driver, this);".to_string(),
        });
        self
    }

    fn add_getters(&mut self) -> &mut dyn ClassBuilder {
        let accessors: Vec<MethodDescriptor> = self
            .fields
            .iter()
            .map(|field| MethodDescriptor {
                name: format!("get{}", capitalize(&field.name)),
                kind: MethodKind::Accessor,
                return_type: Some(field.field_type.clone()),
                parameters: Vec::new(),
                body: format!("return {};", field.name),
            })
            .collect();
        self.methods.extend(accessors);
        self
    }

    fn build(&self) -> ClassDescriptor {
        ClassDescriptor {
            class_name: self.class_name.clone(),
            imports: IMPORTS.iter().map(|i| i.to_string()).collect(),
            fields: self.fields.clone(),
            methods: self.methods.clone(),
        }
    }
}

/// Uppercase the first character, leave the rest untouched:
/// `loginBtn` becomes `LoginBtn`, not `LoginBTN` or `Loginbtn`.
fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
