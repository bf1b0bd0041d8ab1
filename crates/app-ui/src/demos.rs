//! Demo content for the showroom
//!
//! Each [`Demo`] is one showroom section: a component name, a description
//! and its use cases. The catalog the drawer menu works from is projected
//! out of these with [`catalog`].

use crate::components::{
    ControlledToggle, DemoDivider, LabelPosition, SwitchAccessibilityMode, Toggle, ToggleStatus,
};
use crate::tokens::spacing;
use app_state::{Section, SectionCatalog};
use serde::Serialize;

/// Gap between stacked toggles in the demos
const TOGGLE_GAP: f32 = 24.0 * spacing::SCALE;

/// How a use case arranges its elements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UseCaseLayout {
    /// Stacked vertically
    #[default]
    Column,
    /// Wrapped in rows, three inputs per row
    Row,
}

/// One element rendered inside a use case
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DemoElement {
    /// Interactive toggle
    Toggle(ControlledToggle),
    /// Spacer
    Divider(DemoDivider),
    /// Centered helper caption
    Caption {
        /// Caption text
        text: String,
    },
}

impl DemoElement {
    fn caption(text: impl Into<String>) -> Self {
        DemoElement::Caption { text: text.into() }
    }
}

impl From<Toggle> for DemoElement {
    fn from(toggle: Toggle) -> Self {
        DemoElement::Toggle(ControlledToggle::new(toggle))
    }
}

impl From<DemoDivider> for DemoElement {
    fn from(divider: DemoDivider) -> Self {
        DemoElement::Divider(divider)
    }
}

/// A named example within a demo
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DemoUseCase {
    /// Use case name, listed in the drawer menu
    pub name: String,
    /// Explanation shown above the example
    pub description: String,
    /// Element arrangement
    pub layout: UseCaseLayout,
    /// Elements in display order
    pub elements: Vec<DemoElement>,
}

impl DemoUseCase {
    /// Create an empty column use case
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            layout: UseCaseLayout::Column,
            elements: Vec::new(),
        }
    }

    /// Set layout
    pub fn with_layout(mut self, layout: UseCaseLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Append an element
    pub fn push(mut self, element: impl Into<DemoElement>) -> Self {
        self.elements.push(element.into());
        self
    }

    /// All toggles in this use case
    pub fn toggles_mut(&mut self) -> impl Iterator<Item = &mut ControlledToggle> {
        self.elements.iter_mut().filter_map(|element| match element {
            DemoElement::Toggle(toggle) => Some(toggle),
            _ => None,
        })
    }
}

/// A showroom section
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Demo {
    /// Component name
    pub name: String,
    /// Component description
    pub description: String,
    /// Use cases in display order
    pub use_cases: Vec<DemoUseCase>,
}

impl Demo {
    /// Catalog entry for this demo
    pub fn section(&self) -> Section {
        self.use_cases.iter().fold(
            Section::new(self.name.clone(), self.description.clone()),
            |section, use_case| section.with_use_case(use_case.name.clone()),
        )
    }
}

/// Build the catalog the drawer menu and list work from
pub fn catalog(demos: &[Demo]) -> SectionCatalog {
    SectionCatalog::new(demos.iter().map(Demo::section))
}

/// All demos, in showroom order
pub fn all() -> Vec<Demo> {
    vec![toggle_demo()]
}

// =============================================================================
// Toggle Demo
// =============================================================================

/// Three toggles of each variant, for the row layouts
fn variant_row(value: bool, status: ToggleStatus) -> [DemoElement; 3] {
    [Toggle::checkbox(), Toggle::radio(), Toggle::switch()]
        .map(|toggle| toggle.with_value(value).with_status(status).into())
}

fn status_block(status: ToggleStatus, caption: &str) -> Vec<DemoElement> {
    let mut elements = Vec::new();
    elements.extend(variant_row(false, status));
    elements.push(DemoDivider::horizontal().full_width().into());
    elements.extend(variant_row(true, status));
    elements.push(DemoElement::caption(caption));
    elements
}

/// The Toggle demo
pub fn toggle_demo() -> Demo {
    let variants = DemoUseCase::new(
        "Variants",
        "The component supports a few different variants. If heavy customization of a specific variant is needed, it can be easily refactored. The default is `checkbox`.",
    )
    .push(
        Toggle::checkbox()
            .with_label("`checkbox` variant")
            .with_helper("This can be used for a single on/off input."),
    )
    .push(DemoDivider::horizontal().with_size(TOGGLE_GAP))
    .push(
        Toggle::radio()
            .with_label("`radio` variant")
            .with_helper("Use this when you have multiple options."),
    )
    .push(DemoDivider::horizontal().with_size(TOGGLE_GAP))
    .push(
        Toggle::switch()
            .with_label("`switch` variant")
            .with_helper("A more prominent on/off input. Has better accessibility support."),
    );

    let mut statuses = DemoUseCase::new(
        "Statuses",
        "There is a status prop - similar to `preset` in other components, but affects component functionality as well.",
    )
    .with_layout(UseCaseLayout::Row);
    statuses
        .elements
        .extend(status_block(ToggleStatus::None, "No status - this is the default"));
    statuses
        .elements
        .push(DemoDivider::horizontal().with_size(TOGGLE_GAP).full_width().into());
    statuses.elements.extend(status_block(
        ToggleStatus::Error,
        "Error status - use when there is an error",
    ));
    statuses
        .elements
        .push(DemoDivider::horizontal().with_size(TOGGLE_GAP).full_width().into());
    statuses.elements.extend(status_block(
        ToggleStatus::Disabled,
        "Disabled status - disables the editability and mutes input",
    ));

    let passing_content = DemoUseCase::new(
        "Passing Content",
        "There are a few different ways to pass content.",
    )
    .push(
        Toggle::checkbox()
            .with_value(true)
            .with_label("Via `label` prop")
            .with_helper("Via `helper` prop."),
    )
    .push(DemoDivider::horizontal().with_size(TOGGLE_GAP))
    .push(
        Toggle::radio()
            .with_value(true)
            .with_label_tx("demoShowroomScreen.demoViaSpecifiedTxProp")
            .with_helper_tx("demoShowroomScreen.demoViaSpecifiedTxProp"),
    )
    .push(DemoDivider::horizontal().with_size(TOGGLE_GAP))
    .push(
        Toggle::checkbox()
            .with_value(true)
            .with_label("Supports multiline - Nulla proident consectetur labore sunt ea labore. ")
            .with_editable(false),
    )
    .push(DemoDivider::horizontal().with_size(TOGGLE_GAP))
    .push(
        Toggle::radio()
            .with_value(true)
            .with_label("You can change sides - Laborum labore adipisicing in eu ipsum deserunt.")
            .with_label_position(LabelPosition::Left),
    )
    .push(DemoDivider::horizontal().with_size(TOGGLE_GAP))
    .push(
        Toggle::checkbox()
            .with_value(true)
            .with_status(ToggleStatus::Error)
            .with_checkbox_icon("ladybug")
            .with_label("Pass in a custom checkbox icon."),
    )
    .push(DemoDivider::horizontal().with_size(TOGGLE_GAP))
    .push(
        Toggle::switch()
            .with_value(true)
            .with_switch_accessibility_mode(SwitchAccessibilityMode::Text)
            .with_label("Switches can be read as text")
            .with_status(ToggleStatus::Error)
            .with_helper("By default, this option doesn't use `Text` since depending on the font, the on/off characters might look weird. Customize as needed."),
    )
    .push(DemoDivider::horizontal().with_size(TOGGLE_GAP))
    .push(
        Toggle::switch()
            .with_value(true)
            .with_label_position(LabelPosition::Left)
            .with_switch_accessibility_mode(SwitchAccessibilityMode::Icon)
            .with_label("Or aided with an icon"),
    );

    let mut styling = DemoUseCase::new("Styling", "The component can be styled easily.")
        .with_layout(UseCaseLayout::Row);
    for (value, caption) in [
        (false, "1 - style the input outer wrapper"),
        (true, "2 - style the input inner wrapper"),
        (true, "3 - style the input detail"),
    ] {
        styling.elements.extend(variant_row(value, ToggleStatus::None));
        styling.elements.push(DemoElement::caption(caption));
        styling.elements.push(DemoDivider::horizontal().full_width().into());
    }
    styling = styling
        .push(
            Toggle::radio()
                .with_value(true)
                .with_status(ToggleStatus::Error)
                .with_label("You can also style the label"),
        )
        .push(DemoDivider::horizontal().with_size(TOGGLE_GAP).full_width())
        .push(
            Toggle::radio()
                .with_value(true)
                .with_status(ToggleStatus::Error)
                .with_label_position(LabelPosition::Left)
                .with_label("Or, style the entire container"),
        );

    Demo {
        name: "Toggle".to_string(),
        description: "Renders a boolean input. This is a controlled component that requires an onValueChange callback that updates the value prop in order for the component to reflect user actions. If the value prop is not updated, the component will continue to render the supplied value prop instead of the expected result of any user actions.".to_string(),
        use_cases: vec![variants, statuses, passing_content, styling],
    }
}
