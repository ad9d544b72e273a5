//! Visual description of the storefront as plain data
//!
//! Each element role maps to an ordered list of CSS declarations. Components
//! render them as inline styles; nothing here knows about components.

/// Button color variant
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    Blue,
    /// Used when no variant is given
    #[default]
    Green,
}

/// Element roles that carry styling
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum StyleRole {
    Header,
    Container,
    ProductGrid,
    ProductCard,
    Banner,
    Button(ButtonVariant),
}

pub type Declarations = &'static [(&'static str, &'static str)];

const HEADER: Declarations = &[
    ("background", "#333"),
    ("color", "white"),
    ("padding", "1rem"),
    ("margin-bottom", "2rem"),
];

const CONTAINER: Declarations = &[
    ("max-width", "1200px"),
    ("margin", "0 auto"),
    ("padding", "20px"),
];

const PRODUCT_GRID: Declarations = &[
    ("display", "grid"),
    ("grid-template-columns", "repeat(auto-fill, minmax(250px, 1fr))"),
    ("gap", "20px"),
];

const PRODUCT_CARD: Declarations = &[
    ("border", "1px solid #ddd"),
    ("padding", "15px"),
    ("border-radius", "8px"),
    ("text-align", "center"),
];

const BANNER: Declarations = &[
    ("background", "#f8f9fa"),
    ("padding", "20px"),
    ("margin-bottom", "20px"),
    ("text-align", "center"),
];

const BUTTON_BLUE: Declarations = &[
    ("background", "#007bff"),
    ("color", "white"),
    ("border", "none"),
    ("padding", "10px 20px"),
    ("border-radius", "5px"),
    ("cursor", "pointer"),
];

const BUTTON_GREEN: Declarations = &[
    ("background", "#28a745"),
    ("color", "white"),
    ("border", "none"),
    ("padding", "10px 20px"),
    ("border-radius", "5px"),
    ("cursor", "pointer"),
];

pub fn declarations(role: StyleRole) -> Declarations {
    match role {
        StyleRole::Header => HEADER,
        StyleRole::Container => CONTAINER,
        StyleRole::ProductGrid => PRODUCT_GRID,
        StyleRole::ProductCard => PRODUCT_CARD,
        StyleRole::Banner => BANNER,
        StyleRole::Button(ButtonVariant::Blue) => BUTTON_BLUE,
        StyleRole::Button(ButtonVariant::Green) => BUTTON_GREEN,
    }
}

/// Render a role's declarations as an inline `style` value
pub fn inline_style(role: StyleRole) -> String {
    declarations(role)
        .iter()
        .map(|(property, value)| format!("{property}: {value};"))
        .collect::<Vec<_>>()
        .join(" ")
}
