//! Product customizer.
//!
//! The "Design Your Own" form for made-to-order apparel: garment, color,
//! size, an optional printed name and number, and an uploaded logo.
//! Committing the form adds one unit of the custom team jersey with the
//! selections recorded as the cart variant.

use crate::cart::Variant;
use crate::catalog::ImageRef;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Product ID every customizer commit is added under.
pub const CUSTOM_JERSEY_ID: &str = "ts-2001";

/// Base garments offered by the customizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BaseGarment {
    #[default]
    TeamJersey,
    PoloShirt,
    TShirt,
    Dress,
}

impl BaseGarment {
    pub fn display_name(&self) -> &'static str {
        match self {
            BaseGarment::TeamJersey => "Custom Team Jersey",
            BaseGarment::PoloShirt => "Custom Polo Shirt",
            BaseGarment::TShirt => "Custom T‑Shirt",
            BaseGarment::Dress => "Custom Dress",
        }
    }
}

/// Primary colors offered by the customizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum GarmentColor {
    #[default]
    Crimson,
    RoyalBlue,
    Emerald,
    Black,
    White,
}

impl GarmentColor {
    pub fn display_name(&self) -> &'static str {
        match self {
            GarmentColor::Crimson => "Crimson",
            GarmentColor::RoyalBlue => "Royal Blue",
            GarmentColor::Emerald => "Emerald",
            GarmentColor::Black => "Black",
            GarmentColor::White => "White",
        }
    }
}

/// Apparel sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum GarmentSize {
    Xs,
    S,
    #[default]
    M,
    L,
    Xl,
    Xxl,
}

impl GarmentSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            GarmentSize::Xs => "XS",
            GarmentSize::S => "S",
            GarmentSize::M => "M",
            GarmentSize::L => "L",
            GarmentSize::Xl => "XL",
            GarmentSize::Xxl => "2XL",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "XS" => Some(GarmentSize::Xs),
            "S" => Some(GarmentSize::S),
            "M" => Some(GarmentSize::M),
            "L" => Some(GarmentSize::L),
            "XL" => Some(GarmentSize::Xl),
            "2XL" => Some(GarmentSize::Xxl),
            _ => None,
        }
    }
}

/// The customizer form state.
///
/// Defaults mirror the storefront's initial selections: a crimson team
/// jersey in size M with nothing printed.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CustomizerForm {
    /// Base garment to produce.
    pub garment: BaseGarment,
    /// Primary color.
    pub color: GarmentColor,
    /// Player name to print, empty for none.
    pub name: String,
    /// Squad number to print, empty for none.
    pub number: String,
    /// Garment size.
    pub size: GarmentSize,
    /// Uploaded logo, if any.
    pub logo: Option<ImageRef>,
}

impl CustomizerForm {
    /// Build the cart variant for the current selections.
    ///
    /// The five printed attributes are recorded exactly as entered, empty
    /// values included, so identical selections merge into one cart line.
    /// The logo stays on the form and is not part of the variant.
    pub fn variant(&self) -> Variant {
        Variant::none()
            .with("product", self.garment.display_name())
            .with("color", self.color.display_name())
            .with("name", self.name.clone())
            .with("number", self.number.clone())
            .with("size", self.size.as_str())
    }
}

/// External capability that turns a local file into a displayable image
/// reference.
///
/// Hosts inject an implementation; the core never touches the filesystem
/// itself. `None` means no usable image was produced.
pub trait ImageCapture {
    fn capture(&mut self, file: &Path) -> Option<ImageRef>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_form_variant() {
        let variant = CustomizerForm::default().variant();
        assert_eq!(variant.get("product"), Some("Custom Team Jersey"));
        assert_eq!(variant.get("color"), Some("Crimson"));
        assert_eq!(variant.get("name"), Some(""));
        assert_eq!(variant.get("number"), Some(""));
        assert_eq!(variant.get("size"), Some("M"));
        assert_eq!(variant.iter().count(), 5);
    }

    #[test]
    fn test_identical_forms_build_equal_variants() {
        let mut a = CustomizerForm::default();
        a.name = "A. Rahman".to_string();
        a.number = "10".to_string();

        let mut b = CustomizerForm::default();
        b.name = "A. Rahman".to_string();
        b.number = "10".to_string();

        assert_eq!(a.variant(), b.variant());

        b.color = GarmentColor::Emerald;
        assert_ne!(a.variant(), b.variant());
    }

    #[test]
    fn test_logo_is_not_part_of_the_variant() {
        let mut form = CustomizerForm::default();
        let without_logo = form.variant();
        form.logo = Some(ImageRef::new("blob:logo"));
        assert_eq!(form.variant(), without_logo);
    }

    #[test]
    fn test_size_from_str() {
        assert_eq!(GarmentSize::from_str("2xl"), Some(GarmentSize::Xxl));
        assert_eq!(GarmentSize::from_str("m"), Some(GarmentSize::M));
        assert_eq!(GarmentSize::from_str("XXS"), None);
    }
}
