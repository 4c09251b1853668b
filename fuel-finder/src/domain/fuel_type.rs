//! Fuel types and their wire-format tokens.

use std::fmt;

/// Error returned when a wire token names no known fuel type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown fuel type: {0:?}")]
pub struct UnknownFuelType(pub String);

/// A fuel type the data source can filter by.
///
/// Each variant has a human-readable label and a distinct wire token, which
/// is what the remote API and the preference store expect.
///
/// # Examples
///
/// ```
/// use fuel_finder::domain::FuelType;
///
/// assert_eq!(FuelType::Gasoline95E5.label(), "95 E5");
/// assert_eq!(FuelType::Gasoline95E5.wire_token(), "95_E5");
/// assert_eq!(FuelType::from_wire_token("Gasoil_A"), Ok(FuelType::GasoilA));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FuelType {
    #[default]
    Gasoline95E5,
    Gasoline95E5Premium,
    Gasoline95E10,
    Gasoline98E5,
    Gasoline98E10,
    GasoilA,
    GasoilB,
    GasoilPremium,
    Biodiesel,
    Bioethanol,
    CompressedNaturalGas,
    LiquefiedNaturalGas,
    Lpg,
    Hydrogen,
}

impl FuelType {
    /// All fuel types in display order.
    pub const ALL: [FuelType; 14] = [
        FuelType::Gasoline95E5,
        FuelType::Gasoline95E5Premium,
        FuelType::Gasoline95E10,
        FuelType::Gasoline98E5,
        FuelType::Gasoline98E10,
        FuelType::GasoilA,
        FuelType::GasoilB,
        FuelType::GasoilPremium,
        FuelType::Biodiesel,
        FuelType::Bioethanol,
        FuelType::CompressedNaturalGas,
        FuelType::LiquefiedNaturalGas,
        FuelType::Lpg,
        FuelType::Hydrogen,
    ];

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            FuelType::Gasoline95E5 => "95 E5",
            FuelType::Gasoline95E5Premium => "95 E5 Premium",
            FuelType::Gasoline95E10 => "95 E10",
            FuelType::Gasoline98E5 => "98 E5",
            FuelType::Gasoline98E10 => "98 E10",
            FuelType::GasoilA => "Gasoil A",
            FuelType::GasoilB => "Gasoil B",
            FuelType::GasoilPremium => "Gasoil Premium",
            FuelType::Biodiesel => "Biodiesel",
            FuelType::Bioethanol => "Bioetanol",
            FuelType::CompressedNaturalGas => "Gas Natural Comprimido",
            FuelType::LiquefiedNaturalGas => "Gas Natural Licuado",
            FuelType::Lpg => "Gases licuados del petróleo",
            FuelType::Hydrogen => "Hidrógeno",
        }
    }

    /// Token the remote API uses for this fuel type.
    pub fn wire_token(&self) -> &'static str {
        match self {
            FuelType::Gasoline95E5 => "95_E5",
            FuelType::Gasoline95E5Premium => "95_E5_Premium",
            FuelType::Gasoline95E10 => "95_E10",
            FuelType::Gasoline98E5 => "98_E5",
            FuelType::Gasoline98E10 => "98_E10",
            FuelType::GasoilA => "Gasoil_A",
            FuelType::GasoilB => "Gasoil_B",
            FuelType::GasoilPremium => "Gasoil_Premium",
            FuelType::Biodiesel => "Biodiesel",
            FuelType::Bioethanol => "Bioetanol",
            FuelType::CompressedNaturalGas => "Gas_Natural_Comprimido",
            FuelType::LiquefiedNaturalGas => "Gas_Natural_Licuado",
            FuelType::Lpg => "Gases_licuados_del_petróleo",
            FuelType::Hydrogen => "Hidrógeno",
        }
    }

    /// Look up a fuel type by its wire token.
    pub fn from_wire_token(token: &str) -> Result<Self, UnknownFuelType> {
        Self::ALL
            .into_iter()
            .find(|f| f.wire_token() == token)
            .ok_or_else(|| UnknownFuelType(token.to_string()))
    }
}

impl fmt::Display for FuelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
