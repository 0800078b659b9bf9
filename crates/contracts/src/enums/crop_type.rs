use serde::{Deserialize, Serialize};

/// Crops covered by the partner's products
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CropType {
    Rice,
    Coffee,
    Pepper,
    Cashew,
    Rubber,
    Corn,
    Durian,
}

impl CropType {
    /// Wire code
    pub fn code(&self) -> &'static str {
        match self {
            CropType::Rice => "rice",
            CropType::Coffee => "coffee",
            CropType::Pepper => "pepper",
            CropType::Cashew => "cashew",
            CropType::Rubber => "rubber",
            CropType::Corn => "corn",
            CropType::Durian => "durian",
        }
    }

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            CropType::Rice => "Lúa",
            CropType::Coffee => "Cà phê",
            CropType::Pepper => "Hồ tiêu",
            CropType::Cashew => "Điều",
            CropType::Rubber => "Cao su",
            CropType::Corn => "Ngô",
            CropType::Durian => "Sầu riêng",
        }
    }

    pub fn all() -> Vec<CropType> {
        vec![
            CropType::Rice,
            CropType::Coffee,
            CropType::Pepper,
            CropType::Cashew,
            CropType::Rubber,
            CropType::Corn,
            CropType::Durian,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|c| c.code() == code)
    }

    /// Display name for a wire code, falling back to the code itself.
    pub fn label_for(code: &str) -> String {
        Self::from_code(code)
            .map(|c| c.display_name().to_string())
            .unwrap_or_else(|| code.to_string())
    }
}

impl std::fmt::Display for CropType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
