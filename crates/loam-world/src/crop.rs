//! Crop catalog and per-tile crop state.

use serde::{Deserialize, Serialize};

/// Plantable crop species.
///
/// Growth times and prices are fixed catalog data; the enum acts as an
/// immutable value table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CropKind {
    /// Fast, cheap starter crop.
    Wheat,
    /// Mid-tier crop.
    Tomato,
    /// Slow but valuable.
    Corn,
    /// Quick root vegetable.
    Carrot,
}

impl CropKind {
    /// Days from planting to maturity.
    #[must_use]
    pub const fn growth_time(self) -> u32 {
        match self {
            Self::Wheat => 3,
            Self::Tomato => 5,
            Self::Corn => 7,
            Self::Carrot => 4,
        }
    }

    /// Seed purchase price.
    #[must_use]
    pub const fn seed_cost(self) -> u32 {
        match self {
            Self::Wheat => 20,
            Self::Tomato => 30,
            Self::Corn => 50,
            Self::Carrot => 25,
        }
    }

    /// Sale price of the harvested crop.
    #[must_use]
    pub const fn sell_price(self) -> u32 {
        match self {
            Self::Wheat => 50,
            Self::Tomato => 80,
            Self::Corn => 120,
            Self::Carrot => 60,
        }
    }

    /// Display name of this crop.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Wheat => "Wheat",
            Self::Tomato => "Tomato",
            Self::Corn => "Corn",
            Self::Carrot => "Carrot",
        }
    }
}

/// A crop growing on a planted tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Crop {
    kind: CropKind,
    days_grown: u32,
    mature: bool,
}

impl Crop {
    /// Creates a freshly planted crop at zero growth.
    #[must_use]
    pub const fn new(kind: CropKind) -> Self {
        Self {
            kind,
            days_grown: 0,
            mature: false,
        }
    }

    /// Advances growth by one day, clamped at the species' growth time.
    pub fn grow(&mut self) {
        if self.mature {
            return;
        }
        self.days_grown += 1;
        if self.days_grown >= self.kind.growth_time() {
            self.days_grown = self.kind.growth_time();
            self.mature = true;
        }
    }

    /// Whether the crop is ready for harvest.
    #[must_use]
    pub const fn is_mature(&self) -> bool {
        self.mature
    }

    /// The crop species.
    #[must_use]
    pub const fn kind(&self) -> CropKind {
        self.kind
    }

    /// Days the crop has grown so far.
    #[must_use]
    pub const fn days_grown(&self) -> u32 {
        self.days_grown
    }

    /// Growth progress in `[0, 1]`.
    #[must_use]
    pub fn progress(&self) -> f64 {
        (f64::from(self.days_grown) / f64::from(self.kind.growth_time())).min(1.0)
    }
}
