use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Tag categories exported as their own column.
#[derive(AsRefStr, Display, EnumString, EnumIter, Debug, PartialEq, Eq, Clone, Copy)]
pub enum TagCategory {
    Exterior,
    ItemSet,
    Quality,
    Rarity,
    Weapon,
}
