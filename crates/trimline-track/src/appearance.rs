//! Per-item visual attributes handed to the render layer.

/// Opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ItemColor {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Colors cycled through by item index.
pub const ITEM_PALETTE: [ItemColor; 10] = [
    ItemColor::rgb(255, 0, 0),     // red
    ItemColor::rgb(0, 0, 255),     // blue
    ItemColor::rgb(0, 255, 0),     // green
    ItemColor::rgb(255, 255, 0),   // yellow
    ItemColor::rgb(128, 0, 128),   // purple
    ItemColor::rgb(153, 102, 51),  // brown
    ItemColor::rgb(0, 255, 255),   // cyan
    ItemColor::rgb(255, 0, 255),   // magenta
    ItemColor::rgb(255, 128, 0),   // orange
    ItemColor::rgb(85, 85, 85),    // dark gray
];

/// What a cell at some index should look like.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemAppearance {
    pub color: ItemColor,
    /// 1-based position label.
    pub label: String,
}

/// Appearance for the item at `index`. Pure function of the index.
pub fn configure_item(index: usize) -> ItemAppearance {
    ItemAppearance {
        color: ITEM_PALETTE[index % ITEM_PALETTE.len()],
        label: (index + 1).to_string(),
    }
}
