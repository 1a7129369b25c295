//! Sprite export record
//!
//! The flat per-sprite field set handed to serializers. Offsets are image
//! coordinates; the anchor is relative to the offset.

/// Export shape of one detected sprite.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SpriteRecord {
    /// Sprite name
    pub name: String,
    /// Left edge in the sheet
    pub offset_x: i32,
    /// Top edge in the sheet
    pub offset_y: i32,
    /// Width in pixels (inclusive count)
    pub width: i32,
    /// Height in pixels (inclusive count)
    pub height: i32,
    /// Anchor x, relative to `offset_x`
    pub anchor_x: i32,
    /// Anchor y, relative to `offset_y`
    pub anchor_y: i32,
}

impl SpriteRecord {
    /// The sprite's rectangle in sheet coordinates.
    pub fn bounds(&self) -> crate::Box {
        crate::Box::new_unchecked(self.offset_x, self.offset_y, self.width, self.height)
    }

    /// The anchor in sheet coordinates.
    pub fn absolute_anchor(&self) -> (i32, i32) {
        (self.offset_x + self.anchor_x, self.offset_y + self.anchor_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_anchor() {
        let rec = SpriteRecord {
            name: "sprite_1".to_string(),
            offset_x: 10,
            offset_y: 4,
            width: 3,
            height: 2,
            anchor_x: 1,
            anchor_y: 0,
        };
        assert_eq!(rec.absolute_anchor(), (11, 4));
        assert_eq!(rec.bounds(), crate::Box::new_unchecked(10, 4, 3, 2));
    }
}
