//! Sprite sheet XML export
//!
//! The document lists the sheet's image name, size and colour key, then
//! one `<animation>` block per group of sprites:
//!
//! ```text
//! <?xml version="1.0"?>
//! <spritesheet image_name="hero.png" width="64" height="32" ck_r="255" ck_g="0" ck_b="255" >
//!     <animation name="idle">
//!         <sprite name="sprite_1">
//!             <offset_x>0</offset_x>
//!             ...
//!         </sprite>
//!     </animation>
//! </spritesheet>
//! ```
//!
//! Indentation is one tab per nesting level.

use crate::sheet::SpriteSheet;
use spriteclip_core::SpriteRecord;

/// Escape a string for use inside a double-quoted attribute.
pub fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Accumulates animations and sprites, then renders the full document.
#[derive(Debug, Clone, Default)]
pub struct XmlExporter {
    body: String,
    animation_open: bool,
    sprite_count: usize,
}

impl XmlExporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop everything added so far.
    pub fn clean(&mut self) {
        self.body.clear();
        self.animation_open = false;
        self.sprite_count = 0;
    }

    /// Start a new animation block, closing the current one if needed.
    pub fn open_animation(&mut self, name: &str) {
        if self.animation_open {
            self.close_animation();
        }
        self.body
            .push_str(&format!("\t<animation name=\"{}\">\n", escape_attr(name)));
        self.animation_open = true;
    }

    /// Close the current animation block. Does nothing if none is open.
    pub fn close_animation(&mut self) {
        if self.animation_open {
            self.body.push_str("\t</animation>\n");
            self.animation_open = false;
        }
    }

    /// Whether an animation block is open.
    pub fn is_animation_open(&self) -> bool {
        self.animation_open
    }

    /// Number of sprites added since the last [`clean`](Self::clean).
    pub fn sprite_count(&self) -> usize {
        self.sprite_count
    }

    /// Append one sprite to the current animation.
    pub fn add_sprite(&mut self, sprite: &SpriteRecord) {
        self.body.push_str(&format!(
            "\t\t<sprite name=\"{}\">\n\
             \t\t\t<offset_x>{}</offset_x>\n\
             \t\t\t<offset_y>{}</offset_y>\n\
             \t\t\t<width>{}</width>\n\
             \t\t\t<height>{}</height>\n\
             \t\t\t<anchor_x>{}</anchor_x>\n\
             \t\t\t<anchor_y>{}</anchor_y>\n\
             \t\t</sprite>\n",
            escape_attr(&sprite.name),
            sprite.offset_x,
            sprite.offset_y,
            sprite.width,
            sprite.height,
            sprite.anchor_x,
            sprite.anchor_y
        ));
        self.sprite_count += 1;
    }

    /// Append several sprites in order.
    pub fn add_sprites<'a, I>(&mut self, sprites: I)
    where
        I: IntoIterator<Item = &'a SpriteRecord>,
    {
        for sprite in sprites {
            self.add_sprite(sprite);
        }
    }

    /// Render the complete document.
    ///
    /// An animation left open is closed in the output; the exporter itself
    /// is not modified.
    pub fn get_xml(&self, sheet_name: &str, width: u32, height: u32, color_key: (u8, u8, u8)) -> String {
        let (r, g, b) = color_key;
        let mut xml = String::with_capacity(self.body.len() + 160);
        xml.push_str("<?xml version=\"1.0\"?>\n");
        xml.push_str(&format!(
            "<spritesheet image_name=\"{}\" width=\"{}\" height=\"{}\" ck_r=\"{}\" ck_g=\"{}\" ck_b=\"{}\" >\n",
            escape_attr(sheet_name),
            width,
            height,
            r,
            g,
            b
        ));
        xml.push_str(&self.body);
        if self.animation_open {
            xml.push_str("\t</animation>\n");
        }
        xml.push_str("</spritesheet>");
        xml
    }
}

/// Render `sprites` as a single animation of `sheet`.
pub fn sheet_to_xml(sheet: &SpriteSheet, animation: &str, sprites: &[SpriteRecord]) -> String {
    let mut exporter = XmlExporter::new();
    exporter.open_animation(animation);
    exporter.add_sprites(sprites);
    exporter.close_animation();
    exporter.get_xml(sheet.name(), sheet.width(), sheet.height(), sheet.color_key())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> SpriteRecord {
        SpriteRecord {
            name: name.to_string(),
            offset_x: 10,
            offset_y: 20,
            width: 3,
            height: 4,
            anchor_x: 1,
            anchor_y: 0,
        }
    }

    #[test]
    fn test_empty_document() {
        let xml = XmlExporter::new().get_xml("a.png", 5, 6, (1, 2, 3));
        assert_eq!(
            xml,
            "<?xml version=\"1.0\"?>\n\
             <spritesheet image_name=\"a.png\" width=\"5\" height=\"6\" ck_r=\"1\" ck_g=\"2\" ck_b=\"3\" >\n\
             </spritesheet>"
        );
    }

    #[test]
    fn test_sprite_block() {
        let mut ex = XmlExporter::new();
        ex.open_animation("walk");
        ex.add_sprite(&record("sprite_1"));
        ex.close_animation();
        let xml = ex.get_xml("s.png", 1, 1, (0, 0, 0));
        let expected_body = "\t<animation name=\"walk\">\n\
             \t\t<sprite name=\"sprite_1\">\n\
             \t\t\t<offset_x>10</offset_x>\n\
             \t\t\t<offset_y>20</offset_y>\n\
             \t\t\t<width>3</width>\n\
             \t\t\t<height>4</height>\n\
             \t\t\t<anchor_x>1</anchor_x>\n\
             \t\t\t<anchor_y>0</anchor_y>\n\
             \t\t</sprite>\n\
             \t</animation>\n";
        assert!(xml.contains(expected_body));
        assert!(xml.ends_with("</animation>\n</spritesheet>"));
        assert_eq!(ex.sprite_count(), 1);
    }

    #[test]
    fn test_attribute_escaping() {
        let mut ex = XmlExporter::new();
        ex.open_animation("a\"b<c>&'");
        let xml = ex.get_xml("x&y.png", 1, 1, (0, 0, 0));
        assert!(xml.contains("name=\"a&quot;b&lt;c&gt;&amp;&apos;\""));
        assert!(xml.contains("image_name=\"x&amp;y.png\""));
    }

    #[test]
    fn test_open_animation_closes_previous() {
        let mut ex = XmlExporter::new();
        ex.open_animation("one");
        ex.open_animation("two");
        assert!(ex.is_animation_open());
        let xml = ex.get_xml("s", 1, 1, (0, 0, 0));
        assert_eq!(xml.matches("<animation ").count(), 2);
        assert_eq!(xml.matches("</animation>").count(), 2);
        // Rendering does not close the exporter's animation
        assert!(ex.is_animation_open());
    }

    #[test]
    fn test_close_without_open_is_noop() {
        let mut ex = XmlExporter::new();
        ex.close_animation();
        assert!(!ex.get_xml("s", 1, 1, (0, 0, 0)).contains("animation"));
    }

    #[test]
    fn test_clean() {
        let mut ex = XmlExporter::new();
        ex.open_animation("a");
        ex.add_sprites(&[record("sprite_1"), record("sprite_2")]);
        assert_eq!(ex.sprite_count(), 2);
        ex.clean();
        assert_eq!(ex.sprite_count(), 0);
        assert!(!ex.is_animation_open());
        assert_eq!(
            ex.get_xml("s", 1, 1, (0, 0, 0)),
            XmlExporter::new().get_xml("s", 1, 1, (0, 0, 0))
        );

        // Reusable after cleaning
        ex.add_sprite(&record("sprite_3"));
        let xml = ex.get_xml("s", 1, 1, (0, 0, 0));
        assert_eq!(xml.matches("<sprite ").count(), 1);
        assert!(xml.contains("<sprite name=\"sprite_3\">"));
        assert!(!xml.contains("<animation"));
    }
}
