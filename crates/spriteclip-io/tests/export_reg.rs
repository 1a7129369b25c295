//! Sprite sheet export regression test
//!
//! Run with:
//! ```
//! cargo test -p spriteclip-io --test export_reg
//! ```

use spriteclip_core::SpriteRecord;
use spriteclip_io::{ImageFormat, SpriteSheet, XmlExporter, read_image, sheet_to_xml, write_image};
use spriteclip_region::{Blob, detect};
use spriteclip_test::{RegParams, pix_from_pattern};

#[test]
fn export_xml_reg() {
    let mut rp = RegParams::new("export_xml");

    let pix = pix_from_pattern(&[
        "..........",
        ".##.......",
        ".##....#..",
        "......###.",
        "..........",
    ])
    .unwrap();
    let sheet = SpriteSheet::from_pix("walk.png", pix);

    let blobs = detect(&sheet, &sheet.full_region(), 1).unwrap();
    let records: Vec<SpriteRecord> = blobs.iter().map(Blob::to_record).collect();
    rp.compare_values(2.0, records.len() as f64, 0.0);

    let xml = sheet_to_xml(&sheet, "walk", &records);
    let expected = "<?xml version=\"1.0\"?>\n\
        <spritesheet image_name=\"walk.png\" width=\"10\" height=\"5\" ck_r=\"0\" ck_g=\"0\" ck_b=\"0\" >\n\
        \t<animation name=\"walk\">\n\
        \t\t<sprite name=\"sprite_1\">\n\
        \t\t\t<offset_x>1</offset_x>\n\
        \t\t\t<offset_y>1</offset_y>\n\
        \t\t\t<width>2</width>\n\
        \t\t\t<height>2</height>\n\
        \t\t\t<anchor_x>0</anchor_x>\n\
        \t\t\t<anchor_y>0</anchor_y>\n\
        \t\t</sprite>\n\
        \t\t<sprite name=\"sprite_2\">\n\
        \t\t\t<offset_x>6</offset_x>\n\
        \t\t\t<offset_y>2</offset_y>\n\
        \t\t\t<width>3</width>\n\
        \t\t\t<height>2</height>\n\
        \t\t\t<anchor_x>1</anchor_x>\n\
        \t\t\t<anchor_y>0</anchor_y>\n\
        \t\t</sprite>\n\
        \t</animation>\n\
        </spritesheet>";
    rp.compare_strings(expected.as_bytes(), xml.as_bytes());
    rp.write_data(xml.as_bytes(), "xml").unwrap();

    // Two animations through the exporter directly
    let mut exporter = XmlExporter::new();
    exporter.open_animation("idle");
    exporter.add_sprite(&records[0]);
    exporter.close_animation();
    exporter.open_animation("jump");
    exporter.add_sprite(&records[1]);
    exporter.close_animation();
    let (w, h) = (sheet.width(), sheet.height());
    let xml = exporter.get_xml(sheet.name(), w, h, sheet.color_key());
    rp.compare_values(2.0, xml.matches("<animation name=").count() as f64, 0.0);
    rp.compare_values(2.0, xml.matches("\t</animation>\n").count() as f64, 0.0);
    rp.compare_values(2.0, exporter.sprite_count() as f64, 0.0);

    assert!(rp.cleanup());
}

#[test]
fn export_sheet_roundtrip_reg() {
    let mut rp = RegParams::new("export_sheet");

    let pix = pix_from_pattern(&["....", ".#a.", "..b.", "...."]).unwrap();
    let path = rp.write_pix(&pix).unwrap();

    // The file decodes to the same pixels and the same colour key
    let back = read_image(&path).unwrap();
    rp.compare_pix(&pix, &back);

    let sheet = SpriteSheet::open(&path).unwrap();
    rp.compare_strings(b"export_sheet.01.png", sheet.name().as_bytes());
    rp.compare_values(0.0, sheet.background() as f64, 0.0);

    // Cut-outs of each blob survive a write and read
    let blobs = detect(&sheet, &sheet.full_region(), 1).unwrap();
    rp.compare_values(1.0, blobs.len() as f64, 0.0);
    let cut = sheet.cutout(&blobs[0].bounds()).unwrap();
    let cut_path = std::env::temp_dir().join("spriteclip_export_cut.png");
    write_image(&cut, &cut_path, ImageFormat::Png).unwrap();
    let cut_back = read_image(&cut_path).unwrap();
    rp.compare_pix(&cut, &cut_back);
    rp.compare_values(2.0, cut_back.width() as f64, 0.0);
    rp.compare_values(2.0, cut_back.height() as f64, 0.0);

    assert!(rp.cleanup());
}
