//! Pix and Box regression test
//!
//! Run with:
//! ```
//! cargo test -p spriteclip-core --test pix_reg
//! ```

use spriteclip_core::{Box, Pix, PixMut, PixelSource, color};
use spriteclip_test::{RegParams, pix_from_pattern};

#[test]
fn pix_clip_reg() {
    let mut rp = RegParams::new("pix_clip");

    let pix = pix_from_pattern(&[
        "........",
        "..ab....",
        "..cd....",
        "........",
    ])
    .unwrap();

    // A cut-out holds exactly the source pixels
    let cut = pix.clip_rectangle(&Box::new_unchecked(2, 1, 2, 2)).unwrap();
    rp.compare_values(2.0, cut.width() as f64, 0.0);
    rp.compare_values(2.0, cut.height() as f64, 0.0);
    let expected = pix_from_pattern(&["ab", "cd"]).unwrap();
    rp.compare_pix(&expected, &cut);

    // Cutting the whole image gives the image back
    let whole = pix
        .clip_rectangle(&Box::new_unchecked(0, 0, 8, 4))
        .unwrap();
    rp.compare_pix(&pix, &whole);

    // Rectangles sticking out are rejected, never shrunk
    let res = pix.clip_rectangle(&Box::new_unchecked(6, 2, 3, 3));
    rp.compare_values(1.0, res.is_err() as u8 as f64, 0.0);

    assert!(rp.cleanup());
}

#[test]
fn pix_source_reg() {
    let mut rp = RegParams::new("pix_source");

    let mut pm = PixMut::new(4, 4).unwrap();
    pm.set_all(color::compose_rgb(255, 0, 255));
    pm.set_rgb(1, 2, 0, 0, 0).unwrap();
    let pix: Pix = pm.into();

    // Background comes from the top-left pixel
    rp.compare_values(
        color::compose_rgb(255, 0, 255) as f64,
        pix.background() as f64,
        0.0,
    );
    let fg = (0..4)
        .flat_map(|y| (0..4).map(move |x| (x, y)))
        .filter(|&(x, y)| pix.is_foreground(pix.pixel_at(x, y)))
        .count();
    rp.compare_values(1.0, fg as f64, 0.0);

    // Shared clones see the same data; a mutable copy does not touch it
    let clone = pix.clone();
    rp.compare_values(2.0, pix.ref_count() as f64, 0.0);
    let mut copy = clone.to_mut();
    copy.set_pixel(0, 0, 0).unwrap();
    rp.compare_values(
        color::compose_rgb(255, 0, 255) as f64,
        pix.pixel_at(0, 0) as f64,
        0.0,
    );

    assert!(rp.cleanup());
}

#[test]
fn box_extent_reg() {
    let mut rp = RegParams::new("box_extent");

    // Inclusive corners give inclusive sizes
    let b = Box::from_extent(1, 1, 3, 3);
    rp.compare_values(3.0, b.w as f64, 0.0);
    rp.compare_values(3.0, b.h as f64, 0.0);
    rp.compare_values(4.0, b.right() as f64, 0.0);

    let single = Box::from_extent(2, 2, 2, 2);
    rp.compare_values(1.0, single.area() as f64, 0.0);

    rp.compare_values(1.0, b.fits_within(4, 4) as u8 as f64, 0.0);
    rp.compare_values(0.0, b.fits_within(3, 4) as u8 as f64, 0.0);
    rp.compare_values(
        0.0,
        Box::new_unchecked(-1, 0, 1, 1).fits_within(10, 10) as u8 as f64,
        0.0,
    );

    rp.compare_values(1.0, b.contains_box(&single) as u8 as f64, 0.0);

    assert!(rp.cleanup());
}
