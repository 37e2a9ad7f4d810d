use std::io::Cursor;

use super::*;

fn png_bytes(width: u32, height: u32, rgba: Vec<u8>) -> Vec<u8> {
    let img = image::RgbaImage::from_raw(width, height, rgba).unwrap();
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

#[test]
fn decode_png_keeps_straight_alpha() {
    let buf = png_bytes(2, 1, vec![100, 50, 200, 128, 0, 0, 0, 0]);
    let decoded = decode_image(&buf).unwrap();
    assert_eq!((decoded.width, decoded.height), (2, 1));
    assert_eq!(decoded.rgba8.as_slice(), &[100, 50, 200, 128, 0, 0, 0, 0]);

    let raster = decoded.read_rgba().unwrap();
    assert_eq!(raster.data(), decoded.rgba8.as_slice());
}

#[test]
fn decode_rejects_garbage() {
    assert!(decode_image(b"not an image").is_err());
}

#[test]
fn load_missing_file_reports_path() {
    let err = load_image(Path::new("definitely/missing.png")).unwrap_err();
    assert!(err.to_string().contains("definitely/missing.png"));
}
