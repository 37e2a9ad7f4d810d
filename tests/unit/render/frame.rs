use super::*;

fn temp_dir(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "stipple_{name}_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ))
}

#[test]
fn transparent_frame_is_zeroed() {
    let f = FrameRGBA::transparent(Canvas {
        width: 3,
        height: 2,
    });
    assert_eq!(f.data.len(), 24);
    assert!(f.data.iter().all(|&b| b == 0));
    assert_eq!(f.covered_pixels(), 0);
    assert_eq!(f.pixel(2, 1), Some([0, 0, 0, 0]));
    assert_eq!(f.pixel(3, 0), None);
}

#[test]
fn in_memory_surface_keeps_frames_in_order() {
    let mut s = InMemorySurface::new();
    let mut a = FrameRGBA::transparent(Canvas {
        width: 1,
        height: 1,
    });
    s.put_frame(&a).unwrap();
    a.data[3] = 9;
    s.put_frame(&a).unwrap();
    assert_eq!(s.frames().len(), 2);
    assert_eq!(s.frames()[0].data[3], 0);
    assert_eq!(s.last().unwrap().data[3], 9);
}

#[test]
fn png_sequence_writes_numbered_files() {
    let dir = temp_dir("png_sequence");
    let mut s = PngSequenceSurface::create(&dir).unwrap();
    let mut f = FrameRGBA::transparent(Canvas {
        width: 2,
        height: 2,
    });
    f.data[0..4].copy_from_slice(&[1, 2, 3, 255]);
    s.put_frame(&f).unwrap();
    s.put_frame(&f).unwrap();
    assert_eq!(s.written(), 2);

    let back = image::open(dir.join("frame_00001.png")).unwrap().to_rgba8();
    assert_eq!(back.dimensions(), (2, 2));
    assert_eq!(back.get_pixel(0, 0).0, [1, 2, 3, 255]);

    std::fs::remove_dir_all(&dir).ok();
}
