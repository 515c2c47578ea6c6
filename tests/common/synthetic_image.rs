use edge_detector::Buffer;

/// Generates a simple high-contrast checkerboard image.
pub fn checkerboard_u8(width: usize, height: usize, cell: usize) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(cell > 0, "cell size must be positive");

    let mut img = vec![0u8; width * height];
    for y in 0..height {
        for x in 0..width {
            let parity = (x / cell + y / cell) & 1;
            img[y * width + x] = if parity == 0 { 32 } else { 220 };
        }
    }
    img
}

/// Dark left half, bright right half: columns `>= split` hold `high`.
pub fn vertical_step_u8(width: usize, height: usize, split: usize, low: u8, high: u8) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    (0..width * height)
        .map(|i| if i % width >= split { high } else { low })
        .collect()
}

/// Bright axis-aligned square on a dark background.
pub fn square_u8(width: usize, height: usize, x0: usize, y0: usize, side: usize) -> Vec<u8> {
    assert!(x0 + side <= width && y0 + side <= height, "square must fit");
    let mut img = vec![16u8; width * height];
    for y in y0..y0 + side {
        img[y * width + x0..y * width + x0 + side].fill(230);
    }
    img
}

/// Wrap generated gray pixels in an unpadded single-channel buffer.
pub fn gray(width: usize, height: usize, data: Vec<u8>) -> Buffer {
    Buffer::from_raw(width, height, 1, data).expect("generator produced wrong length")
}

pub fn uniform(width: usize, height: usize, value: u8) -> Buffer {
    Buffer::filled(width, height, value)
}
