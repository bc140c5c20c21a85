//! Visual Diffusion Map example.
//!
//! Authenticates every (x, y) coordinate pair as a 16-byte message and plots
//! the first three tag bytes as an RGB pixel. A sound MAC yields uniform
//! noise; any visible structure would expose bias in the compression layers.
//! One image is generated per counter encoding to show the layouts produce
//! unrelated tag streams.
//!
//! Generates:
//! - `elimac_diffusion_compact.bmp`
//! - `elimac_diffusion_repeated.bmp`
//! - `elimac_diffusion_compact_le.bmp`

#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::fs::File;
use std::io::{BufWriter, Write};

use elimac::{CounterEncoding, Elimac};

const KEY1: [u8; 16] = [
    0x2b, 0x7e, 0x15, 0x16, 0x28, 0xae, 0xd2, 0xa6, 0xab, 0xf7, 0x15, 0x88, 0x09, 0xcf, 0x4f, 0x3c,
];
const KEY2: [u8; 16] = [
    0x3c, 0x4f, 0xcf, 0x09, 0x88, 0x15, 0xf7, 0xab, 0xa6, 0xd2, 0xae, 0x28, 0x16, 0x15, 0x7e, 0x2b,
];

const WIDTH: u32 = 512;
const HEIGHT: u32 = 512;

fn main() -> std::io::Result<()> {
    let maps = [
        (CounterEncoding::Compact, "elimac_diffusion_compact.bmp"),
        (CounterEncoding::Repeated, "elimac_diffusion_repeated.bmp"),
        (CounterEncoding::CompactLe, "elimac_diffusion_compact_le.bmp"),
    ];

    for (encoding, filename) in maps {
        println!(" Generating diffusion map for {encoding:?}...");
        let mac = Elimac::with_encoding(&KEY1, &KEY2, encoding);

        generate_image(filename, |x, y| {
            // Two-block message so the counter stream actually engages.
            let mut message = [0u8; 32];
            message[0..8].copy_from_slice(&u64::from(x).to_le_bytes());
            message[8..16].copy_from_slice(&u64::from(y).to_le_bytes());
            message[16..24].copy_from_slice(&u64::from(x ^ y).to_le_bytes());
            let tag = mac.tag(&message).unwrap();
            let bytes = tag.as_bytes();
            [bytes[0], bytes[1], bytes[2]]
        })?;
    }

    println!("✅ Done! Generated {} images.", maps.len());
    Ok(())
}

fn generate_image<F>(filename: &str, pixel: F) -> std::io::Result<()>
where
    F: Fn(u32, u32) -> [u8; 3],
{
    let file = File::create(filename)?;
    let mut writer = BufWriter::new(file);
    write_bmp_header(&mut writer)?;

    for y in 0..HEIGHT {
        for x in 0..WIDTH {
            let [r, g, b] = pixel(x, y);
            // BMP stores channels as BGR
            writer.write_all(&[b, g, r])?;
        }
    }

    Ok(())
}

/// 54-byte BMP header for a top-down 24-bit RGB image.
fn write_bmp_header<W: Write>(writer: &mut W) -> std::io::Result<()> {
    let image_size = WIDTH * HEIGHT * 3;
    let file_size = 54 + image_size;

    // File header (14 bytes)
    writer.write_all(b"BM")?;
    writer.write_all(&file_size.to_le_bytes())?;
    writer.write_all(&0u32.to_le_bytes())?; // reserved
    writer.write_all(&54u32.to_le_bytes())?; // pixel data offset

    // Info header (40 bytes); negative height marks the image top-down
    writer.write_all(&40u32.to_le_bytes())?;
    writer.write_all(&(WIDTH as i32).to_le_bytes())?;
    writer.write_all(&(-(HEIGHT as i32)).to_le_bytes())?;
    writer.write_all(&1u16.to_le_bytes())?; // planes
    writer.write_all(&24u16.to_le_bytes())?; // bits per pixel
    writer.write_all(&0u32.to_le_bytes())?; // compression
    writer.write_all(&image_size.to_le_bytes())?;
    writer.write_all(&0i32.to_le_bytes())?; // x pixels per meter
    writer.write_all(&0i32.to_le_bytes())?; // y pixels per meter
    writer.write_all(&0u32.to_le_bytes())?; // colors used
    writer.write_all(&0u32.to_le_bytes())?; // colors important

    Ok(())
}
