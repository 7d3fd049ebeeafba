use std::collections::HashSet;

use bmp_transform_rs::image_pipeline::{BmpReader, StandardBmpReader};

fn main() -> anyhow::Result<()> {
    let path = std::env::args().nth(1).unwrap_or_else(|| "output.bmp".to_string());
    let data = std::fs::read(&path)?;

    let reader = StandardBmpReader;
    let headers = reader.read_headers(&data)?;
    let info = headers.info;

    println!("File: {path}");
    println!("File size field: {} (actual {})", headers.file.file_size, data.len());
    println!("Pixel data offset: {}", headers.file.pixel_data_offset);
    println!(
        "Image: {}x{} ({}), {} bpp, compression {}",
        info.width,
        info.height,
        if info.is_top_down() { "top-down" } else { "bottom-up" },
        info.bits_per_pixel,
        info.compression
    );
    println!("Image size field: {}", info.image_size);

    if !info.is_supported() {
        anyhow::bail!("only 24/32-bit uncompressed BMP pixel data can be inspected");
    }

    let image = reader.read_image(&data, headers)?;
    let pixels = &image.pixels;
    println!("Stride: {} bytes", pixels.stride());

    let channel_names = ["B", "G", "R", "A"];
    let mut seen: Vec<HashSet<u8>> = vec![HashSet::new(); pixels.bytes_per_pixel()];
    let mut min = vec![u8::MAX; pixels.bytes_per_pixel()];
    let mut max = vec![u8::MIN; pixels.bytes_per_pixel()];

    // Sample every pixel
    for y in 0..pixels.height() {
        for x in 0..pixels.width() {
            for (c, &value) in pixels.pixel(x, y).iter().enumerate() {
                seen[c].insert(value);
                min[c] = min[c].min(value);
                max[c] = max[c].max(value);
            }
        }
    }

    println!("\nChannel statistics:");
    for c in 0..pixels.bytes_per_pixel() {
        let bits_needed = (seen[c].len().max(1) as f64).log2().ceil() as u32;
        println!(
            "  {}: range {}-{}, {} distinct values (~{} bits)",
            channel_names[c],
            min[c],
            max[c],
            seen[c].len(),
            bits_needed
        );
    }

    Ok(())
}
