//! SVG rasterization and PNG encoding.
//!
//! The chart SVG is parsed with usvg, rendered through resvg into a
//! tiny-skia pixmap, and encoded here. Two encoding modes:
//! - indexed PNG (color type 3) when the image has <=256 unique colors,
//!   which a flat-color chart usually does
//! - RGBA PNG (color type 6) as the fallback

use std::collections::HashMap;
use std::io::Write;

use heatmap_common::{HeatmapError, HeatmapResult};

/// Maximum colors for indexed PNG (PNG8)
const MAX_PALETTE_SIZE: usize = 256;

/// Rasterize an SVG document to PNG bytes at the given pixel size.
pub fn rasterize(svg: &str, width: u32, height: u32) -> HeatmapResult<Vec<u8>> {
    let mut options = usvg::Options::default();
    options.fontdb_mut().load_system_fonts();

    let tree = usvg::Tree::from_str(svg, &options)
        .map_err(|e| HeatmapError::Raster(format!("SVG parse failed: {}", e)))?;

    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| HeatmapError::Raster(format!("invalid canvas size {}x{}", width, height)))?;
    pixmap.fill(tiny_skia::Color::WHITE);

    resvg::render(&tree, tiny_skia::Transform::identity(), &mut pixmap.as_mut());

    // tiny-skia stores premultiplied alpha; undo it before encoding.
    let mut pixels = Vec::with_capacity(width as usize * height as usize * 4);
    for pixel in pixmap.pixels() {
        let color = pixel.demultiply();
        pixels.extend_from_slice(&[color.red(), color.green(), color.blue(), color.alpha()]);
    }

    encode_png(&pixels, width as usize, height as usize)
}

/// Encode RGBA pixels as PNG, choosing indexed or RGBA mode automatically.
pub fn encode_png(pixels: &[u8], width: usize, height: usize) -> HeatmapResult<Vec<u8>> {
    match extract_palette(pixels) {
        Some((palette, indices)) => encode_indexed(width, height, &palette, &indices),
        None => encode_rgba(pixels, width, height),
    }
}

/// Pack RGBA bytes into a u32 for hashing.
#[inline]
fn pack_color(pixel: &[u8]) -> u32 {
    (pixel[0] as u32)
        | ((pixel[1] as u32) << 8)
        | ((pixel[2] as u32) << 16)
        | ((pixel[3] as u32) << 24)
}

/// Map each pixel to a palette index; None when >256 unique colors.
fn extract_palette(pixels: &[u8]) -> Option<(Vec<[u8; 4]>, Vec<u8>)> {
    let mut color_to_index: HashMap<u32, u8> = HashMap::with_capacity(MAX_PALETTE_SIZE);
    let mut palette: Vec<[u8; 4]> = Vec::with_capacity(MAX_PALETTE_SIZE);
    let mut indices: Vec<u8> = Vec::with_capacity(pixels.len() / 4);

    for pixel in pixels.chunks_exact(4) {
        let packed = pack_color(pixel);
        let index = match color_to_index.get(&packed) {
            Some(&index) => index,
            None => {
                if palette.len() >= MAX_PALETTE_SIZE {
                    return None;
                }
                let index = palette.len() as u8;
                palette.push([pixel[0], pixel[1], pixel[2], pixel[3]]);
                color_to_index.insert(packed, index);
                index
            }
        };
        indices.push(index);
    }

    Some((palette, indices))
}

fn encode_indexed(
    width: usize,
    height: usize,
    palette: &[[u8; 4]],
    indices: &[u8],
) -> HeatmapResult<Vec<u8>> {
    let mut png = Vec::new();
    png.extend_from_slice(&[137, 80, 78, 71, 13, 10, 26, 10]);

    write_chunk(&mut png, b"IHDR", &ihdr_data(width, height, 3));

    let mut plte_data = Vec::with_capacity(palette.len() * 3);
    for [r, g, b, _] in palette {
        plte_data.extend_from_slice(&[*r, *g, *b]);
    }
    write_chunk(&mut png, b"PLTE", &plte_data);

    // tRNS only when some palette entry is translucent
    if palette.iter().any(|[_, _, _, a]| *a < 255) {
        let trns_data: Vec<u8> = palette.iter().map(|[_, _, _, a]| *a).collect();
        write_chunk(&mut png, b"tRNS", &trns_data);
    }

    let idat_data = deflate_scanlines(indices, width, height, 1)?;
    write_chunk(&mut png, b"IDAT", &idat_data);
    write_chunk(&mut png, b"IEND", &[]);

    Ok(png)
}

fn encode_rgba(pixels: &[u8], width: usize, height: usize) -> HeatmapResult<Vec<u8>> {
    let mut png = Vec::new();
    png.extend_from_slice(&[137, 80, 78, 71, 13, 10, 26, 10]);

    write_chunk(&mut png, b"IHDR", &ihdr_data(width, height, 6));

    let idat_data = deflate_scanlines(pixels, width, height, 4)?;
    write_chunk(&mut png, b"IDAT", &idat_data);
    write_chunk(&mut png, b"IEND", &[]);

    Ok(png)
}

fn ihdr_data(width: usize, height: usize, color_type: u8) -> Vec<u8> {
    let mut data = Vec::with_capacity(13);
    data.extend_from_slice(&(width as u32).to_be_bytes());
    data.extend_from_slice(&(height as u32).to_be_bytes());
    data.push(8); // bit depth
    data.push(color_type);
    data.push(0); // compression method
    data.push(0); // filter method
    data.push(0); // interlace method
    data
}

/// Prefix each scanline with a filter byte (0 = none) and zlib-compress.
fn deflate_scanlines(
    data: &[u8],
    width: usize,
    height: usize,
    bytes_per_pixel: usize,
) -> HeatmapResult<Vec<u8>> {
    let row_bytes = width * bytes_per_pixel;
    let mut uncompressed = Vec::with_capacity(height * (1 + row_bytes));
    for y in 0..height {
        uncompressed.push(0);
        let row_start = y * row_bytes;
        uncompressed.extend_from_slice(&data[row_start..row_start + row_bytes]);
    }

    let mut encoder = flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::fast());
    encoder
        .write_all(&uncompressed)
        .map_err(|e| HeatmapError::Raster(format!("IDAT compression failed: {}", e)))?;
    encoder
        .finish()
        .map_err(|e| HeatmapError::Raster(format!("IDAT compression failed: {}", e)))
}

fn write_chunk(png: &mut Vec<u8>, chunk_type: &[u8; 4], data: &[u8]) {
    png.extend_from_slice(&(data.len() as u32).to_be_bytes());
    png.extend_from_slice(chunk_type);
    png.extend_from_slice(data);

    let mut hasher = crc32fast::Hasher::new();
    hasher.update(chunk_type);
    hasher.update(data);
    png.extend_from_slice(&hasher.finalize().to_be_bytes());
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

    // Color type lives at a fixed offset: signature (8) + IHDR length (4)
    // + IHDR type (4) + width (4) + height (4) + bit depth (1).
    const COLOR_TYPE_OFFSET: usize = 25;

    #[test]
    fn test_flat_image_uses_indexed_mode() {
        let mut pixels = Vec::new();
        for i in 0..16 {
            if i % 2 == 0 {
                pixels.extend_from_slice(&[255, 0, 0, 255]);
            } else {
                pixels.extend_from_slice(&[0, 0, 255, 255]);
            }
        }

        let png = encode_png(&pixels, 4, 4).unwrap();
        assert_eq!(&png[..8], &PNG_SIGNATURE);
        assert_eq!(png[COLOR_TYPE_OFFSET], 3);
    }

    #[test]
    fn test_many_colors_fall_back_to_rgba() {
        // 300 unique colors on a 20x15 canvas
        let mut pixels = Vec::new();
        for i in 0..300u32 {
            pixels.extend_from_slice(&[(i % 256) as u8, (i / 256) as u8, 7, 255]);
        }

        let png = encode_png(&pixels, 20, 15).unwrap();
        assert_eq!(&png[..8], &PNG_SIGNATURE);
        assert_eq!(png[COLOR_TYPE_OFFSET], 6);
    }

    #[test]
    fn test_palette_keeps_transparency() {
        let pixels = [255, 0, 0, 255, 0, 0, 0, 0];
        let (palette, indices) = extract_palette(&pixels).unwrap();
        assert_eq!(palette.len(), 2);
        assert_eq!(indices.len(), 2);
        assert!(palette.iter().any(|[_, _, _, a]| *a == 0));
    }
}
