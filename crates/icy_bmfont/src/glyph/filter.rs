use super::TrimBox;

/// 3x3 binomial kernel, sums to 16.
const KERNEL: [[u32; 3]; 3] = [[1, 2, 1], [2, 4, 2], [1, 2, 1]];

/// Runs the reconstruction filter over the trimmed region of a cell plane.
///
/// Samples are taken from the full (untrimmed) cell so content just outside
/// the trim box still contributes. Samples outside the cell count as zero.
/// Each output is `(sum + 8) >> 4`.
pub fn reconstruct(source: &[u8], cell_width: usize, cell_height: usize, bounds: TrimBox) -> Vec<u8> {
    let mut out = vec![0; bounds.width * bounds.height];

    for y in 0..bounds.height {
        for x in 0..bounds.width {
            let cx = (bounds.min_x + x) as isize;
            let cy = (bounds.min_y + y) as isize;
            let mut acc = 0;
            for (ky, row) in KERNEL.iter().enumerate() {
                for (kx, weight) in row.iter().enumerate() {
                    let sx = cx + kx as isize - 1;
                    let sy = cy + ky as isize - 1;
                    if sx < 0 || sy < 0 || sx >= cell_width as isize || sy >= cell_height as isize {
                        continue;
                    }
                    let idx = sy as usize * cell_width + sx as usize;
                    acc += weight * source.get(idx).copied().unwrap_or(0) as u32;
                }
            }
            out[y * bounds.width + x] = ((acc + 8) >> 4) as u8;
        }
    }

    out
}
