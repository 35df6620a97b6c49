//! Integer line rasterization (Bresenham).

/// Integer grid coordinate `(x, y)`.
pub type Pixel = (i64, i64);

/// Visit every pixel on the segment `from`–`to`, both endpoints included.
///
/// Iterates along the dominant axis (x and y roles are swapped for steep
/// lines) in increasing order, so the set of visited pixels does not depend
/// on the direction of the segment. Each pixel is visited exactly once.
pub fn bresenham(from: Pixel, to: Pixel, mut plot: impl FnMut(Pixel)) {
    let (mut x0, mut y0) = from;
    let (mut x1, mut y1) = to;

    let steep = (y1 - y0).abs() > (x1 - x0).abs();
    if steep {
        std::mem::swap(&mut x0, &mut y0);
        std::mem::swap(&mut x1, &mut y1);
    }
    if x0 > x1 {
        std::mem::swap(&mut x0, &mut x1);
        std::mem::swap(&mut y0, &mut y1);
    }

    let dx = x1 - x0;
    let dy = (y1 - y0).abs();
    let ystep = if y0 < y1 { 1 } else { -1 };
    let mut error = dx / 2;
    let mut y = y0;

    for x in x0..=x1 {
        if steep {
            plot((y, x));
        } else {
            plot((x, y));
        }
        error -= dy;
        if error < 0 {
            y += ystep;
            error += dx;
        }
    }
}
