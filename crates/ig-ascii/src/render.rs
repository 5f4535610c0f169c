use ig_core::frame::{AsciiCanvas, GrayFrame};
use ig_core::ramp::RampLut;

/// Quantifie chaque sample de luminance via la LUT et assemble le canvas.
///
/// Le buffer de sortie est pré-alloué à `height × (width + 1)` pour éviter
/// la croissance quadratique d'une concaténation naïve. Une ligne de
/// `width` caractères, terminée par `\n`, par rangée de la grille.
///
/// # Example
/// ```
/// use ig_ascii::render::render;
/// use ig_core::frame::GrayFrame;
/// use ig_core::ramp::RampLut;
/// let frame = GrayFrame::from_raw(vec![0, 255], 2, 1).unwrap();
/// let lut = RampLut::new("AB").unwrap();
/// assert_eq!(render(&frame, &lut).as_str(), "AB\n");
/// ```
#[must_use]
pub fn render(frame: &GrayFrame, lut: &RampLut) -> AsciiCanvas {
    debug_assert!(frame.width > 0 && frame.height > 0, "empty frame");
    let width = frame.width as usize;
    let mut text = String::with_capacity(frame.height as usize * (width + 1));

    for row in frame.data.chunks_exact(width) {
        for &sample in row {
            text.push(lut.map(sample));
        }
        text.push('\n');
    }

    AsciiCanvas::new(text, frame.width, frame.height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ig_core::ramp::RAMP_CLASSIC;

    #[test]
    fn two_sample_grid_renders_extremes() {
        let frame = GrayFrame::from_raw(vec![0, 255], 2, 1).unwrap();
        let lut = RampLut::new("AB").unwrap();
        assert_eq!(render(&frame, &lut).as_str(), "AB\n");
    }

    #[test]
    fn canvas_is_rectangular() {
        let frame = GrayFrame::from_raw((0..=255).collect(), 16, 16).unwrap();
        let lut = RampLut::new(RAMP_CLASSIC).unwrap();
        let canvas = render(&frame, &lut);
        assert_eq!(canvas.height(), 16);
        assert_eq!(canvas.rows().count(), 16);
        for row in canvas.rows() {
            assert_eq!(row.chars().count(), 16);
        }
    }

    #[test]
    fn darkest_sample_maps_to_first_ramp_character() {
        let frame = GrayFrame::from_raw(vec![0; 4], 2, 2).unwrap();
        let lut = RampLut::new(RAMP_CLASSIC).unwrap();
        let canvas = render(&frame, &lut);
        assert!(canvas.rows().all(|row| row.chars().all(|c| c == '@')));
    }

    #[test]
    fn lightest_sample_maps_to_last_ramp_character() {
        let frame = GrayFrame::from_raw(vec![255; 4], 2, 2).unwrap();
        let lut = RampLut::new(RAMP_CLASSIC).unwrap();
        let canvas = render(&frame, &lut);
        assert!(canvas.rows().all(|row| row.chars().all(|c| c == ' ')));
    }

    #[test]
    fn single_character_ramp_fills_canvas() {
        let frame = GrayFrame::from_raw(vec![0, 90, 180, 255], 2, 2).unwrap();
        let lut = RampLut::new("#").unwrap();
        let canvas = render(&frame, &lut);
        assert_eq!(canvas.as_str(), "##\n##\n");
    }
}
